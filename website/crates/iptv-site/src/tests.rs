//! Tests for the website: form validation, notices and the HTTP surface.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use iptv_types::{
    Audience, MessageChannel, OrderId, OrderStatus, PlanId, Price, SubscriptionId,
    SubscriptionStatus, UserId, UserStatus,
};
use tower::ServiceExt;

use crate::{
    config::{MockOp, SiteConfig},
    content::ShowcaseTab,
    forms::{CheckoutForm, HomeQuery, PlanForm, RegisterForm, SubscriptionForm, is_email},
    handlers::strip_notice,
    notice::Notice,
    router::create_router,
    state::AppState,
    templates::ChartBar,
};

fn app() -> (AppState, Router) {
    let state = AppState::new(SiteConfig::default().without_latency());
    let router = create_router(state.clone());
    (state, router)
}

async fn send(router: &Router, request: Request<Body>) -> Response {
    router.clone().oneshot(request).await.expect("router is infallible")
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).expect("valid request")
}

fn post(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).expect("valid request")
}

async fn text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("redirect location")
}

/// `name=value` part of the response's `Set-Cookie` header.
fn session_cookie(response: &Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .expect("session cookie")
        .to_string()
}

fn post_from(uri: &str, body: &str, cookie: &str, referer: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::COOKIE, cookie)
        .header(header::REFERER, referer)
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

/// Token part of a `name=token` cookie.
fn token(cookie: &str) -> &str {
    cookie.split_once('=').map_or("", |(_, token)| token)
}

async fn customer_login(router: &Router) -> String {
    let response = send(router, post("/login", "email=john@example.com&password=secret1", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard?notice=logged-in");
    session_cookie(&response)
}

async fn admin_login(router: &Router) -> String {
    let response = send(router, post("/admin/login", "email=admin@iptvpro.com&password=admin123", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/dashboard?notice=admin-logged-in");
    session_cookie(&response)
}

const CARD_CHECKOUT: &str = "first_name=John&last_name=Doe&email=john@example.com&phone=5551234567\
    &address=123+Main+Street&city=Springfield&country=US&zip_code=10001&payment_method=card\
    &card_name=John+Doe&card_number=4242+4242+4242+4242&expiry_date=12/30&cvv=123&terms=on";

// ============================================================================
// Forms
// ============================================================================

#[test]
fn test_email_shapes() {
    assert!(is_email("john@example.com"));
    assert!(is_email("first.last@mail.example.co"));
    assert!(!is_email("john@"));
    assert!(!is_email("john@example"));
    assert!(!is_email("jo hn@example.com"));
    assert!(!is_email("john@@example.com"));
    assert!(!is_email("@example.com"));
}

#[test]
fn test_register_form_checks_password_confirmation() {
    let form = RegisterForm {
        name: "Jo".to_string(),
        email: "jo@example.com".to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret2".to_string(),
    };
    let errors = form.validate().expect_err("mismatched passwords");
    assert_eq!(errors.get("confirm_password"), Some("Passwords do not match"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_checkout_form_skips_card_fields_for_paypal() {
    let form = CheckoutForm {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john@example.com".to_string(),
        phone: "5551234567".to_string(),
        address: "123 Main Street".to_string(),
        city: "Springfield".to_string(),
        country: "US".to_string(),
        zip_code: "10001".to_string(),
        payment_method: "paypal".to_string(),
        terms: "on".to_string(),
        ..CheckoutForm::default()
    };
    assert!(form.validate().is_ok());

    let by_card = CheckoutForm { payment_method: "card".to_string(), ..form };
    let errors = by_card.validate().expect_err("card details missing");
    assert!(errors.get("card_number").is_some());
    assert!(errors.get("expiry_date").is_some());
    assert!(errors.get("cvv").is_some());
}

#[test]
fn test_checkout_form_requires_terms() {
    let form = CheckoutForm {
        payment_method: "paypal".to_string(),
        ..CheckoutForm::prefilled("John", "Doe", "john@example.com")
    };
    let errors = form.validate().expect_err("incomplete form");
    assert_eq!(errors.get("terms"), Some("You must accept the terms and conditions"));
}

#[test]
fn test_plan_form_trims_feature_lines() {
    let form = PlanForm {
        name: "Weekend".to_string(),
        duration: "1".to_string(),
        price: "4.99".to_string(),
        features: "  HD streams \n\n1 device\n".to_string(),
        ..PlanForm::default()
    };
    let plan = form.validate().expect("valid plan");
    assert_eq!(plan.features, vec!["HD streams".to_string(), "1 device".to_string()]);
    assert_eq!(plan.original_price, None);
}

#[test]
fn test_faq_open_panel() {
    let query = |faq, close| HomeQuery { faq, close, ..HomeQuery::default() };

    assert_eq!(query(None, None).open_panel(5), Some(0));
    assert_eq!(query(Some(3), None).open_panel(5), Some(3));
    assert_eq!(query(Some(3), Some(1)).open_panel(5), None);
    assert_eq!(query(Some(9), None).open_panel(5), Some(0));
    assert_eq!(query(None, None).open_panel(0), None);
}

#[test]
fn test_showcase_tab_falls_back_to_movies() {
    assert_eq!(ShowcaseTab::from_query("series"), ShowcaseTab::Series);
    assert_eq!(ShowcaseTab::from_query("sports"), ShowcaseTab::Sports);
    assert_eq!(ShowcaseTab::from_query("cartoons"), ShowcaseTab::Movies);
    assert_eq!(ShowcaseTab::from_query(""), ShowcaseTab::Movies);
}

#[test]
fn test_home_links_keep_widget_state() {
    assert_eq!(HomeQuery::href(ShowcaseTab::Movies, None, "showcase"), "/#showcase");
    assert_eq!(
        HomeQuery::href(ShowcaseTab::Sports, Some((2, false)), "showcase"),
        "/?showcase=sports&faq=2#showcase"
    );
    assert_eq!(
        HomeQuery::href(ShowcaseTab::Series, Some((1, true)), "faq"),
        "/?showcase=series&faq=1&close=1#faq"
    );
}

#[test]
fn test_price_fields_reject_amounts_above_ceiling() {
    let form = PlanForm {
        name: "Whale".to_string(),
        duration: "1".to_string(),
        price: "150000000000000".to_string(),
        features: "HD".to_string(),
        ..PlanForm::default()
    };
    let errors = form.validate().expect_err("price above ceiling");
    assert_eq!(errors.get("price"), Some("Price must be positive"));
}

#[test]
fn test_chart_bars_scale_without_overflow() {
    let bar = |value, max| ChartBar::scaled("Jun", value, max, String::new(), String::new()).percent;
    assert_eq!(bar(u64::MAX, u64::MAX), 100);
    assert_eq!(bar(u64::MAX / 2, u64::MAX), 49);
    assert_eq!(bar(5, 0), 0);
}

#[test]
fn test_subscription_form_unticked_auto_renew_is_off() {
    let form: SubscriptionForm = serde_json::from_str(
        r#"{"user_id":"2","plan_id":"monthly","plan_name":"Monthly","price":"24.99","duration":"1","max_devices":"2"}"#,
    )
    .expect("form body");
    assert!(!form.auto_renew_checked());
    assert!(SubscriptionForm::blank().auto_renew_checked());
}

// ============================================================================
// Notices and redirects
// ============================================================================

#[test]
fn test_notice_slugs_parse_back() {
    let notices = [
        Notice::LoggedIn,
        Notice::PaymentSuccessful,
        Notice::UserStatusUpdated(UserStatus::Banned),
        Notice::OrderStatusUpdated(OrderStatus::Refunded),
        Notice::MessageSent(MessageChannel::WhatsApp),
        Notice::BroadcastSent { recipients: 12, channel: MessageChannel::Email },
        Notice::PromotionSent { recipients: 3 },
        Notice::PlanDeleteFailed,
        Notice::SubscriptionUpdateFailed,
    ];
    for notice in notices {
        assert_eq!(Notice::from_slug(&notice.slug()), Some(notice), "{}", notice.slug());
    }
    assert_eq!(Notice::from_slug("user-status-deleted"), None);
    assert_eq!(Notice::from_slug("broadcast-fax-3"), None);
    assert_eq!(Notice::from_slug(""), None);
}

#[test]
fn test_notice_messages() {
    assert_eq!(
        Notice::BroadcastSent { recipients: 2, channel: MessageChannel::WhatsApp }.message(),
        "Message sent to 2 users via WhatsApp!"
    );
    assert_eq!(Notice::UserStatusUpdated(UserStatus::Suspended).message(), "User status updated to suspended");
    assert_eq!(Notice::MessageFailed.toast().kind, "error");
    assert_eq!(Notice::SubscriptionUpdateFailed.toast().kind, "error");
    assert_eq!(Notice::ProfileUpdated.toast().kind, "success");
}

#[test]
fn test_strip_notice() {
    assert_eq!(strip_notice("/admin/users"), "/admin/users");
    assert_eq!(strip_notice("/admin/users?notice=user-deleted"), "/admin/users");
    assert_eq!(strip_notice("/admin/users?q=john&notice=user-deleted&status=active"), "/admin/users?q=john&status=active");
}

#[test]
fn test_latency_can_be_disabled() {
    assert!(!SiteConfig::default().latency(MockOp::Checkout).is_zero());
    assert!(SiteConfig::default().without_latency().latency(MockOp::Checkout).is_zero());
}

// ============================================================================
// Public pages
// ============================================================================

#[tokio::test]
async fn test_health() {
    let (_, router) = app();
    let response = send(&router, get("/health", None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&text(response).await).expect("json");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_unknown_path_renders_404_page() {
    let (_, router) = app();
    let response = send(&router, get("/no-such-page", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(text(response).await.contains("Page Not Found - IPTV Pro"));
}

#[tokio::test]
async fn test_home_lists_active_plans() {
    let (_, router) = app();
    let response = send(&router, get("/", None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = text(response).await;
    assert!(body.contains("/checkout/monthly"));
    assert!(body.contains("/checkout/yearly"));
}

#[tokio::test]
async fn test_home_sections() {
    let (_, router) = app();

    let body = text(send(&router, get("/", None)).await).await;
    assert!(body.contains("The Dark Knight"));
    assert!(!body.contains("Breaking Bad"));
    assert!(body.contains("View All Movies"));
    assert!(body.contains("VIP Support"));
    assert!(body.contains("Trusted by Millions Worldwide"));
    assert!(body.contains("Emirates Stadium"));
    assert!(body.contains("380 Matches/Season"));

    let body = text(send(&router, get("/?showcase=series", None)).await).await;
    assert!(body.contains("Breaking Bad"));
    assert!(body.contains("5 Seasons"));
    assert!(!body.contains("The Dark Knight"));

    let body = text(send(&router, get("/?showcase=cartoons", None)).await).await;
    assert!(body.contains("The Dark Knight"));
}

#[tokio::test]
async fn test_showcase_tab_and_faq_state_combine() {
    let (_, router) = app();

    let body = text(send(&router, get("/?showcase=sports&faq=3", None)).await).await;
    assert!(body.contains("Live Tournament"));
    assert!(body.contains("View All Sports"));
    assert_eq!(body.matches("accordion-panel").count(), 1);
    assert!(body.contains("/?showcase=sports&amp;faq=3&amp;close=1#faq"));
    assert!(body.contains("/?faq=3#showcase"));
}

#[tokio::test]
async fn test_faq_has_at_most_one_open_panel() {
    let (_, router) = app();

    let body = text(send(&router, get("/", None)).await).await;
    assert_eq!(body.matches("accordion-panel").count(), 1);

    let body = text(send(&router, get("/?faq=2", None)).await).await;
    assert_eq!(body.matches("accordion-panel").count(), 1);
    assert!(body.contains("/?faq=2&amp;close=1#faq"));

    let body = text(send(&router, get("/?faq=2&close=1", None)).await).await;
    assert_eq!(body.matches("accordion-panel").count(), 0);
}

#[tokio::test]
async fn test_notice_in_query_renders_toast() {
    let (_, router) = app();
    let body = text(send(&router, get("/?notice=logged-out", None)).await).await;
    assert!(body.contains("You have been logged out"));
}

#[tokio::test]
async fn test_contact_form_reports_field_errors() {
    let (_, router) = app();
    let response = send(&router, post("/contact", "name=J&email=nope&subject=&message=hi", None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = text(response).await;
    assert!(body.contains("Invalid email address"));
    assert!(!body.contains("Message sent successfully"));
}

#[tokio::test]
async fn test_language_preference_sets_cookie() {
    let (_, router) = app();
    let response = send(&router, get("/preferences/language/ar", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(session_cookie(&response), "lang=ar");

    let body = text(send(&router, get("/", Some("lang=ar"))).await).await;
    assert!(body.contains("dir=\"rtl\""));

    let response = send(&router, get("/preferences/language/xx", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Checkout
// ============================================================================

#[tokio::test]
async fn test_checkout_rejects_invalid_email() {
    let (state, router) = app();
    let body = CARD_CHECKOUT.replace("email=john@example.com", "email=not-an-email");
    let response = send(&router, post("/checkout/monthly", &body, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(text(response).await.contains("Invalid email address"));
    assert_eq!(state.catalog().await.orders().len(), 3);
}

#[tokio::test]
async fn test_checkout_unknown_plan_goes_home() {
    let (_, router) = app();
    let response = send(&router, get("/checkout/lifetime", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_checkout_records_order_for_customer() {
    let (state, router) = app();
    let cookie = customer_login(&router).await;

    let response = send(&router, post("/checkout/monthly", CARD_CHECKOUT, Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard?notice=payment-successful");

    let catalog = state.catalog().await;
    let john = UserId::new("1");
    assert_eq!(catalog.orders().len(), 4);
    assert_eq!(catalog.subscriptions_for(&john).len(), 2);
}

#[tokio::test]
async fn test_guest_checkout_records_nothing() {
    let (state, router) = app();

    let response = send(&router, post("/checkout/monthly", CARD_CHECKOUT, None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard?notice=payment-successful");

    let catalog = state.catalog().await;
    assert_eq!(catalog.orders().len(), 3);
    assert_eq!(catalog.subscriptions().len(), 3);
}

#[tokio::test]
async fn test_plan_price_ceiling_keeps_pages_rendering() {
    let (state, router) = app();
    let cookie = admin_login(&router).await;
    let quarterly = PlanId::new("quarterly");
    let before = state.catalog().await.plan(&quarterly).map(|p| p.price);

    let body = "name=3+Months+Plan&duration=3&price=150000000000000&features=HD&is_active=on";
    let response = send(&router, post("/admin/plans/quarterly", body, Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(text(response).await.contains("Price must be positive"));
    assert_eq!(state.catalog().await.plan(&quarterly).map(|p| p.price), before);

    let body = "name=3+Months+Plan&duration=3&price=1000000&features=HD&is_active=on";
    let response = send(&router, post("/admin/plans/quarterly", body, Some(&cookie))).await;
    assert_eq!(location(&response), "/admin/subscriptions?notice=plan-updated");

    let response = send(&router, get("/checkout/quarterly", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(text(response).await.contains("$1,100,000.00"));

    for uri in ["/admin/analytics", "/admin/dashboard", "/admin/analytics/export"] {
        let response = send(&router, get(uri, Some(&cookie))).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}

// ============================================================================
// Customer dashboard
// ============================================================================

#[tokio::test]
async fn test_dashboard_requires_login() {
    let (_, router) = app();
    for uri in ["/dashboard", "/dashboard/orders", "/dashboard/profile", "/dashboard/favorites"] {
        let response = send(&router, get(uri, None)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location(&response), "/login", "{uri}");
    }

    let response = send(&router, get("/dashboard", Some("auth_token=forged"))).await;
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_dashboard_after_login() {
    let (_, router) = app();
    let cookie = customer_login(&router).await;

    let response = send(&router, get("/dashboard", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(text(response).await.contains("John Doe"));
}

#[tokio::test]
async fn test_register_rejects_taken_email() {
    let (state, router) = app();
    let body = "name=Johnny&email=john@example.com&password=secret1&confirm_password=secret1";
    let response = send(&router, post("/register", body, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(text(response).await.contains("An account with this email already exists"));
    assert_eq!(state.catalog().await.users().len(), 3);
}

#[tokio::test]
async fn test_favorites_filter_and_remove() {
    let (state, router) = app();
    let cookie = customer_login(&router).await;
    let john = UserId::new("1");

    let response = send(&router, get("/dashboard/favorites?q=zzzz-no-match", Some(&cookie))).await;
    assert!(text(response).await.contains("No favorites match your search."));

    let id = state.catalog().await.favorites_for(&john, "", "")[0].id.clone();
    let response = send(&router, post(&format!("/dashboard/favorites/{id}/remove"), "", Some(&cookie))).await;
    assert_eq!(location(&response), "/dashboard/favorites?notice=favorite-removed");
    assert_eq!(state.catalog().await.favorite_count(&john), 5);

    let response = send(&router, post(&format!("/dashboard/favorites/{id}/remove"), "", Some(&cookie))).await;
    assert_eq!(location(&response), "/dashboard/favorites?notice=favorite-remove-failed");
}

#[tokio::test]
async fn test_profile_update_changes_session_email() {
    let (state, router) = app();
    let cookie = customer_login(&router).await;

    let body = "name=John+Smith&email=john.smith@example.com&phone=5550001111&country=Canada";
    let response = send(&router, post("/dashboard/profile", body, Some(&cookie))).await;
    assert_eq!(location(&response), "/dashboard/profile?notice=profile-updated");

    {
        let catalog = state.catalog().await;
        let john = catalog.user(&UserId::new("1")).expect("still there");
        assert_eq!(john.name, "John Smith");
        assert_eq!(john.email, "john.smith@example.com");
    }
    let sessions = state.sessions().read().await;
    let identity = sessions.customer(token(&cookie)).expect("session kept");
    assert_eq!(identity.email, "john.smith@example.com");
}

#[tokio::test]
async fn test_profile_update_rejects_bad_email() {
    let (state, router) = app();
    let cookie = customer_login(&router).await;

    let body = "name=John+Doe&email=broken&phone=&country=USA";
    let response = send(&router, post("/dashboard/profile", body, Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(text(response).await.contains("Invalid email address"));
    assert_eq!(
        state.catalog().await.user(&UserId::new("1")).map(|u| u.email.clone()),
        Some("john@example.com".to_string())
    );
}

#[tokio::test]
async fn test_login_again_replaces_older_token() {
    let (state, router) = app();
    let first = customer_login(&router).await;
    let second = customer_login(&router).await;
    assert_ne!(first, second);

    let response = send(&router, get("/dashboard", Some(&first))).await;
    assert_eq!(location(&response), "/login");
    let response = send(&router, get("/dashboard", Some(&second))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let first_admin = admin_login(&router).await;
    let second_admin = admin_login(&router).await;
    let sessions = state.sessions().read().await;
    assert!(sessions.admin(token(&first_admin)).is_none());
    assert!(sessions.admin(token(&second_admin)).is_some());
    assert_eq!(sessions.len(), 2);
}

#[tokio::test]
async fn test_logout_ends_session() {
    let (_, router) = app();
    let cookie = customer_login(&router).await;

    let response = send(&router, post("/logout", "", Some(&cookie))).await;
    assert_eq!(location(&response), "/?notice=logged-out");

    let response = send(&router, get("/dashboard", Some(&cookie))).await;
    assert_eq!(location(&response), "/login");
}

// ============================================================================
// Admin panel
// ============================================================================

#[tokio::test]
async fn test_admin_requires_admin_session() {
    let (_, router) = app();
    let customer = customer_login(&router).await;

    for uri in ["/admin", "/admin/users", "/admin/orders", "/admin/analytics/export"] {
        let response = send(&router, get(uri, None)).await;
        assert_eq!(location(&response), "/admin/login", "{uri}");

        let response = send(&router, get(uri, Some(&customer))).await;
        assert_eq!(location(&response), "/admin/login", "{uri} with customer session");
    }
}

#[tokio::test]
async fn test_admin_login_rejects_wrong_password() {
    let (_, router) = app();
    let response = send(&router, post("/admin/login", "email=admin@iptvpro.com&password=wrong-one", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert!(text(response).await.contains("Invalid admin credentials"));
}

#[tokio::test]
async fn test_admin_pages_render() {
    let (_, router) = app();
    let cookie = admin_login(&router).await;

    for uri in [
        "/admin/dashboard",
        "/admin/users",
        "/admin/users/1",
        "/admin/subscriptions",
        "/admin/subscriptions?edit=sub1",
        "/admin/subscriptions?edit_plan=monthly",
        "/admin/orders",
        "/admin/orders/ORD-2025-001",
        "/admin/communication",
        "/admin/communication?tab=history",
        "/admin/communication?template=welcome",
        "/admin/analytics?range=1year",
    ] {
        let response = send(&router, get(uri, Some(&cookie))).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }

    let response = send(&router, get("/admin/users/999", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_user_removes_subscriptions_and_sessions() {
    let (state, router) = app();
    let customer = customer_login(&router).await;
    let admin = admin_login(&router).await;
    let john = UserId::new("1");

    let response = send(&router, post("/admin/users/1/delete", "", Some(&admin))).await;
    assert_eq!(location(&response), "/admin/users?notice=user-deleted");
    {
        let catalog = state.catalog().await;
        assert!(catalog.user(&john).is_none());
        assert!(catalog.subscriptions_for(&john).is_empty());
    }
    assert!(state.sessions().read().await.customer(token(&customer)).is_none());

    let response = send(&router, get("/dashboard", Some(&customer))).await;
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_user_status_redirects_to_referer() {
    let (state, router) = app();
    let cookie = admin_login(&router).await;

    let request = Request::builder()
        .method("POST")
        .uri("/admin/users/2/status")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::COOKIE, &cookie)
        .header(header::REFERER, "http://localhost:3000/admin/users?status=active&notice=user-deleted")
        .body(Body::from("status=banned"))
        .expect("valid request");
    let response = send(&router, request).await;
    assert_eq!(location(&response), "/admin/users?status=active&notice=user-status-banned");
    assert_eq!(state.catalog().await.user(&UserId::new("2")).map(|u| u.status), Some(UserStatus::Banned));
}

#[tokio::test]
async fn test_order_status_redirects_to_referer() {
    let (state, router) = app();
    let cookie = admin_login(&router).await;

    let request = post_from(
        "/admin/orders/ORD-2025-003/status",
        "status=refunded",
        &cookie,
        "http://localhost:3000/admin/orders/ORD-2025-003?notice=order-status-paid",
    );
    let response = send(&router, request).await;
    assert_eq!(location(&response), "/admin/orders/ORD-2025-003?notice=order-status-refunded");
    assert_eq!(
        state.catalog().await.order(&OrderId::new("ORD-2025-003")).map(|o| o.status),
        Some(OrderStatus::Refunded)
    );

    let request = post_from("/admin/orders/ORD-0000-000/status", "status=paid", &cookie, "/admin/orders?status=failed");
    let response = send(&router, request).await;
    assert_eq!(location(&response), "/admin/orders?status=failed&notice=order-status-failed");

    let response = send(&router, post("/admin/orders/ORD-2025-001/status", "status=lost", Some(&cookie))).await;
    assert_eq!(location(&response), "/admin/orders?notice=order-status-failed");
}

#[tokio::test]
async fn test_admin_creates_subscription() {
    let (state, router) = app();
    let cookie = admin_login(&router).await;
    let jane = UserId::new("2");

    let body = "user_id=2&plan_id=quarterly&plan_name=Family+Pack&price=59.99&duration=3&max_devices=4";
    let response = send(&router, post("/admin/subscriptions", body, Some(&cookie))).await;
    assert_eq!(location(&response), "/admin/subscriptions?notice=subscription-created");

    {
        let catalog = state.catalog().await;
        let subscriptions = catalog.subscriptions_for(&jane);
        assert_eq!(subscriptions.len(), 2);
        let created = subscriptions
            .iter()
            .find(|sub| sub.plan_name == "Family Pack")
            .expect("created subscription");
        assert_eq!(created.plan_id, PlanId::new("quarterly"));
        assert_eq!(created.price, Price::from_cents(5999));
        assert_eq!(created.max_devices, 4);
        assert_eq!(created.status, SubscriptionStatus::Active);
        assert!(!created.auto_renew);
        assert_eq!((created.end_date - created.start_date).num_days(), 90);
        let plan = catalog.plan(&PlanId::new("quarterly")).expect("seeded plan");
        assert_eq!(created.features, plan.features);
    }

    let body = "user_id=999&plan_id=monthly&plan_name=Monthly&price=24.99&duration=1&max_devices=1";
    let response = send(&router, post("/admin/subscriptions", body, Some(&cookie))).await;
    assert_eq!(location(&response), "/admin/subscriptions?notice=subscription-create-failed");

    let response = send(&router, post("/admin/subscriptions", "user_id=2&price=-1", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = text(response).await;
    assert!(page.contains("Plan ID is required"));
    assert!(page.contains("Price must be positive"));
    assert_eq!(state.catalog().await.subscriptions().len(), 4);
}

#[tokio::test]
async fn test_admin_updates_subscription() {
    let (state, router) = app();
    let cookie = admin_login(&router).await;
    let sub2 = SubscriptionId::new("sub2");

    let body = "plan_name=1+Year+VIP&status=suspended&end_date=2026-03-01&price=149.99&max_devices=3";
    let response = send(&router, post("/admin/subscriptions/sub2", body, Some(&cookie))).await;
    assert_eq!(location(&response), "/admin/subscriptions?notice=subscription-updated");
    {
        let catalog = state.catalog().await;
        let sub = catalog.subscription(&sub2).expect("seeded subscription");
        assert_eq!(sub.plan_name, "1 Year VIP");
        assert_eq!(sub.status, SubscriptionStatus::Suspended);
        assert_eq!(sub.end_date.to_string(), "2026-03-01");
        assert_eq!(sub.price, Price::from_cents(14_999));
        assert_eq!(sub.max_devices, 3);
        assert!(!sub.auto_renew);
    }

    let response = send(&router, post("/admin/subscriptions/sub-missing", body, Some(&cookie))).await;
    assert_eq!(location(&response), "/admin/subscriptions?notice=subscription-update-failed");

    let body = "plan_name=&status=paused&end_date=soon&price=1&max_devices=0";
    let response = send(&router, post("/admin/subscriptions/sub2", body, Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = text(response).await;
    assert!(page.contains("End date must be YYYY-MM-DD"));
    assert!(page.contains("Max devices must be at least 1"));
}

#[tokio::test]
async fn test_admin_cancels_subscription() {
    let (state, router) = app();
    let cookie = admin_login(&router).await;

    let response = send(&router, post("/admin/subscriptions/sub1/cancel", "", Some(&cookie))).await;
    assert_eq!(location(&response), "/admin/subscriptions?notice=subscription-cancelled");
    assert_eq!(
        state.catalog().await.subscription(&SubscriptionId::new("sub1")).map(|s| s.status),
        Some(SubscriptionStatus::Cancelled)
    );

    let response = send(&router, post("/admin/subscriptions/sub-missing/cancel", "", Some(&cookie))).await;
    assert_eq!(location(&response), "/admin/subscriptions?notice=subscription-cancel-failed");
    assert_eq!(state.catalog().await.subscriptions().len(), 3);
}

#[tokio::test]
async fn test_promotion_goes_out_by_email() {
    let (state, router) = app();
    let cookie = admin_login(&router).await;

    let body = "message=Half+price+on+every+annual+plan+this+week&audience=expired&channel=whatsapp";
    let response = send(&router, post("/admin/communication/promotion", body, Some(&cookie))).await;
    let expected = state.catalog().await.audience(Audience::Expired).len();
    assert_eq!(
        location(&response),
        format!("/admin/communication?tab=history&notice=promotion-{expected}")
    );

    let catalog = state.catalog().await;
    let dispatch = catalog.dispatches().next().expect("recorded");
    assert_eq!(dispatch.channel, MessageChannel::Email);
    assert_eq!(dispatch.subject, "Special 50% Off Promotion!");
    assert_eq!(dispatch.audience, Some(Audience::Expired));
    assert_eq!(dispatch.body, "Half price on every annual plan this week");
}

#[tokio::test]
async fn test_promotion_validation_keeps_draft() {
    let (state, router) = app();
    let cookie = admin_login(&router).await;

    let response = send(&router, post("/admin/communication/promotion", "message=Sale&audience=all", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(text(response).await.contains("Message must be at least 10 characters"));
    assert_eq!(state.catalog().await.dispatches().count(), 0);
}

#[tokio::test]
async fn test_analytics_range_selects_series_length() {
    let (_, router) = app();
    let cookie = admin_login(&router).await;

    let page = text(send(&router, get("/admin/analytics?range=1year", Some(&cookie))).await).await;
    assert_eq!(page.matches("class=\"chart-bar\"").count(), 12);

    let page = text(send(&router, get("/admin/analytics?range=6months", Some(&cookie))).await).await;
    assert_eq!(page.matches("class=\"chart-bar\"").count(), 6);

    let page = text(send(&router, get("/admin/analytics?range=30days", Some(&cookie))).await).await;
    assert_eq!(page.matches("class=\"chart-bar\"").count(), 1);

    let page = text(send(&router, get("/admin/dashboard", Some(&cookie))).await).await;
    assert_eq!(page.matches("class=\"chart-bar\"").count(), 6);
}

#[tokio::test]
async fn test_broadcast_records_dispatch() {
    let (state, router) = app();
    let cookie = admin_login(&router).await;

    let body = "subject=Maintenance&message=Servers+restart+tonight+at+midnight&audience=active&channel=email";
    let response = send(&router, post("/admin/communication/broadcast", body, Some(&cookie))).await;
    let expected = state.catalog().await.audience(Audience::Active).len();
    assert_eq!(
        location(&response),
        format!("/admin/communication?tab=history&notice=broadcast-email-{expected}")
    );

    let catalog = state.catalog().await;
    let dispatch = catalog.dispatches().next().expect("recorded");
    assert_eq!(dispatch.subject, "Maintenance");
    assert_eq!(dispatch.recipients.len(), expected);
}

#[tokio::test]
async fn test_broadcast_validation_keeps_draft() {
    let (state, router) = app();
    let cookie = admin_login(&router).await;

    let body = "subject=&message=Short&audience=all&channel=email";
    let response = send(&router, post("/admin/communication/broadcast", body, Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = text(response).await;
    assert!(page.contains("Subject is required"));
    assert!(page.contains("Message must be at least 10 characters"));
    assert_eq!(state.catalog().await.dispatches().count(), 0);
}

#[tokio::test]
async fn test_plan_lifecycle() {
    let (state, router) = app();
    let cookie = admin_login(&router).await;

    let body = "name=Weekend+Pass&duration=1&price=4.99&original_price=&features=HD%0A1+device&is_active=on";
    let response = send(&router, post("/admin/plans", body, Some(&cookie))).await;
    assert_eq!(location(&response), "/admin/subscriptions?notice=plan-created");
    assert_eq!(state.catalog().await.plans().len(), 5);

    let response = send(&router, post("/admin/plans", "name=&duration=0&price=x", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(text(response).await.contains("Plan name is required"));
    assert_eq!(state.catalog().await.plans().len(), 5);
}

#[tokio::test]
async fn test_analytics_export_is_json_attachment() {
    let (_, router) = app();
    let cookie = admin_login(&router).await;

    let response = send(&router, get("/admin/analytics/export", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains("analytics-report.json"));

    let report: serde_json::Value = serde_json::from_str(&text(response).await).expect("json");
    assert_eq!(report["total_users"], 3);
    assert!(report["monthly_revenue"].is_array());
}
