//! Unit tests for the catalog.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use iptv_types::{
    Audience, FavoriteId, MessageChannel, OrderId, OrderStatus, PaymentMethod, PlanId, Price,
    SubscriptionId, SubscriptionStatus, UserId, UserStatus,
};

use crate::{
    Catalog, CatalogError, NewOrder, NewPlan, NewSubscription, PlanPatch, ProfilePatch,
    SubscriptionPatch, message_template,
};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn john() -> UserId {
    UserId::new("1")
}

// ============================================================================
// Users
// ============================================================================

#[test]
fn test_seeded_catalog_contents() {
    let catalog = Catalog::seeded();

    assert_eq!(catalog.users().len(), 3);
    assert_eq!(catalog.plans().len(), 4);
    assert_eq!(catalog.subscriptions().len(), 3);
    assert_eq!(catalog.orders().len(), 3);
    assert_eq!(catalog.favorite_count(&john()), 6);
    assert_eq!(catalog.dispatches().count(), 0);
}

#[test]
fn test_empty_catalog_has_no_records() {
    let catalog = Catalog::empty();

    assert!(catalog.users().is_empty());
    assert!(catalog.plans().is_empty());
    assert_eq!(catalog.analytics(day(2025, 1, 15)).total_users, 0);
}

#[test]
fn test_find_user_by_email_ignores_case() {
    let catalog = Catalog::seeded();

    let user = catalog.find_user_by_email("  JOHN@example.com ").expect("john exists");
    assert_eq!(user.id, john());
    assert!(catalog.find_user_by_email("nobody@example.com").is_none());
}

#[test]
fn test_search_users_by_text_and_status() {
    let catalog = Catalog::seeded();

    assert_eq!(catalog.search_users("", None).len(), 3);
    assert_eq!(catalog.search_users("sarah", None).len(), 1);
    assert_eq!(catalog.search_users("canada", None).len(), 1);

    let suspended = catalog.search_users("", Some(UserStatus::Suspended));
    assert_eq!(suspended.len(), 1);
    assert_eq!(suspended[0].name, "Ahmed Hassan");

    assert!(catalog.search_users("john", Some(UserStatus::Banned)).is_empty());
}

#[test]
fn test_recent_users_newest_first() {
    let catalog = Catalog::seeded();

    let recent = catalog.recent_users(2);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].name, "John Doe");
    assert_eq!(recent[1].name, "Sarah Johnson");
}

#[test]
fn test_register_user_assigns_next_id() {
    let mut catalog = Catalog::seeded();

    let id = catalog
        .register_user("Maria Garcia", "maria@example.com", day(2025, 1, 15))
        .expect("registration succeeds");

    assert_eq!(id, UserId::new("4"));
    let user = catalog.user(&id).expect("user stored");
    assert_eq!(user.status, UserStatus::Active);
    assert_eq!(user.total_spent, Price::ZERO);
    assert!(catalog.subscriptions_for(&id).is_empty());
}

#[test]
fn test_register_user_rejects_duplicate_email() {
    let mut catalog = Catalog::seeded();

    let err = catalog
        .register_user("Other John", "John@Example.com", day(2025, 1, 15))
        .unwrap_err();

    assert!(matches!(err, CatalogError::EmailTaken(_)));
    assert_eq!(catalog.users().len(), 3);
}

#[test]
fn test_update_profile_applies_fields() {
    let mut catalog = Catalog::seeded();

    let patch = ProfilePatch {
        name: Some("John Q. Doe".to_string()),
        phone: Some("   ".to_string()),
        country: Some("Mexico".to_string()),
        ..ProfilePatch::default()
    };
    let user = catalog.update_profile(&john(), patch).expect("update succeeds");

    assert_eq!(user.name, "John Q. Doe");
    assert_eq!(user.phone, None);
    assert_eq!(user.country, "Mexico");
    assert_eq!(user.email, "john@example.com");
}

#[test]
fn test_update_profile_rejects_email_of_other_user() {
    let mut catalog = Catalog::seeded();

    let patch = ProfilePatch {
        email: Some("sarah@example.com".to_string()),
        ..ProfilePatch::default()
    };
    let err = catalog.update_profile(&john(), patch).unwrap_err();
    assert!(matches!(err, CatalogError::EmailTaken(_)));

    // Keeping one's own address is fine.
    let patch = ProfilePatch {
        email: Some("john@example.com".to_string()),
        ..ProfilePatch::default()
    };
    assert!(catalog.update_profile(&john(), patch).is_ok());
}

#[test]
fn test_update_user_status() {
    let mut catalog = Catalog::seeded();

    catalog
        .update_user_status(&john(), UserStatus::Banned)
        .expect("status update succeeds");
    assert_eq!(catalog.user(&john()).map(|u| u.status), Some(UserStatus::Banned));

    let err = catalog
        .update_user_status(&UserId::new("99"), UserStatus::Active)
        .unwrap_err();
    assert_eq!(err, CatalogError::UserNotFound(UserId::new("99")));
}

#[test]
fn test_delete_user_cascades_subscriptions_and_favorites() {
    let mut catalog = Catalog::seeded();

    let removed = catalog.delete_user(&john()).expect("delete succeeds");

    assert_eq!(removed.name, "John Doe");
    assert!(catalog.user(&john()).is_none());
    assert!(catalog.subscriptions_for(&john()).is_empty());
    assert_eq!(catalog.favorite_count(&john()), 0);
    // Orders remain as the payment record.
    assert_eq!(catalog.orders_for(&john()).len(), 1);
}

// ============================================================================
// Subscriptions
// ============================================================================

#[test]
fn test_search_subscriptions_matches_owner() {
    let catalog = Catalog::seeded();

    assert_eq!(catalog.search_subscriptions("", None).len(), 3);
    assert_eq!(catalog.search_subscriptions("sarah@", None).len(), 1);
    assert_eq!(catalog.search_subscriptions("1 year", None).len(), 1);
    assert_eq!(
        catalog
            .search_subscriptions("", Some(SubscriptionStatus::Expired))
            .len(),
        1
    );
}

#[test]
fn test_create_subscription_computes_end_date() {
    let mut catalog = Catalog::seeded();
    let now = at(2025, 1, 15);

    let id = catalog
        .create_subscription(
            NewSubscription {
                user_id: UserId::new("3"),
                plan_id: PlanId::new("semiannual"),
                plan_name: "6 Months Plan".to_string(),
                price: Price::from_cents(10999),
                duration: 6,
                max_devices: 4,
                auto_renew: false,
                start_date: day(2025, 1, 15),
            },
            now,
        )
        .expect("create succeeds");

    let sub = catalog.subscription(&id).expect("subscription stored");
    assert!(id.as_str().starts_with("sub"));
    assert_eq!(sub.status, SubscriptionStatus::Active);
    assert_eq!(sub.end_date, day(2025, 7, 14));
    assert_eq!(sub.devices, 0);
    assert_eq!(sub.features.len(), 6);
    assert_eq!(catalog.subscriptions_for(&UserId::new("3")).len(), 2);
}

#[test]
fn test_create_subscription_ids_are_unique_within_one_millisecond() {
    let mut catalog = Catalog::seeded();
    let now = at(2025, 1, 15);
    let new = NewSubscription {
        user_id: john(),
        plan_id: PlanId::new("monthly"),
        plan_name: "Monthly Plan".to_string(),
        price: Price::from_cents(2499),
        duration: 1,
        max_devices: 2,
        auto_renew: true,
        start_date: day(2025, 1, 15),
    };

    let first = catalog.create_subscription(new.clone(), now).expect("first");
    let second = catalog.create_subscription(new, now).expect("second");

    assert_ne!(first, second);
}

#[test]
fn test_create_subscription_requires_user() {
    let mut catalog = Catalog::seeded();

    let err = catalog
        .create_subscription(
            NewSubscription {
                user_id: UserId::new("42"),
                plan_id: PlanId::new("monthly"),
                plan_name: "Monthly Plan".to_string(),
                price: Price::from_cents(2499),
                duration: 1,
                max_devices: 2,
                auto_renew: true,
                start_date: day(2025, 1, 15),
            },
            at(2025, 1, 15),
        )
        .unwrap_err();

    assert_eq!(err, CatalogError::UserNotFound(UserId::new("42")));
}

#[test]
fn test_update_subscription_clamps_devices() {
    let mut catalog = Catalog::seeded();
    let id = SubscriptionId::new("sub1");

    let sub = catalog
        .update_subscription(
            &id,
            SubscriptionPatch {
                max_devices: Some(1),
                status: Some(SubscriptionStatus::Suspended),
                ..SubscriptionPatch::default()
            },
        )
        .expect("update succeeds");

    assert_eq!(sub.max_devices, 1);
    assert_eq!(sub.devices, 1);
    assert_eq!(sub.status, SubscriptionStatus::Suspended);
}

#[test]
fn test_cancel_subscription_keeps_record() {
    let mut catalog = Catalog::seeded();
    let id = SubscriptionId::new("sub2");

    catalog.cancel_subscription(&id).expect("cancel succeeds");

    assert_eq!(
        catalog.subscription(&id).map(|s| s.status),
        Some(SubscriptionStatus::Cancelled)
    );
    assert_eq!(catalog.subscriptions().len(), 3);
    assert!(catalog.cancel_subscription(&SubscriptionId::new("nope")).is_err());
}

// ============================================================================
// Plans
// ============================================================================

#[test]
fn test_create_update_delete_plan() {
    let mut catalog = Catalog::seeded();

    let id = catalog.create_plan(
        NewPlan {
            name: "Weekend Pass".to_string(),
            duration: 1,
            price: Price::from_cents(999),
            original_price: None,
            features: vec!["1 Device".to_string()],
        },
        at(2025, 2, 1),
    );
    let plan = catalog.plan(&id).expect("plan stored");
    assert!(plan.is_active);
    assert_eq!(plan.subscriber_count, 0);
    assert_eq!(plan.created_at, day(2025, 2, 1));
    assert_eq!(catalog.active_plans().len(), 5);

    let plan = catalog
        .update_plan(
            &id,
            PlanPatch {
                is_active: Some(false),
                original_price: Some(Some(Price::from_cents(1499))),
                ..PlanPatch::default()
            },
        )
        .expect("update succeeds");
    assert!(!plan.is_active);
    assert_eq!(plan.savings(), Price::from_cents(500));
    assert_eq!(catalog.active_plans().len(), 4);

    catalog.delete_plan(&id).expect("delete succeeds");
    assert!(catalog.plan(&id).is_none());
    assert_eq!(
        catalog.delete_plan(&id).unwrap_err(),
        CatalogError::PlanNotFound(id)
    );
}

#[test]
fn test_plan_patch_from_new_plan_replaces_everything_but_activity() {
    let patch = PlanPatch::from(NewPlan {
        name: "Edited".to_string(),
        duration: 2,
        price: Price::from_cents(100),
        original_price: None,
        features: Vec::new(),
    });

    assert_eq!(patch.name.as_deref(), Some("Edited"));
    assert_eq!(patch.original_price, Some(None));
    assert_eq!(patch.is_active, None);
}

// ============================================================================
// Orders and checkout
// ============================================================================

#[test]
fn test_search_orders_and_summary() {
    let catalog = Catalog::seeded();

    assert_eq!(catalog.search_orders("ORD-2025-002", None).len(), 1);
    assert_eq!(catalog.search_orders("ahmed", None).len(), 1);
    assert_eq!(catalog.search_orders("", Some(OrderStatus::Paid)).len(), 2);

    let summary = catalog.order_summary();
    assert_eq!(summary.revenue, Price::from_cents(5999 + 17999));
    assert_eq!(summary.pending, 0);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.total, 3);
}

#[test]
fn test_update_order_status() {
    let mut catalog = Catalog::seeded();
    let id = OrderId::new("ORD-2025-003");

    catalog
        .update_order_status(&id, OrderStatus::Refunded)
        .expect("update succeeds");

    assert_eq!(catalog.order(&id).map(|o| o.status), Some(OrderStatus::Refunded));
}

#[test]
fn test_record_order_numbers_per_year() {
    let mut catalog = Catalog::seeded();

    let id = catalog
        .record_order(
            NewOrder {
                user_id: UserId::new("2"),
                plan_id: PlanId::new("monthly"),
                plan_name: "Monthly Plan".to_string(),
                amount: Price::from_cents(2749),
                status: OrderStatus::Pending,
                payment_method: "PayPal".to_string(),
            },
            at(2025, 3, 1),
        )
        .expect("record succeeds");

    assert_eq!(id, OrderId::new("ORD-2025-004"));
    let order = catalog.order(&id).expect("order stored");
    assert_eq!(order.invoice_url, None);
    // Pending orders do not count towards total spent.
    assert_eq!(
        catalog.user(&UserId::new("2")).map(|u| u.total_spent),
        Some(Price::from_cents(29999))
    );
}

#[test]
fn test_checkout_records_paid_order_and_subscription() {
    let mut catalog = Catalog::seeded();

    let (order_id, sub_id) = catalog
        .checkout(&john(), &PlanId::new("yearly"), PaymentMethod::Card, at(2026, 1, 2))
        .expect("checkout succeeds");

    assert_eq!(order_id, OrderId::new("ORD-2026-001"));
    let order = catalog.order(&order_id).expect("order stored");
    assert_eq!(order.amount, Price::from_cents(17999 + 1800));
    assert_eq!(order.status, OrderStatus::Paid);
    assert_eq!(order.payment_method, "Credit Card");
    assert_eq!(order.invoice_url.as_deref(), Some("#"));

    let sub = catalog.subscription(&sub_id).expect("subscription stored");
    assert_eq!(sub.max_devices, 5);
    assert!(sub.auto_renew);
    assert_eq!(sub.end_date, day(2026, 12, 28));

    assert_eq!(catalog.subscriptions_for(&john()).len(), 2);
    assert_eq!(
        catalog.user(&john()).map(|u| u.total_spent),
        Some(Price::from_cents(17999 + 19799))
    );
}

#[test]
fn test_checkout_rejects_inactive_or_unknown_plan() {
    let mut catalog = Catalog::seeded();
    let monthly = PlanId::new("monthly");
    catalog
        .update_plan(
            &monthly,
            PlanPatch {
                is_active: Some(false),
                ..PlanPatch::default()
            },
        )
        .expect("update succeeds");

    let err = catalog
        .checkout(&john(), &monthly, PaymentMethod::PayPal, at(2025, 1, 15))
        .unwrap_err();
    assert_eq!(err, CatalogError::PlanUnavailable(monthly));

    let err = catalog
        .checkout(&john(), &PlanId::new("lifetime"), PaymentMethod::PayPal, at(2025, 1, 15))
        .unwrap_err();
    assert_eq!(err, CatalogError::PlanNotFound(PlanId::new("lifetime")));

    assert_eq!(catalog.orders().len(), 3);
}

// ============================================================================
// Favorites
// ============================================================================

#[test]
fn test_favorites_filter_by_query_and_category() {
    let catalog = Catalog::seeded();

    assert_eq!(catalog.favorites_for(&john(), "", "all").len(), 6);
    assert_eq!(catalog.favorites_for(&john(), "cnn", "all").len(), 1);
    assert_eq!(catalog.favorites_for(&john(), "", "Sports").len(), 1);
    assert!(catalog.favorites_for(&john(), "cnn", "Sports").is_empty());
    assert!(catalog.favorites_for(&UserId::new("2"), "", "all").is_empty());
}

#[test]
fn test_remove_favorite() {
    let mut catalog = Catalog::seeded();
    let id = FavoriteId::new("1");

    let removed = catalog.remove_favorite(&john(), &id).expect("remove succeeds");
    assert_eq!(removed.name, "ESPN HD");
    assert_eq!(catalog.favorite_count(&john()), 5);

    let err = catalog.remove_favorite(&john(), &id).unwrap_err();
    assert_eq!(err, CatalogError::FavoriteNotFound(id));
}

// ============================================================================
// Analytics
// ============================================================================

#[test]
fn test_analytics_counts_paid_revenue_by_period() {
    let catalog = Catalog::seeded();

    let analytics = catalog.analytics(day(2025, 1, 15));

    assert_eq!(analytics.total_users, 3);
    assert_eq!(analytics.active_subscriptions, 2);
    assert_eq!(analytics.expired_subscriptions, 1);
    assert_eq!(analytics.suspended_subscriptions, 0);
    assert_eq!(analytics.revenue_today, Price::from_cents(5999));
    assert_eq!(analytics.revenue_month, Price::from_cents(5999 + 17999));
    assert_eq!(analytics.revenue_year, Price::from_cents(5999 + 17999));
    assert_eq!(analytics.new_signups_today, 0);
    assert_eq!(analytics.new_signups_month, 0);
}

#[test]
fn test_analytics_month_comparison_includes_year() {
    let catalog = Catalog::seeded();

    // January of a different year shares no orders with January 2025.
    let analytics = catalog.analytics(day(2026, 1, 15));
    assert_eq!(analytics.revenue_month, Price::ZERO);
    assert_eq!(analytics.revenue_year, Price::ZERO);

    let december = catalog.analytics(day(2024, 12, 31));
    assert_eq!(december.new_signups_month, 1);
}

#[test]
fn test_analytics_popular_plans_sorted_by_count() {
    let catalog = Catalog::seeded();

    let analytics = catalog.analytics(day(2025, 1, 15));
    let names: Vec<&str> = analytics
        .popular_plans
        .iter()
        .map(|p| p.plan_name.as_str())
        .collect();

    assert_eq!(
        names,
        ["3 Months Plan", "1 Year Plan", "Monthly Plan", "6 Months Plan"]
    );
    assert_eq!(analytics.popular_plans[2].revenue, Price::from_cents(2499 * 567));
    assert_eq!(analytics.monthly_revenue.len(), 12);
    assert_eq!(analytics.monthly_revenue[0].month, "Jul");
    assert_eq!(analytics.monthly_revenue[11].revenue, Price::from_cents(6_700_000));
}

#[test]
fn test_analytics_survives_extreme_plan_prices() {
    let mut catalog = Catalog::seeded();
    let patch = PlanPatch { price: Some(Price::from_cents(u64::MAX / 2)), ..PlanPatch::default() };
    catalog
        .update_plan(&PlanId::new("quarterly"), patch)
        .expect("plan exists");

    let analytics = catalog.analytics(day(2025, 1, 20));
    let quarterly = analytics
        .popular_plans
        .iter()
        .find(|p| p.plan_name == "3 Months Plan")
        .expect("listed");
    assert_eq!(quarterly.revenue, Price::from_cents(u64::MAX));
}

// ============================================================================
// Messaging
// ============================================================================

#[test]
fn test_audience_selection() {
    let catalog = Catalog::seeded();

    assert_eq!(catalog.audience(Audience::All).len(), 3);
    assert_eq!(
        catalog.audience(Audience::Active),
        vec![UserId::new("1"), UserId::new("2")]
    );
    assert_eq!(catalog.audience(Audience::Expired), vec![UserId::new("3")]);
}

#[test]
fn test_record_dispatch_lists_newest_first() {
    let mut catalog = Catalog::seeded();

    let first = catalog.record_dispatch(
        vec![john()],
        MessageChannel::Email,
        "Hello",
        "Welcome aboard",
        None,
        at(2025, 1, 15),
    );
    let second = catalog.record_dispatch(
        catalog.audience(Audience::All),
        MessageChannel::WhatsApp,
        "",
        "Maintenance tonight",
        Some(Audience::All),
        at(2025, 1, 16),
    );

    let ids: Vec<_> = catalog.dispatches().map(|d| d.id.clone()).collect();
    assert_eq!(ids, vec![second, first]);
    assert_eq!(catalog.dispatches().next().map(|d| d.recipients.len()), Some(3));
}

#[test]
fn test_message_templates_lookup() {
    let template = message_template("expiry").expect("expiry template exists");
    assert_eq!(template.subject, "Your subscription expires soon");
    assert!(message_template("unknown").is_none());
}
