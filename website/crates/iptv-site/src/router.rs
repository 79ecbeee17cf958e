//! Router Configuration
//!
//! Route configuration for the website.

use axum::{
    Router,
    http::{HeaderValue, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::{
    handlers::{self, admin, auth, checkout, dashboard, preferences, public},
    state::AppState,
};

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    // Asset URLs carry the build version, so they can be cached for good.
    let static_files = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=31536000, immutable"),
        ))
        .service(ServeDir::new(&state.config().public_dir));

    Router::new()
        .merge(public_routes())
        .merge(customer_routes())
        .merge(admin_routes())
        .route("/health", get(handlers::health))
        .nest_service("/public", static_files)
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(public::home))
        .route("/about", get(public::about))
        .route("/contact", get(public::contact).post(public::send_contact))
        .route("/checkout/{plan_id}", get(checkout::checkout).post(checkout::pay))
        .route("/login", get(auth::login).post(auth::sign_in))
        .route("/register", get(auth::register).post(auth::sign_up))
        .route("/forgot-password", get(auth::forgot_password).post(auth::send_reset))
        .route("/logout", post(auth::logout))
        .route("/preferences/language/{code}", get(preferences::language))
        .route("/preferences/theme", post(preferences::theme))
}

fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::overview))
        .route("/dashboard/subscriptions", get(dashboard::subscriptions))
        .route("/dashboard/orders", get(dashboard::orders))
        .route("/dashboard/profile", get(dashboard::profile).post(dashboard::update_profile))
        .route("/dashboard/favorites", get(dashboard::favorites))
        .route("/dashboard/favorites/{id}/remove", post(dashboard::remove_favorite))
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/login", get(admin::login).post(admin::sign_in))
        .route("/admin/logout", post(admin::logout))
        .route("/admin", get(admin::dashboard))
        .route("/admin/dashboard", get(admin::dashboard))
        .route("/admin/users", get(admin::users::list))
        .route("/admin/users/{id}", get(admin::users::detail))
        .route("/admin/users/{id}/status", post(admin::users::update_status))
        .route("/admin/users/{id}/delete", post(admin::users::delete))
        .route("/admin/users/{id}/message", post(admin::users::message))
        .route(
            "/admin/subscriptions",
            get(admin::subscriptions::list).post(admin::subscriptions::create),
        )
        .route("/admin/subscriptions/{id}", post(admin::subscriptions::update))
        .route("/admin/subscriptions/{id}/cancel", post(admin::subscriptions::cancel))
        .route("/admin/plans", post(admin::subscriptions::create_plan))
        .route("/admin/plans/{id}", post(admin::subscriptions::update_plan))
        .route("/admin/plans/{id}/delete", post(admin::subscriptions::delete_plan))
        .route("/admin/orders", get(admin::orders::list))
        .route("/admin/orders/{id}", get(admin::orders::detail))
        .route("/admin/orders/{id}/status", post(admin::orders::update_status))
        .route("/admin/communication", get(admin::communication::page))
        .route("/admin/communication/broadcast", post(admin::communication::broadcast))
        .route("/admin/communication/promotion", post(admin::communication::promotion))
        .route("/admin/analytics", get(admin::analytics::page))
        .route("/admin/analytics/export", get(admin::analytics::export))
}
