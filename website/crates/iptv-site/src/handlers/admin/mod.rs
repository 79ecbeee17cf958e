//! Admin panel handlers.
//!
//! Everything except the login form requires an [`AdminSession`]; a customer
//! session grants nothing here.

pub mod analytics;
pub mod communication;
pub mod orders;
pub mod subscriptions;
pub mod users;

use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use iptv_types::{Analytics, MonthlyRevenue};
use tracing::{info, warn};

use super::set_cookie;
use crate::{
    config::MockOp,
    forms::{AdminLoginForm, FieldErrors},
    notice::{Notice, Toast, redirect_with},
    page::PageContext,
    session::{ADMIN_COOKIE, AdminSession, clear_cookie, cookie, session_cookie},
    state::AppState,
    templates::{
        AdminDashboardTemplate, AdminLoginTemplate, ChartBar, PopularPlanRow, StatCard, UserRow,
    },
};

const RECENT_USERS: usize = 5;
const DASHBOARD_MONTHS: usize = 6;

pub async fn login(ctx: PageContext) -> impl IntoResponse {
    AdminLoginTemplate {
        page: ctx.chrome("Admin Login - IPTV Pro"),
        form: AdminLoginForm::default(),
        errors: FieldErrors::default(),
    }
}

/// Handler for the admin login form. Only the configured account is accepted.
pub async fn sign_in(
    State(state): State<AppState>,
    ctx: PageContext,
    Form(form): Form<AdminLoginForm>,
) -> Response {
    if let Err(errors) = form.validate() {
        return AdminLoginTemplate { page: ctx.chrome("Admin Login - IPTV Pro"), form, errors }
            .into_response();
    }

    state.simulate(MockOp::Auth).await;

    let Some(admin) = state.admin_for(&form.email, &form.password) else {
        warn!(email = %form.email.trim(), "rejected admin login");
        return AdminLoginTemplate {
            page: ctx.chrome_with("Admin Login - IPTV Pro", Toast::error("Invalid admin credentials")),
            form: AdminLoginForm { password: String::new(), ..form },
            errors: FieldErrors::default(),
        }
        .into_response();
    };

    info!(admin = %admin.email, role = %admin.role, "admin signed in");
    let token = state.sessions().write().await.sign_in_admin(admin);
    (
        set_cookie(session_cookie(ADMIN_COOKIE, &token)),
        redirect_with("/admin/dashboard", Notice::AdminLoggedIn),
    )
        .into_response()
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = cookie(&headers, ADMIN_COOKIE) {
        state.sessions().write().await.sign_out(&token);
    }
    (set_cookie(clear_cookie(ADMIN_COOKIE)), redirect_with("/admin/login", Notice::LoggedOut))
}

/// Handler for the admin overview.
pub async fn dashboard(
    State(state): State<AppState>,
    _admin: AdminSession,
    ctx: PageContext,
) -> impl IntoResponse {
    let catalog = state.catalog().await;
    let analytics = catalog.analytics(Utc::now().date_naive());
    let recent_users = catalog
        .recent_users(RECENT_USERS)
        .into_iter()
        .map(|user| UserRow::new(user, catalog.subscriptions_for(&user.id).len()))
        .collect();

    AdminDashboardTemplate {
        page: ctx.chrome("Admin Dashboard - IPTV Pro"),
        stats: vec![
            StatCard::new("Total Users", analytics.total_users),
            StatCard::new("Active Subscriptions", analytics.active_subscriptions),
            StatCard::new("Monthly Revenue", analytics.revenue_month),
            StatCard::new("New Signups This Month", analytics.new_signups_month),
        ],
        revenue: revenue_bars(last_months(&analytics.monthly_revenue, DASHBOARD_MONTHS)),
        statuses: status_cards(&analytics),
        popular_plans: PopularPlanRow::rows(&analytics.popular_plans),
        recent_users,
    }
}

/// The trailing `months` entries of the revenue series.
pub(crate) fn last_months(series: &[MonthlyRevenue], months: usize) -> &[MonthlyRevenue] {
    &series[series.len().saturating_sub(months)..]
}

/// Revenue chart bars, scaled to the best month.
pub(crate) fn revenue_bars(series: &[MonthlyRevenue]) -> Vec<ChartBar> {
    let max = series.iter().map(|m| m.revenue.as_cents()).max().unwrap_or(0);
    series
        .iter()
        .map(|m| {
            ChartBar::scaled(
                m.month.clone(),
                m.revenue.as_cents(),
                max,
                m.revenue.to_string(),
                format!("{} subscriptions", m.subscriptions),
            )
        })
        .collect()
}

pub(crate) fn status_cards(analytics: &Analytics) -> Vec<StatCard> {
    vec![
        StatCard::new("Active", analytics.active_subscriptions),
        StatCard::new("Expired", analytics.expired_subscriptions),
        StatCard::new("Suspended", analytics.suspended_subscriptions),
    ]
}
