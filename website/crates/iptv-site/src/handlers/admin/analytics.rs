//! Analytics page and report export.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use super::{last_months, revenue_bars, status_cards};
use crate::{
    error::SiteResult,
    page::PageContext,
    session::AdminSession,
    state::AppState,
    templates::{AdminAnalyticsTemplate, PopularPlanRow, SelectOption, StatCard},
};

/// Reporting windows: (query value, label, months of the revenue series shown).
const RANGES: [(&str, &str, usize); 4] = [
    ("7days", "Last 7 days", 1),
    ("30days", "Last 30 days", 1),
    ("6months", "Last 6 months", 6),
    ("1year", "Last year", 12),
];

const DEFAULT_RANGE: &str = "6months";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RangeQuery {
    pub range: String,
}

impl Default for RangeQuery {
    fn default() -> Self {
        Self { range: DEFAULT_RANGE.to_string() }
    }
}

impl RangeQuery {
    /// The selected window, falling back to the default for unknown values.
    fn window(&self) -> (&'static str, usize) {
        RANGES
            .iter()
            .find(|(value, _, _)| *value == self.range)
            .or_else(|| RANGES.iter().find(|(value, _, _)| *value == DEFAULT_RANGE))
            .map_or((DEFAULT_RANGE, 6), |(value, _, months)| (*value, *months))
    }
}

pub async fn page(
    State(state): State<AppState>,
    _admin: AdminSession,
    ctx: PageContext,
    Query(query): Query<RangeQuery>,
) -> impl IntoResponse {
    let analytics = state.catalog().await.analytics(Utc::now().date_naive());
    let (range, months) = query.window();
    let shown = last_months(&analytics.monthly_revenue, months);

    AdminAnalyticsTemplate {
        page: ctx.chrome("Analytics - IPTV Pro Admin"),
        ranges: RANGES
            .iter()
            .map(|(value, label, _)| SelectOption::new(*value, *label, range))
            .collect(),
        stats: vec![
            StatCard::new("Total Users", analytics.total_users),
            StatCard::new("Revenue Today", analytics.revenue_today),
            StatCard::new("Revenue This Month", analytics.revenue_month),
            StatCard::new("Revenue This Year", analytics.revenue_year),
            StatCard::new("New Signups Today", analytics.new_signups_today),
            StatCard::new("New Signups This Month", analytics.new_signups_month),
        ],
        revenue: revenue_bars(shown),
        statuses: status_cards(&analytics),
        popular_plans: PopularPlanRow::rows(&analytics.popular_plans),
    }
}

/// Downloads the current figures as a JSON report.
pub async fn export(State(state): State<AppState>, admin: AdminSession) -> SiteResult<impl IntoResponse> {
    let analytics = state.catalog().await.analytics(Utc::now().date_naive());
    let body = serde_json::to_string_pretty(&analytics)?;
    info!(admin = %admin.admin.email, "exported analytics report");

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"analytics-report.json\""),
        ],
        body,
    ))
}
