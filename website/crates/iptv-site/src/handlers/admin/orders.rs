//! Order management.

use axum::{
    Form,
    extract::{Path, Query, State},
    http::HeaderMap,
    response::IntoResponse,
};
use iptv_catalog::CatalogError;
use iptv_types::{OrderId, OrderStatus};
use tracing::warn;

use crate::{
    error::SiteResult,
    forms::{ListQuery, OrderStatusForm},
    handlers::referer_path,
    notice::{Notice, redirect_with},
    page::PageContext,
    session::AdminSession,
    state::AppState,
    templates::{
        AdminOrderDetailTemplate, AdminOrdersTemplate, OrderRow, SelectOption, StatCard, UserRow,
    },
};

/// Handler for the order table.
pub async fn list(
    State(state): State<AppState>,
    _admin: AdminSession,
    ctx: PageContext,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let catalog = state.catalog().await;
    let summary = catalog.order_summary();
    let orders = catalog
        .search_orders(&query.q, query.status::<OrderStatus>())
        .into_iter()
        .map(|order| OrderRow::new(order, catalog.user(&order.user_id)))
        .collect();

    AdminOrdersTemplate {
        page: ctx.chrome("Order Management - IPTV Pro Admin"),
        orders,
        statuses: SelectOption::filter(
            "All Status",
            OrderStatus::ALL.iter().map(|s| (s.as_str(), s.label())),
            &query.status,
        ),
        stats: vec![
            StatCard::new("Total Orders", summary.total),
            StatCard::new("Total Revenue", summary.revenue),
            StatCard::new("Pending", summary.pending),
            StatCard::new("Failed", summary.failed),
        ],
        query: query.q,
    }
}

pub async fn detail(
    State(state): State<AppState>,
    _admin: AdminSession,
    ctx: PageContext,
    Path(id): Path<String>,
) -> SiteResult<impl IntoResponse> {
    let id = OrderId::new(id);
    let catalog = state.catalog().await;
    let order = catalog.order(&id).ok_or_else(|| CatalogError::OrderNotFound(id.clone()))?;
    let customer = catalog.user(&order.user_id);

    Ok(AdminOrderDetailTemplate {
        page: ctx.chrome(format!("Order {id} - IPTV Pro Admin")),
        order: OrderRow::new(order, customer),
        customer: customer.map(|user| UserRow::new(user, catalog.subscriptions_for(&user.id).len())),
        statuses: OrderStatus::ALL
            .iter()
            .map(|s| SelectOption::new(s.as_str(), s.label(), order.status.as_str()))
            .collect(),
    })
}

/// Handler for the status dropdown, on the table or the detail page.
pub async fn update_status(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(id): Path<String>,
    headers: HeaderMap,
    Form(form): Form<OrderStatusForm>,
) -> impl IntoResponse {
    let back = referer_path(&headers, "/admin/orders");
    let id = OrderId::new(id);

    let notice = match form.validate() {
        Ok(status) => match state.catalog_mut().await.update_order_status(&id, status) {
            Ok(()) => Notice::OrderStatusUpdated(status),
            Err(e) => {
                warn!(error = %e, "failed to update order status");
                Notice::OrderStatusFailed
            }
        },
        Err(_) => Notice::OrderStatusFailed,
    };
    redirect_with(&back, notice)
}
