//! Customer management.

use axum::{
    Form,
    extract::{Path, Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use iptv_catalog::CatalogError;
use iptv_types::{MessageChannel, UserId, UserStatus};
use tracing::{info, warn};

use crate::{
    config::MockOp,
    error::SiteResult,
    forms::{DirectMessageForm, FieldErrors, ListQuery, UserStatusForm},
    handlers::referer_path,
    notice::{Notice, redirect_with},
    page::PageContext,
    session::AdminSession,
    state::AppState,
    templates::{
        AdminUserDetailTemplate, AdminUsersTemplate, Chrome, OrderRow, SelectOption, StatCard,
        SubscriptionCard, UserRow,
    },
};

/// Subject used when a direct message is sent without one.
const DEFAULT_SUBJECT: &str = "Message from IPTV Pro";

/// Handler for the user table.
pub async fn list(
    State(state): State<AppState>,
    _admin: AdminSession,
    ctx: PageContext,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let catalog = state.catalog().await;
    let users = catalog
        .search_users(&query.q, query.status::<UserStatus>())
        .into_iter()
        .map(|user| UserRow::new(user, catalog.subscriptions_for(&user.id).len()))
        .collect();
    let count = |status: UserStatus| catalog.users().iter().filter(|u| u.status == status).count();

    AdminUsersTemplate {
        page: ctx.chrome("User Management - IPTV Pro Admin"),
        users,
        statuses: SelectOption::filter(
            "All Status",
            UserStatus::ALL.iter().map(|s| (s.as_str(), s.label())),
            &query.status,
        ),
        stats: vec![
            StatCard::new("Total Users", catalog.users().len()),
            StatCard::new("Active Users", count(UserStatus::Active)),
            StatCard::new("Suspended", count(UserStatus::Suspended)),
            StatCard::new("Banned", count(UserStatus::Banned)),
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
    let page = ctx.chrome("User Details - IPTV Pro Admin");
    detail_page(&state, page, &UserId::new(id), DirectMessageForm::default(), FieldErrors::default()).await
}

async fn detail_page(
    state: &AppState,
    page: Chrome,
    id: &UserId,
    message: DirectMessageForm,
    errors: FieldErrors,
) -> SiteResult<AdminUserDetailTemplate> {
    let today = Utc::now().date_naive();
    let catalog = state.catalog().await;
    let user = catalog.user(id).ok_or_else(|| CatalogError::UserNotFound(id.clone()))?;
    let subscriptions: Vec<SubscriptionCard> = catalog
        .subscriptions_for(id)
        .into_iter()
        .map(|sub| SubscriptionCard::new(sub, today))
        .collect();
    let channel = if message.channel.is_empty() {
        MessageChannel::Email.as_str().to_string()
    } else {
        message.channel.clone()
    };

    Ok(AdminUserDetailTemplate {
        page,
        user: UserRow::new(user, subscriptions.len()),
        subscriptions,
        orders: catalog.orders_for(id).into_iter().map(|o| OrderRow::new(o, Some(user))).collect(),
        statuses: UserStatus::ALL
            .iter()
            .map(|s| SelectOption::new(s.as_str(), s.label(), user.status.as_str()))
            .collect(),
        channels: MessageChannel::ALL
            .iter()
            .map(|c| SelectOption::new(c.as_str(), c.label(), &channel))
            .collect(),
        message,
        errors,
    })
}

/// Handler for the status dropdown, on the table or the detail page.
pub async fn update_status(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(id): Path<String>,
    headers: HeaderMap,
    Form(form): Form<UserStatusForm>,
) -> impl IntoResponse {
    let back = referer_path(&headers, &format!("/admin/users/{id}"));
    let id = UserId::new(id);

    let notice = match form.validate() {
        Ok(status) => match state.catalog_mut().await.update_user_status(&id, status) {
            Ok(()) => Notice::UserStatusUpdated(status),
            Err(e) => {
                warn!(error = %e, "failed to update user status");
                Notice::UserStatusFailed
            }
        },
        Err(_) => Notice::UserStatusFailed,
    };
    redirect_with(&back, notice)
}

/// Deletes a customer with their subscriptions and favorites.
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let removed = state.catalog_mut().await.delete_user(&UserId::new(id));
    let notice = match removed {
        Ok(user) => {
            let sessions = state.sessions().write().await.sign_out_user(&user.id);
            info!(user = %user.id, email = %user.email, sessions, "admin deleted user");
            Notice::UserDeleted
        }
        Err(e) => {
            warn!(error = %e, "failed to delete user");
            Notice::UserDeleteFailed
        }
    };
    redirect_with("/admin/users", notice)
}

/// Sends an email or WhatsApp message to one customer.
pub async fn message(
    State(state): State<AppState>,
    _admin: AdminSession,
    ctx: PageContext,
    Path(id): Path<String>,
    Form(form): Form<DirectMessageForm>,
) -> SiteResult<Response> {
    let id = UserId::new(id);
    let channel = match form.validate() {
        Ok(channel) => channel,
        Err(errors) => {
            let page = ctx.chrome("User Details - IPTV Pro Admin");
            return Ok(detail_page(&state, page, &id, form, errors).await?.into_response());
        }
    };

    state.simulate(MockOp::DirectMessage).await;

    let back = format!("/admin/users/{id}");
    let notice = {
        let mut catalog = state.catalog_mut().await;
        if catalog.user(&id).is_some() {
            let subject = match form.subject.trim() {
                "" => DEFAULT_SUBJECT,
                subject => subject,
            };
            catalog.record_dispatch(vec![id], channel, subject, form.message.trim(), None, Utc::now());
            Notice::MessageSent(channel)
        } else {
            warn!(user = %id, "message to unknown user");
            Notice::MessageFailed
        }
    };
    Ok(redirect_with(&back, notice).into_response())
}
