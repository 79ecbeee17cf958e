//! Customer dashboard pages.
//!
//! Every handler takes a [`CustomerSession`], so anonymous visitors are
//! redirected to `/login` before any of this runs.

use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use iptv_catalog::CatalogError;
use iptv_types::{FavoriteId, OrderStatus, Price};
use tracing::warn;

use crate::{
    config::MockOp,
    content::FAVORITE_CATEGORIES,
    error::SiteResult,
    forms::{FavoritesQuery, FieldErrors, ProfileForm},
    notice::{Notice, Toast, redirect_with},
    page::PageContext,
    session::CustomerSession,
    state::AppState,
    templates::{
        Chrome, DashboardTemplate, FavoriteCard, FavoritesTemplate, OrderRow, OrdersTemplate, PlanCard,
        ProfileTemplate, SelectOption, StatCard, SubscriptionCard, SubscriptionsTemplate, date,
    },
};

const RECENT_ORDERS: usize = 3;

/// Handler for the dashboard overview.
pub async fn overview(
    State(state): State<AppState>,
    session: CustomerSession,
    ctx: PageContext,
) -> SiteResult<impl IntoResponse> {
    let today = Utc::now().date_naive();
    let catalog = state.catalog().await;
    let user = catalog
        .user(&session.user_id)
        .ok_or_else(|| CatalogError::UserNotFound(session.user_id.clone()))?;

    let subscriptions = catalog.subscriptions_for(&user.id);
    let orders = catalog.orders_for(&user.id);
    let active: Vec<SubscriptionCard> = subscriptions
        .iter()
        .filter(|sub| sub.is_active())
        .map(|sub| SubscriptionCard::new(sub, today))
        .collect();
    let t = ctx.lang.strings();

    Ok(DashboardTemplate {
        page: ctx.chrome("Dashboard - IPTV Pro"),
        name: user.name.clone(),
        stats: vec![
            StatCard::new(t.active_subscriptions, active.len()),
            StatCard::new("Total Subscriptions", subscriptions.len()),
            StatCard::new("Total Orders", orders.len()),
            StatCard::new(t.favorites, catalog.favorite_count(&user.id)),
        ],
        active,
        recent_orders: orders
            .iter()
            .take(RECENT_ORDERS)
            .map(|order| OrderRow::new(order, Some(user)))
            .collect(),
    })
}

pub async fn subscriptions(
    State(state): State<AppState>,
    session: CustomerSession,
    ctx: PageContext,
) -> impl IntoResponse {
    let today = Utc::now().date_naive();
    let t = ctx.lang.strings();
    let catalog = state.catalog().await;

    SubscriptionsTemplate {
        page: ctx.chrome("My Subscriptions - IPTV Pro"),
        subscriptions: catalog
            .subscriptions_for(&session.user_id)
            .into_iter()
            .map(|sub| SubscriptionCard::new(sub, today))
            .collect(),
        plans: catalog.active_plans().into_iter().map(|plan| PlanCard::new(plan, t)).collect(),
    }
}

pub async fn orders(
    State(state): State<AppState>,
    session: CustomerSession,
    ctx: PageContext,
) -> impl IntoResponse {
    let catalog = state.catalog().await;
    let user = catalog.user(&session.user_id);
    let orders = catalog.orders_for(&session.user_id);
    let paid: Vec<Price> = orders
        .iter()
        .filter(|order| order.status == OrderStatus::Paid)
        .map(|order| order.amount)
        .collect();

    OrdersTemplate {
        page: ctx.chrome("Order History - IPTV Pro"),
        stats: vec![
            StatCard::new("Total Orders", orders.len()),
            StatCard::new("Paid Orders", paid.len()),
            StatCard::new("Total Spent", paid.iter().copied().sum::<Price>()),
        ],
        orders: orders.into_iter().map(|order| OrderRow::new(order, user)).collect(),
    }
}

pub async fn profile(
    State(state): State<AppState>,
    session: CustomerSession,
    ctx: PageContext,
) -> SiteResult<impl IntoResponse> {
    let form = {
        let catalog = state.catalog().await;
        let user = catalog
            .user(&session.user_id)
            .ok_or_else(|| CatalogError::UserNotFound(session.user_id.clone()))?;
        ProfileForm {
            name: user.name.clone(),
            email: session.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            country: user.country.clone(),
        }
    };
    profile_page(&state, &session, ctx.chrome("My Profile - IPTV Pro"), form, FieldErrors::default())
        .await
}

/// Handler for the profile form.
pub async fn update_profile(
    State(state): State<AppState>,
    session: CustomerSession,
    ctx: PageContext,
    Form(form): Form<ProfileForm>,
) -> SiteResult<Response> {
    let patch = match form.validate() {
        Ok(patch) => patch,
        Err(errors) => {
            return Ok(profile_page(&state, &session, ctx.chrome("My Profile - IPTV Pro"), form, errors)
                .await?
                .into_response());
        }
    };

    state.simulate(MockOp::Auth).await;

    let email = patch.email.clone().unwrap_or_default();
    let updated = state.catalog_mut().await.update_profile(&session.user_id, patch).map(|_| ());
    match updated {
        Ok(()) => {
            state.sessions().write().await.update_customer_email(&session.user_id, &email);
            Ok(redirect_with("/dashboard/profile", Notice::ProfileUpdated).into_response())
        }
        Err(CatalogError::EmailTaken(_)) => {
            let mut errors = FieldErrors::default();
            errors.add("email", "An account with this email already exists");
            Ok(profile_page(&state, &session, ctx.chrome("My Profile - IPTV Pro"), form, errors)
                .await?
                .into_response())
        }
        Err(e) => {
            warn!(error = %e, "profile update failed");
            let page = ctx.chrome_with("My Profile - IPTV Pro", Toast::error("Failed to update profile"));
            Ok(profile_page(&state, &session, page, form, FieldErrors::default())
                .await?
                .into_response())
        }
    }
}

async fn profile_page(
    state: &AppState,
    session: &CustomerSession,
    page: Chrome,
    form: ProfileForm,
    errors: FieldErrors,
) -> SiteResult<ProfileTemplate> {
    let catalog = state.catalog().await;
    let user = catalog
        .user(&session.user_id)
        .ok_or_else(|| CatalogError::UserNotFound(session.user_id.clone()))?;
    Ok(ProfileTemplate {
        page,
        form,
        errors,
        initials: user.initials(),
        member_since: date(user.registered_at),
    })
}

/// Handler for the favorites grid with its search box and category filter.
pub async fn favorites(
    State(state): State<AppState>,
    session: CustomerSession,
    ctx: PageContext,
    Query(query): Query<FavoritesQuery>,
) -> impl IntoResponse {
    let catalog = state.catalog().await;
    let favorites = catalog
        .favorites_for(&session.user_id, &query.q, &query.category)
        .into_iter()
        .map(FavoriteCard::from)
        .collect();

    FavoritesTemplate {
        page: ctx.chrome("My Favorites - IPTV Pro"),
        favorites,
        categories: SelectOption::filter(
            "All Categories",
            FAVORITE_CATEGORIES.iter().map(|c| (*c, *c)),
            &query.category,
        ),
        total: catalog.favorite_count(&session.user_id),
        query: query.q,
    }
}

pub async fn remove_favorite(
    State(state): State<AppState>,
    session: CustomerSession,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let removed = state
        .catalog_mut()
        .await
        .remove_favorite(&session.user_id, &FavoriteId::new(id));
    match removed {
        Ok(_) => redirect_with("/dashboard/favorites", Notice::FavoriteRemoved),
        Err(e) => {
            warn!(error = %e, "failed to remove favorite");
            redirect_with("/dashboard/favorites", Notice::FavoriteRemoveFailed)
        }
    }
}
