//! Subscription and plan management.
//!
//! One page lists subscriptions and plans. `?edit=<id>` opens the edit form
//! of a subscription and `?edit_plan=<id>` loads a plan into the plan form;
//! without it the plan form creates a new plan.

use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use iptv_catalog::{Catalog, PlanPatch};
use iptv_types::{PlanId, Price, Subscription, SubscriptionId, SubscriptionPlan, SubscriptionStatus};
use serde::Deserialize;
use tracing::warn;

use crate::{
    error::{SiteError, SiteResult},
    forms::{FieldErrors, ListQuery, PlanForm, SubscriptionForm, SubscriptionUpdateForm},
    notice::{Notice, redirect_with},
    page::PageContext,
    session::AdminSession,
    state::AppState,
    templates::{
        AdminSubscriptionsTemplate, Chrome, PlanRow, SelectOption, StatCard, SubscriptionRow,
    },
};

const TITLE: &str = "Subscription Management - IPTV Pro Admin";
const PAGE: &str = "/admin/subscriptions";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubscriptionsQuery {
    pub q: String,
    pub status: String,
    /// Subscription whose edit form is open.
    pub edit: String,
    /// Plan loaded into the plan form.
    pub edit_plan: String,
}

impl SubscriptionsQuery {
    fn list(&self) -> ListQuery {
        ListQuery { q: self.q.clone(), status: self.status.clone() }
    }
}

/// Forms re-rendered with what the admin entered.
#[derive(Default)]
struct Drafts {
    create: Option<(SubscriptionForm, FieldErrors)>,
    edit: Option<(SubscriptionUpdateForm, FieldErrors)>,
    plan: Option<(PlanForm, FieldErrors)>,
}

/// Handler for the subscriptions page.
pub async fn list(
    State(state): State<AppState>,
    _admin: AdminSession,
    ctx: PageContext,
    Query(query): Query<SubscriptionsQuery>,
) -> SiteResult<impl IntoResponse> {
    let catalog = state.catalog().await;
    render(&catalog, ctx.chrome(TITLE), &query, Drafts::default())
}

pub async fn create(
    State(state): State<AppState>,
    _admin: AdminSession,
    ctx: PageContext,
    Form(form): Form<SubscriptionForm>,
) -> SiteResult<Response> {
    let now = Utc::now();
    let new = match form.validate(now.date_naive()) {
        Ok(new) => new,
        Err(errors) => {
            let catalog = state.catalog().await;
            let drafts = Drafts { create: Some((form, errors)), ..Drafts::default() };
            return Ok(render(&catalog, ctx.chrome(TITLE), &SubscriptionsQuery::default(), drafts)?
                .into_response());
        }
    };

    let created = state.catalog_mut().await.create_subscription(new, now);
    let notice = match created {
        Ok(_) => Notice::SubscriptionCreated,
        Err(e) => {
            warn!(error = %e, "failed to create subscription");
            Notice::SubscriptionCreateFailed
        }
    };
    Ok(redirect_with(PAGE, notice).into_response())
}

pub async fn update(
    State(state): State<AppState>,
    _admin: AdminSession,
    ctx: PageContext,
    Path(id): Path<String>,
    Form(form): Form<SubscriptionUpdateForm>,
) -> SiteResult<Response> {
    let patch = match form.validate() {
        Ok(patch) => patch,
        Err(errors) => {
            let catalog = state.catalog().await;
            let query = SubscriptionsQuery { edit: id, ..SubscriptionsQuery::default() };
            let drafts = Drafts { edit: Some((form, errors)), ..Drafts::default() };
            return Ok(render(&catalog, ctx.chrome(TITLE), &query, drafts)?.into_response());
        }
    };

    let updated = state
        .catalog_mut()
        .await
        .update_subscription(&SubscriptionId::new(id), patch)
        .map(|_| ());
    let notice = match updated {
        Ok(()) => Notice::SubscriptionUpdated,
        Err(e) => {
            warn!(error = %e, "failed to update subscription");
            Notice::SubscriptionUpdateFailed
        }
    };
    Ok(redirect_with(PAGE, notice).into_response())
}

pub async fn cancel(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let cancelled = state.catalog_mut().await.cancel_subscription(&SubscriptionId::new(id));
    let notice = match cancelled {
        Ok(()) => Notice::SubscriptionCancelled,
        Err(e) => {
            warn!(error = %e, "failed to cancel subscription");
            Notice::SubscriptionCancelFailed
        }
    };
    redirect_with(PAGE, notice)
}

pub async fn create_plan(
    State(state): State<AppState>,
    _admin: AdminSession,
    ctx: PageContext,
    Form(form): Form<PlanForm>,
) -> SiteResult<Response> {
    let new = match form.validate() {
        Ok(new) => new,
        Err(errors) => {
            let catalog = state.catalog().await;
            let drafts = Drafts { plan: Some((form, errors)), ..Drafts::default() };
            return Ok(render(&catalog, ctx.chrome(TITLE), &SubscriptionsQuery::default(), drafts)?
                .into_response());
        }
    };

    state.catalog_mut().await.create_plan(new, Utc::now());
    Ok(redirect_with(PAGE, Notice::PlanCreated).into_response())
}

pub async fn update_plan(
    State(state): State<AppState>,
    _admin: AdminSession,
    ctx: PageContext,
    Path(id): Path<String>,
    Form(form): Form<PlanForm>,
) -> SiteResult<Response> {
    let new = match form.validate() {
        Ok(new) => new,
        Err(errors) => {
            let catalog = state.catalog().await;
            let query = SubscriptionsQuery { edit_plan: id, ..SubscriptionsQuery::default() };
            let drafts = Drafts { plan: Some((form, errors)), ..Drafts::default() };
            return Ok(render(&catalog, ctx.chrome(TITLE), &query, drafts)?.into_response());
        }
    };

    let patch = PlanPatch { is_active: Some(form.is_active_checked()), ..PlanPatch::from(new) };
    let updated = state.catalog_mut().await.update_plan(&PlanId::new(id), patch).map(|_| ());
    let notice = match updated {
        Ok(()) => Notice::PlanUpdated,
        Err(e) => {
            warn!(error = %e, "failed to save plan");
            Notice::PlanSaveFailed
        }
    };
    Ok(redirect_with(PAGE, notice).into_response())
}

pub async fn delete_plan(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let deleted = state.catalog_mut().await.delete_plan(&PlanId::new(id));
    let notice = match deleted {
        Ok(_) => Notice::PlanDeleted,
        Err(e) => {
            warn!(error = %e, "failed to delete plan");
            Notice::PlanDeleteFailed
        }
    };
    redirect_with(PAGE, notice)
}

fn render(
    catalog: &Catalog,
    page: Chrome,
    query: &SubscriptionsQuery,
    drafts: Drafts,
) -> SiteResult<AdminSubscriptionsTemplate> {
    let today = Utc::now().date_naive();
    let list = query.list();

    let subscriptions = catalog
        .search_subscriptions(&list.q, list.status::<SubscriptionStatus>())
        .into_iter()
        .map(|sub| SubscriptionRow::new(sub, catalog.user(&sub.user_id), today))
        .collect();

    let (editing, edit_form, edit_errors) = match drafts.edit {
        Some((form, errors)) => (Some(query.edit.clone()), form, errors),
        None if query.edit.is_empty() => (None, SubscriptionUpdateForm::default(), FieldErrors::default()),
        None => {
            let id = SubscriptionId::new(query.edit.as_str());
            let sub = catalog.subscription(&id).ok_or(SiteError::NotFound)?;
            (Some(query.edit.clone()), edit_form_for(sub), FieldErrors::default())
        }
    };

    let (editing_plan, plan_form, plan_errors) = match drafts.plan {
        Some((form, errors)) => (non_empty(&query.edit_plan), form, errors),
        None if query.edit_plan.is_empty() => (None, new_plan_form(), FieldErrors::default()),
        None => {
            let id = PlanId::new(query.edit_plan.as_str());
            let plan = catalog.plan(&id).ok_or(SiteError::NotFound)?;
            (Some(query.edit_plan.clone()), plan_form_for(plan), FieldErrors::default())
        }
    };

    let (form, errors) = drafts
        .create
        .unwrap_or_else(|| (SubscriptionForm::blank(), FieldErrors::default()));
    let user_options = catalog
        .users()
        .iter()
        .map(|u| SelectOption::new(u.id.as_str(), format!("{} ({})", u.name, u.email), &form.user_id))
        .collect();
    let plan_options = catalog
        .plans()
        .iter()
        .map(|p| SelectOption::new(p.id.as_str(), p.name.as_str(), &form.plan_id))
        .collect();

    let count = |status| catalog.count_subscriptions(status);
    let active_revenue: Price = catalog
        .subscriptions()
        .iter()
        .filter(|sub| sub.is_active())
        .map(|sub| sub.price)
        .sum();

    Ok(AdminSubscriptionsTemplate {
        page,
        subscriptions,
        plans: catalog.plans().iter().map(PlanRow::from).collect(),
        query: list.q.clone(),
        statuses: SelectOption::filter(
            "All Status",
            SubscriptionStatus::ALL.iter().map(|s| (s.as_str(), s.label())),
            &list.status,
        ),
        stats: vec![
            StatCard::new("Total Subscriptions", catalog.subscriptions().len()),
            StatCard::new("Active", count(SubscriptionStatus::Active)),
            StatCard::new("Expired", count(SubscriptionStatus::Expired)),
            StatCard::new("Active Revenue", active_revenue),
        ],
        form,
        errors,
        user_options,
        plan_options,
        edit_statuses: SubscriptionStatus::ALL
            .iter()
            .map(|s| SelectOption::new(s.as_str(), s.label(), &edit_form.status))
            .collect(),
        editing,
        edit_form,
        edit_errors,
        editing_plan,
        plan_form,
        plan_errors,
    })
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn edit_form_for(sub: &Subscription) -> SubscriptionUpdateForm {
    SubscriptionUpdateForm {
        plan_name: sub.plan_name.clone(),
        status: sub.status.as_str().to_string(),
        end_date: sub.end_date.format("%Y-%m-%d").to_string(),
        price: sub.price.to_plain(),
        max_devices: sub.max_devices.to_string(),
        auto_renew: if sub.auto_renew { "on".to_string() } else { String::new() },
    }
}

fn new_plan_form() -> PlanForm {
    PlanForm { duration: "1".to_string(), is_active: "on".to_string(), ..PlanForm::default() }
}

fn plan_form_for(plan: &SubscriptionPlan) -> PlanForm {
    PlanForm {
        name: plan.name.clone(),
        duration: plan.duration.to_string(),
        price: plan.price.to_plain(),
        original_price: plan.original_price.map(Price::to_plain).unwrap_or_default(),
        features: plan.features.join("\n"),
        is_active: if plan.is_active { "on".to_string() } else { String::new() },
    }
}
