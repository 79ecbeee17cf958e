//! Plan checkout.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use iptv_types::{PlanId, SubscriptionPlan};
use tracing::{info, warn};

use crate::{
    config::MockOp,
    content::COUNTRIES,
    forms::{CheckoutForm, FieldErrors},
    notice::{Notice, Toast, redirect_with},
    page::PageContext,
    session::CustomerSession,
    state::AppState,
    templates::{CheckoutSummary, CheckoutTemplate, Chrome, PlanCard, SelectOption},
};

const TITLE: &str = "Checkout - IPTV Pro";

/// Handler for the checkout page of one plan.
pub async fn checkout(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
    session: Result<CustomerSession, Redirect>,
    ctx: PageContext,
) -> Response {
    let Some(plan) = plan_for_sale(&state, &plan_id).await else {
        return Redirect::to("/").into_response();
    };

    let form = match &session {
        Ok(session) => {
            let catalog = state.catalog().await;
            let (first, last) = catalog
                .user(&session.user_id)
                .map(|user| user.split_name())
                .unwrap_or_default();
            CheckoutForm::prefilled(first, last, &session.email)
        }
        Err(_) => CheckoutForm::prefilled("", "", ""),
    };

    checkout_page(ctx.chrome(TITLE), &plan, form, FieldErrors::default()).into_response()
}

/// Handler for the payment form.
pub async fn pay(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
    session: Result<CustomerSession, Redirect>,
    ctx: PageContext,
    Form(form): Form<CheckoutForm>,
) -> Response {
    let Some(plan) = plan_for_sale(&state, &plan_id).await else {
        return Redirect::to("/").into_response();
    };

    let method = match form.validate() {
        Ok(method) => method,
        Err(errors) => return checkout_page(ctx.chrome(TITLE), &plan, form, errors).into_response(),
    };

    state.simulate(MockOp::Checkout).await;

    if let Ok(session) = session {
        let purchase = state
            .catalog_mut()
            .await
            .checkout(&session.user_id, &plan.id, method, Utc::now());
        match purchase {
            Ok((order, subscription)) => {
                info!(user = %session.user_id, %order, %subscription, "checkout completed");
            }
            Err(e) => {
                warn!(error = %e, "checkout failed");
                let page = ctx.chrome_with(TITLE, Toast::error("Payment failed. Please try again."));
                return checkout_page(page, &plan, form, FieldErrors::default()).into_response();
            }
        }
    } else {
        info!(plan = %plan.id, "guest checkout completed");
    }

    redirect_with("/dashboard", Notice::PaymentSuccessful).into_response()
}

/// The plan if it exists and is on sale.
async fn plan_for_sale(state: &AppState, plan_id: &str) -> Option<SubscriptionPlan> {
    let plan = state
        .catalog()
        .await
        .plan(&PlanId::new(plan_id))
        .filter(|plan| plan.is_active)
        .cloned();
    if plan.is_none() {
        warn!(plan = plan_id, "checkout for unknown or inactive plan");
    }
    plan
}

fn checkout_page(page: Chrome, plan: &SubscriptionPlan, form: CheckoutForm, errors: FieldErrors) -> CheckoutTemplate {
    let countries = COUNTRIES
        .iter()
        .map(|(code, name)| SelectOption::new(*code, *name, &form.country))
        .collect();
    CheckoutTemplate {
        plan: PlanCard::new(plan, page.t),
        summary: CheckoutSummary::new(plan),
        page,
        countries,
        pays_by_card: form.pays_by_card(),
        terms_accepted: form.terms_accepted(),
        form,
        errors,
    }
}
