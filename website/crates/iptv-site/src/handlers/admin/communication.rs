//! Bulk messaging: broadcasts, promotions, canned templates and the outbox.

use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use iptv_catalog::{Catalog, MESSAGE_TEMPLATES, message_template};
use iptv_types::{Audience, MessageChannel};
use serde::Deserialize;
use tracing::info;

use crate::{
    config::MockOp,
    forms::{BroadcastForm, FieldErrors, PromotionForm},
    notice::{Notice, redirect_with},
    page::PageContext,
    session::AdminSession,
    state::AppState,
    templates::{AdminCommunicationTemplate, Chrome, DispatchRow, SelectOption, StatCard, TemplateCard},
};

const TITLE: &str = "Communication Center - IPTV Pro Admin";

/// Subject of promotions when the canned template is missing.
const PROMOTION_SUBJECT: &str = "Special Promotion";

const TABS: [&str; 3] = ["broadcast", "templates", "history"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CommunicationQuery {
    pub tab: String,
    /// Canned message to load into the broadcast form.
    pub template: String,
}

/// Forms re-rendered with what the admin entered.
#[derive(Default)]
struct Drafts {
    broadcast: Option<(BroadcastForm, FieldErrors)>,
    promotion: Option<(PromotionForm, FieldErrors)>,
}

pub async fn page(
    State(state): State<AppState>,
    _admin: AdminSession,
    ctx: PageContext,
    Query(query): Query<CommunicationQuery>,
) -> impl IntoResponse {
    let mut drafts = Drafts::default();
    let mut tab = query.tab.as_str();
    if let Some(template) = message_template(&query.template) {
        let form = BroadcastForm {
            subject: template.subject.to_string(),
            message: template.content.to_string(),
            ..BroadcastForm::default()
        };
        drafts.broadcast = Some((form, FieldErrors::default()));
        tab = "broadcast";
    }

    let catalog = state.catalog().await;
    render(&catalog, ctx.chrome(TITLE), tab, drafts)
}

/// Sends a message to every customer in the chosen audience.
pub async fn broadcast(
    State(state): State<AppState>,
    _admin: AdminSession,
    ctx: PageContext,
    Form(form): Form<BroadcastForm>,
) -> Response {
    let (audience, channel) = match form.validate() {
        Ok(target) => target,
        Err(errors) => {
            let catalog = state.catalog().await;
            let drafts = Drafts { broadcast: Some((form, errors)), ..Drafts::default() };
            return render(&catalog, ctx.chrome(TITLE), "broadcast", drafts).into_response();
        }
    };

    state.simulate(MockOp::BulkMessage).await;

    let recipients = {
        let mut catalog = state.catalog_mut().await;
        let recipients = catalog.audience(audience);
        let count = recipients.len();
        catalog.record_dispatch(
            recipients,
            channel,
            form.subject.trim(),
            form.message.trim(),
            Some(audience),
            Utc::now(),
        );
        count
    };

    info!(%audience, %channel, recipients, "broadcast sent");
    redirect_with("/admin/communication?tab=history", Notice::BroadcastSent { recipients, channel })
        .into_response()
}

/// Sends a promotional email to the chosen audience.
pub async fn promotion(
    State(state): State<AppState>,
    _admin: AdminSession,
    ctx: PageContext,
    Form(form): Form<PromotionForm>,
) -> Response {
    let audience = match form.validate() {
        Ok(audience) => audience,
        Err(errors) => {
            let catalog = state.catalog().await;
            let drafts = Drafts { promotion: Some((form, errors)), ..Drafts::default() };
            return render(&catalog, ctx.chrome(TITLE), "broadcast", drafts).into_response();
        }
    };

    state.simulate(MockOp::BulkMessage).await;

    let subject = message_template("promotion").map_or(PROMOTION_SUBJECT, |t| t.subject);
    let recipients = {
        let mut catalog = state.catalog_mut().await;
        let recipients = catalog.audience(audience);
        let count = recipients.len();
        catalog.record_dispatch(
            recipients,
            MessageChannel::Email,
            subject,
            form.message.trim(),
            Some(audience),
            Utc::now(),
        );
        count
    };

    info!(%audience, recipients, "promotion sent");
    redirect_with("/admin/communication?tab=history", Notice::PromotionSent { recipients })
        .into_response()
}

fn render(catalog: &Catalog, page: Chrome, tab: &str, drafts: Drafts) -> AdminCommunicationTemplate {
    let tab = if TABS.iter().any(|t| *t == tab) { tab } else { TABS[0] };
    let audience_size = |audience| catalog.audience(audience).len();
    let audience_options = |current: &str| -> Vec<SelectOption> {
        Audience::ALL
            .iter()
            .map(|a| SelectOption::new(a.as_str(), format!("{} ({})", a.label(), audience_size(*a)), current))
            .collect()
    };

    let (form, errors) = drafts.broadcast.unwrap_or_default();
    let (promotion, promotion_errors) = drafts.promotion.unwrap_or_default();

    AdminCommunicationTemplate {
        page,
        tab: tab.to_string(),
        stats: vec![
            StatCard::new("Total Users", catalog.users().len()),
            StatCard::new("Active Subscribers", audience_size(Audience::Active)),
            StatCard::new("Expired Subscribers", audience_size(Audience::Expired)),
            StatCard::new("Messages Sent", catalog.dispatches().count()),
        ],
        audiences: audience_options(&form.audience),
        promotion_audiences: audience_options(&promotion.audience),
        channels: MessageChannel::ALL
            .iter()
            .map(|c| SelectOption::new(c.as_str(), c.label(), &form.channel))
            .collect(),
        form,
        errors,
        promotion,
        promotion_errors,
        templates: MESSAGE_TEMPLATES
            .iter()
            .map(|t| TemplateCard { id: t.id, name: t.name, subject: t.subject, content: t.content })
            .collect(),
        history: catalog.dispatches().map(DispatchRow::from).collect(),
    }
}
