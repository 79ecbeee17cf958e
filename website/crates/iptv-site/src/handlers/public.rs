//! Public marketing pages.

use axum::{
    Form,
    extract::{Query, State},
    response::IntoResponse,
};
use tracing::info;

use crate::{
    config::MockOp,
    content::{self, FAQS},
    forms::{ContactForm, FieldErrors, HomeQuery},
    notice::Toast,
    page::PageContext,
    state::AppState,
    templates::{
        AboutTemplate, Chrome, ContactTemplate, FaqItem, HomeTemplate, PlanCard, Showcase,
        TestimonialCard,
    },
};

/// Handler for the home page.
pub async fn home(
    State(state): State<AppState>,
    ctx: PageContext,
    Query(query): Query<HomeQuery>,
) -> impl IntoResponse {
    let t = ctx.lang.strings();
    let plans = state
        .catalog()
        .await
        .active_plans()
        .into_iter()
        .map(|plan| PlanCard::new(plan, t))
        .collect();

    let tab = query.showcase_tab();
    let open = query.open_panel(FAQS.len());
    let faqs = FAQS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_open = open == Some(i);
            FaqItem {
                question: item.question,
                answer: item.answer,
                open: is_open,
                href: HomeQuery::href(tab, Some((i, is_open)), "faq"),
            }
        })
        .collect();

    let testimonials = content::TESTIMONIALS
        .iter()
        .map(|t| TestimonialCard {
            name: t.name,
            location: t.location,
            comment: t.comment,
            stars: "★".repeat(usize::from(t.rating)),
        })
        .collect();

    HomeTemplate {
        page: ctx.chrome("IPTV Pro - Premium IPTV Streaming Service"),
        plans,
        stats: &content::HOME_STATS,
        showcase: Showcase::new(&query),
        premium_features: &content::PREMIUM_FEATURES,
        premium_stats: &content::PREMIUM_STATS,
        matches: &content::UPCOMING_MATCHES,
        leagues: &content::LEAGUES,
        testimonials,
        faqs,
    }
}

pub async fn about(ctx: PageContext) -> impl IntoResponse {
    AboutTemplate {
        page: ctx.chrome("About Us - IPTV Pro"),
        values: &content::VALUES,
        stats: &content::ABOUT_STATS,
    }
}

pub async fn contact(ctx: PageContext) -> impl IntoResponse {
    contact_page(ctx.chrome("Contact Us - IPTV Pro"), ContactForm::default(), FieldErrors::default())
}

/// Handler for the contact form.
pub async fn send_contact(
    State(state): State<AppState>,
    ctx: PageContext,
    Form(form): Form<ContactForm>,
) -> impl IntoResponse {
    if let Err(errors) = form.validate() {
        return contact_page(ctx.chrome("Contact Us - IPTV Pro"), form, errors);
    }

    state.simulate(MockOp::Contact).await;
    info!(subject = %form.subject.trim(), "contact message received");

    contact_page(
        ctx.chrome_with(
            "Contact Us - IPTV Pro",
            Toast::success("Message sent successfully! We'll get back to you soon."),
        ),
        ContactForm::default(),
        FieldErrors::default(),
    )
}

fn contact_page(page: Chrome, form: ContactForm, errors: FieldErrors) -> ContactTemplate {
    ContactTemplate {
        page,
        channels: &content::CONTACT_CHANNELS,
        whatsapp_url: content::WHATSAPP_URL,
        form,
        errors,
    }
}
