//! Askama Templates
//!
//! Template structs for rendering HTML pages, plus the display rows they
//! iterate over. Rows hold preformatted strings so templates stay logic-free.

use askama::Template;
use askama_web::WebTemplate;
use chrono::{DateTime, NaiveDate, Utc};
use iptv_types::{
    Customer, Dispatch, Favorite, Order, PlanPopularity, Price, Subscription, SubscriptionPlan,
};

use crate::{
    content::{self, Card, ContactChannel, Fixture, League, ShowcaseTab, Stat},
    forms::{
        AdminLoginForm, BroadcastForm, CheckoutForm, ContactForm, DirectMessageForm, FieldErrors,
        ForgotPasswordForm, HomeQuery, LoginForm, PlanForm, ProfileForm, PromotionForm,
        RegisterForm, SubscriptionForm, SubscriptionUpdateForm,
    },
    i18n::Strings,
    notice::Toast,
};

// ============================================================================
// Shared chrome
// ============================================================================

/// Data used by `base.html` on every page.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub title: String,
    pub lang: &'static str,
    pub dir: &'static str,
    pub theme: &'static str,
    pub next_theme: &'static str,
    pub t: &'static Strings,
    pub languages: Vec<LangOption>,
    pub customer: Option<String>,
    pub admin: Option<String>,
    pub toast: Option<Toast>,
    pub path: String,
    pub version: &'static str,
}

impl Chrome {
    /// Whether `prefix` is the current section, for nav highlighting.
    pub fn in_section(&self, prefix: &str) -> bool {
        if prefix == "/" {
            self.path == "/"
        } else {
            self.path == prefix || self.path.starts_with(&format!("{prefix}/"))
        }
    }
}

#[derive(Debug, Clone)]
pub struct LangOption {
    pub code: &'static str,
    pub name: &'static str,
    pub current: bool,
}

/// An `<option>` of a select box.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>, current: &str) -> Self {
        let value = value.into();
        Self { selected: value == current, label: label.into(), value }
    }

    /// An "All" option followed by one option per slug/label pair.
    pub fn filter(all_label: &str, items: impl IntoIterator<Item = (&'static str, &'static str)>, current: &str) -> Vec<Self> {
        let current = if current.is_empty() { "all" } else { current };
        std::iter::once(Self::new("all", all_label, current))
            .chain(items.into_iter().map(|(value, label)| Self::new(value, label, current)))
            .collect()
    }
}

/// A labelled figure on a stats card.
#[derive(Debug, Clone)]
pub struct StatCard {
    pub label: String,
    pub value: String,
}

impl StatCard {
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self { label: label.into(), value: value.to_string() }
    }
}

pub fn date(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

pub fn date_time(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

// ============================================================================
// Rows
// ============================================================================

#[derive(Debug, Clone)]
pub struct PlanCard {
    pub id: String,
    pub name: String,
    pub duration: String,
    pub price: String,
    pub original_price: Option<String>,
    pub savings: Option<String>,
    pub features: Vec<String>,
    pub badge: Option<&'static str>,
}

impl PlanCard {
    pub fn new(plan: &SubscriptionPlan, t: &Strings) -> Self {
        let savings = plan.savings();
        Self {
            id: plan.id.to_string(),
            name: plan.name.clone(),
            duration: plan.duration_label(),
            price: plan.price.to_string(),
            original_price: plan.original_price.map(|p| p.to_string()),
            savings: (!savings.is_zero()).then(|| savings.to_string()),
            features: plan.features.clone(),
            badge: content::plan_badge(plan.id.as_str(), t),
        }
    }
}

/// Admin view of a plan.
#[derive(Debug, Clone)]
pub struct PlanRow {
    pub id: String,
    pub name: String,
    pub duration: String,
    pub price: String,
    pub original_price: Option<String>,
    pub features: Vec<String>,
    pub is_active: bool,
    pub subscriber_count: u64,
    pub created_at: String,
}

impl From<&SubscriptionPlan> for PlanRow {
    fn from(plan: &SubscriptionPlan) -> Self {
        Self {
            id: plan.id.to_string(),
            name: plan.name.clone(),
            duration: plan.duration_label(),
            price: plan.price.to_string(),
            original_price: plan.original_price.map(|p| p.to_string()),
            features: plan.features.clone(),
            is_active: plan.is_active,
            subscriber_count: plan.subscriber_count,
            created_at: date(plan.created_at),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubscriptionCard {
    pub id: String,
    pub plan_id: String,
    pub plan_name: String,
    pub status: &'static str,
    pub status_label: &'static str,
    pub is_active: bool,
    pub start_date: String,
    pub end_date: String,
    pub days_remaining: i64,
    pub price: String,
    pub devices: u32,
    pub max_devices: u32,
    pub auto_renew: bool,
    pub features: Vec<String>,
}

impl SubscriptionCard {
    pub fn new(sub: &Subscription, today: NaiveDate) -> Self {
        Self {
            id: sub.id.to_string(),
            plan_id: sub.plan_id.to_string(),
            plan_name: sub.plan_name.clone(),
            status: sub.status.as_str(),
            status_label: sub.status.label(),
            is_active: sub.is_active(),
            start_date: date(sub.start_date),
            end_date: date(sub.end_date),
            days_remaining: sub.days_remaining(today),
            price: sub.price.to_string(),
            devices: sub.devices,
            max_devices: sub.max_devices,
            auto_renew: sub.auto_renew,
            features: sub.features.clone(),
        }
    }
}

/// Admin table row of a subscription with its owner.
#[derive(Debug, Clone)]
pub struct SubscriptionRow {
    pub sub: SubscriptionCard,
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub price_plain: String,
}

impl SubscriptionRow {
    pub fn new(sub: &Subscription, owner: Option<&Customer>, today: NaiveDate) -> Self {
        Self {
            sub: SubscriptionCard::new(sub, today),
            user_id: sub.user_id.to_string(),
            user_name: owner.map_or_else(|| "Unknown user".to_string(), |u| u.name.clone()),
            user_email: owner.map(|u| u.email.clone()).unwrap_or_default(),
            price_plain: sub.price.to_plain(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrderRow {
    pub id: String,
    pub user_id: String,
    pub customer: String,
    pub plan_name: String,
    pub amount: String,
    pub status: &'static str,
    pub status_label: &'static str,
    pub payment_method: String,
    pub created_at: String,
    pub invoice_url: Option<String>,
}

impl OrderRow {
    pub fn new(order: &Order, customer: Option<&Customer>) -> Self {
        Self {
            id: order.id.to_string(),
            user_id: order.user_id.to_string(),
            customer: customer.map_or_else(|| "Unknown user".to_string(), |u| u.name.clone()),
            plan_name: order.plan_name.clone(),
            amount: order.amount.to_string(),
            status: order.status.as_str(),
            status_label: order.status.label(),
            payment_method: order.payment_method.clone(),
            created_at: date(order.created_at),
            invoice_url: order.invoice_url.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub status: &'static str,
    pub status_label: &'static str,
    pub registered_at: String,
    pub last_login: String,
    pub total_spent: String,
    pub subscriptions: usize,
}

impl UserRow {
    pub fn new(user: &Customer, subscriptions: usize) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            initials: user.initials(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            country: user.country.clone(),
            status: user.status.as_str(),
            status_label: user.status.label(),
            registered_at: date(user.registered_at),
            last_login: date(user.last_login),
            total_spent: user.total_spent.to_string(),
            subscriptions,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FavoriteCard {
    pub id: String,
    pub name: String,
    pub category: String,
    pub kind: &'static str,
    pub image: String,
    pub added_at: String,
}

impl From<&Favorite> for FavoriteCard {
    fn from(favorite: &Favorite) -> Self {
        Self {
            id: favorite.id.to_string(),
            name: favorite.name.clone(),
            category: favorite.category.clone(),
            kind: favorite.kind.label(),
            image: favorite.image.clone(),
            added_at: date(favorite.added_at),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DispatchRow {
    pub id: String,
    pub channel: &'static str,
    pub subject: String,
    pub body: String,
    pub audience: String,
    pub recipients: usize,
    pub sent_at: String,
}

impl From<&Dispatch> for DispatchRow {
    fn from(dispatch: &Dispatch) -> Self {
        Self {
            id: dispatch.id.to_string(),
            channel: dispatch.channel.label(),
            subject: dispatch.subject.clone(),
            body: dispatch.body.clone(),
            audience: dispatch
                .audience
                .map_or_else(|| "Direct message".to_string(), |a| a.label().to_string()),
            recipients: dispatch.recipients.len(),
            sent_at: date_time(dispatch.sent_at),
        }
    }
}

/// One bar of a chart, scaled against the largest value.
#[derive(Debug, Clone)]
pub struct ChartBar {
    pub label: String,
    pub value: String,
    pub detail: String,
    pub percent: u64,
}

impl ChartBar {
    pub fn scaled(label: impl Into<String>, value: u64, max: u64, shown: String, detail: String) -> Self {
        Self {
            label: label.into(),
            value: shown,
            detail,
            percent: share(value, max),
        }
    }
}

/// `part` as a whole percentage of `total`, zero when `total` is zero.
pub(crate) fn share(part: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    u64::try_from(u128::from(part) * 100 / u128::from(total)).unwrap_or(u64::MAX)
}

#[derive(Debug, Clone)]
pub struct PopularPlanRow {
    pub name: String,
    pub count: u64,
    pub revenue: String,
    pub percent: u64,
}

impl PopularPlanRow {
    pub fn rows(plans: &[PlanPopularity]) -> Vec<Self> {
        let total = plans.iter().fold(0u64, |acc, p| acc.saturating_add(p.count));
        plans
            .iter()
            .map(|p| Self {
                name: p.plan_name.clone(),
                count: p.count,
                revenue: p.revenue.to_string(),
                percent: share(p.count, total),
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
    pub open: bool,
    pub href: String,
}

#[derive(Debug, Clone)]
pub struct TestimonialCard {
    pub name: &'static str,
    pub location: &'static str,
    pub comment: &'static str,
    pub stars: String,
}

/// The tabbed content showcase of the home page.
#[derive(Debug, Clone)]
pub struct Showcase {
    pub tabs: Vec<ShowcaseTabLink>,
    pub cards: Vec<ShowcaseCard>,
    pub view_all: String,
    pub sports: bool,
}

impl Showcase {
    pub fn new(query: &HomeQuery) -> Self {
        let selected = query.showcase_tab();
        let faq = query.faq_state();
        Self {
            tabs: ShowcaseTab::ALL
                .into_iter()
                .map(|tab| ShowcaseTabLink {
                    label: tab.label(),
                    href: HomeQuery::href(tab, faq, "showcase"),
                    active: tab == selected,
                })
                .collect(),
            cards: ShowcaseCard::for_tab(selected),
            view_all: format!("View All {}", selected.noun()),
            sports: selected == ShowcaseTab::Sports,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShowcaseTabLink {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// A movie, series or competition card.
#[derive(Debug, Clone)]
pub struct ShowcaseCard {
    pub title: &'static str,
    pub image: &'static str,
    /// Genre, or competition type for sports.
    pub tagline: &'static str,
    pub next_match: Option<&'static str>,
    pub facts: Vec<String>,
    pub rating: Option<&'static str>,
    pub description: &'static str,
}

impl ShowcaseCard {
    pub fn for_tab(tab: ShowcaseTab) -> Vec<Self> {
        match tab {
            ShowcaseTab::Movies => content::MOVIES
                .iter()
                .map(|m| Self {
                    title: m.title,
                    image: m.image,
                    tagline: m.genre,
                    next_match: None,
                    facts: vec![m.year.to_string(), m.duration.to_string()],
                    rating: Some(m.rating),
                    description: m.description,
                })
                .collect(),
            ShowcaseTab::Series => content::SERIES
                .iter()
                .map(|s| Self {
                    title: s.title,
                    image: s.image,
                    tagline: s.genre,
                    next_match: None,
                    facts: vec![
                        s.years.to_string(),
                        format!("{} Seasons \u{2022} {} Episodes", s.seasons, s.episodes),
                    ],
                    rating: Some(s.rating),
                    description: s.description,
                })
                .collect(),
            ShowcaseTab::Sports => content::COMPETITIONS
                .iter()
                .map(|c| Self {
                    title: c.title,
                    image: c.image,
                    tagline: c.kind,
                    next_match: Some(c.next_match),
                    facts: vec![c.date.to_string(), c.time.to_string()],
                    rating: None,
                    description: c.description,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TemplateCard {
    pub id: &'static str,
    pub name: &'static str,
    pub subject: &'static str,
    pub content: &'static str,
}

/// Price breakdown shown next to the checkout form.
#[derive(Debug, Clone)]
pub struct CheckoutSummary {
    pub subtotal: String,
    pub savings: Option<String>,
    pub tax: String,
    pub total: String,
}

impl CheckoutSummary {
    pub fn new(plan: &SubscriptionPlan) -> Self {
        let tax = plan.price.tax();
        let savings = plan.savings();
        Self {
            subtotal: plan.price.to_string(),
            savings: (!savings.is_zero()).then(|| savings.to_string()),
            tax: tax.to_string(),
            total: (plan.price + tax).to_string(),
        }
    }
}

/// Sum shown under a money column.
pub fn total<'a>(amounts: impl IntoIterator<Item = &'a Price>) -> String {
    amounts.into_iter().sum::<Price>().to_string()
}

// ============================================================================
// Public pages
// ============================================================================

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: Chrome,
    pub plans: Vec<PlanCard>,
    pub stats: &'static [Stat],
    pub showcase: Showcase,
    pub premium_features: &'static [Card],
    pub premium_stats: &'static [Stat],
    pub matches: &'static [Fixture],
    pub leagues: &'static [League],
    pub testimonials: Vec<TestimonialCard>,
    pub faqs: Vec<FaqItem>,
}

#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub page: Chrome,
    pub values: &'static [Card],
    pub stats: &'static [Stat],
}

#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub page: Chrome,
    pub channels: &'static [ContactChannel],
    pub whatsapp_url: &'static str,
    pub form: ContactForm,
    pub errors: FieldErrors,
}

#[derive(Template, WebTemplate)]
#[template(path = "checkout.html")]
pub struct CheckoutTemplate {
    pub page: Chrome,
    pub plan: PlanCard,
    pub summary: CheckoutSummary,
    pub form: CheckoutForm,
    pub errors: FieldErrors,
    pub countries: Vec<SelectOption>,
    pub pays_by_card: bool,
    pub terms_accepted: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub page: Chrome,
    pub form: LoginForm,
    pub errors: FieldErrors,
}

#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub page: Chrome,
    pub form: RegisterForm,
    pub errors: FieldErrors,
}

#[derive(Template, WebTemplate)]
#[template(path = "auth/forgot_password.html")]
pub struct ForgotPasswordTemplate {
    pub page: Chrome,
    pub form: ForgotPasswordForm,
    pub errors: FieldErrors,
    /// Address the reset instructions went to, once sent.
    pub sent_to: Option<String>,
}

#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub page: Chrome,
    pub status: u16,
    pub message: String,
}

// ============================================================================
// Customer dashboard
// ============================================================================

#[derive(Template, WebTemplate)]
#[template(path = "dashboard/overview.html")]
pub struct DashboardTemplate {
    pub page: Chrome,
    pub name: String,
    pub stats: Vec<StatCard>,
    pub active: Vec<SubscriptionCard>,
    pub recent_orders: Vec<OrderRow>,
}

#[derive(Template, WebTemplate)]
#[template(path = "dashboard/subscriptions.html")]
pub struct SubscriptionsTemplate {
    pub page: Chrome,
    pub subscriptions: Vec<SubscriptionCard>,
    pub plans: Vec<PlanCard>,
}

#[derive(Template, WebTemplate)]
#[template(path = "dashboard/orders.html")]
pub struct OrdersTemplate {
    pub page: Chrome,
    pub orders: Vec<OrderRow>,
    pub stats: Vec<StatCard>,
}

#[derive(Template, WebTemplate)]
#[template(path = "dashboard/profile.html")]
pub struct ProfileTemplate {
    pub page: Chrome,
    pub form: ProfileForm,
    pub errors: FieldErrors,
    pub initials: String,
    pub member_since: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "dashboard/favorites.html")]
pub struct FavoritesTemplate {
    pub page: Chrome,
    pub favorites: Vec<FavoriteCard>,
    pub query: String,
    pub categories: Vec<SelectOption>,
    pub total: usize,
}

// ============================================================================
// Admin panel
// ============================================================================

#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct AdminLoginTemplate {
    pub page: Chrome,
    pub form: AdminLoginForm,
    pub errors: FieldErrors,
}

#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub page: Chrome,
    pub stats: Vec<StatCard>,
    pub revenue: Vec<ChartBar>,
    pub statuses: Vec<StatCard>,
    pub popular_plans: Vec<PopularPlanRow>,
    pub recent_users: Vec<UserRow>,
}

#[derive(Template, WebTemplate)]
#[template(path = "admin/users.html")]
pub struct AdminUsersTemplate {
    pub page: Chrome,
    pub users: Vec<UserRow>,
    pub query: String,
    pub statuses: Vec<SelectOption>,
    pub stats: Vec<StatCard>,
}

#[derive(Template, WebTemplate)]
#[template(path = "admin/user_detail.html")]
pub struct AdminUserDetailTemplate {
    pub page: Chrome,
    pub user: UserRow,
    pub subscriptions: Vec<SubscriptionCard>,
    pub orders: Vec<OrderRow>,
    pub statuses: Vec<SelectOption>,
    pub channels: Vec<SelectOption>,
    pub message: DirectMessageForm,
    pub errors: FieldErrors,
}

#[derive(Template, WebTemplate)]
#[template(path = "admin/subscriptions.html")]
pub struct AdminSubscriptionsTemplate {
    pub page: Chrome,
    pub subscriptions: Vec<SubscriptionRow>,
    pub plans: Vec<PlanRow>,
    pub query: String,
    pub statuses: Vec<SelectOption>,
    pub stats: Vec<StatCard>,
    /// New-subscription form.
    pub form: SubscriptionForm,
    pub errors: FieldErrors,
    pub user_options: Vec<SelectOption>,
    pub plan_options: Vec<SelectOption>,
    /// Subscription being edited, with its form.
    pub editing: Option<String>,
    pub edit_form: SubscriptionUpdateForm,
    pub edit_errors: FieldErrors,
    pub edit_statuses: Vec<SelectOption>,
    /// Plan being edited; `None` shows the create form.
    pub editing_plan: Option<String>,
    pub plan_form: PlanForm,
    pub plan_errors: FieldErrors,
}

#[derive(Template, WebTemplate)]
#[template(path = "admin/orders.html")]
pub struct AdminOrdersTemplate {
    pub page: Chrome,
    pub orders: Vec<OrderRow>,
    pub query: String,
    pub statuses: Vec<SelectOption>,
    pub stats: Vec<StatCard>,
}

#[derive(Template, WebTemplate)]
#[template(path = "admin/order_detail.html")]
pub struct AdminOrderDetailTemplate {
    pub page: Chrome,
    pub order: OrderRow,
    pub customer: Option<UserRow>,
    pub statuses: Vec<SelectOption>,
}

#[derive(Template, WebTemplate)]
#[template(path = "admin/communication.html")]
pub struct AdminCommunicationTemplate {
    pub page: Chrome,
    pub tab: String,
    pub stats: Vec<StatCard>,
    pub form: BroadcastForm,
    pub errors: FieldErrors,
    pub audiences: Vec<SelectOption>,
    pub channels: Vec<SelectOption>,
    pub promotion: PromotionForm,
    pub promotion_errors: FieldErrors,
    pub promotion_audiences: Vec<SelectOption>,
    pub templates: Vec<TemplateCard>,
    pub history: Vec<DispatchRow>,
}

#[derive(Template, WebTemplate)]
#[template(path = "admin/analytics.html")]
pub struct AdminAnalyticsTemplate {
    pub page: Chrome,
    pub ranges: Vec<SelectOption>,
    pub stats: Vec<StatCard>,
    pub revenue: Vec<ChartBar>,
    pub statuses: Vec<StatCard>,
    pub popular_plans: Vec<PopularPlanRow>,
}
