//! Form payloads and their validation rules.
//!
//! Every form field arrives as a string. [`Validator`] collects the first
//! failing rule per field; the `validate` methods turn a payload into typed
//! catalog input or the collected [`FieldErrors`].

use std::collections::BTreeMap;

use chrono::NaiveDate;
use iptv_catalog::{NewPlan, NewSubscription, ProfilePatch, SubscriptionPatch};
use iptv_types::{
    Audience, MessageChannel, OrderStatus, PaymentMethod, PlanId, Price, SubscriptionStatus,
    UserId, UserStatus,
};
use serde::Deserialize;

use crate::content::ShowcaseTab;

// ============================================================================
// Rules
// ============================================================================

/// Per-field validation messages, keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Records `message` unless the field already failed an earlier rule.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }
}

/// Collects rule failures for one form submission.
#[derive(Debug, Default)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, field: &'static str, ok: bool, message: &str) -> &mut Self {
        if !ok {
            self.errors.add(field, message);
        }
        self
    }

    /// At least `min` characters after trimming.
    pub fn min_chars(&mut self, field: &'static str, value: &str, min: usize, message: &str) -> &mut Self {
        self.check(field, value.trim().chars().count() >= min, message)
    }

    pub fn required(&mut self, field: &'static str, value: &str, message: &str) -> &mut Self {
        self.min_chars(field, value, 1, message)
    }

    pub fn email(&mut self, field: &'static str, value: &str) -> &mut Self {
        self.check(field, is_email(value.trim()), "Invalid email address")
    }

    /// Parses a slug or number, recording `message` on failure.
    pub fn parse<T: std::str::FromStr>(&mut self, field: &'static str, value: &str, message: &str) -> Option<T> {
        let parsed = value.trim().parse().ok();
        self.check(field, parsed.is_some(), message);
        parsed
    }

    /// Parses a whole number of at least `min`.
    pub fn at_least(&mut self, field: &'static str, value: &str, min: u32, message: &str) -> Option<u32> {
        let parsed = value.trim().parse::<u32>().ok().filter(|n| *n >= min);
        self.check(field, parsed.is_some(), message);
        parsed
    }

    /// Parses a non-negative amount such as `24.99`.
    pub fn price(&mut self, field: &'static str, value: &str, message: &str) -> Option<Price> {
        let parsed = Price::parse(value).ok();
        self.check(field, parsed.is_some(), message);
        parsed
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }

    pub fn finish(self) -> Result<(), FieldErrors> {
        if self.errors.is_empty() { Ok(()) } else { Err(self.errors) }
    }
}

/// A plausible address: `local@domain.tld` without whitespace.
pub fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || domain.contains('@')
        || value.chars().any(char::is_whitespace)
        || local.starts_with('.')
        || local.ends_with('.')
        || local.contains("..")
    {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'))
        && labels
            .last()
            .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
}

fn digits(value: &str) -> Option<String> {
    let compact: String = value.chars().filter(|c| !c.is_whitespace() && *c != '-').collect();
    (!compact.is_empty() && compact.chars().all(|c| c.is_ascii_digit())).then_some(compact)
}

fn is_card_number(value: &str) -> bool {
    digits(value).is_some_and(|d| (13..=19).contains(&d.len()))
}

/// `MM/YY` with a month between 01 and 12.
fn is_expiry(value: &str) -> bool {
    let Some((month, year)) = value.trim().split_once('/') else {
        return false;
    };
    month.len() == 2
        && year.len() == 2
        && year.chars().all(|c| c.is_ascii_digit())
        && month.parse::<u32>().is_ok_and(|m| (1..=12).contains(&m))
}

fn is_cvv(value: &str) -> bool {
    let value = value.trim();
    (3..=4).contains(&value.len()) && value.chars().all(|c| c.is_ascii_digit())
}

/// HTML checkboxes submit a value only when checked.
fn checked(value: &str) -> bool {
    !value.is_empty() && value != "false" && value != "off"
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

// ============================================================================
// Public site
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.min_chars("name", &self.name, 2, "Name must be at least 2 characters")
            .email("email", &self.email)
            .min_chars("subject", &self.subject, 5, "Subject must be at least 5 characters")
            .min_chars("message", &self.message, 10, "Message must be at least 10 characters");
        v.finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.email("email", &self.email).min_chars(
            "password",
            &self.password,
            6,
            "Password must be at least 6 characters",
        );
        v.finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.min_chars("name", &self.name, 2, "Name must be at least 2 characters")
            .email("email", &self.email)
            .min_chars("password", &self.password, 6, "Password must be at least 6 characters")
            .check(
                "confirm_password",
                self.password == self.confirm_password,
                "Passwords do not match",
            );
        v.finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.email("email", &self.email);
        v.finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub zip_code: String,
    pub payment_method: String,
    pub card_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub terms: String,
    pub newsletter: String,
}

impl CheckoutForm {
    /// Billing fields prefilled for a signed-in customer.
    pub fn prefilled(first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            payment_method: PaymentMethod::Card.as_str().to_string(),
            ..Self::default()
        }
    }

    pub fn pays_by_card(&self) -> bool {
        self.payment_method != PaymentMethod::PayPal.as_str()
    }

    pub fn terms_accepted(&self) -> bool {
        checked(&self.terms)
    }

    pub fn validate(&self) -> Result<PaymentMethod, FieldErrors> {
        let mut v = Validator::new();
        v.min_chars("first_name", &self.first_name, 2, "First name must be at least 2 characters")
            .min_chars("last_name", &self.last_name, 2, "Last name must be at least 2 characters")
            .email("email", &self.email)
            .min_chars("phone", &self.phone, 10, "Phone number must be at least 10 digits")
            .min_chars("address", &self.address, 5, "Address must be at least 5 characters")
            .min_chars("city", &self.city, 2, "City must be at least 2 characters")
            .min_chars("country", &self.country, 2, "Please select a country")
            .min_chars("zip_code", &self.zip_code, 3, "ZIP code must be at least 3 characters");
        let method = v.parse::<PaymentMethod>(
            "payment_method",
            &self.payment_method,
            "Please select a payment method",
        );
        if method == Some(PaymentMethod::Card) {
            v.min_chars("card_name", &self.card_name, 2, "Cardholder name is required")
                .check("card_number", is_card_number(&self.card_number), "Invalid card number")
                .check("expiry_date", is_expiry(&self.expiry_date), "Expiry date must be MM/YY")
                .check("cvv", is_cvv(&self.cvv), "CVV must be 3 or 4 digits");
        }
        v.check(
            "terms",
            self.terms_accepted(),
            "You must accept the terms and conditions",
        );

        let errors = v.into_errors();
        match method {
            Some(method) if errors.is_empty() => Ok(method),
            _ => Err(errors),
        }
    }
}

// ============================================================================
// Customer dashboard
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<ProfilePatch, FieldErrors> {
        let mut v = Validator::new();
        v.min_chars("name", &self.name, 2, "Name must be at least 2 characters")
            .email("email", &self.email);
        v.finish()?;

        Ok(ProfilePatch {
            name: Some(self.name.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            phone: Some(self.phone.trim().to_string()),
            country: Some(self.country.trim().to_string()),
        })
    }
}

// ============================================================================
// Admin panel
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdminLoginForm {
    pub email: String,
    pub password: String,
}

impl AdminLoginForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.email("email", &self.email).min_chars(
            "password",
            &self.password,
            6,
            "Password must be at least 6 characters",
        );
        v.finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserStatusForm {
    pub status: String,
}

impl UserStatusForm {
    pub fn validate(&self) -> Result<UserStatus, FieldErrors> {
        let mut v = Validator::new();
        let status = v.parse("status", &self.status, "Invalid status");
        status.ok_or_else(|| v.into_errors())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderStatusForm {
    pub status: String,
}

impl OrderStatusForm {
    pub fn validate(&self) -> Result<OrderStatus, FieldErrors> {
        let mut v = Validator::new();
        let status = v.parse("status", &self.status, "Invalid status");
        status.ok_or_else(|| v.into_errors())
    }
}

/// A message to a single customer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DirectMessageForm {
    pub channel: String,
    pub subject: String,
    pub message: String,
}

impl DirectMessageForm {
    pub fn validate(&self) -> Result<MessageChannel, FieldErrors> {
        let mut v = Validator::new();
        let channel = v.parse("channel", &self.channel, "Invalid channel");
        v.required("message", &self.message, "Message is required");

        let errors = v.into_errors();
        match channel {
            Some(channel) if errors.is_empty() => Ok(channel),
            _ => Err(errors),
        }
    }
}

/// Missing fields deserialize empty, so an unticked `auto_renew` box reads as off.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubscriptionForm {
    pub user_id: String,
    pub plan_id: String,
    pub plan_name: String,
    pub price: String,
    pub duration: String,
    pub max_devices: String,
    pub auto_renew: String,
}

impl SubscriptionForm {
    /// Initial values of the create form.
    pub fn blank() -> Self {
        Self {
            duration: "1".to_string(),
            max_devices: "1".to_string(),
            auto_renew: "on".to_string(),
            ..Self::default()
        }
    }

    pub fn auto_renew_checked(&self) -> bool {
        checked(&self.auto_renew)
    }

    pub fn validate(&self, start_date: NaiveDate) -> Result<NewSubscription, FieldErrors> {
        let mut v = Validator::new();
        v.required("user_id", &self.user_id, "User ID is required")
            .required("plan_id", &self.plan_id, "Plan ID is required")
            .required("plan_name", &self.plan_name, "Plan name is required");
        let price = v.price("price", &self.price, "Price must be positive");
        let duration = v.at_least("duration", &self.duration, 1, "Duration must be at least 1 month");
        let max_devices = v.at_least("max_devices", &self.max_devices, 1, "Max devices must be at least 1");

        let errors = v.into_errors();
        match (price, duration, max_devices) {
            (Some(price), Some(duration), Some(max_devices)) if errors.is_empty() => Ok(NewSubscription {
                user_id: UserId::new(self.user_id.trim()),
                plan_id: PlanId::new(self.plan_id.trim()),
                plan_name: self.plan_name.trim().to_string(),
                price,
                duration,
                max_devices,
                auto_renew: self.auto_renew_checked(),
                start_date,
            }),
            _ => Err(errors),
        }
    }
}

/// Edits to an existing subscription.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubscriptionUpdateForm {
    pub plan_name: String,
    pub status: String,
    pub end_date: String,
    pub price: String,
    pub max_devices: String,
    pub auto_renew: String,
}

impl SubscriptionUpdateForm {
    pub fn auto_renew_checked(&self) -> bool {
        checked(&self.auto_renew)
    }

    pub fn validate(&self) -> Result<SubscriptionPatch, FieldErrors> {
        let mut v = Validator::new();
        v.required("plan_name", &self.plan_name, "Plan name is required");
        let status = v.parse::<SubscriptionStatus>("status", &self.status, "Invalid status");
        let end_date = NaiveDate::parse_from_str(self.end_date.trim(), "%Y-%m-%d").ok();
        v.check("end_date", end_date.is_some(), "End date must be YYYY-MM-DD");
        let price = v.price("price", &self.price, "Price must be positive");
        let max_devices = v.at_least("max_devices", &self.max_devices, 1, "Max devices must be at least 1");

        let errors = v.into_errors();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(SubscriptionPatch {
            plan_name: Some(self.plan_name.trim().to_string()),
            status,
            end_date,
            price,
            auto_renew: Some(self.auto_renew_checked()),
            max_devices,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlanForm {
    pub name: String,
    pub duration: String,
    pub price: String,
    pub original_price: String,
    /// One feature per line.
    pub features: String,
    pub is_active: String,
}

impl PlanForm {
    pub fn feature_lines(&self) -> Vec<String> {
        self.features
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    pub fn is_active_checked(&self) -> bool {
        checked(&self.is_active)
    }

    pub fn validate(&self) -> Result<NewPlan, FieldErrors> {
        let mut v = Validator::new();
        v.required("name", &self.name, "Plan name is required");
        let duration = v.at_least("duration", &self.duration, 1, "Duration must be at least 1 month");
        let price = v.price("price", &self.price, "Price must be positive");
        let original_price = match optional(&self.original_price) {
            Some(text) => v.price("original_price", &text, "Original price must be positive").map(Some),
            None => Some(None),
        };
        let features = self.feature_lines();
        v.check("features", !features.is_empty(), "At least one feature is required");

        let errors = v.into_errors();
        match (duration, price, original_price) {
            (Some(duration), Some(price), Some(original_price)) if errors.is_empty() => Ok(NewPlan {
                name: self.name.trim().to_string(),
                duration,
                price,
                original_price,
                features,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BroadcastForm {
    pub subject: String,
    pub message: String,
    pub audience: String,
    pub channel: String,
}

impl Default for BroadcastForm {
    fn default() -> Self {
        Self {
            subject: String::new(),
            message: String::new(),
            audience: Audience::All.as_str().to_string(),
            channel: MessageChannel::Email.as_str().to_string(),
        }
    }
}

impl BroadcastForm {
    pub fn validate(&self) -> Result<(Audience, MessageChannel), FieldErrors> {
        let mut v = Validator::new();
        v.required("subject", &self.subject, "Subject is required")
            .min_chars("message", &self.message, 10, "Message must be at least 10 characters");
        let audience = v.parse("audience", &self.audience, "Please select an audience");
        let channel = v.parse("channel", &self.channel, "Please select a channel");

        let errors = v.into_errors();
        match (audience, channel) {
            (Some(audience), Some(channel)) if errors.is_empty() => Ok((audience, channel)),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PromotionForm {
    pub message: String,
    pub audience: String,
}

impl Default for PromotionForm {
    fn default() -> Self {
        Self { message: String::new(), audience: Audience::All.as_str().to_string() }
    }
}

impl PromotionForm {
    pub fn validate(&self) -> Result<Audience, FieldErrors> {
        let mut v = Validator::new();
        v.min_chars("message", &self.message, 10, "Message must be at least 10 characters");
        let audience = v.parse("audience", &self.audience, "Please select an audience");

        let errors = v.into_errors();
        match audience {
            Some(audience) if errors.is_empty() => Ok(audience),
            _ => Err(errors),
        }
    }
}

// ============================================================================
// Query strings
// ============================================================================

/// Search box and status filter of the admin tables.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    pub q: String,
    pub status: String,
}

impl ListQuery {
    /// The status filter, `None` for `all`, empty or unknown values.
    pub fn status<T: std::str::FromStr>(&self) -> Option<T> {
        self.status.parse().ok()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FavoritesQuery {
    pub q: String,
    pub category: String,
}

/// Home page state: the FAQ accordion and the content showcase tab.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HomeQuery {
    pub faq: Option<usize>,
    pub close: Option<u8>,
    pub showcase: String,
}

impl HomeQuery {
    pub fn showcase_tab(&self) -> ShowcaseTab {
        ShowcaseTab::from_query(&self.showcase)
    }

    /// Home page link with `showcase` selected and the FAQ state given by `faq`
    /// (panel and whether the link closes it).
    pub fn href(showcase: ShowcaseTab, faq: Option<(usize, bool)>, anchor: &str) -> String {
        let mut params = Vec::new();
        if showcase != ShowcaseTab::default() {
            params.push(format!("showcase={}", showcase.as_str()));
        }
        if let Some((index, close)) = faq {
            params.push(format!("faq={index}"));
            if close {
                params.push("close=1".to_string());
            }
        }
        let query = if params.is_empty() { String::new() } else { format!("?{}", params.join("&")) };
        format!("/{query}#{anchor}")
    }

    /// FAQ part of this query, carried over by showcase tab links.
    pub fn faq_state(&self) -> Option<(usize, bool)> {
        self.faq.map(|index| (index, self.close == Some(1)))
    }

    /// The open panel among `count`, if any.
    ///
    /// The first panel is open by default. `close=1` closes the requested
    /// panel, leaving none open.
    pub fn open_panel(&self, count: usize) -> Option<usize> {
        match (self.faq, self.close) {
            (Some(_), Some(1)) => None,
            (Some(index), _) if index < count => Some(index),
            _ => (count > 0).then_some(0),
        }
    }
}
