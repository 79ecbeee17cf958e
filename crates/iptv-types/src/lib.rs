//! # iptv-types: Core types for IPTV Pro
//!
//! This crate contains the shared types used across the site:
//! - Entity IDs ([`UserId`], [`SubscriptionId`], [`PlanId`], [`OrderId`], ...)
//! - Status enums with stable slugs ([`UserStatus`], [`SubscriptionStatus`], [`OrderStatus`])
//! - Money ([`Price`])
//! - Records ([`Customer`], [`Subscription`], [`SubscriptionPlan`], [`Order`], [`AdminUser`])
//! - Aggregates ([`Analytics`])

use std::{
    fmt::{self, Display},
    iter::Sum,
    ops::{Add, Mul},
    str::FromStr,
};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Errors produced when parsing slugs and amounts from user input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The slug does not name a variant of the enum.
    #[error("unknown {kind}: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },

    /// The text is not a non-negative amount with at most two decimals.
    #[error("invalid amount: {0:?}")]
    InvalidPrice(String),
}

// ============================================================================
// Entity IDs - string backed, matched by equality only
// ============================================================================

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Identifier of a customer account.
    UserId
);
string_id!(
    /// Identifier of a customer subscription (`sub1`, `sub1736930000000`).
    SubscriptionId
);
string_id!(
    /// Identifier of a subscription plan (`monthly`, `quarterly`, ...).
    PlanId
);
string_id!(
    /// Identifier of an order (`ORD-2025-001`).
    OrderId
);
string_id!(
    /// Identifier of a favorited channel or title.
    FavoriteId
);
string_id!(
    /// Identifier of a sent message in the outbox.
    DispatchId
);

// ============================================================================
// Slug enums - lowercase wire names, human labels for display
// ============================================================================

macro_rules! slug_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $($(#[$vmeta:meta])* $variant:ident => $slug:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $slug)] $variant,)+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable slug used in URLs, forms and JSON.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $slug,)+
                }
            }

            /// Human readable label.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($slug => Ok($name::$variant),)+
                    other => Err(ParseError::UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

slug_enum!(
    /// Account standing of a customer.
    UserStatus("user status") {
        Active => "active", "Active";
        Suspended => "suspended", "Suspended";
        Banned => "banned", "Banned";
    }
);

slug_enum!(
    /// Lifecycle state of a subscription.
    SubscriptionStatus("subscription status") {
        Active => "active", "Active";
        Expired => "expired", "Expired";
        Suspended => "suspended", "Suspended";
        Cancelled => "cancelled", "Cancelled";
    }
);

slug_enum!(
    /// Payment state of an order.
    OrderStatus("order status") {
        Paid => "paid", "Paid";
        Pending => "pending", "Pending";
        Failed => "failed", "Failed";
        Refunded => "refunded", "Refunded";
    }
);

slug_enum!(
    /// Role of an admin panel operator.
    AdminRole("admin role") {
        SuperAdmin => "super_admin", "Super Admin";
        Admin => "admin", "Admin";
        Support => "support", "Support";
    }
);

slug_enum!(
    /// Delivery channel for customer messages.
    MessageChannel("message channel") {
        Email => "email", "Email";
        WhatsApp => "whatsapp", "WhatsApp";
    }
);

slug_enum!(
    /// Target group for broadcasts and promotions.
    Audience("audience") {
        /// Every registered customer.
        All => "all", "All Users";
        /// Customers owning at least one active subscription.
        Active => "active", "Active Subscribers";
        /// Customers owning at least one expired subscription.
        Expired => "expired", "Expired Subscribers";
    }
);

slug_enum!(
    /// Payment method chosen at checkout.
    PaymentMethod("payment method") {
        Card => "card", "Credit Card";
        PayPal => "paypal", "PayPal";
    }
);

slug_enum!(
    /// Whether a favorite is a live channel or an on-demand title.
    ContentKind("content kind") {
        Live => "live", "Live";
        Vod => "vod", "VOD";
    }
);

// ============================================================================
// Money
// ============================================================================

/// A non-negative amount of US dollars held in cents.
///
/// Displays as `$1,234.56`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    /// Largest amount accepted from user input ($1,000,000.00).
    pub const MAX_INPUT: Price = Price(100_000_000);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn as_cents(self) -> u64 {
        self.0
    }

    /// Parses `"24.99"`, `"$24.99"`, `"24.9"` or `"24"`.
    ///
    /// Rejects negative values, more than two decimals, anything non-numeric
    /// and amounts above [`Price::MAX_INPUT`].
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidPrice(text.to_string());

        let trimmed = text.trim();
        let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed).replace(',', "");
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (trimmed.as_str(), ""),
        };

        if fraction.len() > 2
            || !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
            || (whole.is_empty() && fraction.is_empty())
        {
            return Err(invalid());
        }

        let dollars: u64 = if whole.is_empty() { 0 } else { whole.parse().map_err(|_| invalid())? };
        let cents: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .filter(|&total| total <= Self::MAX_INPUT.0)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Percentage of this amount, rounded half-up to the cent.
    ///
    /// Saturates at `u64::MAX` cents instead of overflowing.
    pub fn percent(self, rate: u64) -> Self {
        let scaled = u128::from(self.0) * u128::from(rate) + 50;
        Self(u64::try_from(scaled / 100).unwrap_or(u64::MAX))
    }

    /// Sales tax applied at checkout (10%).
    pub fn tax(self) -> Self {
        self.percent(10)
    }

    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Plain decimal form without currency sign or separators (`1234.50`), as used in form inputs.
    pub fn to_plain(self) -> String {
        format!("{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dollars = (self.0 / 100).to_string();
        let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
        for (i, c) in dollars.chars().enumerate() {
            if i > 0 && (dollars.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        write!(f, "${grouped}.{:02}", self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u64> for Price {
    type Output = Self;

    fn mul(self, rhs: u64) -> Self::Output {
        Self(self.0.saturating_mul(rhs))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// ============================================================================
// Records
// ============================================================================

/// A customer account as seen by the admin panel.
///
/// Subscriptions are not stored here; they are looked up by `user_id`
/// in the subscriptions collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub country: String,
    pub phone: Option<String>,
    pub registered_at: NaiveDate,
    pub last_login: NaiveDate,
    pub status: UserStatus,
    pub total_spent: Price,
    pub avatar: Option<String>,
}

impl Customer {
    /// First and last name split on the first space, used to prefill billing forms.
    pub fn split_name(&self) -> (&str, &str) {
        match self.name.split_once(' ') {
            Some((first, last)) => (first, last),
            None => (self.name.as_str(), ""),
        }
    }

    /// Uppercase initials for avatar placeholders.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

/// A customer's subscription to a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub user_id: UserId,
    pub plan_id: PlanId,
    pub plan_name: String,
    pub status: SubscriptionStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: Price,
    pub auto_renew: bool,
    pub devices: u32,
    pub max_devices: u32,
    pub features: Vec<String>,
}

impl Subscription {
    /// Whole days until `end_date`, never negative.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.end_date - today).num_days().max(0)
    }

    pub fn is_active(&self) -> bool {
        self.status == SubscriptionStatus::Active
    }
}

/// A plan offered for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: PlanId,
    pub name: String,
    /// Length of the plan in months.
    pub duration: u32,
    pub price: Price,
    pub original_price: Option<Price>,
    pub features: Vec<String>,
    pub is_active: bool,
    pub subscriber_count: u64,
    pub created_at: NaiveDate,
}

impl SubscriptionPlan {
    /// Discount against the original price, zero when there is none.
    pub fn savings(&self) -> Price {
        self.original_price
            .map_or(Price::ZERO, |original| original.saturating_sub(self.price))
    }

    /// `1 month`, `3 months`, `1 year`, `2 years`, ...
    pub fn duration_label(&self) -> String {
        match self.duration {
            1 => "1 month".to_string(),
            12 => "1 year".to_string(),
            months if months % 12 == 0 => format!("{} years", months / 12),
            months => format!("{months} months"),
        }
    }

    /// Simultaneous device limit, read from an `N Devices` feature line.
    pub fn device_limit(&self) -> Option<u32> {
        self.features.iter().find_map(|feature| {
            let (count, rest) = feature.split_once(' ')?;
            if rest.starts_with("Device") {
                count.parse().ok()
            } else {
                None
            }
        })
    }
}

/// A purchase of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub plan_id: PlanId,
    pub plan_name: String,
    pub amount: Price,
    pub status: OrderStatus,
    pub payment_method: String,
    pub created_at: NaiveDate,
    pub invoice_url: Option<String>,
}

/// An operator of the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: AdminRole,
    pub permissions: Vec<String>,
    pub avatar: Option<String>,
}

/// A channel or title a customer saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: FavoriteId,
    pub name: String,
    pub category: String,
    pub kind: ContentKind,
    pub image: String,
    pub added_at: NaiveDate,
}

/// A message handed to the (mock) delivery channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dispatch {
    pub id: DispatchId,
    pub recipients: Vec<UserId>,
    pub channel: MessageChannel,
    pub subject: String,
    pub body: String,
    /// Set for broadcasts and promotions, `None` for a direct message.
    pub audience: Option<Audience>,
    pub sent_at: DateTime<Utc>,
}

// ============================================================================
// Aggregates
// ============================================================================

/// One point of the monthly revenue chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: String,
    pub revenue: Price,
    pub subscriptions: u64,
}

/// Popularity of a plan: subscriber count and the revenue it implies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanPopularity {
    pub plan_name: String,
    pub count: u64,
    pub revenue: Price,
}

/// Figures shown on the admin dashboard and analytics pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analytics {
    pub total_users: usize,
    pub active_subscriptions: usize,
    pub expired_subscriptions: usize,
    pub suspended_subscriptions: usize,
    pub revenue_today: Price,
    pub revenue_month: Price,
    pub revenue_year: Price,
    pub new_signups_today: usize,
    pub new_signups_month: usize,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub popular_plans: Vec<PlanPopularity>,
}
