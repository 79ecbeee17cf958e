//! # iptv-catalog: In-memory store for IPTV Pro
//!
//! The catalog holds every collection the site reads and mutates: customers,
//! subscriptions, plans, orders, favorites and the message outbox. It is seeded
//! with mock data at startup and discarded on restart.
//!
//! Relations between records are plain id matches resolved by linear scans.
//! A customer's subscriptions are always derived from the single subscriptions
//! collection, never stored on the customer.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use iptv_catalog::Catalog;
//! use iptv_types::{SubscriptionStatus, UserId};
//!
//! let catalog = Catalog::seeded();
//! let john = UserId::new("1");
//!
//! let subs = catalog.subscriptions_for(&john);
//! assert_eq!(subs.len(), 1);
//! assert_eq!(subs[0].status, SubscriptionStatus::Active);
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//! let analytics = catalog.analytics(today);
//! assert_eq!(analytics.total_users, 3);
//! ```
//!
//! # Thread Safety
//!
//! `Catalog` is a plain value. The site wraps it in a lock and holds the lock
//! only for the duration of one call.

mod analytics;
mod error;
mod favorites;
mod messaging;
mod orders;
mod plans;
mod seed;
mod subscriptions;
mod users;

use std::collections::HashMap;

use iptv_types::{Customer, Dispatch, Favorite, Order, Subscription, SubscriptionPlan, UserId};

pub use error::{CatalogError, CatalogResult};
pub use favorites::ALL_CATEGORIES;
pub use messaging::{MESSAGE_TEMPLATES, MessageTemplate, message_template};
pub use orders::{NewOrder, OrderSummary};
pub use plans::{NewPlan, PlanPatch};
pub use subscriptions::{NewSubscription, SubscriptionPatch};
pub use users::ProfilePatch;

/// Every mock collection behind the site.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    users: Vec<Customer>,
    subscriptions: Vec<Subscription>,
    plans: Vec<SubscriptionPlan>,
    orders: Vec<Order>,
    favorites: HashMap<UserId, Vec<Favorite>>,
    outbox: Vec<Dispatch>,
}

impl Catalog {
    /// An empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A catalog populated with the mock customers, plans, subscriptions,
    /// orders and favorites.
    pub fn seeded() -> Self {
        Self {
            users: seed::customers(),
            subscriptions: seed::subscriptions(),
            plans: seed::plans(),
            orders: seed::orders(),
            favorites: seed::favorites(),
            outbox: Vec::new(),
        }
    }
}

/// Case-insensitive substring match; an empty needle matches everything.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Returns `base` if unused, otherwise `base` with the smallest numeric bump that is free.
fn unique_id(base: u128, prefix: &str, taken: impl Fn(&str) -> bool) -> String {
    let mut n = base;
    loop {
        let candidate = format!("{prefix}{n}");
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests;
