//! Customer subscriptions.

use chrono::{DateTime, Days, NaiveDate, Utc};
use iptv_types::{PlanId, Price, Subscription, SubscriptionId, SubscriptionStatus, UserId};
use tracing::info;

use crate::{Catalog, CatalogError, CatalogResult, contains_ci, unique_id};

/// Days credited per month of plan duration.
const DAYS_PER_MONTH: u64 = 30;

/// Input for [`Catalog::create_subscription`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubscription {
    pub user_id: UserId,
    pub plan_id: PlanId,
    pub plan_name: String,
    pub price: Price,
    /// Length in months; the end date is `start_date + duration * 30 days`.
    pub duration: u32,
    pub max_devices: u32,
    pub auto_renew: bool,
    pub start_date: NaiveDate,
}

/// Editable subscription fields. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionPatch {
    pub plan_name: Option<String>,
    pub status: Option<SubscriptionStatus>,
    pub end_date: Option<NaiveDate>,
    pub price: Option<Price>,
    pub auto_renew: Option<bool>,
    pub max_devices: Option<u32>,
}

impl Catalog {
    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    pub fn subscription(&self, id: &SubscriptionId) -> Option<&Subscription> {
        self.subscriptions.iter().find(|s| &s.id == id)
    }

    /// Subscriptions owned by one customer.
    pub fn subscriptions_for(&self, user: &UserId) -> Vec<&Subscription> {
        self.subscriptions.iter().filter(|s| &s.user_id == user).collect()
    }

    /// Number of subscriptions in the given state.
    pub fn count_subscriptions(&self, status: SubscriptionStatus) -> usize {
        self.subscriptions.iter().filter(|s| s.status == status).count()
    }

    /// Subscriptions whose plan name, or owning customer's name or email,
    /// contains `query`, optionally restricted to one status.
    pub fn search_subscriptions(
        &self,
        query: &str,
        status: Option<SubscriptionStatus>,
    ) -> Vec<&Subscription> {
        let query = query.trim();
        self.subscriptions
            .iter()
            .filter(|s| {
                contains_ci(&s.plan_name, query)
                    || self
                        .user(&s.user_id)
                        .is_some_and(|u| contains_ci(&u.name, query) || contains_ci(&u.email, query))
            })
            .filter(|s| status.is_none_or(|wanted| s.status == wanted))
            .collect()
    }

    /// Starts an active subscription with no devices connected.
    ///
    /// Features are copied from the plan when it exists.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UserNotFound`] if the customer does not exist.
    pub fn create_subscription(
        &mut self,
        new: NewSubscription,
        now: DateTime<Utc>,
    ) -> CatalogResult<SubscriptionId> {
        if self.user(&new.user_id).is_none() {
            return Err(CatalogError::UserNotFound(new.user_id));
        }

        let features = self.plan(&new.plan_id).map(|p| p.features.clone()).unwrap_or_default();
        let end_date = new
            .start_date
            .checked_add_days(Days::new(u64::from(new.duration) * DAYS_PER_MONTH))
            .unwrap_or(NaiveDate::MAX);

        let id = SubscriptionId::new(unique_id(
            millis(now),
            "sub",
            |candidate| self.subscriptions.iter().any(|s| s.id.as_str() == candidate),
        ));

        self.subscriptions.push(Subscription {
            id: id.clone(),
            user_id: new.user_id,
            plan_id: new.plan_id,
            plan_name: new.plan_name,
            status: SubscriptionStatus::Active,
            start_date: new.start_date,
            end_date,
            price: new.price,
            auto_renew: new.auto_renew,
            devices: 0,
            max_devices: new.max_devices,
            features,
        });

        info!(subscription = %id, "created subscription");
        Ok(id)
    }

    pub fn update_subscription(
        &mut self,
        id: &SubscriptionId,
        patch: SubscriptionPatch,
    ) -> CatalogResult<&Subscription> {
        let sub = self.subscription_mut(id)?;
        if let Some(plan_name) = patch.plan_name {
            sub.plan_name = plan_name;
        }
        if let Some(status) = patch.status {
            sub.status = status;
        }
        if let Some(end_date) = patch.end_date {
            sub.end_date = end_date;
        }
        if let Some(price) = patch.price {
            sub.price = price;
        }
        if let Some(auto_renew) = patch.auto_renew {
            sub.auto_renew = auto_renew;
        }
        if let Some(max_devices) = patch.max_devices {
            sub.max_devices = max_devices;
            sub.devices = sub.devices.min(max_devices);
        }
        info!(subscription = %id, "updated subscription");
        Ok(sub)
    }

    /// Marks a subscription as cancelled. The record is kept.
    pub fn cancel_subscription(&mut self, id: &SubscriptionId) -> CatalogResult<()> {
        self.subscription_mut(id)?.status = SubscriptionStatus::Cancelled;
        info!(subscription = %id, "cancelled subscription");
        Ok(())
    }

    fn subscription_mut(&mut self, id: &SubscriptionId) -> CatalogResult<&mut Subscription> {
        self.subscriptions
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| CatalogError::SubscriptionNotFound(id.clone()))
    }
}

pub(crate) fn millis(now: DateTime<Utc>) -> u128 {
    u128::try_from(now.timestamp_millis()).unwrap_or_default()
}
