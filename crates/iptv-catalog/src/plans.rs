//! Plans offered for sale.

use chrono::{DateTime, Utc};
use iptv_types::{PlanId, Price, SubscriptionPlan};
use tracing::info;

use crate::{Catalog, CatalogError, CatalogResult, subscriptions::millis, unique_id};

/// Input for [`Catalog::create_plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlan {
    pub name: String,
    pub duration: u32,
    pub price: Price,
    pub original_price: Option<Price>,
    pub features: Vec<String>,
}

/// Editable plan fields. `None` leaves a field unchanged; `original_price:
/// Some(None)` clears the discount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanPatch {
    pub name: Option<String>,
    pub duration: Option<u32>,
    pub price: Option<Price>,
    pub original_price: Option<Option<Price>>,
    pub features: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl From<NewPlan> for PlanPatch {
    fn from(plan: NewPlan) -> Self {
        Self {
            name: Some(plan.name),
            duration: Some(plan.duration),
            price: Some(plan.price),
            original_price: Some(plan.original_price),
            features: Some(plan.features),
            is_active: None,
        }
    }
}

impl Catalog {
    pub fn plans(&self) -> &[SubscriptionPlan] {
        &self.plans
    }

    /// Plans currently offered, in catalog order.
    pub fn active_plans(&self) -> Vec<&SubscriptionPlan> {
        self.plans.iter().filter(|p| p.is_active).collect()
    }

    pub fn plan(&self, id: &PlanId) -> Option<&SubscriptionPlan> {
        self.plans.iter().find(|p| &p.id == id)
    }

    /// Adds an active plan with no subscribers.
    pub fn create_plan(&mut self, new: NewPlan, now: DateTime<Utc>) -> PlanId {
        let id = PlanId::new(unique_id(millis(now), "plan", |candidate| {
            self.plans.iter().any(|p| p.id.as_str() == candidate)
        }));

        self.plans.push(SubscriptionPlan {
            id: id.clone(),
            name: new.name,
            duration: new.duration,
            price: new.price,
            original_price: new.original_price,
            features: new.features,
            is_active: true,
            subscriber_count: 0,
            created_at: now.date_naive(),
        });

        info!(plan = %id, "created plan");
        id
    }

    pub fn update_plan(&mut self, id: &PlanId, patch: PlanPatch) -> CatalogResult<&SubscriptionPlan> {
        let plan = self
            .plans
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| CatalogError::PlanNotFound(id.clone()))?;

        if let Some(name) = patch.name {
            plan.name = name;
        }
        if let Some(duration) = patch.duration {
            plan.duration = duration;
        }
        if let Some(price) = patch.price {
            plan.price = price;
        }
        if let Some(original_price) = patch.original_price {
            plan.original_price = original_price;
        }
        if let Some(features) = patch.features {
            plan.features = features;
        }
        if let Some(is_active) = patch.is_active {
            plan.is_active = is_active;
        }

        info!(plan = %id, "updated plan");
        Ok(plan)
    }

    /// Removes a plan. Existing subscriptions and orders keep their copy of
    /// the plan name and price.
    pub fn delete_plan(&mut self, id: &PlanId) -> CatalogResult<SubscriptionPlan> {
        let index = self
            .plans
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| CatalogError::PlanNotFound(id.clone()))?;

        info!(plan = %id, "deleted plan");
        Ok(self.plans.remove(index))
    }
}
