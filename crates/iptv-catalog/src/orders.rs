//! Orders and checkout.

use chrono::{DateTime, Datelike, Utc};
use iptv_types::{
    Order, OrderId, OrderStatus, PaymentMethod, PlanId, Price, SubscriptionId, UserId,
};
use tracing::info;

use crate::{Catalog, CatalogError, CatalogResult, NewSubscription, contains_ci};

/// Input for [`Catalog::record_order`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub user_id: UserId,
    pub plan_id: PlanId,
    pub plan_name: String,
    pub amount: Price,
    pub status: OrderStatus,
    pub payment_method: String,
}

/// Totals shown above the admin order table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderSummary {
    /// Sum of paid orders.
    pub revenue: Price,
    pub pending: usize,
    pub failed: usize,
    pub total: usize,
}

impl Catalog {
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// One customer's orders, newest first.
    pub fn orders_for(&self, user: &UserId) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self.orders.iter().filter(|o| &o.user_id == user).collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        orders
    }

    /// Orders whose id, plan name or customer name contains `query`,
    /// optionally restricted to one status.
    pub fn search_orders(&self, query: &str, status: Option<OrderStatus>) -> Vec<&Order> {
        let query = query.trim();
        self.orders
            .iter()
            .filter(|o| {
                contains_ci(o.id.as_str(), query)
                    || contains_ci(&o.plan_name, query)
                    || self.user(&o.user_id).is_some_and(|u| contains_ci(&u.name, query))
            })
            .filter(|o| status.is_none_or(|wanted| o.status == wanted))
            .collect()
    }

    pub fn order_summary(&self) -> OrderSummary {
        OrderSummary {
            revenue: self
                .orders
                .iter()
                .filter(|o| o.status == OrderStatus::Paid)
                .map(|o| o.amount)
                .sum(),
            pending: self.orders.iter().filter(|o| o.status == OrderStatus::Pending).count(),
            failed: self.orders.iter().filter(|o| o.status == OrderStatus::Failed).count(),
            total: self.orders.len(),
        }
    }

    pub fn update_order_status(&mut self, id: &OrderId, status: OrderStatus) -> CatalogResult<()> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| CatalogError::OrderNotFound(id.clone()))?;
        order.status = status;
        info!(order = %id, status = %status, "updated order status");
        Ok(())
    }

    /// Appends an order numbered `ORD-<year>-<nnn>`.
    ///
    /// A paid order adds its amount to the customer's total spent.
    pub fn record_order(&mut self, new: NewOrder, now: DateTime<Utc>) -> CatalogResult<OrderId> {
        let customer = self.user_mut(&new.user_id)?;
        if new.status == OrderStatus::Paid {
            customer.total_spent = customer.total_spent + new.amount;
        }

        let prefix = format!("ORD-{}-", now.year());
        let mut seq = self.orders.iter().filter(|o| o.id.as_str().starts_with(&prefix)).count() + 1;
        let id = loop {
            let candidate = OrderId::new(format!("{prefix}{seq:03}"));
            if self.order(&candidate).is_none() {
                break candidate;
            }
            seq += 1;
        };

        let invoice_url = (new.status == OrderStatus::Paid).then(|| "#".to_string());
        self.orders.push(Order {
            id: id.clone(),
            user_id: new.user_id,
            plan_id: new.plan_id,
            plan_name: new.plan_name,
            amount: new.amount,
            status: new.status,
            payment_method: new.payment_method,
            created_at: now.date_naive(),
            invoice_url,
        });

        info!(order = %id, "recorded order");
        Ok(id)
    }

    /// Completes a purchase: records a paid order for the plan price plus tax
    /// and starts a subscription on the plan.
    ///
    /// # Errors
    ///
    /// Fails if the customer or plan is unknown, or the plan is not on sale.
    pub fn checkout(
        &mut self,
        user: &UserId,
        plan_id: &PlanId,
        payment: PaymentMethod,
        now: DateTime<Utc>,
    ) -> CatalogResult<(OrderId, SubscriptionId)> {
        let plan = self
            .plan(plan_id)
            .ok_or_else(|| CatalogError::PlanNotFound(plan_id.clone()))?;
        if !plan.is_active {
            return Err(CatalogError::PlanUnavailable(plan_id.clone()));
        }

        let subscription = NewSubscription {
            user_id: user.clone(),
            plan_id: plan.id.clone(),
            plan_name: plan.name.clone(),
            price: plan.price,
            duration: plan.duration,
            max_devices: plan.device_limit().unwrap_or(1),
            auto_renew: true,
            start_date: now.date_naive(),
        };
        let order = NewOrder {
            user_id: user.clone(),
            plan_id: plan.id.clone(),
            plan_name: plan.name.clone(),
            amount: plan.price + plan.price.tax(),
            status: OrderStatus::Paid,
            payment_method: payment.label().to_string(),
        };

        let order_id = self.record_order(order, now)?;
        let subscription_id = self.create_subscription(subscription, now)?;
        Ok((order_id, subscription_id))
    }
}
