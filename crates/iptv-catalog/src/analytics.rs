//! Figures for the admin dashboard and analytics pages.

use chrono::{Datelike, NaiveDate};
use iptv_types::{
    Analytics, MonthlyRevenue, OrderStatus, PlanPopularity, Price, SubscriptionStatus,
};

use crate::Catalog;

/// Revenue trend shown until real monthly bookkeeping exists: (month, revenue in dollars, subscriptions).
const MONTHLY_REVENUE: [(&str, u64, u64); 12] = [
    ("Jul", 31_000, 880),
    ("Aug", 33_500, 930),
    ("Sep", 36_000, 990),
    ("Oct", 38_500, 1040),
    ("Nov", 41_000, 1100),
    ("Dec", 43_000, 1150),
    ("Jan", 45_000, 1200),
    ("Feb", 52_000, 1350),
    ("Mar", 48_000, 1280),
    ("Apr", 61_000, 1450),
    ("May", 58_000, 1380),
    ("Jun", 67_000, 1520),
];

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

impl Catalog {
    /// Aggregates the collections as of `today`.
    ///
    /// Revenue counts paid orders only.
    pub fn analytics(&self, today: NaiveDate) -> Analytics {
        let paid_revenue = |on: &dyn Fn(NaiveDate) -> bool| -> Price {
            self.orders
                .iter()
                .filter(|o| o.status == OrderStatus::Paid && on(o.created_at))
                .map(|o| o.amount)
                .sum()
        };
        let signups = |on: &dyn Fn(NaiveDate) -> bool| -> usize {
            self.users.iter().filter(|u| on(u.registered_at)).count()
        };

        let mut popular_plans: Vec<PlanPopularity> = self
            .plans
            .iter()
            .map(|p| PlanPopularity {
                plan_name: p.name.clone(),
                count: p.subscriber_count,
                revenue: p.price * p.subscriber_count,
            })
            .collect();
        popular_plans.sort_by(|a, b| b.count.cmp(&a.count));

        Analytics {
            total_users: self.users.len(),
            active_subscriptions: self.count_subscriptions(SubscriptionStatus::Active),
            expired_subscriptions: self.count_subscriptions(SubscriptionStatus::Expired),
            suspended_subscriptions: self.count_subscriptions(SubscriptionStatus::Suspended),
            revenue_today: paid_revenue(&|d| d == today),
            revenue_month: paid_revenue(&|d| same_month(d, today)),
            revenue_year: paid_revenue(&|d| d.year() == today.year()),
            new_signups_today: signups(&|d| d == today),
            new_signups_month: signups(&|d| same_month(d, today)),
            monthly_revenue: MONTHLY_REVENUE
                .iter()
                .map(|&(month, dollars, subscriptions)| MonthlyRevenue {
                    month: month.to_string(),
                    revenue: Price::from_cents(dollars * 100),
                    subscriptions,
                })
                .collect(),
            popular_plans,
        }
    }
}
