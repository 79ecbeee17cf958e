//! Mock records loaded into a fresh catalog.

use std::collections::HashMap;

use chrono::NaiveDate;
use iptv_types::{
    ContentKind, Customer, Favorite, FavoriteId, Order, OrderId, OrderStatus, PlanId, Price,
    Subscription, SubscriptionId, SubscriptionPlan, SubscriptionStatus, UserId, UserStatus,
};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

pub(crate) fn plans() -> Vec<SubscriptionPlan> {
    let plan = |id: &str,
                name: &str,
                duration: u32,
                price: u64,
                original: Option<u64>,
                features: &[&str],
                subscribers: u64| SubscriptionPlan {
        id: PlanId::new(id),
        name: name.to_string(),
        duration,
        price: Price::from_cents(price),
        original_price: original.map(Price::from_cents),
        features: strings(features),
        is_active: true,
        subscriber_count: subscribers,
        created_at: day(2024, 1, 1),
    };

    vec![
        plan(
            "monthly",
            "Monthly Plan",
            1,
            2499,
            None,
            &["HD/4K Quality", "8,000+ Channels", "15,000+ Movies", "2 Devices", "24/7 Support"],
            567,
        ),
        plan(
            "quarterly",
            "3 Months Plan",
            3,
            5999,
            Some(7497),
            &[
                "HD/4K Quality",
                "12,000+ Channels",
                "25,000+ Movies",
                "3 Devices",
                "Priority Support",
                "Champions League",
            ],
            1250,
        ),
        plan(
            "semiannual",
            "6 Months Plan",
            6,
            10999,
            Some(14994),
            &[
                "HD/4K Quality",
                "15,000+ Channels",
                "40,000+ Movies",
                "4 Devices",
                "VIP Support",
                "All Sports",
            ],
            234,
        ),
        plan(
            "yearly",
            "1 Year Plan",
            12,
            17999,
            Some(29988),
            &[
                "HD/4K Quality",
                "15,000+ Channels",
                "50,000+ Movies",
                "5 Devices",
                "VIP Support",
                "Premium Content",
            ],
            890,
        ),
    ]
}

pub(crate) fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: UserId::new("1"),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            country: "United States".to_string(),
            phone: Some("+1234567890".to_string()),
            registered_at: day(2024, 12, 15),
            last_login: day(2025, 1, 15),
            status: UserStatus::Active,
            total_spent: Price::from_cents(17999),
            avatar: None,
        },
        Customer {
            id: UserId::new("2"),
            name: "Sarah Johnson".to_string(),
            email: "sarah@example.com".to_string(),
            country: "Canada".to_string(),
            phone: Some("+1987654321".to_string()),
            registered_at: day(2024, 11, 20),
            last_login: day(2025, 1, 14),
            status: UserStatus::Active,
            total_spent: Price::from_cents(29999),
            avatar: None,
        },
        Customer {
            id: UserId::new("3"),
            name: "Ahmed Hassan".to_string(),
            email: "ahmed@example.com".to_string(),
            country: "UAE".to_string(),
            phone: Some("+971501234567".to_string()),
            registered_at: day(2024, 10, 10),
            last_login: day(2025, 1, 10),
            status: UserStatus::Suspended,
            total_spent: Price::from_cents(11999),
            avatar: None,
        },
    ]
}

pub(crate) fn subscriptions() -> Vec<Subscription> {
    vec![
        Subscription {
            id: SubscriptionId::new("sub1"),
            user_id: UserId::new("1"),
            plan_id: PlanId::new("quarterly"),
            plan_name: "3 Months Premium".to_string(),
            status: SubscriptionStatus::Active,
            start_date: day(2025, 1, 15),
            end_date: day(2025, 4, 15),
            price: Price::from_cents(5999),
            auto_renew: true,
            devices: 2,
            max_devices: 3,
            features: strings(&[
                "HD/4K Quality",
                "12,000+ Channels",
                "25,000+ Movies",
                "3 Devices",
                "Priority Support",
            ]),
        },
        Subscription {
            id: SubscriptionId::new("sub2"),
            user_id: UserId::new("2"),
            plan_id: PlanId::new("yearly"),
            plan_name: "1 Year Premium".to_string(),
            status: SubscriptionStatus::Active,
            start_date: day(2024, 11, 20),
            end_date: day(2025, 11, 20),
            price: Price::from_cents(17999),
            auto_renew: true,
            devices: 4,
            max_devices: 5,
            features: strings(&[
                "HD/4K Quality",
                "15,000+ Channels",
                "50,000+ Movies",
                "5 Devices",
                "VIP Support",
            ]),
        },
        Subscription {
            id: SubscriptionId::new("sub3"),
            user_id: UserId::new("3"),
            plan_id: PlanId::new("monthly"),
            plan_name: "Monthly Plan".to_string(),
            status: SubscriptionStatus::Expired,
            start_date: day(2024, 12, 10),
            end_date: day(2025, 1, 10),
            price: Price::from_cents(2499),
            auto_renew: false,
            devices: 1,
            max_devices: 2,
            features: strings(&["HD/4K Quality", "8,000+ Channels", "15,000+ Movies", "2 Devices"]),
        },
    ]
}

pub(crate) fn orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new("ORD-2025-001"),
            user_id: UserId::new("1"),
            plan_id: PlanId::new("quarterly"),
            plan_name: "3 Months Premium".to_string(),
            amount: Price::from_cents(5999),
            status: OrderStatus::Paid,
            payment_method: "Credit Card".to_string(),
            created_at: day(2025, 1, 15),
            invoice_url: Some("#".to_string()),
        },
        Order {
            id: OrderId::new("ORD-2025-002"),
            user_id: UserId::new("2"),
            plan_id: PlanId::new("yearly"),
            plan_name: "1 Year Premium".to_string(),
            amount: Price::from_cents(17999),
            status: OrderStatus::Paid,
            payment_method: "PayPal".to_string(),
            created_at: day(2025, 1, 14),
            invoice_url: Some("#".to_string()),
        },
        Order {
            id: OrderId::new("ORD-2025-003"),
            user_id: UserId::new("3"),
            plan_id: PlanId::new("monthly"),
            plan_name: "Monthly Plan".to_string(),
            amount: Price::from_cents(2499),
            status: OrderStatus::Failed,
            payment_method: "Credit Card".to_string(),
            created_at: day(2025, 1, 10),
            invoice_url: None,
        },
    ]
}

pub(crate) fn favorites() -> HashMap<UserId, Vec<Favorite>> {
    let favorite = |id: &str, name: &str, category: &str, kind, image: &str, added_at| Favorite {
        id: FavoriteId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        kind,
        image: format!("https://images.pexels.com/photos/{image}?w=300&h=200&fit=crop"),
        added_at,
    };

    let johns = vec![
        favorite("1", "ESPN HD", "Sports", ContentKind::Live, "163465/sport-treadmill-tor-route-163465.jpeg", day(2025, 1, 10)),
        favorite("2", "CNN International", "News", ContentKind::Live, "518543/pexels-photo-518543.jpeg", day(2025, 1, 8)),
        favorite("3", "Discovery Channel", "Documentary", ContentKind::Live, "355952/pexels-photo-355952.jpeg", day(2025, 1, 5)),
        favorite("4", "The Avengers", "Movies", ContentKind::Vod, "7991579/pexels-photo-7991579.jpeg", day(2024, 12, 28)),
        favorite("5", "Breaking Bad", "Series", ContentKind::Vod, "1040160/pexels-photo-1040160.jpeg", day(2024, 12, 25)),
        favorite("6", "Cartoon Network", "Kids", ContentKind::Live, "8197530/pexels-photo-8197530.jpeg", day(2024, 12, 20)),
    ];

    HashMap::from([(UserId::new("1"), johns)])
}
