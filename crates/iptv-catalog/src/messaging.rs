//! Audience selection, canned messages and the outbox.

use chrono::{DateTime, Utc};
use iptv_types::{Audience, Dispatch, DispatchId, MessageChannel, SubscriptionStatus, UserId};
use tracing::info;

use crate::Catalog;

/// A canned message an admin can start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub subject: &'static str,
    pub content: &'static str,
}

pub const MESSAGE_TEMPLATES: [MessageTemplate; 4] = [
    MessageTemplate {
        id: "welcome",
        name: "Welcome Message",
        subject: "Welcome to IPTV Pro!",
        content: "Thank you for joining IPTV Pro! Your subscription is now active and you can start streaming immediately.",
    },
    MessageTemplate {
        id: "expiry",
        name: "Expiry Reminder",
        subject: "Your subscription expires soon",
        content: "Your IPTV Pro subscription will expire in 3 days. Renew now to continue enjoying premium content.",
    },
    MessageTemplate {
        id: "promotion",
        name: "Special Offer",
        subject: "Special 50% Off Promotion!",
        content: "Limited time offer! Get 50% off on all annual plans. Upgrade now and save big on premium IPTV content.",
    },
    MessageTemplate {
        id: "maintenance",
        name: "Maintenance Notice",
        subject: "Scheduled Maintenance Notice",
        content: "We will be performing scheduled maintenance on our servers. Service may be briefly interrupted.",
    },
];

pub fn message_template(id: &str) -> Option<&'static MessageTemplate> {
    MESSAGE_TEMPLATES.iter().find(|t| t.id == id)
}

impl Catalog {
    /// Customers targeted by `audience`.
    ///
    /// `Active` and `Expired` select customers owning at least one
    /// subscription in that state.
    pub fn audience(&self, audience: Audience) -> Vec<UserId> {
        let owning = |status: SubscriptionStatus| -> Vec<UserId> {
            self.users
                .iter()
                .filter(|u| {
                    self.subscriptions
                        .iter()
                        .any(|s| s.user_id == u.id && s.status == status)
                })
                .map(|u| u.id.clone())
                .collect()
        };

        match audience {
            Audience::All => self.users.iter().map(|u| u.id.clone()).collect(),
            Audience::Active => owning(SubscriptionStatus::Active),
            Audience::Expired => owning(SubscriptionStatus::Expired),
        }
    }

    /// Appends a sent message to the outbox.
    pub fn record_dispatch(
        &mut self,
        recipients: Vec<UserId>,
        channel: MessageChannel,
        subject: impl Into<String>,
        body: impl Into<String>,
        audience: Option<Audience>,
        now: DateTime<Utc>,
    ) -> DispatchId {
        let id = DispatchId::new(format!("msg-{}", self.outbox.len() + 1));
        info!(
            dispatch = %id,
            channel = %channel,
            recipients = recipients.len(),
            "recorded dispatch"
        );

        self.outbox.push(Dispatch {
            id: id.clone(),
            recipients,
            channel,
            subject: subject.into(),
            body: body.into(),
            audience,
            sent_at: now,
        });
        id
    }

    /// Sent messages, newest first.
    pub fn dispatches(&self) -> impl Iterator<Item = &Dispatch> {
        self.outbox.iter().rev()
    }
}
