//! Toast notices.
//!
//! A page rendered in response to a POST shows its [`Toast`] inline. A
//! redirect instead appends `?notice=<slug>` to the target, and the next page
//! turns the slug back into a [`Notice`].

use axum::response::Redirect;
use iptv_types::{MessageChannel, OrderStatus, UserStatus};

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// A rendered banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: &'static str,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success.as_str(), message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error.as_str(), message: message.into() }
    }
}

/// Outcomes that survive a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    LoggedIn,
    Registered,
    LoggedOut,
    PaymentSuccessful,
    ProfileUpdated,
    FavoriteRemoved,
    FavoriteRemoveFailed,
    AdminLoggedIn,
    UserStatusUpdated(UserStatus),
    UserStatusFailed,
    UserDeleted,
    UserDeleteFailed,
    MessageSent(MessageChannel),
    MessageFailed,
    BroadcastSent { recipients: usize, channel: MessageChannel },
    PromotionSent { recipients: usize },
    SubscriptionCreated,
    SubscriptionCreateFailed,
    SubscriptionUpdated,
    SubscriptionUpdateFailed,
    SubscriptionCancelled,
    SubscriptionCancelFailed,
    PlanCreated,
    PlanUpdated,
    PlanSaveFailed,
    PlanDeleted,
    PlanDeleteFailed,
    OrderStatusUpdated(OrderStatus),
    OrderStatusFailed,
}

impl Notice {
    pub fn kind(self) -> ToastKind {
        match self {
            Notice::FavoriteRemoveFailed
            | Notice::UserStatusFailed
            | Notice::UserDeleteFailed
            | Notice::MessageFailed
            | Notice::SubscriptionCreateFailed
            | Notice::SubscriptionUpdateFailed
            | Notice::SubscriptionCancelFailed
            | Notice::PlanSaveFailed
            | Notice::PlanDeleteFailed
            | Notice::OrderStatusFailed => ToastKind::Error,
            _ => ToastKind::Success,
        }
    }

    pub fn message(self) -> String {
        match self {
            Notice::LoggedIn => "Welcome back!".to_string(),
            Notice::Registered => "Account created successfully!".to_string(),
            Notice::LoggedOut => "You have been logged out".to_string(),
            Notice::PaymentSuccessful => "Payment successful! Welcome to IPTV Pro!".to_string(),
            Notice::ProfileUpdated => "Profile updated successfully!".to_string(),
            Notice::FavoriteRemoved => "Removed from favorites".to_string(),
            Notice::FavoriteRemoveFailed => "Failed to remove favorite".to_string(),
            Notice::AdminLoggedIn => "Admin login successful!".to_string(),
            Notice::UserStatusUpdated(status) => format!("User status updated to {status}"),
            Notice::UserStatusFailed => "Failed to update user status".to_string(),
            Notice::UserDeleted => "User deleted successfully".to_string(),
            Notice::UserDeleteFailed => "Failed to delete user".to_string(),
            Notice::MessageSent(MessageChannel::Email) => "Email sent successfully!".to_string(),
            Notice::MessageSent(MessageChannel::WhatsApp) => {
                "WhatsApp message sent successfully!".to_string()
            }
            Notice::MessageFailed => "Failed to send message".to_string(),
            Notice::BroadcastSent { recipients, channel } => {
                format!("Message sent to {recipients} users via {}!", channel.label())
            }
            Notice::PromotionSent { recipients } => {
                format!("Promotion sent to {recipients} users!")
            }
            Notice::SubscriptionCreated => "Subscription created successfully!".to_string(),
            Notice::SubscriptionCreateFailed => "Failed to create subscription".to_string(),
            Notice::SubscriptionUpdated => "Subscription updated successfully!".to_string(),
            Notice::SubscriptionUpdateFailed => "Failed to update subscription".to_string(),
            Notice::SubscriptionCancelled => "Subscription cancelled successfully!".to_string(),
            Notice::SubscriptionCancelFailed => "Failed to cancel subscription".to_string(),
            Notice::PlanCreated => "Plan created successfully!".to_string(),
            Notice::PlanUpdated => "Plan updated successfully!".to_string(),
            Notice::PlanSaveFailed => "Failed to save plan".to_string(),
            Notice::PlanDeleted => "Plan deleted successfully!".to_string(),
            Notice::PlanDeleteFailed => "Failed to delete plan".to_string(),
            Notice::OrderStatusUpdated(status) => format!("Order status updated to {status}"),
            Notice::OrderStatusFailed => "Failed to update order status".to_string(),
        }
    }

    pub fn toast(self) -> Toast {
        Toast { kind: self.kind().as_str(), message: self.message() }
    }

    /// Query-string form, e.g. `user-status-suspended` or `broadcast-email-3`.
    pub fn slug(self) -> String {
        let fixed = match self {
            Notice::LoggedIn => "logged-in",
            Notice::Registered => "registered",
            Notice::LoggedOut => "logged-out",
            Notice::PaymentSuccessful => "payment-successful",
            Notice::ProfileUpdated => "profile-updated",
            Notice::FavoriteRemoved => "favorite-removed",
            Notice::FavoriteRemoveFailed => "favorite-remove-failed",
            Notice::AdminLoggedIn => "admin-logged-in",
            Notice::UserStatusFailed => "user-status-failed",
            Notice::UserDeleted => "user-deleted",
            Notice::UserDeleteFailed => "user-delete-failed",
            Notice::MessageFailed => "message-failed",
            Notice::SubscriptionCreated => "subscription-created",
            Notice::SubscriptionCreateFailed => "subscription-create-failed",
            Notice::SubscriptionUpdated => "subscription-updated",
            Notice::SubscriptionUpdateFailed => "subscription-update-failed",
            Notice::SubscriptionCancelled => "subscription-cancelled",
            Notice::SubscriptionCancelFailed => "subscription-cancel-failed",
            Notice::PlanCreated => "plan-created",
            Notice::PlanUpdated => "plan-updated",
            Notice::PlanSaveFailed => "plan-save-failed",
            Notice::PlanDeleted => "plan-deleted",
            Notice::PlanDeleteFailed => "plan-delete-failed",
            Notice::OrderStatusFailed => "order-status-failed",
            Notice::UserStatusUpdated(status) => return format!("user-status-{status}"),
            Notice::MessageSent(channel) => return format!("message-sent-{channel}"),
            Notice::BroadcastSent { recipients, channel } => {
                return format!("broadcast-{channel}-{recipients}");
            }
            Notice::PromotionSent { recipients } => return format!("promotion-{recipients}"),
            Notice::OrderStatusUpdated(status) => return format!("order-status-{status}"),
        };
        fixed.to_string()
    }

    /// Inverse of [`Notice::slug`]. Unknown slugs are ignored.
    pub fn from_slug(slug: &str) -> Option<Self> {
        let fixed = match slug {
            "logged-in" => Some(Notice::LoggedIn),
            "registered" => Some(Notice::Registered),
            "logged-out" => Some(Notice::LoggedOut),
            "payment-successful" => Some(Notice::PaymentSuccessful),
            "profile-updated" => Some(Notice::ProfileUpdated),
            "favorite-removed" => Some(Notice::FavoriteRemoved),
            "favorite-remove-failed" => Some(Notice::FavoriteRemoveFailed),
            "admin-logged-in" => Some(Notice::AdminLoggedIn),
            "user-status-failed" => Some(Notice::UserStatusFailed),
            "user-deleted" => Some(Notice::UserDeleted),
            "user-delete-failed" => Some(Notice::UserDeleteFailed),
            "message-failed" => Some(Notice::MessageFailed),
            "subscription-created" => Some(Notice::SubscriptionCreated),
            "subscription-create-failed" => Some(Notice::SubscriptionCreateFailed),
            "subscription-updated" => Some(Notice::SubscriptionUpdated),
            "subscription-update-failed" => Some(Notice::SubscriptionUpdateFailed),
            "subscription-cancelled" => Some(Notice::SubscriptionCancelled),
            "subscription-cancel-failed" => Some(Notice::SubscriptionCancelFailed),
            "plan-created" => Some(Notice::PlanCreated),
            "plan-updated" => Some(Notice::PlanUpdated),
            "plan-save-failed" => Some(Notice::PlanSaveFailed),
            "plan-deleted" => Some(Notice::PlanDeleted),
            "plan-delete-failed" => Some(Notice::PlanDeleteFailed),
            "order-status-failed" => Some(Notice::OrderStatusFailed),
            _ => None,
        };
        if fixed.is_some() {
            return fixed;
        }

        if let Some(status) = slug.strip_prefix("user-status-") {
            return status.parse().ok().map(Notice::UserStatusUpdated);
        }
        if let Some(status) = slug.strip_prefix("order-status-") {
            return status.parse().ok().map(Notice::OrderStatusUpdated);
        }
        if let Some(channel) = slug.strip_prefix("message-sent-") {
            return channel.parse().ok().map(Notice::MessageSent);
        }
        if let Some(rest) = slug.strip_prefix("broadcast-") {
            let (channel, recipients) = rest.split_once('-')?;
            return Some(Notice::BroadcastSent {
                recipients: recipients.parse().ok()?,
                channel: channel.parse().ok()?,
            });
        }
        if let Some(recipients) = slug.strip_prefix("promotion-") {
            return recipients
                .parse()
                .ok()
                .map(|recipients| Notice::PromotionSent { recipients });
        }
        None
    }
}

/// Redirects to `path` carrying `notice` in the query string.
pub fn redirect_with(path: &str, notice: Notice) -> Redirect {
    let separator = if path.contains('?') { '&' } else { '?' };
    Redirect::to(&format!("{path}{separator}notice={}", notice.slug()))
}
