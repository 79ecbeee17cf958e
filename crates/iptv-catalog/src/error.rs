//! Error types for catalog operations.

use iptv_types::{FavoriteId, OrderId, PlanId, SubscriptionId, UserId};

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while reading or mutating the catalog.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    #[error("subscription not found: {0}")]
    SubscriptionNotFound(SubscriptionId),

    #[error("plan not found: {0}")]
    PlanNotFound(PlanId),

    /// The plan exists but is not offered for sale.
    #[error("plan is not available: {0}")]
    PlanUnavailable(PlanId),

    #[error("order not found: {0}")]
    OrderNotFound(OrderId),

    #[error("favorite not found: {0}")]
    FavoriteNotFound(FavoriteId),

    /// Another account already uses this email address.
    #[error("email already registered: {0}")]
    EmailTaken(String),
}
