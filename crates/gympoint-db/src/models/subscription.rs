//! Subscription tier entity models.

use chrono::{DateTime, Utc};
use gympoint_core::SubscriptionTypeId;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A named subscription tier.
///
/// Tier names are unique. A tier cannot be deleted while any student
/// references it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubscriptionType {
    /// Unique identifier for the tier.
    pub id: uuid::Uuid,

    /// Tier name (unique).
    pub name: String,

    /// The admin who created the tier, if recorded.
    pub created_by: Option<uuid::Uuid>,

    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

impl SubscriptionType {
    /// The tier ID as a typed [`SubscriptionTypeId`].
    #[must_use]
    pub fn subscription_type_id(&self) -> SubscriptionTypeId {
        SubscriptionTypeId::from_uuid(self.id)
    }
}

/// The fee row attached to a subscription tier.
///
/// Stored separately from the tier so fee history can evolve without
/// touching the tier row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubscriptionFee {
    /// Unique identifier for the fee row.
    pub id: uuid::Uuid,

    /// The tier this fee belongs to.
    pub subscription_type_id: uuid::Uuid,

    /// Monetary fee amount.
    pub amount: Decimal,

    /// When the row was created.
    pub created_at: DateTime<Utc>,
}
