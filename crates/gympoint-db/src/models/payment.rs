//! Payment entity model.

use chrono::{DateTime, Utc};
use gympoint_core::PaymentId;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A recorded payment.
///
/// `change` is computed as `amount - amount_to_pay` before insertion and
/// is never negative; insufficient payments are rejected by validation
/// before they reach the store.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    /// Unique identifier for the payment.
    pub id: uuid::Uuid,

    /// The paying student.
    pub student_id: uuid::Uuid,

    /// Amount tendered.
    pub amount: Decimal,

    /// The fee that was due.
    pub amount_to_pay: Decimal,

    /// Change returned (`amount - amount_to_pay`).
    pub change: Decimal,

    /// Free-form payment category (e.g. "subscription", "training").
    pub payment_type: String,

    /// Payment method: "cash" or "online".
    pub payment_method: String,

    /// When the payment was made.
    pub paid_at: DateTime<Utc>,
}

impl Payment {
    /// The payment ID as a typed [`PaymentId`].
    #[must_use]
    pub fn payment_id(&self) -> PaymentId {
        PaymentId::from_uuid(self.id)
    }
}
