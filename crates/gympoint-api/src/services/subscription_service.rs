//! Subscription tier management.
//!
//! A tier is two rows: the named type and its fee. Creation inserts the
//! type first and the fee second without a transaction; a fee failure
//! leaves the tier behind and is reported with a step-naming message.

use crate::error::ApiError;
use crate::models::{CreateSubscriptionRequest, SubscriptionWithFee, UpdateSubscriptionRequest};
use gympoint_core::{SubscriptionTypeId, UserId};
use sqlx::PgPool;

const SUBSCRIPTION_WITH_FEE: &str = r"
    SELECT st.id, st.name, sf.amount, st.created_at
    FROM subscription_types st
    LEFT JOIN subscription_fees sf ON sf.subscription_type_id = st.id
";

/// Service for subscription tier mutations and queries.
#[derive(Clone)]
pub struct SubscriptionService {
    pool: PgPool,
}

impl SubscriptionService {
    /// Create a new subscription service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a tier with its fee.
    ///
    /// # Errors
    ///
    /// - `Rejected` when the name is already in use
    /// - `Store` when an insert fails; a fee failure after the tier
    ///   insert is reported as such
    pub async fn create(
        &self,
        created_by: UserId,
        request: &CreateSubscriptionRequest,
    ) -> Result<SubscriptionWithFee, ApiError> {
        let name = request.name.trim();

        let existing: Option<(uuid::Uuid,)> =
            sqlx::query_as("SELECT id FROM subscription_types WHERE lower(name) = lower($1)")
                .bind(name)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| ApiError::store("Error checking existing subscription", e))?;

        if existing.is_some() {
            return Err(ApiError::rejected(
                "Subscription type already exists",
                format!("The name \"{name}\" is already in use."),
            ));
        }

        let (id, created_at): (uuid::Uuid, chrono::DateTime<chrono::Utc>) = sqlx::query_as(
            "INSERT INTO subscription_types (name, created_by) VALUES ($1, $2) RETURNING id, created_at",
        )
        .bind(name)
        .bind(created_by.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ApiError::store("Failed to create subscription type", e))?;

        sqlx::query(
            "INSERT INTO subscription_fees (subscription_type_id, amount) VALUES ($1, $2)",
        )
        .bind(id)
        .bind(request.amount)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            ApiError::store("Subscription type created, but failed to insert fee", e)
        })?;

        tracing::info!(subscription_type_id = %id, name, "Subscription type created");

        Ok(SubscriptionWithFee {
            id,
            name: name.to_string(),
            amount: Some(request.amount),
            created_at,
        })
    }

    /// List all tiers with fees, newest first.
    ///
    /// # Errors
    ///
    /// `Store` when the query fails.
    pub async fn list(&self) -> Result<Vec<SubscriptionWithFee>, ApiError> {
        sqlx::query_as(&format!("{SUBSCRIPTION_WITH_FEE} ORDER BY st.created_at DESC"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ApiError::store("Failed to fetch subscriptions", e))
    }

    /// Fetch one tier with its fee.
    ///
    /// # Errors
    ///
    /// `NotFound` when no tier exists with the id.
    pub async fn get(
        &self,
        subscription_type_id: SubscriptionTypeId,
    ) -> Result<SubscriptionWithFee, ApiError> {
        sqlx::query_as(&format!("{SUBSCRIPTION_WITH_FEE} WHERE st.id = $1"))
            .bind(subscription_type_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| ApiError::NotFound("Subscription".to_string()))
    }

    /// Update the tier name and/or fee amount.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no tier exists with the id
    /// - `Store` when an update fails, named per field
    pub async fn update(
        &self,
        subscription_type_id: SubscriptionTypeId,
        request: &UpdateSubscriptionRequest,
    ) -> Result<SubscriptionWithFee, ApiError> {
        if let Some(name) = &request.name {
            sqlx::query("UPDATE subscription_types SET name = $2 WHERE id = $1")
                .bind(subscription_type_id.as_uuid())
                .bind(name.trim())
                .execute(&self.pool)
                .await
                .map_err(|e| ApiError::store("Failed to update subscription name", e))?;
        }

        if let Some(amount) = request.amount {
            sqlx::query("UPDATE subscription_fees SET amount = $2 WHERE subscription_type_id = $1")
                .bind(subscription_type_id.as_uuid())
                .bind(amount)
                .execute(&self.pool)
                .await
                .map_err(|e| ApiError::store("Failed to update subscription fee", e))?;
        }

        self.get(subscription_type_id).await
    }

    /// Delete a tier and its fee.
    ///
    /// # Errors
    ///
    /// - `Rejected` while any student references the tier
    /// - `Store` when a query fails
    pub async fn delete(
        &self,
        subscription_type_id: SubscriptionTypeId,
    ) -> Result<(), ApiError> {
        let student_count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM students WHERE subscription_type_id = $1",
        )
        .bind(subscription_type_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ApiError::store("Failed to validate subscription usage", e))?;

        if student_count > 0 {
            return Err(ApiError::rejected(
                "Cannot delete subscription type",
                "It is currently used by one or more students",
            ));
        }

        sqlx::query("DELETE FROM subscription_fees WHERE subscription_type_id = $1")
            .bind(subscription_type_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| ApiError::store("Failed to delete subscription type", e))?;

        sqlx::query("DELETE FROM subscription_types WHERE id = $1")
            .bind(subscription_type_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| ApiError::store("Failed to delete subscription type", e))?;

        tracing::info!(subscription_type_id = %subscription_type_id, "Subscription type deleted");
        Ok(())
    }
}
