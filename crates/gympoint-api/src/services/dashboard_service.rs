//! Dashboard aggregates.

use crate::error::ApiError;
use crate::models::DashboardTotals;
use sqlx::PgPool;

/// Service for dashboard counts.
#[derive(Clone)]
pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    /// Create a new dashboard service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Count registered students, optionally filtered by subscription
    /// tier name (case-insensitive). An unknown tier name yields a zero
    /// count rather than an error.
    ///
    /// # Errors
    ///
    /// `Store` when a query fails.
    pub async fn total_students(
        &self,
        subscription_type_name: Option<&str>,
    ) -> Result<DashboardTotals, ApiError> {
        let filter = subscription_type_name
            .map(str::trim)
            .filter(|name| !name.is_empty() && !name.eq_ignore_ascii_case("all"))
            .map(str::to_lowercase);

        let Some(name) = filter else {
            let total_registered: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| ApiError::store("Failed to count students", e))?;

            return Ok(DashboardTotals {
                total_registered,
                filtered_by: "all".to_string(),
            });
        };

        let tier: Option<(uuid::Uuid,)> =
            sqlx::query_as("SELECT id FROM subscription_types WHERE name ILIKE $1")
                .bind(&name)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| ApiError::store("Failed to fetch subscription type", e))?;

        let Some((tier_id,)) = tier else {
            return Ok(DashboardTotals {
                total_registered: 0,
                filtered_by: name,
            });
        };

        let total_registered: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM students WHERE subscription_type_id = $1")
                .bind(tier_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| ApiError::store("Failed to count students", e))?;

        Ok(DashboardTotals {
            total_registered,
            filtered_by: name,
        })
    }
}
