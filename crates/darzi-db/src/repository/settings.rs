//! # Settings Repository
//!
//! Database operations for the shop-wide pricing tunables.
//!
//! The settings live in a single-row table (id = 1), seeded by the
//! initial migration, so `get()` always has a row to return. Both values
//! feed the curtain pricing formula; edits here only affect items priced
//! after the change.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use darzi_core::validation::validate_settings;
use darzi_core::ShopSettings;

/// Repository for shop settings.
///
/// ## Usage
/// ```rust,ignore
/// let settings = db.settings().get().await?;
/// db.settings()
///     .update(&ShopSettings { stitching_price: 150.0, extra_hem_cm: 10.0 })
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: SqlitePool,
}

impl SettingsRepository {
    /// Creates a new SettingsRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SettingsRepository { pool }
    }

    /// Returns the current shop settings.
    ///
    /// The row is created by the initial migration, so this only fails if
    /// the database itself is unusable.
    pub async fn get(&self) -> DbResult<ShopSettings> {
        let settings = sqlx::query_as::<_, ShopSettings>(
            r#"
            SELECT stitching_price, extra_hem_cm
            FROM shop_settings
            WHERE id = 1
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(settings)
    }

    /// Replaces both tunables.
    ///
    /// ## Errors
    /// [`crate::DbError::Validation`] if either value is negative or not
    /// finite; nothing is written in that case.
    pub async fn update(&self, settings: &ShopSettings) -> DbResult<()> {
        validate_settings(settings)?;

        debug!(
            stitching_price = settings.stitching_price,
            extra_hem_cm = settings.extra_hem_cm,
            "Updating shop settings"
        );

        sqlx::query(
            r#"
            UPDATE shop_settings
            SET stitching_price = ?1, extra_hem_cm = ?2
            WHERE id = 1
            "#,
        )
        .bind(settings.stitching_price)
        .bind(settings.extra_hem_cm)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
