//! # Fabric Repository
//!
//! Database operations for the fabric catalog.
//!
//! ## Catalog Shape
//! The order form presents fabrics grouped by name, with one entry per
//! design code ("Velvet" → VLV-101, VLV-102, ...). The list query returns
//! rows ordered by name then design code so the UI can group them without
//! re-sorting.
//!
//! Price edits here never touch existing orders: every order item carries
//! its own frozen copy of the price-derived cost.

use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use darzi_core::validation::validate_price_per_meter;
use darzi_core::Fabric;

/// Repository for fabric catalog operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.fabrics();
///
/// let catalog = repo.list().await?;
/// let fabric = repo.get_by_id("uuid-here").await?;
/// repo.update_price("uuid-here", 12.5).await?;
/// ```
#[derive(Debug, Clone)]
pub struct FabricRepository {
    pool: SqlitePool,
}

impl FabricRepository {
    /// Creates a new FabricRepository.
    pub fn new(pool: SqlitePool) -> Self {
        FabricRepository { pool }
    }

    /// Lists the whole catalog, ordered by name then design code.
    pub async fn list(&self) -> DbResult<Vec<Fabric>> {
        let fabrics = sqlx::query_as::<_, Fabric>(
            r#"
            SELECT id, name, design_code, price_per_meter
            FROM fabrics
            ORDER BY name, design_code
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(fabrics)
    }

    /// Gets a fabric by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Fabric))` - Fabric found
    /// * `Ok(None)` - Fabric not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Fabric>> {
        let fabric = sqlx::query_as::<_, Fabric>(
            r#"
            SELECT id, name, design_code, price_per_meter
            FROM fabrics
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(fabric)
    }

    /// Inserts a new catalog entry with a generated id.
    ///
    /// ## Returns
    /// The inserted fabric, with its id filled in.
    pub async fn insert(&self, name: &str, design_code: &str, price_per_meter: f64) -> DbResult<Fabric> {
        validate_price_per_meter(price_per_meter)?;

        let fabric = Fabric {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            design_code: design_code.to_string(),
            price_per_meter,
        };

        debug!(id = %fabric.id, design_code = %fabric.design_code, "Inserting fabric");

        sqlx::query(
            r#"
            INSERT INTO fabrics (id, name, design_code, price_per_meter)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&fabric.id)
        .bind(&fabric.name)
        .bind(&fabric.design_code)
        .bind(fabric.price_per_meter)
        .execute(&self.pool)
        .await?;

        Ok(fabric)
    }

    /// Updates a fabric's price per meter.
    ///
    /// ## Errors
    /// - [`DbError::Validation`] if the price is negative or not finite
    ///   (rejected before any write)
    /// - [`DbError::NotFound`] if the fabric id doesn't exist
    pub async fn update_price(&self, id: &str, new_price: f64) -> DbResult<()> {
        validate_price_per_meter(new_price)?;

        debug!(id = %id, new_price = %new_price, "Updating fabric price");

        let result = sqlx::query(
            r#"
            UPDATE fabrics SET price_per_meter = ?2
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(new_price)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Fabric", id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_list_orders_by_name_then_code() {
        let db = test_db().await;
        let repo = db.fabrics();

        repo.insert("Velvet", "VLV-102", 12.0).await.unwrap();
        repo.insert("Chiffon", "CHF-201", 6.5).await.unwrap();
        repo.insert("Velvet", "VLV-101", 10.0).await.unwrap();

        let catalog = repo.list().await.unwrap();
        let codes: Vec<&str> = catalog.iter().map(|f| f.design_code.as_str()).collect();
        assert_eq!(codes, vec!["CHF-201", "VLV-101", "VLV-102"]);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let db = test_db().await;
        let repo = db.fabrics();

        let inserted = repo.insert("Organza", "ORG-310", 8.25).await.unwrap();

        let found = repo.get_by_id(&inserted.id).await.unwrap().unwrap();
        assert_eq!(found, inserted);

        assert!(repo.get_by_id("no-such-id").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_price_round_trip() {
        let db = test_db().await;
        let repo = db.fabrics();

        let fabric = repo.insert("Linen", "LIN-410", 9.0).await.unwrap();
        repo.update_price(&fabric.id, 11.75).await.unwrap();

        let reread = repo.get_by_id(&fabric.id).await.unwrap().unwrap();
        assert_eq!(reread.price_per_meter, 11.75);
    }

    #[tokio::test]
    async fn test_update_price_rejects_negative() {
        let db = test_db().await;
        let repo = db.fabrics();

        let fabric = repo.insert("Linen", "LIN-410", 9.0).await.unwrap();
        let err = repo.update_price(&fabric.id, -1.0).await.unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));

        // And the stored price is untouched.
        let reread = repo.get_by_id(&fabric.id).await.unwrap().unwrap();
        assert_eq!(reread.price_per_meter, 9.0);
    }

    #[tokio::test]
    async fn test_update_price_unknown_fabric() {
        let db = test_db().await;

        let err = db.fabrics().update_price("no-such-id", 5.0).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_duplicate_design_code_rejected() {
        let db = test_db().await;
        let repo = db.fabrics();

        repo.insert("Velvet", "VLV-101", 10.0).await.unwrap();
        let err = repo.insert("Velvet Deluxe", "VLV-101", 14.0).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }
}
