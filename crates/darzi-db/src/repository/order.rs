//! # Order Repository
//!
//! Order persistence and the read projections built on top of it.
//!
//! ## Order Submission
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Submission                                  │
//! │                                                                         │
//! │  1. VALIDATE                                                           │
//! │     └── non-blank customer name, at least one item                     │
//! │         (refused up front - nothing is written)                        │
//! │                                                                         │
//! │  2. ONE TRANSACTION                                                    │
//! │     ├── INSERT customer                                                │
//! │     ├── INSERT order (date, customer, rounded total)                   │
//! │     └── INSERT order_items (one row per finalized item, positioned)    │
//! │                                                                         │
//! │  3. READ PROJECTIONS (later)                                           │
//! │     ├── list_summaries()      → orders list screen                     │
//! │     ├── get_full_details(id)  → invoice                                │
//! │     └── get_tailoring_items(id) → tailoring-department sheet           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items are stored with their on-screen position so documents list them
//! in the order they were sold.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use darzi_core::units::round2;
use darzi_core::validation::validate_customer_name;
use darzi_core::{
    Customer, CustomerDetails, FullOrderDetails, LineItem, Order, OrderSummary, TailoringItem,
    ValidationError,
};

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Persists a submitted order: customer, header, and items, in one
    /// transaction.
    ///
    /// The stored total is the sum of the items' costs, rounded to 2 dp
    /// at this moment; the items themselves keep their own figures, so
    /// the precise sum stays recoverable.
    ///
    /// ## Errors
    /// - [`DbError::Validation`] if the customer name is blank or the
    ///   item list is empty (nothing is written)
    /// - [`DbError::ForeignKeyViolation`] if an item references a fabric
    ///   that is not in the catalog
    ///
    /// ## Returns
    /// The persisted [`Order`] header, with its generated id.
    pub async fn create_order(
        &self,
        customer: &CustomerDetails,
        items: &[LineItem],
    ) -> DbResult<Order> {
        let customer_name = validate_customer_name(&customer.name)?;

        if items.is_empty() {
            return Err(ValidationError::Required {
                field: "items".to_string(),
            }
            .into());
        }

        let customer_id = Uuid::new_v4().to_string();
        let order = Order {
            id: Uuid::new_v4().to_string(),
            order_date: Utc::now(),
            customer_id: customer_id.clone(),
            total_cost: round2(items.iter().map(|item| item.cost).sum()),
        };

        debug!(
            order_id = %order.id,
            items = items.len(),
            total_cost = order.total_cost,
            "Creating order"
        );

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO customers (id, name, phone, address)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&customer_id)
        .bind(&customer_name)
        .bind(&customer.phone)
        .bind(&customer.address)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, order_date, customer_id, total_cost)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&order.id)
        .bind(order.order_date)
        .bind(&order.customer_id)
        .bind(order.total_cost)
        .execute(&mut *tx)
        .await?;

        for (position, item) in items.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO order_items (
                    id, order_id, position,
                    fabric_id, fabric_name, design_code, item_type,
                    length_cm, quantity, fabric_used_m, cost
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
                "#,
            )
            .bind(Uuid::new_v4().to_string())
            .bind(&order.id)
            .bind(position as i64)
            .bind(&item.fabric_id)
            .bind(&item.fabric_name)
            .bind(&item.design_code)
            .bind(item.item_type)
            .bind(item.length_cm)
            .bind(item.quantity)
            .bind(item.fabric_used_m)
            .bind(item.cost)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(order)
    }

    /// Lists order headers joined with their customer name, newest first.
    pub async fn list_summaries(&self) -> DbResult<Vec<OrderSummary>> {
        let summaries = sqlx::query_as::<_, OrderSummary>(
            r#"
            SELECT o.id, o.order_date, o.customer_id, o.total_cost,
                   c.name AS customer_name
            FROM orders o
            INNER JOIN customers c ON c.id = o.customer_id
            ORDER BY o.order_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(summaries)
    }

    /// Fetches everything needed to render one order.
    ///
    /// ## Errors
    /// [`DbError::NotFound`] if the order id doesn't exist.
    pub async fn get_full_details(&self, order_id: &str) -> DbResult<FullOrderDetails> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, order_date, customer_id, total_cost
            FROM orders
            WHERE id = ?1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Order", order_id))?;

        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, phone, address
            FROM customers
            WHERE id = ?1
            "#,
        )
        .bind(&order.customer_id)
        .fetch_one(&self.pool)
        .await?;

        let items = self.get_items(order_id).await?;

        Ok(FullOrderDetails {
            order,
            customer,
            items,
        })
    }

    /// Fetches the tailoring-department projection for one order: design
    /// code, length, and quantity per item, in sold order.
    ///
    /// ## Errors
    /// [`DbError::NotFound`] if the order id doesn't exist.
    pub async fn get_tailoring_items(&self, order_id: &str) -> DbResult<Vec<TailoringItem>> {
        // Distinguish "unknown order" from "order with no rows" up front;
        // the latter cannot be created through create_order.
        let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE id = ?1")
            .bind(order_id)
            .fetch_one(&self.pool)
            .await?;
        if exists == 0 {
            return Err(DbError::not_found("Order", order_id));
        }

        let items = sqlx::query_as::<_, TailoringItem>(
            r#"
            SELECT design_code, length_cm, quantity
            FROM order_items
            WHERE order_id = ?1
            ORDER BY position
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Fetches the finalized items of an order, in sold order.
    async fn get_items(&self, order_id: &str) -> DbResult<Vec<LineItem>> {
        let items = sqlx::query_as::<_, LineItem>(
            r#"
            SELECT fabric_id, fabric_name, design_code, item_type,
                   length_cm, quantity, fabric_used_m, cost
            FROM order_items
            WHERE order_id = ?1
            ORDER BY position
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
