//! # darzi-db: Database Layer for Darzi Order Desk
//!
//! This crate provides database access for the Darzi Order Desk system.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Darzi Order Desk Data Flow                          │
//! │                                                                         │
//! │  UI/API layer (save order, edit fabric price, ...)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     darzi-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (fabric.rs,   │    │  (embedded)  │  │   │
//! │  │   │               │    │  settings.rs, │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│  order.rs)    │    │ 001_init.sql │  │   │
//! │  │   │ Management    │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │                  ./data/darzi.db (WAL mode)                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (fabric, settings, order)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use darzi_db::{Database, DbConfig};
//!
//! // Create database with default config
//! let config = DbConfig::new("path/to/darzi.db");
//! let db = Database::new(config).await?;
//!
//! // Use repositories
//! let fabrics = db.fabrics().list().await?;
//! let settings = db.settings().get().await?;
//! let order_id = db.orders().create_order(&customer, &items).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::fabric::FabricRepository;
pub use repository::order::OrderRepository;
pub use repository::settings::SettingsRepository;
