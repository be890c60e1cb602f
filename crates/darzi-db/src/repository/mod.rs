//! # Repository Module
//!
//! Database repository implementations for Darzi Order Desk.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  API handler                                                           │
//! │       │                                                                 │
//! │       │  db.orders().create_order(&customer, &items)                   │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  OrderRepository                                                       │
//! │  ├── create_order(&self, customer, items)                              │
//! │  ├── list_summaries(&self)                                             │
//! │  ├── get_full_details(&self, order_id)                                 │
//! │  └── get_tailoring_items(&self, order_id)                              │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                        │
//! │  • Easy to test against an in-memory database                          │
//! │  • SQL is isolated in one place                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`fabric::FabricRepository`] - Fabric catalog CRUD
//! - [`settings::SettingsRepository`] - Shop pricing tunables
//! - [`order::OrderRepository`] - Order persistence and read projections

pub mod fabric;
pub mod order;
pub mod settings;
