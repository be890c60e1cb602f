//! # Seed Data Generator
//!
//! Populates the database with a starter fabric catalog and sensible shop
//! settings for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database (./data/darzi.db)
//! cargo run -p darzi-db --bin seed
//!
//! # Specify database path
//! cargo run -p darzi-db --bin seed -- --db ./data/darzi.db
//! ```
//!
//! ## Generated Data
//! - One catalog entry per (fabric, design code) pair below, priced per
//!   linear meter
//! - Shop settings: stitching 150.00 per piece, 10 cm hem allowance
//!
//! Re-running is safe: catalog entries whose design code already exists
//! are skipped, settings are overwritten.

use std::env;

use darzi_core::ShopSettings;
use darzi_db::{Database, DbConfig, DbError};
use tracing::{info, warn};

/// Starter catalog: (fabric name, design code, price per meter).
const CATALOG: &[(&str, &str, f64)] = &[
    ("Velvet", "VLV-101", 1450.0),
    ("Velvet", "VLV-102", 1450.0),
    ("Velvet", "VLV-105", 1680.0),
    ("Chiffon", "CHF-201", 520.0),
    ("Chiffon", "CHF-204", 560.0),
    ("Organza", "ORG-310", 640.0),
    ("Organza", "ORG-312", 690.0),
    ("Jacquard", "JQD-410", 980.0),
    ("Jacquard", "JQD-415", 1120.0),
    ("Linen", "LIN-510", 850.0),
    ("Linen", "LIN-512", 905.0),
    ("Cotton Satin", "CTS-610", 740.0),
    ("Net", "NET-710", 380.0),
    ("Raw Silk", "SLK-810", 1980.0),
];

/// Default shop settings for a fresh install.
const DEFAULT_SETTINGS: ShopSettings = ShopSettings {
    stitching_price: 150.0,
    extra_hem_cm: 10.0,
};

#[tokio::main]
async fn main() -> Result<(), DbError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let db_path = parse_db_path().unwrap_or_else(|| "./data/darzi.db".to_string());
    info!(path = %db_path, "Seeding database");

    // SQLite creates the file, but not its parent directory.
    if let Some(parent) = std::path::Path::new(&db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;
        }
    }

    let db = Database::new(DbConfig::new(&db_path)).await?;

    let fabrics = db.fabrics();
    let mut inserted = 0usize;
    let mut skipped = 0usize;

    for &(name, design_code, price_per_meter) in CATALOG {
        match fabrics.insert(name, design_code, price_per_meter).await {
            Ok(_) => inserted += 1,
            Err(DbError::UniqueViolation { .. }) => {
                skipped += 1;
            }
            Err(err) => {
                warn!(design_code, %err, "Failed to insert fabric");
                return Err(err);
            }
        }
    }

    db.settings().update(&DEFAULT_SETTINGS).await?;

    info!(
        inserted,
        skipped,
        stitching_price = DEFAULT_SETTINGS.stitching_price,
        extra_hem_cm = DEFAULT_SETTINGS.extra_hem_cm,
        "Seed complete"
    );

    Ok(())
}

/// Reads `--db <path>` from the command line, if present.
fn parse_db_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|arg| arg == "--db")
        .and_then(|i| args.get(i + 1))
        .cloned()
}
