//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows plus the role/status enums
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `sqlite.rs`: pooled storage handle, seeding, and the read model queries

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{
    AreaRow, AreaStats, AreaStatus, InventoryItem, InventoryStats, Role, Stats, StockStatus, User,
};
pub use schema::SQLITE_INIT;
pub use sqlite::{spawn, MonitorStorage, SqlitePool};
