//! SQL DDL for initializing the monitoring database.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema:
/// - `users`: credential store, `username` UNIQUE (idempotent seeding relies on it)
/// - `areas`: inspection status per physical zone, `checked_by` → `users.id`
/// - `inventory`: stock levels per item
/// - Timestamps stored as RFC3339 TEXT, booleans as INTEGER 0/1
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    full_name TEXT NOT NULL,
    role TEXT NOT NULL,
    email TEXT NOT NULL,
    is_active INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS areas (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'pending',
    last_check TEXT NOT NULL,
    checked_by INTEGER NULL REFERENCES users(id)
);

CREATE TABLE IF NOT EXISTS inventory (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    stock INTEGER NOT NULL,
    min_stock INTEGER NOT NULL,
    status TEXT NOT NULL DEFAULT 'ok',
    unit TEXT NOT NULL,
    category TEXT NOT NULL,
    created_at TEXT NOT NULL
);
"#;
