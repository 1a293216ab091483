use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Coarse permission tier. Stored as lowercase TEXT in the `users` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Role {
    Employee,
    SemiHead,
    Head,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::SemiHead => "semi_head",
            Role::Head => "head",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum AreaStatus {
    Pending,
    Completed,
}

impl AreaStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AreaStatus::Pending => "pending",
            AreaStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum StockStatus {
    Ok,
    Low,
    Critical,
}

impl StockStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StockStatus::Ok => "ok",
            StockStatus::Low => "low",
            StockStatus::Critical => "critical",
        }
    }
}

/// A row of the `users` table. Rows are written at seed time only and never
/// mutated afterwards; the password hash is a PHC-format argon2 string.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: Role,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// An area joined against `users` so `checked_by` is already a display name
/// (None when the area has never been checked).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AreaRow {
    pub id: i64,
    pub name: String,
    pub status: AreaStatus,
    pub last_check: DateTime<Utc>,
    pub checked_by: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub stock: i64,
    pub min_stock: i64,
    pub status: StockStatus,
    pub unit: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AreaStats {
    pub total: i64,
    pub completed: i64,
    pub pending: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventoryStats {
    pub total: i64,
    pub ok: i64,
    pub low: i64,
    pub critical: i64,
}

/// Payload shape of `GET /api/stats`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stats {
    pub areas: AreaStats,
    pub inventory: InventoryStats,
}
