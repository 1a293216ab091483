use std::str::FromStr;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::db::models::{
    AreaRow, AreaStats, InventoryItem, InventoryStats, Role, Stats, User,
};
use crate::db::schema::SQLITE_INIT;
use crate::error::MonitorError;
use crate::service::password;

pub type SqlitePool = Pool<Sqlite>;

/// The three demo accounts seeded at startup:
/// (username, plaintext password, display name, role, email).
const DEMO_USERS: [(&str, &str, &str, Role, &str); 3] = [
    (
        "admin",
        "admin123",
        "GSU Administrator",
        Role::Head,
        "admin@gsu.local",
    ),
    (
        "supervisor",
        "super123",
        "Maria Santos",
        Role::SemiHead,
        "supervisor@gsu.local",
    ),
    (
        "staff",
        "staff123",
        "Juan Dela Cruz",
        Role::Employee,
        "staff@gsu.local",
    ),
];

/// Open (creating if missing) the SQLite database behind `database_url`.
pub async fn spawn(database_url: &str) -> Result<MonitorStorage, MonitorError> {
    let opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(opts).await?;
    Ok(MonitorStorage::new(pool))
}

#[derive(Clone)]
pub struct MonitorStorage {
    pool: SqlitePool,
}

impl MonitorStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), MonitorError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Seed the three demo accounts and the demo areas/inventory.
    ///
    /// Idempotent: users insert with `ON CONFLICT(username) DO NOTHING`, and
    /// the demo areas/inventory rows only land when their table is empty.
    /// Running this twice leaves exactly three users.
    pub async fn seed_demo_data(&self) -> Result<(), MonitorError> {
        let now = Utc::now();

        for (username, plaintext, full_name, role, email) in DEMO_USERS {
            let hash = password::hash(plaintext)?;
            sqlx::query(
                r#"INSERT INTO users (username, password_hash, full_name, role, email, is_active, created_at)
                   VALUES (?, ?, ?, ?, ?, 1, ?)
                   ON CONFLICT(username) DO NOTHING"#,
            )
            .bind(username)
            .bind(hash)
            .bind(full_name)
            .bind(role)
            .bind(email)
            .bind(now)
            .execute(&self.pool)
            .await?;
        }

        let (area_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM areas")
            .fetch_one(&self.pool)
            .await?;
        if area_count == 0 {
            let demo_areas: [(&str, &str, Option<&str>); 5] = [
                ("Main Building", "completed", Some("admin")),
                ("Laboratory Wing", "completed", Some("supervisor")),
                ("Storage Room A", "pending", None),
                ("Storage Room B", "pending", None),
                ("Motor Pool", "completed", Some("staff")),
            ];
            for (name, status, checker) in demo_areas {
                sqlx::query(
                    r#"INSERT INTO areas (name, status, last_check, checked_by)
                       VALUES (?, ?, ?, (SELECT id FROM users WHERE username = ?))"#,
                )
                .bind(name)
                .bind(status)
                .bind(now)
                .bind(checker)
                .execute(&self.pool)
                .await?;
            }
        }

        let (item_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM inventory")
            .fetch_one(&self.pool)
            .await?;
        if item_count == 0 {
            let demo_items: [(&str, i64, i64, &str, &str, &str); 6] = [
                ("Bond Paper", 120, 50, "ok", "ream", "office supplies"),
                ("Printer Ink", 8, 10, "low", "cartridge", "office supplies"),
                ("Floor Wax", 2, 6, "critical", "gallon", "janitorial"),
                ("Detergent", 30, 12, "ok", "kilo", "janitorial"),
                ("Light Bulbs", 5, 15, "critical", "piece", "maintenance"),
                ("Extension Cords", 9, 8, "low", "piece", "maintenance"),
            ];
            for (name, stock, min_stock, status, unit, category) in demo_items {
                sqlx::query(
                    r#"INSERT INTO inventory (name, stock, min_stock, status, unit, category, created_at)
                       VALUES (?, ?, ?, ?, ?, ?, ?)"#,
                )
                .bind(name)
                .bind(stock)
                .bind(min_stock)
                .bind(status)
                .bind(unit)
                .bind(category)
                .bind(now)
                .execute(&self.pool)
                .await?;
            }
        }

        Ok(())
    }

    /// Look up an active user by username. Inactive rows are invisible here,
    /// so a deactivated account fails login the same way an unknown one does.
    pub async fn find_active_user(&self, username: &str) -> Result<Option<User>, MonitorError> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, username, password_hash, full_name, role, email, is_active, created_at
               FROM users WHERE username = ? AND is_active = 1"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Areas ordered by ascending id, with `checked_by` resolved to the
    /// checker's display name.
    pub async fn list_areas(&self) -> Result<Vec<AreaRow>, MonitorError> {
        let rows = sqlx::query_as::<_, AreaRow>(
            r#"SELECT a.id, a.name, a.status, a.last_check, u.full_name AS checked_by
               FROM areas a
               LEFT JOIN users u ON u.id = a.checked_by
               ORDER BY a.id ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Inventory ordered by status descending then name ascending.
    pub async fn list_inventory(&self) -> Result<Vec<InventoryItem>, MonitorError> {
        let rows = sqlx::query_as::<_, InventoryItem>(
            r#"SELECT id, name, stock, min_stock, status, unit, category, created_at
               FROM inventory
               ORDER BY status DESC, name ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn area_stats(&self) -> Result<AreaStats, MonitorError> {
        let (total, completed, pending): (i64, i64, i64) = sqlx::query_as(
            r#"SELECT COUNT(*),
                      COALESCE(SUM(status = 'completed'), 0),
                      COALESCE(SUM(status = 'pending'), 0)
               FROM areas"#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(AreaStats {
            total,
            completed,
            pending,
        })
    }

    pub async fn inventory_stats(&self) -> Result<InventoryStats, MonitorError> {
        let (total, ok, low, critical): (i64, i64, i64, i64) = sqlx::query_as(
            r#"SELECT COUNT(*),
                      COALESCE(SUM(status = 'ok'), 0),
                      COALESCE(SUM(status = 'low'), 0),
                      COALESCE(SUM(status = 'critical'), 0)
               FROM inventory"#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(InventoryStats {
            total,
            ok,
            low,
            critical,
        })
    }

    pub async fn stats(&self) -> Result<Stats, MonitorError> {
        Ok(Stats {
            areas: self.area_stats().await?,
            inventory: self.inventory_stats().await?,
        })
    }
}
