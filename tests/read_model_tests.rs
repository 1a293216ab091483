use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use gsu_monitor::db::{AreaStatus, MonitorStorage, Role, StockStatus};

async fn test_storage(tag: &str) -> (MonitorStorage, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "gsu-monitor-{tag}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    let storage = gsu_monitor::db::spawn(&database_url)
        .await
        .expect("failed to open database");
    storage
        .init_schema()
        .await
        .expect("failed to initialize schema");
    storage
        .seed_demo_data()
        .await
        .expect("failed to seed demo data");
    (storage, temp_path)
}

#[tokio::test]
async fn seeding_twice_yields_exactly_three_users() {
    let (storage, temp_path) = test_storage("seed-idempotent").await;

    storage
        .init_schema()
        .await
        .expect("second init_schema failed");
    storage
        .seed_demo_data()
        .await
        .expect("second seed_demo_data failed");

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(storage.pool())
        .await
        .expect("count query failed");
    assert_eq!(count, 3);

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn areas_come_back_in_id_order_with_checker_names() {
    let (storage, temp_path) = test_storage("areas").await;

    let areas = storage.list_areas().await.expect("list_areas failed");
    assert_eq!(areas.len(), 5);

    let ids: Vec<i64> = areas.iter().map(|a| a.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);

    assert_eq!(areas[0].name, "Main Building");
    assert_eq!(areas[0].status, AreaStatus::Completed);
    assert_eq!(areas[0].checked_by.as_deref(), Some("GSU Administrator"));

    let unchecked = areas
        .iter()
        .find(|a| a.name == "Storage Room A")
        .expect("missing seeded area");
    assert_eq!(unchecked.status, AreaStatus::Pending);
    assert_eq!(unchecked.checked_by, None);

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn inventory_orders_by_status_desc_then_name() {
    let (storage, temp_path) = test_storage("inventory").await;

    let items = storage.list_inventory().await.expect("list_inventory failed");
    let listing: Vec<(&str, StockStatus)> = items
        .iter()
        .map(|i| (i.name.as_str(), i.status))
        .collect();

    assert_eq!(
        listing,
        vec![
            ("Bond Paper", StockStatus::Ok),
            ("Detergent", StockStatus::Ok),
            ("Extension Cords", StockStatus::Low),
            ("Printer Ink", StockStatus::Low),
            ("Floor Wax", StockStatus::Critical),
            ("Light Bulbs", StockStatus::Critical),
        ]
    );

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn aggregate_counts_match_seeded_data() {
    let (storage, temp_path) = test_storage("stats").await;

    let areas = storage.area_stats().await.expect("area_stats failed");
    assert_eq!(areas.total, 5);
    assert_eq!(areas.completed, 3);
    assert_eq!(areas.pending, 2);

    let inventory = storage
        .inventory_stats()
        .await
        .expect("inventory_stats failed");
    assert_eq!(inventory.total, 6);
    assert_eq!(inventory.ok, 2);
    assert_eq!(inventory.low, 2);
    assert_eq!(inventory.critical, 2);

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn deactivated_users_are_invisible_to_lookup() {
    let (storage, temp_path) = test_storage("inactive").await;

    let user = storage
        .find_active_user("staff")
        .await
        .expect("lookup failed")
        .expect("seeded user missing");
    assert_eq!(user.role, Role::Employee);

    sqlx::query("UPDATE users SET is_active = 0 WHERE username = 'staff'")
        .execute(storage.pool())
        .await
        .expect("deactivation failed");

    assert!(storage
        .find_active_user("staff")
        .await
        .expect("lookup failed")
        .is_none());

    let admin = storage
        .find_active_user("admin")
        .await
        .expect("lookup failed")
        .expect("seeded admin missing");
    assert_eq!(admin.role, Role::Head);

    let _ = fs::remove_file(&temp_path);
}
