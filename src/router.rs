use axum::extract::FromRef;
use axum::routing::get;
use axum::Router;
use axum_extra::extract::cookie::Key;

use crate::db::MonitorStorage;
use crate::handlers::{api, pages};

/// Shared application state: the pooled storage handle plus the key that
/// seals session and flash cookies.
#[derive(Clone)]
pub struct MonitorState {
    pub storage: MonitorStorage,
    key: Key,
}

impl MonitorState {
    pub fn new(storage: MonitorStorage, key: Key) -> Self {
        Self { storage, key }
    }
}

impl FromRef<MonitorState> for Key {
    fn from_ref(state: &MonitorState) -> Key {
        state.key.clone()
    }
}

pub fn monitor_router(state: MonitorState) -> Router {
    Router::new()
        .route("/", get(pages::landing))
        .route(
            "/register",
            get(pages::register_page).post(pages::register_submit),
        )
        .route("/login", get(pages::login_page).post(pages::login_submit))
        .route("/logout", get(pages::logout))
        .route("/dashboard", get(pages::dashboard))
        .route("/sample-dashboard", get(pages::sample_dashboard))
        .route("/inventory", get(pages::inventory_page))
        .route("/borrowing", get(pages::borrowing_page))
        .route("/graph", get(pages::graph_page))
        .route("/api/current_user", get(api::current_user))
        .route("/api/areas", get(api::areas))
        .route("/api/inventory", get(api::inventory))
        .route("/api/stats", get(api::stats))
        .fallback(pages::not_found)
        .with_state(state)
}
