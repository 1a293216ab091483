//! Structured-data endpoints under `/api`. All of them require a session;
//! the extractor rejection redirects anonymous clients to the login form.

use axum::extract::State;
use axum::Json;

use crate::db::models::{AreaRow, InventoryItem, Stats};
use crate::error::MonitorError;
use crate::middleware::auth::CurrentUser;
use crate::router::MonitorState;
use crate::session::SessionUser;

/// GET /api/current_user — the identity captured at login.
pub async fn current_user(CurrentUser(user): CurrentUser) -> Json<SessionUser> {
    Json(user)
}

/// GET /api/areas — areas with checker display names, ascending id.
pub async fn areas(
    State(state): State<MonitorState>,
    CurrentUser(_user): CurrentUser,
) -> Result<Json<Vec<AreaRow>>, MonitorError> {
    Ok(Json(state.storage.list_areas().await?))
}

/// GET /api/inventory — items ordered by status descending then name.
pub async fn inventory(
    State(state): State<MonitorState>,
    CurrentUser(_user): CurrentUser,
) -> Result<Json<Vec<InventoryItem>>, MonitorError> {
    Ok(Json(state.storage.list_inventory().await?))
}

/// GET /api/stats — aggregate counts for areas and inventory.
pub async fn stats(
    State(state): State<MonitorState>,
    CurrentUser(_user): CurrentUser,
) -> Result<Json<Stats>, MonitorError> {
    Ok(Json(state.storage.stats().await?))
}
