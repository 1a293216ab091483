//! Server-rendered pages. Markup is intentionally minimal inline HTML;
//! real templating is out of scope for this service.

use axum::extract::{Query, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::Deserialize;
use tracing::{info, warn};

use crate::db::models::{AreaStats, InventoryStats, Stats};
use crate::error::MonitorError;
use crate::middleware::auth::CurrentUser;
use crate::router::MonitorState;
use crate::session;

/// Shared by the unknown-user and wrong-password paths so the response
/// never reveals whether the username exists.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password.";
pub const REGISTRATION_DISABLED: &str = "Registration is currently disabled.";

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, rename = "confirmPassword")]
    pub confirm_password: String,
    #[serde(default)]
    pub terms: Option<String>,
}

pub async fn landing() -> Html<String> {
    page(
        "Welcome",
        r#"<h1>GSU Monitoring System</h1>
<p>Area inspections, inventory levels and statistics for GSU staff.</p>
<p><a href="/login">Log in</a> | <a href="/register">Register</a></p>"#
            .to_string(),
    )
}

pub async fn register_page(jar: PrivateCookieJar) -> impl IntoResponse {
    let (jar, flash) = session::take_flash(jar);
    (jar, render_register(flash.as_deref()))
}

pub async fn register_submit(
    jar: PrivateCookieJar,
    axum::Form(form): axum::Form<RegisterForm>,
) -> (PrivateCookieJar, Redirect) {
    let username = form.username.trim();
    let email = form.email.trim();

    let message = if username.is_empty()
        || email.is_empty()
        || form.password.is_empty()
        || form.confirm_password.is_empty()
    {
        "All fields are required."
    } else if form.password != form.confirm_password {
        "Passwords do not match."
    } else if form.password.len() < 6 {
        "Password must be at least 6 characters long."
    } else if form.terms.is_none() {
        "You must agree to the terms and conditions."
    } else {
        // The write path is a placeholder: validation runs, creation does not.
        REGISTRATION_DISABLED
    };

    (session::flash(jar, message), Redirect::to("/register"))
}

pub async fn login_page(jar: PrivateCookieJar, Query(query): Query<PageQuery>) -> impl IntoResponse {
    let (jar, flash) = session::take_flash(jar);
    let message = query.error.or(flash);
    (jar, render_login(message.as_deref()))
}

pub async fn login_submit(
    State(state): State<MonitorState>,
    jar: PrivateCookieJar,
    axum::Form(form): axum::Form<LoginForm>,
) -> Result<(PrivateCookieJar, Redirect), MonitorError> {
    let username = form.username.trim();
    if username.is_empty() || form.password.is_empty() {
        return Ok((
            session::flash(jar, "Please enter both username and password."),
            Redirect::to("/login"),
        ));
    }

    let Some(user) = state.storage.find_active_user(username).await? else {
        warn!(username, "failed login attempt");
        return Ok((
            session::flash(jar, INVALID_CREDENTIALS),
            Redirect::to("/login"),
        ));
    };

    if !crate::service::password::verify(&user.password_hash, &form.password) {
        warn!(username, "failed login attempt");
        return Ok((
            session::flash(jar, INVALID_CREDENTIALS),
            Redirect::to("/login"),
        ));
    }

    let jar = session::establish(jar, &user)?;
    info!(username = %user.username, role = %user.role, "login successful");
    Ok((jar, Redirect::to("/dashboard")))
}

pub async fn logout(jar: PrivateCookieJar) -> Response {
    let jar = session::clear(jar);
    info!("user logged out");

    let mut response = (jar, Redirect::to("/login")).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache, no-store, must-revalidate"),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    response
}

pub async fn dashboard(
    State(state): State<MonitorState>,
    CurrentUser(user): CurrentUser,
    jar: PrivateCookieJar,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, MonitorError> {
    let areas = state.storage.list_areas().await?;
    let stats = state.storage.stats().await?;
    let (jar, flash) = session::take_flash(jar);
    let message = query.error.or(flash);

    let mut rows = String::new();
    for area in &areas {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            area.id,
            escape(&area.name),
            area.status.as_str(),
            area.last_check.format("%Y-%m-%d %H:%M"),
            escape(area.checked_by.as_deref().unwrap_or("-")),
        ));
    }

    let body = format!(
        r#"{flash}<h1>Dashboard</h1>
<p>Signed in as {name} ({role}). <a href="/logout">Log out</a></p>
{stats}
<h2>Areas</h2>
<table><tr><th>ID</th><th>Name</th><th>Status</th><th>Last check</th><th>Checked by</th></tr>{rows}</table>
<p><a href="/inventory">Inventory</a> | <a href="/borrowing">Borrowing</a> | <a href="/graph">Graphs</a> | <a href="/sample-dashboard">Sample data</a></p>"#,
        flash = flash_block(message.as_deref()),
        name = escape(&user.full_name),
        role = user.role,
        stats = stats_block(&stats),
    );
    Ok((jar, page("Dashboard", body)))
}

/// Static-data variant of the dashboard, kept for demos without a seeded
/// database.
pub async fn sample_dashboard(CurrentUser(user): CurrentUser) -> Html<String> {
    let stats = Stats {
        areas: AreaStats {
            total: 3,
            completed: 2,
            pending: 1,
        },
        inventory: InventoryStats {
            total: 4,
            ok: 2,
            low: 1,
            critical: 1,
        },
    };
    let body = format!(
        r#"<h1>Sample Dashboard</h1>
<p>Signed in as {name}.</p>
{stats}
<table><tr><th>Name</th><th>Status</th><th>Checked by</th></tr>
<tr><td>Main Building</td><td>completed</td><td>GSU Administrator</td></tr>
<tr><td>Annex</td><td>completed</td><td>Maria Santos</td></tr>
<tr><td>Storage Room</td><td>pending</td><td>-</td></tr></table>
<p><a href="/dashboard">Back to dashboard</a></p>"#,
        name = escape(&user.full_name),
        stats = stats_block(&stats),
    );
    page("Sample Dashboard", body)
}

pub async fn inventory_page(
    State(state): State<MonitorState>,
    CurrentUser(user): CurrentUser,
) -> Result<Html<String>, MonitorError> {
    let items = state.storage.list_inventory().await?;

    let mut rows = String::new();
    for item in &items {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{} {}</td><td>{}</td><td>{}</td></tr>",
            escape(&item.name),
            escape(&item.category),
            item.stock,
            escape(&item.unit),
            item.min_stock,
            item.status.as_str(),
        ));
    }

    let body = format!(
        r#"<h1>Inventory</h1>
<p>Signed in as {name}.</p>
<table><tr><th>Item</th><th>Category</th><th>Stock</th><th>Minimum</th><th>Status</th></tr>{rows}</table>
<p><a href="/dashboard">Back to dashboard</a></p>"#,
        name = escape(&user.username),
    );
    Ok(page("Inventory", body))
}

pub async fn borrowing_page(CurrentUser(user): CurrentUser) -> Html<String> {
    placeholder_page("Borrowing", &user.username)
}

pub async fn graph_page(CurrentUser(user): CurrentUser) -> Html<String> {
    placeholder_page("Graph Analytics", &user.username)
}

/// Unmapped routes answer with the login page body under a 404 status.
pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, render_login(None))
}

fn placeholder_page(title: &str, username: &str) -> Html<String> {
    let body = format!(
        r#"<h1>{title}</h1>
<p>Signed in as {name}.</p>
<p>This section is not available yet.</p>
<p><a href="/dashboard">Back to dashboard</a></p>"#,
        name = escape(username),
    );
    page(title, body)
}

fn render_login(message: Option<&str>) -> Html<String> {
    let body = format!(
        r#"{flash}<h1>Log in</h1>
<form method="post" action="/login">
<label>Username <input type="text" name="username"></label>
<label>Password <input type="password" name="password"></label>
<button type="submit">Log in</button>
</form>
<p><a href="/register">Register</a></p>"#,
        flash = flash_block(message),
    );
    page("Log in", body)
}

fn render_register(message: Option<&str>) -> Html<String> {
    let body = format!(
        r#"{flash}<h1>Register</h1>
<form method="post" action="/register">
<label>Username <input type="text" name="username"></label>
<label>Email <input type="email" name="email"></label>
<label>Password <input type="password" name="password"></label>
<label>Confirm password <input type="password" name="confirmPassword"></label>
<label><input type="checkbox" name="terms" value="accepted"> I agree to the terms and conditions</label>
<button type="submit">Register</button>
</form>
<p><a href="/login">Log in</a></p>"#,
        flash = flash_block(message),
    );
    page("Register", body)
}

fn stats_block(stats: &Stats) -> String {
    format!(
        "<p>Areas: {} total, {} completed, {} pending. \
         Inventory: {} items, {} ok, {} low, {} critical.</p>",
        stats.areas.total,
        stats.areas.completed,
        stats.areas.pending,
        stats.inventory.total,
        stats.inventory.ok,
        stats.inventory.low,
        stats.inventory.critical,
    )
}

fn flash_block(message: Option<&str>) -> String {
    match message {
        Some(m) => format!(r#"<p class="flash">{}</p>"#, escape(m)),
        None => String::new(),
    }
}

fn page(title: &str, body: String) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\">\
         <title>{title} - GSU Monitoring System</title></head>\
         <body>{body}</body></html>"
    ))
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
