//! Session and flash-message state, carried in private (encrypted and
//! authenticated) cookies. Nothing session-related lives in server memory;
//! handlers receive and return the jar explicitly.

use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::config::CONFIG;
use crate::db::models::{Role, User};
use crate::error::MonitorError;

const SESSION_COOKIE: &str = "gsu_session";
const FLASH_COOKIE: &str = "gsu_flash";

/// Identity captured at login. The role is a snapshot of the user row at
/// that moment and is not re-checked against the store on later requests;
/// a role change or deactivation takes effect at the next login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: i64,
    pub username: String,
    pub full_name: String,
    pub role: Role,
}

impl SessionUser {
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            role: user.role,
        }
    }
}

/// Store the authenticated identity in the session cookie.
pub fn establish(jar: PrivateCookieJar, user: &User) -> Result<PrivateCookieJar, MonitorError> {
    let payload = serde_json::to_string(&SessionUser::from_user(user))?;
    Ok(jar.add(build_cookie(SESSION_COOKIE, payload, Duration::hours(8))))
}

/// Read the current identity, if any. An unparseable cookie counts as no
/// session (the private jar already rejects tampered values).
pub fn current(jar: &PrivateCookieJar) -> Option<SessionUser> {
    let cookie = jar.get(SESSION_COOKIE)?;
    serde_json::from_str(cookie.value()).ok()
}

/// Remove all session state.
pub fn clear(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.remove(clear_cookie(SESSION_COOKIE))
}

/// Queue a one-shot message for the next rendered page.
pub fn flash(jar: PrivateCookieJar, message: &str) -> PrivateCookieJar {
    jar.add(build_cookie(
        FLASH_COOKIE,
        message.to_string(),
        Duration::minutes(5),
    ))
}

/// Consume the pending flash message, clearing it from the jar.
pub fn take_flash(jar: PrivateCookieJar) -> (PrivateCookieJar, Option<String>) {
    let message = jar.get(FLASH_COOKIE).map(|c| c.value().to_owned());
    let jar = jar.remove(clear_cookie(FLASH_COOKIE));
    (jar, message)
}

fn build_cookie(name: &str, value: String, max_age: Duration) -> Cookie<'static> {
    Cookie::build(Cookie::new(name.to_string(), value))
        .path("/")
        .http_only(true)
        .secure(!CONFIG.insecure_cookie)
        .same_site(SameSite::Lax)
        .max_age(max_age)
        .build()
}

fn clear_cookie(name: &str) -> Cookie<'static> {
    Cookie::build(Cookie::new(name.to_string(), ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
