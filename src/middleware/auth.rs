//! Access guards in front of protected routes.
//!
//! `CurrentUser` is the "is there a valid session" check, usable as an
//! extractor in any handler; `require_role` layers the "is the role allowed"
//! check on top as an explicit guard clause. The role check implies the
//! session check because the guard only ever sees an extracted session.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Key, PrivateCookieJar};

use crate::db::models::Role;
use crate::session::{self, SessionUser};

/// Extractor that requires an authenticated session.
pub struct CurrentUser(pub SessionUser);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    /// No valid session: send the client to the login form.
    RedirectToLogin,
    /// Session present but role not allowed: back to the dashboard with a
    /// permission message.
    Forbidden,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/login").into_response(),
            Self::Forbidden => {
                Redirect::to("/dashboard?error=You+do+not+have+permission+to+access+that+page.")
                    .into_response()
            }
        }
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = PrivateCookieJar::from_request_parts(parts, state)
            .await
            .map_err(|never| match never {})?;
        session::current(&jar)
            .map(CurrentUser)
            .ok_or(AuthRejection::RedirectToLogin)
    }
}

/// Guard clause for role-gated operations.
pub fn require_role(user: &SessionUser, allowed: &[Role]) -> Result<(), AuthRejection> {
    if allowed.contains(&user.role) {
        Ok(())
    } else {
        Err(AuthRejection::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_user(role: Role) -> SessionUser {
        SessionUser {
            user_id: 1,
            username: "admin".to_string(),
            full_name: "GSU Administrator".to_string(),
            role,
        }
    }

    #[test]
    fn role_inside_allowed_set_passes() {
        let user = session_user(Role::Head);
        assert_eq!(require_role(&user, &[Role::Head, Role::SemiHead]), Ok(()));
    }

    #[test]
    fn role_outside_allowed_set_is_forbidden() {
        let user = session_user(Role::Employee);
        assert_eq!(
            require_role(&user, &[Role::Head, Role::SemiHead]),
            Err(AuthRejection::Forbidden)
        );
    }
}
