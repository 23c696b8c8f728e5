//! Session cookie construction.

use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::auth::TOKEN_COOKIE;

/// Builds the httpOnly session cookie.
///
/// Production deployments serve the client from another site, so the cookie must be
/// `Secure; SameSite=None` there; everywhere else it stays `SameSite=Strict`.
pub fn session_cookie(token: String, production: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(production)
        .same_site(if production {
            SameSite::None
        } else {
            SameSite::Strict
        })
        .build()
}

/// Builds a cookie that instructs the browser to drop the session.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build((TOKEN_COOKIE, ""))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .build();
    cookie.make_removal();
    cookie
}
