use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use axum_extra::extract::CookieJar;
use util::state::AppState;

use crate::auth::{TOKEN_COOKIE, claims::AuthUser};
use crate::response::{ApiResponse, Empty};

/// Implements extraction of `AuthUser` from the session cookie.
///
/// Reuses the identity already attached by the auth guard when present; otherwise
/// reads the `token` cookie and verifies it with the application's token service.
///
/// # Errors
/// - Returns `401 Unauthorized` if the cookie is missing, or the token is invalid or expired.
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = (StatusCode, Json<ApiResponse<Empty>>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_owned())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ApiResponse::<Empty>::error("You are not authorized")),
                )
            })?;

        let claims = state.tokens().verify(&token).map_err(|e| {
            tracing::debug!(error = %e, "Rejected session token");
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::<Empty>::error("Invalid or expired token")),
            )
        })?;

        Ok(AuthUser(claims))
    }
}
