use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use util::{config, state::AppState};
use validator::Validate;

use crate::auth::cookies::{removal_cookie, session_cookie};
use crate::response::{ApiResponse, Empty};
use crate::routes::common::validation_failed;

/// The identity a client asks a session for. Extra fields are ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct IdentityRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub email: String,
    pub expires_at: String,
}

/// POST /api/v1/auth/access-token
///
/// Signs a session token for the posted identity and stores it in the httpOnly
/// `token` cookie.
///
/// ### Request Body
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// ### Responses
/// - `200 OK` with `Set-Cookie: token=...; HttpOnly; Path=/`
/// ```json
/// {
///   "success": true,
///   "data": { "email": "user@example.com", "expiresAt": "2025-05-23T11:00:00+00:00" },
///   "message": "Access token issued"
/// }
/// ```
/// - `400 Bad Request` when the email is malformed
/// - `500 Internal Server Error` when the token cannot be signed
pub async fn issue_access_token(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<IdentityRequest>,
) -> Response {
    if let Err(errors) = req.validate() {
        return validation_failed::<TokenResponse>(&errors).into_response();
    }

    let issued = match app_state.tokens().issue(&req.email) {
        Ok(issued) => issued,
        Err(e) => {
            tracing::error!(error = %e, "Failed to issue access token");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<TokenResponse>::error("Failed to issue access token")),
            )
                .into_response();
        }
    };

    tracing::info!(email = %req.email, "Issued access token");

    let jar = jar.add(session_cookie(issued.token, config::is_production()));
    let data = TokenResponse {
        email: req.email,
        expires_at: issued.expires_at.to_rfc3339(),
    };

    (
        StatusCode::OK,
        jar,
        Json(ApiResponse::success(data, "Access token issued")),
    )
        .into_response()
}

/// POST /api/v1/auth/user/logOut
///
/// Clears the session cookie. The request body is optional and only logged.
///
/// ### Responses
/// - `200 OK` with `Set-Cookie: token=; Max-Age=0; SameSite=None; Secure`
pub async fn log_out(jar: CookieJar, body: Bytes) -> impl IntoResponse {
    let payload = serde_json::from_slice::<serde_json::Value>(&body).ok();
    tracing::info!(body = ?payload, "Logging out");

    (
        StatusCode::OK,
        jar.add(removal_cookie()),
        Json(ApiResponse::success(Empty, "Logged out")),
    )
}
