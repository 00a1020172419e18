use crate::api::AppState;
use crate::api::middleware::MaybeUser;
use crate::api::schemas::auth::{Logout, User};
use axum::{
    Json,
    extract::State,
    http::{HeaderValue, header},
    response::IntoResponse,
};

/// Echoes the caller identity carried by the session token, or `null` when
/// the caller is anonymous. Session issuance itself lives in the external
/// auth provider.
pub async fn me(MaybeUser(user): MaybeUser) -> impl IntoResponse {
    Json(user.map(User::from))
}

/// Clears the session cookie. The token itself is revoked by the auth
/// provider; this endpoint only removes it from the browser.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let cleared = format!(
        "{}=; Max-Age=0; Path=/; HttpOnly; SameSite=Lax",
        state.config.auth.session_cookie
    );

    let mut response = Json(Logout { success: true }).into_response();
    if let Ok(value) = HeaderValue::from_str(&cleared) {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
    response
}
