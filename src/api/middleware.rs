use crate::api::AppState;
use crate::domain::session::{Claims, CurrentUser};
use crate::error::AppError;
use axum::{
    extract::FromRequestParts,
    http::{HeaderValue, Request, header, request::Parts},
};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Request-id maker for `SetRequestIdLayer`: generates a UUID when the
/// incoming request carries no `x-request-id` header.
#[derive(Clone, Copy, Debug)]
pub struct MakeRequestUuidOrHeader;

impl MakeRequestId for MakeRequestUuidOrHeader {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Pulls the session token from the `Authorization: Bearer` header or, for
/// browser callers, from the session cookie set by the auth provider.
fn session_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    if let Some(value) = parts.headers.get(header::AUTHORIZATION)
        && let Ok(auth_str) = value.to_str()
        && let Some(token) = auth_str.strip_prefix("Bearer ")
    {
        return Some(token.to_string());
    }

    let cookies = parts.headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == cookie_name).then(|| value.to_string())
    })
}

fn current_user(parts: &Parts, state: &AppState) -> Option<CurrentUser> {
    let token = session_token(parts, &state.config.auth.session_cookie)?;
    let claims = Claims::decode(&token, &state.config.auth.session_secret).ok()?;
    Some(claims.into())
}

/// Caller identity when a valid session is present; `None` otherwise.
/// Extraction never rejects.
#[derive(Debug)]
pub struct MaybeUser(pub Option<CurrentUser>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(Self(current_user(parts, state)))
    }
}

/// The authorization guard for the protected inbox operations: rejects with
/// 401 when no valid session is present and 403 when the caller is not an
/// admin.
#[derive(Debug)]
pub struct AdminUser(pub CurrentUser);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user = current_user(parts, state).ok_or(AppError::AuthError)?;
        user.require_admin()?;
        Ok(Self(user))
    }
}
