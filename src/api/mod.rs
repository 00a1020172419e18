use crate::config::Config;
use crate::services::contact_service::ContactService;
use crate::services::health_service::HealthService;
use axum::body::Body;
use axum::http::Request;
use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;
use tower_governor::GovernorLayer;
use tower_governor::governor::GovernorConfigBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod contact;
pub mod health;
pub mod middleware;
pub mod schemas;

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Config,
    pub contact_service: ContactService,
}

#[derive(Clone, Debug)]
pub struct MgmtState {
    pub health_service: HealthService,
}

/// Configures and returns the primary application router.
///
/// # Panics
/// Panics if the rate limiter configuration cannot be constructed.
pub fn app_router(config: Config, contact_service: ContactService) -> Router {
    // The public submit endpoint is the only unauthenticated mutation, so it
    // gets its own rate limit tier.
    let submit_interval_ns = 1_000_000_000 / config.rate_limit.per_second.max(1);
    let submit_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_nanosecond(u64::from(submit_interval_ns))
            .burst_size(config.rate_limit.burst)
            .finish()
            .expect("Failed to build submit rate limiter config"),
    );

    let state = AppState { config, contact_service };

    let submit_routes =
        Router::new().route("/contact", post(contact::submit)).layer(GovernorLayer::new(submit_conf));

    let admin_routes = Router::new()
        .route("/contact", get(contact::list))
        .route("/contact/{id}", get(contact::get_by_id))
        .route("/contact/{id}/status", put(contact::update_status));

    let auth_routes =
        Router::new().route("/auth/me", get(auth::me)).route("/auth/logout", post(auth::logout));

    Router::new()
        .nest("/v1", submit_routes.merge(admin_routes).merge(auth_routes))
        .layer(PropagateRequestIdLayer::new(axum::http::HeaderName::from_static("x-request-id")))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(move |request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<tower_http::request_id::RequestId>()
                        .map(|id| id.header_value().to_str().unwrap_or_default())
                        .unwrap_or_default()
                        .to_string();

                    tracing::info_span!(
                        "request",
                        "request_id" = %request_id,
                        "http.request.method" = %request.method(),
                        "url.path" = %request.uri().path(),
                        "http.response.status_code" = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: std::time::Duration, _span: &tracing::Span| {
                        let status = response.status();
                        tracing::Span::current().record("http.response.status_code", status.as_u16());

                        tracing::info!(
                            latency_ms = %latency.as_millis(),
                            status = %status.as_u16(),
                            "request completed"
                        );
                    },
                )
                .on_failure(|error, _latency, _span: &tracing::Span| {
                    tracing::error!(error = %error, "request failed");
                }),
        )
        .layer(SetRequestIdLayer::new(
            axum::http::HeaderName::from_static("x-request-id"),
            middleware::MakeRequestUuidOrHeader,
        ))
        .with_state(state)
}

pub fn mgmt_router(state: MgmtState) -> Router {
    Router::new().route("/livez", get(health::livez)).route("/readyz", get(health::readyz)).with_state(state)
}
