use axum::{
    http::StatusCode,
    middleware,
    routing::{get, patch, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;

pub mod admin;
pub mod appointments;
pub mod auth;
pub mod catalog;

pub use auth::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn metrics() -> (StatusCode, String) {
    common::metrics::encode_metrics()
}

/// Build the full application router, including public, customer and admin routes
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public: Router<ServerState> = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/services", get(catalog::list_services));

    // Anyone may browse slots; a token, when sent, lets `exclude` apply to the caller's own booking
    let browsing: Router<ServerState> = Router::new()
        .route("/slots", get(catalog::slots))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::optional_bearer));

    // Everything below needs a resolved identity; admin handlers check the role themselves
    let protected: Router<ServerState> = Router::new()
        .route("/auth/me", get(auth::me))
        .route("/appointments", get(appointments::list_mine).post(appointments::create))
        .route("/appointments/:id", patch(appointments::update).delete(appointments::cancel))
        .route("/appointments/:id/cancel", post(appointments::cancel))
        .route("/admin/appointments", get(admin::list_all))
        .route("/admin/appointments/:id/status", put(admin::set_status))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_bearer));

    let docs: Router<ServerState> = Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    public
        .merge(browsing)
        .merge(protected)
        .merge(docs)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
