use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
    Extension, Json,
};
use tracing::warn;

use service::auth::domain::{AuthSession, AuthUser, Identity, LoginInput, RegisterInput};
use service::auth::repository::AuthRepository;
use service::auth::service::{AuthConfig, AuthService};
use service::authz::AdminGate;
use service::booking::repository::BookingRepository;
use service::booking::BookingService;
use service::slots::SlotTemplate;

use crate::errors::JsonApiError;

/// Header older mobile clients send the token in.
pub const LEGACY_TOKEN_HEADER: &str = "x-access-token";

#[derive(Clone)]
pub struct ServerState {
    pub auth: Arc<AuthService<dyn AuthRepository>>,
    pub booking: Arc<BookingService<dyn BookingRepository>>,
}

impl ServerState {
    /// Wire both services over the given stores; the admin gate reads roles from `users`.
    pub fn new(
        users: Arc<dyn AuthRepository>,
        bookings: Arc<dyn BookingRepository>,
        auth: AuthConfig,
        template: SlotTemplate,
    ) -> Self {
        let gate = AdminGate::new(users.clone());
        Self {
            auth: Arc::new(AuthService::new(users, auth)),
            booking: Arc::new(BookingService::new(bookings, gate, template)),
        }
    }
}

#[utoipa::path(post, path = "/auth/register", tag = "auth", request_body = crate::openapi::RegisterRequest, responses((status = 201, description = "Registered", body = crate::openapi::UserDoc), (status = 400, description = "Bad Request"), (status = 409, description = "Email already registered")))]
pub async fn register(
    State(state): State<ServerState>,
    payload: Result<Json<RegisterInput>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthUser>), JsonApiError> {
    let Json(input) = payload?;
    let user = state.auth.register(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(post, path = "/auth/login", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Logged In", body = crate::openapi::SessionDoc), (status = 401, description = "Unauthorized")))]
pub async fn login(
    State(state): State<ServerState>,
    payload: Result<Json<LoginInput>, JsonRejection>,
) -> Result<Json<AuthSession>, JsonApiError> {
    let Json(input) = payload?;
    Ok(Json(state.auth.login(input).await?))
}

#[utoipa::path(get, path = "/auth/me", tag = "auth", responses((status = 200, description = "Current user", body = crate::openapi::UserDoc), (status = 401, description = "Unauthorized")))]
pub async fn me(
    State(state): State<ServerState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<AuthUser>, JsonApiError> {
    Ok(Json(state.auth.me(identity).await?))
}

/// `Authorization: Bearer <t>` first, then the legacy header.
fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(h) = headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        return h.strip_prefix("Bearer ").map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
    }
    headers
        .get(LEGACY_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// 校验 bearer token，并把解析出的 Identity 注入请求扩展
/// 缺失、非法或过期均返回 401
pub async fn require_bearer(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let Some(token) = extract_token(req.headers()) else {
        warn!(path = %req.uri().path(), "missing or malformed bearer token");
        return Err(JsonApiError::unauthorized("missing bearer token"));
    };
    let identity = state.auth.resolve_identity(&token).await?;
    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

/// Like [`require_bearer`], but a request without any token passes through
/// anonymously. A token that is present must still be valid.
pub async fn optional_bearer(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    if let Some(token) = extract_token(req.headers()) {
        let identity = state.auth.resolve_identity(&token).await?;
        req.extensions_mut().insert(identity);
    }
    Ok(next.run(req).await)
}
