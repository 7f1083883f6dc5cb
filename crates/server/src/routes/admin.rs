use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Extension, Json,
};
use serde::Deserialize;
use uuid::Uuid;

use service::auth::domain::Identity;
use service::booking::domain::{AdminAppointmentView, AppointmentView};
use service::pagination::Pagination;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Default, Deserialize)]
pub struct AdminListQuery {
    pub date: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl AdminListQuery {
    fn pagination(&self) -> Pagination {
        let d = Pagination::default();
        Pagination { page: self.page.unwrap_or(d.page), per_page: self.per_page.unwrap_or(d.per_page) }
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: String,
}

/// Unwrap an extractor result, but answer 403 rather than 400 to non-admins.
async fn admin_input<T, E: Into<JsonApiError>>(
    state: &ServerState,
    identity: Identity,
    input: Result<T, E>,
) -> Result<T, JsonApiError> {
    match input {
        Ok(v) => Ok(v),
        Err(rejection) => {
            state.booking.require_admin(identity.user_id).await?;
            Err(rejection.into())
        }
    }
}

#[utoipa::path(
    get,
    path = "/admin/appointments",
    tag = "admin",
    params(
        ("date" = Option<String>, Query, description = "Only this day, YYYY-MM-DD"),
        ("page" = Option<u32>, Query, description = "1-based page, default 1"),
        ("per_page" = Option<u32>, Query, description = "1..=100, default 20"),
    ),
    responses((status = 200, description = "All appointments by date and time", body = [crate::openapi::AdminAppointmentDoc]), (status = 403, description = "Forbidden"))
)]
pub async fn list_all(
    State(state): State<ServerState>,
    Extension(identity): Extension<Identity>,
    query: Result<Query<AdminListQuery>, QueryRejection>,
) -> Result<Json<Vec<AdminAppointmentView>>, JsonApiError> {
    let Query(q) = admin_input(&state, identity, query).await?;
    let rows = state
        .booking
        .list_all_appointments(identity.user_id, q.date.as_deref(), q.pagination())
        .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    put,
    path = "/admin/appointments/{id}/status",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Appointment id")),
    request_body = crate::openapi::StatusRequest,
    responses((status = 200, description = "Status set", body = crate::openapi::AppointmentDoc), (status = 400, description = "Unknown status"), (status = 403, description = "Forbidden"), (status = 404, description = "Not Found"), (status = 409, description = "Slot retaken while cancelled"))
)]
pub async fn set_status(
    State(state): State<ServerState>,
    Extension(identity): Extension<Identity>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<StatusBody>, JsonRejection>,
) -> Result<Json<AppointmentView>, JsonApiError> {
    let Path(id) = admin_input(&state, identity, id).await?;
    let Json(body) = admin_input(&state, identity, payload).await?;
    Ok(Json(state.booking.set_status(identity.user_id, id, &body.status).await?))
}
