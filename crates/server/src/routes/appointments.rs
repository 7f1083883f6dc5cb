use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;

use service::auth::domain::Identity;
use service::booking::domain::{AppointmentView, CreateAppointmentInput, UpdateAppointmentInput};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[utoipa::path(get, path = "/appointments", tag = "appointments", responses((status = 200, description = "Caller's appointments by date and time", body = [crate::openapi::AppointmentDoc]), (status = 401, description = "Unauthorized")))]
pub async fn list_mine(
    State(state): State<ServerState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Vec<AppointmentView>>, JsonApiError> {
    Ok(Json(state.booking.list_my_appointments(identity.user_id).await?))
}

#[utoipa::path(post, path = "/appointments", tag = "appointments", request_body = crate::openapi::CreateAppointmentRequest, responses((status = 201, description = "Booked", body = crate::openapi::AppointmentDoc), (status = 400, description = "Bad Request"), (status = 404, description = "Unknown service"), (status = 409, description = "Slot already booked")))]
pub async fn create(
    State(state): State<ServerState>,
    Extension(identity): Extension<Identity>,
    payload: Result<Json<CreateAppointmentInput>, JsonRejection>,
) -> Result<(StatusCode, Json<AppointmentView>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.booking.create_appointment(identity.user_id, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch,
    path = "/appointments/{id}",
    tag = "appointments",
    params(("id" = Uuid, Path, description = "Appointment id")),
    request_body = crate::openapi::UpdateAppointmentRequest,
    responses((status = 200, description = "Updated", body = crate::openapi::AppointmentDoc), (status = 403, description = "Not the owner"), (status = 404, description = "Not Found"), (status = 409, description = "Slot taken or appointment no longer pending"))
)]
pub async fn update(
    State(state): State<ServerState>,
    Extension(identity): Extension<Identity>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdateAppointmentInput>, JsonRejection>,
) -> Result<Json<AppointmentView>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    Ok(Json(state.booking.update_appointment(id, identity.user_id, input).await?))
}

/// Serves both `POST /appointments/{id}/cancel` and the older `DELETE /appointments/{id}`.
/// Either way the row stays with status `cancelled`.
#[utoipa::path(
    post,
    path = "/appointments/{id}/cancel",
    tag = "appointments",
    params(("id" = Uuid, Path, description = "Appointment id")),
    responses((status = 200, description = "Cancelled", body = crate::openapi::AppointmentDoc), (status = 403, description = "Not the owner"), (status = 404, description = "Not Found"), (status = 409, description = "Appointment no longer pending"))
)]
pub async fn cancel(
    State(state): State<ServerState>,
    Extension(identity): Extension<Identity>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<AppointmentView>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.booking.cancel_appointment(id, identity.user_id).await?))
}
