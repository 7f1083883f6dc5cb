use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use uuid::Uuid;

use service::auth::domain::Identity;
use service::booking::domain::ServiceOffering;
use service::slots::TimeSlot;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    pub date: String,
    /// Appointment being edited; its slot shows as available to its owner.
    pub exclude: Option<Uuid>,
}

#[utoipa::path(get, path = "/services", tag = "catalog", responses((status = 200, description = "Catalog ordered by id", body = [crate::openapi::ServiceDoc])))]
pub async fn list_services(State(state): State<ServerState>) -> Result<Json<Vec<ServiceOffering>>, JsonApiError> {
    Ok(Json(state.booking.list_services().await?))
}

#[utoipa::path(
    get,
    path = "/slots",
    tag = "catalog",
    params(
        ("date" = String, Query, description = "YYYY-MM-DD"),
        ("exclude" = Option<Uuid>, Query, description = "Own appointment to leave out of the occupancy check"),
    ),
    responses((status = 200, description = "Template slots in order", body = [crate::openapi::TimeSlotDoc]), (status = 400, description = "Malformed date"), (status = 401, description = "Invalid token"))
)]
pub async fn slots(
    State(state): State<ServerState>,
    identity: Option<Extension<Identity>>,
    query: Result<Query<SlotsQuery>, QueryRejection>,
) -> Result<Json<Vec<TimeSlot>>, JsonApiError> {
    let Query(q) = query?;
    let requestor = identity.map(|Extension(id)| id.user_id);
    Ok(Json(state.booking.available_slots(&q.date, requestor, q.exclude).await?))
}
