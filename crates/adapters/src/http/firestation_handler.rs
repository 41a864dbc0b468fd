use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use domain::common::entity::RecordId;
use domain::firestation::entity::Firestation;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::error::{ApiError, ErrorBody};
use super::state::AppState;
use super::validation::{MAX_LONG_STRING_LENGTH, validate_string_length};

// ── Request / Response DTOs ─────────────────────────────────────────

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FirestationRequest {
    /// Omit to create; supply to update an existing record.
    #[serde(default)]
    pub id: Option<u64>,
    pub address: String,
    pub station: u32,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FirestationResponse {
    pub id: u64,
    pub address: String,
    pub station: u32,
}

/// `GET /firestations/firestation` query parameters.
#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CoverageParams {
    pub station_number: u32,
}

/// One coverage row: an address served by the queried station.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoverageResponse {
    pub address: String,
    pub station: u32,
}

impl FirestationRequest {
    fn into_domain(self) -> Result<Firestation, ApiError> {
        validate_string_length("address", &self.address, MAX_LONG_STRING_LENGTH)?;
        Ok(Firestation {
            id: self.id.map(RecordId),
            address: self.address,
            station: self.station,
        })
    }
}

impl From<Firestation> for FirestationResponse {
    fn from(firestation: Firestation) -> Self {
        Self {
            id: firestation.id.map_or(0, |id| id.0),
            address: firestation.address,
            station: firestation.station,
        }
    }
}

// ── Handlers ────────────────────────────────────────────────────────

/// `GET /firestations` — list all firestation mappings.
#[utoipa::path(
    get, path = "/firestations",
    tag = "Firestation",
    responses(
        (status = 200, description = "List of firestation mappings", body = Vec<FirestationResponse>),
    )
)]
pub async fn list_firestations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FirestationResponse>>, ApiError> {
    let firestations = state.firestation_service.get_all()?;
    Ok(Json(
        firestations
            .into_iter()
            .map(FirestationResponse::from)
            .collect(),
    ))
}

/// `GET /firestations/{id}` — fetch one mapping by id.
#[utoipa::path(
    get, path = "/firestations/{id}",
    tag = "Firestation",
    params(("id" = u64, Path, description = "Firestation id")),
    responses(
        (status = 200, description = "Firestation found", body = FirestationResponse),
        (status = 404, description = "Firestation not found", body = ErrorBody),
    )
)]
pub async fn get_firestation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<FirestationResponse>, ApiError> {
    let firestation =
        state
            .firestation_service
            .get_by_id(RecordId(id))?
            .ok_or(ApiError::NotFound {
                code: "RECORD_NOT_FOUND",
                message: format!("firestation {id} not found"),
            })?;
    Ok(Json(FirestationResponse::from(firestation)))
}

/// `POST /firestations` — create or update a mapping.
#[utoipa::path(
    post, path = "/firestations",
    tag = "Firestation",
    request_body = FirestationRequest,
    responses(
        (status = 200, description = "Firestation saved", body = FirestationResponse),
        (status = 400, description = "Validation error", body = ErrorBody),
    )
)]
pub async fn save_firestation(
    State(state): State<Arc<AppState>>,
    Json(req): Json<FirestationRequest>,
) -> Result<Json<FirestationResponse>, ApiError> {
    let firestation = req.into_domain()?;
    let saved = state.firestation_service.save(firestation)?;
    Ok(Json(FirestationResponse::from(saved)))
}

/// `DELETE /firestations/{id}` — delete a mapping by id.
#[utoipa::path(
    delete, path = "/firestations/{id}",
    tag = "Firestation",
    params(("id" = u64, Path, description = "Firestation id")),
    responses(
        (status = 204, description = "Firestation deleted"),
        (status = 404, description = "Firestation not found", body = ErrorBody),
    )
)]
pub async fn delete_firestation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    state.firestation_service.delete(RecordId(id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /firestations/firestation?stationNumber=` — addresses covered
/// by one station, store order.
#[utoipa::path(
    get, path = "/firestations/firestation",
    tag = "Firestation",
    params(CoverageParams),
    responses(
        (status = 200, description = "Coverage rows for the station", body = Vec<CoverageResponse>),
    )
)]
pub async fn station_coverage(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CoverageParams>,
) -> Result<Json<Vec<CoverageResponse>>, ApiError> {
    let rows = state
        .alert_service
        .coverage_for_station(params.station_number)?;
    Ok(Json(
        rows.into_iter()
            .map(|row| CoverageResponse {
                address: row.address,
                station: row.station,
            })
            .collect(),
    ))
}
