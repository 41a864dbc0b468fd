use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use domain::common::entity::RecordId;
use domain::medical::entity::MedicalRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::{ApiError, ErrorBody};
use super::state::AppState;
use super::validation::{MAX_SHORT_STRING_LENGTH, validate_string_length};

// ── Request / Response DTOs ─────────────────────────────────────────

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecordRequest {
    /// Omit to create; supply to update an existing record.
    #[serde(default)]
    pub id: Option<u64>,
    pub first_name: String,
    pub last_name: String,
    /// `MM/DD/YYYY`. Malformed values are accepted and age-computed
    /// as 0 by the alert queries.
    #[serde(default)]
    pub birthdate: String,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecordResponse {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: String,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
}

impl MedicalRecordRequest {
    fn into_domain(self) -> Result<MedicalRecord, ApiError> {
        validate_string_length("firstName", &self.first_name, MAX_SHORT_STRING_LENGTH)?;
        validate_string_length("lastName", &self.last_name, MAX_SHORT_STRING_LENGTH)?;
        validate_string_length("birthdate", &self.birthdate, MAX_SHORT_STRING_LENGTH)?;

        Ok(MedicalRecord {
            id: self.id.map(RecordId),
            first_name: self.first_name,
            last_name: self.last_name,
            birthdate: self.birthdate,
            medications: self.medications,
            allergies: self.allergies,
        })
    }
}

impl From<MedicalRecord> for MedicalRecordResponse {
    fn from(record: MedicalRecord) -> Self {
        Self {
            id: record.id.map_or(0, |id| id.0),
            first_name: record.first_name,
            last_name: record.last_name,
            birthdate: record.birthdate,
            medications: record.medications,
            allergies: record.allergies,
        }
    }
}

// ── Handlers ────────────────────────────────────────────────────────

/// `GET /medicalRecords` — list all medical records.
#[utoipa::path(
    get, path = "/medicalRecords",
    tag = "MedicalRecord",
    responses(
        (status = 200, description = "List of medical records", body = Vec<MedicalRecordResponse>),
    )
)]
pub async fn list_medical_records(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MedicalRecordResponse>>, ApiError> {
    let records = state.medical_record_service.get_all()?;
    Ok(Json(
        records
            .into_iter()
            .map(MedicalRecordResponse::from)
            .collect(),
    ))
}

/// `GET /medicalRecords/{id}` — fetch one record by id.
#[utoipa::path(
    get, path = "/medicalRecords/{id}",
    tag = "MedicalRecord",
    params(("id" = u64, Path, description = "Medical record id")),
    responses(
        (status = 200, description = "Medical record found", body = MedicalRecordResponse),
        (status = 404, description = "Medical record not found", body = ErrorBody),
    )
)]
pub async fn get_medical_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<MedicalRecordResponse>, ApiError> {
    let record = state
        .medical_record_service
        .get_by_id(RecordId(id))?
        .ok_or(ApiError::NotFound {
            code: "RECORD_NOT_FOUND",
            message: format!("medical record {id} not found"),
        })?;
    Ok(Json(MedicalRecordResponse::from(record)))
}

/// `POST /medicalRecords` — create or update a record.
#[utoipa::path(
    post, path = "/medicalRecords",
    tag = "MedicalRecord",
    request_body = MedicalRecordRequest,
    responses(
        (status = 200, description = "Medical record saved", body = MedicalRecordResponse),
        (status = 400, description = "Validation error", body = ErrorBody),
    )
)]
pub async fn save_medical_record(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MedicalRecordRequest>,
) -> Result<Json<MedicalRecordResponse>, ApiError> {
    let record = req.into_domain()?;
    let saved = state.medical_record_service.save(record)?;
    Ok(Json(MedicalRecordResponse::from(saved)))
}

/// `DELETE /medicalRecords/{id}` — delete a record by id.
#[utoipa::path(
    delete, path = "/medicalRecords/{id}",
    tag = "MedicalRecord",
    params(("id" = u64, Path, description = "Medical record id")),
    responses(
        (status = 204, description = "Medical record deleted"),
        (status = 404, description = "Medical record not found", body = ErrorBody),
    )
)]
pub async fn delete_medical_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    state.medical_record_service.delete(RecordId(id))?;
    Ok(StatusCode::NO_CONTENT)
}
