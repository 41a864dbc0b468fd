use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use domain::common::entity::RecordId;
use domain::person::entity::Person;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::{ApiError, ErrorBody};
use super::state::AppState;
use super::validation::{
    MAX_LONG_STRING_LENGTH, MAX_SHORT_STRING_LENGTH, validate_string_length,
};

// ── Request / Response DTOs ─────────────────────────────────────────

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonRequest {
    /// Omit to create; supply to update an existing record.
    #[serde(default)]
    pub id: Option<u64>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponse {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
}

impl PersonRequest {
    fn into_domain(self) -> Result<Person, ApiError> {
        validate_string_length("firstName", &self.first_name, MAX_SHORT_STRING_LENGTH)?;
        validate_string_length("lastName", &self.last_name, MAX_SHORT_STRING_LENGTH)?;
        validate_string_length("address", &self.address, MAX_LONG_STRING_LENGTH)?;
        validate_string_length("city", &self.city, MAX_SHORT_STRING_LENGTH)?;
        validate_string_length("zip", &self.zip, MAX_SHORT_STRING_LENGTH)?;
        validate_string_length("phone", &self.phone, MAX_SHORT_STRING_LENGTH)?;
        validate_string_length("email", &self.email, MAX_LONG_STRING_LENGTH)?;

        Ok(Person {
            id: self.id.map(RecordId),
            first_name: self.first_name,
            last_name: self.last_name,
            address: self.address,
            city: self.city,
            zip: self.zip,
            phone: self.phone,
            email: self.email,
        })
    }
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id.map_or(0, |id| id.0),
            first_name: person.first_name,
            last_name: person.last_name,
            address: person.address,
            city: person.city,
            zip: person.zip,
            phone: person.phone,
            email: person.email,
        }
    }
}

// ── Handlers ────────────────────────────────────────────────────────

/// `GET /person` — list all persons.
#[utoipa::path(
    get, path = "/person",
    tag = "Person",
    responses(
        (status = 200, description = "List of persons", body = Vec<PersonResponse>),
    )
)]
pub async fn list_persons(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PersonResponse>>, ApiError> {
    let persons = state.person_service.get_all()?;
    Ok(Json(persons.into_iter().map(PersonResponse::from).collect()))
}

/// `GET /person/{id}` — fetch one person by id.
#[utoipa::path(
    get, path = "/person/{id}",
    tag = "Person",
    params(("id" = u64, Path, description = "Person id")),
    responses(
        (status = 200, description = "Person found", body = PersonResponse),
        (status = 404, description = "Person not found", body = ErrorBody),
    )
)]
pub async fn get_person(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<PersonResponse>, ApiError> {
    let person = state
        .person_service
        .get_by_id(RecordId(id))?
        .ok_or(ApiError::NotFound {
            code: "RECORD_NOT_FOUND",
            message: format!("person {id} not found"),
        })?;
    Ok(Json(PersonResponse::from(person)))
}

/// `POST /person` — create or update a person.
#[utoipa::path(
    post, path = "/person",
    tag = "Person",
    request_body = PersonRequest,
    responses(
        (status = 200, description = "Person saved", body = PersonResponse),
        (status = 400, description = "Validation error", body = ErrorBody),
    )
)]
pub async fn save_person(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PersonRequest>,
) -> Result<Json<PersonResponse>, ApiError> {
    let person = req.into_domain()?;
    let saved = state.person_service.save(person)?;
    Ok(Json(PersonResponse::from(saved)))
}

/// `DELETE /person/{id}` — delete a person by id.
#[utoipa::path(
    delete, path = "/person/{id}",
    tag = "Person",
    params(("id" = u64, Path, description = "Person id")),
    responses(
        (status = 204, description = "Person deleted"),
        (status = 404, description = "Person not found", body = ErrorBody),
    )
)]
pub async fn delete_person(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    state.person_service.delete(RecordId(id))?;
    Ok(StatusCode::NO_CONTENT)
}
