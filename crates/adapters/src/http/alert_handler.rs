//! The seven alert query endpoints.
//!
//! The engine returns plain empty collections; per the historical
//! contract, four of the endpoints (`childAlert`, `phoneAlert`,
//! `personInfo`, `communityEmail`) wrap an empty result into a
//! one-element `[{"message": "..."}]` body with status 200. The other
//! three return their empty collection untouched.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use domain::alert::report::{ChildAlert, FireResident, HouseholdMember, PersonProfile};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use super::error::ApiError;
use super::state::AppState;

// ── Query parameters ────────────────────────────────────────────────

#[derive(Deserialize, IntoParams)]
pub struct AddressParams {
    pub address: String,
}

#[derive(Deserialize, IntoParams)]
pub struct PhoneAlertParams {
    /// Station number whose covered phones are requested.
    pub firestation: u32,
}

#[derive(Deserialize, IntoParams)]
pub struct FloodParams {
    /// Comma-separated station numbers, e.g. `1,2`.
    pub stations: String,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PersonInfoParams {
    pub last_name: String,
}

#[derive(Deserialize, IntoParams)]
pub struct CommunityEmailParams {
    pub city: String,
}

// ── Response DTOs ───────────────────────────────────────────────────

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChildAlertResponse {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

#[derive(Serialize, ToSchema)]
pub struct PhoneResponse {
    pub phone: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FireResidentResponse {
    pub last_name: String,
    pub phone: String,
    pub age: i32,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
    pub station_number: u32,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdMemberResponse {
    pub last_name: String,
    pub phone: String,
    pub age: i32,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonProfileResponse {
    pub last_name: String,
    pub address: String,
    pub email: String,
    pub age: i32,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct EmailResponse {
    pub email: String,
}

impl From<ChildAlert> for ChildAlertResponse {
    fn from(child: ChildAlert) -> Self {
        Self {
            first_name: child.first_name,
            last_name: child.last_name,
            age: child.age,
        }
    }
}

impl From<FireResident> for FireResidentResponse {
    fn from(resident: FireResident) -> Self {
        Self {
            last_name: resident.last_name,
            phone: resident.phone,
            age: resident.age,
            medications: resident.medications,
            allergies: resident.allergies,
            station_number: resident.station_number,
        }
    }
}

impl From<HouseholdMember> for HouseholdMemberResponse {
    fn from(member: HouseholdMember) -> Self {
        Self {
            last_name: member.last_name,
            phone: member.phone,
            age: member.age,
            medications: member.medications,
            allergies: member.allergies,
        }
    }
}

impl From<PersonProfile> for PersonProfileResponse {
    fn from(profile: PersonProfile) -> Self {
        Self {
            last_name: profile.last_name,
            address: profile.address,
            email: profile.email,
            age: profile.age,
            medications: profile.medications,
            allergies: profile.allergies,
        }
    }
}

fn empty_message(message: &str) -> Response {
    Json(json!([{ "message": message }])).into_response()
}

fn parse_station_list(raw: &str) -> Result<Vec<u32>, ApiError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>().map_err(|_| ApiError::BadRequest {
                code: "VALIDATION_ERROR",
                message: format!("invalid station number '{s}'"),
            })
        })
        .collect()
}

// ── Handlers ────────────────────────────────────────────────────────

/// `GET /person/childAlert?address=` — children at an address with
/// their ages.
#[utoipa::path(
    get, path = "/person/childAlert",
    tag = "Alert",
    params(AddressParams),
    responses(
        (status = 200, description = "Children at the address, or a message when none", body = Vec<ChildAlertResponse>),
    )
)]
pub async fn child_alert(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AddressParams>,
) -> Result<Response, ApiError> {
    let children = state.alert_service.children_at_address(&params.address)?;
    if children.is_empty() {
        return Ok(empty_message("no children found at this address"));
    }
    let rows: Vec<ChildAlertResponse> =
        children.into_iter().map(ChildAlertResponse::from).collect();
    Ok(Json(rows).into_response())
}

/// `GET /person/phoneAlert?firestation=` — phone numbers of everyone
/// covered by a station.
#[utoipa::path(
    get, path = "/person/phoneAlert",
    tag = "Alert",
    params(PhoneAlertParams),
    responses(
        (status = 200, description = "Phone numbers, or a message when none", body = Vec<PhoneResponse>),
    )
)]
pub async fn phone_alert(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PhoneAlertParams>,
) -> Result<Response, ApiError> {
    let phones = state.alert_service.phones_for_station(params.firestation)?;
    if phones.is_empty() {
        return Ok(empty_message("no phone numbers found for this station"));
    }
    let rows: Vec<PhoneResponse> = phones
        .into_iter()
        .map(|phone| PhoneResponse { phone })
        .collect();
    Ok(Json(rows).into_response())
}

/// `GET /person/fire?address=` — residents of an address with medical
/// details and the covering station.
#[utoipa::path(
    get, path = "/person/fire",
    tag = "Alert",
    params(AddressParams),
    responses(
        (status = 200, description = "Residents at the address", body = Vec<FireResidentResponse>),
    )
)]
pub async fn fire(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AddressParams>,
) -> Result<Json<Vec<FireResidentResponse>>, ApiError> {
    let residents = state.alert_service.residents_at_address(&params.address)?;
    Ok(Json(
        residents
            .into_iter()
            .map(FireResidentResponse::from)
            .collect(),
    ))
}

/// `GET /person/flood/stations?stations=1,2` — households grouped by
/// address for a set of stations.
///
/// The response is a JSON object keyed by address; key order follows
/// the firestation scan order, which is why the handler builds the map
/// by hand instead of serializing a `HashMap`.
#[utoipa::path(
    get, path = "/person/flood/stations",
    tag = "Alert",
    params(FloodParams),
    responses(
        (status = 200, description = "Households keyed by address"),
        (status = 400, description = "Malformed station list"),
    )
)]
pub async fn flood_stations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FloodParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let stations = parse_station_list(&params.stations)?;
    let rosters = state.alert_service.households_for_stations(&stations)?;

    let mut body = serde_json::Map::new();
    for roster in rosters {
        let members: Vec<HouseholdMemberResponse> = roster
            .members
            .into_iter()
            .map(HouseholdMemberResponse::from)
            .collect();
        body.insert(roster.address, json!(members));
    }
    Ok(Json(serde_json::Value::Object(body)))
}

/// `GET /person/personInfo?lastName=` — full profiles for a last name.
#[utoipa::path(
    get, path = "/person/personInfo",
    tag = "Alert",
    params(PersonInfoParams),
    responses(
        (status = 200, description = "Profiles, or a message when none", body = Vec<PersonProfileResponse>),
    )
)]
pub async fn person_info(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PersonInfoParams>,
) -> Result<Response, ApiError> {
    let profiles = state
        .alert_service
        .profiles_by_last_name(&params.last_name)?;
    if profiles.is_empty() {
        return Ok(empty_message("no persons found with this last name"));
    }
    let rows: Vec<PersonProfileResponse> = profiles
        .into_iter()
        .map(PersonProfileResponse::from)
        .collect();
    Ok(Json(rows).into_response())
}

/// `GET /person/communityEmail?city=` — email addresses of every
/// resident of a city.
#[utoipa::path(
    get, path = "/person/communityEmail",
    tag = "Alert",
    params(CommunityEmailParams),
    responses(
        (status = 200, description = "Email addresses, or a message when none", body = Vec<EmailResponse>),
    )
)]
pub async fn community_email(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CommunityEmailParams>,
) -> Result<Response, ApiError> {
    let emails = state.alert_service.emails_for_city(&params.city)?;
    if emails.is_empty() {
        return Ok(empty_message("no email addresses found for this city"));
    }
    let rows: Vec<EmailResponse> = emails
        .into_iter()
        .map(|email| EmailResponse { email })
        .collect();
    Ok(Json(rows).into_response())
}
