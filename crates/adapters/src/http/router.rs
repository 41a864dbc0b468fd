use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::alert_handler::{
    child_alert, community_email, fire, flood_stations, person_info, phone_alert,
};
use super::firestation_handler::{
    delete_firestation, get_firestation, list_firestations, save_firestation, station_coverage,
};
use super::health_handler::{healthz, readyz};
use super::medical_record_handler::{
    delete_medical_record, get_medical_record, list_medical_records, save_medical_record,
};
use super::openapi::ApiDoc;
use super::person_handler::{delete_person, get_person, list_persons, save_person};
use super::state::AppState;

/// Maximum request body size for API endpoints (64 KiB).
const MAX_BODY_SIZE: usize = 64 * 1024;

/// Build the main Axum router with all REST API routes.
///
/// The query routes share the `/person` and `/firestations` prefixes
/// with the CRUD routes; static segments win over the `{id}` capture,
/// so `/person/childAlert` never shadows `/person/{id}`.
pub fn build_router(state: Arc<AppState>, swagger_ui: bool) -> Router {
    let probe_routes = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz));

    let api_routes = Router::new()
        .route("/person", get(list_persons).post(save_person))
        .route("/person/{id}", get(get_person).delete(delete_person))
        .route("/person/childAlert", get(child_alert))
        .route("/person/phoneAlert", get(phone_alert))
        .route("/person/fire", get(fire))
        .route("/person/flood/stations", get(flood_stations))
        .route("/person/personInfo", get(person_info))
        .route("/person/communityEmail", get(community_email))
        .route("/firestations", get(list_firestations).post(save_firestation))
        .route(
            "/firestations/{id}",
            get(get_firestation).delete(delete_firestation),
        )
        .route("/firestations/firestation", get(station_coverage))
        .route(
            "/medicalRecords",
            get(list_medical_records).post(save_medical_record),
        )
        .route(
            "/medicalRecords/{id}",
            get(get_medical_record).delete(delete_medical_record),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE));

    let router = probe_routes.merge(api_routes);

    let router = if swagger_ui {
        router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
    } else {
        router
    };

    router.with_state(state)
}
