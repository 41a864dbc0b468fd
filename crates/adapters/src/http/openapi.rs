use utoipa::OpenApi;

use super::alert_handler::{
    ChildAlertResponse, EmailResponse, FireResidentResponse, HouseholdMemberResponse,
    PersonProfileResponse, PhoneResponse,
};
use super::error::{ErrorBody, ErrorDetail};
use super::firestation_handler::{CoverageResponse, FirestationRequest, FirestationResponse};
use super::health_handler::{HealthResponse, ReadyResponse};
use super::medical_record_handler::{MedicalRecordRequest, MedicalRecordResponse};
use super::person_handler::{PersonRequest, PersonResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "civic-alerts REST API",
        description = "Person, firestation and medical-record registry with civil-emergency alert queries."
    ),
    paths(
        super::health_handler::healthz,
        super::health_handler::readyz,
        super::person_handler::list_persons,
        super::person_handler::get_person,
        super::person_handler::save_person,
        super::person_handler::delete_person,
        super::firestation_handler::list_firestations,
        super::firestation_handler::get_firestation,
        super::firestation_handler::save_firestation,
        super::firestation_handler::delete_firestation,
        super::firestation_handler::station_coverage,
        super::medical_record_handler::list_medical_records,
        super::medical_record_handler::get_medical_record,
        super::medical_record_handler::save_medical_record,
        super::medical_record_handler::delete_medical_record,
        super::alert_handler::child_alert,
        super::alert_handler::phone_alert,
        super::alert_handler::fire,
        super::alert_handler::flood_stations,
        super::alert_handler::person_info,
        super::alert_handler::community_email,
    ),
    components(schemas(
        ErrorBody,
        ErrorDetail,
        HealthResponse,
        ReadyResponse,
        PersonRequest,
        PersonResponse,
        FirestationRequest,
        FirestationResponse,
        CoverageResponse,
        MedicalRecordRequest,
        MedicalRecordResponse,
        ChildAlertResponse,
        PhoneResponse,
        FireResidentResponse,
        HouseholdMemberResponse,
        PersonProfileResponse,
        EmailResponse,
    )),
    tags(
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Person", description = "Person registry CRUD"),
        (name = "Firestation", description = "Firestation coverage CRUD"),
        (name = "MedicalRecord", description = "Medical record CRUD"),
        (name = "Alert", description = "Cross-entity emergency queries"),
    )
)]
pub struct ApiDoc;
