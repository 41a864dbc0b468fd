use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Instant;

use application::alert_service_impl::AlertAppService;
use application::firestation_service_impl::FirestationAppService;
use application::medical_record_service_impl::MedicalRecordAppService;
use application::person_service_impl::PersonAppService;

/// Shared application state for the REST API server.
///
/// Passed to Axum handlers via `State(Arc<AppState>)`.
pub struct AppState {
    /// Flips to `true` once the startup fixture load has completed
    /// (or was skipped); `/readyz` reports 503 until then.
    pub data_loaded: Arc<AtomicBool>,
    pub start_time: Instant,
    pub version: &'static str,
    pub person_service: Arc<PersonAppService>,
    pub firestation_service: Arc<FirestationAppService>,
    pub medical_record_service: Arc<MedicalRecordAppService>,
    pub alert_service: Arc<AlertAppService>,
}

impl AppState {
    pub fn new(
        data_loaded: Arc<AtomicBool>,
        person_service: Arc<PersonAppService>,
        firestation_service: Arc<FirestationAppService>,
        medical_record_service: Arc<MedicalRecordAppService>,
        alert_service: Arc<AlertAppService>,
    ) -> Self {
        Self {
            data_loaded,
            start_time: Instant::now(),
            version: env!("CARGO_PKG_VERSION"),
            person_service,
            firestation_service,
            medical_record_service,
            alert_service,
        }
    }
}
