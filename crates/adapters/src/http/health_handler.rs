use std::sync::Arc;
use std::sync::atomic::Ordering;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use utoipa::ToSchema;

use super::state::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"`.
    #[schema(value_type = String)]
    pub status: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct ReadyResponse {
    /// `"ready"` or `"not_ready"`.
    #[schema(value_type = String)]
    pub status: &'static str,
    /// Whether the startup fixture load has completed.
    pub data_loaded: bool,
}

/// Liveness probe — always returns 200 if the process is running.
#[utoipa::path(
    get, path = "/healthz",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse),
    )
)]
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Readiness probe — returns 200 once startup data is loaded, 503 otherwise.
#[utoipa::path(
    get, path = "/readyz",
    tag = "Health",
    responses(
        (status = 200, description = "Service is ready", body = ReadyResponse),
        (status = 503, description = "Service is not ready", body = ReadyResponse),
    )
)]
pub async fn readyz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let loaded = state.data_loaded.load(Ordering::Relaxed);
    let status = if loaded { "ready" } else { "not_ready" };
    let code = if loaded {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (
        code,
        Json(ReadyResponse {
            status,
            data_loaded: loaded,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;

    use application::alert_service_impl::AlertAppService;
    use application::firestation_service_impl::FirestationAppService;
    use application::medical_record_service_impl::MedicalRecordAppService;
    use application::person_service_impl::PersonAppService;
    use domain::alert::engine::JoinMode;
    use ports::secondary::firestation_store::FirestationStore;
    use ports::secondary::medical_record_store::MedicalRecordStore;
    use ports::secondary::person_store::PersonStore;
    use ports::test_utils::{FakeFirestationStore, FakeMedicalRecordStore, FakePersonStore};

    fn test_state(data_loaded: bool) -> Arc<AppState> {
        let persons: Arc<dyn PersonStore> = Arc::new(FakePersonStore::default());
        let firestations: Arc<dyn FirestationStore> = Arc::new(FakeFirestationStore::default());
        let records: Arc<dyn MedicalRecordStore> = Arc::new(FakeMedicalRecordStore::default());
        Arc::new(AppState::new(
            Arc::new(AtomicBool::new(data_loaded)),
            Arc::new(PersonAppService::new(Arc::clone(&persons))),
            Arc::new(FirestationAppService::new(Arc::clone(&firestations))),
            Arc::new(MedicalRecordAppService::new(Arc::clone(&records))),
            Arc::new(AlertAppService::new(
                persons,
                firestations,
                records,
                JoinMode::Id,
            )),
        ))
    }

    #[tokio::test]
    async fn healthz_always_returns_ok() {
        let Json(resp) = healthz().await;
        assert_eq!(resp.status, "ok");
    }

    #[tokio::test]
    async fn readyz_returns_ready_when_loaded() {
        let state = test_state(true);
        let resp = readyz(State(state)).await.into_response();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn readyz_returns_unavailable_before_load() {
        let state = test_state(false);
        let resp = readyz(State(state)).await.into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
