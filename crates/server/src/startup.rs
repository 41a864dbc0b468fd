use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use adapters::http::server::run_http_server;
use adapters::http::state::AppState;
use adapters::storage::memory_store::{
    MemoryFirestationStore, MemoryMedicalRecordStore, MemoryPersonStore,
};
use application::alert_service_impl::AlertAppService;
use application::firestation_service_impl::FirestationAppService;
use application::medical_record_service_impl::MedicalRecordAppService;
use application::person_service_impl::PersonAppService;
use infrastructure::config::ServiceConfig;
use infrastructure::constants::GRACEFUL_SHUTDOWN_TIMEOUT;
use infrastructure::data_loader::DataLoader;
use infrastructure::logging::init_logging;
use ports::secondary::firestation_store::FirestationStore;
use ports::secondary::medical_record_store::MedicalRecordStore;
use ports::secondary::person_store::PersonStore;
use tracing::{info, warn};

use crate::cli::Cli;
use crate::shutdown::shutdown_token;

/// Run the service startup sequence and block until shutdown.
pub async fn run(cli: &Cli) -> anyhow::Result<()> {
    // ── 1. Load config ──────────────────────────────────────────────
    let config_path = Path::new(&cli.config);
    let (config, config_found) = if config_path.exists() {
        (ServiceConfig::load(config_path)?, true)
    } else {
        (ServiceConfig::default(), false)
    };

    // ── 2. Initialize logging ───────────────────────────────────────
    // CLI flags take precedence over config file
    let log_level = cli.log_level.unwrap_or(config.logging.level);
    let log_format = cli.log_format.unwrap_or(config.logging.format);
    init_logging(log_level, log_format)?;

    // Service root span — fields appear in every subsequent log entry
    let _root_span = tracing::span!(
        tracing::Level::INFO,
        "service",
        service.name = "civic-alerts",
        service.version = env!("CARGO_PKG_VERSION"),
    )
    .entered();

    if !config_found {
        warn!(config_path = %cli.config, "config file not found, using defaults");
    }
    info!(
        config_path = %cli.config,
        log_level = log_level.as_str(),
        log_format = log_format.as_str(),
        "civic-alerts starting"
    );

    // ── 3. Wire stores and services ─────────────────────────────────
    let persons: Arc<dyn PersonStore> = Arc::new(MemoryPersonStore::default());
    let firestations: Arc<dyn FirestationStore> = Arc::new(MemoryFirestationStore::default());
    let records: Arc<dyn MedicalRecordStore> = Arc::new(MemoryMedicalRecordStore::default());

    let person_service = Arc::new(PersonAppService::new(Arc::clone(&persons)));
    let firestation_service = Arc::new(FirestationAppService::new(Arc::clone(&firestations)));
    let medical_record_service = Arc::new(MedicalRecordAppService::new(Arc::clone(&records)));
    let alert_service = Arc::new(AlertAppService::new(
        Arc::clone(&persons),
        Arc::clone(&firestations),
        Arc::clone(&records),
        config.alerts.medical_join,
    ));

    // ── 4. Load startup fixture ─────────────────────────────────────
    // A failed load leaves the service running with empty stores.
    let data_loaded = Arc::new(AtomicBool::new(false));
    if config.data.enabled {
        let fixture_path = cli
            .data_file
            .clone()
            .unwrap_or_else(|| config.data.fixture_path.clone());
        let loader = DataLoader::new(
            Arc::clone(&persons),
            Arc::clone(&firestations),
            Arc::clone(&records),
        );
        match loader.load_file(Path::new(&fixture_path)) {
            Ok(summary) => info!(
                fixture_path,
                persons = summary.persons,
                firestations = summary.firestations,
                medical_records = summary.medical_records,
                "fixture data loaded"
            ),
            Err(e) => warn!(fixture_path, error = %e, "fixture load failed, starting empty"),
        }
    } else {
        info!("fixture loading disabled, starting empty");
    }
    data_loaded.store(true, Ordering::Relaxed);

    // ── 5. Serve until shutdown ─────────────────────────────────────
    let state = Arc::new(AppState::new(
        Arc::clone(&data_loaded),
        person_service,
        firestation_service,
        medical_record_service,
        alert_service,
    ));

    let token = shutdown_token();
    let shutdown = {
        let token = token.clone();
        async move { token.cancelled_owned().await }
    };

    tokio::select! {
        result = run_http_server(
            Arc::clone(&state),
            &config.server.bind_address,
            config.server.port,
            config.server.swagger_ui,
            shutdown,
        ) => result?,
        () = async {
            token.cancelled().await;
            tokio::time::sleep(GRACEFUL_SHUTDOWN_TIMEOUT).await;
        } => {
            warn!("graceful shutdown drain timed out");
        }
    }

    info!("civic-alerts stopped");
    Ok(())
}
