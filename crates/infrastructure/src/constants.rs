use std::time::Duration;

// ── Defaults ───────────────────────────────────────────────────────

pub const DEFAULT_CONFIG_PATH: &str = "/etc/civic-alerts/config.yaml";
pub const DEFAULT_HTTP_PORT: u16 = 8080;
pub const DEFAULT_FIXTURE_PATH: &str = "data/data.json";

// ── Timeouts ───────────────────────────────────────────────────────

pub const GRACEFUL_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);
