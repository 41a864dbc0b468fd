use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Token cancelled once the process is asked to stop.
///
/// Listens for SIGINT and, on unix, SIGTERM. The arriving signal is
/// logged so an operator can tell a Ctrl+C apart from an orchestrator
/// kill.
pub fn shutdown_token() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();

    tokio::spawn(async move {
        let signal = wait_for_stop_signal().await;
        tracing::info!(signal, "shutdown signal received");
        trigger.cancel();
    });

    token
}

#[cfg(unix)]
async fn wait_for_stop_signal() -> &'static str {
    let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())
        .expect("failed to install SIGTERM handler");

    tokio::select! {
        result = signal::ctrl_c() => {
            result.expect("failed to install Ctrl+C handler");
            "SIGINT"
        }
        _ = terminate.recv() => "SIGTERM",
    }
}

#[cfg(not(unix))]
async fn wait_for_stop_signal() -> &'static str {
    signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    "SIGINT"
}
