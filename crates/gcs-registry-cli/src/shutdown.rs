//! Cancellation on termination signals.

use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::TRACING_TARGET_SHUTDOWN;

/// Cancels `token` when SIGTERM or SIGINT/Ctrl+C is received.
///
/// Returns early without cancelling if `token` is cancelled elsewhere.
pub async fn cancel_on_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::error!(
                target: TRACING_TARGET_SHUTDOWN,
                error = %e,
                "Failed to install Ctrl+C handler"
            );
            std::future::pending::<()>().await;
        } else {
            tracing::info!(
                target: TRACING_TARGET_SHUTDOWN,
                "Received Ctrl+C signal, cancelling push"
            );
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match unix::signal(unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                tracing::info!(
                    target: TRACING_TARGET_SHUTDOWN,
                    "Received SIGTERM signal, cancelling push"
                );
            }
            Err(e) => {
                tracing::error!(
                    target: TRACING_TARGET_SHUTDOWN,
                    error = %e,
                    "Failed to install SIGTERM handler"
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = token.cancelled() => return,
        () = ctrl_c => {},
        () = terminate => {},
    }

    token.cancel();
}

/// Cancels `token` and waits for the listener spawned on it to finish.
///
/// A listener that panicked or was aborted is logged and otherwise ignored.
pub async fn stop_listener(token: &CancellationToken, listener: JoinHandle<()>) {
    token.cancel();

    if let Err(e) = listener.await {
        tracing::warn!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %e,
            "signal listener task failed"
        );
    }
}
