//! Background server health monitor.
//!
//! Probes the server's version endpoint on a fixed interval from a
//! spawned task and publishes snapshots through a watch channel. The
//! monitor never fails the owning task; an unreachable server simply
//! reports as unhealthy until a probe succeeds again.

use crate::client::MilvusClient;
use crate::context::{CancellationToken, CorrelationId, RequestContext};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// A snapshot of the last probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerStatus {
    /// True when the last probe succeeded.
    pub healthy: bool,
    /// Server version reported by the last successful probe.
    pub version: Option<String>,
    /// Failure description of the last probe, when it failed.
    pub error: Option<String>,
}

/// Handle to a running monitor task.
pub struct ServerMonitor {
    status: watch::Receiver<ServerStatus>,
    shutdown: CancellationToken,
}

impl ServerMonitor {
    /// Spawn the probe loop. The initial snapshot reports unhealthy until
    /// the first probe lands.
    #[must_use]
    pub fn start(client: Arc<dyn MilvusClient>, interval: Duration) -> Self {
        let (sender, receiver) = watch::channel(ServerStatus::default());
        let shutdown = CancellationToken::new();
        let token = shutdown.clone();
        tokio::spawn(async move {
            loop {
                if token.is_cancelled() {
                    break;
                }
                let ctx =
                    RequestContext::with_cancellation(CorrelationId::new_request_id(), token.clone());
                let snapshot = match client.get_version(&ctx).await {
                    Ok(version) => ServerStatus {
                        healthy: true,
                        version: Some(version),
                        error: None,
                    },
                    Err(error) if error.is_cancelled() => break,
                    Err(error) => {
                        tracing::warn!(%error, "server probe failed");
                        ServerStatus {
                            healthy: false,
                            version: None,
                            error: Some(error.to_string()),
                        }
                    }
                };
                if sender.send(snapshot).is_err() {
                    break;
                }
                tokio::select! {
                    () = token.cancelled() => break,
                    () = tokio::time::sleep(interval) => {}
                }
            }
        });
        Self {
            status: receiver,
            shutdown,
        }
    }

    /// The most recent snapshot.
    #[must_use]
    pub fn current(&self) -> ServerStatus {
        self.status.borrow().clone()
    }

    /// True when the last probe succeeded.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status.borrow().healthy
    }

    /// A receiver observing every future snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ServerStatus> {
        self.status.clone()
    }

    /// Stop the probe loop. Idempotent.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}

impl Drop for ServerMonitor {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
