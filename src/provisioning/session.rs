//! Provisioning session state machine.
//!
//! ## State Machine
//!
//! ```text
//!                 fetch ok, success        ┌─────────┐
//!             ┌───────────────────────────►│  Ready  │
//! ┌─────────┐ │                            └─────────┘
//! │ Loading ├─┤
//! └────▲────┘ │  rejected / failed / panic ┌─────────┐
//!      │      └───────────────────────────►│  Error  │
//!      │                                   └────┬────┘
//!      └────────────────── retry() ─────────────┘
//! ```
//!
//! One session owns at most one in-flight fetch. The owning UI may call
//! [`ProvisioningSession::start`] several times in a row (duplicate mount
//! notifications); every call after the first is a no-op until the fetch
//! settles. The guard is taken under the session lock before the fetch task
//! is spawned and released by the task itself when it settles.
//!
//! Each attempt carries a generation number. A result is applied only if its
//! generation is still current and the session is alive, so neither a
//! superseded attempt nor a fetch finishing after [`ProvisioningSession::close`]
//! can touch visible state.

use super::{CredentialSource, ProvisionedCredentials, SessionStatus};
use crate::error::{GENERIC_PROVISION_FAILURE, ProvisionError};
use crate::telemetry::spans;
use futures_util::FutureExt;
use parking_lot::Mutex;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tracing::{Instrument, debug, info, warn};

/// Coordinates one credential fetch for one embedded chat view.
pub struct ProvisioningSession {
    shared: Arc<Shared>,
}

struct Shared {
    inner: Mutex<Inner>,
    status: watch::Sender<SessionStatus>,
}

struct Inner {
    /// Source of the most recent attempt, reused by `retry()`.
    source: Option<Arc<dyn CredentialSource>>,
    in_flight: bool,
    attempt: u64,
    alive: bool,
    task: Option<AbortHandle>,
}

impl ProvisioningSession {
    /// A fresh session in the `Loading` state with nothing in flight.
    pub fn new() -> Self {
        let (status, _) = watch::channel(SessionStatus::Loading);
        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    source: None,
                    in_flight: false,
                    attempt: 0,
                    alive: true,
                    task: None,
                }),
                status,
            }),
        }
    }

    /// Begin an attempt using `source`.
    ///
    /// No-op while an attempt is in flight or after the session is closed.
    /// Must be called from within a Tokio runtime; without one the session
    /// goes straight to `Error`.
    pub fn start<S: CredentialSource>(&self, source: S) {
        self.start_shared(Arc::new(source));
    }

    /// [`start`](Self::start) with an already shared source.
    pub fn start_shared(&self, source: Arc<dyn CredentialSource>) {
        let mut inner = self.shared.inner.lock();
        if !inner.alive {
            debug!("Ignoring start on closed provisioning session");
            return;
        }
        if inner.in_flight {
            debug!(attempt = inner.attempt, "Provisioning already in flight");
            return;
        }
        inner.source = Some(Arc::clone(&source));
        self.launch(&mut inner, source);
    }

    /// Drop the in-flight guard and start over with the last source.
    ///
    /// An attempt still running is aborted and its result discarded.
    pub fn retry(&self) {
        let mut inner = self.shared.inner.lock();
        if !inner.alive {
            debug!("Ignoring retry on closed provisioning session");
            return;
        }
        let Some(source) = inner.source.clone() else {
            warn!("Retry requested before any provisioning attempt");
            return;
        };
        inner.in_flight = false;
        if let Some(task) = inner.task.take() {
            task.abort();
        }
        info!(previous = inner.attempt, "Retrying IRC provisioning");
        self.launch(&mut inner, source);
    }

    /// Snapshot of the current status.
    pub fn current_status(&self) -> SessionStatus {
        self.shared.status.borrow().clone()
    }

    /// Watch status changes, e.g. to drive a loading/error view.
    pub fn subscribe(&self) -> watch::Receiver<SessionStatus> {
        self.shared.status.subscribe()
    }

    /// Wait until the status leaves `Loading`.
    ///
    /// Never resolves for a session closed while still loading.
    pub async fn settled(&self) -> SessionStatus {
        let mut rx = self.subscribe();
        let settled = rx
            .wait_for(|status| !status.is_loading())
            .await
            .map(|status| (*status).clone());
        settled.unwrap_or_else(|_| self.current_status())
    }

    pub fn is_in_flight(&self) -> bool {
        self.shared.inner.lock().in_flight
    }

    /// Tear the session down. Any in-flight fetch is aborted, late results
    /// are ignored, and further `start`/`retry` calls do nothing.
    pub fn close(&self) {
        let mut inner = self.shared.inner.lock();
        if !inner.alive {
            return;
        }
        inner.alive = false;
        inner.in_flight = false;
        inner.source = None;
        if let Some(task) = inner.task.take() {
            task.abort();
        }
        debug!(attempt = inner.attempt, "Provisioning session closed");
    }

    /// Set the guard and spawn the fetch. Caller holds the lock.
    fn launch(&self, inner: &mut Inner, source: Arc<dyn CredentialSource>) {
        let runtime = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                warn!(error = %e, "No async runtime for provisioning fetch");
                self.shared.status.send_replace(SessionStatus::Error {
                    message: GENERIC_PROVISION_FAILURE.to_string(),
                });
                return;
            }
        };

        inner.in_flight = true;
        inner.attempt += 1;
        let attempt = inner.attempt;
        self.shared.status.send_replace(SessionStatus::Loading);

        let shared = Arc::clone(&self.shared);
        let handle = runtime.spawn(
            async move {
                let outcome = AssertUnwindSafe(source.fetch()).catch_unwind().await;
                let status = match outcome {
                    Ok(Ok(credentials)) => resolve(credentials),
                    Ok(Err(e)) => {
                        warn!(error = %e, code = e.error_code(), "IRC provisioning failed");
                        SessionStatus::Error {
                            message: e.status_message(),
                        }
                    }
                    Err(_) => {
                        warn!("Credential fetch panicked");
                        SessionStatus::Error {
                            message: GENERIC_PROVISION_FAILURE.to_string(),
                        }
                    }
                };
                shared.settle(attempt, status);
            }
            .instrument(spans::provisioning(attempt)),
        );
        inner.task = Some(handle.abort_handle());
    }
}

/// Map a completed fetch onto a terminal status.
fn resolve(credentials: ProvisionedCredentials) -> SessionStatus {
    if credentials.success {
        info!(user = %credentials.irc_username, network = %credentials.network_name, "IRC provisioning successful");
        SessionStatus::Ready { credentials }
    } else {
        warn!("Provisioning response reported failure");
        SessionStatus::Error {
            message: ProvisionError::Rejected.status_message(),
        }
    }
}

impl Shared {
    fn settle(&self, attempt: u64, status: SessionStatus) {
        let mut inner = self.inner.lock();
        if !inner.alive || inner.attempt != attempt {
            debug!(attempt, current = inner.attempt, "Discarding stale provisioning result");
            return;
        }
        inner.in_flight = false;
        inner.task = None;
        self.status.send_replace(status);
    }
}

impl Default for ProvisioningSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProvisioningSession {
    fn drop(&mut self) {
        self.close();
    }
}
