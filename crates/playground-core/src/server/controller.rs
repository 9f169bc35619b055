//! Start/stop lifecycle around an interception capability.
//!
//! This module provides `ServerController` which captures a registry
//! snapshot when starting, installs it through the capability and hands
//! out [`MockService`] handles until stopped. The snapshot is fixed for
//! the lifetime of a run; registry changes apply on the next start.

use crate::matching::RouteTable;
use crate::registry::EndpointRegistry;
use crate::server::activity::ActivityLog;
use crate::server::capability::{CapabilityError, CapabilityHandle, InterceptionCapability};
use crate::server::service::MockService;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Lifecycle state of the mock server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Not serving; the capability is not installed
    Stopped,
    /// Capability installation in progress
    Starting,
    /// Serving requests against the captured snapshot
    Running,
    /// Capability release in progress
    Stopping,
}

impl fmt::Display for ServerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ServerState::Stopped => "stopped",
            ServerState::Starting => "starting",
            ServerState::Running => "running",
            ServerState::Stopping => "stopping",
        };
        f.write_str(s)
    }
}

/// Errors returned by lifecycle operations
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// The capability could not be installed; the server is back to stopped
    #[error("failed to install interception capability")]
    CapabilityUnavailable(#[source] CapabilityError),
    /// Another transition is in progress
    #[error("mock server is busy: {state}")]
    Busy { state: ServerState },
}

struct Installed {
    handle: Box<dyn CapabilityHandle>,
    service: MockService,
}

/// Lifecycle controller for the mock-serving engine.
///
/// The state word is flipped to `Starting`/`Stopping` before the
/// capability call, so overlapping lifecycle calls observe the
/// transition and get [`LifecycleError::Busy`] instead of queueing.
pub struct ServerController {
    registry: EndpointRegistry,
    capability: Arc<dyn InterceptionCapability>,
    activity: ActivityLog,
    state: Mutex<ServerState>,
    installed: Mutex<Option<Installed>>,
}

impl ServerController {
    /// Create a stopped controller over the given registry and capability.
    pub fn new(registry: EndpointRegistry, capability: Arc<dyn InterceptionCapability>) -> Self {
        Self {
            registry,
            capability,
            activity: ActivityLog::new(),
            state: Mutex::new(ServerState::Stopped),
            installed: Mutex::new(None),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> ServerState {
        *self.state.lock()
    }

    /// Activity log shared with served requests
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Registry this controller snapshots at start
    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    /// Start serving.
    ///
    /// Captures the registry contents as an immutable snapshot and
    /// installs it through the capability. Calling on a running server
    /// is a no-op; calling during a transition returns `Busy`. If the
    /// capability cannot be installed the controller returns to
    /// `Stopped` and surfaces the error.
    pub async fn start(&self) -> Result<(), LifecycleError> {
        {
            let mut state = self.state.lock();
            match *state {
                ServerState::Running => return Ok(()),
                ServerState::Starting | ServerState::Stopping => {
                    return Err(LifecycleError::Busy { state: *state });
                }
                ServerState::Stopped => *state = ServerState::Starting,
            }
        }

        let snapshot = Arc::new(RouteTable::new(self.registry.list()));
        info!("Starting mock server with {} endpoints", snapshot.len());

        match self.capability.install(Arc::clone(&snapshot)).await {
            Ok(handle) => {
                let service = MockService::new(snapshot, self.activity.clone());
                *self.installed.lock() = Some(Installed { handle, service });
                *self.state.lock() = ServerState::Running;
                info!("Mock server running");
                Ok(())
            }
            Err(err) => {
                *self.state.lock() = ServerState::Stopped;
                warn!("Failed to install interception capability: {}", err);
                Err(LifecycleError::CapabilityUnavailable(err))
            }
        }
    }

    /// Stop serving and release the capability.
    ///
    /// Requests already accepted by cloned service handles complete
    /// against their snapshot; no new handles are issued once the
    /// controller leaves `Running`. Calling on a stopped server is a
    /// no-op; calling during a transition returns `Busy`.
    pub async fn stop(&self) -> Result<(), LifecycleError> {
        {
            let mut state = self.state.lock();
            match *state {
                ServerState::Stopped => return Ok(()),
                ServerState::Starting | ServerState::Stopping => {
                    return Err(LifecycleError::Busy { state: *state });
                }
                ServerState::Running => *state = ServerState::Stopping,
            }
        }

        if let Some(installed) = self.installed.lock().take() {
            installed.handle.release();
        }
        *self.state.lock() = ServerState::Stopped;
        info!("Mock server stopped");
        Ok(())
    }

    /// Service handle for the current run.
    ///
    /// Returns `None` unless the server is running.
    pub fn service(&self) -> Option<MockService> {
        if self.state() != ServerState::Running {
            return None;
        }
        self.installed.lock().as_ref().map(|i| i.service.clone())
    }
}
