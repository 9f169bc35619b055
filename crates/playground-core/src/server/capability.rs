//! Abstraction over the mechanism that intercepts requests.
//!
//! The engine never touches the network itself. An `InterceptionCapability`
//! installs a resolved route snapshot into whatever host mechanism hijacks
//! requests (an in-process slot here, a loopback listener or OS proxy in
//! other hosts) and hands back a handle that undoes the installation.

use crate::matching::RouteTable;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while installing an interception capability
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    /// The host mechanism is not usable in this environment
    #[error("interception capability unavailable: {reason}")]
    Unavailable { reason: String },
    /// A previous installation has not been released yet
    #[error("interception capability already installed")]
    AlreadyInstalled,
}

/// Undoes a capability installation.
pub trait CapabilityHandle: Send {
    /// Release the installation, restoring the host to pass-through.
    fn release(self: Box<Self>);
}

/// Host mechanism that can intercept requests for a route snapshot.
#[async_trait]
pub trait InterceptionCapability: Send + Sync {
    /// Install the snapshot, returning a handle that undoes it.
    async fn install(
        &self,
        snapshot: Arc<RouteTable>,
    ) -> Result<Box<dyn CapabilityHandle>, CapabilityError>;
}

/// In-process capability backed by a shared slot.
///
/// While installed, the slot holds the active snapshot; request hijackers
/// read it through [`InProcessCapability::installed`]. Only one snapshot
/// can be installed at a time.
#[derive(Debug, Clone, Default)]
pub struct InProcessCapability {
    slot: Arc<RwLock<Option<Arc<RouteTable>>>>,
}

impl InProcessCapability {
    /// Capability with an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot currently installed in the slot, if any
    pub fn installed(&self) -> Option<Arc<RouteTable>> {
        self.slot.read().clone()
    }
}

struct SlotHandle {
    slot: Arc<RwLock<Option<Arc<RouteTable>>>>,
}

impl CapabilityHandle for SlotHandle {
    fn release(self: Box<Self>) {
        *self.slot.write() = None;
    }
}

#[async_trait]
impl InterceptionCapability for InProcessCapability {
    async fn install(
        &self,
        snapshot: Arc<RouteTable>,
    ) -> Result<Box<dyn CapabilityHandle>, CapabilityError> {
        let mut slot = self.slot.write();
        if slot.is_some() {
            return Err(CapabilityError::AlreadyInstalled);
        }
        *slot = Some(snapshot);
        Ok(Box::new(SlotHandle {
            slot: Arc::clone(&self.slot),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EndpointDef, EndpointId, HttpMethod};
    use rstest::rstest;

    fn sample_snapshot() -> Arc<RouteTable> {
        let endpoint = EndpointDef::sample_users().into_endpoint(EndpointId::new(1));
        Arc::new(RouteTable::new(vec![endpoint]))
    }

    #[tokio::test]
    async fn test_install_fills_slot() {
        let capability = InProcessCapability::new();
        assert!(capability.installed().is_none());

        let snapshot = sample_snapshot();
        let _handle = capability.install(Arc::clone(&snapshot)).await.unwrap();

        let installed = capability.installed().expect("Slot should be filled");
        assert_eq!(installed.len(), 1);
        assert!(installed
            .resolve(HttpMethod::Get, "/api/users")
            .is_some());
    }

    #[tokio::test]
    async fn test_release_clears_slot() {
        let capability = InProcessCapability::new();
        let handle = capability.install(sample_snapshot()).await.unwrap();

        handle.release();
        assert!(capability.installed().is_none());
    }

    #[tokio::test]
    async fn test_double_install_rejected() {
        let capability = InProcessCapability::new();
        let _handle = capability.install(sample_snapshot()).await.unwrap();

        let result = capability.install(sample_snapshot()).await;
        assert!(matches!(
            result.err(),
            Some(CapabilityError::AlreadyInstalled)
        ));
    }

    #[tokio::test]
    async fn test_reinstall_after_release() {
        let capability = InProcessCapability::new();
        let handle = capability.install(sample_snapshot()).await.unwrap();
        handle.release();

        let _handle = capability.install(sample_snapshot()).await.unwrap();
        assert!(capability.installed().is_some());
    }

    #[rstest]
    fn test_capability_error_display() {
        let error = CapabilityError::Unavailable {
            reason: "no loopback listener".to_string(),
        };
        assert!(error.to_string().contains("unavailable"));
        assert!(error.to_string().contains("no loopback listener"));

        let error = CapabilityError::AlreadyInstalled;
        assert!(error.to_string().contains("already installed"));
    }
}
