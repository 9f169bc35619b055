//! Endpoint registry storing the configured mock endpoints.
//!
//! This module provides `EndpointRegistry` which owns the ordered endpoint
//! list shared between a configuration surface and the lifecycle controller.
//! The controller snapshots the list when the server starts.

use crate::types::{Endpoint, EndpointDef, EndpointId};
use parking_lot::RwLock;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Definition failed structural validation
    #[error("invalid endpoint: {reason}")]
    InvalidEndpoint { reason: String },
    /// No endpoint with the given id
    #[error("endpoint not found: {id}")]
    NotFound { id: EndpointId },
}

/// Check an endpoint definition for structural validity.
pub fn validate_endpoint(def: &EndpointDef) -> Result<(), RegistryError> {
    if !def.path.starts_with('/') {
        return Err(RegistryError::InvalidEndpoint {
            reason: format!("path '{}' must start with '/'", def.path),
        });
    }
    Ok(())
}

#[derive(Debug, Default)]
struct RegistryInner {
    endpoints: Vec<Endpoint>,
    next_id: u64,
}

impl RegistryInner {
    fn fresh_id(&mut self) -> EndpointId {
        self.next_id += 1;
        EndpointId::new(self.next_id)
    }
}

/// Shared, ordered store of mock endpoints.
///
/// `EndpointRegistry` is responsible for:
/// - Assigning fresh, never-reused ids at registration
/// - Preserving registration order across updates and removals
/// - Rejecting structurally invalid definitions without partial mutation
///
/// Clones share the same underlying store. All operations take the lock
/// only for the duration of the mutation or copy.
#[derive(Debug, Clone, Default)]
pub struct EndpointRegistry {
    inner: Arc<RwLock<RegistryInner>>,
}

impl EndpointRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new endpoint, assigning it a fresh id.
    pub fn add(&self, def: EndpointDef) -> Result<Endpoint, RegistryError> {
        validate_endpoint(&def)?;
        let mut inner = self.inner.write();
        let id = inner.fresh_id();
        let endpoint = def.into_endpoint(id);
        inner.endpoints.push(endpoint.clone());
        Ok(endpoint)
    }

    /// Register a sequence of endpoints in order.
    ///
    /// The whole batch is validated before anything is inserted, so a
    /// failure leaves the registry untouched.
    pub fn add_all(&self, defs: Vec<EndpointDef>) -> Result<Vec<Endpoint>, RegistryError> {
        for def in &defs {
            validate_endpoint(def)?;
        }
        let mut inner = self.inner.write();
        let mut added = Vec::with_capacity(defs.len());
        for def in defs {
            let id = inner.fresh_id();
            let endpoint = def.into_endpoint(id);
            inner.endpoints.push(endpoint.clone());
            added.push(endpoint);
        }
        Ok(added)
    }

    /// Replace the definition of an existing endpoint.
    ///
    /// The endpoint keeps its id and its position in the list.
    pub fn update(&self, id: EndpointId, def: EndpointDef) -> Result<Endpoint, RegistryError> {
        validate_endpoint(&def)?;
        let mut inner = self.inner.write();
        let slot = inner
            .endpoints
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(RegistryError::NotFound { id })?;
        *slot = def.into_endpoint(id);
        Ok(slot.clone())
    }

    /// Remove an endpoint by id, preserving the order of the rest.
    pub fn remove(&self, id: EndpointId) -> Result<Endpoint, RegistryError> {
        let mut inner = self.inner.write();
        let index = inner
            .endpoints
            .iter()
            .position(|e| e.id == id)
            .ok_or(RegistryError::NotFound { id })?;
        Ok(inner.endpoints.remove(index))
    }

    /// Get an endpoint by id.
    pub fn get(&self, id: EndpointId) -> Option<Endpoint> {
        self.inner.read().endpoints.iter().find(|e| e.id == id).cloned()
    }

    /// Snapshot of all endpoints in registration order.
    pub fn list(&self) -> Vec<Endpoint> {
        self.inner.read().endpoints.clone()
    }

    /// Number of registered endpoints
    pub fn len(&self) -> usize {
        self.inner.read().endpoints.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.inner.read().endpoints.is_empty()
    }
}
