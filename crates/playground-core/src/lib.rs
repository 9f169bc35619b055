//! Core mock-serving engine for the API Playground.
//!
//! Provides the endpoint registry, exact-match request routing, latency
//! simulating response synthesis and the start/stop lifecycle around an
//! abstract interception capability. The visual playground is a caller
//! of this API; the engine itself opens no sockets.

pub mod config;
pub mod matching;
pub mod registry;
pub mod response;
pub mod server;
pub mod types;

pub use config::ConfigError;
pub use matching::RouteTable;
pub use registry::{EndpointRegistry, RegistryError};
pub use response::{status_text, synthesize, unmatched_response, MockResponse};
pub use server::{
    ActivityEntry, ActivityLog, CapabilityError, CapabilityHandle, InProcessCapability,
    InterceptionCapability, LifecycleError, MockService, ServerController, ServerState,
};
pub use types::{Endpoint, EndpointDef, EndpointId, HttpMethod};
