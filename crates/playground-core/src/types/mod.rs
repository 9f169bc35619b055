//! Core domain types for mock endpoints.

pub mod endpoint;

pub use endpoint::{Endpoint, EndpointDef, EndpointId, HttpMethod};
