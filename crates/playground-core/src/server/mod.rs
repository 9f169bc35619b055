//! Mock server lifecycle, request service and activity log.
//!
//! This module ties the engine together:
//! - [`ServerController`]: start/stop lifecycle around an interception capability
//! - [`MockService`]: per-request serving against the snapshot captured at start
//! - [`ActivityLog`]: bounded record of handled requests

pub mod activity;
pub mod capability;
pub mod controller;
pub mod service;

pub use activity::{ActivityEntry, ActivityLog};
pub use capability::{
    CapabilityError, CapabilityHandle, InProcessCapability, InterceptionCapability,
};
pub use controller::{LifecycleError, ServerController, ServerState};
pub use service::MockService;
