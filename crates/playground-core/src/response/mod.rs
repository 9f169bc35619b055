//! Mock response synthesis.
//!
//! This module builds the responses the engine serves:
//! - [`synthesize`]: response for a matched endpoint, after its simulated latency
//! - [`unmatched_response`]: fixed 404 for requests no endpoint matches

pub mod status;
pub mod synthesizer;

pub use status::status_text;
pub use synthesizer::{synthesize, unmatched_response, MockResponse};
