//! Builds mock responses from matched endpoints.

use crate::response::status::status_text;
use crate::types::{Endpoint, HttpMethod};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;

/// Marker header present on every synthesized response
pub const MOCK_SERVER_HEADER: &str = "X-Mock-Server";
/// Marker header value identifying this engine
pub const MOCK_SERVER_NAME: &str = "API Playground";

const CONTENT_TYPE_HEADER: &str = "Content-Type";
const CONTENT_TYPE_JSON: &str = "application/json";

/// Synthesized mock response
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MockResponse {
    /// HTTP status code
    pub status: u16,
    /// Reason phrase for the status code
    pub status_text: String,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// JSON response body
    pub body: Value,
}

fn matched_headers() -> HashMap<String, String> {
    HashMap::from([
        (CONTENT_TYPE_HEADER.to_string(), CONTENT_TYPE_JSON.to_string()),
        (MOCK_SERVER_HEADER.to_string(), MOCK_SERVER_NAME.to_string()),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        (
            "Access-Control-Allow-Methods".to_string(),
            "GET, POST, PUT, DELETE, PATCH, OPTIONS".to_string(),
        ),
        (
            "Access-Control-Allow-Headers".to_string(),
            "Content-Type, Authorization".to_string(),
        ),
    ])
}

/// Produce the response for a matched endpoint.
///
/// Sleeps for the endpoint's configured delay before returning. The wait
/// yields the executor, so concurrent requests overlap their delays
/// instead of serializing them.
pub async fn synthesize(endpoint: &Endpoint) -> MockResponse {
    if endpoint.delay > 0 {
        tokio::time::sleep(Duration::from_millis(endpoint.delay)).await;
    }
    MockResponse {
        status: endpoint.status,
        status_text: status_text(endpoint.status).to_string(),
        headers: matched_headers(),
        body: endpoint.response.clone(),
    }
}

/// Fixed 404 response for requests no endpoint matches.
pub fn unmatched_response(method: HttpMethod, path: &str) -> MockResponse {
    MockResponse {
        status: 404,
        status_text: status_text(404).to_string(),
        headers: HashMap::from([
            (CONTENT_TYPE_HEADER.to_string(), CONTENT_TYPE_JSON.to_string()),
            (MOCK_SERVER_HEADER.to_string(), MOCK_SERVER_NAME.to_string()),
        ]),
        body: json!({
            "error": "Endpoint not found",
            "path": path,
            "method": method.as_str(),
            "message": "This endpoint is not configured in the mock server",
        }),
    }
}
