//! Core endpoint types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// HTTP method an endpoint responds to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Uppercase wire form of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque endpoint identifier assigned by the registry.
///
/// Identifiers are monotonically increasing and never reused, even after
/// the endpoint they named has been removed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EndpointId(u64);

impl EndpointId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Endpoint definition supplied by a caller.
///
/// Input value for registration and for endpoint files; the registry
/// assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndpointDef {
    /// Human-readable endpoint name
    #[serde(default)]
    pub name: String,
    /// HTTP method to match
    pub method: HttpMethod,
    /// Request path to match (must start with '/')
    pub path: String,
    /// Response body returned on a match
    #[serde(default)]
    pub response: Value,
    /// HTTP status code of the mocked response
    #[serde(default = "default_status")]
    pub status: u16,
    /// Simulated latency in milliseconds
    #[serde(default)]
    pub delay: u64,
}

fn default_status() -> u16 {
    200
}

impl EndpointDef {
    /// The `GET /api/users` endpoint the playground seeds new sessions with
    pub fn sample_users() -> Self {
        Self {
            name: "Get Users".to_string(),
            method: HttpMethod::Get,
            path: "/api/users".to_string(),
            response: serde_json::json!({
                "users": [
                    { "id": 1, "name": "John Doe", "email": "john@example.com" },
                    { "id": 2, "name": "Jane Smith", "email": "jane@example.com" }
                ]
            }),
            status: 200,
            delay: 0,
        }
    }

    /// Attach a registry-assigned id to this definition
    pub fn into_endpoint(self, id: EndpointId) -> Endpoint {
        Endpoint {
            id,
            name: self.name,
            method: self.method,
            path: self.path,
            response: self.response,
            status: self.status,
            delay: self.delay,
        }
    }
}

/// Registered endpoint with its assigned id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Endpoint {
    /// Identifier assigned at registration
    pub id: EndpointId,
    /// Human-readable endpoint name
    pub name: String,
    /// HTTP method to match
    pub method: HttpMethod,
    /// Request path to match
    pub path: String,
    /// Response body returned on a match
    pub response: Value,
    /// HTTP status code of the mocked response
    pub status: u16,
    /// Simulated latency in milliseconds
    pub delay: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(HttpMethod::Get, "\"GET\"")]
    #[case(HttpMethod::Post, "\"POST\"")]
    #[case(HttpMethod::Put, "\"PUT\"")]
    #[case(HttpMethod::Delete, "\"DELETE\"")]
    #[case(HttpMethod::Patch, "\"PATCH\"")]
    fn test_http_method_serializes_uppercase(#[case] method: HttpMethod, #[case] expected: &str) {
        let json = serde_json::to_string(&method).expect("Should serialize");
        assert_eq!(json, expected);
        let deserialized: HttpMethod = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(deserialized, method);
    }

    #[rstest]
    #[case("\"TRACE\"")]
    #[case("\"HEAD\"")]
    #[case("\"OPTIONS\"")]
    #[case("\"get\"")]
    fn test_http_method_rejects_unknown(#[case] input: &str) {
        let result: Result<HttpMethod, _> = serde_json::from_str(input);
        assert!(result.is_err());
    }

    #[rstest]
    #[case(HttpMethod::Get, "GET")]
    #[case(HttpMethod::Patch, "PATCH")]
    fn test_http_method_display(#[case] method: HttpMethod, #[case] expected: &str) {
        assert_eq!(method.to_string(), expected);
    }

    #[rstest]
    fn test_endpoint_def_defaults() {
        let def: EndpointDef =
            serde_json::from_str(r#"{"method": "GET", "path": "/api/users"}"#)
                .expect("Should deserialize");
        assert_eq!(def.name, "");
        assert_eq!(def.response, Value::Null);
        assert_eq!(def.status, 200);
        assert_eq!(def.delay, 0);
    }

    #[rstest]
    fn test_endpoint_def_full() {
        let def: EndpointDef = serde_json::from_str(
            r#"{
                "name": "Create User",
                "method": "POST",
                "path": "/api/users",
                "response": {"id": 3},
                "status": 201,
                "delay": 250
            }"#,
        )
        .expect("Should deserialize");
        assert_eq!(def.name, "Create User");
        assert_eq!(def.method, HttpMethod::Post);
        assert_eq!(def.path, "/api/users");
        assert_eq!(def.response, json!({"id": 3}));
        assert_eq!(def.status, 201);
        assert_eq!(def.delay, 250);
    }

    #[rstest]
    fn test_endpoint_def_rejects_negative_delay() {
        let result: Result<EndpointDef, _> = serde_json::from_str(
            r#"{"method": "GET", "path": "/api/users", "delay": -5}"#,
        );
        assert!(result.is_err());
    }

    #[rstest]
    fn test_into_endpoint_keeps_fields() {
        let def = EndpointDef::sample_users();
        let endpoint = def.clone().into_endpoint(EndpointId::new(7));
        assert_eq!(endpoint.id, EndpointId::new(7));
        assert_eq!(endpoint.name, def.name);
        assert_eq!(endpoint.method, def.method);
        assert_eq!(endpoint.path, def.path);
        assert_eq!(endpoint.response, def.response);
        assert_eq!(endpoint.status, def.status);
        assert_eq!(endpoint.delay, def.delay);
    }

    #[rstest]
    fn test_sample_users_shape() {
        let def = EndpointDef::sample_users();
        assert_eq!(def.method, HttpMethod::Get);
        assert_eq!(def.path, "/api/users");
        assert_eq!(def.response["users"].as_array().map(|u| u.len()), Some(2));
    }
}
