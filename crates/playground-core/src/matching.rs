//! Request matching against an installed endpoint snapshot.

use crate::types::{Endpoint, HttpMethod};

/// Immutable route table captured from the registry when the server starts.
///
/// Lookup is an in-order scan over the registration order, so two
/// endpoints registered for the same method and path deterministically
/// resolve to the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    endpoints: Vec<Endpoint>,
}

impl RouteTable {
    /// Build a table from endpoints in registration order
    pub fn new(endpoints: Vec<Endpoint>) -> Self {
        Self { endpoints }
    }

    /// Find the first endpoint matching the method and path exactly.
    ///
    /// Paths compare case-sensitively and no normalization is applied:
    /// `/api/users` and `/api/users/` are different routes, and a query
    /// string must be stripped by the caller before resolving.
    pub fn resolve(&self, method: HttpMethod, path: &str) -> Option<&Endpoint> {
        self.endpoints
            .iter()
            .find(|e| e.method == method && e.path == path)
    }

    /// All endpoints in the table, in registration order
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// Number of endpoints in the table
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EndpointDef, EndpointId};
    use rstest::rstest;
    use serde_json::json;

    fn create_test_endpoint(id: u64, method: HttpMethod, path: &str, name: &str) -> Endpoint {
        EndpointDef {
            name: name.to_string(),
            method,
            path: path.to_string(),
            response: json!({"from": name}),
            status: 200,
            delay: 0,
        }
        .into_endpoint(EndpointId::new(id))
    }

    fn sample_table() -> RouteTable {
        RouteTable::new(vec![
            create_test_endpoint(1, HttpMethod::Get, "/api/users", "users"),
            create_test_endpoint(2, HttpMethod::Post, "/api/users", "create-user"),
            create_test_endpoint(3, HttpMethod::Get, "/api/posts", "posts"),
        ])
    }

    #[rstest]
    #[case(HttpMethod::Get, "/api/users", Some("users"))]
    #[case(HttpMethod::Post, "/api/users", Some("create-user"))]
    #[case(HttpMethod::Get, "/api/posts", Some("posts"))]
    #[case(HttpMethod::Get, "/api/comments", None)]
    #[case(HttpMethod::Delete, "/api/users", None)]
    fn test_resolve_exact(
        #[case] method: HttpMethod,
        #[case] path: &str,
        #[case] expected: Option<&str>,
    ) {
        let table = sample_table();
        let found = table.resolve(method, path);
        assert_eq!(found.map(|e| e.name.as_str()), expected);
    }

    #[rstest]
    #[case("/API/users")]
    #[case("/api/Users")]
    #[case("/api/users/")]
    #[case("/api/users?page=1")]
    #[case("api/users")]
    #[case("/api/users/1")]
    fn test_resolve_no_normalization(#[case] path: &str) {
        let table = sample_table();
        assert!(table.resolve(HttpMethod::Get, path).is_none());
    }

    #[rstest]
    fn test_resolve_duplicate_first_registered_wins() {
        let table = RouteTable::new(vec![
            create_test_endpoint(1, HttpMethod::Get, "/api/dup", "first"),
            create_test_endpoint(2, HttpMethod::Get, "/api/dup", "second"),
        ]);

        // Repeated resolution is stable
        for _ in 0..10 {
            let found = table.resolve(HttpMethod::Get, "/api/dup").unwrap();
            assert_eq!(found.name, "first");
        }
    }

    #[rstest]
    fn test_empty_table() {
        let table = RouteTable::default();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.resolve(HttpMethod::Get, "/api/users").is_none());
    }

    #[rstest]
    fn test_endpoints_keep_registration_order() {
        let table = sample_table();
        let names: Vec<&str> = table.endpoints().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["users", "create-user", "posts"]);
    }
}
