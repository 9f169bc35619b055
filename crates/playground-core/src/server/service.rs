//! Per-request serving against an installed snapshot.

use crate::matching::RouteTable;
use crate::response::{synthesize, unmatched_response, MockResponse};
use crate::server::activity::{ActivityEntry, ActivityLog};
use crate::types::HttpMethod;
use std::sync::Arc;
use tracing::debug;

/// Handle for serving requests against the snapshot captured at start.
///
/// Clones share the same snapshot and activity log. A clone taken while
/// the server was running keeps serving until dropped, so requests in
/// flight drain naturally across a stop.
#[derive(Debug, Clone)]
pub struct MockService {
    table: Arc<RouteTable>,
    activity: ActivityLog,
}

impl MockService {
    pub(crate) fn new(table: Arc<RouteTable>, activity: ActivityLog) -> Self {
        Self { table, activity }
    }

    /// Serve one request.
    ///
    /// A matching endpoint yields its synthesized response after the
    /// configured delay; anything else yields the fixed 404. Either way
    /// the request is recorded in the activity log.
    pub async fn handle(&self, method: HttpMethod, path: &str) -> MockResponse {
        debug!("Handling request: {} {}", method, path);
        match self.table.resolve(method, path) {
            Some(endpoint) => {
                let name = endpoint.name.clone();
                let response = synthesize(endpoint).await;
                self.activity.record(ActivityEntry::now(
                    method,
                    path,
                    response.status,
                    format!("Served '{}'", name),
                ));
                response
            }
            None => {
                let response = unmatched_response(method, path);
                self.activity.record(ActivityEntry::now(
                    method,
                    path,
                    response.status,
                    "No matching endpoint",
                ));
                response
            }
        }
    }

    /// Snapshot this service resolves against
    pub fn routes(&self) -> &RouteTable {
        &self.table
    }
}
