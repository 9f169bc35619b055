//! Bounded activity log of handled requests.

use crate::types::HttpMethod;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Arc;

/// Default number of entries kept before the oldest are dropped
pub const DEFAULT_ACTIVITY_CAPACITY: usize = 500;

/// One handled request in the activity log
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActivityEntry {
    /// When the request was handled
    pub timestamp: DateTime<Utc>,
    /// HTTP method of the request
    pub method: HttpMethod,
    /// Request path
    pub path: String,
    /// Status of the synthesized response
    pub status: u16,
    /// Short note about how the request was served
    pub message: String,
}

impl ActivityEntry {
    /// Entry timestamped now
    pub fn now(
        method: HttpMethod,
        path: impl Into<String>,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            method,
            path: path.into(),
            status,
            message: message.into(),
        }
    }
}

/// Shared append-only log with a fixed capacity.
///
/// Appending to a full log drops the oldest entry. Clones share the
/// same underlying buffer.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    inner: Arc<Mutex<VecDeque<ActivityEntry>>>,
    capacity: usize,
}

impl ActivityLog {
    /// Log with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ACTIVITY_CAPACITY)
    }

    /// Log keeping at most `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest when at capacity.
    pub fn record(&self, entry: ActivityEntry) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.inner.lock();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Snapshot of entries, oldest first
    pub fn entries(&self) -> Vec<ActivityEntry> {
        self.inner.lock().iter().cloned().collect()
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether the log holds no entries
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Drop all entries
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}
