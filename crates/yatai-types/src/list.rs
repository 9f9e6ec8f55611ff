//! List queries and the paged list envelope.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Offset of the first item to return.
    pub start: u64,
    /// Maximum number of items to return.
    pub count: u64,
    /// Free-text search expression.
    #[serde(default)]
    pub q: String,
}

impl ListQuery {
    /// Page query with no search expression.
    pub fn page(start: u64, count: u64) -> Self {
        Self {
            start,
            count,
            q: String::new(),
        }
    }

    /// Query-string pairs in the order the API expects.
    ///
    /// `q` is always present, empty or not; the server treats the empty
    /// string as "no filter".
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("start", self.start.to_string()),
            ("count", self.count.to_string()),
            ("q", self.q.clone()),
        ]
    }
}

/// Paged envelope returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSchema<T> {
    /// Total number of items matching the query.
    pub total: u64,
    /// Offset of the first returned item.
    pub start: u64,
    /// Number of items requested.
    pub count: u64,
    /// The page of items.
    pub items: Vec<T>,
}

impl<T> ListSchema<T> {
    /// Whether more pages exist past this one.
    pub fn has_more(&self) -> bool {
        self.start + (self.items.len() as u64) < self.total
    }
}
