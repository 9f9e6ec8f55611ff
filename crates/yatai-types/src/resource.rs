//! Base fields shared by every named API resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields common to every named resource managed by the control plane.
///
/// Flattened into the concrete resource schemas so the wire format stays a
/// single flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSchema {
    /// Server-assigned unique id.
    pub uid: String,
    /// Resource name, unique within its scope.
    pub name: String,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Soft-deletion time, if the resource has been deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ResourceSchema {
    /// Whether the resource has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
