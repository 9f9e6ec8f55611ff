//! Control-plane version schema.

use serde::{Deserialize, Serialize};

/// Version information reported by the control plane.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSchema {
    /// Release version.
    pub version: String,
    /// Git commit the release was built from.
    #[serde(default)]
    pub git_commit: String,
    /// Build timestamp, as reported by the server.
    #[serde(default)]
    pub build_date: String,
}
