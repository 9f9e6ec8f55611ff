//! Organization schemas.

use serde::{Deserialize, Serialize};

use crate::resource::ResourceSchema;
use crate::user::UserSchema;

/// An organization, the top-level ownership scope for every other resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationSchema {
    /// Common resource fields.
    #[serde(flatten)]
    pub resource: ResourceSchema,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// User that created the organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<UserSchema>,
}

/// Organization with its server-side configuration attached.
///
/// Returned by the current-organization endpoint; the config blob is
/// operator-defined and passed through opaquely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationFullSchema {
    /// The organization itself.
    #[serde(flatten)]
    pub organization: OrganizationSchema,
    /// Opaque organization configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
}
