//! User schema.

use serde::{Deserialize, Serialize};

use crate::resource::ResourceSchema;

/// A control-plane user account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSchema {
    /// Common resource fields.
    #[serde(flatten)]
    pub resource: ResourceSchema,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
}
