//! Header names the control plane authenticates by.

/// Header carrying the static API token.
pub const API_TOKEN_HEADER: &str = "X-YATAI-API-TOKEN";

/// Header scoping the call to an organization.
pub const ORGANIZATION_HEADER: &str = "X-YATAI-ORGANIZATION-ID";

/// Header identifying the calling user.
pub const USER_HEADER: &str = "X-YATAI-USER-ID";
