//! Cluster schemas.

use serde::{Deserialize, Serialize};

use crate::organization::OrganizationSchema;
use crate::resource::ResourceSchema;
use crate::user::UserSchema;

/// A Kubernetes cluster registered with the control plane.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSchema {
    /// Common resource fields.
    #[serde(flatten)]
    pub resource: ResourceSchema,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// User that registered the cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<UserSchema>,
}

/// Cluster with organization and access configuration attached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterFullSchema {
    /// The cluster itself.
    #[serde(flatten)]
    pub cluster: ClusterSchema,
    /// Organization the cluster belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<OrganizationSchema>,
    /// Kubeconfig granting access to the cluster, when the caller may see it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kube_config: Option<String>,
    /// Opaque cluster configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
}

/// Reference to the docker registry a cluster pushes and pulls images from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerRegistryRefSchema {
    /// Registry host.
    pub server: String,
    /// Repository URI for bento images.
    pub bentos_repository_uri: String,
    /// Repository URI for model images.
    pub models_repository_uri: String,
    /// Registry username.
    #[serde(default)]
    pub username: String,
    /// Registry password.
    #[serde(default)]
    pub password: String,
    /// Whether the registry is reached over TLS.
    #[serde(default)]
    pub secure: bool,
}
