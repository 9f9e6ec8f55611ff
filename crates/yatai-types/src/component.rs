//! Yatai component schemas.
//!
//! Components are the in-cluster agents (deployment operator, image builder,
//! observability stacks) that register themselves with the control plane and
//! heartbeat against it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cluster::ClusterSchema;
use crate::resource::ResourceSchema;

/// Kind of in-cluster component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YataiComponentType {
    /// Deployment reconciliation operator.
    Deployment,
    /// Image builder.
    ImageBuilder,
    /// Metrics stack.
    Monitoring,
    /// Log collection stack.
    Logging,
}

/// A registered in-cluster component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YataiComponentSchema {
    /// Common resource fields.
    #[serde(flatten)]
    pub resource: ResourceSchema,
    /// Component kind.
    #[serde(rename = "type")]
    pub kind: YataiComponentType,
    /// Component release version.
    #[serde(default)]
    pub version: String,
    /// Namespace the component runs in.
    #[serde(default)]
    pub kube_namespace: String,
    /// Cluster the component runs on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<ClusterSchema>,
    /// Last heartbeat received from the component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_heartbeat_at: Option<DateTime<Utc>>,
}

/// Payload for registering (or re-registering) a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterYataiComponentSchema {
    /// Component kind.
    #[serde(rename = "type")]
    pub kind: YataiComponentType,
    /// Component release version.
    pub version: String,
    /// Namespace the component runs in.
    pub kube_namespace: String,
}
