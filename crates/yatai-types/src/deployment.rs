//! Deployment schemas.

use serde::{Deserialize, Serialize};

use crate::cluster::ClusterSchema;
use crate::resource::ResourceSchema;

/// Observed state of a deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeploymentStatus {
    /// State not yet reported.
    #[default]
    Unknown,
    /// Deployment exists but nothing is deployed.
    NonDeployed,
    /// All replicas healthy.
    Running,
    /// Running but failing health checks.
    Unhealthy,
    /// Rollout failed.
    Failed,
    /// Rollout in progress.
    Deploying,
    /// Teardown in progress.
    Terminating,
    /// Torn down.
    Terminated,
    /// Waiting on an image build.
    ImageBuilding,
    /// The image build failed; nothing was rolled out.
    ImageBuildFailed,
    /// Image built, rollout not yet started.
    ImageBuildSucceeded,
}

impl DeploymentStatus {
    /// Whether the deployment is in a failed state.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed | Self::ImageBuildFailed | Self::Unhealthy)
    }
}

/// One bento a deployment rolls out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentTargetSchema {
    /// Bento repository the target deploys from.
    pub bento_repository: String,
    /// Bento version the target deploys.
    pub bento: String,
    /// Target configuration (resources, autoscaling, env), passed through
    /// opaquely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
}

/// A deployment of one or more bentos onto a cluster namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentSchema {
    /// Common resource fields.
    #[serde(flatten)]
    pub resource: ResourceSchema,
    /// Observed state.
    #[serde(default)]
    pub status: DeploymentStatus,
    /// Cluster the deployment runs on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<ClusterSchema>,
    /// Namespace the deployment runs in.
    #[serde(default)]
    pub kube_namespace: String,
    /// Ingress URLs, once exposed.
    #[serde(default)]
    pub urls: Vec<String>,
    /// Bentos the deployment rolls out.
    #[serde(default)]
    pub targets: Vec<DeploymentTargetSchema>,
}

/// Payload for creating a deployment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateDeploymentSchema {
    /// Deployment name.
    pub name: String,
    /// Namespace to deploy into.
    pub kube_namespace: String,
    /// Bentos to roll out.
    pub targets: Vec<DeploymentTargetSchema>,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Register the deployment without rolling anything out.
    #[serde(default)]
    pub do_not_deploy: bool,
}

/// Payload for updating a deployment in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDeploymentSchema {
    /// Replacement target set.
    pub targets: Vec<DeploymentTargetSchema>,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Apply the update without rolling anything out.
    #[serde(default)]
    pub do_not_deploy: bool,
}
