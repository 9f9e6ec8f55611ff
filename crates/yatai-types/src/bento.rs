//! Bento and bento repository schemas.
//!
//! A bento is a named, versioned deployable artifact. Versions live under a
//! bento repository and carry image build and upload state the operator
//! synchronizes against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ModelSchema;
use crate::resource::ResourceSchema;

/// Image build lifecycle of a bento version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageBuildStatus {
    /// No build requested yet.
    #[default]
    Pending,
    /// Image build in progress.
    Building,
    /// Image built and pushed.
    Success,
    /// Image build failed.
    Failed,
}

impl ImageBuildStatus {
    /// Whether the build has reached a final state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Failed)
    }
}

/// Upload lifecycle of a bento version's artifact bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    /// Upload not started.
    #[default]
    Pending,
    /// Upload in progress.
    Uploading,
    /// Artifact stored.
    Success,
    /// Upload failed.
    Failed,
}

/// A bento repository: the named home of a family of bento versions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BentoRepositorySchema {
    /// Common resource fields.
    #[serde(flatten)]
    pub resource: ResourceSchema,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
}

/// Build-time manifest describing a bento version's contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BentoManifestSchema {
    /// Service entry point the bento serves.
    #[serde(default)]
    pub service: String,
    /// Version of the packaging toolchain that produced the bento.
    #[serde(default)]
    pub bentoml_version: String,
    /// Total artifact size in bytes.
    #[serde(default)]
    pub size_bytes: u64,
    /// Model tags the bento depends on.
    #[serde(default)]
    pub models: Vec<String>,
}

/// One version of a bento.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BentoSchema {
    /// Common resource fields; `name` holds the version string.
    #[serde(flatten)]
    pub resource: ResourceSchema,
    /// Version string, unique within the repository.
    pub version: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Image build state.
    #[serde(default)]
    pub image_build_status: ImageBuildStatus,
    /// Artifact upload state.
    #[serde(default)]
    pub upload_status: UploadStatus,
    /// Last time an operator claimed the image build for syncing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_build_status_syncing_at: Option<DateTime<Utc>>,
    /// Last time the image build state changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_build_status_updated_at: Option<DateTime<Utc>>,
    /// Short-lived URL for downloading the artifact bundle, when presigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presigned_download_url: Option<String>,
    /// Build-time manifest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<BentoManifestSchema>,
    /// When the bento was built.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_at: Option<DateTime<Utc>>,
}

/// Bento version together with the repository it lives in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BentoWithRepositorySchema {
    /// The bento version.
    #[serde(flatten)]
    pub bento: BentoSchema,
    /// Its repository.
    pub repository: BentoRepositorySchema,
}

/// Bento version with repository and resolved model dependencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BentoFullSchema {
    /// Bento plus repository.
    #[serde(flatten)]
    pub bento_with_repository: BentoWithRepositorySchema,
    /// Models the bento depends on.
    #[serde(default)]
    pub models: Vec<ModelSchema>,
}

/// Payload for the image-build-status update endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBentoImageBuildStatusSchema {
    /// New build state.
    pub image_build_status: ImageBuildStatus,
}
