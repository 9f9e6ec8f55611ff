//! Model and model repository schemas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bento::ImageBuildStatus;
use crate::resource::ResourceSchema;

/// A model repository: the named home of a family of model versions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRepositorySchema {
    /// Common resource fields.
    #[serde(flatten)]
    pub resource: ResourceSchema,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
}

/// Build-time manifest describing a model version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelManifestSchema {
    /// Framework module that produced the model.
    #[serde(default)]
    pub module: String,
    /// Model API version.
    #[serde(default)]
    pub api_version: String,
    /// Version of the packaging toolchain that saved the model.
    #[serde(default)]
    pub bentoml_version: String,
    /// Total artifact size in bytes.
    #[serde(default)]
    pub size_bytes: u64,
}

/// One version of a model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSchema {
    /// Common resource fields; `name` holds the version string.
    #[serde(flatten)]
    pub resource: ResourceSchema,
    /// Version string, unique within the repository.
    pub version: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Image build state for the model's runner image.
    #[serde(default)]
    pub image_build_status: ImageBuildStatus,
    /// Short-lived URL for downloading the artifact, when presigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presigned_download_url: Option<String>,
    /// Build-time manifest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<ModelManifestSchema>,
    /// When the model was saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_at: Option<DateTime<Utc>>,
}

/// Model version together with the repository it lives in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelFullSchema {
    /// The model version.
    #[serde(flatten)]
    pub model: ModelSchema,
    /// Its repository.
    pub repository: ModelRepositorySchema,
}
