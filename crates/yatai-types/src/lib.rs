//! Schema types for the Yatai deployment control-plane API.
//!
//! Pure data crate: everything here is a serde-derived mirror of the wire
//! format the control plane speaks. No I/O, no transport concerns; the
//! typed HTTP client in `yatai-client` moves these in and out.

pub mod bento;
pub mod cluster;
pub mod component;
pub mod deployment;
pub mod list;
pub mod model;
pub mod organization;
pub mod resource;
pub mod user;
pub mod version;

pub use bento::{
    BentoFullSchema, BentoManifestSchema, BentoRepositorySchema, BentoSchema,
    BentoWithRepositorySchema, ImageBuildStatus, UpdateBentoImageBuildStatusSchema, UploadStatus,
};
pub use cluster::{ClusterFullSchema, ClusterSchema, DockerRegistryRefSchema};
pub use component::{RegisterYataiComponentSchema, YataiComponentSchema, YataiComponentType};
pub use deployment::{
    CreateDeploymentSchema, DeploymentSchema, DeploymentStatus, DeploymentTargetSchema,
    UpdateDeploymentSchema,
};
pub use list::{ListQuery, ListSchema};
pub use model::{ModelFullSchema, ModelManifestSchema, ModelRepositorySchema, ModelSchema};
pub use organization::{OrganizationFullSchema, OrganizationSchema};
pub use resource::ResourceSchema;
pub use user::UserSchema;
pub use version::VersionSchema;
