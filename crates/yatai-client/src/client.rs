//! The typed control-plane client.

use reqwest::{Client, Method};
use tracing::instrument;
use yatai_types::{
    BentoFullSchema, BentoRepositorySchema, BentoSchema, BentoWithRepositorySchema,
    ClusterFullSchema, CreateDeploymentSchema, DeploymentSchema, DockerRegistryRefSchema,
    ImageBuildStatus, ListQuery, ListSchema, ModelFullSchema, ModelSchema,
    OrganizationFullSchema, RegisterYataiComponentSchema, UpdateBentoImageBuildStatusSchema,
    UpdateDeploymentSchema, VersionSchema, YataiComponentSchema,
};

use crate::endpoint_url::EndpointUrl;
use crate::error::Error;
use crate::headers::{API_TOKEN_HEADER, ORGANIZATION_HEADER, USER_HEADER};
use crate::request::JsonRequestBuilder;

/// Identity headers establishing caller scope, separate from the API token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthHeaders {
    /// Organization id.
    pub org_id: String,
    /// User id.
    pub user_id: String,
}

/// Typed HTTP client for one Yatai control-plane instance.
///
/// Holds the endpoint base URL, the static API token and the identity
/// headers attached to every request. Read-only after construction apart
/// from [`set_auth`](Self::set_auth); a shared reference (e.g. behind an
/// `Arc`) is safe to use from any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct YataiClient {
    endpoint: EndpointUrl,
    api_token: String,
    auth: AuthHeaders,
    http: Client,
}

impl YataiClient {
    /// Create a new client for the given endpoint; no identity set.
    pub fn new(endpoint: EndpointUrl, api_token: impl Into<String>) -> Self {
        Self::with_client(endpoint, api_token, Client::new())
    }

    /// Create a new client executing on a caller-supplied transport.
    ///
    /// Pooling, TLS and proxy configuration belong to the given
    /// `reqwest::Client`.
    pub fn with_client(
        endpoint: EndpointUrl,
        api_token: impl Into<String>,
        http: Client,
    ) -> Self {
        Self {
            endpoint,
            api_token: api_token.into(),
            auth: AuthHeaders::default(),
            http,
        }
    }

    /// Endpoint this client targets.
    pub fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Replace the identity headers for all requests built after this call.
    ///
    /// Full replacement, never a merge. Builders already created keep the
    /// headers they were born with, and requests in flight are unaffected.
    /// The `&mut` receiver is the synchronization contract: to mutate auth
    /// the caller must hold exclusive access to the client.
    pub fn set_auth(&mut self, auth: AuthHeaders) {
        self.auth = auth;
    }

    /// A request builder pre-populated with the three auth headers.
    ///
    /// Unset identity values are sent as empty strings rather than omitted;
    /// the server treats empty as "unauthenticated scope".
    pub fn request(&self) -> JsonRequestBuilder {
        JsonRequestBuilder::new(self.http.clone()).headers([
            (API_TOKEN_HEADER, self.api_token.clone()),
            (ORGANIZATION_HEADER, self.auth.org_id.clone()),
            (USER_HEADER, self.auth.user_id.clone()),
        ])
    }

    /// List bentos across all repositories.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn list_bentos(
        &self,
        query: &ListQuery,
    ) -> Result<ListSchema<BentoWithRepositorySchema>, Error> {
        let url = self
            .endpoint
            .join_paths_with_query(&["api", "v1", "bentos"], &query.to_query_pairs())?;
        self.request().method(Method::GET).url(url).send_json().await
    }

    /// List bentos whose image build status the caller has not yet synced.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn list_image_build_status_unsynced_bentos(
        &self,
    ) -> Result<Vec<BentoWithRepositorySchema>, Error> {
        let url = self
            .endpoint
            .join_paths(&["api", "v1", "image_build_status_unsynced_bentos"])?;
        self.request().method(Method::GET).url(url).send_json().await
    }

    /// Claim a bento's image build for syncing.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn update_bento_image_build_status_syncing_at(
        &self,
        bento_repository_name: &str,
        bento_version: &str,
    ) -> Result<(), Error> {
        let url = self.endpoint.join_paths(&[
            "api",
            "v1",
            "bento_repositories",
            bento_repository_name,
            "bentos",
            bento_version,
            "update_image_build_status_syncing_at",
        ])?;
        self.request().method(Method::PATCH).url(url).send().await?;
        Ok(())
    }

    /// Report a bento's image build status.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn update_bento_image_build_status(
        &self,
        bento_repository_name: &str,
        bento_version: &str,
        status: ImageBuildStatus,
    ) -> Result<(), Error> {
        let url = self.endpoint.join_paths(&[
            "api",
            "v1",
            "bento_repositories",
            bento_repository_name,
            "bentos",
            bento_version,
            "update_image_build_status",
        ])?;
        self.request()
            .method(Method::PATCH)
            .url(url)
            .payload(&UpdateBentoImageBuildStatusSchema {
                image_build_status: status,
            })
            .send()
            .await?;
        Ok(())
    }

    /// Fetch one bento version with its repository and models resolved.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn get_bento(
        &self,
        bento_repository_name: &str,
        bento_version: &str,
    ) -> Result<BentoFullSchema, Error> {
        let url = self.endpoint.join_paths(&[
            "api",
            "v1",
            "bento_repositories",
            bento_repository_name,
            "bentos",
            bento_version,
        ])?;
        self.request().method(Method::GET).url(url).send_json().await
    }

    /// Fetch a bento repository.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn get_bento_repository(
        &self,
        bento_repository_name: &str,
    ) -> Result<BentoRepositorySchema, Error> {
        let url = self.endpoint.join_paths(&[
            "api",
            "v1",
            "bento_repositories",
            bento_repository_name,
        ])?;
        self.request().method(Method::GET).url(url).send_json().await
    }

    /// Ask the control plane to presign a download URL for a bento's
    /// artifact bundle.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn presign_bento_download_url(
        &self,
        bento_repository_name: &str,
        bento_version: &str,
    ) -> Result<BentoSchema, Error> {
        let url = self.endpoint.join_paths(&[
            "api",
            "v1",
            "bento_repositories",
            bento_repository_name,
            "bentos",
            bento_version,
            "presign_download_url",
        ])?;
        self.request().method(Method::PATCH).url(url).send_json().await
    }

    /// Fetch one model version with its repository resolved.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn get_model(
        &self,
        model_repository_name: &str,
        model_version: &str,
    ) -> Result<ModelFullSchema, Error> {
        let url = self.endpoint.join_paths(&[
            "api",
            "v1",
            "model_repositories",
            model_repository_name,
            "models",
            model_version,
        ])?;
        self.request().method(Method::GET).url(url).send_json().await
    }

    /// Ask the control plane to presign a download URL for a model's
    /// artifact.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn presign_model_download_url(
        &self,
        model_repository_name: &str,
        model_version: &str,
    ) -> Result<ModelSchema, Error> {
        let url = self.endpoint.join_paths(&[
            "api",
            "v1",
            "model_repositories",
            model_repository_name,
            "models",
            model_version,
            "presign_download_url",
        ])?;
        self.request().method(Method::PATCH).url(url).send_json().await
    }

    /// Fetch a cluster.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn get_cluster(&self, cluster_name: &str) -> Result<ClusterFullSchema, Error> {
        let url = self
            .endpoint
            .join_paths(&["api", "v1", "clusters", cluster_name])?;
        self.request().method(Method::GET).url(url).send_json().await
    }

    /// Fetch the organization's major cluster.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn get_major_cluster(&self) -> Result<ClusterFullSchema, Error> {
        let url = self
            .endpoint
            .join_paths(&["api", "v1", "current_org", "major_cluster"])?;
        self.request().method(Method::GET).url(url).send_json().await
    }

    /// Fetch the docker registry a cluster pushes and pulls images from.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn get_docker_registry_ref(
        &self,
        cluster_name: &str,
    ) -> Result<DockerRegistryRefSchema, Error> {
        let url = self.endpoint.join_paths(&[
            "api",
            "v1",
            "clusters",
            cluster_name,
            "docker_registry_ref",
        ])?;
        self.request().method(Method::GET).url(url).send_json().await
    }

    /// Fetch a deployment.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn get_deployment(
        &self,
        cluster_name: &str,
        namespace: &str,
        deployment_name: &str,
    ) -> Result<DeploymentSchema, Error> {
        let url = self.endpoint.join_paths(&[
            "api",
            "v1",
            "clusters",
            cluster_name,
            "namespaces",
            namespace,
            "deployments",
            deployment_name,
        ])?;
        self.request().method(Method::GET).url(url).send_json().await
    }

    /// Ask the control plane to re-sync a deployment's observed status.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn sync_deployment_status(
        &self,
        cluster_name: &str,
        namespace: &str,
        deployment_name: &str,
    ) -> Result<DeploymentSchema, Error> {
        let url = self.endpoint.join_paths(&[
            "api",
            "v1",
            "clusters",
            cluster_name,
            "namespaces",
            namespace,
            "deployments",
            deployment_name,
            "sync_status",
        ])?;
        self.request().method(Method::POST).url(url).send_json().await
    }

    /// Create a deployment on a cluster.
    #[instrument(skip(self, schema), fields(endpoint = %self.endpoint))]
    pub async fn create_deployment(
        &self,
        cluster_name: &str,
        schema: &CreateDeploymentSchema,
    ) -> Result<DeploymentSchema, Error> {
        let url = self
            .endpoint
            .join_paths(&["api", "v1", "clusters", cluster_name, "deployments"])?;
        self.request()
            .method(Method::POST)
            .url(url)
            .payload(schema)
            .send_json()
            .await
    }

    /// Update a deployment in place.
    #[instrument(skip(self, schema), fields(endpoint = %self.endpoint))]
    pub async fn update_deployment(
        &self,
        cluster_name: &str,
        namespace: &str,
        deployment_name: &str,
        schema: &UpdateDeploymentSchema,
    ) -> Result<DeploymentSchema, Error> {
        let url = self.endpoint.join_paths(&[
            "api",
            "v1",
            "clusters",
            cluster_name,
            "namespaces",
            namespace,
            "deployments",
            deployment_name,
        ])?;
        self.request()
            .method(Method::PATCH)
            .url(url)
            .payload(schema)
            .send_json()
            .await
    }

    /// Register (or re-register) an in-cluster component.
    #[instrument(skip(self, schema), fields(endpoint = %self.endpoint))]
    pub async fn register_yatai_component(
        &self,
        cluster_name: &str,
        schema: &RegisterYataiComponentSchema,
    ) -> Result<YataiComponentSchema, Error> {
        let url = self.endpoint.join_paths(&[
            "api",
            "v1",
            "clusters",
            cluster_name,
            "yatai_components",
        ])?;
        self.request()
            .method(Method::POST)
            .url(url)
            .payload(schema)
            .send_json()
            .await
    }

    /// Fetch the calling organization.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn get_organization(&self) -> Result<OrganizationFullSchema, Error> {
        let url = self.endpoint.join_paths(&["api", "v1", "current_org"])?;
        self.request().method(Method::GET).url(url).send_json().await
    }

    /// Fetch the control plane's version.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn get_version(&self) -> Result<VersionSchema, Error> {
        let url = self.endpoint.join_paths(&["api", "v1", "version"])?;
        self.request().method(Method::GET).url(url).send_json().await
    }
}
