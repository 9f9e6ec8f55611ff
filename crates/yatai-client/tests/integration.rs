//! Integration tests for yatai-client using mockito

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use yatai_client::{AuthHeaders, EndpointUrl, Error, Method, YataiClient};
use yatai_types::{
    CreateDeploymentSchema, DeploymentStatus, DeploymentTargetSchema, ImageBuildStatus, ListQuery,
};

fn client_for(server: &mockito::ServerGuard) -> YataiClient {
    let endpoint = EndpointUrl::from_str(&server.url()).expect("valid endpoint url");
    YataiClient::new(endpoint, "test-token")
}

// === Auth header tests ===

#[tokio::test]
async fn test_auth_headers_sent_empty_when_unset() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/v1/version")
        .match_header("x-yatai-api-token", "test-token")
        .match_header("x-yatai-organization-id", "")
        .match_header("x-yatai-user-id", "")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"version": "1.1.0", "git_commit": "abc123"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let version = client.get_version().await.expect("request should succeed");

    assert_eq!(version.version, "1.1.0");
    assert_eq!(version.git_commit, "abc123");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_set_auth_applies_to_requests_built_after_it() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/v1/version")
        .match_header("x-yatai-api-token", "test-token")
        .match_header("x-yatai-organization-id", "org-1")
        .match_header("x-yatai-user-id", "user-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"version": "1.1.0"}"#)
        .create_async()
        .await;

    let mut client = client_for(&server);
    client.set_auth(AuthHeaders {
        org_id: "org-1".to_string(),
        user_id: "user-1".to_string(),
    });

    client.get_version().await.expect("request should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_builder_created_before_set_auth_keeps_old_headers() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/v1/version")
        .match_header("x-yatai-organization-id", "")
        .match_header("x-yatai-user-id", "")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"version": "1.1.0"}"#)
        .create_async()
        .await;

    let mut client = client_for(&server);
    let url = client
        .endpoint()
        .join_paths(&["api", "v1", "version"])
        .expect("joins");
    let builder = client.request().method(Method::GET).url(url);

    // replacing auth must not reach back into an existing builder
    client.set_auth(AuthHeaders {
        org_id: "org-1".to_string(),
        user_id: "user-1".to_string(),
    });

    builder.send().await.expect("request should succeed");

    mock.assert_async().await;
}

// === Typed endpoint tests ===

#[tokio::test]
async fn test_list_bentos_sends_paging_query() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/v1/bentos")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("start".into(), "0".into()),
            mockito::Matcher::UrlEncoded("count".into(), "20".into()),
            mockito::Matcher::UrlEncoded("q".into(), "iris".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "total": 1,
                "start": 0,
                "count": 20,
                "items": [{
                    "uid": "bento-1",
                    "name": "v1",
                    "version": "v1",
                    "image_build_status": "success",
                    "upload_status": "success",
                    "repository": {"uid": "repo-1", "name": "iris_classifier"}
                }]
            }"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let query = ListQuery {
        start: 0,
        count: 20,
        q: "iris".to_string(),
    };
    let bentos = client
        .list_bentos(&query)
        .await
        .expect("request should succeed");

    assert_eq!(bentos.total, 1);
    assert_eq!(bentos.items.len(), 1);
    assert_eq!(bentos.items[0].bento.version, "v1");
    assert_eq!(bentos.items[0].repository.resource.name, "iris_classifier");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_bento_decodes_full_schema() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/v1/bento_repositories/iris_classifier/bentos/v1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "uid": "bento-1",
                "name": "v1",
                "created_at": "2025-05-01T12:00:00Z",
                "version": "v1",
                "image_build_status": "building",
                "upload_status": "success",
                "manifest": {
                    "service": "iris_classifier:svc",
                    "bentoml_version": "1.2.0",
                    "size_bytes": 1048576,
                    "models": ["iris_clf:v1"]
                },
                "repository": {"uid": "repo-1", "name": "iris_classifier"},
                "models": [{
                    "uid": "model-1",
                    "name": "v1",
                    "version": "v1",
                    "image_build_status": "success"
                }]
            }"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let bento = client
        .get_bento("iris_classifier", "v1")
        .await
        .expect("request should succeed");

    let inner = &bento.bento_with_repository.bento;
    assert_eq!(inner.version, "v1");
    assert_eq!(inner.image_build_status, ImageBuildStatus::Building);
    assert!(!inner.image_build_status.is_terminal());
    assert_eq!(
        inner.manifest.as_ref().map(|m| m.size_bytes),
        Some(1_048_576)
    );
    assert_eq!(bento.models.len(), 1);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_deployment_posts_payload() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/api/v1/clusters/default/deployments")
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "name": "iris",
            "kube_namespace": "prod",
            "targets": [{"bento_repository": "iris_classifier", "bento": "v1"}],
            "do_not_deploy": false
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "uid": "deploy-1",
                "name": "iris",
                "status": "deploying",
                "kube_namespace": "prod"
            }"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let schema = CreateDeploymentSchema {
        name: "iris".to_string(),
        kube_namespace: "prod".to_string(),
        targets: vec![DeploymentTargetSchema {
            bento_repository: "iris_classifier".to_string(),
            bento: "v1".to_string(),
            config: None,
        }],
        description: None,
        do_not_deploy: false,
    };
    let deployment = client
        .create_deployment("default", &schema)
        .await
        .expect("request should succeed");

    assert_eq!(deployment.status, DeploymentStatus::Deploying);
    assert_eq!(deployment.kube_namespace, "prod");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_image_build_status_patches_payload() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock(
            "PATCH",
            "/api/v1/bento_repositories/iris_classifier/bentos/v1/update_image_build_status",
        )
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "image_build_status": "success"
        })))
        .with_status(200)
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .update_bento_image_build_status("iris_classifier", "v1", ImageBuildStatus::Success)
        .await
        .expect("request should succeed");

    mock.assert_async().await;
}

// === Error taxonomy tests ===

#[tokio::test]
async fn test_status_error_preserves_raw_body() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/v1/bento_repositories/missing/bentos/v1")
        .with_status(404)
        .with_body("no such bento")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .get_bento("missing", "v1")
        .await
        .expect_err("request must fail");

    assert_eq!(err.status(), Some(404));
    match &err {
        Error::Status { response } => {
            assert_eq!(response.status(), 404);
            assert!(response.is_client_error());
            assert_eq!(response.body(), b"no such bento");
        }
        other => panic!("expected Error::Status, got {other:?}"),
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_decode_error_keeps_raw_response() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/v1/version")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not valid json")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .get_version()
        .await
        .expect_err("request must fail to decode");

    match &err {
        Error::Decode { response, .. } => {
            assert_eq!(response.status(), 200);
            assert_eq!(response.text_lossy(), "not valid json");
        }
        other => panic!("expected Error::Decode, got {other:?}"),
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // nothing listens on port 1
    let endpoint = EndpointUrl::from_str("http://127.0.0.1:1").expect("valid endpoint url");
    let client = YataiClient::new(endpoint, "test-token");

    let err = client.get_version().await.expect_err("request must fail");

    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    // bound but never accepted: the round trip can only end by deadline
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let addr = listener.local_addr().expect("local addr");

    let endpoint = EndpointUrl::from_str(&format!("http://{addr}")).expect("valid endpoint url");
    let client = YataiClient::new(endpoint.clone(), "test-token");
    let url = endpoint
        .join_paths(&["api", "v1", "version"])
        .expect("joins");

    let result = client
        .request()
        .method(Method::GET)
        .url(url)
        .timeout(Duration::from_millis(100))
        .send()
        .await;

    assert!(matches!(result, Err(Error::Transport(_))));
}

// === Generic builder tests ===

#[derive(Debug, Deserialize)]
struct Narrow {
    a: i64,
}

#[tokio::test]
async fn test_send_json_decodes_into_caller_shape() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/v1/narrow")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"a": 1}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let url = client
        .endpoint()
        .join_paths(&["api", "v1", "narrow"])
        .expect("joins");
    let narrow: Narrow = client
        .request()
        .method(Method::GET)
        .url(url)
        .send_json()
        .await
        .expect("request should succeed");

    assert_eq!(narrow.a, 1);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_send_validates_status_without_decoding() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/api/v1/clusters/default/deployments/sync")
        .with_status(200)
        .with_body("ignored free-form body")
        .create_async()
        .await;

    let client = client_for(&server);
    let url = client
        .endpoint()
        .join_paths(&["api", "v1", "clusters", "default", "deployments", "sync"])
        .expect("joins");
    let response = client
        .request()
        .method(Method::POST)
        .url(url)
        .send()
        .await
        .expect("request should succeed");

    assert!(response.is_success());

    mock.assert_async().await;
}
