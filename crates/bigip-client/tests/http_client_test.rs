// HTTP-level tests for `BigIpClient` using wiremock.

use bigip_client::{Auth, BigIpClient, BigIpClientTrait, BigIpError, ObjectName, ResourcePath};
use serde_json::json;
use wiremock::matchers::{basic_auth, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

fn basic() -> Auth {
    Auth::Basic {
        username: "admin".to_string(),
        password: "secret".to_string(),
    }
}

async fn setup() -> (MockServer, BigIpClient) {
    let server = MockServer::start().await;
    let client = BigIpClient::from_reqwest(server.uri(), reqwest::Client::new(), basic());
    (server, client)
}

fn pool() -> ResourcePath {
    ResourcePath::named("ltm/pool", ObjectName::partitioned("web", "Common"))
}

fn not_found(name: &str) -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({
        "code": 404,
        "message": format!("01020036:3: The requested Pool ({}) was not found.", name),
        "errorStack": [],
        "apiError": 3
    }))
}

// ── Reads ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_load_expands_subcollections() {
    let (server, client) = setup().await;
    let virtual_server = ResourcePath::named("ltm/virtual", ObjectName::partitioned("vs", "Common"));

    Mock::given(method("GET"))
        .and(path("/mgmt/tm/ltm/virtual/~Common~vs"))
        .and(query_param("expandSubcollections", "true"))
        .and(basic_auth("admin", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "tm:ltm:virtual:virtualstate",
            "name": "vs",
            "partition": "Common",
            "fullPath": "/Common/vs",
            "generation": 7,
            "destination": "/Common/10.0.0.10:443",
            "profilesReference": {
                "link": "https://localhost/mgmt/tm/ltm/virtual/~Common~vs/profiles?ver=15.1.0",
                "isSubcollection": true,
                "items": [{"name": "http", "partition": "Common", "fullPath": "/Common/http"}]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let object = client.load(&virtual_server).await.unwrap();

    assert_eq!(object.full_path.as_deref(), Some("/Common/vs"));
    assert_eq!(object.get("destination"), Some(&json!("/Common/10.0.0.10:443")));
    assert_eq!(object.get("profiles").unwrap()[0]["fullPath"], json!("/Common/http"));
}

#[tokio::test]
async fn test_missing_object_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/mgmt/tm/ltm/pool/~Common~web"))
        .respond_with(not_found("/Common/web"))
        .mount(&server)
        .await;

    let err = client.load(&pool()).await.unwrap_err();
    match err {
        BigIpError::NotFound(msg) => assert!(msg.contains("01020036:3"), "unexpected message: {}", msg),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert!(!client.exists(&pool()).await.unwrap());
}

#[tokio::test]
async fn test_exists() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/mgmt/tm/ltm/pool/~Common~web"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "web"})))
        .mount(&server)
        .await;

    assert!(client.exists(&pool()).await.unwrap());
}

#[tokio::test]
async fn test_unauthorized_is_authentication_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/mgmt/tm/sys/version"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 401,
            "message": "Authorization failed: user=admin resource=/mgmt/tm/sys/version",
            "errorStack": []
        })))
        .mount(&server)
        .await;

    let err = client.validate_credentials().await.unwrap_err();
    match err {
        BigIpError::Authentication(msg) => assert!(msg.contains("Authorization failed")),
        other => panic!("expected Authentication, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_is_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/mgmt/tm/ltm/pool/~Common~web"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>Service Unavailable</html>"))
        .mount(&server)
        .await;

    let err = client.load(&pool()).await.unwrap_err();
    assert!(matches!(err, BigIpError::Api(ref msg) if msg.contains("503") && msg.contains("Service Unavailable")));
}

// ── Writes ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_posts_to_collection() {
    let (server, client) = setup().await;
    let virtual_server = ResourcePath::named("ltm/virtual", ObjectName::partitioned("app/vs", "Common"));

    Mock::given(method("POST"))
        .and(path("/mgmt/tm/ltm/virtual"))
        .and(body_partial_json(json!({
            "name": "vs",
            "subPath": "app",
            "partition": "Common",
            "destination": "/Common/10.0.0.10:80"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "vs",
            "partition": "Common",
            "subPath": "app",
            "fullPath": "/Common/app/vs",
            "destination": "/Common/10.0.0.10:80"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .create(&virtual_server, &json!({"destination": "/Common/10.0.0.10:80"}))
        .await
        .unwrap();
    assert_eq!(created.full_path.as_deref(), Some("/Common/app/vs"));
}

#[tokio::test]
async fn test_create_conflict_carries_device_message() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/mgmt/tm/ltm/pool"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": 409,
            "message": "01020066:3: The requested Pool (/Common/web) already exists in partition Common.",
            "errorStack": []
        })))
        .mount(&server)
        .await;

    let err = client.create(&pool(), &json!({})).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "iControl REST error: POST /mgmt/tm/ltm/pool failed: 409 Conflict - 01020066:3: The requested Pool (/Common/web) already exists in partition Common."
    );
}

#[tokio::test]
async fn test_modify_and_delete_accept_empty_bodies() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/mgmt/tm/ltm/pool/~Common~web"))
        .and(body_partial_json(json!({"description": "new"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/mgmt/tm/ltm/pool/~Common~web"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let modified = client.modify(&pool(), &json!({"description": "new"})).await.unwrap();
    assert!(modified.properties.is_empty());
    client.delete(&pool()).await.unwrap();
}

// ── Token authentication ────────────────────────────────────────────

#[tokio::test]
async fn test_login_switches_to_token_header() {
    let (server, mut client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/mgmt/shared/authn/login"))
        .and(body_partial_json(json!({
            "username": "admin",
            "password": "secret",
            "loginProviderName": "tmos"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "admin",
            "loginProviderName": "tmos",
            "token": {"token": "TOKEN123", "timeout": 1200}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/mgmt/tm/sys/version"))
        .and(header("X-F5-Auth-Token", "TOKEN123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"kind": "tm:sys:version:versionstats"})))
        .expect(1)
        .mount(&server)
        .await;

    client.login("admin", "secret", "tmos").await.unwrap();
    client.validate_credentials().await.unwrap();
}

#[tokio::test]
async fn test_rejected_login_is_authentication_error() {
    let (server, mut client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/mgmt/shared/authn/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 401,
            "message": "Authentication failed.",
            "errorStack": []
        })))
        .mount(&server)
        .await;

    let err = client.login("admin", "wrong", "tmos").await.unwrap_err();
    assert!(matches!(err, BigIpError::Authentication(_)));
}
