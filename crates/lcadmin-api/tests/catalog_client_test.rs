#![allow(clippy::unwrap_used)]
// Integration tests for `CatalogClient` using wiremock.

use std::time::Duration;

use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lcadmin_api::{CatalogClient, Error, RetryPolicy};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, CatalogClient) {
    let server = MockServer::start().await;
    let client = CatalogClient::from_reqwest(&server.uri(), reqwest::Client::new())
        .unwrap()
        .with_retry(RetryPolicy::none());
    (server, client)
}

async fn setup_retrying() -> (MockServer, CatalogClient) {
    let server = MockServer::start().await;
    let client = CatalogClient::from_reqwest(&server.uri(), reqwest::Client::new())
        .unwrap()
        .with_retry(RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(1),
        });
    (server, client)
}

fn method_id() -> Uuid {
    Uuid::from_u128(0x11)
}

fn success(data: serde_json::Value) -> serde_json::Value {
    json!({"status": "Success", "message": "", "data": data})
}

// ── List + pagination ───────────────────────────────────────────────

#[tokio::test]
async fn list_impact_methods_unwraps_page() {
    let (server, client) = setup().await;

    let envelope = success(json!({
        "currentPage": 2,
        "totalPage": 5,
        "data": [{
            "id": method_id(),
            "name": "ReCiPe 2016 Midpoint",
            "description": null,
            "version": "1.1",
            "reference": null,
            "perspective": {"id": Uuid::from_u128(0x21), "name": "Hierarchist", "abbr": "H"}
        }]
    }));

    Mock::given(method("GET"))
        .and(path("/api/impact-methods"))
        .and(query_param("pageCurrent", "2"))
        .and(query_param("pageSize", "10"))
        .and(query_param("keyword", "recipe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let page = client
        .list_impact_methods(2, 10, Some("recipe"))
        .await
        .unwrap();

    assert_eq!(page.current_page, 2);
    assert_eq!(page.total_pages, 5);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "ReCiPe 2016 Midpoint");
    assert_eq!(
        page.items[0].perspective.as_ref().unwrap().abbr.as_deref(),
        Some("H")
    );
}

#[tokio::test]
async fn list_users_handles_renamed_item_field() {
    let (server, client) = setup().await;

    let envelope = success(json!({
        "pageCurrent": 1,
        "totalPage": 1,
        "users": [{
            "id": Uuid::from_u128(0x31),
            "userName": "mara",
            "email": "mara@example.com",
            "role": "ADMIN",
            "active": true,
            "createdAt": "2025-11-02T08:30:00Z"
        }]
    }));

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let page = client.list_users(1, 10, None).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].user_name, "mara");
    assert!(page.items[0].active);
}

// ── Envelope failure classification ─────────────────────────────────

#[tokio::test]
async fn validation_failure_joins_field_messages() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/unit-groups"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "status": "Error",
            "message": "Validation failed",
            "data": {"name": "Name is required"}
        })))
        .mount(&server)
        .await;

    let err = client
        .create_unit_group(&lcadmin_api::types::UnitGroupInput {
            name: String::new(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Name is required");
    assert!(matches!(err, Error::Validation { status: 422, .. }));
}

#[tokio::test]
async fn success_status_with_error_envelope_is_operation_failure() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboard/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "Error",
            "message": "summary unavailable",
            "data": null
        })))
        .mount(&server)
        .await;

    let err = client.dashboard_summary().await.unwrap_err();
    assert!(matches!(err, Error::Operation));
    assert_eq!(err.to_string(), "Operation failed");
}

#[tokio::test]
async fn non_json_failure_body_becomes_request_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/organizations"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client.list_organizations(1, 10, None).await.unwrap_err();
    match err {
        Error::Request { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("expected Request, got {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_maps_to_session_expired() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": "Error",
            "message": "token expired"
        })))
        .mount(&server)
        .await;

    let err = client.list_users(1, 10, None).await.unwrap_err();
    assert!(matches!(err, Error::SessionExpired));
}

// ── Retry policy ────────────────────────────────────────────────────

#[tokio::test]
async fn server_errors_are_retried_until_success() {
    let (server, client) = setup_retrying().await;

    Mock::given(method("GET"))
        .and(path("/api/unit-groups"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "status": "Error",
            "message": "temporary failure"
        })))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/unit-groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!([
            {"id": Uuid::from_u128(0x41), "name": "Mass"}
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let groups = client.list_unit_groups().await.unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "Mass");
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let (server, client) = setup_retrying().await;

    Mock::given(method("GET"))
        .and(path("/api/unit-groups"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": "Error",
            "message": "no such collection"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.list_unit_groups().await.unwrap_err();
    assert!(matches!(err, Error::Request { status: 404, .. }));
}

#[tokio::test]
async fn mutations_are_never_retried() {
    let (server, client) = setup_retrying().await;

    Mock::given(method("POST"))
        .and(path("/api/unit-groups"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "status": "Error",
            "message": "boom"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client
        .create_unit_group(&lcadmin_api::types::UnitGroupInput {
            name: "Mass".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Request { status: 500, .. }));
}

// ── Empty-id guard ──────────────────────────────────────────────────

#[tokio::test]
async fn nil_id_never_issues_a_request() {
    let (server, client) = setup().await;

    // Any request at all fails the expectation on drop.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client.get_unit(Uuid::nil()).await.unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

// ── Session ─────────────────────────────────────────────────────────

#[tokio::test]
async fn login_returns_token_and_profile() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({
            "token": "jwt-abc",
            "user": {
                "id": Uuid::from_u128(0x51),
                "userName": "mara",
                "email": "mara@example.com",
                "role": "MANAGER",
                "active": true,
                "createdAt": null
            }
        }))))
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "hunter2".to_string().into();
    let login = client.login("mara", &secret).await.unwrap();
    assert_eq!(login.token, "jwt-abc");
    assert_eq!(login.user.user_name, "mara");
}

#[tokio::test]
async fn login_failure_is_authentication_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": "Error",
            "message": "bad credentials"
        })))
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "wrong".to_string().into();
    let err = client.login("mara", &secret).await.unwrap_err();
    assert!(
        matches!(err, Error::Authentication { .. }),
        "expected Authentication error, got: {err:?}"
    );
}

// ── Mutations and binary transfer ───────────────────────────────────

#[tokio::test]
async fn delete_discards_acknowledgement_payload() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(format!("/api/impact-methods/{}", method_id())))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(success(json!("Successfully deleted"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    client.delete_impact_method(method_id()).await.unwrap();
}

#[tokio::test]
async fn export_returns_raw_bytes() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/emission-factors/export"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PK\x03\x04factors".to_vec()))
        .mount(&server)
        .await;

    let bytes = client.export_emission_factors().await.unwrap();
    assert!(bytes.starts_with(b"PK\x03\x04"));
}

#[tokio::test]
async fn import_posts_multipart_and_parses_summary() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/emission-factors/import"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({
            "imported": 118,
            "skipped": 2,
            "errors": ["row 5: unknown compartment"]
        }))))
        .mount(&server)
        .await;

    let summary = client
        .import_emission_factors("factors.xlsx", b"PK\x03\x04".to_vec())
        .await
        .unwrap();
    assert_eq!(summary.imported, 118);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.errors.len(), 1);
}
