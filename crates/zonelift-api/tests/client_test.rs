#![allow(clippy::unwrap_used)]
// Integration tests for `DnsClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use zonelift_api::{DnsClient, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, DnsClient) {
    let server = MockServer::start().await;
    let token: secrecy::SecretString = "test-token".to_string().into();
    let client = DnsClient::with_base_url(&server.uri(), &token).unwrap();
    (server, client)
}

// ── Zone tests ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_zones() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/dns_zones"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "zone-1", "name": "example.com" },
            { "id": "zone-2", "name": "example.org" }
        ])))
        .mount(&server)
        .await;

    let zones = client.list_zones().await.unwrap();

    assert_eq!(zones.len(), 2);
    assert_eq!(zones[0].id, "zone-1");
    assert_eq!(zones[0].name, "example.com");
    assert_eq!(zones[1].name, "example.org");
}

// ── Record tests ────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_records() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/dns_zones/zone-1/dns_records"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "rec-1",
                "dns_zone_id": "zone-1",
                "hostname": "mail.example.com",
                "type": "MX",
                "ttl": 3600,
                "priority": 10,
                "managed": false,
                "value": "mx.provider.net"
            },
            {
                "id": "rec-2",
                "dns_zone_id": "zone-1",
                "hostname": "www.example.com",
                "type": "NETLIFY",
                "ttl": 3600,
                "value": "example.netlify.app"
            }
        ])))
        .mount(&server)
        .await;

    let records = client.list_records("zone-1").await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].hostname, "mail.example.com");
    assert_eq!(records[0].record_type, "MX");
    assert_eq!(records[0].priority, 10);
    assert_eq!(records[1].record_type, "NETLIFY");
    // Fields the payload omitted fall back to defaults.
    assert_eq!(records[1].priority, 0);
    assert_eq!(records[1].weight, None);
    assert!(!records[1].managed);
}

// ── Error handling tests ────────────────────────────────────────────

#[tokio::test]
async fn test_rejected_token() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/dns_zones"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let result = client.list_zones().await;

    assert!(
        matches!(result, Err(Error::InvalidToken)),
        "expected InvalidToken, got: {result:?}"
    );
}

#[tokio::test]
async fn test_api_error_with_json_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/dns_zones/missing/dns_records"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "code": 404, "message": "Not Found" })),
        )
        .mount(&server)
        .await;

    let result = client.list_records("missing").await;

    match result {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not Found");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_deserialization_error() {
    let (server, client) = setup().await;

    // An object where a zone array is expected.
    Mock::given(method("GET"))
        .and(path("/dns_zones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    let result = client.list_zones().await;

    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}
