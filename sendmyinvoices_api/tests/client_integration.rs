use std::time::Duration;

use sendmyinvoices_api::types::{AttachmentUpload, CodeRequest, DocumentUpload};
use sendmyinvoices_api::{ApiErrorKind, Client, ClientConfig, Error, SecurityCodes};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client_for(server: &MockServer) -> Client {
    let config = ClientConfig::builder("test-key")
        .base_url(&server.uri())
        .build()
        .unwrap();
    Client::new(config).unwrap()
}

fn no_body(req: &Request) -> bool {
    req.body.is_empty()
}

fn empty_header(name: &'static str) -> impl Fn(&Request) -> bool {
    move |req: &Request| {
        req.headers
            .get(name)
            .is_some_and(|value| value.as_bytes().is_empty())
    }
}

#[tokio::test]
async fn check_status_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("api_status.json");

    Mock::given(method("GET"))
        .and(path("/v1/apiStatus"))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/json"))
        .and(header("x-api-key", "test-key"))
        .and(no_body)
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.check_status().await.unwrap();
    assert_eq!(result, body);
}

#[tokio::test]
async fn check_status_is_repeatable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/apiStatus"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.check_status().await.unwrap();
    client.check_status().await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url, requests[1].url);
    assert_eq!(requests[0].body, requests[1].body);
    for name in ["accept", "content-type", "x-api-key"] {
        assert_eq!(
            requests[0].headers.get(name),
            requests[1].headers.get(name),
            "header {} differs",
            name
        );
    }
}

#[tokio::test]
async fn lang_code_header_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/apiStatus"))
        .and(header("x-lang-code", "de_de"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder("test-key")
        .base_url(&mock_server.uri())
        .lang_code("de_de")
        .build()
        .unwrap();
    let client = Client::new(config).unwrap();
    client.check_status().await.unwrap();
}

#[tokio::test]
async fn issue_document_code_posts_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/getCode"))
        .and(body_json(json!({"domain": "belegsuche.de", "QRCode": true})))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"code":"xa19da"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = CodeRequest::default().with_domain("belegsuche.de");
    let body = client.issue_document_code(&request).await.unwrap();
    assert_eq!(body, r#"{"code":"xa19da"}"#);
}

#[tokio::test]
async fn fetch_document_with_security_codes() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("document.json");

    Mock::given(method("GET"))
        .and(path("/v1/documents/xa19da"))
        .and(header("x-security-code-1", "A"))
        .and(header("x-security-code-2", "B"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client
        .fetch_document("xa19da", &SecurityCodes::new("A", "B"))
        .await
        .unwrap();
    let parsed: Value = serde_json::from_str(&result).unwrap();
    assert_eq!(parsed["data"]["documentCode"], "xa19da");
}

#[tokio::test]
async fn fetch_document_without_security_codes_sends_empty_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/documents/xa19da"))
        .and(empty_header("x-security-code-1"))
        .and(empty_header("x-security-code-2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .fetch_document("xa19da", &SecurityCodes::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn create_document_body_round_trips() {
    let mock_server = MockServer::start().await;
    let input = json!({"fileName": "a.pdf", "fileContent": "JVBERi0xLjQKJcOkw7zDtsOf"});

    Mock::given(method("POST"))
        .and(path("/v1/documents"))
        .and(body_json(&input))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"success":true}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.create_document(&input).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent, input);
}

#[tokio::test]
async fn create_document_from_typed_upload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/documents"))
        .and(body_json(json!({
            "fileName": "sample_doc.pdf",
            "fileContent": "QQ==",
            "QRCode": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let upload = DocumentUpload::new("sample_doc.pdf", "QQ==".to_string()).with_qr_code(true);
    client.create_document(&upload).await.unwrap();
}

#[tokio::test]
async fn create_document_rejects_non_object_payload() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    let err = client.create_document(&vec![1, 2, 3]).await.unwrap_err();
    assert!(matches!(err, Error::InvalidRequest(_)));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_document() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/documents/xa19da"))
        .and(no_body)
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success":true}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.delete_document("xa19da").await.unwrap();
}

#[tokio::test]
async fn dot_segment_ids_are_rejected_before_sending() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    for id in [".", ".."] {
        let err = client.delete_document(id).await.unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
        let err = client.delete_attachment("xa19da", id).await.unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
        let err = client
            .fetch_document(id, &SecurityCodes::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn attachment_operations() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/documents/xa19da/attachments/12"))
        .and(header("x-security-code-1", "A"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":12}"#))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/documents/xa19da/attachments"))
        .and(body_json(json!({"fileName": "note.pdf", "fileContent": "QQ=="})))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"id":13}"#))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/documents/xa19da/attachments/13"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let codes = SecurityCodes {
        code_1: Some("A".to_string()),
        code_2: None,
    };
    assert_eq!(
        client.fetch_attachment("xa19da", "12", &codes).await.unwrap(),
        r#"{"id":12}"#
    );
    let upload = AttachmentUpload::new("note.pdf", "QQ==".to_string());
    assert_eq!(
        client.create_attachment("xa19da", &upload).await.unwrap(),
        r#"{"id":13}"#
    );
    assert_eq!(client.delete_attachment("xa19da", "13").await.unwrap(), "");
}

#[tokio::test]
async fn invalid_api_key_is_authentication_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/apiStatus"))
        .respond_with(ResponseTemplate::new(403).set_body_string(load_fixture("invalid_api_key.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.check_status().await.unwrap_err();
    let api = err.api_error().unwrap();
    assert_eq!(api.kind, ApiErrorKind::Authentication);
    assert_eq!(api.status, 403);
    assert_eq!(api.message, "Invalid API key provided");
}

#[tokio::test]
async fn mapped_statuses_without_detail_use_defaults() {
    let cases = [
        (400, ApiErrorKind::Validation, "A parameter is missing or invalid endpoint"),
        (405, ApiErrorKind::MethodNotAllowed, "HTTP method used is not allowed to access resource"),
        (415, ApiErrorKind::UnsupportedContentType, "Request content-type is not valid."),
        (503, ApiErrorKind::Server, "A server error occurred while accessing resource"),
    ];

    for (status, kind, message) in cases {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/getCode"))
            .respond_with(ResponseTemplate::new(status).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client
            .issue_document_code(&CodeRequest::default())
            .await
            .unwrap_err();
        let api = err.api_error().unwrap();
        assert_eq!(api.kind, kind);
        assert_eq!(api.status, status);
        assert_eq!(api.message, message);
    }
}

#[tokio::test]
async fn unmapped_status_is_generic_error_with_body() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("not_found.json");

    Mock::given(method("GET"))
        .and(path("/v1/documents/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .fetch_document("missing", &SecurityCodes::default())
        .await
        .unwrap_err();
    let api = err.api_error().unwrap();
    assert_eq!(api.kind, ApiErrorKind::GenericRest);
    assert_eq!(api.status, 404);
    let message: Value = serde_json::from_str(&api.message).unwrap();
    let original: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(message, original);
}

#[tokio::test]
async fn server_error_500_is_generic() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/apiStatus"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.check_status().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(
        err.api_error().unwrap().message,
        r#""Internal Server Error""#
    );
}

#[tokio::test]
async fn timeout_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/apiStatus"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder("test-key")
        .base_url(&mock_server.uri())
        .timeout(Duration::from_millis(300))
        .build()
        .unwrap();
    let client = Client::new(config).unwrap();
    let err = client.check_status().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(err.is_timeout());
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let config = ClientConfig::builder("test-key")
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();
    let client = Client::new(config).unwrap();
    let err = client.check_status().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(err.api_error().is_none());
}
