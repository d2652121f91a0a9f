use std::time::{Duration, Instant};

use renovlux_api::types::{ContactFormData, ContactReply, ProductListPayload, RawProject, RawService};
use renovlux_api::{Client, Error, ListQuery, SearchQuery, SortOrder};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn get_unpacks_data_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/services"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("services.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&format!("{}/api", mock_server.uri()));
    let resp = client
        .get::<Vec<RawService>, ListQuery>("/services", None)
        .await
        .unwrap();

    assert!(resp.succeeded);
    assert_eq!(resp.message.as_deref(), Some("Services récupérés"));
    assert_eq!(resp.payload.len(), 2);
    assert_eq!(resp.payload[0].name.as_deref(), Some("Rénovation de cuisine"));
}

#[tokio::test]
async fn get_wraps_bare_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("projects_flat.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client
        .get::<Vec<RawProject>, ListQuery>("/projects", None)
        .await
        .unwrap();

    assert!(resp.succeeded);
    assert!(resp.message.is_none());
    assert!(resp.pagination.is_none());
    assert_eq!(resp.payload.len(), 2);
}

#[tokio::test]
async fn get_sends_list_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("category", "Plomberie"))
        .and(query_param("sortBy", "price"))
        .and(query_param("sortOrder", "asc"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("products.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = ListQuery::default()
        .with_category("Plomberie")
        .with_sort_by("price")
        .with_sort_order(SortOrder::Asc)
        .with_page(1)
        .with_limit(12);
    let resp = client
        .get::<ProductListPayload, ListQuery>("/products", Some(&query))
        .await
        .unwrap();

    match resp.payload {
        ProductListPayload::Paged { items, pagination } => {
            assert_eq!(items.len(), 2);
            assert_eq!(pagination.unwrap().total_pages, 9);
        }
        ProductListPayload::Bare(_) => panic!("expected paginated payload"),
    }
}

#[tokio::test]
async fn get_search_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/search"))
        .and(query_param("q", "peinture"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("products_bare.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client
        .get::<Value, SearchQuery>("/products/search", Some(&SearchQuery::new("peinture")))
        .await
        .unwrap();
    assert!(resp.payload.is_array());
}

#[tokio::test]
async fn non_success_status_uses_backend_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contact/message"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "L'adresse email est invalide.",
            "code": "VALIDATION_FAILED"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client
        .post::<ContactReply, ContactFormData>("/contact/message", Some(&ContactFormData::default()))
        .await
        .unwrap_err();

    assert_eq!(err.status(), 422);
    assert_eq!(err.code(), Some("VALIDATION_FAILED"));
    assert_eq!(err.to_string(), "L'adresse email est invalide.");
}

#[tokio::test]
async fn non_success_status_without_message_is_generic() {
    let mock_server = MockServer::start().await;

    for status in [400u16, 401, 403, 404, 418, 500, 503] {
        Mock::given(method("GET"))
            .and(path(format!("/status/{}", status)))
            .respond_with(ResponseTemplate::new(status).set_body_string("not json at all"))
            .mount(&mock_server)
            .await;
    }

    let client = Client::with_base_url(&mock_server.uri());
    for status in [400u16, 401, 403, 404, 418, 500, 503] {
        let err = client
            .get::<Value, ListQuery>(&format!("/status/{}", status), None)
            .await
            .unwrap_err();
        assert_eq!(err.status(), status);
        assert_eq!(err.to_string(), format!("HTTP Error: {}", status));
        assert!(matches!(err, Error::HttpStatus { .. }));
    }
}

#[tokio::test]
async fn slow_backend_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).with_timeout(Duration::from_millis(200));
    let started = Instant::now();
    let err = client
        .get::<Value, ListQuery>("/services", None)
        .await
        .unwrap_err();

    assert_eq!(err, Error::Timeout);
    assert_eq!(err.status(), 408);
    assert_eq!(err.code(), Some("TIMEOUT"));
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    // Port 9 (discard) is closed on test machines; the connection is refused.
    let client = Client::with_base_url("http://127.0.0.1:9").with_timeout(Duration::from_secs(5));
    let err = client
        .get::<Value, ListQuery>("/services", None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Network(_)));
    assert_eq!(err.status(), 0);
    assert_eq!(err.code(), Some("NETWORK_ERROR"));
}

#[tokio::test]
async fn malformed_success_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client
        .get::<Value, ListQuery>("/services", None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert_eq!(err.status(), 0);
}

#[tokio::test]
async fn payload_shape_mismatch_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": "oops"})))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client
        .get::<Vec<RawService>, ListQuery>("/services", None)
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some("PARSE_ERROR"));
}

#[tokio::test]
async fn post_serializes_json_body() {
    let mock_server = MockServer::start().await;

    let form = ContactFormData {
        first_name: "Awa".to_string(),
        last_name: "Diop".to_string(),
        email: "awa@example.com".to_string(),
        phone: "+221 77 000 00 00".to_string(),
        message: "Devis pour une cuisine".to_string(),
        service: Some("Rénovation de cuisine".to_string()),
    };

    Mock::given(method("POST"))
        .and(path("/contact/message"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "firstName": "Awa",
            "lastName": "Diop",
            "email": "awa@example.com",
            "phone": "+221 77 000 00 00",
            "message": "Devis pour une cuisine",
            "service": "Rénovation de cuisine"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "message": "Message envoyé"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client
        .post::<ContactReply, ContactFormData>("/contact/message", Some(&form))
        .await
        .unwrap();
    assert!(resp.payload.success);
    assert_eq!(resp.payload.message, "Message envoyé");
}

#[tokio::test]
async fn put_and_delete() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/products/prod-1"))
        .and(body_json(json!({"price": 47000})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "prod-1"}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/products/prod-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let updated = client
        .put::<Value, Value>("/products/prod-1", Some(&json!({"price": 47000})))
        .await
        .unwrap();
    assert_eq!(updated.payload["id"], "prod-1");

    let deleted = client.delete::<Value>("/products/prod-1").await.unwrap();
    assert!(deleted.succeeded);
    assert_eq!(deleted.payload, Value::Null);
}

#[tokio::test]
async fn upload_lets_transport_set_multipart_boundary() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/uploads"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"path": "/storage/plan.pdf"}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let form = reqwest::multipart::Form::new().text("label", "plan");
    let resp = client.upload::<Value>("/uploads", form).await.unwrap();
    assert_eq!(resp.payload["path"], "/storage/plan.pdf");
}
