//! Integration tests for the typed RelyComply client.
//!
//! Each operation is executed against a wiremock GraphQL endpoint and the
//! captured request envelope is checked against the expected template and
//! variables.

use chrono::NaiveDate;
use relycomply::templates::{EmbeddedTemplates, TemplateResolver};
use relycomply::{
    ApiToken, Endpoint, GraphqlError, HttpError, NewAssessment, NewAssessmentLink, NewCustomer,
    NewDocument, NewOrganization, OperationType, RelyComplyClient, RelyComplyConfig, TemplateKey,
};
use serde_json::{json, Value};
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> RelyComplyConfig {
    RelyComplyConfig::builder()
        .api_token(ApiToken::new("test-token").unwrap())
        .endpoint(Endpoint::new(format!("{}/graphql/", server.uri())).unwrap())
        .build()
        .unwrap()
}

fn template(operation_type: OperationType, name: &str) -> String {
    EmbeddedTemplates
        .resolve(&TemplateKey::new(operation_type, name))
        .unwrap()
        .into_owned()
}

fn jane() -> NewCustomer {
    NewCustomer {
        identifier: "cust-001".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        id_document_type: "national_id".to_string(),
        id_document_code: "9001315800087".to_string(),
        nationality: "ZA".to_string(),
        residence: "ZA".to_string(),
        birthdate: NaiveDate::from_ymd_opt(1990, 1, 31).unwrap(),
        address: "123 Main St".to_string(),
        phone_number: "+1-555-0100".to_string(),
    }
}

/// Mounts a mock that expects exactly one request with the given envelope.
async fn expect_envelope(server: &MockServer, query: String, variables: Value, response: Value) {
    Mock::given(method("POST"))
        .and(path("/graphql/"))
        .and(body_json(json!({ "query": query, "variables": variables })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Operation Envelope Tests
// ============================================================================

#[tokio::test]
async fn test_list_customers_sends_null_variables() {
    let server = MockServer::start().await;
    let data = json!({ "data": { "customers": { "edges": [] } } });
    expect_envelope(
        &server,
        template(OperationType::Query, "customers"),
        Value::Null,
        data.clone(),
    )
    .await;

    let client = RelyComplyClient::new(&config_for(&server));
    let response = client.list_customers().await.unwrap();

    assert_eq!(response, data);
}

#[tokio::test]
async fn test_get_customer_shares_customers_template() {
    let server = MockServer::start().await;
    expect_envelope(
        &server,
        template(OperationType::Query, "customers"),
        json!({ "id": "Q3VzdG9tZXI6MQ==" }),
        json!({ "data": { "customers": { "edges": [{ "node": { "id": "Q3VzdG9tZXI6MQ==" } }] } } }),
    )
    .await;

    let client = RelyComplyClient::new(&config_for(&server));
    let response = client.get_customer("Q3VzdG9tZXI6MQ==").await.unwrap();

    assert_eq!(
        response["data"]["customers"]["edges"][0]["node"]["id"],
        "Q3VzdG9tZXI6MQ=="
    );
}

#[tokio::test]
async fn test_create_customer_sends_attribute_list() {
    let server = MockServer::start().await;
    expect_envelope(
        &server,
        template(OperationType::Mutation, "createCustomer"),
        json!({
            "input": {
                "identifier": "cust-001",
                "firstName": "Jane",
                "lastName": "Doe",
                "idDocumentType": "national_id",
                "idDocumentCode": "9001315800087",
                "nationality": "ZA",
                "residence": "ZA",
                "birthdate": "1990-01-31",
                "data": [
                    { "key": "address", "value": "123 Main St" },
                    { "key": "phone_number", "value": "+1-555-0100" }
                ]
            }
        }),
        json!({ "data": { "createCustomer": { "customer": { "id": "c1" }, "errors": [] } } }),
    )
    .await;

    let client = RelyComplyClient::new(&config_for(&server));
    let response = client.create_customer(&jane()).await.unwrap();

    assert_eq!(response["data"]["createCustomer"]["customer"]["id"], "c1");
}

#[tokio::test]
async fn test_create_organization_forces_type_and_document_type() {
    let server = MockServer::start().await;
    expect_envelope(
        &server,
        template(OperationType::Mutation, "createCustomer"),
        json!({
            "input": {
                "identifier": "org-001",
                "type": "organisation",
                "businessName": "Acme Holdings",
                "idDocumentType": "entity_registration",
                "idDocumentCode": "2020/123456/07",
                "nationality": "ZA",
                "residence": "ZA",
                "birthdate": "2020-06-01"
            }
        }),
        json!({ "data": { "createCustomer": { "customer": { "id": "o1" } } } }),
    )
    .await;

    let organization = NewOrganization {
        identifier: "org-001".to_string(),
        business_name: "Acme Holdings".to_string(),
        id_document_code: "2020/123456/07".to_string(),
        nationality: "ZA".to_string(),
        residence: "ZA".to_string(),
        birthdate: NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
    };

    let client = RelyComplyClient::new(&config_for(&server));
    client.create_organization(&organization).await.unwrap();
}

#[tokio::test]
async fn test_list_and_get_assessments_share_template() {
    let server = MockServer::start().await;
    let query = template(OperationType::Query, "assessments");
    expect_envelope(
        &server,
        query.clone(),
        Value::Null,
        json!({ "data": { "assessments": { "edges": [] } } }),
    )
    .await;
    expect_envelope(
        &server,
        query,
        json!({ "id": "assess-1" }),
        json!({ "data": { "assessments": { "edges": [{ "node": { "id": "assess-1" } }] } } }),
    )
    .await;

    let client = RelyComplyClient::new(&config_for(&server));
    client.list_assessments().await.unwrap();
    client.get_assessment("assess-1").await.unwrap();
}

#[tokio::test]
async fn test_create_assessment_without_webhook_sends_null() {
    let server = MockServer::start().await;
    expect_envelope(
        &server,
        template(OperationType::Mutation, "createAssessment"),
        json!({
            "input": {
                "customer": "cust-1",
                "assessmentConfig": "onboarding_assessment",
                "webhookUrl": null
            }
        }),
        json!({ "data": { "createAssessment": { "assessment": { "id": "a1" } } } }),
    )
    .await;

    let client = RelyComplyClient::new(&config_for(&server));
    client
        .create_assessment(&NewAssessment::new("cust-1", None))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_assessment_with_webhook() {
    let server = MockServer::start().await;
    expect_envelope(
        &server,
        template(OperationType::Mutation, "createAssessment"),
        json!({
            "input": {
                "customer": "cust-1",
                "assessmentConfig": "onboarding_assessment",
                "webhookUrl": "https://example.com/hooks"
            }
        }),
        json!({ "data": { "createAssessment": { "assessment": { "id": "a1" } } } }),
    )
    .await;

    let client = RelyComplyClient::new(&config_for(&server));
    client
        .create_assessment(&NewAssessment::new(
            "cust-1",
            Some("https://example.com/hooks".to_string()),
        ))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_assessment_link() {
    let server = MockServer::start().await;
    expect_envelope(
        &server,
        template(OperationType::Mutation, "createAssessmentLink"),
        json!({
            "input": {
                "primaryAssessment": "assess-1",
                "relatedAssessment": "assess-2",
                "role": "director"
            }
        }),
        json!({ "data": { "createAssessmentLink": { "assessmentLink": { "id": "l1" } } } }),
    )
    .await;

    let client = RelyComplyClient::new(&config_for(&server));
    client
        .create_assessment_link(&NewAssessmentLink::new("assess-1", "assess-2", "director"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_document() {
    let server = MockServer::start().await;
    expect_envelope(
        &server,
        template(OperationType::Mutation, "createDocument"),
        json!({
            "input": {
                "customer": "cust-1",
                "documentType": "proof_of_address",
                "data": "JVBERi0xLjc="
            }
        }),
        json!({ "data": { "createDocument": { "document": { "id": "d1" } } } }),
    )
    .await;

    let client = RelyComplyClient::new(&config_for(&server));
    client
        .create_document(&NewDocument::from_bytes(
            "cust-1",
            "proof_of_address",
            b"%PDF-1.7",
        ))
        .await
        .unwrap();
}

// ============================================================================
// Header Tests
// ============================================================================

#[tokio::test]
async fn test_requests_carry_auth_and_encoding_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql/"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept-encoding", "gzip"))
        .and(header("content-type", "application/json"))
        .and(header(
            "user-agent",
            format!("RelyComply Rust SDK v{}", relycomply::clients::SDK_VERSION).as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let client = RelyComplyClient::new(&config_for(&server));
    client.list_customers().await.unwrap();
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_graphql_errors_are_returned_not_raised() {
    let server = MockServer::start().await;
    let body = json!({ "data": null, "errors": [{ "message": "x" }] });
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let client = RelyComplyClient::new(&config_for(&server));
    let response = client.get_customer("missing").await.unwrap();

    assert_eq!(response, body);
    assert_eq!(
        relycomply::clients::graphql::graphql_errors(&response).map(<[_]>::len),
        Some(1)
    );
}

#[tokio::test]
async fn test_server_error_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(500)
                .insert_header("x-request-id", "req-500")
                .set_body_json(json!({ "errors": [{ "message": "Internal Server Error" }] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = RelyComplyClient::new(&config_for(&server));
    let result = client.list_assessments().await;

    match result {
        Err(GraphqlError::Transport(HttpError::Response(e))) => {
            assert_eq!(e.code, 500);
            assert_eq!(e.error_reference.as_deref(), Some("req-500"));
            assert!(e.message.contains("Internal Server Error"));
        }
        other => panic!("Expected transport response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_is_transport_error_without_retry() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .expect(1)
        .mount(&server)
        .await;

    let client = RelyComplyClient::new(&config_for(&server));
    let result = client.list_customers().await;

    assert!(matches!(
        result,
        Err(GraphqlError::Transport(HttpError::Response(ref e))) if e.code == 401
    ));
}

#[tokio::test]
async fn test_non_json_body_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = RelyComplyClient::new(&config_for(&server));
    let result = client.list_customers().await;

    assert!(matches!(
        result,
        Err(GraphqlError::Transport(HttpError::InvalidJson { code: 200, .. }))
    ));
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let config = RelyComplyConfig::builder()
        .api_token(ApiToken::new("test-token").unwrap())
        .endpoint(Endpoint::new("http://127.0.0.1:1/graphql/").unwrap())
        .build()
        .unwrap();

    let client = RelyComplyClient::new(&config);
    let result = client.list_customers().await;

    assert!(matches!(
        result,
        Err(GraphqlError::Transport(HttpError::Network(_)))
    ));
}

#[tokio::test]
async fn test_unknown_template_sends_no_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(0)
        .mount(&server)
        .await;

    let client = RelyComplyClient::new(&config_for(&server));
    let result = client
        .execute(OperationType::Query, "doesNotExist", None)
        .await;

    assert!(matches!(
        result,
        Err(GraphqlError::TemplateNotFound { ref key }) if key.to_string() == "query/doesNotExist"
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Determinism Tests
// ============================================================================

#[tokio::test]
async fn test_identical_inputs_produce_identical_bodies() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(4)
        .mount(&server)
        .await;

    let client = RelyComplyClient::new(&config_for(&server));
    client.create_customer(&jane()).await.unwrap();
    client.create_customer(&jane()).await.unwrap();
    client
        .create_assessment(&NewAssessment::new("cust-1", None))
        .await
        .unwrap();
    client
        .create_assessment(&NewAssessment::new("cust-1", None))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 4);
    assert_eq!(requests[0].body, requests[1].body);
    assert_eq!(requests[2].body, requests[3].body);
    assert_ne!(requests[0].body, requests[2].body);
}

#[tokio::test]
async fn test_client_can_be_shared_across_tasks() {
    use std::sync::Arc;

    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(4)
        .mount(&server)
        .await;

    let client = Arc::new(RelyComplyClient::new(&config_for(&server)));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.get_customer(&format!("cust-{i}")).await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
}
