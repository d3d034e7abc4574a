use smsc::{Credentials, KnownErrorCode, Request, SmscClient, SmscError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> SmscClient {
    SmscClient::builder(Credentials::new("L", "P", "S").unwrap())
        .endpoint(format!("{}/rest/send/", server.uri()))
        .build()
        .unwrap()
}

async fn mount(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/rest/send/"))
        .and(header("content-type", "application/json"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn sends_json_body_and_decodes_envelope() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200)
            .set_body_string(r#"{"id":1,"cnt":1,"cost":"1.00","balance":"99.00"}"#),
    )
    .await;

    let client = client_for(&server);
    let request = Request::to_phones("+71234567890", "hi");

    let resolved = client.resolve(&request);
    assert_eq!(resolved.login, "L");
    assert_eq!(resolved.password, "P");

    let response = client.send(&request).await.unwrap();
    assert_eq!(response.id, 1);
    assert_eq!(response.cost, "1.00");
    assert_eq!(response.balance, "99.00");

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "login": "L",
            "psw": "P",
            "phones": "+71234567890",
            "mes": "hi",
            "sender": "S"
        })
    );
}

#[tokio::test]
async fn gateway_error_is_reported() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_string(r#"{"error":"bad login","error_code":2}"#),
    )
    .await;

    let err = client_for(&server)
        .send(&Request::to_phones("+71234567890", "hi"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("bad login"));
    match err {
        SmscError::Gateway { code, .. } => {
            assert_eq!(code.known(), Some(KnownErrorCode::InvalidCredentials));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn empty_body_is_reported() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200)).await;

    let err = client_for(&server)
        .send(&Request::to_phones("+71234567890", "hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, SmscError::EmptyResponse));
}

#[tokio::test]
async fn non_200_status_is_reported() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(503).set_body_string("unavailable"),
    )
    .await;

    let err = client_for(&server)
        .send(&Request::to_phones("+71234567890", "hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, SmscError::HttpStatus { status: 503 }));
}

#[tokio::test]
async fn invalid_request_never_reaches_the_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&server)
        .await;

    let request = Request {
        cost: 4,
        ..Request::to_phones("+71234567890", "hi")
    };
    let err = client_for(&server).send(&request).await.unwrap_err();

    assert!(matches!(err, SmscError::Validation { .. }));
    assert!(!err.to_string().contains("\"psw\":\"P\""));
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    let client = SmscClient::builder(Credentials::new("L", "P", "").unwrap())
        .endpoint("http://127.0.0.1:1/rest/send/")
        .build()
        .unwrap();

    let err = client
        .send(&Request::to_phones("+71234567890", "hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, SmscError::Transport(_)));
}
