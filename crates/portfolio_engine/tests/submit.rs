use std::time::Duration;

use portfolio_engine::{
    CancellationToken, ContactMessage, FailureKind, ReqwestSubmitter, SimulatedSubmitter,
    SubmitSettings, Submitter,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn alice() -> ContactMessage {
    ContactMessage {
        name: "Alice".to_string(),
        email: "a@b.com".to_string(),
        subject: "General Question".to_string(),
        message: "Hi".to_string(),
    }
}

fn submitter_for(server: &MockServer, settings: SubmitSettings) -> ReqwestSubmitter {
    ReqwestSubmitter::new(format!("{}/api/contact", server.uri()), settings)
}

#[tokio::test]
async fn posts_the_four_fields_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "name": "Alice",
            "email": "a@b.com",
            "subject": "General Question",
            "message": "Hi",
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let submitter = submitter_for(&server, SubmitSettings::default());
    let receipt = submitter
        .submit(1, &alice(), &CancellationToken::new())
        .await
        .expect("delivered");

    assert_eq!(receipt.status, Some(204));
}

#[tokio::test]
async fn non_success_status_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let submitter = submitter_for(&server, SubmitSettings::default());
    let err = submitter
        .submit(2, &alice(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(502));
    assert_eq!(err.to_string(), "http status 502: 502 Bad Gateway");
    let source: &dyn std::error::Error = &err;
    assert!(source.source().is_none());
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(250)))
        .mount(&server)
        .await;

    let settings = SubmitSettings {
        request_timeout: Duration::from_millis(50),
        ..SubmitSettings::default()
    };
    let submitter = submitter_for(&server, settings);
    let err = submitter
        .submit(3, &alice(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn cancellation_abandons_the_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let submitter = submitter_for(&server, SubmitSettings::default());
    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let err = submitter.submit(4, &alice(), &token).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Cancelled);
}

#[tokio::test]
async fn unusable_endpoints_are_rejected_before_sending() {
    for endpoint in ["not a url", "ftp://files.example.com/contact"] {
        let submitter = ReqwestSubmitter::new(endpoint, SubmitSettings::default());
        let err = submitter
            .submit(5, &alice(), &CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidEndpoint, "endpoint {endpoint:?}");
    }
}

#[tokio::test]
async fn simulated_submitter_resolves_after_delay() {
    let submitter = SimulatedSubmitter::new(Duration::from_millis(10));
    let receipt = submitter
        .submit(6, &alice(), &CancellationToken::new())
        .await
        .expect("simulated delivery");
    assert_eq!(receipt.status, None);
}

#[tokio::test]
async fn rejecting_simulated_submitter_fails() {
    let submitter = SimulatedSubmitter::rejecting(Duration::from_millis(10));
    let err = submitter
        .submit(7, &alice(), &CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Rejected);
}

#[tokio::test]
async fn simulated_delay_can_be_cancelled() {
    let submitter = SimulatedSubmitter::new(Duration::from_secs(30));
    let token = CancellationToken::new();
    token.cancel();

    let err = submitter.submit(8, &alice(), &token).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Cancelled);
}
