use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;

use crate::modules::registrations::adapters::outbound::http_transport::HttpRegistrationTransport;
use crate::modules::registrations::core::outcome::RequestOutcome;
use crate::modules::registrations::core::ports::TransportError;
use crate::modules::registrations::use_cases::send_registration_batch::command::SendRegistrationBatch;
use crate::modules::registrations::use_cases::send_registration_batch::handler::SendRegistrationBatchHandler;
use crate::tests::fixtures::mock_server::{MockRegistrationServer, unreachable_endpoint};

fn body_code(outcome: &RequestOutcome) -> Option<i64> {
    match outcome {
        RequestOutcome::Succeeded(response) => serde_json::from_str::<Value>(&response.body)
            .ok()
            .and_then(|body| body["code"].as_i64()),
        RequestOutcome::Failed { .. } => None,
    }
}

#[tokio::test]
async fn registers_twenty_users_against_a_live_server() {
    let server = MockRegistrationServer::start().await;
    let transport = HttpRegistrationTransport::new(server.endpoint(), None).unwrap();
    let handler = SendRegistrationBatchHandler::new(Arc::new(transport));
    let mut printed = Vec::new();

    let report = handler
        .handle(SendRegistrationBatch::default(), |outcome| {
            printed.push(outcome.to_string())
        })
        .await;

    assert_eq!(printed.len(), 20);
    assert!(printed.iter().all(|line| line.starts_with("Response {")));
    assert_eq!(report.succeeded(), 20);
    assert_eq!(report.responses_by_status().get(&200), Some(&20));
    assert!(report.outcomes.iter().all(|o| body_code(o) == Some(0)));

    let received = server.received().await;
    assert_eq!(received.len(), 20);
    assert!(
        received
            .iter()
            .all(|r| r.content_type.as_deref() == Some("application/json"))
    );
    let usernames: HashSet<_> = received
        .iter()
        .filter_map(|r| r.request.as_ref())
        .map(|r| r.username.clone())
        .collect();
    let expected: HashSet<_> = (1000..1020).map(|seq| format!("test{seq}")).collect();
    assert_eq!(usernames, expected);
    assert!(received.iter().any(|r| r.raw_body
        == r#"{"username":"test1005","password":"test1005","email":"email1005@qq.com"}"#));
}

#[tokio::test]
async fn reports_every_failure_when_the_server_is_unreachable() {
    let transport = HttpRegistrationTransport::new(unreachable_endpoint().await, None).unwrap();
    let handler = SendRegistrationBatchHandler::new(Arc::new(transport));
    let mut printed = Vec::new();

    let report = handler
        .handle(SendRegistrationBatch::default(), |outcome| {
            printed.push(outcome.to_string())
        })
        .await;

    assert_eq!(report.failed(), 20);
    assert_eq!(report.aborted, 0);
    assert!(report.is_complete());
    assert!(printed.iter().all(|line| line.starts_with("TransportFailure {")));
    assert!(report.outcomes.iter().all(|o| matches!(
        o,
        RequestOutcome::Failed {
            error: TransportError::Connect(_),
            ..
        }
    )));
    let indexes: HashSet<_> = report.outcomes.iter().map(|o| o.index()).collect();
    assert_eq!(indexes, (0..20).collect::<HashSet<_>>());
}

#[tokio::test]
async fn a_second_run_is_rejected_as_duplicates_and_still_reported() {
    let server = MockRegistrationServer::start().await;
    let transport = Arc::new(HttpRegistrationTransport::new(server.endpoint(), None).unwrap());
    let handler = SendRegistrationBatchHandler::new(transport);

    let first = handler
        .handle(SendRegistrationBatch::default(), |_| {})
        .await;
    let second = handler
        .handle(SendRegistrationBatch::default(), |_| {})
        .await;

    assert_ne!(first.run_id, second.run_id);
    assert!(first.outcomes.iter().all(|o| body_code(o) == Some(0)));
    assert_eq!(second.succeeded(), 20);
    assert!(second.outcomes.iter().all(|o| body_code(o) == Some(5001)));

    let first_users: HashSet<_> = first.outcomes.iter().map(|o| o.username().to_string()).collect();
    let second_users: HashSet<_> = second.outcomes.iter().map(|o| o.username().to_string()).collect();
    assert_eq!(first_users, second_users);
    assert_eq!(server.received().await.len(), 40);
}
