//! End-to-end tests driving the coordinator through the wire contract

mod common;

use common::{CoordinatorBuilder, TestFixtures, TestHelpers};
use shared::{SolverAck, SolverNotification, SolverRequest};

#[tokio::test]
async fn test_full_request_cycle() {
    let (coordinator, mut rx) = CoordinatorBuilder::new().build();

    let request = SolverRequest::from_json(
        r#"{
            "action": "findCombinations",
            "items": [
                {"price": 100, "name": "novel"},
                {"price": 150, "name": "paperback"},
                {"price": 250, "name": "hardcover"}
            ],
            "target": 400
        }"#,
    )
    .unwrap();

    let ack = coordinator.handle(request);
    assert!(ack.is_accepted());
    assert_eq!(serde_json::to_string(&ack).unwrap(), r#"{"success":true}"#);

    let (terminal, progress) = TestHelpers::drain_until_terminal(&mut rx).await;
    let results = TestHelpers::completion_results(terminal);

    assert_eq!(TestHelpers::prices_of(&results[0]), vec![150, 250]);
    assert!(progress.iter().all(|&value| value <= 95));

    TestHelpers::wait_until_idle(&coordinator).await;
}

#[tokio::test]
async fn test_fallback_cycle_returns_single_undershoot() {
    let (coordinator, mut rx) = CoordinatorBuilder::new().build();

    let ack = coordinator.start(TestFixtures::shopping_catalog(), 1_000);
    assert!(ack.is_accepted());

    let (terminal, _) = TestHelpers::drain_until_terminal(&mut rx).await;
    let results = TestHelpers::completion_results(terminal);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].total_price, 500);
}

#[tokio::test]
async fn test_busy_rejection_leaves_first_search_intact() {
    let (coordinator, mut rx) = CoordinatorBuilder::new().build();

    assert!(coordinator
        .start(TestFixtures::shopping_catalog(), 400)
        .is_accepted());

    let rejected = coordinator.start(TestFixtures::items(&[999]), 999);
    match &rejected {
        SolverAck::Rejected { error } => assert!(error.contains("already in progress")),
        other => panic!("expected busy rejection, got {other:?}"),
    }

    let (terminal, _) = TestHelpers::drain_until_terminal(&mut rx).await;
    let results = TestHelpers::completion_results(terminal);
    assert_eq!(results[0].total_price, 400);

    // Once idle again, the next request goes through
    TestHelpers::wait_until_idle(&coordinator).await;
    assert!(coordinator
        .start(TestFixtures::items(&[999]), 999)
        .is_accepted());
}

#[tokio::test]
async fn test_sequential_searches_are_independent() {
    let (coordinator, mut rx) = CoordinatorBuilder::new().build();

    assert!(coordinator
        .start(TestFixtures::shopping_catalog(), 400)
        .is_accepted());
    let first = TestHelpers::completion_results(TestHelpers::drain_until_terminal(&mut rx).await.0);
    TestHelpers::wait_until_idle(&coordinator).await;

    assert!(coordinator
        .start(TestFixtures::shopping_catalog(), 1_000)
        .is_accepted());
    let second = TestHelpers::completion_results(TestHelpers::drain_until_terminal(&mut rx).await.0);

    assert_eq!(first[0].total_price, 400);
    assert_eq!(second[0].total_price, 500);
}

#[tokio::test]
async fn test_invalid_requests_are_rejected_synchronously() {
    let (coordinator, mut rx) = CoordinatorBuilder::new().build();

    let empty_items = coordinator.start(TestFixtures::items(&[]), 100);
    assert!(!empty_items.is_accepted());

    let bad_target = coordinator.start(TestFixtures::shopping_catalog(), 0);
    assert!(!bad_target.is_accepted());

    // A rejection produces an error-shaped ack on the wire
    let json = serde_json::to_value(&empty_items).unwrap();
    assert!(json["error"].is_string());

    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    assert!(rx.try_recv().is_err(), "no notifications may follow a rejection");
    assert!(!coordinator.is_busy());
}

#[tokio::test]
async fn test_overflow_failure_cycle() {
    let (coordinator, mut rx) = CoordinatorBuilder::new().build();

    assert!(coordinator
        .start(TestFixtures::items(&[100, u64::MAX]), 200)
        .is_accepted());

    let (terminal, _) = TestHelpers::drain_until_terminal(&mut rx).await;
    match terminal {
        SolverNotification::Error { message } => {
            assert!(message.contains("overflow"), "unexpected failure cause: {message}")
        }
        other => panic!("expected failure notification, got {other:?}"),
    }

    TestHelpers::wait_until_idle(&coordinator).await;
    assert!(coordinator
        .start(TestFixtures::shopping_catalog(), 400)
        .is_accepted());
}

#[tokio::test]
async fn test_capped_results_via_builder() {
    let (coordinator, mut rx) = CoordinatorBuilder::new().with_result_cap(3).build();

    assert!(coordinator
        .start(TestFixtures::dense_catalog(12), 20)
        .is_accepted());

    let (terminal, _) = TestHelpers::drain_until_terminal(&mut rx).await;
    let results = TestHelpers::completion_results(terminal);
    assert_eq!(results.len(), 3);
}
