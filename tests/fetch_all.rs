mod common;

use std::time::Duration;

use chrono::{TimeZone, Utc};
use serde_json::json;
use tokio_util::sync::CancellationToken;

use common::{issue_node, page, page_of, HangingTransport, StubTransport};
use gh_issue_search::{fetch_all, ListOptions, SearchError, TimeField, TimeRange};

fn options() -> ListOptions {
    ListOptions::new("acme", "widgets").with_time_field(TimeField::Created)
}

fn range() -> TimeRange {
    TimeRange::new(
        Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2021, 12, 31, 0, 0, 0).unwrap(),
    )
}

#[tokio::test]
async fn test_three_pages_are_accumulated_in_order() {
    let transport = StubTransport::new(vec![
        Ok(page(0..100, true, Some("c100"))),
        Ok(page(100..200, true, Some("c200"))),
        Ok(page(200..237, false, Some("c237"))),
    ]);

    let issues = fetch_all(&transport, &options(), &range(), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(issues.len(), 237);
    let numbers: Vec<i64> = issues.iter().map(|i| i.number).collect();
    assert_eq!(numbers, (0..237).collect::<Vec<i64>>());
    assert_eq!(transport.requests().len(), 3);
}

#[tokio::test]
async fn test_single_page_makes_one_call() {
    let transport = StubTransport::new(vec![Ok(page(0..12, false, Some("c12")))]);

    let issues = fetch_all(&transport, &options(), &range(), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(issues.len(), 12);
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_empty_result() {
    let transport = StubTransport::new(vec![Ok(page(0..0, false, None))]);

    let issues = fetch_all(&transport, &options(), &range(), &CancellationToken::new())
        .await
        .unwrap();

    assert!(issues.is_empty());
}

#[tokio::test]
async fn test_cursor_follows_previous_end_cursor() {
    let transport = StubTransport::new(vec![
        Ok(page(0..100, true, Some("Y3Vyc29yOjEwMA=="))),
        Ok(page(100..200, true, Some("Y3Vyc29yOjIwMA=="))),
        Ok(page(200..201, false, Some("Y3Vyc29yOjIwMQ=="))),
    ]);

    fetch_all(&transport, &options(), &range(), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(
        transport.cursors(),
        vec![
            None,
            Some("Y3Vyc29yOjEwMA==".to_string()),
            Some("Y3Vyc29yOjIwMA==".to_string()),
        ]
    );
    assert!(transport.requests()[0]
        .variable("cursor")
        .is_some_and(|c| c.is_null()));
}

#[tokio::test]
async fn test_every_request_uses_the_same_filter() {
    let transport = StubTransport::new(vec![
        Ok(page(0..1, true, Some("c1"))),
        Ok(page(1..2, false, None)),
    ]);
    let opts = options().with_query("label:bug");

    fetch_all(&transport, &opts, &range(), &CancellationToken::new())
        .await
        .unwrap();

    let expected = "is:issue repo:acme/widgets created:2021-01-01T00:00:00Z..2021-12-31T00:00:00Z label:bug";
    for request in transport.requests() {
        assert_eq!(
            request.variable("query").and_then(|q| q.as_str()),
            Some(expected)
        );
    }
}

#[tokio::test]
async fn test_failure_on_second_page_returns_no_issues() {
    let transport = StubTransport::new(vec![
        Ok(page(0..100, true, Some("c100"))),
        Err(SearchError::ApiError("API request failed with status 502".to_string())),
        Ok(page(100..137, false, None)),
    ]);

    let result = fetch_all(&transport, &options(), &range(), &CancellationToken::new()).await;

    match result {
        Err(SearchError::PageFetch { page, cursor, source }) => {
            assert_eq!(page, 2);
            assert_eq!(cursor.as_deref(), Some("c100"));
            assert!(matches!(*source, SearchError::ApiError(_)));
        }
        other => panic!("Expected PageFetch error, got {:?}", other),
    }
    // No retry and no third request.
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn test_non_issue_nodes_are_skipped() {
    let transport = StubTransport::new(vec![Ok(page_of(
        vec![
            issue_node(1),
            json!({ "__typename": "PullRequest", "number": 2, "title": "pr" }),
            json!(null),
            json!({ "__typename": "Repository", "name": "widgets" }),
            issue_node(3),
        ],
        false,
        None,
    ))]);

    let issues = fetch_all(&transport, &options(), &range(), &CancellationToken::new())
        .await
        .unwrap();

    let numbers: Vec<i64> = issues.iter().map(|i| i.number).collect();
    assert_eq!(numbers, vec![1, 3]);
}

#[tokio::test]
async fn test_cancelled_before_start_sends_nothing() {
    let transport = HangingTransport::new();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = fetch_all(&transport, &options(), &range(), &cancel)
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(transport.started(), 0);
}

#[tokio::test]
async fn test_cancel_during_request_aborts() {
    let transport = HangingTransport::new();
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel();
    });

    let err = tokio::time::timeout(
        Duration::from_secs(10),
        fetch_all(&transport, &options(), &range(), &cancel),
    )
    .await
    .expect("cancellation should end the search")
    .unwrap_err();

    assert!(err.is_cancelled());
    assert!(matches!(err, SearchError::PageFetch { page: 1, .. }));
    assert_eq!(transport.started(), 1);
}

#[tokio::test]
async fn test_independent_searches_run_concurrently() {
    let first = StubTransport::new(vec![
        Ok(page(0..100, true, Some("a"))),
        Ok(page(100..150, false, None)),
    ]);
    let second = StubTransport::new(vec![Ok(page(0..7, false, None))]);
    let cancel = CancellationToken::new();
    let opts_a = options();
    let opts_b = ListOptions::new("acme", "gadgets");
    let range = range();

    let (a, b) = tokio::join!(
        fetch_all(&first, &opts_a, &range, &cancel),
        fetch_all(&second, &opts_b, &range, &cancel),
    );

    assert_eq!(a.unwrap().len(), 150);
    assert_eq!(b.unwrap().len(), 7);
}
