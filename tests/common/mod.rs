#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use gh_issue_search::{GraphQLRequest, SearchError, SearchResult, Transport};

/// Replays canned responses in order and records every request.
pub struct StubTransport {
    responses: Mutex<VecDeque<SearchResult<Value>>>,
    requests: Mutex<Vec<GraphQLRequest>>,
}

impl StubTransport {
    pub fn new(responses: Vec<SearchResult<Value>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<GraphQLRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn cursors(&self) -> Vec<Option<String>> {
        self.requests()
            .iter()
            .map(|r| r.variable("cursor").and_then(Value::as_str).map(str::to_string))
            .collect()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn query(&self, request: &GraphQLRequest) -> SearchResult<Value> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self.responses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(SearchError::ApiError("no stubbed response left".to_string())))
    }
}

/// Never answers; counts how many requests were started.
pub struct HangingTransport {
    started: Mutex<usize>,
}

impl HangingTransport {
    pub fn new() -> Self {
        Self { started: Mutex::new(0) }
    }

    pub fn started(&self) -> usize {
        *self.started.lock().unwrap()
    }
}

#[async_trait]
impl Transport for HangingTransport {
    async fn query(&self, _request: &GraphQLRequest) -> SearchResult<Value> {
        *self.started.lock().unwrap() += 1;
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Err(SearchError::ApiError("timed out".to_string()))
    }
}

/// Even-numbered issues are closed, odd ones open.
pub fn issue_node(number: i64) -> Value {
    let closed = number % 2 == 0;
    let closed_at = if closed {
        json!("2021-02-01T00:00:00Z")
    } else {
        Value::Null
    };
    json!({
        "__typename": "Issue",
        "number": number,
        "title": format!("Issue {}", number),
        "closed": closed,
        "createdAt": "2021-01-01T00:00:00Z",
        "closedAt": closed_at,
        "author": { "login": format!("user{}", number), "company": null },
        "repository": { "name": "widgets", "owner": { "login": "acme" } }
    })
}

pub fn page_of(nodes: Vec<Value>, has_next_page: bool, end_cursor: Option<&str>) -> Value {
    json!({
        "search": {
            "nodes": nodes,
            "pageInfo": { "hasNextPage": has_next_page, "endCursor": end_cursor }
        }
    })
}

pub fn page(numbers: std::ops::Range<i64>, has_next_page: bool, end_cursor: Option<&str>) -> Value {
    page_of(numbers.map(issue_node).collect(), has_next_page, end_cursor)
}
