use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::client::{GraphQLRequest, Transport};
use crate::error::{SearchError, SearchResult};

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
}

#[async_trait]
impl Transport for StubTransport {
    async fn query(&self, request: &GraphQLRequest) -> SearchResult<Value> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self.responses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(SearchError::ApiError("no stubbed response left".to_string())))
    }
}

pub fn issue_node(number: i64) -> Value {
    json!({
        "__typename": "Issue",
        "number": number,
        "title": format!("Issue {}", number),
        "closed": false,
        "createdAt": "2021-01-01T00:00:00Z",
        "closedAt": null,
        "author": { "login": "octocat", "company": null },
        "repository": { "name": "widgets", "owner": { "login": "acme" } }
    })
}

pub fn page(numbers: std::ops::Range<i64>, has_next_page: bool, end_cursor: Option<&str>) -> Value {
    let nodes: Vec<Value> = numbers.map(issue_node).collect();
    json!({
        "search": {
            "nodes": nodes,
            "pageInfo": { "hasNextPage": has_next_page, "endCursor": end_cursor }
        }
    })
}
