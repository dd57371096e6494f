use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::error::SearchResult;

/// A GraphQL document plus its variables.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GraphQLRequest {
    pub query: String,
    pub variables: Value,
}

impl GraphQLRequest {
    pub fn new(query: impl Into<String>, variables: Value) -> Self {
        Self {
            query: query.into(),
            variables,
        }
    }

    /// Look up a single variable, `None` if it is absent.
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }
}

/// Anything that can execute a GraphQL request and hand back its `data`.
///
/// Implementations report network, HTTP and GraphQL-level failures as
/// errors; callers decode the returned value into the shape they asked for.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn query(&self, request: &GraphQLRequest) -> SearchResult<Value>;
}
