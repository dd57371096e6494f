use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;

use super::transport::{GraphQLRequest, Transport};
use crate::constants::{GITHUB_GRAPHQL_URL, USER_AGENT};
use crate::error::{SearchError, SearchResult};
use crate::models::GraphQLResponse;

/// GraphQL client for the GitHub API
pub struct GraphQLClient {
    client: Client,
    api_url: String,
}

impl GraphQLClient {
    pub fn new(token: &str) -> SearchResult<Self> {
        Self::with_api_url(token, GITHUB_GRAPHQL_URL)
    }

    /// Point the client at another endpoint, e.g. a GitHub Enterprise server.
    pub fn with_api_url(token: &str, api_url: &str) -> SearchResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("bearer {}", token))
            .map_err(|_| SearchError::ConfigError("Invalid token format".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Execute a raw GraphQL request
    async fn execute(&self, request: &GraphQLRequest) -> SearchResult<GraphQLResponse> {
        let response = self
            .client
            .post(&self.api_url)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SearchError::ApiError(format!(
                "API request failed with status {}: {}",
                status, error_text
            )));
        }

        Ok(response.json::<GraphQLResponse>().await?)
    }
}

/// Extract data from a GraphQL response, handling errors
pub fn extract_data(response: GraphQLResponse) -> SearchResult<Value> {
    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        let error_messages = errors
            .iter()
            .map(|e| e.message.clone())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(SearchError::GraphQLError(error_messages));
    }

    response
        .data
        .ok_or_else(|| SearchError::GraphQLError("No data in response".to_string()))
}

#[async_trait]
impl Transport for GraphQLClient {
    async fn query(&self, request: &GraphQLRequest) -> SearchResult<Value> {
        let response = self.execute(request).await?;
        extract_data(response)
    }
}
