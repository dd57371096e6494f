use std::sync::Arc;

use crate::client::GraphQLClient;
use crate::config::{get_token, load_config, save_config, Config};
use crate::constants::GITHUB_GRAPHQL_URL;
use crate::error::{SearchError, SearchResult};

/// Central context for CLI operations, managing configuration and client instances
pub struct CliContext {
    token: Option<String>,
    config: Config,
    client: Option<Arc<GraphQLClient>>,
}

impl CliContext {
    /// Create an empty context with default configuration
    pub fn new() -> Self {
        Self {
            token: None,
            config: Config::default(),
            client: None,
        }
    }

    /// Load context from saved configuration and the environment
    pub fn load() -> Self {
        Self {
            token: get_token().ok(),
            config: load_config(),
            client: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn api_url(&self) -> &str {
        self.config.api_url.as_deref().unwrap_or(GITHUB_GRAPHQL_URL)
    }

    /// Get or create a client (requires a token)
    pub fn client(&mut self) -> SearchResult<Arc<GraphQLClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let token = self.token()?.clone();
        let client = Arc::new(GraphQLClient::with_api_url(&token, self.api_url())?);
        self.client = Some(client.clone());
        Ok(client)
    }

    /// Get the token, loading it from the environment or config if necessary
    pub fn token(&mut self) -> SearchResult<&String> {
        if self.token.is_none() {
            self.token = Some(get_token()?);
        }

        self.token.as_ref().ok_or(SearchError::TokenNotFound)
    }

    /// Set and save a new token
    pub fn set_token(&mut self, token: String) -> SearchResult<()> {
        self.config.token = Some(token.clone());
        save_config(&self.config)?;
        self.token = Some(token);
        self.client = None;
        Ok(())
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating CLI contexts with specific configurations
#[derive(Default)]
pub struct CliContextBuilder {
    token: Option<String>,
    config: Option<Config>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> CliContext {
        let mut context = match self.config {
            Some(config) => CliContext {
                token: config.token.clone(),
                config,
                client: None,
            },
            None => CliContext::load(),
        };

        if let Some(token) = self.token {
            context.token = Some(token);
        }

        context
    }
}
