use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("GitHub token not found. Set GITHUB_TOKEN or run 'gh-issues auth --token <TOKEN>'.")]
    TokenNotFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("GraphQL error: {0}")]
    GraphQLError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("State error: {0}")]
    StateError(String),

    #[error("Request cancelled")]
    Cancelled,

    /// A page request failed; carries which page and cursor were in flight.
    #[error("Failed to fetch page {page} (cursor: {}): {source}", .cursor.as_deref().unwrap_or("<none>"))]
    PageFetch {
        page: usize,
        cursor: Option<String>,
        #[source]
        source: Box<SearchError>,
    },

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl SearchError {
    /// True when the error, or the page failure it wraps, is a cancellation.
    pub fn is_cancelled(&self) -> bool {
        match self {
            SearchError::Cancelled => true,
            SearchError::PageFetch { source, .. } => source.is_cancelled(),
            _ => false,
        }
    }
}

pub type SearchResult<T> = Result<T, SearchError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> SearchResult<T>;
    fn with_context<F>(self, f: F) -> SearchResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> SearchResult<T> {
        self.map_err(|e| SearchError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> SearchResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| SearchError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> SearchResult<T> {
        self.ok_or_else(|| SearchError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> SearchResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| SearchError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! search_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::SearchError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::SearchError::$error_type(format!($fmt, $($arg)*))
    };
}
