// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod filtering;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod pagination;
pub mod table;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::{GraphQLClient, GraphQLRequest, Transport};
pub use config::{get_token, load_config, save_config, Config};
pub use error::{SearchError, SearchResult};
pub use filtering::{build_search_filter, ListOptions, TimeField, TimeRange};
pub use models::{Author, Issue, Issues, Repository, RepositoryOwner};
pub use pagination::{fetch_all, IssuePager, PageState, PageStep};
pub use table::{to_table, Cell, ColumnType, ColumnValues, IssueTable};
