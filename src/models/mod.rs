pub mod graphql;
pub mod issue;
pub mod repository;
pub mod user;

// Re-export commonly used types
pub use graphql::{GraphQLError, GraphQLResponse, PageInfo, SearchConnection, SearchData, SearchNode};
pub use issue::{Issue, IssueNode, Issues};
pub use repository::{Repository, RepositoryOwner};
pub use user::Author;
