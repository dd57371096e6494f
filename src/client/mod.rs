pub mod graphql;
pub mod transport;

pub use graphql::GraphQLClient;
pub use transport::{GraphQLRequest, Transport};
