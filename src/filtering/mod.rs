pub mod search;

pub use search::{build_search_filter, format_timestamp, ListOptions, SearchQueryBuilder, TimeField, TimeRange};
