use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::SearchError;

/// Which timestamp of an issue the time range applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeField {
    #[default]
    Created,
    Closed,
    Updated,
}

impl TimeField {
    /// Get the search qualifier name
    pub fn qualifier(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Closed => "closed",
            Self::Updated => "updated",
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.qualifier())
    }
}

impl FromStr for TimeField {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "").as_str() {
            "created" | "createdat" => Ok(Self::Created),
            "closed" | "closedat" => Ok(Self::Closed),
            "updated" | "updatedat" => Ok(Self::Updated),
            _ => Err(SearchError::InvalidInput(format!(
                "Unknown time field '{}'. Expected one of: created, closed, updated",
                s
            ))),
        }
    }
}

/// What to search for. Owner and repository are not validated; empty values
/// still produce a well-formed filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListOptions {
    pub owner: String,
    pub repository: String,
    pub time_field: TimeField,
    pub query: Option<String>,
}

impl ListOptions {
    pub fn new(owner: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repository: repository.into(),
            ..Self::default()
        }
    }

    pub fn with_time_field(mut self, time_field: TimeField) -> Self {
        self.time_field = time_field;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}

/// A time window. `from <= to` is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }
}

/// RFC 3339 with whole seconds and a `Z` suffix, e.g. `2020-08-19T00:00:00Z`.
pub fn format_timestamp(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Builder for whitespace-separated search filter expressions
#[derive(Debug, Default)]
pub struct SearchQueryBuilder {
    terms: Vec<String>,
}

impl SearchQueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `name:value` qualifier
    pub fn qualifier(mut self, name: &str, value: &str) -> Self {
        self.terms.push(format!("{}:{}", name, value));
        self
    }

    pub fn repo(self, owner: &str, repository: &str) -> Self {
        self.qualifier("repo", &format!("{}/{}", owner, repository))
    }

    /// Add a `field:from..to` range qualifier
    pub fn range(self, field: TimeField, range: &TimeRange) -> Self {
        let value = format!("{}..{}", format_timestamp(&range.from), format_timestamp(&range.to));
        self.qualifier(field.qualifier(), &value)
    }

    /// Append free text verbatim. Blank text is ignored.
    pub fn text(mut self, text: Option<&str>) -> Self {
        if let Some(text) = text.filter(|t| !t.trim().is_empty()) {
            self.terms.push(text.to_string());
        }
        self
    }

    pub fn build(self) -> String {
        self.terms.join(" ")
    }
}

/// Build the issue search filter: type marker, repo scope, time range, then
/// any free text, in that order.
pub fn build_search_filter(opts: &ListOptions, range: &TimeRange) -> String {
    SearchQueryBuilder::new()
        .qualifier("is", "issue")
        .repo(&opts.owner, &opts.repository)
        .range(opts.time_field, range)
        .text(opts.query.as_deref())
        .build()
}
