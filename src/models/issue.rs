use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Author, Repository};

/// An issue as it appears inside the `... on Issue` branch of a search node.
#[derive(Debug, Deserialize, Clone)]
pub struct IssueNode {
    pub number: i64,
    pub title: String,
    #[serde(default)]
    pub closed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "closedAt", default)]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author: Option<Author>,
    pub repository: Repository,
}

/// A normalised issue. `closed_at` is `None` whenever the issue has no
/// close time, whether the API sent null or the zero instant.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Issue {
    pub number: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub closed: bool,
    pub author: Author,
    pub repository: Repository,
}

pub type Issues = Vec<Issue>;

impl From<IssueNode> for Issue {
    fn from(node: IssueNode) -> Self {
        Issue {
            number: node.number,
            title: node.title,
            created_at: node.created_at,
            closed_at: node.closed_at.filter(|t| !is_zero_instant(t)),
            closed: node.closed,
            author: node.author.unwrap_or_default(),
            repository: node.repository,
        }
    }
}

/// `0001-01-01T00:00:00Z`, the "unset" timestamp some producers emit instead of null.
pub fn zero_instant() -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn is_zero_instant(t: &DateTime<Utc>) -> bool {
    zero_instant().is_some_and(|zero| *t == zero)
}
