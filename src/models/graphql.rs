use serde::Deserialize;
use serde_json::Value;

use super::{Issue, IssueNode};

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T = Value> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default)]
    pub extensions: Option<Value>,
}

// Search data structures
#[derive(Debug, Deserialize)]
pub struct SearchData {
    pub search: SearchConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConnection {
    #[serde(default)]
    pub nodes: Vec<Option<SearchNode>>,
    pub page_info: PageInfo,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

/// One entry of a search result, discriminated by `__typename`.
///
/// Only issues are consumed; pull requests, repositories, users and any
/// type added to the API later all land in `Other`.
#[derive(Debug, Deserialize)]
#[serde(tag = "__typename")]
pub enum SearchNode {
    Issue(IssueNode),
    #[serde(other)]
    Other,
}

impl SearchNode {
    pub fn as_issue(&self) -> Option<&IssueNode> {
        match self {
            SearchNode::Issue(node) => Some(node),
            SearchNode::Other => None,
        }
    }

    pub fn into_issue(self) -> Option<Issue> {
        match self {
            SearchNode::Issue(node) => Some(node.into()),
            SearchNode::Other => None,
        }
    }
}

impl SearchConnection {
    /// Issues on this page in server order; non-issue and null nodes are dropped.
    pub fn into_issues(self) -> Vec<Issue> {
        self.nodes
            .into_iter()
            .flatten()
            .filter_map(SearchNode::into_issue)
            .collect()
    }
}
