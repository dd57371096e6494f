//! Cursor-driven walk over every page of an issue search.
//!
//! [`IssuePager`] is a small state machine: each call to
//! [`IssuePager::next_page`] issues exactly one request and moves the pager
//! from `Requesting` to `Requesting` (more pages), `Done` or `Failed`.
//! [`fetch_all`] drives it to completion. Issues gathered so far are only
//! handed out once the pager reaches `Done`, so a failure on any page
//! yields an error and nothing else.

use serde_json::json;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::client::{GraphQLRequest, Transport};
use crate::constants::{ISSUE_FIELDS, PAGE_SIZE};
use crate::error::{SearchError, SearchResult};
use crate::filtering::search::{build_search_filter, ListOptions, TimeRange};
use crate::models::{Issues, SearchData};

/// The search document, selecting only the issue branch of each node.
pub fn search_issues_query() -> String {
    format!(
        r#"
        query($query: String!, $cursor: String, $first: Int!) {{
            search(query: $query, type: ISSUE, first: $first, after: $cursor) {{
                nodes {{
                    __typename
                    ... on Issue {{{}}}
                }}
                pageInfo {{
                    hasNextPage
                    endCursor
                }}
            }}
        }}
    "#,
        ISSUE_FIELDS
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    /// Ready to request the page after `cursor` (`None` for the first page).
    Requesting { cursor: Option<String> },
    Done,
    Failed,
}

/// Outcome of a successful page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStep {
    HasMore(String),
    Done,
}

pub struct IssuePager<'a, T: Transport + ?Sized> {
    transport: &'a T,
    query: String,
    filter: String,
    state: PageState,
    pages: usize,
    issues: Issues,
}

impl<'a, T: Transport + ?Sized> IssuePager<'a, T> {
    pub fn new(transport: &'a T, filter: impl Into<String>) -> Self {
        Self {
            transport,
            query: search_issues_query(),
            filter: filter.into(),
            state: PageState::Requesting { cursor: None },
            pages: 0,
            issues: Vec::new(),
        }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages
    }

    /// Issues accumulated so far, for inspection only.
    pub fn issues_so_far(&self) -> usize {
        self.issues.len()
    }

    /// Request the next page and fold its issues into the accumulator.
    ///
    /// Fails with `StateError` unless the pager is `Requesting`. Any other
    /// failure moves the pager to `Failed` and discards what was gathered.
    pub async fn next_page(&mut self, cancel: &CancellationToken) -> SearchResult<PageStep> {
        let cursor = match &self.state {
            PageState::Requesting { cursor } => cursor.clone(),
            PageState::Done => {
                return Err(SearchError::StateError("search already finished".to_string()))
            }
            PageState::Failed => {
                return Err(SearchError::StateError("search already failed".to_string()))
            }
        };
        let page = self.pages + 1;

        let result = self.request(&cursor, cancel).await;
        match result {
            Ok(data) => {
                let connection = data.search;
                let page_info = connection.page_info.clone();
                let issues = connection.into_issues();
                debug!(
                    page,
                    items = issues.len(),
                    has_next_page = page_info.has_next_page,
                    "fetched search page"
                );

                self.pages = page;
                self.issues.extend(issues);

                if !page_info.has_next_page {
                    self.state = PageState::Done;
                    return Ok(PageStep::Done);
                }

                match page_info.end_cursor {
                    Some(next) => {
                        self.state = PageState::Requesting {
                            cursor: Some(next.clone()),
                        };
                        Ok(PageStep::HasMore(next))
                    }
                    None => Err(self.fail(
                        page,
                        cursor,
                        SearchError::GraphQLError(
                            "hasNextPage is true but endCursor is missing".to_string(),
                        ),
                    )),
                }
            }
            Err(e) => Err(self.fail(page, cursor, e)),
        }
    }

    async fn request(
        &self,
        cursor: &Option<String>,
        cancel: &CancellationToken,
    ) -> SearchResult<SearchData> {
        let request = GraphQLRequest::new(
            self.query.as_str(),
            json!({
                "query": self.filter,
                "cursor": cursor,
                "first": PAGE_SIZE,
            }),
        );

        let data = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(SearchError::Cancelled),
            result = self.transport.query(&request) => result?,
        };

        Ok(serde_json::from_value(data)?)
    }

    fn fail(&mut self, page: usize, cursor: Option<String>, source: SearchError) -> SearchError {
        warn!(page, cursor = cursor.as_deref().unwrap_or("<none>"), error = %source, "search page failed");
        self.state = PageState::Failed;
        self.issues = Vec::new();
        SearchError::PageFetch {
            page,
            cursor,
            source: Box::new(source),
        }
    }

    /// Hand over the accumulated issues once every page has been read.
    pub fn finish(self) -> SearchResult<Issues> {
        match self.state {
            PageState::Done => Ok(self.issues),
            PageState::Requesting { .. } => Err(SearchError::StateError(
                "search has more pages to fetch".to_string(),
            )),
            PageState::Failed => Err(SearchError::StateError("search failed".to_string())),
        }
    }
}

/// Fetch every issue matching `opts` within `range`, in server order.
pub async fn fetch_all<T: Transport + ?Sized>(
    transport: &T,
    opts: &ListOptions,
    range: &TimeRange,
    cancel: &CancellationToken,
) -> SearchResult<Issues> {
    let filter = build_search_filter(opts, range);
    debug!(filter = %filter, "starting issue search");

    let mut pager = IssuePager::new(transport, filter);
    while let PageStep::HasMore(_) = pager.next_page(cancel).await? {}

    let pages = pager.pages_fetched();
    let issues = pager.finish()?;
    info!(
        owner = %opts.owner,
        repository = %opts.repository,
        pages,
        issues = issues.len(),
        "issue search complete"
    );
    Ok(issues)
}
