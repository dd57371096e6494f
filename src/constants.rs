pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";
pub const CONFIG_FILE: &str = ".gh-issue-search-config.json";
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";
pub const USER_AGENT: &str = concat!("gh-issue-search/", env!("CARGO_PKG_VERSION"));

/// Items requested per search page; the API maximum.
pub const PAGE_SIZE: u32 = 100;

// Issue fields selected from each search node
pub const ISSUE_FIELDS: &str = r#"
    number
    title
    closed
    createdAt
    closedAt
    author {
        ... on User {
            login
            company
        }
    }
    repository {
        name
        owner {
            login
        }
    }
"#;
