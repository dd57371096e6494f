use chrono::{DateTime, NaiveDate, Utc};
use clap::{Arg, ArgMatches, Command};
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::cli_context::CliContext;
use crate::error::{ErrorContext, SearchError, SearchResult};
use crate::filtering::search::{ListOptions, TimeField, TimeRange};
use crate::formatting::{print_issue_table, OutputFormat};
use crate::pagination::fetch_all;
use crate::table::to_table;

pub fn command() -> Command {
    Command::new("issues")
        .about("Search a repository's issues within a time range")
        .arg(
            Arg::new("owner")
                .long("owner")
                .short('o')
                .help("Repository owner (defaults to the configured owner)"),
        )
        .arg(
            Arg::new("repo")
                .long("repo")
                .short('r')
                .help("Repository name (defaults to the configured repository)"),
        )
        .arg(
            Arg::new("field")
                .long("field")
                .short('f')
                .help("Timestamp the range applies to: created, closed or updated")
                .default_value("created"),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .help("Start of the range (RFC 3339 or YYYY-MM-DD)")
                .required(true),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("End of the range (RFC 3339 or YYYY-MM-DD), defaults to now"),
        )
        .arg(
            Arg::new("query")
                .long("query")
                .short('q')
                .help("Extra search terms appended to the filter, e.g. 'label:bug'"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format: table, simple or json")
                .default_value("table"),
        )
}

/// Parse an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date as midnight UTC.
pub fn parse_datetime(input: &str) -> SearchResult<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(input) {
        return Ok(t.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            SearchError::ParseError(format!(
                "Invalid time '{}'. Use RFC 3339 (2020-08-19T00:00:00Z) or YYYY-MM-DD",
                input
            ))
        })
}

/// Build list options from arguments, falling back to configured defaults.
pub fn list_options(
    matches: &ArgMatches,
    default_owner: Option<&str>,
    default_repository: Option<&str>,
) -> SearchResult<ListOptions> {
    let owner = matches
        .get_one::<String>("owner")
        .map(String::as_str)
        .or(default_owner)
        .ok_or_else(|| SearchError::InvalidInput("--owner is required".to_string()))?;
    let repository = matches
        .get_one::<String>("repo")
        .map(String::as_str)
        .or(default_repository)
        .ok_or_else(|| SearchError::InvalidInput("--repo is required".to_string()))?;

    let time_field = match matches.get_one::<String>("field") {
        Some(field) => field.parse::<TimeField>()?,
        None => TimeField::default(),
    };

    Ok(ListOptions {
        owner: owner.to_string(),
        repository: repository.to_string(),
        time_field,
        query: matches.get_one::<String>("query").cloned(),
    })
}

pub fn time_range(matches: &ArgMatches) -> SearchResult<TimeRange> {
    let from = matches
        .get_one::<String>("from")
        .ok_or_else(|| SearchError::InvalidInput("--from is required".to_string()))
        .and_then(|s| parse_datetime(s))?;
    let to = match matches.get_one::<String>("to") {
        Some(s) => parse_datetime(s)?,
        None => Utc::now(),
    };

    if from > to {
        warn!(%from, %to, "time range starts after it ends");
    }

    Ok(TimeRange::new(from, to))
}

/// Cancel `token` on the first Ctrl-C.
fn cancel_on_ctrl_c(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Ctrl-C received, cancelling search");
            token.cancel();
        }
    });
}

pub async fn handle_issues(matches: &ArgMatches) -> SearchResult<()> {
    let mut context = CliContext::load();
    let client = context.client().context("Failed to create GitHub client")?;

    let opts = list_options(
        matches,
        context.config().default_owner.as_deref(),
        context.config().default_repository.as_deref(),
    )?;
    let range = time_range(matches)?;
    let format = match matches.get_one::<String>("format") {
        Some(f) => f.parse::<OutputFormat>()?,
        None => OutputFormat::default(),
    };

    let cancel = CancellationToken::new();
    cancel_on_ctrl_c(cancel.clone());

    let issues = fetch_all(client.as_ref(), &opts, &range, &cancel).await?;
    let table = to_table(&issues);

    if format != OutputFormat::Json {
        println!("Found {} issues in {}/{}:", table.len(), opts.owner, opts.repository);
    }
    print_issue_table(&table, format)
}
