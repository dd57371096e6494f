use std::str::FromStr;

use chrono::Utc;
use colored::*;

use super::utils::*;
use crate::error::{SearchError, SearchResult};
use crate::table::{Cell, IssueTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Simple,
    Json,
}

impl FromStr for OutputFormat {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(Self::Table),
            "simple" => Ok(Self::Simple),
            "json" => Ok(Self::Json),
            other => Err(SearchError::InvalidInput(format!(
                "Unknown format '{}'. Expected one of: table, simple, json",
                other
            ))),
        }
    }
}

fn state_label(closed: &Cell) -> ColoredString {
    match closed {
        Cell::Bool(true) => "closed".red(),
        _ => "open".green(),
    }
}

/// One-line summary of a row: `acme/widgets#12 Title (author, 3d ago)`.
pub fn format_simple_row(row: &[Cell]) -> Option<String> {
    let [title, author, _company, repo, number, _closed, created_at, _closed_at] = row else {
        return None;
    };

    let age = match created_at {
        Cell::Timestamp(t) => format_relative_time(t, &Utc::now()),
        other => cell_text(other),
    };

    Some(format!(
        "{}#{} {} ({}, {})",
        cell_text(repo),
        cell_text(number),
        cell_text(title),
        cell_text(author),
        age
    ))
}

pub fn print_issue_table(table: &IssueTable, format: OutputFormat) -> SearchResult<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(table)?);
        return Ok(());
    }

    if table.is_empty() {
        println!("{}", "No issues found.".dimmed());
        return Ok(());
    }

    match format {
        OutputFormat::Simple => {
            for row in table.rows() {
                if let Some(line) = format_simple_row(&row) {
                    println!("{}", line);
                }
            }
        }
        _ => {
            // Print header
            println!("{}", "─".repeat(130).dimmed());
            println!(
                "{:<8} {:<40} {:<16} {:<16} {:<7} {:<17} {:<17}",
                "Number".bold(),
                "Title".bold(),
                "Author".bold(),
                "Company".bold(),
                "State".bold(),
                "Created".bold(),
                "Closed".bold()
            );
            println!("{}", "─".repeat(130).dimmed());

            for row in table.rows() {
                let [title, author, company, _repo, number, closed, created_at, closed_at] =
                    row.as_slice()
                else {
                    continue;
                };

                println!(
                    "{:<8} {:<40} {:<16} {:<16} {:<7} {:<17} {:<17}",
                    cell_text(number).blue(),
                    truncate(&cell_text(title), 40),
                    truncate(&cell_text(author), 16).green(),
                    truncate(&cell_text(company), 16).dimmed(),
                    state_label(closed),
                    cell_text(created_at),
                    cell_text(closed_at)
                );
            }
            println!("{}", "─".repeat(130).dimmed());
        }
    }

    Ok(())
}
