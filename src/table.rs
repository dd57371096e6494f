//! Columnar view of a list of issues.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Issue;

pub const TABLE_NAME: &str = "issues";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    String,
    NullableString,
    Int64,
    Bool,
    Timestamp,
    NullableTimestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColumnValues {
    String(Vec<String>),
    NullableString(Vec<Option<String>>),
    Int64(Vec<i64>),
    Bool(Vec<bool>),
    Timestamp(Vec<DateTime<Utc>>),
    NullableTimestamp(Vec<Option<DateTime<Utc>>>),
}

impl ColumnValues {
    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::String(_) => ColumnType::String,
            Self::NullableString(_) => ColumnType::NullableString,
            Self::Int64(_) => ColumnType::Int64,
            Self::Bool(_) => ColumnType::Bool,
            Self::Timestamp(_) => ColumnType::Timestamp,
            Self::NullableTimestamp(_) => ColumnType::NullableTimestamp,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::String(v) => v.len(),
            Self::NullableString(v) => v.len(),
            Self::Int64(v) => v.len(),
            Self::Bool(v) => v.len(),
            Self::Timestamp(v) => v.len(),
            Self::NullableTimestamp(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        match self {
            Self::String(v) => v.get(index).map(|s| Cell::String(s.clone())),
            Self::NullableString(v) => v
                .get(index)
                .map(|s| s.clone().map_or(Cell::Null, Cell::String)),
            Self::Int64(v) => v.get(index).map(|n| Cell::Int64(*n)),
            Self::Bool(v) => v.get(index).map(|b| Cell::Bool(*b)),
            Self::Timestamp(v) => v.get(index).map(|t| Cell::Timestamp(*t)),
            Self::NullableTimestamp(v) => v
                .get(index)
                .map(|t| t.map_or(Cell::Null, Cell::Timestamp)),
        }
    }
}

/// A single value of a row.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    String(String),
    Int64(i64),
    Bool(bool),
    Timestamp(DateTime<Utc>),
    Null,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub values: ColumnValues,
}

impl Column {
    fn new(name: &'static str, values: ColumnValues) -> Self {
        Self {
            name,
            column_type: values.column_type(),
            values,
        }
    }
}

/// Fixed-schema table with one row per issue, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueTable {
    pub name: &'static str,
    columns: Vec<Column>,
}

impl IssueTable {
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut title = Vec::with_capacity(issues.len());
        let mut author = Vec::with_capacity(issues.len());
        let mut author_company = Vec::with_capacity(issues.len());
        let mut repo = Vec::with_capacity(issues.len());
        let mut number = Vec::with_capacity(issues.len());
        let mut closed = Vec::with_capacity(issues.len());
        let mut created_at = Vec::with_capacity(issues.len());
        let mut closed_at = Vec::with_capacity(issues.len());

        for issue in issues {
            title.push(issue.title.clone());
            author.push(issue.author.login.clone());
            author_company.push(issue.author.company.clone());
            repo.push(issue.repository.name_with_owner());
            number.push(issue.number);
            closed.push(issue.closed);
            created_at.push(issue.created_at);
            closed_at.push(issue.closed_at);
        }

        Self {
            name: TABLE_NAME,
            columns: vec![
                Column::new("title", ColumnValues::String(title)),
                Column::new("author", ColumnValues::String(author)),
                Column::new("author_company", ColumnValues::NullableString(author_company)),
                Column::new("repo", ColumnValues::String(repo)),
                Column::new("number", ColumnValues::Int64(number)),
                Column::new("closed", ColumnValues::Bool(closed)),
                Column::new("created_at", ColumnValues::Timestamp(created_at)),
                Column::new("closed_at", ColumnValues::NullableTimestamp(closed_at)),
            ],
        }
    }

    pub fn schema(&self) -> Vec<(&'static str, ColumnType)> {
        self.columns.iter().map(|c| (c.name, c.column_type)).collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&ColumnValues> {
        self.columns.iter().find(|c| c.name == name).map(|c| &c.values)
    }

    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn row(&self, index: usize) -> Option<Vec<Cell>> {
        self.columns.iter().map(|c| c.values.get(index)).collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }
}

pub fn to_table(issues: &[Issue]) -> IssueTable {
    IssueTable::from_issues(issues)
}
