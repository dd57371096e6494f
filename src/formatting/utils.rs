use chrono::{DateTime, Utc};

use crate::table::Cell;

pub fn format_relative_time(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*timestamp);

    if duration.num_days() > 365 {
        format!("{}y ago", duration.num_days() / 365)
    } else if duration.num_days() > 30 {
        format!("{}mo ago", duration.num_days() / 30)
    } else if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Plain-text rendering of a table cell; nulls render as `-`.
pub fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::String(s) if s.is_empty() => "-".to_string(),
        Cell::String(s) => s.clone(),
        Cell::Int64(n) => n.to_string(),
        Cell::Bool(b) => b.to_string(),
        Cell::Timestamp(t) => t.format("%Y-%m-%d %H:%M").to_string(),
        Cell::Null => "-".to_string(),
    }
}
