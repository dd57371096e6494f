pub mod issues;
pub mod utils;

pub use issues::{print_issue_table, OutputFormat};
pub use utils::{cell_text, format_relative_time, truncate};
