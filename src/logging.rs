use std::fs::{create_dir_all, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Local;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::error::SearchResult;

const DEFAULT_FILTER: &str = "gh_issue_search=debug";

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
}

pub fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("gh-issue-search")
        .join("logs")
}

/// Send tracing output to a fresh per-run file under the cache directory.
///
/// Output stays off stderr so it never mixes with table output.
pub fn init_logging() -> SearchResult<()> {
    let log_dir = log_dir();
    create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!("gh-issues-{}.log", Local::now().format("%Y%m%d-%H%M%S")));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A subscriber may already be installed (e.g. by an embedding program).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(log_file.clone());
    }

    info!("Logging initialized to: {}", log_file.display());

    Ok(())
}

#[allow(deprecated)]
pub fn log_panic_info(info: &std::panic::PanicInfo<'_>) {
    let mut message = String::from("PANIC: ");

    if let Some(location) = info.location() {
        message.push_str(&format!(
            "at {}:{}:{} - ",
            location.file(),
            location.line(),
            location.column()
        ));
    }

    if let Some(s) = info.payload().downcast_ref::<&str>() {
        message.push_str(s);
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        message.push_str(s);
    } else {
        message.push_str("Unknown panic payload");
    }

    error!("{}", message);

    let backtrace = std::backtrace::Backtrace::capture();
    debug!("Backtrace:\n{}", backtrace);
}

pub fn get_log_file_path() -> Option<PathBuf> {
    LOG_FILE.lock().ok().and_then(|guard| guard.clone())
}
