use std::process;

use clap::Command;

use gh_issue_search::commands::{auth, issues};
use gh_issue_search::logging::{get_log_file_path, init_logging, log_panic_info};

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }
    std::panic::set_hook(Box::new(|info| {
        log_panic_info(info);
        eprintln!("{}", info);
    }));

    let app = Command::new("gh-issues")
        .about("Search GitHub issues in a time range and print them as a table")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(auth::command())
        .subcommand(issues::command());

    let matches = app.get_matches();

    let result = match matches.subcommand() {
        Some(("auth", sub_matches)) => auth::handle_auth(sub_matches).await,
        Some(("issues", sub_matches)) => issues::handle_issues(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'gh-issues --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(path) = get_log_file_path() {
            eprintln!("See {} for details.", path.display());
        }
        process::exit(if e.is_cancelled() { 130 } else { 1 });
    }
}
