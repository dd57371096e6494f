use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::cli_context::CliContext;
use crate::error::SearchResult;

pub fn command() -> Command {
    Command::new("auth")
        .about("Store or show the GitHub token")
        .arg(
            Arg::new("token")
                .long("token")
                .help("Personal access token to save"),
        )
        .arg(
            Arg::new("show")
                .long("show")
                .help("Show the configured token (masked)")
                .action(ArgAction::SetTrue),
        )
}

/// Mask all but the ends of a token for display.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 12 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

pub async fn handle_auth(matches: &ArgMatches) -> SearchResult<()> {
    let mut context = CliContext::load();

    if let Some(token) = matches.get_one::<String>("token") {
        context.set_token(token.clone())?;
        println!("Token saved successfully!");
    } else if matches.get_flag("show") {
        match context.config().token.as_deref() {
            Some(token) => println!("Token: {}", mask_token(token)),
            None => println!("No token configured"),
        }
    } else {
        println!("Usage: gh-issues auth --token <TOKEN> or gh-issues auth --show");
    }
    Ok(())
}
