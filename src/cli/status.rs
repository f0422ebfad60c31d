//! Status command implementation

use colored::Colorize;
use serde::Serialize;

use crate::cli::navigate::screen_hint;
use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::guard::{self, Route};
use crate::output::json;

/// Status snapshot for JSON output
#[derive(Debug, Serialize)]
struct StatusReport {
    config_file: String,
    api_url: String,
    authenticated: bool,
    user_id: Option<String>,
    home: String,
}

/// Run the status command to display configuration and session status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let session = ctx.store.get();
    let home = guard::land(&Route::Root, session.is_some());

    if ctx.format == OutputFormat::Json {
        let report = StatusReport {
            config_file: ctx.store.path().display().to_string(),
            api_url: ctx.api_url.clone(),
            authenticated: session.is_some(),
            user_id: session.map(|s| s.user_id.clone()),
            home: Route::from(home).to_string(),
        };
        println!("{}", json::format_json(&report)?);
        return Ok(());
    }

    println!("{}\n", "EcoChef Status".bold());

    let config_note = if ctx.store.path().exists() {
        String::new()
    } else {
        format!(" {}", "(not created yet)".dimmed())
    };
    println!(
        "Config file: {}{}",
        ctx.store.path().display().to_string().cyan(),
        config_note
    );
    println!("API URL: {}", ctx.api_url.cyan());
    println!();

    match session {
        Some(session) => {
            println!(
                "{} Logged in as user {}",
                "✓".green(),
                session.user_id.bold()
            );
        }
        None => {
            println!("{} Not logged in", "✗".red());
        }
    }
    println!("  → Run '{}'", screen_hint(home));
    println!();

    Ok(())
}
