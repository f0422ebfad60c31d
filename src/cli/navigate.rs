//! Route resolution commands and guard checks used by other handlers

use colored::Colorize;
use serde::Serialize;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::guard::{self, Navigation, Route, Screen};
use crate::output::json;
use crate::session::SessionStore;

/// Check that `screen` renders for the current session.
///
/// Returns the route the guard redirects to when it does not.
pub fn enter(store: &SessionStore, screen: Screen) -> std::result::Result<(), Route> {
    match guard::resolve(&Route::from(screen), store.is_authenticated()) {
        Navigation::Render(_) => Ok(()),
        Navigation::Redirect(route) => Err(route),
    }
}

/// Command to run for each screen
pub fn screen_hint(screen: Screen) -> &'static str {
    match screen {
        Screen::Login => "ecochef login",
        Screen::Register => "ecochef register",
        Screen::Search => "ecochef search --ingredients \"tomato, onion\"",
    }
}

fn screen_name(screen: Screen) -> &'static str {
    match screen {
        Screen::Login => "login",
        Screen::Register => "register",
        Screen::Search => "recipe search",
    }
}

/// Route resolution for JSON output
#[derive(Debug, Serialize)]
struct RouteReport {
    route: String,
    authenticated: bool,
    redirect: Option<String>,
    screen: String,
}

/// Resolve a route path for the current session and print where it lands
pub fn open(opts: &GlobalOptions, path: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let route = Route::parse(path);
    let authenticated = ctx.store.is_authenticated();
    let redirect = match guard::resolve(&route, authenticated) {
        Navigation::Redirect(to) => Some(to),
        Navigation::Render(_) => None,
    };
    let screen = guard::land(&route, authenticated);

    if ctx.format == OutputFormat::Json {
        let report = RouteReport {
            route: route.to_string(),
            authenticated,
            redirect: redirect.map(|r| r.to_string()),
            screen: Route::from(screen).to_string(),
        };
        println!("{}", json::format_json(&report)?);
        return Ok(());
    }

    match redirect {
        Some(to) => println!("{} {} {}", route.to_string().bold(), "→".dimmed(), to),
        None => println!("{}", route.to_string().bold()),
    }
    println!(
        "Showing the {} screen. Run {}",
        screen_name(screen),
        screen_hint(screen).cyan()
    );

    Ok(())
}
