//! EcoChef CLI - recipe recommendations from the terminal

use clap::Parser;
use env_logger::Env;
use log::LevelFilter;

mod cli;
mod client;
mod config;
mod error;
mod guard;
mod models;
mod normalize;
mod output;
mod session;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `RUST_LOG` (default `warn`) sets the base filter; `--debug` raises only
/// this crate to debug.
fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module("ecochef", LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        None => cli::navigate::open(&opts, "/"),
        Some(Commands::Open { path }) => cli::navigate::open(&opts, &path),
        Some(Commands::Login { email, password }) => cli::auth::login(&opts, email, password).await,
        Some(Commands::Register {
            name,
            email,
            password,
            dietary,
        }) => cli::auth::register(&opts, name, email, password, dietary).await,
        Some(Commands::Logout) => cli::auth::logout(&opts),
        Some(Commands::Search {
            ingredients,
            dietary,
            interactive,
        }) => cli::recipe::search(&opts, ingredients, dietary, interactive).await,
        Some(Commands::Like { title }) => cli::recipe::like(&opts, title, true).await,
        Some(Commands::Dislike { title }) => cli::recipe::like(&opts, title, false).await,
        Some(Commands::Feedback { title, rating }) => {
            cli::recipe::feedback(&opts, title, rating).await
        }
        Some(Commands::Status) => cli::status::run(&opts),
        Some(Commands::Version) => {
            println!("ecochef version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
