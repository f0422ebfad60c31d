//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod auth;
pub mod context;
pub mod navigate;
pub mod recipe;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

use crate::client::models::Rating;

/// EcoChef - recipe recommendations from the terminal
#[derive(Parser, Debug)]
#[command(name = "ecochef")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute; without one, shows where you land
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "ECOCHEF_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "ECOCHEF_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the EcoChef API base URL
    #[arg(long, global = true, env = "ECOCHEF_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "ECOCHEF_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session
    Login {
        /// Account email (prompted if omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Account password (prompted if omitted)
        #[arg(long, env = "ECOCHEF_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Create an account
    Register {
        /// Display name (prompted if omitted)
        #[arg(long, short = 'n')]
        name: Option<String>,

        /// Account email (prompted if omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Account password (prompted if omitted)
        #[arg(long, env = "ECOCHEF_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        /// Comma-separated dietary preferences, e.g. "vegan, gluten-free"
        #[arg(long, short = 'd')]
        dietary: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Search recipes by ingredients and dietary preference
    #[command(after_help = "EXAMPLES:\n  \
        ecochef search -i \"tomato, onion\"\n  \
        ecochef search -i \"rice, beans\" -d vegan\n  \
        ecochef search -i chicken --interactive     # like/rate from the results")]
    Search {
        /// Ingredients you have, free text
        #[arg(long, short = 'i', default_value = "")]
        ingredients: String,

        /// Dietary preference, free text
        #[arg(long, short = 'd', default_value = "")]
        dietary: String,

        /// Pick recipes from the results to like, dislike or rate
        #[arg(long, short = 'I')]
        interactive: bool,
    },

    /// Like a recipe
    Like {
        /// Recipe title
        title: String,
    },

    /// Dislike a recipe
    Dislike {
        /// Recipe title
        title: String,
    },

    /// Rate a recipe from 1 to 5
    Feedback {
        /// Recipe title
        title: String,

        /// Rating from 1 to 5
        #[arg(value_parser = args::parse_rating)]
        rating: Rating,
    },

    /// Show which screen a route path leads to
    Open {
        /// Route path such as /login or /recipe-search
        #[arg(default_value = "/")]
        path: String,
    },

    /// Show configuration and session status
    Status,

    /// Display version information
    Version,
}
