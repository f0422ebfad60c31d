//! Command execution context
//!
//! Bundles what every command needs: the session store loaded from the
//! config file, an API client pointed at the resolved base URL, and the
//! output format.

use log::debug;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::EcoChefClient;
use crate::config::Config;
use crate::error::Result;
use crate::session::SessionStore;

/// Context for command execution.
pub struct CommandContext {
    /// Session store backed by the config file
    pub store: SessionStore,
    /// API client
    pub client: EcoChefClient,
    /// Resolved output format
    pub format: OutputFormat,
    /// Resolved API base URL
    pub api_url: String,
}

impl CommandContext {
    /// Load the config (a missing file is fine) and build the client.
    ///
    /// No network call happens here.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let path = Config::resolve_path(opts.config_ref())?;
        debug!("Using config file {}", path.display());

        let store = SessionStore::open(path)?;
        let api_url = store.config().api_url(opts.api_url_ref());
        let client = EcoChefClient::new(api_url.clone())?;
        debug!("Using API at {}", client.base_url());

        let format = resolve_format(opts.format, store.config());

        Ok(Self {
            store,
            client,
            format,
            api_url,
        })
    }
}

/// CLI/env format wins, then the config preference, then pretty.
fn resolve_format(cli_format: Option<OutputFormat>, config: &Config) -> OutputFormat {
    cli_format
        .or_else(|| {
            config
                .preferences
                .format
                .as_deref()
                .and_then(OutputFormat::from_name)
        })
        .unwrap_or_default()
}
