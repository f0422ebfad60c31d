//! Common CLI types shared across commands

use clap::ValueEnum;

use crate::client::models::Rating;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - recipe cards and colored notices
    #[default]
    Pretty,
    /// Table format - one row per recipe
    Table,
    /// JSON format - structured for scripts
    Json,
}

impl OutputFormat {
    /// Parse a format name as stored in the config file
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_str(name, true).ok()
    }
}

/// Parse a 1-5 rating argument
pub fn parse_rating(value: &str) -> Result<Rating, String> {
    let number: i64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a whole number", value))?;
    u8::try_from(number)
        .map_err(|_| {
            format!(
                "rating must be between {} and {}, got {}",
                Rating::MIN,
                Rating::MAX,
                number
            )
        })
        .and_then(Rating::try_from)
}
