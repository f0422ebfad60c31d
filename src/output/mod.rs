//! Output formatting for CLI results

use colored::Colorize;

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

pub mod json;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        let output = self.format(format)?;
        println!("{}", output);
        Ok(())
    }
}

/// Print a one-line success notification
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print a failure notification without aborting the command
pub fn failure(err: &Error) {
    eprintln!("{} {}", "✗".red(), err);
}
