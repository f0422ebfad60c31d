//! Shared CLI argument types

mod common;
mod global;

pub use common::{OutputFormat, parse_rating};
pub use global::GlobalOptions;
