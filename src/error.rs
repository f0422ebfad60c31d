//! Error types for the EcoChef CLI

use thiserror::Error;

/// Result type alias for EcoChef operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A user action that reached the API and failed
    #[error("{action} failed: {source}")]
    Failed {
        action: &'static str,
        #[source]
        source: ApiError,
    },

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

impl Error {
    /// Attach the user-facing action name to an API failure.
    ///
    /// Non-API errors pass through untouched.
    pub fn during(action: &'static str) -> impl FnOnce(Error) -> Error {
        move |err| match err {
            Error::Api(source) => Error::Failed { action, source },
            other => other,
        }
    }
}

/// API-related errors
///
/// The server only hands back an optional message, so errors are not split
/// further than transport vs. status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} (run `ecochef logout` and `ecochef login` to sign in again)")]
    Unauthorized(String),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Local precondition failures around the stored session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Please login to search for recipes. Run `ecochef login` first.")]
    NotLoggedIn,
}

/// A recipe list field that could not be turned into a sequence of strings
#[derive(Debug, Error)]
#[error("Recipe '{title}' has a malformed {field} field: {reason}")]
pub struct NormalizeError {
    pub title: String,
    pub field: &'static str,
    pub reason: String,
}
