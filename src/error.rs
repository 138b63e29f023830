//! Error types for Crewdesk

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("{0}")]
    Validation(String),

    #[error("Not logged in. Run 'crewdesk login' first.")]
    NotLoggedIn,

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this error is an authentication rejection from the server
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Error::Api { status, .. } if *status == reqwest::StatusCode::UNAUTHORIZED
        )
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
