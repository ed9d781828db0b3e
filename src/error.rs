use thiserror::Error;

/// Errors produced by the likesort library.
///
/// Empty results of an organize request are not errors; see
/// [`crate::organize::Outcome`].
#[derive(Error, Debug)]
pub enum Error {
    /// Any failed call against the catalog: network, expired auth, rate limit
    /// or a service-side error. Deliberately undifferentiated.
    #[error("Remote Error: {0}")]
    Remote(String),

    #[error("Configuration Error: {0}")]
    Configuration(String),

    #[error("Authentication Error: {0}")]
    Auth(String),

    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Remote(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
