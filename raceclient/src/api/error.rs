use thiserror::Error;

/// Unified error type of the race server boundary.
#[derive(Error, Debug)]
pub enum RaceApiError {
    #[error("Request to the race server failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Race server returned status {status} for {endpoint}!")]
    ServerStatus {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid race server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, RaceApiError>;
