use thiserror::Error;

/// Outcome of a failed call through the rate-limited fetcher.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Rate limit still exceeded after {attempts} attempts")]
    RateLimitExhausted { attempts: u32 },

    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Resource not found")]
    NotFound,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("JSON parsing error: {0}")]
    Decode(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("No matches found for this player")]
    NoMatchesFound,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
