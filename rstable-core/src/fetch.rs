use thiserror::Error;

/// Failure to retrieve the restaurant collection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("The server responded with HTTP status {0}")]
    Status(u16),
    #[error("The request failed: {0}")]
    Transport(String),
    #[error("Unable to decode the response: {0}")]
    Decode(String),
}
