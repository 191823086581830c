use reqwest::StatusCode;
use thiserror::Error;

/// Failure taxonomy shared by both operations. None of these are retried.
#[derive(Error, Debug)]
pub enum ThingsBoardError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error code: {0}")]
    Protocol(StatusCode),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
