use crate::publish::PublishStep;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PicstashError {
    #[error("{0}")]
    Usage(String),

    #[error("Filesystem error: {0}")]
    Filesystem(String),

    #[error("Failed to download image: HTTP status {0}")]
    FetchStatus(u16),

    #[error("Failed to download image: {0}")]
    Fetch(String),

    #[error("Too many redirects (gave up after {0} hops)")]
    RedirectLoop(usize),

    #[error("Could not decode image: {0}")]
    Decode(String),

    #[error("Write error: {0}")]
    Write(String),

    #[error("git {step} failed: {message}")]
    Publish {
        step: PublishStep,
        message: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PicstashError>;
