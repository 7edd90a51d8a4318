use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong during a run.
///
/// Configuration variants are raised before any network traffic happens.
/// Upstream variants (`Http`, `UnexpectedResponse`) abort the run. Lyrics
/// failures never show up here: the lyrics resolver turns them into a
/// placeholder file instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("'{0}' is not a valid Spotify track URL")]
    InvalidTrackUrl(String),

    #[error(
        "Configuration file created at {}. Please fill in your credentials.",
        .0.display()
    )]
    CredentialsTemplateCreated(PathBuf),

    #[error(
        "Please fill in all required credentials in the configuration file at {}",
        .0.display()
    )]
    IncompleteCredentials(PathBuf),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
