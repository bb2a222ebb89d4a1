use thiserror::Error;

/// Failures that can escape crate initialization. Fetch failures never use
/// this type: they are converted into [`crate::api::ApiResult`] variants at
/// the component boundary and surfaced as display state.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
