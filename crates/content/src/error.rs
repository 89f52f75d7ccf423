use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Text-generation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Text-generation API returned an error: {0}")]
    ApiError(String),

    #[error("Text-generation response had no text content")]
    EmptyResponse,
}
