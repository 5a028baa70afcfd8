use thiserror::Error;

/// Errors that can occur within a `CandleSource` implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The venue's API returned a non-success response.
    #[error("API error: {0}")]
    Api(String),

    /// The response body could not be mapped onto the canonical models.
    #[error("Response decode error: {0}")]
    Decode(String),

    /// The request parameters were invalid for this source.
    #[error("Invalid parameters for source: {0}")]
    Validation(String),
}
