use thiserror::Error;

pub type Result<T> = std::result::Result<T, InferenceError>;

/// Errors from the hosted inference endpoints
#[derive(Error, Debug)]
pub enum InferenceError {
    /// The HTTP request could not be sent or completed
    #[error("inference request failed: {0}")]
    RequestFailed(String),

    /// The endpoint answered with a non-success status
    #[error("inference API error ({status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body, when available
        message: String,
    },

    /// The response body did not match the expected shape
    #[error("failed to parse inference response: {0}")]
    ParseError(String),
}
