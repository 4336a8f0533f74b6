pub use reqwest::StatusCode;
use thiserror::Error;

/// Every way a single completion request can fail.
///
/// The session treats all of them alike (log and drop the request); the variants
/// exist so the log line says what actually went wrong.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server error: {0}")]
    Server(StatusCode),

    #[error("Request failed: {status} - {body}")]
    RequestFailed { status: StatusCode, body: String },

    #[error("API error: {0}")]
    Api(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;
