//! Error types for the provider client.

/// Errors that can occur when requesting price history.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable body).
    #[error("Request failed")]
    RequestFailed,
    /// The provider returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The provider does not know the requested symbol.
    #[error("Symbol not found")]
    SymbolNotFound,
    /// The provider reported an error inside an otherwise successful response.
    #[error("Provider error {code}: {description}")]
    Provider { code: String, description: String },
    /// An HTTP 200 whose body carries neither a result nor an error object.
    #[error("Malformed provider response")]
    MalformedResponse,
}
