//! Error types for the service layer.

use std::fmt;

/// Errors produced by the service layer, wrapping provider client errors
/// and adding input parsing failures.
#[derive(Debug)]
pub enum StockDashError {
    /// An error from the underlying provider client.
    Api(stockdash_api::Error),
    /// User-provided input failed to parse.
    InvalidInput(String),
}

impl fmt::Display for StockDashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for StockDashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<stockdash_api::Error> for StockDashError {
    fn from(e: stockdash_api::Error) -> Self {
        Self::Api(e)
    }
}
