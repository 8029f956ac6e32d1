//! Service layer for stockdash: cached history fetching, typed outcomes,
//! and input normalization over the provider client.

pub mod cache;
pub mod error;
pub mod history;
pub mod service;
pub mod validation;

pub use stockdash_api;
pub use stockdash_api::types;

pub use cache::HistoryCache;
pub use error::StockDashError;
pub use history::{HistoryOutcome, HistoryRequest, PriceSeries};
pub use service::HistoryService;
