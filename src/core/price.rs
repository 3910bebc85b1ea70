//! Price source abstraction and upstream failure taxonomy.

use async_trait::async_trait;
use thiserror::Error;

use crate::core::model::PriceBoard;

/// What went wrong while talking to an upstream feed.
///
/// Callers absorb these into static fallbacks; keeping the variants apart
/// means a schema mismatch in a payload is still distinguishable from a
/// network glitch in the logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("upstream reported failure: {0}")]
    Upstream(String),
    #[error("malformed upstream payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A strategy producing the full canonical price board.
///
/// Infallible by contract: implementations must return their static
/// fallback data when live upstream data cannot be obtained, so the HTTP
/// read path always has a well-formed snapshot to serve.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch_prices(&self) -> PriceBoard;
}
