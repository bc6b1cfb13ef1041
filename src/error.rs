//! Error types for AuthSense

use thiserror::Error;

/// Errors surfaced by the capture adapter, profile store, and pipeline.
///
/// Collection and scoring themselves are total: `SignalCollector` drops
/// malformed samples instead of failing, and `RiskScorer::score` has no
/// error path.
#[derive(Debug, Error)]
pub enum SenseError {
    #[error("Failed to parse capture session: {0}")]
    CaptureParse(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Profile store error: {0}")]
    Storage(String),
}
