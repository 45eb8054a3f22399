//! Error types for operation stream ingestion.

/// Error reading an operation stream.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DeltaError {
    /// Operation JSON is malformed or has an unexpected shape.
    #[error("invalid operation stream: {0}")]
    Json(#[from] serde_json::Error),
}
