use thiserror::Error;

/// Engine-level error type.
///
/// Only the data boundary can fail: catalog and resource-library loading and
/// validation. Per-request analysis is infallible by construction — empty
/// input yields an empty result, and resource lookup misses degrade to the
/// fallback template.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Malformed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Catalog(String),

    #[error("Invalid resource library: {0}")]
    Library(String),
}
