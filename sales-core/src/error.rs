use thiserror::Error;

/// Failures decoding a query response into typed rows.
///
/// Transport failures stay as `anyhow::Error` from the client; these cover
/// a response that arrived but can't be used.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("query returned errors: {}", .0.join("; "))]
    Server(Vec<String>),
    #[error("query response has no data")]
    MissingData,
    #[error("failed to decode query response: {0}")]
    Decode(#[from] serde_json::Error),
}
