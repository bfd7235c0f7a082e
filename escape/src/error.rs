use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The text is not the body of a valid JSON string literal
    #[error("invalid JSON string body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown escape dialect: {0}")]
    UnknownDialect(String),
}
