use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unknown digest algorithm: {0}")]
    UnknownAlgorithm(String),
}
