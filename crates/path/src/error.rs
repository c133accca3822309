use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path must be an array of tokens or a delimited string")]
    InvalidShape,
    #[error("path token must be a string or a non-negative integer")]
    InvalidToken,
    #[error("path has no tokens")]
    Empty,
    #[error("path delimiter must be a non-empty string")]
    InvalidDelimiter,
}
