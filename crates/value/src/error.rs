use thiserror::Error;

/// Errors raised while reading attribute nodes from their wire form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttributeError {
    #[error("NULL attribute must carry the value true")]
    NullNotTrue,
    #[error("invalid base64 payload in {tag} attribute")]
    InvalidBinary { tag: &'static str },
}
