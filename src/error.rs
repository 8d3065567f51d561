use thiserror::Error;

/// Errors produced by the color engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input was not a 3- or 6-digit hex color.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}
