use thiserror::Error;

/// Errors raised when parsing user-facing parameter input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("invalid hex color: {0:?}")]
    InvalidColor(String),

    #[error("color {0:?} is not grayscale")]
    NotGrayscale(String),

    #[error("unknown preset: {0:?}")]
    UnknownPreset(String),
}
