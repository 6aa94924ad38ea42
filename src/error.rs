use thiserror::Error;

/// Validation failures raised by the color codec and contrast selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color {0:?}: expected exactly 6 hex digits")]
    InvalidFormat(String),

    #[error("invalid color arity: expected 3 channels, got {0}")]
    InvalidArity(usize),
}
