use thiserror::Error;

/// Errors raised while building a field. User text never produces one of these,
/// bad input is reverted or clamped instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("invalid bounds: min {min} must be finite and not above max {max}")]
    InvalidBounds { min: f64, max: f64 },

    #[error("invalid step {0}: must be finite and greater than zero")]
    InvalidStep(f64),

    #[error("environment variable {var} has invalid value {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, FieldError>;
