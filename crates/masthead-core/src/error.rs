use thiserror::Error;

/// Rejected header geometry. A zero collapse range (`min == max`) is *not*
/// an error: it is a valid "header does not collapse" configuration and is
/// handled by pinning progress to 0.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SpecError {
    #[error("header heights must be finite, got min {min} max {max}")]
    NonFiniteHeight { min: f32, max: f32 },

    #[error("header heights must be non-negative, got min {min} max {max}")]
    NegativeHeight { min: f32, max: f32 },

    #[error("header min height {min} exceeds max height {max}")]
    InvertedRange { min: f32, max: f32 },
}
