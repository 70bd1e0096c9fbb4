use thiserror::Error;

/// Errors raised by slider construction and `move_to`.
///
/// Everything else the slider does is infallible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliderError {
    /// No container selector was supplied
    #[error("Missing slider container selector")]
    MissingSelector,

    /// The selector could not be parsed
    #[error("Invalid container selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// The selector matched no connected element
    #[error("Invalid container: nothing matches {0:?}")]
    ContainerNotFound(String),

    /// `move_to` target outside the accepted range
    #[error("Invalid slide index {index} for {count} slides")]
    IndexOutOfRange { index: usize, count: usize },

    /// The slider was already torn down
    #[error("Slider has been destroyed")]
    Destroyed,
}

impl SliderError {
    /// True for the construction-time configuration failures.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SliderError::MissingSelector
                | SliderError::InvalidSelector { .. }
                | SliderError::ContainerNotFound(_)
        )
    }

    /// True for an out-of-range `move_to` target.
    pub fn is_range(&self) -> bool {
        matches!(self, SliderError::IndexOutOfRange { .. })
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SliderError>;
