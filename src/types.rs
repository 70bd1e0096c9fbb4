//! Core types for spark-slider.
//!
//! Class names are the contract with the stylesheet: the widget only toggles
//! them, all visual transitions live in CSS.

use std::time::Duration;

// =============================================================================
// Class Names
// =============================================================================

/// Generated wrapper that receives every slide.
pub const CLASS_INNER_WRAPPER: &str = "bw-inner-wrapper";

/// Tag applied to each wrapped slide.
pub const CLASS_SLIDE: &str = "bw-slide-item";

/// Shared tag for both navigation controls.
pub const CLASS_ARROW: &str = "bw-arrow";

/// Left (previous) control.
pub const CLASS_ARROW_LEFT: &str = "bw-arrow-left";

/// Right (next) control.
pub const CLASS_ARROW_RIGHT: &str = "bw-arrow-right";

/// Active marker on the current slide.
pub const CLASS_CURRENT: &str = "bw-current";

// =============================================================================
// Element Tags
// =============================================================================

/// Tag of the generated slide wrapper.
pub const TAG_WRAPPER: &str = "div";

/// Tag of the generated arrow controls.
pub const TAG_ARROW: &str = "span";

// =============================================================================
// Direction
// =============================================================================

/// Navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// Directional class of the arrow that navigates this way.
    pub const fn arrow_class(self) -> &'static str {
        match self {
            Direction::Prev => CLASS_ARROW_LEFT,
            Direction::Next => CLASS_ARROW_RIGHT,
        }
    }

    /// Step `current` one slide in this direction, wrapping at both ends.
    ///
    /// `count` must be non-zero.
    pub const fn step(self, current: usize, count: usize) -> usize {
        match self {
            Direction::Prev => {
                if current == 0 {
                    count - 1
                } else {
                    current - 1
                }
            }
            Direction::Next => {
                if current >= count - 1 {
                    0
                } else {
                    current + 1
                }
            }
        }
    }
}

// =============================================================================
// Durations
// =============================================================================

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
pub fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
