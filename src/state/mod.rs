//! State Module - Runtime interaction systems
//!
//! This module contains the systems that make widgets interactive:
//!
//! - **Events** - Click listener registry, bubbling dispatch
//! - **Rotation** - Fixed-interval timer that posts ticks to the UI thread
//! - **Input** - crossterm key events mapped onto slider commands

pub mod events;
pub mod input;
pub mod rotation;

pub use events::*;
pub use input::*;
pub use rotation::Rotation;
