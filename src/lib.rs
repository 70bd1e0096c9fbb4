//! # spark-slider
//!
//! Auto-advancing carousel widget for a reactive element tree.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! observing slide changes.
//!
//! ## Architecture
//!
//! Elements are indices into thread-local parallel arrays rather than objects,
//! the same way spark-tui stores components. The slider takes over a container
//! element, wraps its children, injects arrow controls, and toggles an active
//! class as the current index moves:
//!
//! ```text
//! container (#gallery)
//! ├── div.bw-inner-wrapper
//! │   ├── div.bw-slide-item.bw-current   <- index 0
//! │   ├── div.bw-slide-item
//! │   └── div.bw-slide-item
//! ├── span.bw-arrow.bw-arrow-left        <- click: prev(true)
//! └── span.bw-arrow.bw-arrow-right       <- click: next(true)
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Class names and small shared enums
//! - [`engine`] - Element registry, parallel arrays, selectors, document tree
//! - [`state`] - Click dispatch, rotation timer, terminal input bridge
//! - [`slider`] - The carousel widget
//! - [`error`] - Error type

pub mod engine;
pub mod error;
pub mod slider;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{Result, SliderError};

pub use engine::{
    append_child, body, children, create_element, get_id, get_index, is_allocated, parent,
    query_selector, remove_element, reset_document, set_element_id, set_text_content, tag_name,
    text_content,
    arrays::classes::{add_class, classes, has_class, remove_class, set_class_name},
};

pub use state::{
    // Events
    ClickEvent, ClickHandler, ListenerId,
    add_click_listener, remove_click_listener, on_click, dispatch_click, listener_count,
    reset_event_state,
    // Rotation
    Rotation,
    // Terminal input
    SliderCommand, convert_key_event, route_command, route_key, poll_event,
};

pub use slider::{Arrows, Slider, SliderOptions, slider};
