//! Slider Engine - Element registry, parallel arrays, and the document tree.
//!
//! The engine manages the core data structures:
//! - Registry: Index allocation, element id mapping, destroy callbacks
//! - Arrays: Parallel arrays for element state (tag, tree links, classes)
//! - Selector: Parsing and matching of query selectors
//! - Document: The body-rooted tree widgets query and mutate
//!
//! # Architecture
//!
//! Elements are NOT objects. They are indices into parallel arrays:
//!
//! ```text
//! Index 0: body (parent=None, children=[1])
//! Index 1: div  (parent=0, id=gallery, children=[2, 3])
//! Index 2: img  (parent=1, classes=[bw-slide-item, bw-current])
//! ```

mod document;
mod registry;
pub mod arrays;
pub mod selector;

pub use document::*;
pub use registry::*;
pub use selector::{Compound, Selector, SelectorError};
