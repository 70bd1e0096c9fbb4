//! Document - the element tree hosts hand to widgets.
//!
//! A thread-local tree rooted at [`body`]. Elements are created detached,
//! attached with [`append_child`], and released (with all descendants) by
//! [`remove_element`]. Queries only see elements connected to the body.

use std::cell::Cell;

use super::arrays::core;
use super::registry;
use super::selector::{Selector, SelectorError};
use crate::state::events;

thread_local! {
    static BODY: Cell<Option<usize>> = const { Cell::new(None) };
}

// =============================================================================
// Construction
// =============================================================================

/// The document root, created on first use.
pub fn body() -> usize {
    if let Some(index) = BODY.with(|b| b.get()) {
        if registry::is_allocated(index) {
            return index;
        }
    }
    let index = registry::allocate_index(None);
    core::set_tag_name(index, "body");
    BODY.with(|b| b.set(Some(index)));
    index
}

/// Create a detached element.
pub fn create_element(tag: &str) -> usize {
    let index = registry::allocate_index(None);
    core::set_tag_name(index, tag);
    index
}

/// Append `child` to `parent`, moving it from wherever it was.
///
/// Appending an element under itself or one of its descendants is ignored.
pub fn append_child(parent: usize, child: usize) {
    if !registry::is_allocated(parent) || !registry::is_allocated(child) {
        return;
    }
    if parent == child || is_ancestor(child, parent) {
        return;
    }
    core::push_child(parent, child);
}

/// Detach `index` from its parent and release it with all descendants.
pub fn remove_element(index: usize) {
    if !registry::is_allocated(index) {
        return;
    }
    core::detach(index);
    registry::release_index(index);
}

// =============================================================================
// Tree Access
// =============================================================================

/// Ordered children of an element.
pub fn children(index: usize) -> Vec<usize> {
    core::get_children(index)
}

/// Parent of an element.
pub fn parent(index: usize) -> Option<usize> {
    core::get_parent_index(index)
}

/// Tag name of an element (lowercase).
pub fn tag_name(index: usize) -> String {
    core::get_tag_name(index)
}

/// Text content of an element.
pub fn text_content(index: usize) -> String {
    core::get_text_content(index)
}

/// Set the text content of an element.
pub fn set_text_content(index: usize, text: &str) {
    core::set_text_content(index, text);
}

/// True when `ancestor` sits somewhere above `index`.
pub fn is_ancestor(ancestor: usize, index: usize) -> bool {
    let mut cursor = core::get_parent_index(index);
    while let Some(current) = cursor {
        if current == ancestor {
            return true;
        }
        cursor = core::get_parent_index(current);
    }
    false
}

/// Descendants of `root` in document (pre-)order, excluding `root`.
pub fn descendants(root: usize) -> Vec<usize> {
    let mut out = Vec::new();
    let mut stack: Vec<usize> = core::get_children(root).into_iter().rev().collect();
    while let Some(index) = stack.pop() {
        out.push(index);
        stack.extend(core::get_children(index).into_iter().rev());
    }
    out
}

// =============================================================================
// Queries
// =============================================================================

/// First connected element matching `selector`, in document order.
pub fn try_query_selector(selector: &str) -> Result<Option<usize>, SelectorError> {
    let selector = Selector::parse(selector)?;
    let root = body();
    if selector.matches(root) {
        return Ok(Some(root));
    }
    Ok(descendants(root).into_iter().find(|&index| selector.matches(index)))
}

/// First connected element matching `selector`. Unparseable selectors match nothing.
pub fn query_selector(selector: &str) -> Option<usize> {
    try_query_selector(selector).ok().flatten()
}

// =============================================================================
// Reset (for testing)
// =============================================================================

/// Drop every element, listener, and the body.
pub fn reset_document() {
    registry::reset_registry();
    events::reset_event_state();
    BODY.with(|b| b.set(None));
}
