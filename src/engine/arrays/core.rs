//! Element Tree - Core Arrays
//!
//! The most fundamental element arrays:
//! - tagName: Element tag (div, span, ...)
//! - parentIndex: Parent in hierarchy
//! - children: Ordered child indices (document order)
//! - textContent: Leaf text, used by renderers and tests
//!
//! Plain `RefCell<Vec<_>>` storage; reactivity lives one level up, on the
//! slider's index signal.

use std::cell::RefCell;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Tag name, lowercase.
    static TAG_NAME: RefCell<Vec<String>> = RefCell::new(Vec::new());

    /// Parent element index (None for detached elements and the body).
    static PARENT_INDEX: RefCell<Vec<Option<usize>>> = RefCell::new(Vec::new());

    /// Ordered child indices.
    static CHILDREN: RefCell<Vec<Vec<usize>>> = RefCell::new(Vec::new());

    /// Text content.
    static TEXT_CONTENT: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

fn grow<T: Default>(arr: &mut Vec<T>, index: usize) {
    while arr.len() <= index {
        arr.push(T::default());
    }
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    TAG_NAME.with(|arr| grow(&mut arr.borrow_mut(), index));
    PARENT_INDEX.with(|arr| grow(&mut arr.borrow_mut(), index));
    CHILDREN.with(|arr| grow(&mut arr.borrow_mut(), index));
    TEXT_CONTENT.with(|arr| grow(&mut arr.borrow_mut(), index));
}

/// Clear values at index (called when releasing).
pub fn clear_at_index(index: usize) {
    TAG_NAME.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(index) {
            slot.clear();
        }
    });
    PARENT_INDEX.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(index) {
            *slot = None;
        }
    });
    CHILDREN.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(index) {
            slot.clear();
        }
    });
    TEXT_CONTENT.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(index) {
            slot.clear();
        }
    });
}

/// Reset all arrays.
pub fn reset() {
    TAG_NAME.with(|arr| arr.borrow_mut().clear());
    PARENT_INDEX.with(|arr| arr.borrow_mut().clear());
    CHILDREN.with(|arr| arr.borrow_mut().clear());
    TEXT_CONTENT.with(|arr| arr.borrow_mut().clear());
}

// =============================================================================
// Tag Name
// =============================================================================

/// Get tag name at index.
pub fn get_tag_name(index: usize) -> String {
    TAG_NAME.with(|arr| arr.borrow().get(index).cloned().unwrap_or_default())
}

/// Set tag name at index. Stored lowercase.
pub fn set_tag_name(index: usize, tag: &str) {
    TAG_NAME.with(|arr| {
        let mut arr = arr.borrow_mut();
        grow(&mut arr, index);
        arr[index] = tag.to_ascii_lowercase();
    });
}

// =============================================================================
// Parent / Children
// =============================================================================

/// Get parent index at index.
pub fn get_parent_index(index: usize) -> Option<usize> {
    PARENT_INDEX.with(|arr| arr.borrow().get(index).copied().flatten())
}

/// Get the ordered children of `index`.
pub fn get_children(index: usize) -> Vec<usize> {
    CHILDREN.with(|arr| arr.borrow().get(index).cloned().unwrap_or_default())
}

/// Unlink `child` from its current parent, if any.
pub fn detach(child: usize) {
    let Some(parent) = get_parent_index(child) else {
        return;
    };

    CHILDREN.with(|arr| {
        if let Some(siblings) = arr.borrow_mut().get_mut(parent) {
            siblings.retain(|&c| c != child);
        }
    });
    PARENT_INDEX.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(child) {
            *slot = None;
        }
    });
}

/// Append `child` as the last child of `parent`, detaching it first.
pub fn push_child(parent: usize, child: usize) {
    detach(child);

    CHILDREN.with(|arr| {
        let mut arr = arr.borrow_mut();
        grow(&mut arr, parent);
        arr[parent].push(child);
    });
    PARENT_INDEX.with(|arr| {
        let mut arr = arr.borrow_mut();
        grow(&mut arr, child);
        arr[child] = Some(parent);
    });
}

// =============================================================================
// Text Content
// =============================================================================

/// Get text content at index.
pub fn get_text_content(index: usize) -> String {
    TEXT_CONTENT.with(|arr| arr.borrow().get(index).cloned().unwrap_or_default())
}

/// Set text content at index.
pub fn set_text_content(index: usize, text: &str) {
    TEXT_CONTENT.with(|arr| {
        let mut arr = arr.borrow_mut();
        grow(&mut arr, index);
        arr[index] = text.to_string();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_child_keeps_order() {
        reset();

        push_child(0, 1);
        push_child(0, 2);
        push_child(0, 3);

        assert_eq!(get_children(0), vec![1, 2, 3]);
        assert_eq!(get_parent_index(2), Some(0));
    }

    #[test]
    fn test_push_child_reparents() {
        reset();

        push_child(0, 2);
        push_child(1, 2);

        assert!(get_children(0).is_empty());
        assert_eq!(get_children(1), vec![2]);
        assert_eq!(get_parent_index(2), Some(1));
    }

    #[test]
    fn test_detach() {
        reset();

        push_child(0, 1);
        detach(1);

        assert_eq!(get_parent_index(1), None);
        assert!(get_children(0).is_empty());

        // Detaching a root is a no-op
        detach(0);
    }

    #[test]
    fn test_tag_and_text() {
        reset();

        set_tag_name(4, "DIV");
        set_text_content(4, "first");

        assert_eq!(get_tag_name(4), "div");
        assert_eq!(get_text_content(4), "first");

        clear_at_index(4);
        assert_eq!(get_tag_name(4), "");
        assert_eq!(get_text_content(4), "");
    }
}
