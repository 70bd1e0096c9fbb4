//! Element Tree - Class Arrays
//!
//! One ordered, de-duplicated class list per element. The slider's only visual
//! side effect is toggling entries here.

use std::cell::RefCell;

thread_local! {
    static CLASS_LIST: RefCell<Vec<Vec<String>>> = RefCell::new(Vec::new());
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure the class array has capacity for the given index.
pub fn ensure_capacity(index: usize) {
    CLASS_LIST.with(|arr| {
        let mut arr = arr.borrow_mut();
        while arr.len() <= index {
            arr.push(Vec::new());
        }
    });
}

/// Clear classes at index.
pub fn clear_at_index(index: usize) {
    CLASS_LIST.with(|arr| {
        if let Some(list) = arr.borrow_mut().get_mut(index) {
            list.clear();
        }
    });
}

/// Reset the class array.
pub fn reset() {
    CLASS_LIST.with(|arr| arr.borrow_mut().clear());
}

fn with_list<R>(index: usize, f: impl FnOnce(&mut Vec<String>) -> R) -> R {
    CLASS_LIST.with(|arr| {
        let mut arr = arr.borrow_mut();
        while arr.len() <= index {
            arr.push(Vec::new());
        }
        f(&mut arr[index])
    })
}

// =============================================================================
// Class List
// =============================================================================

/// Add a class. Adding a class already present is a no-op.
pub fn add_class(index: usize, class: &str) {
    if class.is_empty() {
        return;
    }
    with_list(index, |list| {
        if !list.iter().any(|c| c == class) {
            list.push(class.to_string());
        }
    });
}

/// Remove a class if present.
pub fn remove_class(index: usize, class: &str) {
    with_list(index, |list| list.retain(|c| c != class));
}

/// Check whether the element carries `class`.
pub fn has_class(index: usize, class: &str) -> bool {
    CLASS_LIST.with(|arr| {
        arr.borrow()
            .get(index)
            .is_some_and(|list| list.iter().any(|c| c == class))
    })
}

/// Replace the whole class list with the whitespace-separated `class_name`.
pub fn set_class_name(index: usize, class_name: &str) {
    with_list(index, |list| {
        list.clear();
        for class in class_name.split_whitespace() {
            if !list.iter().any(|c| c == class) {
                list.push(class.to_string());
            }
        }
    });
}

/// Current classes, in insertion order.
pub fn classes(index: usize) -> Vec<String> {
    CLASS_LIST.with(|arr| arr.borrow().get(index).cloned().unwrap_or_default())
}

/// Current class list joined with spaces.
pub fn class_name(index: usize) -> String {
    classes(index).join(" ")
}
