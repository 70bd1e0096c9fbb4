//! Element Registry - Index allocation for parallel arrays.
//!
//! Manages the lifecycle of element indices:
//! - Element id ↔ index bidirectional mapping
//! - Free index pool for O(1) reuse
//! - Ordered set of allocated indices
//! - Destroy callbacks per index

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use super::arrays;
use crate::state::events;

// =============================================================================
// Registry State
// =============================================================================

thread_local! {
    /// Map element id to array index.
    static ID_TO_INDEX: RefCell<HashMap<String, usize>> = RefCell::new(HashMap::new());

    /// Map array index to element id.
    static INDEX_TO_ID: RefCell<HashMap<usize, String>> = RefCell::new(HashMap::new());

    /// Set of currently allocated indices, kept ordered for stable iteration.
    static ALLOCATED_INDICES: RefCell<BTreeSet<usize>> = RefCell::new(BTreeSet::new());

    /// Pool of freed indices for reuse.
    static FREE_INDICES: RefCell<Vec<usize>> = RefCell::new(Vec::new());

    /// Next index to allocate if pool is empty.
    static NEXT_INDEX: RefCell<usize> = const { RefCell::new(0) };

    /// Destroy callbacks registered per index.
    static DESTROY_CALLBACKS: RefCell<HashMap<usize, Vec<Box<dyn FnOnce()>>>> = RefCell::new(HashMap::new());
}

// =============================================================================
// Index Allocation
// =============================================================================

/// Allocate an index for a new element.
///
/// # Arguments
/// * `id` - Optional element id. An id already in use returns the existing index.
///
/// # Returns
/// The allocated index.
pub fn allocate_index(id: Option<&str>) -> usize {
    if let Some(id) = id {
        let existing = ID_TO_INDEX.with(|map| map.borrow().get(id).copied());
        if let Some(index) = existing {
            return index;
        }
    }

    // Reuse free index or allocate new
    let index = FREE_INDICES.with(|free| {
        let mut free = free.borrow_mut();
        if let Some(index) = free.pop() {
            index
        } else {
            NEXT_INDEX.with(|next| {
                let mut next = next.borrow_mut();
                let index = *next;
                *next += 1;
                index
            })
        }
    });

    ALLOCATED_INDICES.with(|set| {
        set.borrow_mut().insert(index);
    });

    // Ensure arrays have capacity for this index
    arrays::ensure_all_capacity(index);

    if let Some(id) = id {
        set_element_id(index, Some(id));
    }

    index
}

/// Assign (or clear) the id of an allocated element.
pub fn set_element_id(index: usize, id: Option<&str>) {
    if !is_allocated(index) {
        return;
    }

    let previous = INDEX_TO_ID.with(|map| map.borrow_mut().remove(&index));
    if let Some(previous) = previous {
        ID_TO_INDEX.with(|map| {
            let mut map = map.borrow_mut();
            if map.get(&previous) == Some(&index) {
                map.remove(&previous);
            }
        });
    }

    if let Some(id) = id {
        ID_TO_INDEX.with(|map| {
            map.borrow_mut().insert(id.to_string(), index);
        });
        INDEX_TO_ID.with(|map| {
            map.borrow_mut().insert(index, id.to_string());
        });
    }
}

/// Release an index back to the pool.
///
/// Also recursively releases all children!
pub fn release_index(index: usize) {
    if !is_allocated(index) {
        return;
    }

    // Children first, collected up front so the list isn't mutated mid-walk
    let children = arrays::core::get_children(index);
    for child_index in children {
        release_index(child_index);
    }

    run_destroy_callbacks(index);

    // Drop click listeners registered on this element
    events::cleanup_index(index);

    // Clean up mappings
    set_element_id(index, None);
    ALLOCATED_INDICES.with(|set| {
        set.borrow_mut().remove(&index);
    });

    arrays::clear_all_at_index(index);

    FREE_INDICES.with(|free| {
        free.borrow_mut().push(index);
    });
}

// =============================================================================
// Destroy Callbacks
// =============================================================================

/// Register a callback to run when the element at `index` is released.
pub fn on_destroy(index: usize, callback: impl FnOnce() + 'static) {
    DESTROY_CALLBACKS.with(|callbacks| {
        callbacks
            .borrow_mut()
            .entry(index)
            .or_default()
            .push(Box::new(callback));
    });
}

/// Run and clear destroy callbacks for an index.
fn run_destroy_callbacks(index: usize) {
    let callbacks = DESTROY_CALLBACKS.with(|callbacks| callbacks.borrow_mut().remove(&index));
    if let Some(callbacks) = callbacks {
        for callback in callbacks {
            callback();
        }
    }
}

// =============================================================================
// Lookups
// =============================================================================

/// Get index for an element id.
pub fn get_index(id: &str) -> Option<usize> {
    ID_TO_INDEX.with(|map| map.borrow().get(id).copied())
}

/// Get id for an index.
pub fn get_id(index: usize) -> Option<String> {
    INDEX_TO_ID.with(|map| map.borrow().get(&index).cloned())
}

/// Check if an index is currently allocated.
pub fn is_allocated(index: usize) -> bool {
    ALLOCATED_INDICES.with(|set| set.borrow().contains(&index))
}

/// Get the count of currently allocated elements.
pub fn get_allocated_count() -> usize {
    ALLOCATED_INDICES.with(|set| set.borrow().len())
}

// =============================================================================
// Reset (for testing)
// =============================================================================

/// Reset all registry state (for testing).
pub fn reset_registry() {
    ID_TO_INDEX.with(|map| map.borrow_mut().clear());
    INDEX_TO_ID.with(|map| map.borrow_mut().clear());
    ALLOCATED_INDICES.with(|set| set.borrow_mut().clear());
    FREE_INDICES.with(|free| free.borrow_mut().clear());
    NEXT_INDEX.with(|next| *next.borrow_mut() = 0);
    DESTROY_CALLBACKS.with(|callbacks| callbacks.borrow_mut().clear());
    arrays::reset_all_arrays();
}
