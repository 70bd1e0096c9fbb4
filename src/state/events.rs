//! Events Module - Click listener registry and dispatch
//!
//! Elements register click listeners; [`dispatch_click`] delivers a click to
//! the target and bubbles it up through every ancestor, firing all listeners
//! on the path. Widgets use this to wire their controls; hosts (or the
//! terminal bridge) call [`dispatch_click`] to simulate user input.
//!
//! # API
//!
//! - `add_click_listener(index, fn)` - Register, returns a [`ListenerId`]
//! - `remove_click_listener(index, id)` - Unregister
//! - `on_click(index, fn)` - Register, returns a cleanup closure
//! - `dispatch_click(index)` - Deliver a click
//!
//! # Example
//!
//! ```ignore
//! use spark_slider::state::events;
//!
//! let cleanup = events::on_click(arrow, |event| {
//!     println!("clicked {}", event.target);
//! });
//!
//! events::dispatch_click(arrow);
//! cleanup();
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::engine::{arrays::core, is_allocated};

// =============================================================================
// TYPES
// =============================================================================

/// A click delivered to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// Element the click was dispatched on.
    pub target: usize,
    /// Element whose listener is running (differs from `target` while bubbling).
    pub current_target: usize,
}

/// Click listener.
///
/// `Rc` so dispatch can clone the listener list out of the registry before
/// calling into user code that may register or remove listeners.
pub type ClickHandler = Rc<dyn Fn(&ClickEvent)>;

/// Handle returned by [`add_click_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(usize);

// =============================================================================
// HANDLER REGISTRY
// =============================================================================

struct HandlerRegistry {
    listeners: HashMap<usize, Vec<(ListenerId, ClickHandler)>>,
    next_id: usize,
}

impl HandlerRegistry {
    fn new() -> Self {
        Self {
            listeners: HashMap::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> ListenerId {
        let id = self.next_id;
        self.next_id += 1;
        ListenerId(id)
    }

    fn contains(&self, index: usize, id: ListenerId) -> bool {
        self.listeners
            .get(&index)
            .is_some_and(|list| list.iter().any(|(lid, _)| *lid == id))
    }
}

thread_local! {
    static REGISTRY: RefCell<HandlerRegistry> = RefCell::new(HandlerRegistry::new());
}

// =============================================================================
// PUBLIC API - REGISTRATION
// =============================================================================

/// Register a click listener on an element.
pub fn add_click_listener<F>(index: usize, handler: F) -> ListenerId
where
    F: Fn(&ClickEvent) + 'static,
{
    REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.listeners
            .entry(index)
            .or_default()
            .push((id, Rc::new(handler)));
        id
    })
}

/// Remove a listener. Returns false if it was not registered on `index`.
pub fn remove_click_listener(index: usize, id: ListenerId) -> bool {
    REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let Some(list) = reg.listeners.get_mut(&index) else {
            return false;
        };
        let before = list.len();
        list.retain(|(lid, _)| *lid != id);
        let removed = list.len() != before;
        if list.is_empty() {
            reg.listeners.remove(&index);
        }
        removed
    })
}

/// Register a click listener. Returns cleanup function.
pub fn on_click<F>(index: usize, handler: F) -> impl FnOnce()
where
    F: Fn(&ClickEvent) + 'static,
{
    let id = add_click_listener(index, handler);
    move || {
        remove_click_listener(index, id);
    }
}

/// Number of listeners registered directly on `index`.
pub fn listener_count(index: usize) -> usize {
    REGISTRY.with(|reg| reg.borrow().listeners.get(&index).map_or(0, Vec::len))
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Dispatch a click on `target`, bubbling to the root.
///
/// The propagation path is fixed before any listener runs. A listener removed
/// by an earlier one in the same dispatch is skipped.
///
/// Returns true if any listener ran.
pub fn dispatch_click(target: usize) -> bool {
    if !is_allocated(target) {
        return false;
    }

    let mut path = vec![target];
    let mut cursor = core::get_parent_index(target);
    while let Some(index) = cursor {
        path.push(index);
        cursor = core::get_parent_index(index);
    }

    let mut fired = false;
    for current_target in path {
        let listeners: Vec<(ListenerId, ClickHandler)> = REGISTRY.with(|reg| {
            reg.borrow()
                .listeners
                .get(&current_target)
                .cloned()
                .unwrap_or_default()
        });

        let event = ClickEvent {
            target,
            current_target,
        };
        for (id, handler) in listeners {
            let still_registered = REGISTRY.with(|reg| reg.borrow().contains(current_target, id));
            if still_registered {
                handler(&event);
                fired = true;
            }
        }
    }
    fired
}

// =============================================================================
// CLEANUP
// =============================================================================

/// Drop every listener on `index` (element released).
pub fn cleanup_index(index: usize) {
    REGISTRY.with(|reg| {
        reg.borrow_mut().listeners.remove(&index);
    });
}

/// Reset all event state (for testing).
pub fn reset_event_state() {
    REGISTRY.with(|reg| *reg.borrow_mut() = HandlerRegistry::new());
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{append_child, body, create_element, remove_element, reset_document};
    use std::cell::Cell;

    fn setup() -> (usize, usize) {
        reset_document();
        let container = create_element("div");
        let arrow = create_element("span");
        append_child(body(), container);
        append_child(container, arrow);
        (container, arrow)
    }

    #[test]
    fn test_dispatch_fires_listener() {
        let (_, arrow) = setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        add_click_listener(arrow, move |event| {
            assert_eq!(event.target, event.current_target);
            count_clone.set(count_clone.get() + 1);
        });

        assert!(dispatch_click(arrow));
        assert!(dispatch_click(arrow));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_dispatch_bubbles_to_ancestors() {
        let (container, arrow) = setup();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_inner = seen.clone();
        add_click_listener(arrow, move |e| seen_inner.borrow_mut().push(e.current_target));
        let seen_outer = seen.clone();
        add_click_listener(container, move |e| {
            assert_eq!(e.target, arrow);
            seen_outer.borrow_mut().push(e.current_target);
        });

        dispatch_click(arrow);
        assert_eq!(*seen.borrow(), vec![arrow, container]);
    }

    #[test]
    fn test_dispatch_without_listeners() {
        let (container, _) = setup();
        assert!(!dispatch_click(container));
        assert!(!dispatch_click(9999));
    }

    #[test]
    fn test_on_click_cleanup() {
        let (_, arrow) = setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let cleanup = on_click(arrow, move |_| count_clone.set(count_clone.get() + 1));

        dispatch_click(arrow);
        cleanup();
        dispatch_click(arrow);

        assert_eq!(count.get(), 1);
        assert_eq!(listener_count(arrow), 0);
    }

    #[test]
    fn test_remove_unknown_listener() {
        let (container, arrow) = setup();

        let id = add_click_listener(arrow, |_| {});
        assert!(!remove_click_listener(container, id));
        assert!(remove_click_listener(arrow, id));
        assert!(!remove_click_listener(arrow, id));
    }

    #[test]
    fn test_listener_removed_during_dispatch_is_skipped() {
        let (_, arrow) = setup();

        let second_ran = Rc::new(Cell::new(false));
        let second_id: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));

        let to_remove = second_id.clone();
        add_click_listener(arrow, move |_| {
            if let Some(id) = to_remove.get() {
                remove_click_listener(arrow, id);
            }
        });
        let flag = second_ran.clone();
        second_id.set(Some(add_click_listener(arrow, move |_| flag.set(true))));

        dispatch_click(arrow);
        assert!(!second_ran.get());
    }

    #[test]
    fn test_removing_element_drops_listeners() {
        let (container, arrow) = setup();

        add_click_listener(arrow, |_| {});
        assert_eq!(listener_count(arrow), 1);

        remove_element(container);
        assert_eq!(listener_count(arrow), 0);
    }
}
