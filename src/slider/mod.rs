//! Slider - auto-advancing carousel over a container element.
//!
//! Construction takes over the container matched by a selector:
//!
//! 1. Wraps every direct child in a `div.bw-inner-wrapper`, tagging each
//!    with `bw-slide-item` and the first with `bw-current`
//! 2. Appends `span.bw-arrow` controls (left, right) when there are 2+ slides
//! 3. Wires arrow clicks to `prev(true)` / `next(true)`
//! 4. Starts rotation when `auto_play` is set
//!
//! Every index change moves the `bw-current` marker and publishes the new
//! index on [`Slider::current_signal`].
//!
//! # Threading
//!
//! `Slider` is `Rc`-based and stays on the thread that built it, so index
//! mutation is single-flight by construction. The rotation timer runs on its
//! own thread but only posts ticks; the owner applies them with
//! [`Slider::run_pending_ticks`].
//!
//! # Example
//!
//! ```ignore
//! use spark_slider::{slider, SliderOptions};
//!
//! let gallery = slider("#gallery", Some(SliderOptions::default().with_auto_play(false)))?;
//! gallery.next(false);
//! gallery.move_to(1)?;
//! gallery.destroy();
//! ```

mod build;
mod index;
mod options;

pub use build::Arrows;
pub use index::SlideIndex;
pub use options::{DEFAULT_AUTO_PLAY, DEFAULT_INTERVAL_MS, DEFAULT_SPEED_MS, SliderOptions};

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use serde_json::Value;
use spark_signals::{signal, Signal};
use tracing::{debug, trace};

use crate::engine::{on_destroy, remove_element, try_query_selector};
use crate::error::{Result, SliderError};
use crate::state::events::{self, ListenerId};
use crate::state::Rotation;
use crate::types::Direction;

// =============================================================================
// State
// =============================================================================

/// Everything that goes away on destroy.
struct SliderState {
    container: usize,
    wrapper: usize,
    slides: Vec<usize>,
    index: SlideIndex,
    arrows: Option<Arrows>,
    listeners: Vec<(usize, ListenerId)>,
    options: SliderOptions,
    rotation: Rotation,
}

impl SliderState {
    /// Set the index and move the active marker.
    fn transition(&mut self, target: usize) {
        self.index.set(target);
        build::animate(&self.slides, self.index.get_prev(), self.index.get());
        trace!(
            container = self.container,
            from = ?self.index.get_prev(),
            to = target,
            "slide transition"
        );
    }
}

struct SliderCell {
    /// `None` once destroyed.
    state: RefCell<Option<SliderState>>,
    /// Published after every transition, outside the state borrow.
    current: Signal<usize>,
    /// Captured at construction; never changes.
    slide_count: usize,
}

/// Handle to a mounted slider. Clones share the same instance.
#[derive(Clone)]
pub struct Slider {
    cell: Rc<SliderCell>,
}

/// Build a slider. Same as [`Slider::new`].
pub fn slider(selector: &str, options: Option<SliderOptions>) -> Result<Slider> {
    Slider::new(selector, options)
}

fn resolve_container(selector: &str) -> Result<usize> {
    if selector.trim().is_empty() {
        return Err(SliderError::MissingSelector);
    }
    match try_query_selector(selector) {
        Ok(Some(container)) => Ok(container),
        Ok(None) => Err(SliderError::ContainerNotFound(selector.to_string())),
        Err(err) => Err(SliderError::InvalidSelector {
            selector: selector.to_string(),
            reason: err.to_string(),
        }),
    }
}

impl Slider {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Mount a slider on the first element matching `selector`.
    ///
    /// `None` options means defaults. Fails before touching the document if
    /// the selector is empty, unparseable, or matches nothing.
    pub fn new(selector: &str, options: Option<SliderOptions>) -> Result<Self> {
        let container = resolve_container(selector)?;
        Ok(Self::mount(container, SliderOptions::resolve(options)))
    }

    /// Mount a slider configured from an untyped record.
    ///
    /// See [`SliderOptions::from_value`] for how the record is resolved.
    pub fn from_value(selector: &str, options: &Value) -> Result<Self> {
        let container = resolve_container(selector)?;
        Ok(Self::mount(container, SliderOptions::from_value(options)))
    }

    fn mount(container: usize, options: SliderOptions) -> Self {
        let index = SlideIndex::new();
        let (wrapper, slides) = build::build_slider(container, index.get());
        let arrows = build::build_controls(container, slides.len());
        let slide_count = slides.len();

        let slider = Self {
            cell: Rc::new(SliderCell {
                state: RefCell::new(Some(SliderState {
                    container,
                    wrapper,
                    slides,
                    index,
                    arrows,
                    listeners: Vec::new(),
                    options,
                    rotation: Rotation::new(),
                })),
                current: signal(index.get()),
                slide_count,
            }),
        };

        slider.attach_events();
        slider.watch_container(container);
        debug!(container, slide_count, auto_play = options.auto_play, "slider mounted");

        if options.auto_play {
            slider.play();
        }
        slider
    }

    // =========================================================================
    // Events
    // =========================================================================

    fn attach_events(&self) {
        let Some(arrows) = self.arrows() else {
            return;
        };

        let mut listeners = Vec::with_capacity(2);
        for direction in [Direction::Prev, Direction::Next] {
            let element = arrows.get(direction);
            // Weak: the listener must not keep a destroyed slider alive
            let weak: Weak<SliderCell> = Rc::downgrade(&self.cell);
            let id = events::add_click_listener(element, move |_| {
                if let Some(cell) = weak.upgrade() {
                    Slider { cell }.step(direction, true);
                }
            });
            listeners.push((element, id));
        }

        if let Some(state) = self.cell.state.borrow_mut().as_mut() {
            state.listeners = listeners;
        }
    }

    /// Tear down if the container is released behind the slider's back, so
    /// recycled indices are never touched.
    fn watch_container(&self, container: usize) {
        let weak: Weak<SliderCell> = Rc::downgrade(&self.cell);
        on_destroy(container, move || {
            let Some(cell) = weak.upgrade() else {
                return;
            };
            let Some(mut state) = cell.state.borrow_mut().take() else {
                return;
            };
            Self::detach_events(&mut state);
            state.rotation.stop();
            debug!(container = state.container, "slider container released; slider torn down");
        });
    }

    fn detach_events(state: &mut SliderState) {
        for (element, id) in state.listeners.drain(..) {
            events::remove_click_listener(element, id);
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Publish `target` once the state borrow is gone, so observers may call
    /// back into the slider.
    fn publish(&self, target: usize) {
        self.cell.current.set(target);
    }

    fn step(&self, direction: Direction, pause_first: bool) {
        if pause_first {
            self.pause();
        }

        let target = {
            let mut guard = self.cell.state.borrow_mut();
            let Some(state) = guard.as_mut() else {
                debug!(?direction, "navigation on destroyed slider ignored");
                return;
            };
            if state.slides.is_empty() {
                trace!(?direction, "navigation on empty slider ignored");
                return;
            }
            let target = direction.step(state.index.get(), state.slides.len());
            state.transition(target);
            target
        };

        self.publish(target);
    }

    /// Go to the previous slide, wrapping from the first to the last.
    pub fn prev(&self, pause_first: bool) {
        self.step(Direction::Prev, pause_first);
    }

    /// Go to the next slide, wrapping from the last to the first.
    pub fn next(&self, pause_first: bool) {
        self.step(Direction::Next, pause_first);
    }

    /// Jump to `target`. Always pauses rotation, even when the jump fails.
    ///
    /// Only `0 < target < slide_count - 1` is accepted: the first and the
    /// last slide are both refused, which existing callers depend on.
    pub fn move_to(&self, target: usize) -> Result<()> {
        self.pause();

        let count = self.cell.slide_count;
        {
            let mut guard = self.cell.state.borrow_mut();
            let Some(state) = guard.as_mut() else {
                return Err(SliderError::Destroyed);
            };
            if target == 0 || target >= count.saturating_sub(1) {
                return Err(SliderError::IndexOutOfRange {
                    index: target,
                    count,
                });
            }
            state.transition(target);
        }

        self.publish(target);
        Ok(())
    }

    // =========================================================================
    // Rotation
    // =========================================================================

    /// Stop auto-rotation. Idempotent.
    pub fn pause(&self) {
        if let Some(state) = self.cell.state.borrow_mut().as_mut() {
            state.rotation.stop();
        }
    }

    /// Start auto-rotation unless it is already running. Idempotent.
    pub fn play(&self) {
        if let Some(state) = self.cell.state.borrow_mut().as_mut() {
            if !state.rotation.is_running() {
                state.rotation.start(state.options.interval());
            }
        }
    }

    /// Check if auto-rotation is running.
    pub fn is_playing(&self) -> bool {
        self.cell
            .state
            .borrow()
            .as_ref()
            .is_some_and(|state| state.rotation.is_running())
    }

    /// Advance once if the rotation timer ticked since the last call.
    ///
    /// Ticks missed while the owner was busy collapse into one, so this
    /// applies at most one transition. Returns the number applied.
    pub fn run_pending_ticks(&self) -> usize {
        let ticked = match self.cell.state.borrow_mut().as_mut() {
            Some(state) => state.rotation.take_tick(),
            None => false,
        };
        if !ticked {
            return 0;
        }
        self.step(Direction::Next, false);
        1
    }

    // =========================================================================
    // Options
    // =========================================================================

    /// Replace the options. `None` restores defaults.
    ///
    /// A running rotation is restarted when its interval changes.
    pub fn set_options(&self, options: Option<SliderOptions>) {
        self.apply_options(SliderOptions::resolve(options));
    }

    /// Replace the options from an untyped record.
    pub fn set_options_value(&self, options: &Value) {
        self.apply_options(SliderOptions::from_value(options));
    }

    fn apply_options(&self, options: SliderOptions) {
        let mut guard = self.cell.state.borrow_mut();
        let Some(state) = guard.as_mut() else {
            return;
        };
        state.options = options;

        if state.rotation.interval().is_some_and(|i| i != options.interval()) {
            state.rotation.stop();
            state.rotation.start(options.interval());
        }
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Detach listeners, stop rotation, and remove the container with all its
    /// contents. A second call does nothing.
    pub fn destroy(&self) {
        let Some(mut state) = self.cell.state.borrow_mut().take() else {
            return;
        };

        Self::detach_events(&mut state);
        state.rotation.stop();
        remove_element(state.container);

        debug!(container = state.container, "slider destroyed");
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Index of the active slide (last published value once destroyed).
    pub fn current_index(&self) -> usize {
        match self.cell.state.borrow().as_ref() {
            Some(state) => state.index.get(),
            None => self.cell.current.get(),
        }
    }

    /// Index active before the last transition.
    pub fn previous_index(&self) -> Option<usize> {
        self.cell
            .state
            .borrow()
            .as_ref()
            .and_then(|state| state.index.get_prev())
    }

    /// Reactive view of the current index, for `effect`/`derived` observers.
    pub fn current_signal(&self) -> Signal<usize> {
        self.cell.current.clone()
    }

    /// Number of slides captured at construction.
    pub fn slide_count(&self) -> usize {
        self.cell.slide_count
    }

    /// Slide elements in document order. Empty once destroyed.
    pub fn slides(&self) -> Vec<usize> {
        self.cell
            .state
            .borrow()
            .as_ref()
            .map(|state| state.slides.clone())
            .unwrap_or_default()
    }

    /// Container element.
    pub fn container(&self) -> Option<usize> {
        self.cell.state.borrow().as_ref().map(|state| state.container)
    }

    /// Generated wrapper element.
    pub fn wrapper(&self) -> Option<usize> {
        self.cell.state.borrow().as_ref().map(|state| state.wrapper)
    }

    /// Navigation controls, present for 2+ slides.
    pub fn arrows(&self) -> Option<Arrows> {
        self.cell.state.borrow().as_ref().and_then(|state| state.arrows)
    }

    /// Active options.
    pub fn options(&self) -> Option<SliderOptions> {
        self.cell.state.borrow().as_ref().map(|state| state.options)
    }

    /// Transition speed for stylesheets.
    pub fn transition_speed(&self) -> Option<Duration> {
        self.options().map(|options| options.speed())
    }

    /// Check if `destroy` has run.
    pub fn is_destroyed(&self) -> bool {
        self.cell.state.borrow().is_none()
    }
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("container", &self.container())
            .field("slide_count", &self.slide_count())
            .field("current", &self.current_index())
            .field("playing", &self.is_playing())
            .field("destroyed", &self.is_destroyed())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
