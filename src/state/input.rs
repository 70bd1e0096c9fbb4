//! Input Module - Terminal key events to slider commands
//!
//! Bridges crossterm's event system with the click dispatcher, so a slider in
//! a terminal behaves like one driven by a pointer: ←/→ "click" the matching
//! arrow control (which pauses rotation), space toggles rotation.
//!
//! # API
//!
//! - `convert_key_event` - Map a crossterm KeyEvent to a [`SliderCommand`]
//! - `route_command` - Apply a command to a slider
//! - `route_key` - Both of the above
//! - `poll_event` - Non-blocking crossterm event check with timeout
//!
//! # Example
//!
//! ```ignore
//! use spark_slider::state::input::{poll_event, route_key, SliderCommand};
//! use crossterm::event::Event;
//! use std::time::Duration;
//!
//! loop {
//!     if let Some(Event::Key(key)) = poll_event(Duration::from_millis(16))? {
//!         if route_key(&gallery, key) == Some(SliderCommand::Quit) {
//!             break;
//!         }
//!     }
//!     gallery.run_pending_ticks();
//! }
//! ```

use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::events::dispatch_click;
use crate::slider::Slider;
use crate::types::Direction;

// =============================================================================
// COMMANDS
// =============================================================================

/// What a key press asks the slider to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderCommand {
    /// Previous slide (left arrow control)
    Prev,
    /// Next slide (right arrow control)
    Next,
    /// Pause when playing, play when paused
    TogglePlay,
    /// Leave the host loop; the slider ignores it
    Quit,
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert a crossterm KeyEvent to a command.
///
/// Releases are ignored; repeats navigate like presses.
pub fn convert_key_event(event: KeyEvent) -> Option<SliderCommand> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') => Some(SliderCommand::Quit),
            _ => None,
        };
    }

    match event.code {
        KeyCode::Left | KeyCode::Char('h') => Some(SliderCommand::Prev),
        KeyCode::Right | KeyCode::Char('l') => Some(SliderCommand::Next),
        KeyCode::Char(' ') => Some(SliderCommand::TogglePlay),
        KeyCode::Esc | KeyCode::Char('q') => Some(SliderCommand::Quit),
        _ => None,
    }
}

// =============================================================================
// ROUTING
// =============================================================================

/// Apply a command. Returns true if the slider handled it.
///
/// Navigation goes through a click on the arrow control so that any other
/// listeners on the arrow (or its ancestors) see it too. Sliders without
/// controls navigate directly.
pub fn route_command(slider: &Slider, command: SliderCommand) -> bool {
    if slider.is_destroyed() {
        return false;
    }

    let direction = match command {
        SliderCommand::Prev => Direction::Prev,
        SliderCommand::Next => Direction::Next,
        SliderCommand::TogglePlay => {
            if slider.is_playing() {
                slider.pause();
            } else {
                slider.play();
            }
            return true;
        }
        SliderCommand::Quit => return false,
    };

    match slider.arrows() {
        Some(arrows) => dispatch_click(arrows.get(direction)),
        None => {
            match direction {
                Direction::Prev => slider.prev(true),
                Direction::Next => slider.next(true),
            }
            true
        }
    }
}

/// Convert and route a key event. Returns the command it mapped to.
pub fn route_key(slider: &Slider, event: KeyEvent) -> Option<SliderCommand> {
    let command = convert_key_event(event)?;
    route_command(slider, command);
    Some(command)
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for a terminal event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if poll(timeout)? {
        Ok(Some(read()?))
    } else {
        Ok(None)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{append_child, body, create_element, reset_document, set_element_id};
    use crate::slider::SliderOptions;
    use crate::state::events::on_click;
    use crossterm::event::KeyEventState;
    use std::cell::Cell;
    use std::rc::Rc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mounted(count: usize) -> Slider {
        reset_document();
        let container = create_element("div");
        set_element_id(container, Some("gallery"));
        append_child(body(), container);
        for _ in 0..count {
            append_child(container, create_element("img"));
        }
        Slider::new("#gallery", Some(SliderOptions::default())).unwrap()
    }

    #[test]
    fn test_convert_key_event() {
        assert_eq!(convert_key_event(key(KeyCode::Left)), Some(SliderCommand::Prev));
        assert_eq!(convert_key_event(key(KeyCode::Char('l'))), Some(SliderCommand::Next));
        assert_eq!(convert_key_event(key(KeyCode::Char(' '))), Some(SliderCommand::TogglePlay));
        assert_eq!(convert_key_event(key(KeyCode::Esc)), Some(SliderCommand::Quit));
        assert_eq!(convert_key_event(key(KeyCode::Enter)), None);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(convert_key_event(ctrl_c), Some(SliderCommand::Quit));
        let ctrl_l = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert_eq!(convert_key_event(ctrl_l), None);
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(convert_key_event(release), None);
    }

    #[test]
    fn test_route_navigation_clicks_arrows() {
        let slider = mounted(3);
        assert!(slider.is_playing());

        // Other listeners on the control see the key as a click
        let arrows = slider.arrows().unwrap();
        let clicked = Rc::new(Cell::new(None));
        let clicked_e = clicked.clone();
        let _cleanup = on_click(arrows.right, move |event| clicked_e.set(Some(event.target)));

        assert_eq!(route_key(&slider, key(KeyCode::Right)), Some(SliderCommand::Next));
        assert_eq!(slider.current_index(), 1);
        assert!(!slider.is_playing());
        assert_eq!(clicked.get(), Some(arrows.right));

        route_key(&slider, key(KeyCode::Left));
        route_key(&slider, key(KeyCode::Left));
        assert_eq!(slider.current_index(), 2);
    }

    #[test]
    fn test_route_toggle_play() {
        let slider = mounted(2);
        assert!(slider.is_playing());

        route_command(&slider, SliderCommand::TogglePlay);
        assert!(!slider.is_playing());
        route_command(&slider, SliderCommand::TogglePlay);
        assert!(slider.is_playing());
    }

    #[test]
    fn test_route_without_arrows() {
        let slider = mounted(1);
        assert!(slider.arrows().is_none());

        assert!(route_command(&slider, SliderCommand::Next));
        assert_eq!(slider.current_index(), 0);
        assert!(!slider.is_playing());
    }

    #[test]
    fn test_route_after_destroy() {
        let slider = mounted(2);
        slider.destroy();

        assert!(!route_command(&slider, SliderCommand::Next));
        assert!(!route_command(&slider, SliderCommand::Quit));
    }
}
