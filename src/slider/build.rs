//! Markup transformation and the active-marker toggle.

use crate::engine::{append_child, arrays::classes, children, create_element};
use crate::types::{
    CLASS_ARROW, CLASS_CURRENT, CLASS_INNER_WRAPPER, CLASS_SLIDE, Direction, TAG_ARROW,
    TAG_WRAPPER,
};

/// The two navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrows {
    pub left: usize,
    pub right: usize,
}

impl Arrows {
    /// Control that navigates in `direction`.
    pub fn get(&self, direction: Direction) -> usize {
        match direction {
            Direction::Prev => self.left,
            Direction::Next => self.right,
        }
    }
}

/// Move every direct child of `container` into a fresh wrapper.
///
/// Each child's class list is replaced by the slide class; the child at
/// `current` also gets the active marker. Returns `(wrapper, slides)`.
pub(super) fn build_slider(container: usize, current: usize) -> (usize, Vec<usize>) {
    let wrapper = create_element(TAG_WRAPPER);
    classes::set_class_name(wrapper, CLASS_INNER_WRAPPER);

    let slides = children(container);
    for (i, &slide) in slides.iter().enumerate() {
        classes::set_class_name(slide, CLASS_SLIDE);
        if i == current {
            classes::add_class(slide, CLASS_CURRENT);
        }
        append_child(wrapper, slide);
    }

    append_child(container, wrapper);
    (wrapper, slides)
}

/// Append left/right controls to `container`. Only built for 2+ slides.
pub(super) fn build_controls(container: usize, slide_count: usize) -> Option<Arrows> {
    if slide_count <= 1 {
        return None;
    }

    let left = create_element(TAG_ARROW);
    let right = create_element(TAG_ARROW);

    let arrows = Arrows { left, right };
    for direction in [Direction::Prev, Direction::Next] {
        let control = arrows.get(direction);
        classes::add_class(control, CLASS_ARROW);
        classes::add_class(control, direction.arrow_class());
        append_child(container, control);
    }

    Some(arrows)
}

/// Clear the marker on `prev`, set it on `current`.
pub(super) fn animate(slides: &[usize], prev: Option<usize>, current: usize) {
    if let Some(&slide) = prev.and_then(|p| slides.get(p)) {
        classes::remove_class(slide, CLASS_CURRENT);
    }
    if let Some(&slide) = slides.get(current) {
        classes::add_class(slide, CLASS_CURRENT);
    }
}
