//! Property tests for slider navigation invariants.

use proptest::prelude::*;
use spark_slider::{
    CLASS_CURRENT, Slider, SliderOptions, append_child, body, create_element, has_class,
    reset_document, set_element_id,
};

/// Mount a non-rotating slider over `count` fresh children.
fn mounted(count: usize) -> Slider {
    reset_document();
    let container = create_element("div");
    set_element_id(container, Some("gallery"));
    append_child(body(), container);
    for _ in 0..count {
        append_child(container, create_element("div"));
    }
    Slider::new("#gallery", Some(SliderOptions::default().with_auto_play(false))).unwrap()
}

fn active_count(slider: &Slider) -> usize {
    slider
        .slides()
        .into_iter()
        .filter(|&s| has_class(s, CLASS_CURRENT))
        .count()
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Next,
    Prev,
    MoveTo(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Next),
        Just(Op::Prev),
        (0usize..12).prop_map(Op::MoveTo),
    ]
}

proptest! {
    /// Construction marks exactly slide 0.
    #[test]
    fn construction_marks_first_slide(n in 1usize..10) {
        let slider = mounted(n);
        prop_assert_eq!(slider.current_index(), 0);
        prop_assert_eq!(active_count(&slider), 1);
        prop_assert!(has_class(slider.slides()[0], CLASS_CURRENT));
    }

    /// next() visits 0, 1, …, n-1, 0, …
    #[test]
    fn next_cycles_forward(n in 1usize..10, steps in 0usize..40) {
        let slider = mounted(n);
        for step in 1..=steps {
            slider.next(false);
            prop_assert_eq!(slider.current_index(), step % n);
        }
    }

    /// prev() visits 0, n-1, n-2, …, 0, …
    #[test]
    fn prev_cycles_backward(n in 1usize..10, steps in 0usize..40) {
        let slider = mounted(n);
        for step in 1..=steps {
            slider.prev(false);
            prop_assert_eq!(slider.current_index(), (n - step % n) % n);
        }
    }

    /// move_to rejects 0 and n-1 (and beyond); accepts everything strictly between.
    #[test]
    fn move_to_boundary(n in 1usize..10, k in 0usize..12) {
        let slider = mounted(n);
        let result = slider.move_to(k);
        if k > 0 && k + 1 < n {
            prop_assert!(result.is_ok());
            prop_assert_eq!(slider.current_index(), k);
        } else {
            prop_assert!(result.unwrap_err().is_range());
            prop_assert_eq!(slider.current_index(), 0);
        }
    }

    /// Any operation sequence keeps the index in range with exactly one marker.
    #[test]
    fn exactly_one_active_slide(n in 1usize..8, ops in prop::collection::vec(arb_op(), 0..50)) {
        let slider = mounted(n);
        for op in ops {
            match op {
                Op::Next => slider.next(false),
                Op::Prev => slider.prev(true),
                Op::MoveTo(k) => {
                    let _ = slider.move_to(k);
                }
            }
            prop_assert!(slider.current_index() < n);
            prop_assert_eq!(active_count(&slider), 1);
            prop_assert!(has_class(slider.slides()[slider.current_index()], CLASS_CURRENT));
        }
    }
}
