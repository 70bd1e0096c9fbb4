//! End-to-end slider scenarios against the document engine.
//!
//! Each test builds its own document (state is thread-local) and drives the
//! slider only through the public API and dispatched clicks.

use std::time::Duration;

use spark_slider::{
    CLASS_ARROW, CLASS_ARROW_LEFT, CLASS_ARROW_RIGHT, CLASS_CURRENT, CLASS_INNER_WRAPPER,
    CLASS_SLIDE, Slider, SliderError, SliderOptions, append_child, body, children, classes,
    create_element, dispatch_click, has_class, parent, query_selector, remove_element,
    reset_document, set_element_id, set_text_content, slider, tag_name,
};

fn manual() -> Option<SliderOptions> {
    Some(SliderOptions::default().with_auto_play(false))
}

/// `<div id="gallery"><img>…</img>×count</div>` attached to the body.
fn gallery(count: usize) -> (usize, Vec<usize>) {
    reset_document();
    let container = create_element("div");
    set_element_id(container, Some("gallery"));
    append_child(body(), container);

    let items = (0..count)
        .map(|i| {
            let item = create_element("img");
            set_text_content(item, &format!("slide {i}"));
            append_child(container, item);
            item
        })
        .collect();
    (container, items)
}

fn active_positions(items: &[usize]) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| has_class(**item, CLASS_CURRENT))
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn three_children_markup_and_full_cycle() {
    let (container, items) = gallery(3);
    let s = slider("#gallery", manual()).unwrap();

    // children[0] active, none of the others
    assert_eq!(active_positions(&items), vec![0]);
    for &item in &items {
        assert!(has_class(item, CLASS_SLIDE));
    }

    // wrapper, then the two controls as later siblings
    let top = children(container);
    assert_eq!(top.len(), 3);
    let wrapper = top[0];
    assert_eq!(tag_name(wrapper), "div");
    assert!(has_class(wrapper, CLASS_INNER_WRAPPER));
    assert_eq!(children(wrapper), items);

    let arrows = s.arrows().unwrap();
    assert_eq!(&top[1..], &[arrows.left, arrows.right]);
    assert_eq!(tag_name(arrows.left), "span");
    assert_eq!(classes(arrows.left), vec![CLASS_ARROW, CLASS_ARROW_LEFT]);
    assert_eq!(classes(arrows.right), vec![CLASS_ARROW, CLASS_ARROW_RIGHT]);

    s.next(false);
    s.next(false);
    s.next(false);
    assert_eq!(active_positions(&items), vec![0]);
    assert_eq!(s.current_index(), 0);
}

#[test]
fn single_child_has_no_controls() {
    let (container, items) = gallery(1);
    let s = Slider::new("#gallery", None).unwrap();

    assert!(s.arrows().is_none());
    assert_eq!(children(container).len(), 1);

    s.next(false);
    assert_eq!(s.current_index(), 0);
    s.prev(false);
    assert_eq!(s.current_index(), 0);
    assert_eq!(active_positions(&items), vec![0]);

    s.destroy();
}

#[test]
fn destroy_removes_container() {
    let (_, items) = gallery(3);
    let s = Slider::new("#gallery", None).unwrap();
    assert!(s.is_playing());

    s.destroy();

    assert_eq!(query_selector("#gallery"), None);
    assert!(items.iter().all(|&item| parent(item).is_none()));
    assert!(children(body()).is_empty());
    assert!(!s.is_playing());
}

#[test]
fn destroy_twice_is_silent() {
    gallery(2);
    let s = Slider::new("#gallery", manual()).unwrap();
    s.destroy();
    s.destroy();
    assert!(s.is_destroyed());
}

#[test]
fn missing_and_unknown_selectors_fail_fast() {
    gallery(2);

    let err = Slider::new("", None).unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(err, SliderError::MissingSelector);

    let err = Slider::new(".carousel", None).unwrap_err();
    assert!(err.is_configuration());

    // Nothing was rewritten
    let container = query_selector("#gallery").unwrap();
    assert!(children(container).iter().all(|&c| !has_class(c, CLASS_SLIDE)));
}

#[test]
fn clicking_arrows_navigates_and_pauses() {
    let (_, items) = gallery(4);
    let s = Slider::new("#gallery", None).unwrap();
    let arrows = s.arrows().unwrap();

    dispatch_click(arrows.left);
    assert_eq!(active_positions(&items), vec![3]);
    assert!(!s.is_playing());

    s.play();
    dispatch_click(arrows.right);
    assert_eq!(active_positions(&items), vec![0]);
    assert!(!s.is_playing());
}

#[test]
fn arrows_are_inert_after_destroy() {
    gallery(3);
    let s = Slider::new("#gallery", manual()).unwrap();
    let arrows = s.arrows().unwrap();
    s.destroy();

    assert!(!dispatch_click(arrows.right));
    assert_eq!(s.current_index(), 0);
}

/// Known-odd boundary: `move_to` refuses both the first and the last slide.
#[test]
fn move_to_refuses_first_and_last_slide() {
    let (_, items) = gallery(5);
    let s = Slider::new("#gallery", None).unwrap();

    assert!(s.move_to(0).unwrap_err().is_range());
    assert!(s.move_to(4).unwrap_err().is_range());
    assert!(!s.is_playing());

    for k in 1..4 {
        s.play();
        s.move_to(k).unwrap();
        assert_eq!(active_positions(&items), vec![k]);
        assert!(!s.is_playing());
    }
}

#[test]
fn independent_sliders_keep_independent_timers() {
    reset_document();
    for id in ["first", "second"] {
        let container = create_element("div");
        set_element_id(container, Some(id));
        append_child(body(), container);
        for _ in 0..3 {
            append_child(container, create_element("img"));
        }
    }

    let options = SliderOptions::default().with_interval(Duration::from_millis(500));
    let first = Slider::new("#first", Some(options)).unwrap();
    let second = Slider::new("#second", Some(options)).unwrap();
    assert!(first.is_playing());
    assert!(second.is_playing());

    first.pause();
    assert!(!first.is_playing());
    assert!(second.is_playing());

    first.destroy();
    assert!(second.is_playing());
    second.destroy();
}

#[test]
fn auto_rotation_advances_on_ticks() {
    let (_, items) = gallery(3);
    let options = SliderOptions::default().with_interval(Duration::from_millis(15));
    let s = Slider::new("#gallery", Some(options)).unwrap();

    std::thread::sleep(Duration::from_millis(100));
    assert_eq!(s.run_pending_ticks(), 1);
    assert_eq!(active_positions(&items), vec![1]);

    // A long stall still advances one slide per drain
    std::thread::sleep(Duration::from_millis(200));
    assert_eq!(s.run_pending_ticks(), 1);
    assert_eq!(active_positions(&items), vec![2]);
    s.destroy();
}

#[test]
fn removing_container_directly_stops_the_slider() {
    let (container, _) = gallery(3);
    let s = Slider::new("#gallery", None).unwrap();

    remove_element(container);

    assert!(s.is_destroyed());
    assert!(!s.is_playing());
    assert_eq!(query_selector("#gallery"), None);
}

#[test]
fn options_record_from_json() {
    gallery(2);
    let s = Slider::from_value("#gallery", &serde_json::json!({ "autoPlay": false, "speed": 300 }))
        .unwrap();

    assert!(!s.is_playing());
    assert_eq!(s.transition_speed(), Some(Duration::from_millis(300)));
    assert_eq!(s.options().map(|o| o.interval_ms), Some(2000));
}
