//! Terminal Example - A rotating gallery in raw mode
//!
//! Builds a five-slide gallery, mounts a slider over it, and redraws whenever
//! the current index changes:
//! - ←/→ (or h/l) click the arrow controls, which pauses rotation
//! - space toggles rotation
//! - q, Esc, or Ctrl+C exits
//!
//! Logs go to stderr; set `RUST_LOG=spark_slider=trace` to watch transitions.
//!
//! Run with: cargo run --example terminal 2>slider.log

use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::Duration;

use crossterm::{
    cursor, execute,
    event::Event,
    terminal::{self, ClearType},
};
use spark_signals::effect;
use spark_slider::{
    CLASS_CURRENT, Slider, SliderCommand, SliderOptions, append_child, body, create_element,
    has_class, poll_event, route_key, set_element_id, set_text_content, text_content,
};
use tracing_subscriber::EnvFilter;

const SLIDES: [&str; 5] = [
    "Harbour at dawn",
    "Market street",
    "Cliff path",
    "Lighthouse",
    "Harbour at dusk",
];

fn build_gallery() {
    let container = create_element("div");
    set_element_id(container, Some("gallery"));
    append_child(body(), container);

    for caption in SLIDES {
        let item = create_element("figure");
        set_text_content(item, caption);
        append_child(container, item);
    }
}

fn draw(gallery: &Slider) -> io::Result<()> {
    let mut out = io::stdout();
    execute!(out, cursor::MoveTo(0, 0), terminal::Clear(ClearType::All))?;

    write!(out, "spark-slider demo\r\n\r\n")?;
    for (i, slide) in gallery.slides().into_iter().enumerate() {
        let marker = if has_class(slide, CLASS_CURRENT) { '>' } else { ' ' };
        write!(out, " {marker} {i}. {}\r\n", text_content(slide))?;
    }

    let state = if gallery.is_playing() { "playing" } else { "paused" };
    write!(out, "\r\n[{state}]  <-/-> navigate  space play/pause  q quit\r\n")?;
    out.flush()
}

fn run(gallery: &Slider) -> io::Result<()> {
    // Redraw on every published index
    let dirty = Rc::new(Cell::new(true));
    let signal = gallery.current_signal();
    let dirty_effect = dirty.clone();
    let _stop = effect(move || {
        let _ = signal.get();
        dirty_effect.set(true);
    });

    loop {
        if let Some(Event::Key(key)) = poll_event(Duration::from_millis(16))? {
            match route_key(gallery, key) {
                Some(SliderCommand::Quit) => return Ok(()),
                Some(_) => dirty.set(true),
                None => {}
            }
        }

        gallery.run_pending_ticks();

        if dirty.replace(false) {
            draw(gallery)?;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    build_gallery();
    let options = SliderOptions::default().with_interval(Duration::from_millis(1500));
    let gallery = Slider::new("#gallery", Some(options))?;

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&gallery);

    execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    gallery.destroy();
    result?;
    Ok(())
}
