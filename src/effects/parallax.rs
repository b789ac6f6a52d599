//! Mouse and scroll parallax for the hero decorations.
//!
//! Pointer movement drifts the floating shapes at increasing speeds; the
//! hero content slides down and fades while the hero is still on screen.
//! A missing hero or shape set just skips its half of the effect.

use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use super::frame::FrameGate;

const SHAPE_SELECTOR: &str = ".floating-shapes .shape";
/// Each successive shape moves this much faster than the previous one.
const SHAPE_SPEED_STEP: f64 = 15.0;
const HERO_DRIFT: f64 = 0.3;

pub struct Parallax {
    _mouse: EventListener,
    _scroll: EventListener,
    _gate: Rc<FrameGate>,
}

impl Parallax {
    pub fn install() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let mouse_document = document.clone();
        let mouse = EventListener::new(&document, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            drift_shapes(&mouse_document, event);
        });

        let gate = Rc::new(FrameGate::new(|_| update_hero()));
        let scroll = {
            let gate = Rc::clone(&gate);
            EventListener::new(&window, "scroll", move |_| gate.schedule())
        };

        Some(Self {
            _mouse: mouse,
            _scroll: scroll,
            _gate: gate,
        })
    }
}

fn drift_shapes(document: &Document, event: &MouseEvent) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .filter(|w| *w > 0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .filter(|h| *h > 0.0);
    let (Some(width), Some(height)) = (width, height) else {
        return;
    };

    let mouse_x = f64::from(event.client_x()) / width;
    let mouse_y = f64::from(event.client_y()) / height;

    let Ok(shapes) = document.query_selector_all(SHAPE_SELECTOR) else {
        return;
    };
    for index in 0..shapes.length() {
        let Some(node) = shapes.get(index) else {
            continue;
        };
        let Ok(shape) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        let speed = (f64::from(index) + 1.0) * SHAPE_SPEED_STEP;
        let x = (mouse_x - 0.5) * speed;
        let y = (mouse_y - 0.5) * speed;
        let _ = shape
            .style()
            .set_property("transform", &format!("translate({x:.1}px, {y:.1}px)"));
    }
}

fn update_hero() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Ok(scroll_y) = window.scroll_y() else {
        return;
    };
    let Some(hero) = document
        .query_selector(".hero-section")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let hero_height = f64::from(hero.offset_height());
    if hero_height <= 0.0 || scroll_y >= hero_height {
        return;
    }
    let Some(content) = document
        .query_selector(".hero-content")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let style = content.style();
    let _ = style.set_property(
        "transform",
        &format!("translateY({:.1}px)", scroll_y * HERO_DRIFT),
    );
    let _ = style.set_property(
        "opacity",
        &format!("{:.3}", 1.0 - (scroll_y / hero_height) * 0.5),
    );
}
