//! Scroll-reveal: elements tagged `animate-on-scroll` gain the `animated`
//! class the first time a fifth of them enters the viewport, then stop being
//! watched. Below the mobile breakpoint everything is shown immediately.

use js_sys::Array;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

const SELECTOR: &str = ".animate-on-scroll";
const ANIMATED_CLASS: &str = "animated";
const VISIBLE_THRESHOLD: f64 = 0.2;
/// Bottom margin so elements start their reveal ~100px before fully entering.
const ROOT_MARGIN: &str = "0px 0px -100px 0px";
const MOBILE_BREAKPOINT: f64 = 768.0;

pub struct Reveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Reveal {
    /// Install over every reveal-tagged element. On narrow viewports the
    /// reveal machinery is skipped entirely and elements show at once.
    pub fn install() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let width = window
            .inner_width()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        if width < MOBILE_BREAKPOINT {
            mark_all_animated(&document);
            return None;
        }

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let _ = target.class_list().add_1(ANIMATED_CLASS);
                    observer.unobserve(&target);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));
        options.set_root_margin(ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;

        let reveal = Self {
            observer,
            _callback: callback,
        };
        reveal.refresh();
        Some(reveal)
    }

    /// Re-scan for elements that have not revealed yet. Called after a theme
    /// flip so the animation colors pick up the new palette.
    pub fn refresh(&self) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(nodes) = document.query_selector_all(SELECTOR) else {
            return;
        };
        for index in 0..nodes.length() {
            let Some(node) = nodes.get(index) else {
                continue;
            };
            let Ok(element) = node.dyn_into::<Element>() else {
                continue;
            };
            if element.class_list().contains(ANIMATED_CLASS) {
                continue;
            }
            self.observer.observe(&element);
        }
    }
}

impl Drop for Reveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn mark_all_animated(document: &Document) {
    let Ok(nodes) = document.query_selector_all(SELECTOR) else {
        return;
    };
    for index in 0..nodes.length() {
        let Some(node) = nodes.get(index) else {
            continue;
        };
        if let Ok(element) = node.dyn_into::<Element>() {
            let _ = element.class_list().add_1(ANIMATED_CLASS);
        }
    }
}
