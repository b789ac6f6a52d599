//! Lazy image loading: `img[data-src]` gets its real source the first time
//! it approaches the viewport, then stops being watched.

use js_sys::Array;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlImageElement, IntersectionObserver, IntersectionObserverEntry};

const SELECTOR: &str = "img[data-src]";

pub struct LazyImages {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl LazyImages {
    pub fn install() -> Option<Self> {
        let document = web_sys::window()?.document()?;

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
                    if let Ok(image) = target.clone().dyn_into::<HtmlImageElement>() {
                        if let Some(src) = image.get_attribute("data-src") {
                            image.set_src(&src);
                            let _ = image.remove_attribute("data-src");
                        }
                    }
                    observer.unobserve(&target);
                }
            },
        );

        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?;

        let Ok(nodes) = document.query_selector_all(SELECTOR) else {
            return None;
        };
        for index in 0..nodes.length() {
            let Some(node) = nodes.get(index) else {
                continue;
            };
            if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                observer.observe(&element);
            }
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for LazyImages {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
