//! Expanding click ripple for the primary buttons.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, MouseEvent};

/// Matches the `ripple` keyframe animation length in the page styles.
const LIFETIME_MS: u32 = 600;

/// Spawn a ripple inside the clicked element, centered on the pointer.
pub fn spawn(event: &MouseEvent) {
    let Some(button) = event
        .current_target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(ripple) = document.create_element("span") else {
        return;
    };
    let Ok(ripple) = ripple.dyn_into::<HtmlElement>() else {
        return;
    };
    ripple.set_class_name("ripple");

    let rect = button.get_bounding_client_rect();
    let x = f64::from(event.client_x()) - rect.left();
    let y = f64::from(event.client_y()) - rect.top();
    let style = ripple.style();
    let _ = style.set_property("left", &format!("{x:.0}px"));
    let _ = style.set_property("top", &format!("{y:.0}px"));

    if button.append_child(&ripple).is_err() {
        return;
    }
    spawn_local(async move {
        TimeoutFuture::new(LIFETIME_MS).await;
        ripple.remove();
    });
}
