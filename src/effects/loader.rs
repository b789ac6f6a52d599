//! Page-loader removal: fade the overlay out shortly after mount, then drop
//! it from the DOM once the fade has played. No loader, no work.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

const FADE_DELAY_MS: u32 = 500;
const REMOVE_DELAY_MS: u32 = 500;

pub fn dismiss() {
    spawn_local(async {
        TimeoutFuture::new(FADE_DELAY_MS).await;
        let Some(loader) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(".page-loader").ok().flatten())
        else {
            return;
        };
        let _ = loader.class_list().add_1("loaded");
        TimeoutFuture::new(REMOVE_DELAY_MS).await;
        loader.remove();
    });
}
