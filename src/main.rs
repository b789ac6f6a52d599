mod app;
mod components;
mod effects;
mod motion;
mod pages;
mod scroll;
mod theme;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("attendance-site is a browser frontend. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<app::App>::new().render();
}
