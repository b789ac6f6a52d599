pub mod frame;
pub mod lazy;
pub mod loader;
pub mod parallax;
pub mod reveal;
pub mod ripple;
