//! Browser entry point. Build with `dx serve --package web`.
//!
//! `OPENWEATHER_API_KEY` has to be present when this crate is compiled, since a
//! wasm module has no process environment to read at runtime.

use dioxus_logger::tracing::{info, Level};

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting SkyCast (web)");
    dioxus::launch(ui::App);
}
