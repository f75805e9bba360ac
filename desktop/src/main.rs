//! Native desktop entry point. Reads `OPENWEATHER_*` from the environment at
//! startup.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting SkyCast (desktop)");

    let window = WindowBuilder::new()
        .with_title("SkyCast")
        .with_inner_size(LogicalSize::new(520.0, 760.0));

    LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(ui::App);
}
