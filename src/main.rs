//! Timestrip
//!
//! Interactive timeline strip for a keyframe animation editor: scrub a
//! playhead across a bounded range, edit time and duration numerically,
//! and keep the ruler, track list, and keyframe grid scroll-locked.

mod app;
mod constants;
mod core;
mod state;
mod timeline;
mod utils;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing::info;

fn main() {
    dioxus::logger::initialize_default();
    info!("starting timestrip");

    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Timestrip")
                .with_inner_size(LogicalSize::new(1280.0, 800.0))
                .with_resizable(true),
        )
        .with_menu(None);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
