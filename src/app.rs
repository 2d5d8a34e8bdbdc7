//! Root application component.
//!
//! Owns the timeline store and the scrub session, and hosts the global
//! mouse handlers: while a scrub session is active, every mouse-move
//! anywhere in the window keeps seeking against the ruler track's live
//! bounding rect, and mouse-up anywhere ends the session.

use dioxus::prelude::*;

use crate::constants::{
    BG_BASE, BG_SURFACE, BORDER_DEFAULT, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};
use crate::core::scroll_sync::ScrollSync;
use crate::core::scrub::{position_to_time, ScrubSession};
use crate::state::{default_tracks, TimelineStore};
use crate::timeline::{PaneRegistry, TimelinePanel};

// Native number-input spinners are hidden so stepping always goes through
// the explicit stepper controls and arrow keys.
const GLOBAL_CSS: &str = r#"
input[type="number"]::-webkit-inner-spin-button,
input[type="number"]::-webkit-outer-spin-button {
    -webkit-appearance: none;
    margin: 0;
}
input[type="number"] {
    -moz-appearance: textfield;
    appearance: textfield;
}
input[type="number"]:focus {
    color: #ef4444;
}
"#;

/// Main application component.
#[component]
pub fn App() -> Element {
    let mut store = use_signal(TimelineStore::new);
    let tracks = use_signal(default_tracks);
    let mut scrub = use_signal(ScrubSession::new);
    let panes = use_signal(PaneRegistry::default);
    let scroll = use_signal(ScrollSync::new);

    let time = store.read().current_time();
    let duration = store.read().max_duration();

    // Text selection is suppressed only while a scrub session is active.
    let user_select_style = if scrub().is_active() { "none" } else { "auto" };
    let scrub_cursor = if scrub().is_active() { "ew-resize" } else { "default" };

    rsx! {
        style { {GLOBAL_CSS} }
        div {
            class: "app-container",
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
                overflow: hidden; position: fixed; top: 0; left: 0;
                user-select: {user_select_style};
                cursor: {scrub_cursor};
            ",

            onmousemove: move |e| {
                if !scrub().is_active() {
                    return;
                }
                e.prevent_default();
                let client_x = e.client_coordinates().x;
                let Some(track) = panes.read().ruler_track() else {
                    return;
                };
                spawn(async move {
                    let Ok(rect) = track.get_client_rect().await else {
                        return;
                    };
                    let max = store.read().max_duration();
                    let time = position_to_time(client_x, rect.origin.x, max);
                    store.write().set_current_time(time);
                });
            },
            onmouseup: move |_| scrub.write().end(),

            // Header
            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    height: 32px; padding: 0 14px; flex-shrink: 0;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                ",
                span {
                    style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;",
                    "Timestrip"
                }
                span {
                    style: "font-family: 'SF Mono', Consolas, monospace; font-size: 11px; color: {TEXT_DIM};",
                    "{time} / {duration} ms"
                }
            }

            // Stage placeholder above the strip
            div {
                style: "flex: 1; display: flex; align-items: center; justify-content: center; color: {TEXT_DIM}; font-size: 12px;",
                "No preview"
            }

            TimelinePanel { store, tracks, scrub, panes, scroll }
        }
    }
}
