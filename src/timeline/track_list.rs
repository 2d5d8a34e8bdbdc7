//! Vertical list of track names, scroll-locked to the keyframe grid.

use dioxus::prelude::*;

use crate::constants::{BORDER_DEFAULT, BORDER_SUBTLE, TEXT_SECONDARY, TRACK_ROW_HEIGHT};
use crate::core::scroll_sync::{Pane, ScrollSync};
use crate::state::Track;

use super::panes::{sync_from_pane, PaneRegistry};

#[component]
pub fn TrackList(
    tracks: Signal<Vec<Track>>,
    mut panes: Signal<PaneRegistry>,
    scroll: Signal<ScrollSync>,
) -> Element {
    rsx! {
        div {
            id: "track-list",
            style: "
                display: grid; grid-auto-rows: {TRACK_ROW_HEIGHT}px;
                border-right: 1px solid {BORDER_DEFAULT};
                overflow: auto;
            ",
            onmounted: move |e| panes.write().register(Pane::TrackList, e.data()),
            onscroll: move |_| sync_from_pane(Pane::TrackList, panes, scroll),
            for track in tracks.read().iter() {
                div {
                    key: "{track.id}",
                    style: "
                        display: flex; align-items: center; padding: 0 12px;
                        border-bottom: 1px solid {BORDER_SUBTLE};
                        font-size: 12px; color: {TEXT_SECONDARY};
                    ",
                    "{track.name}"
                }
            }
        }
    }
}
