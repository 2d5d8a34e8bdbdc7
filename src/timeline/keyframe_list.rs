//! Keyframe grid: one row per track, each carrying a uniform duration bar.

use dioxus::prelude::*;

use crate::constants::{RULER_PADDING_X, SEGMENT_BG};
use crate::core::scroll_sync::{Pane, ScrollSync};
use crate::state::{TimelineStore, Track};

use super::panes::{sync_from_pane, PaneRegistry};

#[component]
pub fn KeyframeList(
    store: Signal<TimelineStore>,
    tracks: Signal<Vec<Track>>,
    mut panes: Signal<PaneRegistry>,
    scroll: Signal<ScrollSync>,
) -> Element {
    let max_duration = store.read().max_duration();

    rsx! {
        div {
            id: "keyframe-grid",
            style: "padding: 0 {RULER_PADDING_X}px; min-width: 0; overflow: auto;",
            onmounted: move |e| panes.write().register(Pane::KeyframeGrid, e.data()),
            onscroll: move |_| sync_from_pane(Pane::KeyframeGrid, panes, scroll),
            for track in tracks.read().iter() {
                Segment { key: "{track.id}", width: max_duration }
            }
        }
    }
}

/// A single row's duration marker, sized in lockstep with the ruler track.
#[component]
fn Segment(width: i64) -> Element {
    rsx! {
        div {
            style: "width: {width}px; padding: 8px 0;",
            div {
                style: "height: 24px; border-radius: 6px; background-color: {SEGMENT_BG};",
            }
        }
    }
}
