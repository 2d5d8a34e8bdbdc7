//! Horizontal time ruler: a scrollable pane holding the scrub track.

use dioxus::prelude::*;

use crate::constants::{BG_SURFACE, BORDER_DEFAULT, RULER_PADDING_X, RULER_TRACK_BG};
use crate::core::scroll_sync::{Pane, ScrollSync};
use crate::core::scrub::{position_to_time, ScrubSession};
use crate::state::TimelineStore;

use super::panes::{sync_from_pane, PaneRegistry};

/// The ruler pane. The inner track renders one pixel per millisecond, so
/// its width is exactly `max_duration`. Mouse-down seeks immediately and
/// opens a scrub session; the root component keeps seeking on every
/// mouse-move until mouse-up anywhere ends the session.
#[component]
pub fn Ruler(
    mut store: Signal<TimelineStore>,
    mut scrub: Signal<ScrubSession>,
    mut panes: Signal<PaneRegistry>,
    scroll: Signal<ScrollSync>,
) -> Element {
    let max_duration = store.read().max_duration();

    rsx! {
        div {
            id: "ruler-pane",
            style: "
                padding: 8px {RULER_PADDING_X}px; min-width: 0;
                border-bottom: 1px solid {BORDER_DEFAULT};
                background-color: {BG_SURFACE};
                overflow-x: auto; overflow-y: hidden;
            ",
            onmounted: move |e| panes.write().register(Pane::Ruler, e.data()),
            onscroll: move |_| sync_from_pane(Pane::Ruler, panes, scroll),
            div {
                style: "
                    width: {max_duration}px; height: 24px; border-radius: 6px;
                    background-color: {RULER_TRACK_BG}; cursor: pointer;
                ",
                onmounted: move |e| panes.write().register_ruler_track(e.data()),
                onmousedown: move |e| {
                    e.prevent_default();
                    // element_coordinates is already track-relative.
                    let x = e.element_coordinates().x;
                    let max = store.read().max_duration();
                    store.write().set_current_time(position_to_time(x, 0.0, max));
                    scrub.write().begin();
                },
            }
        }
    }
}
