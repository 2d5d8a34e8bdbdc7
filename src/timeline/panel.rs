//! Main timeline panel: the 2×2 grid of play controls, ruler, track list,
//! and keyframe grid, with the playhead overlaid.

use dioxus::prelude::*;

use crate::constants::{
    BG_ELEVATED, BORDER_DEFAULT, HEADER_ROW_HEIGHT, TIMELINE_HEIGHT, TRACK_LIST_WIDTH,
};
use crate::core::playhead::project_playhead;
use crate::core::scroll_sync::ScrollSync;
use crate::core::scrub::ScrubSession;
use crate::state::{TimelineStore, Track};

use super::keyframe_list::KeyframeList;
use super::panes::PaneRegistry;
use super::play_controls::PlayControls;
use super::playhead::Playhead;
use super::ruler::Ruler;
use super::track_list::TrackList;

// Pushes the ruler pane's client width whenever it changes, via
// ResizeObserver plus a window resize listener. Listeners live inside the
// webview and are torn down with it.
const RULER_VIEWPORT_SCRIPT: &str = r#"
const paneId = "ruler-pane";
let lastWidth = null;

function sendWidth() {
    const pane = document.getElementById(paneId);
    if (!pane) {
        return;
    }
    const width = pane.clientWidth || 0;
    if (lastWidth !== null && Math.abs(lastWidth - width) < 0.5) {
        return;
    }
    lastWidth = width;
    dioxus.send(width);
}

function attach() {
    const pane = document.getElementById(paneId);
    if (!pane) {
        setTimeout(attach, 100);
        return;
    }
    const observer = new ResizeObserver(() => sendWidth());
    observer.observe(pane);
    window.addEventListener("resize", sendWidth, { passive: true });
    sendWidth();
}

attach();
await new Promise(() => {});
"#;

/// The timeline strip. Owns the presentation-only state: the pane registry,
/// the mirrored scroll offsets, and the sampled ruler viewport width. The
/// domain store and the scrub session are owned by the root component,
/// which also hosts the global mouse handlers that drive scrubbing.
#[component]
pub fn TimelinePanel(
    store: Signal<TimelineStore>,
    tracks: Signal<Vec<Track>>,
    scrub: Signal<ScrubSession>,
    panes: Signal<PaneRegistry>,
    scroll: Signal<ScrollSync>,
) -> Element {
    let mut ruler_viewport_width = use_signal(|| 0.0_f64);

    use_future(move || async move {
        let mut eval = document::eval(RULER_VIEWPORT_SCRIPT);
        loop {
            match eval.recv::<f64>().await {
                Ok(width) => {
                    let width = width.max(0.0);
                    if ruler_viewport_width() != width {
                        ruler_viewport_width.set(width);
                    }
                }
                Err(_) => break,
            }
        }
    });

    // Recomputed on every time, scroll, or viewport change; None while the
    // playhead is outside the visible window.
    let playhead = project_playhead(
        store.read().current_time(),
        scroll.read().ruler_left(),
        ruler_viewport_width(),
    );

    rsx! {
        div {
            style: "
                position: relative; width: 100%;
                height: {TIMELINE_HEIGHT}px; min-height: {TIMELINE_HEIGHT}px;
                display: grid;
                grid-template-columns: {TRACK_LIST_WIDTH}px 1fr;
                grid-template-rows: {HEADER_ROW_HEIGHT}px 1fr;
                background-color: {BG_ELEVATED};
                border-top: 2px solid {BORDER_DEFAULT};
            ",
            PlayControls { store }
            Ruler { store, scrub, panes, scroll }
            TrackList { tracks, panes, scroll }
            KeyframeList { store, tracks, panes, scroll }
            if let Some(projection) = playhead {
                Playhead { offset_x: projection.offset_x }
            }
        }
    }
}
