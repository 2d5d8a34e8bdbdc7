//! The playhead marker overlaying the ruler and keyframe grid.

use dioxus::prelude::*;

use crate::constants::{ACCENT_PLAYHEAD, BASE_LEFT};

/// Vertical playhead line with its triangular grab handle. Only rendered
/// while the projector reports the playhead inside the ruler viewport; the
/// panel omits it entirely otherwise, so absence doubles as the visibility
/// signal for downstream consumers.
#[component]
pub fn Playhead(offset_x: f64) -> Element {
    rsx! {
        div {
            style: "
                position: absolute; left: {BASE_LEFT}px; top: 0; height: 100%;
                border-left: 2px solid {ACCENT_PLAYHEAD};
                transform: translateX({offset_x}px);
                pointer-events: none; z-index: 10;
            ",
            div {
                style: "
                    position: absolute;
                    border: 5px solid transparent; border-top-color: {ACCENT_PLAYHEAD};
                    transform: translateX(-50%);
                ",
            }
        }
    }
}
