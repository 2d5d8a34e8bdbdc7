//! Registry of mounted pane elements and the scroll-sync glue.
//!
//! Owned by the timeline panel and passed down to each pane, which
//! registers itself on mount. Geometry reads (scroll offsets, the ruler
//! track's bounding rect) go through the mounted handles; mirror writes
//! address the counterpart pane's stable element id. A pane that has not
//! mounted yet degrades that event to a no-op.

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::scroll_sync::{Pane, ScrollSync};

/// Stable DOM id for each pane's scrollable element.
pub(crate) fn pane_element_id(pane: Pane) -> &'static str {
    match pane {
        Pane::Ruler => "ruler-pane",
        Pane::KeyframeGrid => "keyframe-grid",
        Pane::TrackList => "track-list",
    }
}

#[derive(Clone, Default)]
pub struct PaneRegistry {
    panes: HashMap<Pane, Rc<MountedData>>,
    ruler_track: Option<Rc<MountedData>>,
}

impl PaneRegistry {
    pub fn register(&mut self, pane: Pane, element: Rc<MountedData>) {
        self.panes.insert(pane, element);
    }

    /// The inner ruler track element, registered separately from the ruler
    /// scroll pane: scrubbing needs the track's bounding rect, not the
    /// pane's.
    pub fn register_ruler_track(&mut self, element: Rc<MountedData>) {
        self.ruler_track = Some(element);
    }

    pub fn get(&self, pane: Pane) -> Option<Rc<MountedData>> {
        self.panes.get(&pane).cloned()
    }

    pub fn ruler_track(&self) -> Option<Rc<MountedData>> {
        self.ruler_track.clone()
    }
}

/// Handles one pane's scroll event: samples the pane's offset, runs it
/// through the synchronizer, and writes the resulting offsets onto the
/// counterpart elements. An already-converged counterpart produces no
/// write, and a write that does not move a pane fires no scroll event, so
/// the mirrored pane's echo terminates the cycle.
pub fn sync_from_pane(pane: Pane, panes: Signal<PaneRegistry>, mut scroll: Signal<ScrollSync>) {
    let Some(source) = panes.read().get(pane) else {
        return;
    };
    spawn(async move {
        let Ok(offset) = source.get_scroll_offset().await else {
            return;
        };
        let writes = scroll.write().pane_scrolled(pane, offset.x, offset.y);
        for write in writes {
            let _ = document::eval(&format!(
                "document.getElementById('{}')?.scrollTo({}, {});",
                pane_element_id(write.pane),
                write.left,
                write.top,
            ));
        }
    });
}
