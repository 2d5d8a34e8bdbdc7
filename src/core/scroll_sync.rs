//! Three-way scroll mirroring between the ruler, the keyframe grid, and the
//! track list.
//!
//! The ruler and the keyframe grid share the horizontal axis; the track list
//! and the keyframe grid share the vertical axis. Each scroll event updates
//! the model and yields the element writes needed to bring the counterpart
//! pane to the same offset. A pane already at the target offset produces no
//! write, which is what terminates the echo when the counterpart's own
//! scroll event comes back.

/// One independently scrollable pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pane {
    Ruler,
    KeyframeGrid,
    TrackList,
}

/// An absolute scroll offset to apply to a pane's element. Carries both
/// axes so the write never disturbs the pane's resting cross-axis offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollWrite {
    pub pane: Pane,
    pub left: f64,
    pub top: f64,
}

/// Last-known offsets of all panes, and the mirroring rules.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSync {
    ruler_left: f64,
    keyframe_left: f64,
    keyframe_top: f64,
    track_top: f64,
}

impl ScrollSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Horizontal offset of the ruler pane; the playhead projector reads
    /// this on every change.
    pub fn ruler_left(&self) -> f64 {
        self.ruler_left
    }

    /// Records a scroll event from `pane` and returns the writes that
    /// mirror it onto the counterpart pane(s).
    pub fn pane_scrolled(&mut self, pane: Pane, left: f64, top: f64) -> Vec<ScrollWrite> {
        let mut writes = Vec::new();
        match pane {
            Pane::Ruler => {
                self.ruler_left = left;
                if self.keyframe_left != left {
                    self.keyframe_left = left;
                    writes.push(ScrollWrite {
                        pane: Pane::KeyframeGrid,
                        left,
                        top: self.keyframe_top,
                    });
                }
            }
            Pane::KeyframeGrid => {
                self.keyframe_left = left;
                self.keyframe_top = top;
                if self.ruler_left != left {
                    self.ruler_left = left;
                    writes.push(ScrollWrite {
                        pane: Pane::Ruler,
                        left,
                        top: 0.0,
                    });
                }
                if self.track_top != top {
                    self.track_top = top;
                    writes.push(ScrollWrite {
                        pane: Pane::TrackList,
                        left: 0.0,
                        top,
                    });
                }
            }
            Pane::TrackList => {
                self.track_top = top;
                if self.keyframe_top != top {
                    self.keyframe_top = top;
                    writes.push(ScrollWrite {
                        pane: Pane::KeyframeGrid,
                        left: self.keyframe_left,
                        top,
                    });
                }
            }
        }
        writes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyframe_scroll_mirrors_ruler() {
        // Scenario F: keyframe grid to scrollLeft 150 drags the ruler along.
        let mut sync = ScrollSync::new();
        let writes = sync.pane_scrolled(Pane::KeyframeGrid, 150.0, 0.0);
        assert_eq!(
            writes,
            vec![ScrollWrite { pane: Pane::Ruler, left: 150.0, top: 0.0 }]
        );
        assert_eq!(sync.ruler_left(), 150.0);
    }

    #[test]
    fn test_ruler_scroll_mirrors_keyframe() {
        let mut sync = ScrollSync::new();
        let writes = sync.pane_scrolled(Pane::Ruler, 150.0, 0.0);
        assert_eq!(
            writes,
            vec![ScrollWrite { pane: Pane::KeyframeGrid, left: 150.0, top: 0.0 }]
        );
    }

    #[test]
    fn test_track_list_scroll_mirrors_keyframe_vertically() {
        let mut sync = ScrollSync::new();
        let writes = sync.pane_scrolled(Pane::TrackList, 0.0, 80.0);
        assert_eq!(
            writes,
            vec![ScrollWrite { pane: Pane::KeyframeGrid, left: 0.0, top: 80.0 }]
        );
    }

    #[test]
    fn test_echo_event_produces_no_writes() {
        // The mirrored pane fires its own scroll event at the written
        // offset; the synchronizer must treat it as already converged.
        let mut sync = ScrollSync::new();
        let writes = sync.pane_scrolled(Pane::KeyframeGrid, 150.0, 0.0);
        assert_eq!(writes.len(), 1);
        let echo = sync.pane_scrolled(Pane::Ruler, 150.0, 0.0);
        assert!(echo.is_empty());
    }

    #[test]
    fn test_writes_preserve_cross_axis_offset() {
        let mut sync = ScrollSync::new();
        sync.pane_scrolled(Pane::KeyframeGrid, 0.0, 120.0);
        let writes = sync.pane_scrolled(Pane::Ruler, 40.0, 0.0);
        assert_eq!(
            writes,
            vec![ScrollWrite { pane: Pane::KeyframeGrid, left: 40.0, top: 120.0 }]
        );
    }

    #[test]
    fn test_diagonal_keyframe_scroll_updates_both_axes() {
        let mut sync = ScrollSync::new();
        let writes = sync.pane_scrolled(Pane::KeyframeGrid, 60.0, 90.0);
        assert_eq!(writes.len(), 2);
        assert!(writes.contains(&ScrollWrite { pane: Pane::Ruler, left: 60.0, top: 0.0 }));
        assert!(writes.contains(&ScrollWrite { pane: Pane::TrackList, left: 0.0, top: 90.0 }));
        assert!(sync.pane_scrolled(Pane::Ruler, 60.0, 0.0).is_empty());
        assert!(sync.pane_scrolled(Pane::TrackList, 0.0, 90.0).is_empty());
    }
}
