//! Timeline strip components.

mod keyframe_list;
mod panel;
mod panes;
mod play_controls;
mod playhead;
mod ruler;
mod track_list;

pub use panel::TimelinePanel;
pub use panes::PaneRegistry;
