//! Toolkit-independent interaction logic:
//! - field_edit: draft-vs-committed state machine for the numeric inputs
//! - scrub: pointer-to-time mapping and the ruler drag session
//! - scroll_sync: three-way pane scroll mirroring
//! - playhead: marker position and visibility

pub mod field_edit;
pub mod playhead;
pub mod scroll_sync;
pub mod scrub;
