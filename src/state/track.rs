use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named row in the timeline. Rows carry no keyframe data of their own;
/// the keyframe grid renders a uniform duration bar per row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Unique identifier, used as the render key.
    pub id: Uuid,
    /// Display name (e.g., "Track A").
    pub name: String,
}

impl Track {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// The editor session's track list: "Track A" through "Track J".
pub fn default_tracks() -> Vec<Track> {
    ('A'..='J').map(|letter| Track::new(format!("Track {letter}"))).collect()
}
