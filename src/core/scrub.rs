//! Pointer-to-time mapping for the ruler track, and the drag session that
//! keeps seeking while the mouse button is held.

/// Converts a viewport-space pointer position into a time value.
///
/// One ruler pixel is one millisecond, so the track-relative x *is* the
/// time, clamped to the valid range. Positions outside the track clamp
/// rather than erroring.
pub fn position_to_time(client_x: f64, track_left: f64, max_duration: i64) -> f64 {
    (client_x - track_left).clamp(0.0, max_duration as f64)
}

/// Drag session started by mouse-down on the ruler track.
///
/// While active, every mouse-move anywhere in the window seeks; mouse-up
/// anywhere ends it. At most one session exists because a second mouse-down
/// cannot arrive while the button is still held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrubSession {
    active: bool,
}

impl ScrubSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn begin(&mut self) {
        self.active = true;
    }

    pub fn end(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_maps_one_pixel_per_millisecond() {
        // Scenario E: track at left 0, width 2000.
        assert_eq!(position_to_time(800.0, 0.0, 2000), 800.0);
        assert_eq!(position_to_time(-50.0, 0.0, 2000), 0.0);
        assert_eq!(position_to_time(2600.0, 0.0, 2000), 2000.0);
    }

    #[test]
    fn test_position_is_track_relative() {
        assert_eq!(position_to_time(500.0, 316.0, 2000), 184.0);
        assert_eq!(position_to_time(100.0, 316.0, 2000), 0.0);
    }

    #[test]
    fn test_session_lifecycle() {
        let mut session = ScrubSession::new();
        assert!(!session.is_active());
        session.begin();
        assert!(session.is_active());
        session.end();
        assert!(!session.is_active());
        // Ending twice stays inert.
        session.end();
        assert!(!session.is_active());
    }
}
