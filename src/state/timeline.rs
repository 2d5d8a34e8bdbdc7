use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEFAULT_DURATION, MAX_DURATION, MIN_DURATION, STEP};
use crate::utils::parse_time_input;

/// Raw input accepted by the store's mutation operations.
///
/// Field commits arrive as text, scrub positions as milliseconds. Both pass
/// through the same parse/round/clamp pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum RawTime {
    Text(String),
    Millis(f64),
}

impl From<&str> for RawTime {
    fn from(value: &str) -> Self {
        RawTime::Text(value.to_string())
    }
}

impl From<String> for RawTime {
    fn from(value: String) -> Self {
        RawTime::Text(value)
    }
}

impl From<f64> for RawTime {
    fn from(value: f64) -> Self {
        RawTime::Millis(value)
    }
}

impl From<i64> for RawTime {
    fn from(value: i64) -> Self {
        RawTime::Millis(value as f64)
    }
}

impl RawTime {
    fn parse(&self) -> Option<f64> {
        match self {
            RawTime::Text(text) => parse_time_input(text),
            RawTime::Millis(ms) => Some(*ms).filter(|v| v.is_finite()),
        }
    }
}

/// The only mutations the store applies. Private so callers go through the
/// named operations and can never observe a half-applied state.
enum Transition {
    SetCurrentTime(i64),
    SetMaxDuration(i64),
}

/// Single source of truth for the playhead time and the timeline length.
///
/// Invariants held after every mutation:
/// - `0 <= current_time <= max_duration`
/// - `MIN_DURATION <= max_duration <= MAX_DURATION`
/// - both values are multiples of `STEP`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineStore {
    current_time: i64,
    max_duration: i64,
}

impl Default for TimelineStore {
    fn default() -> Self {
        Self {
            current_time: 0,
            max_duration: DEFAULT_DURATION,
        }
    }
}

impl TimelineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current playhead position in milliseconds.
    pub fn current_time(&self) -> i64 {
        self.current_time
    }

    /// Total timeline length in milliseconds.
    pub fn max_duration(&self) -> i64 {
        self.max_duration
    }

    /// Sets the playhead time. Unparseable input is silently rejected;
    /// anything else is rounded to `STEP` and clamped to `[0, max_duration]`.
    pub fn set_current_time(&mut self, raw: impl Into<RawTime>) {
        let raw = raw.into();
        let Some(value) = raw.parse() else {
            debug!(?raw, "rejected current-time input");
            return;
        };
        let time = round_to_step(value).clamp(0, self.max_duration);
        self.apply(Transition::SetCurrentTime(time));
    }

    /// Sets the timeline length. Unparseable input is silently rejected;
    /// anything else is rounded to `STEP` and clamped to
    /// `[MIN_DURATION, MAX_DURATION]`. Shrinking below the playhead pulls
    /// the playhead back to the new end in the same transition.
    pub fn set_max_duration(&mut self, raw: impl Into<RawTime>) {
        let raw = raw.into();
        let Some(value) = raw.parse() else {
            debug!(?raw, "rejected duration input");
            return;
        };
        let duration = round_to_step(value).clamp(MIN_DURATION, MAX_DURATION);
        self.apply(Transition::SetMaxDuration(duration));
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::SetCurrentTime(time) => {
                self.current_time = time;
            }
            Transition::SetMaxDuration(duration) => {
                self.max_duration = duration;
                if self.current_time > duration {
                    self.current_time = duration;
                }
            }
        }
    }
}

/// Rounds to the nearest multiple of `STEP`, halves away from zero.
fn round_to_step(value: f64) -> i64 {
    (value / STEP as f64).round() as i64 * STEP
}
