//! Shared UI constants: colors, layout sizing, and timeline policy values.

pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_PLAYHEAD: &str = "#ca8a04";
pub const RULER_TRACK_BG: &str = "rgba(255, 255, 255, 0.25)";
pub const SEGMENT_BG: &str = "rgba(255, 255, 255, 0.1)";

// Timeline policy. Fixed, not runtime-configurable: one ruler pixel is one
// millisecond, and every stored value is a multiple of STEP.
pub const STEP: i64 = 10;
pub const MIN_DURATION: i64 = 100;
pub const MAX_DURATION: i64 = 6000;
pub const DEFAULT_DURATION: i64 = 2000;

// Layout. BASE_LEFT is the distance from the panel's left edge to the ruler
// track origin: the track-list column plus the ruler pane's left padding.
pub const TIMELINE_HEIGHT: f64 = 300.0;
pub const TRACK_LIST_WIDTH: f64 = 300.0;
pub const HEADER_ROW_HEIGHT: f64 = 40.0;
pub const TRACK_ROW_HEIGHT: f64 = 40.0;
pub const RULER_PADDING_X: f64 = 16.0;
pub const BASE_LEFT: f64 = TRACK_LIST_WIDTH + RULER_PADDING_X;
