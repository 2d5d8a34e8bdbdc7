/// Parses user-entered numeric text into a finite millisecond value.
///
/// Returns `None` for empty, non-numeric, or non-finite text ("inf", "NaN")
/// so callers can reject the input without touching state.
pub fn parse_time_input(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
