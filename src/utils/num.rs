//! Numeric parsing helpers.

/// Parse a telemetry number. Empty, malformed, or non-finite input is
/// missing, never an error.
pub fn parse_optional_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
