//! Split-time helpers: parsing the GPS split value and extracting its
//! minute component, the turn-detection signal.

use chrono::{NaiveTime, Timelike};

/// Parse a split value in `HH:MM:SS.ffffff` form.
pub fn parse_split_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M:%S%.f").ok()
}

/// Minute component of the split, `None` when the field is unreadable.
pub fn split_minute(t: &str) -> Option<u32> {
    parse_split_time(t).map(|t| t.minute())
}
