//! Numeric sanitization: convert the two telemetry fields to numbers and
//! null out sensor artifacts. Rows are never removed here, only their
//! numeric fields are blanked, so row order and passthrough data survive.

use crate::config::Config;
use crate::models::direction::Direction;
use crate::models::stroke::{RawStroke, Stroke};
use crate::utils::num::parse_optional_number;

/// Convert labeled raw strokes into typed strokes. Malformed telemetry is
/// common and becomes missing, not an error. The session tag is filled in
/// by the joiner.
pub fn to_numeric(labeled: Vec<(RawStroke, Direction)>) -> Vec<Stroke> {
    labeled
        .into_iter()
        .map(|(raw, direction)| Stroke {
            session_id: String::new(),
            direction,
            split_gps: raw.split_gps,
            distance_gps: parse_optional_number(&raw.distance_gps),
            stroke_rate: parse_optional_number(&raw.stroke_rate),
            extra: raw.extra,
        })
        .collect()
}

/// Null out dropout artifacts in place:
/// - a forward distance jump above `max_distance_jump` between consecutive
///   strokes marks a GPS dropout;
/// - a stroke rate outside the plausible band marks a sensor misread.
///
/// Both masks are computed from the incoming values before either is
/// applied, so suppressing one row cannot shift the first difference seen
/// by its neighbour. Masked rows lose both numeric fields.
pub fn suppress_outliers(strokes: &mut [Stroke], cfg: &Config) {
    let mut masked = vec![false; strokes.len()];

    for i in 1..strokes.len() {
        if let (Some(prev), Some(cur)) = (strokes[i - 1].distance_gps, strokes[i].distance_gps)
            && cur - prev > cfg.max_distance_jump
        {
            masked[i] = true;
        }
    }

    for (i, stroke) in strokes.iter().enumerate() {
        if let Some(rate) = stroke.stroke_rate
            && (rate < cfg.min_stroke_rate || rate > cfg.max_stroke_rate)
        {
            masked[i] = true;
        }
    }

    for (stroke, masked) in strokes.iter_mut().zip(masked) {
        if masked {
            stroke.distance_gps = None;
            stroke.stroke_rate = None;
        }
    }
}

/// Full sanitization pass for one session.
pub fn sanitize_session(labeled: Vec<(RawStroke, Direction)>, cfg: &Config) -> Vec<Stroke> {
    let mut strokes = to_numeric(labeled);
    suppress_outliers(&mut strokes, cfg);
    strokes
}
