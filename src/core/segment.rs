//! Direction segmentation: classify every stroke of a session as `Up`,
//! `Down`, or `Turning` from the sawtooth of the GPS split's minute field.
//!
//! The head unit resets the split near each multiple-of-500 m boundary, so
//! the minute component rolls over as the boat approaches a turn. A
//! rollover only counts as a real turnaround when it follows a sustained
//! run of confirmed-leg strokes; short blips near the minute boundary keep
//! the current leg.

use crate::config::Config;
use crate::models::direction::Direction;
use crate::models::stroke::RawStroke;
use crate::utils::time::split_minute;

/// Scanner state threaded across the strokes of a single session.
/// Freshly initialized per session, never shared between files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmenterState {
    pub is_up: bool,
    pub pending_transition: bool,
    pub strokes_since_transition: usize,
}

impl SegmenterState {
    /// The scan starts inside a pending transition, so the session lead-in
    /// is labeled `Turning` until the split minute first drops below the
    /// rollover threshold.
    pub fn new() -> Self {
        Self {
            is_up: true,
            pending_transition: true,
            strokes_since_transition: 0,
        }
    }
}

impl Default for SegmenterState {
    fn default() -> Self {
        Self::new()
    }
}

/// One step of the direction scan: a pure fold
/// `(state, stroke) -> (state, direction)`.
///
/// An unreadable split value labels the stroke `Turning` and leaves the
/// state untouched; boundary data must never abort the scan.
pub fn classify(
    state: SegmenterState,
    stroke: &RawStroke,
    cfg: &Config,
) -> (SegmenterState, Direction) {
    let minute = match split_minute(&stroke.split_gps) {
        Some(m) => m,
        None => return (state, Direction::Turning),
    };

    let mut next = state;
    if minute > cfg.turn_minute && !next.pending_transition {
        next.pending_transition = true;
    } else if minute <= cfg.turn_minute && next.pending_transition {
        // Closing a suspected turn: only a sustained preceding run makes
        // it a genuine direction change, otherwise it was a false alarm.
        if next.strokes_since_transition >= cfg.min_leg_run {
            next.is_up = !next.is_up;
        }
        next.strokes_since_transition = 0;
        next.pending_transition = false;
    }

    if next.pending_transition {
        (next, Direction::Turning)
    } else {
        next.strokes_since_transition += 1;
        let direction = if next.is_up {
            Direction::Up
        } else {
            Direction::Down
        };
        (next, direction)
    }
}

/// Label every stroke of a session in file order, then drop the turning
/// rows. The surviving strokes keep their relative order.
pub fn segment_session(
    strokes: Vec<RawStroke>,
    cfg: &Config,
) -> Vec<(RawStroke, Direction)> {
    let mut state = SegmenterState::new();
    let mut kept = Vec::with_capacity(strokes.len());

    for stroke in strokes {
        let (next, direction) = classify(state, &stroke, cfg);
        state = next;

        if !direction.is_turning() {
            kept.push((stroke, direction));
        }
    }

    kept
}
