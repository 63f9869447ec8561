use serde::Serialize;

/// Leg of the out-and-back course a stroke belongs to. `Turning` marks the
/// ambiguous strokes around a course reversal; those rows never survive
/// segmentation and are absent from the merged dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Turning,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Turning => "turning",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "turning" => Some(Direction::Turning),
            _ => None,
        }
    }

    pub fn is_turning(&self) -> bool {
        matches!(self, Direction::Turning)
    }
}
