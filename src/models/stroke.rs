use super::direction::Direction;

/// One row of the per-stroke table exactly as read from the file.
/// All fields are still text at this stage; numeric conversion happens
/// during sanitization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawStroke {
    pub split_gps: String,   // pace over 500 m, "HH:MM:SS.ffffff"
    pub distance_gps: String,
    pub stroke_rate: String,
    /// Passthrough column/value pairs in original column order.
    pub extra: Vec<(String, String)>,
}

/// One fully processed stroke in the merged dataset.
/// `None` is the uniform missing-value sentinel for both telemetry fields,
/// so downstream renderers can gap dropouts instead of drawing them.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub session_id: String,
    pub direction: Direction,
    pub split_gps: String,
    pub distance_gps: Option<f64>,
    pub stroke_rate: Option<f64>,
    pub extra: Vec<(String, String)>,
}
