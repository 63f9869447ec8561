//! Table extraction: locate the per-stroke section of a raw session file
//! and parse it into rows, keeping only the columns the pipeline consumes
//! or passes through.

use crate::errors::{AppError, AppResult};
use crate::models::stroke::RawStroke;
use csv::{ReaderBuilder, StringRecord, Trim};

/// Everything before this line is head-unit preamble (summary blocks,
/// interval tables) and is discarded. The stroke table starts on the
/// following line.
pub const SECTION_MARKER: &str = "Per-Stroke Data:";

const SPLIT_COLUMN: &str = "Split (GPS)";
const DISTANCE_COLUMN: &str = "Distance (GPS)";
const RATE_COLUMN: &str = "Stroke Rate";

/// Columns stripped during extraction: imperial duplicates of the GPS
/// fields, oar-force channels, heart rate, and raw coordinates.
const DROPPED_COLUMNS: [&str; 16] = [
    "Distance (IMP)",
    "Split (IMP)",
    "Speed (IMP)",
    "Distance/Stroke (IMP)",
    "Heart Rate",
    "Power",
    "Catch",
    "Slip",
    "Finish",
    "Wash",
    "Force Avg",
    "Work",
    "Force Max",
    "Max Force Angle",
    "GPS Lat.",
    "GPS Lon.",
];

/// Parsed per-stroke table of a single session file. Rows still include
/// the device's units row; the caller discards it.
#[derive(Debug, Default)]
pub struct StrokeTable {
    pub extra_columns: Vec<String>,
    pub rows: Vec<RawStroke>,
}

/// Parse the raw text of one session file into a stroke table.
pub fn stroke_table(raw: &str) -> AppResult<StrokeTable> {
    let body = match raw.split_once(SECTION_MARKER) {
        Some((_, rest)) => rest.trim_start(),
        None => {
            return Err(AppError::Format(format!(
                "missing '{SECTION_MARKER}' marker"
            )));
        }
    };

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    let headers = reader.headers()?.clone();
    let split_idx = find_column(&headers, SPLIT_COLUMN)?;
    let distance_idx = find_column(&headers, DISTANCE_COLUMN)?;
    let rate_idx = find_column(&headers, RATE_COLUMN)?;

    // Passthrough columns: everything not consumed and not dropped.
    let passthrough: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(i, name)| {
            *i != split_idx
                && *i != distance_idx
                && *i != rate_idx
                && !DROPPED_COLUMNS.contains(name)
        })
        .map(|(i, name)| (i, name.to_string()))
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |i: usize| record.get(i).unwrap_or("").to_string();

        rows.push(RawStroke {
            split_gps: field(split_idx),
            distance_gps: field(distance_idx),
            stroke_rate: field(rate_idx),
            extra: passthrough
                .iter()
                .map(|(i, name)| (name.clone(), field(*i)))
                .collect(),
        });
    }

    Ok(StrokeTable {
        extra_columns: passthrough.into_iter().map(|(_, name)| name).collect(),
        rows,
    })
}

fn find_column(headers: &StringRecord, name: &str) -> AppResult<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| AppError::Format(format!("missing required column '{name}'")))
}
