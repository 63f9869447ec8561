//! CSV and JSON writers for the merged dataset.
//!
//! Missing numeric values stay visibly missing: empty cells in CSV, null
//! in JSON, so renderers can gap them instead of plotting zeros.

use crate::errors::{AppError, AppResult};
use crate::models::dataset::Dataset;
use crate::models::stroke::Stroke;
use csv::Writer;
use serde_json::{Map, Number, Value};
use std::fs;
use std::path::Path;

const CORE_COLUMNS: [&str; 5] = [
    "session_id",
    "direction",
    "split_gps",
    "distance_gps",
    "stroke_rate",
];

pub(crate) fn export_csv(dataset: &Dataset, path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;
    let extra_columns = dataset.extra_columns();

    let mut header: Vec<String> = CORE_COLUMNS.iter().map(|c| c.to_string()).collect();
    header.extend(extra_columns.iter().cloned());
    wtr.write_record(&header)?;

    for stroke in &dataset.rows {
        let mut record = vec![
            stroke.session_id.clone(),
            stroke.direction.as_str().to_string(),
            stroke.split_gps.clone(),
            stroke.distance_gps.map(|v| v.to_string()).unwrap_or_default(),
            stroke.stroke_rate.map(|v| v.to_string()).unwrap_or_default(),
        ];
        for column in &extra_columns {
            record.push(extra_value(stroke, column));
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

pub(crate) fn export_json(dataset: &Dataset, path: &Path) -> AppResult<()> {
    let rows: Vec<Value> = dataset.rows.iter().map(row_to_value).collect();
    let json = serde_json::to_string_pretty(&rows)
        .map_err(|e| AppError::Export(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

fn row_to_value(stroke: &Stroke) -> Value {
    let mut obj = Map::new();
    obj.insert(
        "session_id".to_string(),
        Value::String(stroke.session_id.clone()),
    );
    obj.insert(
        "direction".to_string(),
        Value::String(stroke.direction.as_str().to_string()),
    );
    obj.insert(
        "split_gps".to_string(),
        Value::String(stroke.split_gps.clone()),
    );
    obj.insert("distance_gps".to_string(), number_or_null(stroke.distance_gps));
    obj.insert("stroke_rate".to_string(), number_or_null(stroke.stroke_rate));

    for (name, value) in &stroke.extra {
        obj.insert(name.clone(), Value::String(value.clone()));
    }

    Value::Object(obj)
}

fn number_or_null(v: Option<f64>) -> Value {
    v.and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

fn extra_value(stroke: &Stroke, column: &str) -> String {
    stroke
        .extra
        .iter()
        .find(|(name, _)| name == column)
        .map(|(_, value)| value.clone())
        .unwrap_or_default()
}
