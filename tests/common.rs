#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn oar() -> Command {
    cargo_bin_cmd!("oarlog")
}

/// Write a session file with the given base name into the system temp dir
/// and return its path.
pub fn write_session_file(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}.csv"));
    fs::write(&path, content).expect("write session file");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_out.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A split value whose minute component is `minute`.
pub fn split(minute: u32) -> String {
    format!("00:{minute:02}:30.500000")
}

/// Render a SpeedCoach-style export: preamble, section marker, header,
/// units row, then one data row per (split, distance, rate) triple.
pub fn speedcoach_file(rows: &[(String, String, String)]) -> String {
    let mut out = String::new();
    out.push_str("Session Summary:\n");
    out.push_str("Total Distance,2000\n");
    out.push('\n');
    out.push_str("Per-Stroke Data:\n");
    out.push_str(
        "Interval,Distance (GPS),Distance (IMP),Elapsed Time,Split (GPS),\
         Speed (GPS),Stroke Rate,Total Strokes,Heart Rate,Power,GPS Lat.,GPS Lon.\n",
    );
    out.push_str(
        "(Interval),(Meters),(Meters),(HH:MM:SS.tenths),(/500),\
         (M/S),(SPM),(Strokes),(BPM),(Watts),(Degrees),(Degrees)\n",
    );
    for (i, (split, distance, rate)) in rows.iter().enumerate() {
        out.push_str(&format!(
            "1,{distance},{distance},00:00:{:02}.0,{split},4.2,{rate},{},120,150,52.1,4.8\n",
            i % 60,
            i + 1,
        ));
    }
    out
}

/// Triples for `count` strokes on one leg: fixed split minute, distance
/// climbing in 10 m steps from `start_distance`, steady rate.
pub fn leg(minute: u32, count: usize, start_distance: f64) -> Vec<(String, String, String)> {
    (0..count)
        .map(|i| {
            (
                split(minute),
                format!("{}", start_distance + 10.0 * i as f64),
                "20".to_string(),
            )
        })
        .collect()
}

/// A session with one genuine turn: 9 confirmed strokes up, 2 rollover
/// strokes, 3 strokes back down. Yields 12 rows after segmentation.
pub fn two_leg_session() -> String {
    let mut rows = leg(2, 9, 0.0);
    rows.extend(leg(13, 2, 90.0));
    rows.extend(leg(2, 3, 110.0));
    speedcoach_file(&rows)
}

/// A file without the per-stroke marker; extraction must fail on it.
pub fn markerless_file() -> String {
    "Session Summary:\nTotal Distance,2000\nno stroke data here\n".to_string()
}
