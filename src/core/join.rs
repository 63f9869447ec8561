//! Session joining: drive the per-file pipeline and concatenate the
//! surviving sessions into one dataset.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::core::{extract, sanitize, segment};
use crate::errors::{AppError, AppResult};
use crate::models::dataset::Dataset;
use crate::models::session::Session;
use crate::ui::messages::warning;

/// Run the full pipeline on one session file:
/// extract -> drop units row -> segment -> sanitize -> tag.
pub fn process_file(path: &Path, cfg: &Config) -> AppResult<Session> {
    let raw = fs::read_to_string(path)?;
    let table = extract::stroke_table(&raw)?;

    // The first data row carries unit labels, not telemetry.
    let mut rows = table.rows;
    if !rows.is_empty() {
        rows.remove(0);
    }

    let labeled = segment::segment_session(rows, cfg);
    let mut strokes = sanitize::sanitize_session(labeled, cfg);

    let id = session_id(path);
    for stroke in &mut strokes {
        stroke.session_id = id.clone();
    }

    Ok(Session { id, strokes })
}

/// Session identifier: the file's base name without extension.
pub fn session_id(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| path.display().to_string())
}

/// Process every file in argument order and concatenate the results.
///
/// A file that fails to parse is reported and skipped so one bad export
/// cannot sink the batch; the batch only fails when no file at all yields
/// a session.
pub fn merge_sessions(paths: &[PathBuf], cfg: &Config) -> AppResult<Dataset> {
    let mut dataset = Dataset::default();
    let mut parsed = 0usize;

    for path in paths {
        match process_file(path, cfg) {
            Ok(session) => {
                parsed += 1;
                dataset.append_session(session);
            }
            Err(e) => warning(format!("Skipping '{}': {}", path.display(), e)),
        }
    }

    if parsed == 0 {
        return Err(AppError::NoValidSessions);
    }

    Ok(dataset)
}
