use super::session::Session;
use super::stroke::Stroke;

/// Merged strokes from every successfully parsed session, concatenated in
/// session-processing order. This is the sole artifact handed to
/// downstream consumers; rows are never re-sorted.
#[derive(Debug, Default, Clone)]
pub struct Dataset {
    pub rows: Vec<Stroke>,
}

impl Dataset {
    pub fn append_session(&mut self, session: Session) {
        self.rows.extend(session.strokes);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct session identifiers in first-seen order.
    pub fn session_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for stroke in &self.rows {
            if !ids.iter().any(|id| id == &stroke.session_id) {
                ids.push(stroke.session_id.clone());
            }
        }
        ids
    }

    /// Union of passthrough column names across all rows, in first-seen
    /// order. Sessions recorded by different firmware may disagree on the
    /// optional columns.
    pub fn extra_columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = Vec::new();
        for stroke in &self.rows {
            for (name, _) in &stroke.extra {
                if !columns.iter().any(|c| c == name) {
                    columns.push(name.clone());
                }
            }
        }
        columns
    }
}
