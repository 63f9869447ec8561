//! Fixed-width table rendering for CLI outputs.

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render with every column sized to its widest cell.
    pub fn render(&self) -> String {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row.get(i).map_or(0, String::len))
                    .max()
                    .unwrap_or(0)
                    .max(header.len())
            })
            .collect();

        let mut out = String::new();

        for (header, width) in self.headers.iter().zip(&widths) {
            out.push_str(&format!("{:<width$} ", header, width = width));
        }
        out.push('\n');

        for width in &widths {
            out.push_str(&format!("{:-<width$} ", "", width = width));
        }
        out.push('\n');

        for row in &self.rows {
            for (i, width) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&format!("{:<width$} ", cell, width = width));
            }
            out.push('\n');
        }

        out
    }
}
