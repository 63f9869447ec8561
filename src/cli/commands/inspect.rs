use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::join;
use crate::errors::AppResult;
use crate::models::dataset::Dataset;
use crate::models::direction::Direction;
use crate::models::stroke::Stroke;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Inspect { files } = cmd {
        let dataset = join::merge_sessions(files, cfg)?;
        print_summary(&dataset);
    }
    Ok(())
}

fn print_summary(dataset: &Dataset) {
    if dataset.is_empty() {
        println!("No strokes survived cleaning.");
        return;
    }

    let mut table = Table::new(vec![
        "SESSION",
        "STROKES",
        "UP",
        "DOWN",
        "DISTANCE (M)",
        "AVG RATE",
    ]);

    for id in dataset.session_ids() {
        let strokes: Vec<&Stroke> = dataset
            .rows
            .iter()
            .filter(|s| s.session_id == id)
            .collect();

        let up = strokes
            .iter()
            .filter(|s| s.direction == Direction::Up)
            .count();
        let down = strokes.len() - up;

        table.add_row(vec![
            id,
            strokes.len().to_string(),
            up.to_string(),
            down.to_string(),
            distance_covered(&strokes),
            average_rate(&strokes),
        ]);
    }

    println!("{}", table.render());
}

/// Span between the smallest and largest readable distance, "-" when the
/// whole session was a dropout.
fn distance_covered(strokes: &[&Stroke]) -> String {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for stroke in strokes {
        if let Some(d) = stroke.distance_gps {
            min = min.min(d);
            max = max.max(d);
        }
    }

    if max >= min {
        format!("{:.0}", max - min)
    } else {
        "-".to_string()
    }
}

fn average_rate(strokes: &[&Stroke]) -> String {
    let rates: Vec<f64> = strokes.iter().filter_map(|s| s.stroke_rate).collect();
    if rates.is_empty() {
        "-".to_string()
    } else {
        format!("{:.1}", rates.iter().sum::<f64>() / rates.len() as f64)
    }
}
