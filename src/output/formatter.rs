use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::radar::{PolarVertex, TableRow};
use crate::scoring::{engine::letter_for, Axis, ClassificationReport, Leaning, Profile};

const MAX_BAR_WIDTH: usize = 30;
const NAME_WIDTH: usize = 16;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Bar width fitting the terminal, defaulting to the maximum for pipes
fn bar_width() -> usize {
    match terminal_size() {
        // name + space + score(3) + spaces + letter
        Some((Width(w), _)) => (w as usize).saturating_sub(NAME_WIDTH + 10).clamp(10, MAX_BAR_WIDTH),
        None => MAX_BAR_WIDTH,
    }
}

/// Render a 0-100 score as a filled/empty block bar
pub fn score_bar(score: i64, width: usize) -> (String, String) {
    let ratio = (score.clamp(0, 100) as f64) / 100.0;
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    ("█".repeat(filled), "░".repeat(empty))
}

/// Format the profile table: one row per axis with score, bar and type letter
pub fn format_table(rows: &[TableRow], use_colors: bool) -> String {
    let width = bar_width();

    rows.iter()
        .map(|row| {
            let (filled, empty) = score_bar(row.score, width);
            let letter = Axis::from_name(&row.axis)
                .filter(|_| (0..=100).contains(&row.score))
                .map(|axis| letter_for(axis, row.score as u8).to_string())
                .unwrap_or_default();
            let name = format!("{:<width$}", row.axis, width = NAME_WIDTH);
            let score = format!("{:>3}", row.score);

            if use_colors {
                format!(
                    "{} {} {}{} {}",
                    name.bold(),
                    score,
                    filled.cyan(),
                    empty.dimmed(),
                    letter.yellow().bold()
                )
            } else {
                format!("{} {} {}{} {}", name, score, filled, empty, letter)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a classification as the type code followed by normalized values
pub fn format_classification(report: &ClassificationReport, use_colors: bool) -> String {
    let code = report.code.to_string();
    let mut lines = vec![if use_colors {
        format!("Type code: {}", code.bold().yellow())
    } else {
        format!("Type code: {}", code)
    }];

    for (axis, value) in report.normalized.iter() {
        lines.push(format!(
            "  {:<width$} {:.2}  {}",
            axis.name(),
            value,
            report.code.letter(axis),
            width = NAME_WIDTH
        ));
    }
    lines.join("\n")
}

/// Format the profile analysis: per-axis leaning and stage, then summary lines
pub fn format_profile(profile: &Profile, use_colors: bool) -> String {
    let mut lines = Vec::new();

    for reading in &profile.readings {
        let leaning = match reading.leaning {
            Leaning::Balanced => "balanced".to_string(),
            _ => reading.leaning_pole().unwrap_or_default().to_string(),
        };
        let stage = reading.stage.name();
        let name = format!("{:<width$}", reading.axis.name(), width = NAME_WIDTH);

        if use_colors {
            lines.push(format!(
                "{} {:>3}  {:<12} margin {:.2}  {}",
                name.bold(),
                reading.score,
                leaning.cyan(),
                reading.margin,
                stage.green()
            ));
        } else {
            lines.push(format!(
                "{} {:>3}  {:<12} margin {:.2}  {}",
                name, reading.score, leaning, reading.margin, stage
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!("Integration Index: {:.2}", profile.integration_index));
    let overall = format!(
        "Overall stage: {} ({:.1} avg) - {}",
        profile.overall_stage,
        profile.average_stage,
        profile.overall_stage.description()
    );
    lines.push(if use_colors {
        overall.bold().to_string()
    } else {
        overall
    });
    lines.join("\n")
}

/// Format polygon vertices as tab-separated values for scripting
/// Columns: index, angle (radians), radius; or index, x, y when `cartesian`
pub fn format_polygon(vertices: &[PolarVertex], labels: &[&str], cartesian: bool) -> String {
    vertices
        .iter()
        .enumerate()
        .map(|(i, vertex)| {
            // The closing vertex repeats the first label
            let label = labels.get(i % labels.len().max(1)).copied().unwrap_or("");
            if cartesian {
                let (x, y) = vertex.to_cartesian();
                format!("{}\t{:.4}\t{:.4}\t{}", i, x, y, label)
            } else {
                format!("{}\t{:.6}\t{}\t{}", i, vertex.angle, vertex.radius, label)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
