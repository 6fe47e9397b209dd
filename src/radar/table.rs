use serde::Serialize;
use thiserror::Error;

use crate::scoring::{AxisScores, ScoreError};

pub const CSV_HEADER: &str = "Axis,Score";

/// One `(axis, raw score)` row of the profile table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub axis: String,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsvError {
    #[error("CSV is empty")]
    Empty,

    #[error("expected header '{}', found '{found}'", CSV_HEADER)]
    BadHeader { found: String },

    #[error("line {line}: expected 2 fields, found {fields}")]
    MalformedRow { line: usize, fields: usize },

    #[error("line {line}: unterminated quoted field")]
    UnterminatedQuote { line: usize },

    #[error("line {line}: score '{value}' is not an integer")]
    InvalidScore { line: usize, value: String },

    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// One row per axis, in declared axis order.
pub fn to_table(scores: &AxisScores) -> Vec<TableRow> {
    scores
        .iter()
        .map(|(axis, score)| TableRow {
            axis: axis.name().to_string(),
            score: i64::from(score),
        })
        .collect()
}

/// Serialize rows as CSV: `Axis,Score` header, `\n` line endings, no index column.
pub fn to_csv(rows: &[TableRow]) -> String {
    let mut out = String::with_capacity(16 * (rows.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&escape_field(&row.axis));
        out.push(',');
        out.push_str(&row.score.to_string());
        out.push('\n');
    }
    out
}

/// Quote a field if it contains a comma, quote, or line break.
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Parse CSV produced by [`to_csv`] (or any equivalent `Axis,Score` file).
///
/// Accepts `\n` and `\r\n` line endings and skips blank lines. Axis names
/// are kept as written; resolving them is [`scores_from_csv`]'s job.
pub fn parse_csv(text: &str) -> Result<Vec<TableRow>, CsvError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_line, header) = lines.next().ok_or(CsvError::Empty)?;
    let header_fields = split_record(header, header_line)?;
    let header_ok = header_fields.len() == 2
        && header_fields[0].trim() == "Axis"
        && header_fields[1].trim() == "Score";
    if !header_ok {
        return Err(CsvError::BadHeader {
            found: header.to_string(),
        });
    }

    let mut rows = Vec::new();
    for (line_no, line) in lines {
        let fields = split_record(line, line_no)?;
        if fields.len() != 2 {
            return Err(CsvError::MalformedRow {
                line: line_no,
                fields: fields.len(),
            });
        }
        let raw_score = fields[1].trim();
        let score = raw_score.parse::<i64>().map_err(|_| CsvError::InvalidScore {
            line: line_no,
            value: raw_score.to_string(),
        })?;
        rows.push(TableRow {
            axis: fields[0].clone(),
            score,
        });
    }
    Ok(rows)
}

/// Parse a CSV profile straight into validated scores.
pub fn scores_from_csv(text: &str) -> Result<AxisScores, CsvError> {
    let rows = parse_csv(text)?;
    let scores = AxisScores::from_pairs(rows.iter().map(|row| (row.axis.as_str(), row.score)))?;
    Ok(scores)
}

// Split one physical line into fields, honouring double-quoted fields
// with "" as an escaped quote. Quoted line breaks are not supported.
fn split_record(line: &str, line_no: usize) -> Result<Vec<String>, CsvError> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            ('"', false) if current.is_empty() => in_quotes = true,
            (',', false) => fields.push(std::mem::take(&mut current)),
            (other, _) => current.push(other),
        }
    }

    if in_quotes {
        return Err(CsvError::UnterminatedQuote { line: line_no });
    }
    fields.push(current);
    Ok(fields)
}
