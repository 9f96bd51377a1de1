use std::path::Path;

use log::debug;

use super::model::{ScoringRow, ScoringTable};
use crate::error::{IapsError, Result};

// ---------------------------------------------------------------------------
// Scoring-file layout
// ---------------------------------------------------------------------------

/// Non-tabular preamble lines at the top of the scoring file.
pub const SCORING_PREAMBLE_LINES: usize = 7;

/// Tab-separated fields per data line.
pub const SCORING_FIELD_COUNT: usize = 11;

/// Marker the scoring file uses for a missing value.
const MISSING_MARKER: &str = ".";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read and parse a scoring file.
///
/// Layout: [`SCORING_PREAMBLE_LINES`] lines of preamble, then one picture
/// per line with [`SCORING_FIELD_COUNT`] tab-separated fields: description,
/// identifier, valence mean/sd, arousal mean/sd, two dominance mean/sd
/// pairs, and the set number.
pub fn read_scoring(path: &Path) -> Result<ScoringTable> {
    let text = std::fs::read_to_string(path)?;
    let table = parse_scoring(&text)?;
    debug!("parsed {} scoring rows from {}", table.len(), path.display());
    Ok(table)
}

/// Parse the raw text of a scoring file.
pub(crate) fn parse_scoring(text: &str) -> Result<ScoringTable> {
    // The preamble is not tabular, so it is cut off before the csv reader
    // sees the text.
    let data = skip_preamble(text, SCORING_PREAMBLE_LINES);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_bytes());

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result.map_err(|e| IapsError::Parse {
            line: file_line(e.position(), i),
            message: e.to_string(),
        })?;
        rows.push(parse_row(&record, file_line(record.position(), i))?);
    }

    Ok(ScoringTable { rows })
}

/// Translate a csv position within the data section back to a 1-based line
/// number in the whole file.
fn file_line(position: Option<&csv::Position>, record_index: usize) -> usize {
    let data_line = position
        .map(|p| p.line() as usize)
        .unwrap_or(record_index + 1);
    SCORING_PREAMBLE_LINES + data_line
}

fn skip_preamble(text: &str, lines: usize) -> &str {
    let mut rest = text;
    for _ in 0..lines {
        match rest.split_once('\n') {
            Some((_, tail)) => rest = tail,
            None => return "",
        }
    }
    rest
}

// ---------------------------------------------------------------------------
// Per-field conversion
// ---------------------------------------------------------------------------

fn parse_row(record: &csv::StringRecord, line: usize) -> Result<ScoringRow> {
    if record.len() != SCORING_FIELD_COUNT {
        return Err(IapsError::Parse {
            line,
            message: format!(
                "expected {SCORING_FIELD_COUNT} tab-separated fields, found {}",
                record.len()
            ),
        });
    }

    let field = |idx: usize| record.get(idx).unwrap_or("");

    Ok(ScoringRow {
        description: field(0).to_string(),
        identifier: parse_identifier(field(1), line)?,
        valence_mean: parse_stat(field(2), line, "valence mean")?,
        valence_sd: parse_stat(field(3), line, "valence sd")?,
        arousal_mean: parse_stat(field(4), line, "arousal mean")?,
        arousal_sd: parse_stat(field(5), line, "arousal sd")?,
        dominance1_mean: parse_stat(field(6), line, "dominance1 mean")?,
        dominance1_sd: parse_stat(field(7), line, "dominance1 sd")?,
        dominance2_mean: parse_stat(field(8), line, "dominance2 mean")?,
        dominance2_sd: parse_stat(field(9), line, "dominance2 sd")?,
        set_number: parse_set_number(field(10), line)?,
    })
}

fn parse_stat(raw: &str, line: usize, name: &str) -> Result<Option<f64>> {
    if raw == MISSING_MARKER {
        return Ok(None);
    }
    raw.trim().parse::<f64>().map(Some).map_err(|_| IapsError::Parse {
        line,
        message: format!("{name}: '{raw}' is not a number"),
    })
}

/// Normalize the raw identifier field so it matches the image filename
/// stems: whole values render without a decimal point ("9941"), variants
/// with exactly one decimal digit ("6570.1").
fn parse_identifier(raw: &str, line: usize) -> Result<String> {
    let value = raw.trim().parse::<f64>().map_err(|_| IapsError::Parse {
        line,
        message: format!("identifier: '{raw}' is not a number"),
    })?;
    if value.trunc() == value {
        Ok(format!("{}", value as i64))
    } else {
        Ok(format!("{value:.1}"))
    }
}

/// The raw set field ends with a stray terminator (a backslash in the
/// shipped files); drop the last character before the integer conversion.
fn parse_set_number(raw: &str, line: usize) -> Result<Option<u32>> {
    if raw == MISSING_MARKER {
        return Ok(None);
    }
    let mut chars = raw.chars();
    chars.next_back();
    chars.as_str().trim().parse::<u32>().map(Some).map_err(|_| IapsError::Parse {
        line,
        message: format!("set number: '{raw}' is not an integer"),
    })
}
