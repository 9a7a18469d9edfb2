//! Loading line streams produced by an upstream layout extractor.
//!
//! The expected input is a JSON array of line records:
//!
//! ```json
//! [{"text": "EDUCATION", "font_size": 14.0, "bold_ratio": 1.0,
//!   "font_name": "Calibri-Bold", "x": 72.0, "y": 640.5, "links": []}]
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Line;

/// Parse a line stream from a JSON string.
pub fn lines_from_str(json: &str) -> Result<Vec<Line>> {
    let lines: Vec<Line> = serde_json::from_str(json)?;
    prepare(lines)
}

/// Parse a line stream from a reader.
pub fn lines_from_reader<R: Read>(reader: R) -> Result<Vec<Line>> {
    let lines: Vec<Line> = serde_json::from_reader(reader)?;
    prepare(lines)
}

/// Parse a line stream from a JSON file.
pub fn lines_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Line>> {
    let file = File::open(path)?;
    lines_from_reader(BufReader::new(file))
}

/// Collapse whitespace runs in `text` to single spaces and trim it.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Validate geometry, normalize text and drop blank lines.
fn prepare(lines: Vec<Line>) -> Result<Vec<Line>> {
    let total = lines.len();
    let mut prepared = Vec::with_capacity(total);

    for (i, mut line) in lines.into_iter().enumerate() {
        if !line.font_size.is_finite() || line.font_size <= 0.0 {
            return Err(Error::InvalidLine(format!(
                "line {}: font size must be positive, got {}",
                i, line.font_size
            )));
        }
        if !line.x.is_finite() || !line.y.is_finite() || !line.bold_ratio.is_finite() {
            return Err(Error::InvalidLine(format!(
                "line {}: non-finite position or bold ratio",
                i
            )));
        }

        line.text = normalize_whitespace(&line.text);
        if !line.text.is_empty() {
            prepared.push(line);
        }
    }

    if prepared.len() < total {
        log::warn!("Dropped {} blank lines from input", total - prepared.len());
    }

    Ok(prepared)
}
