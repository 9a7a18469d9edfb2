//! Plain text rendering for segmentation results.

use std::fmt::Write;

use crate::error::{Error, Result};
use crate::model::{Section, Subsection};
use crate::segment::Segmentation;

use super::RenderOptions;

/// Render a segmentation as a human-readable listing.
///
/// One banner per section, then either its lines or, for structured
/// sections, each entry title followed by its indented detail lines.
pub fn to_text(segmentation: &Segmentation, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();

    for section in segmentation.sections.iter() {
        if section.is_empty() && !options.include_empty {
            continue;
        }
        write_section(&mut output, segmentation, section, options)
            .map_err(|e| Error::Render(format!("text formatting error: {}", e)))?;
    }

    Ok(output.trim_end().to_string())
}

fn write_section(
    out: &mut String,
    segmentation: &Segmentation,
    section: &Section,
    options: &RenderOptions,
) -> std::fmt::Result {
    writeln!(out, "--- {} ---", section.key.to_uppercase())?;

    if section.is_empty() {
        writeln!(out, "  [Empty Section]")?;
    } else if let Some(subsections) = segmentation.subsections(&section.key) {
        for sub in subsections {
            write_entry(out, sub, options)?;
        }
    } else {
        for line in &section.lines {
            writeln!(out, "  {} {}", options.line_marker, line.text)?;
        }
    }

    writeln!(out)
}

fn write_entry(out: &mut String, sub: &Subsection, options: &RenderOptions) -> std::fmt::Result {
    write!(out, "  {} {}", options.entry_marker, sub.title)?;
    if options.show_scores {
        let signals = sub
            .score_breakdown
            .iter()
            .map(|(signal, points)| format!("{}={}", signal.as_str(), points))
            .collect::<Vec<_>>()
            .join(", ");
        write!(out, "  [score {}: {}]", sub.score, signals)?;
    }
    writeln!(out)?;

    for line in &sub.content {
        writeln!(out, "      {} {}", options.line_marker, line.text)?;
    }
    Ok(())
}
