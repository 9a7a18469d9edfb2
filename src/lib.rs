//! # resume-outline
//!
//! Layout-aware segmentation of resume text into sections and entries.
//!
//! The input is a stream of text lines tagged with font size, boldness,
//! font name, position and hyperlinks, as produced by a PDF layout
//! extractor. Lines are grouped into top-level sections (education,
//! experience, skills, ...) by scoring each one against the document's body
//! text style, and structured sections are then split into entries (jobs,
//! projects, positions) against the section's own style.
//!
//! ## Quick Start
//!
//! ```no_run
//! use resume_outline::{segment_file, render};
//!
//! fn main() -> resume_outline::Result<()> {
//!     let result = segment_file("lines.json")?;
//!
//!     let json = render::to_json(&result.outline(), render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Section detection**: five weighted layout and keyword signals per line
//! - **Entry detection**: bullet and date filters plus seven weighted signals
//! - **Score breakdowns**: every entry keeps the points each signal contributed
//! - **Batch processing**: uses Rayon for many documents at once

pub mod error;
pub mod input;
pub mod model;
pub mod parser;
pub mod render;
pub mod segment;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Breakdown, DetailedOutline, DetailedSection, Entry, HeaderVerdict, Line, ResumeOutline,
    Section, SectionKind, SectionOutline, Sections, SegmentStats, Signal, Subsection,
};
pub use parser::{SectionWeights, SegmentOptions, StyleBaseline, SubsectionWeights};
pub use render::{JsonFormat, RenderOptions};
pub use segment::{segment, segment_batch, Segmentation};

use std::io::Read;
use std::path::Path;

/// Segment a JSON line stream file.
///
/// # Example
///
/// ```no_run
/// use resume_outline::segment_file;
///
/// let result = segment_file("lines.json").unwrap();
/// println!("Sections: {}", result.sections.len());
/// ```
pub fn segment_file<P: AsRef<Path>>(path: P) -> Result<Segmentation> {
    segment_file_with_options(path, &SegmentOptions::default())
}

/// Segment a JSON line stream file with custom options.
pub fn segment_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &SegmentOptions,
) -> Result<Segmentation> {
    let lines = input::lines_from_path(path)?;
    Ok(segment(lines, options))
}

/// Segment a JSON line stream held in a string.
pub fn segment_str(json: &str) -> Result<Segmentation> {
    let lines = input::lines_from_str(json)?;
    Ok(segment(lines, &SegmentOptions::default()))
}

/// Segment a JSON line stream from a reader.
///
/// # Example
///
/// ```no_run
/// use resume_outline::segment_reader;
///
/// let result = segment_reader(std::io::stdin()).unwrap();
/// println!("{:?}", result.stats());
/// ```
pub fn segment_reader<R: Read>(reader: R) -> Result<Segmentation> {
    let lines = input::lines_from_reader(reader)?;
    Ok(segment(lines, &SegmentOptions::default()))
}

/// Convert a JSON line stream file to the compact outline JSON.
///
/// # Example
///
/// ```no_run
/// use resume_outline::{to_outline_json, JsonFormat};
///
/// let json = to_outline_json("lines.json", JsonFormat::Pretty).unwrap();
/// std::fs::write("outline.json", json).unwrap();
/// ```
pub fn to_outline_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let result = segment_file(path)?;
    render::to_json(&result.outline(), format)
}

/// Builder for segmenting and rendering line streams.
///
/// # Example
///
/// ```no_run
/// use resume_outline::{Outliner, SectionKind};
///
/// let text = Outliner::new()
///     .with_structured_kinds([SectionKind::Experience, SectionKind::Projects])
///     .with_scores()
///     .segment_file("lines.json")?
///     .to_text()?;
/// # Ok::<(), resume_outline::Error>(())
/// ```
pub struct Outliner {
    segment_options: SegmentOptions,
    render_options: RenderOptions,
}

impl Outliner {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            segment_options: SegmentOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set which section kinds are split into entries.
    pub fn with_structured_kinds(mut self, kinds: impl IntoIterator<Item = SectionKind>) -> Self {
        self.segment_options = self.segment_options.with_structured_kinds(kinds);
        self
    }

    /// Split every canonical section kind into entries.
    pub fn structure_all(mut self) -> Self {
        self.segment_options = self.segment_options.structure_all();
        self
    }

    /// Set the top-level header scoring table.
    pub fn with_section_weights(mut self, weights: SectionWeights) -> Self {
        self.segment_options = self.segment_options.with_section_weights(weights);
        self
    }

    /// Set the entry header scoring table.
    pub fn with_subsection_weights(mut self, weights: SubsectionWeights) -> Self {
        self.segment_options = self.segment_options.with_subsection_weights(weights);
        self
    }

    /// Disable parallel batch processing.
    pub fn sequential(mut self) -> Self {
        self.segment_options = self.segment_options.sequential();
        self
    }

    /// Show entry scores in text output.
    pub fn with_scores(mut self) -> Self {
        self.render_options = self.render_options.with_scores(true);
        self
    }

    /// Hide empty sections in text output.
    pub fn skip_empty_sections(mut self) -> Self {
        self.render_options = self.render_options.with_empty_sections(false);
        self
    }

    /// Segment an in-memory line stream.
    pub fn segment_lines(&self, lines: Vec<Line>) -> OutlineResult {
        OutlineResult {
            segmentation: segment(lines, &self.segment_options),
            render_options: self.render_options.clone(),
        }
    }

    /// Segment a JSON line stream file.
    pub fn segment_file<P: AsRef<Path>>(self, path: P) -> Result<OutlineResult> {
        let lines = input::lines_from_path(path)?;
        Ok(self.segment_lines(lines))
    }

    /// Segment a JSON line stream held in a string.
    pub fn segment_str(self, json: &str) -> Result<OutlineResult> {
        let lines = input::lines_from_str(json)?;
        Ok(self.segment_lines(lines))
    }

    /// Segment many documents, in parallel unless `sequential` was set.
    pub fn segment_batch(&self, documents: Vec<Vec<Line>>) -> Vec<OutlineResult> {
        segment_batch(documents, &self.segment_options)
            .into_iter()
            .map(|segmentation| OutlineResult {
                segmentation,
                render_options: self.render_options.clone(),
            })
            .collect()
    }
}

impl Default for Outliner {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of segmenting one document.
pub struct OutlineResult {
    /// The segmentation
    pub segmentation: Segmentation,
    /// Render options to use
    render_options: RenderOptions,
}

impl OutlineResult {
    /// Convert to the compact outline JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.segmentation.outline(), format)
    }

    /// Convert to the detailed JSON with line records and scores.
    pub fn to_detailed_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.segmentation.detailed(), format)
    }

    /// Convert to a plain text listing.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.segmentation, &self.render_options)
    }

    /// Get the compact outline.
    pub fn outline(&self) -> ResumeOutline {
        self.segmentation.outline()
    }

    /// Get the segmentation.
    pub fn segmentation(&self) -> &Segmentation {
        &self.segmentation
    }
}
