//! Entry-level subsections and classifier verdicts.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Line;

/// Names of the scoring signals used by both header classifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// Larger font than the baseline
    FontSize,
    /// Bold, or a font different from the document body (sections)
    Emphasis,
    /// Fully upper-case text
    Uppercase,
    /// Few tokens (sections)
    Brevity,
    /// Text matched the section keyword table (sections)
    Keyword,
    /// Bold glyph ratio (subsections)
    Boldness,
    /// Font different from the section body (subsections)
    FontChange,
    /// Large vertical gap above the line (subsections)
    VerticalSpacing,
    /// First line of the section (subsections)
    FirstInSection,
    /// A date line appears earlier in the section (subsections)
    DateProximity,
}

impl Signal {
    /// Snake-case name, as used in serialized breakdowns.
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::FontSize => "font_size",
            Signal::Emphasis => "emphasis",
            Signal::Uppercase => "uppercase",
            Signal::Brevity => "brevity",
            Signal::Keyword => "keyword",
            Signal::Boldness => "boldness",
            Signal::FontChange => "font_change",
            Signal::VerticalSpacing => "vertical_spacing",
            Signal::FirstInSection => "first_in_section",
            Signal::DateProximity => "date_proximity",
        }
    }
}

/// Points contributed by each signal that fired, in evaluation order.
pub type Breakdown = IndexMap<Signal, u32>;

/// Result of scoring one line against a header classifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderVerdict {
    /// Whether the score reached the threshold
    pub is_header: bool,
    /// Total points
    pub score: u32,
    /// Per-signal points
    pub breakdown: Breakdown,
}

impl HeaderVerdict {
    /// A verdict rejected before scoring (score 0, empty breakdown).
    pub fn rejected() -> Self {
        Self::default()
    }

    /// Add a fired signal's points.
    pub(crate) fn add(&mut self, signal: Signal, points: u32) {
        self.score += points;
        self.breakdown.insert(signal, points);
    }

    /// Apply the decision threshold.
    pub(crate) fn decide(mut self, threshold: u32) -> Self {
        self.is_header = self.score >= threshold;
        self
    }

    /// Points contributed by `signal`, 0 if it did not fire.
    pub fn points(&self, signal: Signal) -> u32 {
        self.breakdown.get(&signal).copied().unwrap_or(0)
    }
}

/// A titled entry inside a section (a job, a project, a position).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subsection {
    /// Header text, or "Intro" / "Summary" for synthetic entries
    pub title: String,

    /// Index of the header line within the section's lines
    pub line_index: usize,

    /// Header score
    pub score: u32,

    /// Per-signal points behind `score`
    pub score_breakdown: Breakdown,

    /// Lines following the title
    pub content: Vec<Line>,
}

impl Subsection {
    /// Title of the entry holding lines before the first detected header.
    pub const INTRO_TITLE: &'static str = "Intro";

    /// Title of the entry holding a whole section with no detected headers.
    pub const SUMMARY_TITLE: &'static str = "Summary";

    /// Open a subsection from a detected header line.
    pub fn from_header(line: &Line, line_index: usize, verdict: HeaderVerdict) -> Self {
        Self {
            title: line.text.clone(),
            line_index,
            score: verdict.score,
            score_breakdown: verdict.breakdown,
            content: Vec::new(),
        }
    }

    /// Create a synthetic, unscored subsection.
    pub fn synthetic(title: impl Into<String>, content: Vec<Line>) -> Self {
        Self {
            title: title.into(),
            line_index: 0,
            score: 0,
            score_breakdown: Breakdown::new(),
            content,
        }
    }

    /// Texts of the content lines.
    pub fn details(&self) -> Vec<String> {
        self.content.iter().map(|l| l.text.clone()).collect()
    }
}
