//! Segmentation options and scoring tables.

use crate::model::SectionKind;

/// Options for segmenting a line stream.
#[derive(Debug, Clone)]
pub struct SegmentOptions {
    /// Top-level header scoring table
    pub section: SectionWeights,

    /// Entry header scoring table
    pub subsection: SubsectionWeights,

    /// Section kinds whose lines are split into subsections
    pub structured_kinds: Vec<SectionKind>,

    /// Whether to use parallel processing for batches
    pub parallel: bool,
}

impl SegmentOptions {
    /// Create new segment options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the top-level header scoring table.
    pub fn with_section_weights(mut self, weights: SectionWeights) -> Self {
        self.section = weights;
        self
    }

    /// Set the entry header scoring table.
    pub fn with_subsection_weights(mut self, weights: SubsectionWeights) -> Self {
        self.subsection = weights;
        self
    }

    /// Set which section kinds are split into subsections.
    pub fn with_structured_kinds(mut self, kinds: impl IntoIterator<Item = SectionKind>) -> Self {
        self.structured_kinds = kinds.into_iter().collect();
        self
    }

    /// Split every canonical section kind into subsections.
    pub fn structure_all(mut self) -> Self {
        self.structured_kinds = SectionKind::ALL.to_vec();
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check if sections of `kind` get subsection grouping.
    pub fn is_structured(&self, kind: Option<SectionKind>) -> bool {
        kind.is_some_and(|k| self.structured_kinds.contains(&k))
    }
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            section: SectionWeights::default(),
            subsection: SubsectionWeights::default(),
            structured_kinds: vec![
                SectionKind::Experience,
                SectionKind::Projects,
                SectionKind::Positions,
            ],
            parallel: true,
        }
    }
}

/// Point table for top-level section headers.
///
/// All five signals are evaluated independently; a line is a header when the
/// sum reaches `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionWeights {
    /// Font size must reach `body_size * size_ratio`
    pub size_ratio: f64,
    /// Points for the size signal
    pub size: u32,
    /// Bold ratio must exceed this for the emphasis signal
    pub bold_ratio: f64,
    /// Points for emphasis (bold, or else a non-body font)
    pub emphasis: u32,
    /// Points for fully upper-case text
    pub uppercase: u32,
    /// Maximum token count for the brevity signal
    pub max_brief_tokens: usize,
    /// Points for brevity
    pub brevity: u32,
    /// Points for a keyword table match
    pub keyword: u32,
    /// Minimum total score for a header
    pub threshold: u32,
}

impl Default for SectionWeights {
    fn default() -> Self {
        Self {
            size_ratio: 1.2,
            size: 2,
            bold_ratio: 0.6,
            emphasis: 1,
            uppercase: 1,
            max_brief_tokens: 4,
            brevity: 1,
            keyword: 2,
            threshold: 5,
        }
    }
}

/// Point table for entry headers inside a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubsectionWeights {
    /// Points for a font larger than the section body
    pub font_size: u32,
    /// Bold ratio above this earns `strong_bold`
    pub strong_bold_ratio: f64,
    /// Points for strongly bold text
    pub strong_bold: u32,
    /// Bold ratio above this (but not strong) earns `bold`
    pub bold_ratio: f64,
    /// Points for partially bold text
    pub bold: u32,
    /// Points for a font other than the section body font
    pub font_change: u32,
    /// Gap above the line must exceed `font_size * gap_ratio`
    pub gap_ratio: f64,
    /// Points for the vertical gap
    pub vertical_spacing: u32,
    /// Upper-case text must have fewer tokens than this
    pub max_upper_tokens: usize,
    /// Points for short upper-case text
    pub uppercase: u32,
    /// Points for being the first line of the section
    pub first_in_section: u32,
    /// Points for following a date line
    pub date_proximity: u32,
    /// Minimum total score for an entry header
    pub threshold: u32,
}

impl Default for SubsectionWeights {
    fn default() -> Self {
        Self {
            font_size: 2,
            strong_bold_ratio: 0.8,
            strong_bold: 2,
            bold_ratio: 0.5,
            bold: 1,
            font_change: 1,
            gap_ratio: 1.5,
            vertical_spacing: 1,
            max_upper_tokens: 10,
            uppercase: 1,
            first_in_section: 1,
            date_proximity: 1,
            threshold: 3,
        }
    }
}
