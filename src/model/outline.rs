//! Assembled resume views handed to downstream consumers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Line, Subsection};

/// Compact resume structure: section key → entries or plain lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeOutline {
    /// Sections in first-occurrence order
    pub sections: IndexMap<String, SectionOutline>,
}

impl ResumeOutline {
    /// Create an empty outline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a section by key.
    pub fn get(&self, key: &str) -> Option<&SectionOutline> {
        self.sections.get(key)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the outline has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Content of one section in the compact outline.
///
/// An empty section serializes as `[]` and reads back as `Lines`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionOutline {
    /// Plain line texts, for sections kept flat
    Lines(Vec<String>),
    /// Titled entries, for sections split into subsections
    Entries(Vec<Entry>),
}

impl SectionOutline {
    /// Entries, if this section was split into subsections.
    pub fn entries(&self) -> Option<&[Entry]> {
        match self {
            SectionOutline::Entries(entries) => Some(entries),
            SectionOutline::Lines(_) => None,
        }
    }

    /// Line texts, if this section was kept flat.
    pub fn lines(&self) -> Option<&[String]> {
        match self {
            SectionOutline::Lines(lines) => Some(lines),
            SectionOutline::Entries(_) => None,
        }
    }
}

/// A titled entry with its detail lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Entry title
    pub title: String,
    /// Detail line texts
    pub details: Vec<String>,
}

impl From<&Subsection> for Entry {
    fn from(sub: &Subsection) -> Self {
        Self {
            title: sub.title.clone(),
            details: sub.details(),
        }
    }
}

/// Full resume structure with line metadata and entry scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetailedOutline {
    /// Sections in first-occurrence order
    pub sections: IndexMap<String, DetailedSection>,
}

/// Content of one section in the detailed view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetailedSection {
    /// Raw line records
    Lines(Vec<Line>),
    /// Scored subsections
    Subsections(Vec<Subsection>),
}

/// Counts describing one segmentation result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentStats {
    /// Number of section buckets, `header_info` included
    pub section_count: usize,
    /// Number of lines consumed as section headers
    pub header_count: usize,
    /// Number of content lines
    pub line_count: usize,
    /// Number of subsections across structured sections
    pub subsection_count: usize,
    /// Number of `misc_<n>` sections
    pub misc_count: usize,
}
