//! Whole-document segmentation pipeline.
//!
//! Lines are grouped into sections against the document baseline, then each
//! section of a structured kind is split into entries against its own
//! baseline.

use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::model::{
    DetailedOutline, DetailedSection, Entry, Line, ResumeOutline, SectionOutline, Sections,
    SegmentStats, Subsection,
};
use crate::parser::{group_sections, group_subsections, SegmentOptions};

/// Sections of one document plus the entries of its structured sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segmentation {
    /// Section buckets in first-occurrence order
    pub sections: Sections,

    /// Entries keyed by section key, for structured sections only
    pub subsections: IndexMap<String, Vec<Subsection>>,
}

impl Segmentation {
    /// Entries of a structured section.
    pub fn subsections(&self, key: &str) -> Option<&[Subsection]> {
        self.subsections.get(key).map(Vec::as_slice)
    }

    /// Build the compact outline: entries for structured sections, plain
    /// texts for the rest.
    pub fn outline(&self) -> ResumeOutline {
        let sections = self
            .sections
            .iter()
            .map(|section| {
                let content = match self.subsections.get(&section.key) {
                    Some(subs) => SectionOutline::Entries(subs.iter().map(Entry::from).collect()),
                    None => SectionOutline::Lines(
                        section.lines.iter().map(|l| l.text.clone()).collect(),
                    ),
                };
                (section.key.clone(), content)
            })
            .collect();
        ResumeOutline { sections }
    }

    /// Build the detailed view with line records and entry scores.
    pub fn detailed(&self) -> DetailedOutline {
        let sections = self
            .sections
            .iter()
            .map(|section| {
                let content = match self.subsections.get(&section.key) {
                    Some(subs) => DetailedSection::Subsections(subs.clone()),
                    None => DetailedSection::Lines(section.lines.clone()),
                };
                (section.key.clone(), content)
            })
            .collect();
        DetailedOutline { sections }
    }

    /// Summary counts.
    pub fn stats(&self) -> SegmentStats {
        SegmentStats {
            section_count: self.sections.len(),
            header_count: self.sections.headers().len(),
            line_count: self.sections.line_count(),
            subsection_count: self.subsections.values().map(Vec::len).sum(),
            misc_count: self.sections.keys().filter(|k| k.starts_with("misc_")).count(),
        }
    }
}

/// Segment one document's line stream.
pub fn segment(lines: Vec<Line>, options: &SegmentOptions) -> Segmentation {
    let sections = group_sections(lines, &options.section);

    let subsections = sections
        .iter()
        .filter(|section| options.is_structured(section.kind))
        .map(|section| {
            (
                section.key.clone(),
                group_subsections(&section.lines, &options.subsection),
            )
        })
        .collect();

    Segmentation {
        sections,
        subsections,
    }
}

/// Segment many independent documents, preserving input order.
///
/// Documents are processed in parallel unless `options.parallel` is off.
pub fn segment_batch(documents: Vec<Vec<Line>>, options: &SegmentOptions) -> Vec<Segmentation> {
    log::debug!(
        "Segmenting {} documents ({})",
        documents.len(),
        if options.parallel { "parallel" } else { "sequential" }
    );

    if options.parallel {
        documents
            .into_par_iter()
            .map(|lines| segment(lines, options))
            .collect()
    } else {
        documents
            .into_iter()
            .map(|lines| segment(lines, options))
            .collect()
    }
}
