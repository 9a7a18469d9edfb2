//! Entry header detection and grouping within one section.
//!
//! Entry headers (job titles, project names) are judged against the
//! section's own baseline. Bullets and date lines are rejected outright
//! before any scoring.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{HeaderVerdict, Line, Signal, Subsection};

use super::baseline::StyleBaseline;
use super::options::SubsectionWeights;

/// Leading characters that mark a line as a list item.
pub const BULLET_GLYPHS: &[char] = &['•', '·', '-', '*', 'o', '➢', '▪', '‣'];

static DATE_COMPONENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:19|20)\d{2}\b|\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\b|present")
        .unwrap()
});

/// Check if the trimmed text starts with a bullet glyph.
pub fn is_bullet_point(text: &str) -> bool {
    text.trim()
        .chars()
        .next()
        .is_some_and(|c| BULLET_GLYPHS.contains(&c))
}

/// Count year, month and "present" matches in the lower-cased text.
pub fn date_component_count(text: &str) -> usize {
    DATE_COMPONENT.find_iter(&text.to_lowercase()).count()
}

/// Check if a line is mostly a date, e.g. "June 2020 - Present" or "2019-2023".
///
/// Two date components anywhere, or one in a line of fewer than four tokens.
pub fn is_date_line(text: &str) -> bool {
    let matches = date_component_count(text);
    matches >= 2 || (matches >= 1 && text.split_whitespace().count() < 4)
}

/// Score `lines[index]` as a potential entry header.
///
/// The previous line (for the gap signal) and the earlier lines (for the
/// date signal) come from the same slice. Rejected lines score 0 with an
/// empty breakdown.
pub fn score_subsection_header(
    lines: &[Line],
    index: usize,
    baseline: &StyleBaseline,
    weights: &SubsectionWeights,
) -> HeaderVerdict {
    let Some(line) = lines.get(index) else {
        return HeaderVerdict::rejected();
    };
    let text = line.text.as_str();

    if is_bullet_point(text) || is_date_line(text) {
        return HeaderVerdict::rejected();
    }

    let mut verdict = HeaderVerdict::default();

    if line.font_size > baseline.body_size {
        verdict.add(Signal::FontSize, weights.font_size);
    }

    if line.bold_ratio > weights.strong_bold_ratio {
        verdict.add(Signal::Boldness, weights.strong_bold);
    } else if line.bold_ratio > weights.bold_ratio {
        verdict.add(Signal::Boldness, weights.bold);
    }

    if baseline.is_off_body_font(&line.font_name) {
        verdict.add(Signal::FontChange, weights.font_change);
    }

    if let Some(prev) = index.checked_sub(1).and_then(|i| lines.get(i)) {
        if (prev.y - line.y).abs() > line.font_size * weights.gap_ratio {
            verdict.add(Signal::VerticalSpacing, weights.vertical_spacing);
        }
    }

    if line.is_uppercase() && line.token_count() < weights.max_upper_tokens {
        verdict.add(Signal::Uppercase, weights.uppercase);
    }

    if index == 0 {
        verdict.add(Signal::FirstInSection, weights.first_in_section);
    }

    if follows_date_line(lines, index) {
        verdict.add(Signal::DateProximity, weights.date_proximity);
    }

    verdict.decide(weights.threshold)
}

/// Look back from `index` to the nearest section header for a date line.
fn follows_date_line(lines: &[Line], index: usize) -> bool {
    lines[..index]
        .iter()
        .rev()
        .take_while(|l| !l.is_header)
        .any(|l| is_date_line(&l.text))
}

/// Split one section's lines into titled entries.
///
/// Lines before the first entry header become an "Intro" entry when at
/// least one real entry exists. A section with content but no entry header
/// becomes a single "Summary" entry. An empty section yields no entries.
pub fn group_subsections(lines: &[Line], weights: &SubsectionWeights) -> Vec<Subsection> {
    if lines.is_empty() {
        return Vec::new();
    }

    let baseline = StyleBaseline::from_lines(lines);
    let mut subsections = Vec::new();
    let mut current: Option<Subsection> = None;
    let mut intro_lines = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let verdict = score_subsection_header(lines, i, &baseline, weights);
        log::trace!(
            "Line {} {:?}: score {} {:?}",
            i,
            line.text,
            verdict.score,
            verdict.breakdown
        );

        if verdict.is_header {
            if let Some(done) = current.take() {
                subsections.push(done);
            }
            current = Some(Subsection::from_header(line, i, verdict));
        } else if let Some(open) = current.as_mut() {
            open.content.push(line.clone());
        } else {
            intro_lines.push(line.clone());
        }
    }

    if let Some(done) = current {
        subsections.push(done);
    }

    if !intro_lines.is_empty() {
        if subsections.is_empty() {
            subsections.push(Subsection::synthetic(Subsection::SUMMARY_TITLE, intro_lines));
        } else {
            subsections.insert(0, Subsection::synthetic(Subsection::INTRO_TITLE, intro_lines));
        }
    }

    log::debug!(
        "Split {} lines into {} subsections",
        lines.len(),
        subsections.len()
    );

    subsections
}
