//! Top-level section header detection and grouping.

use crate::model::{HeaderVerdict, Line, SectionKind, Sections, Signal};

use super::baseline::StyleBaseline;
use super::keywords::match_section_keyword;
use super::options::SectionWeights;

/// Score a line as a potential top-level section header.
///
/// Every signal is evaluated; there is no early exit. Emphasis fires for a
/// bold line, or else for a line set in a font other than the body font,
/// never for both.
pub fn score_section_header(
    line: &Line,
    baseline: &StyleBaseline,
    weights: &SectionWeights,
) -> HeaderVerdict {
    let mut verdict = HeaderVerdict::default();

    if line.font_size >= baseline.body_size * weights.size_ratio {
        verdict.add(Signal::FontSize, weights.size);
    }

    if line.bold_ratio > weights.bold_ratio || baseline.is_off_body_font(&line.font_name) {
        verdict.add(Signal::Emphasis, weights.emphasis);
    }

    if line.is_uppercase() {
        verdict.add(Signal::Uppercase, weights.uppercase);
    }

    if line.token_count() <= weights.max_brief_tokens {
        verdict.add(Signal::Brevity, weights.brevity);
    }

    if match_section_keyword(&line.text).is_some() {
        verdict.add(Signal::Keyword, weights.keyword);
    }

    verdict.decide(weights.threshold)
}

/// Check if a line is a top-level section header.
pub fn is_section_header(line: &Line, baseline: &StyleBaseline, weights: &SectionWeights) -> bool {
    score_section_header(line, baseline, weights).is_header
}

/// Group a document's lines into section buckets.
///
/// Lines before the first header land in `header_info`. Each header opens
/// (or reopens) the bucket named after it and is itself kept out of the
/// bucket contents. Every line gets `section` set to its bucket key, and
/// headers also get `is_header`.
pub fn group_sections(lines: Vec<Line>, weights: &SectionWeights) -> Sections {
    let mut sections = Sections::new();
    if lines.is_empty() {
        return sections;
    }

    let baseline = StyleBaseline::from_lines(&lines);
    let mut keys = BucketKeys::default();
    let mut current = Sections::HEADER_INFO.to_string();
    sections.open(&current, None);

    for mut line in lines {
        let verdict = score_section_header(&line, &baseline, weights);
        if verdict.is_header {
            let kind = match_section_keyword(&line.text);
            let key = keys.next(kind, &line.text);
            log::debug!(
                "Section header {:?} (score {}) opens '{}'",
                line.text,
                verdict.score,
                key
            );

            line.is_header = true;
            line.section = Some(key.clone());
            sections.open(&key, kind);
            sections.push_header(line);
            current = key;
        } else {
            line.section = Some(current.clone());
            sections.push(&current, line);
        }
    }

    log::debug!(
        "Grouped {} lines into {} sections",
        sections.line_count() + sections.headers().len(),
        sections.len()
    );

    sections
}

/// Bucket key generator, scoped to one grouping pass.
#[derive(Debug, Default)]
struct BucketKeys {
    misc_count: usize,
}

impl BucketKeys {
    fn next(&mut self, kind: Option<SectionKind>, header_text: &str) -> String {
        match kind {
            Some(kind) => format!("{}-{}", kind, header_text),
            None => {
                let key = format!("misc_{}", self.misc_count);
                self.misc_count += 1;
                key
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(text: &str) -> Line {
        Line::new(text, 10.0).with_font("Arial")
    }

    fn baseline() -> StyleBaseline {
        StyleBaseline {
            body_size: 10.0,
            body_font: Some("Arial".to_string()),
        }
    }

    #[test]
    fn test_education_header_detected() {
        let line = Line::new("EDUCATION", 14.0).with_bold(0.9).with_font("Arial");
        let verdict = score_section_header(&line, &baseline(), &SectionWeights::default());

        assert!(verdict.is_header);
        // size 2 + emphasis 1 + uppercase 1 + brevity 1 + keyword 2
        assert_eq!(verdict.score, 7);
        assert_eq!(verdict.points(Signal::FontSize), 2);
        assert_eq!(verdict.points(Signal::Keyword), 2);
    }

    #[test]
    fn test_emphasis_counts_once() {
        // bold and off-body font together still earn a single point
        let line = Line::new("Hobbies", 12.0).with_bold(0.9).with_font("Arial-Bold");
        let verdict = score_section_header(&line, &baseline(), &SectionWeights::default());

        assert_eq!(verdict.points(Signal::Emphasis), 1);
        assert_eq!(verdict.score, 4);
        assert!(!verdict.is_header);
    }

    #[test]
    fn test_off_body_font_alone_is_emphasis() {
        let line = Line::new("hobbies", 10.0).with_font("Georgia");
        let verdict = score_section_header(&line, &baseline(), &SectionWeights::default());
        assert_eq!(verdict.points(Signal::Emphasis), 1);
    }

    #[test]
    fn test_size_threshold_is_inclusive() {
        let weights = SectionWeights::default();
        let at = Line::new("x", 12.0).with_font("Arial");
        let below = Line::new("x", 11.9).with_font("Arial");
        assert_eq!(score_section_header(&at, &baseline(), &weights).points(Signal::FontSize), 2);
        assert_eq!(score_section_header(&below, &baseline(), &weights).points(Signal::FontSize), 0);
    }

    #[test]
    fn test_brevity_boundary() {
        let weights = SectionWeights::default();
        let four = body("Languages and spoken tongues");
        let five = body("Languages and other spoken tongues");
        assert_eq!(score_section_header(&four, &baseline(), &weights).points(Signal::Brevity), 1);
        assert_eq!(score_section_header(&five, &baseline(), &weights).points(Signal::Brevity), 0);
    }

    #[test]
    fn test_bold_ratio_boundary_is_exclusive() {
        let weights = SectionWeights::default();
        let at = body("hobbies").with_bold(0.6);
        let above = body("hobbies").with_bold(0.61);
        assert_eq!(score_section_header(&at, &baseline(), &weights).points(Signal::Emphasis), 0);
        assert_eq!(score_section_header(&above, &baseline(), &weights).points(Signal::Emphasis), 1);
    }

    #[test]
    fn test_different_signal_paths_reach_threshold() {
        let weights = SectionWeights::default();

        // long upper-case line: size + emphasis + uppercase + keyword
        let long_upper = Line::new("TECHNICAL SKILLS AND TOOLS I USE DAILY", 14.0)
            .with_bold(0.9)
            .with_font("Arial");
        let verdict = score_section_header(&long_upper, &baseline(), &weights);
        assert!(verdict.is_header);
        assert_eq!(verdict.points(Signal::Brevity), 0);

        // short lower-case line: size + emphasis + brevity + keyword
        let short_lower = Line::new("projects", 12.0).with_bold(0.7).with_font("Arial");
        let verdict = score_section_header(&short_lower, &baseline(), &weights);
        assert!(verdict.is_header);
        assert_eq!(verdict.points(Signal::Uppercase), 0);
    }

    #[test]
    fn test_raising_size_never_lowers_score() {
        let weights = SectionWeights::default();
        let small = Line::new("Awards", 10.0).with_font("Arial");
        let large = Line::new("Awards", 13.0).with_font("Arial");
        let before = score_section_header(&small, &baseline(), &weights).score;
        let after = score_section_header(&large, &baseline(), &weights).score;
        assert!(after >= before);
        assert_eq!(after, before + 2);
    }

    #[test]
    fn test_group_education_scenario() {
        let lines = vec![
            Line::new("EDUCATION", 14.0).with_bold(0.9),
            Line::new("IIT Delhi, B.Tech 2019-2023", 10.0),
            Line::new("CGPA 9.1", 10.0),
        ];
        let sections = group_sections(lines, &SectionWeights::default());

        let keys: Vec<_> = sections.keys().collect();
        assert_eq!(keys, vec!["header_info", "education-EDUCATION"]);
        assert!(sections.get("header_info").unwrap().is_empty());

        let education = sections.get("education-EDUCATION").unwrap();
        assert_eq!(education.kind, Some(SectionKind::Education));
        assert_eq!(education.texts(), vec!["IIT Delhi, B.Tech 2019-2023", "CGPA 9.1"]);
        assert!(education
            .lines
            .iter()
            .all(|l| !l.is_header && l.section.as_deref() == Some("education-EDUCATION")));

        let header = &sections.headers()[0];
        assert!(header.is_header);
        assert_eq!(header.section.as_deref(), Some("education-EDUCATION"));
    }

    #[test]
    fn test_misc_numbering_in_order() {
        let lines = vec![
            body("Jane Doe"),
            Line::new("HOBBIES", 14.0).with_bold(0.9).with_font("Arial"),
            body("chess"),
            Line::new("LANGUAGES", 14.0).with_bold(0.9).with_font("Arial"),
            body("English"),
            body("Hindi"),
        ];
        let sections = group_sections(lines, &SectionWeights::default());

        let keys: Vec<_> = sections.keys().collect();
        assert_eq!(keys, vec!["header_info", "misc_0", "misc_1"]);
        assert_eq!(sections.get("header_info").unwrap().texts(), vec!["Jane Doe"]);
        assert_eq!(sections.get("misc_1").unwrap().texts(), vec!["English", "Hindi"]);
        assert_eq!(sections.get("misc_0").unwrap().kind, None);
    }

    #[test]
    fn test_repeated_header_reopens_bucket() {
        let header = || Line::new("SKILLS", 14.0).with_bold(0.9).with_font("Arial");
        let lines = vec![
            header(),
            body("Rust"),
            body("Python"),
            body("Java"),
            Line::new("HOBBIES", 14.0).with_bold(0.9).with_font("Arial"),
            body("chess"),
            header(),
            body("Go"),
        ];
        let sections = group_sections(lines, &SectionWeights::default());

        let keys: Vec<_> = sections.keys().collect();
        assert_eq!(keys, vec!["header_info", "skills-SKILLS", "misc_0"]);
        assert_eq!(
            sections.get("skills-SKILLS").unwrap().texts(),
            vec!["Rust", "Python", "Java", "Go"]
        );
        assert_eq!(sections.headers().len(), 3);
    }

    #[test]
    fn test_empty_stream() {
        let sections = group_sections(Vec::new(), &SectionWeights::default());
        assert!(sections.is_empty());
    }

    #[test]
    fn test_counter_resets_per_call() {
        let lines = || {
            vec![
                body("x"),
                Line::new("HOBBIES", 14.0).with_bold(0.9).with_font("Arial"),
                body("y"),
            ]
        };
        let first = group_sections(lines(), &SectionWeights::default());
        let second = group_sections(lines(), &SectionWeights::default());
        assert_eq!(first, second);
        assert!(second.get("misc_0").is_some());
    }
}
