//! Top-level section types.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Line;

/// Canonical resume section categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Contact and personal details
    Contact,
    /// Education history
    Education,
    /// Awards, honours, ranks
    Achievements,
    /// Technical and other skills
    Skills,
    /// Work experience and internships
    Experience,
    /// Projects
    Projects,
    /// Certifications and courses
    Certifications,
    /// Positions of responsibility
    Positions,
    /// Extracurricular activities
    Extracurricular,
}

impl SectionKind {
    /// All kinds, in keyword table order.
    pub const ALL: [SectionKind; 9] = [
        SectionKind::Contact,
        SectionKind::Education,
        SectionKind::Achievements,
        SectionKind::Skills,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Certifications,
        SectionKind::Positions,
        SectionKind::Extracurricular,
    ];

    /// Lowercase name used in section keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Contact => "contact",
            SectionKind::Education => "education",
            SectionKind::Achievements => "achievements",
            SectionKind::Skills => "skills",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Certifications => "certifications",
            SectionKind::Positions => "positions",
            SectionKind::Extracurricular => "extracurricular",
        }
    }

    /// Look up a kind by its lowercase name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named run of lines between two top-level headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Bucket key (`header_info`, `<kind>-<header text>` or `misc_<n>`)
    pub key: String,

    /// Canonical kind, when the opening header matched the keyword table
    pub kind: Option<SectionKind>,

    /// Content lines in document order, header excluded
    pub lines: Vec<Line>,
}

impl Section {
    /// Create an empty section.
    pub fn new(key: impl Into<String>, kind: Option<SectionKind>) -> Self {
        Self {
            key: key.into(),
            kind,
            lines: Vec::new(),
        }
    }

    /// Check if the section has no content lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Texts of the content lines.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }
}

/// Ordered section buckets produced by one grouping pass.
///
/// Keys keep first-occurrence order. A header whose key already exists
/// reopens that bucket instead of creating a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sections {
    buckets: IndexMap<String, Section>,
    headers: Vec<Line>,
}

impl Sections {
    /// Key of the bucket holding everything before the first header.
    pub const HEADER_INFO: &'static str = "header_info";

    /// Create an empty set of sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure a bucket exists for `key`.
    pub fn open(&mut self, key: &str, kind: Option<SectionKind>) {
        if !self.buckets.contains_key(key) {
            self.buckets.insert(key.to_string(), Section::new(key, kind));
        }
    }

    /// Append a content line to the bucket for `key`, opening it if needed.
    pub fn push(&mut self, key: &str, line: Line) {
        self.open(key, None);
        if let Some(section) = self.buckets.get_mut(key) {
            section.lines.push(line);
        }
    }

    /// Record a consumed header line.
    pub fn push_header(&mut self, line: Line) {
        self.headers.push(line);
    }

    /// Get a section by key.
    pub fn get(&self, key: &str) -> Option<&Section> {
        self.buckets.get(key)
    }

    /// Iterate sections in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.buckets.values()
    }

    /// Section keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Sections of a given kind.
    pub fn of_kind(&self, kind: SectionKind) -> impl Iterator<Item = &Section> {
        self.buckets.values().filter(move |s| s.kind == Some(kind))
    }

    /// Header lines consumed while grouping, in document order.
    pub fn headers(&self) -> &[Line] {
        &self.headers
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Check if there are no buckets.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of content lines across all buckets.
    pub fn line_count(&self) -> usize {
        self.buckets.values().map(|s| s.lines.len()).sum()
    }

    /// Flatten into a key → lines map, keeping key order.
    pub fn into_map(self) -> IndexMap<String, Vec<Line>> {
        self.buckets
            .into_iter()
            .map(|(key, section)| (key, section.lines))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Sections {
    type Item = &'a Section;
    type IntoIter = indexmap::map::Values<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_kind_names() {
        assert_eq!(SectionKind::Experience.as_str(), "experience");
        assert_eq!(SectionKind::Extracurricular.to_string(), "extracurricular");
        assert_eq!(SectionKind::from_name(" Projects "), Some(SectionKind::Projects));
        assert_eq!(SectionKind::from_name("hobbies"), None);
    }

    #[test]
    fn test_section_kind_serde() {
        let json = serde_json::to_string(&SectionKind::Positions).unwrap();
        assert_eq!(json, "\"positions\"");
    }

    #[test]
    fn test_sections_keep_first_occurrence_order() {
        let mut sections = Sections::new();
        sections.open(Sections::HEADER_INFO, None);
        sections.open("skills-SKILLS", Some(SectionKind::Skills));
        sections.open("education-EDUCATION", Some(SectionKind::Education));
        sections.push("skills-SKILLS", Line::new("Rust", 10.0));

        let keys: Vec<_> = sections.keys().collect();
        assert_eq!(keys, vec!["header_info", "skills-SKILLS", "education-EDUCATION"]);
        assert_eq!(sections.get("skills-SKILLS").unwrap().texts(), vec!["Rust"]);
        assert_eq!(sections.line_count(), 1);
    }

    #[test]
    fn test_reopen_keeps_kind_and_content() {
        let mut sections = Sections::new();
        sections.open("skills-SKILLS", Some(SectionKind::Skills));
        sections.push("skills-SKILLS", Line::new("Rust", 10.0));
        sections.open("skills-SKILLS", None);
        sections.push("skills-SKILLS", Line::new("Go", 10.0));

        let skills = sections.get("skills-SKILLS").unwrap();
        assert_eq!(skills.kind, Some(SectionKind::Skills));
        assert_eq!(skills.texts(), vec!["Rust", "Go"]);
        assert_eq!(sections.of_kind(SectionKind::Skills).count(), 1);
    }

    #[test]
    fn test_into_map() {
        let mut sections = Sections::new();
        sections.open(Sections::HEADER_INFO, None);
        sections.push("misc_0", Line::new("Hobbies", 10.0));

        let map = sections.into_map();
        assert_eq!(map.len(), 2);
        assert!(map["header_info"].is_empty());
        assert_eq!(map["misc_0"][0].text, "Hobbies");
    }
}
