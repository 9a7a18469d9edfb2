//! Section keyword table and lexical matching.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::SectionKind;

/// Known heading phrases per canonical section kind, in match priority order.
pub const SECTION_KEYWORDS: &[(SectionKind, &[&str])] = &[
    (
        SectionKind::Contact,
        &[
            "contact",
            "contact details",
            "personal details",
            "personal information",
            "profile",
            "about",
            "details",
        ],
    ),
    (
        SectionKind::Education,
        &[
            "education",
            "academic background",
            "academics",
            "educational qualifications",
            "academic qualifications",
            "education background",
        ],
    ),
    (
        SectionKind::Achievements,
        &[
            "achievements",
            "scholastic achievements",
            "academic achievements",
            "honors",
            "honours",
            "awards",
            "rankings",
            "competitive exams",
        ],
    ),
    (
        SectionKind::Skills,
        &[
            "skills",
            "technical skills",
            "technical skill",
            "technologies",
            "toolkit",
            "expertise",
        ],
    ),
    (
        SectionKind::Experience,
        &[
            "experience",
            "work experience",
            "professional experience",
            "employment",
            "work history",
            "professional background",
            "industry experience",
            "internships",
            "internship experience",
        ],
    ),
    (
        SectionKind::Projects,
        &[
            "projects",
            "academic projects",
            "key projects",
            "selected projects",
            "research projects",
        ],
    ),
    (
        SectionKind::Certifications,
        &[
            "certifications",
            "certificates",
            "courses",
            "online courses",
            "training",
        ],
    ),
    (
        SectionKind::Positions,
        &[
            "positions of responsibility",
            "responsibilities",
            "leadership",
            "por",
            "leadership experience",
            "positions of responsibilities",
        ],
    ),
    (
        SectionKind::Extracurricular,
        &[
            "extracurricular",
            "extracurricular activities",
            "extracurriculars",
            "extra curricular",
            // Normalization strips '-', so this variant can never match.
            "co-curricular",
            "co curricular",
            "activities",
            "student activities",
            "cultural activities",
            "sports",
            "volunteering",
        ],
    ),
];

static KEYWORD_PATTERNS: LazyLock<Vec<(SectionKind, Regex)>> = LazyLock::new(|| {
    SECTION_KEYWORDS
        .iter()
        .map(|(kind, phrases)| {
            let alternation = phrases
                .iter()
                .map(|p| regex::escape(p))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = format!(r"\b(?:{})\b", alternation);
            (*kind, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Lower-case `text` and strip everything except ASCII letters and spaces.
pub fn normalize_heading(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || *c == ' ')
        .collect()
}

/// Match a line's text against the keyword table.
///
/// Phrases match as whole words anywhere in the normalized text. The first
/// kind in table order with a matching phrase wins.
pub fn match_section_keyword(text: &str) -> Option<SectionKind> {
    let normalized = normalize_heading(text);
    KEYWORD_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(&normalized))
        .map(|(kind, _)| *kind)
}
