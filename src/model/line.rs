//! Tagged text lines, the atomic unit of segmentation.

use serde::{Deserialize, Serialize};

/// Font name used when the upstream extractor could not resolve one.
pub const UNKNOWN_FONT: &str = "Unknown";

fn default_font_name() -> String {
    UNKNOWN_FONT.to_string()
}

/// One reading-order line of text with its layout metadata.
///
/// Everything except `is_header` and `section` is produced upstream and is
/// never modified by the segmenter. Those two fields are written once, while
/// lines are grouped into sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Whitespace-normalized text
    pub text: String,

    /// Font size in points (largest glyph size on the line)
    pub font_size: f64,

    /// Fraction of glyphs classified as bold, in `[0, 1]`
    #[serde(default)]
    pub bold_ratio: f64,

    /// Dominant font name, subset tag removed
    #[serde(default = "default_font_name")]
    pub font_name: String,

    /// X position (left edge)
    #[serde(default)]
    pub x: f64,

    /// Y position (bottom edge, increases upward)
    #[serde(default)]
    pub y: f64,

    /// Hyperlink targets overlapping this line
    #[serde(default)]
    pub links: Vec<String>,

    /// Whether the line opened a top-level section
    #[serde(default)]
    pub is_header: bool,

    /// Key of the section bucket this line was assigned to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

impl Line {
    /// Create a regular-weight line in the unknown font at the origin.
    pub fn new(text: impl Into<String>, font_size: f64) -> Self {
        Self {
            text: text.into(),
            font_size,
            bold_ratio: 0.0,
            font_name: default_font_name(),
            x: 0.0,
            y: 0.0,
            links: Vec::new(),
            is_header: false,
            section: None,
        }
    }

    /// Set the bold glyph ratio.
    pub fn with_bold(mut self, ratio: f64) -> Self {
        self.bold_ratio = ratio;
        self
    }

    /// Set the font name.
    pub fn with_font(mut self, name: impl Into<String>) -> Self {
        self.font_name = name.into();
        self
    }

    /// Set the position.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Add a hyperlink target.
    pub fn with_link(mut self, uri: impl Into<String>) -> Self {
        self.links.push(uri.into());
        self
    }

    /// Number of whitespace-separated tokens.
    pub fn token_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Check if the text is upper-case.
    ///
    /// True when the text has at least one cased character and none of them
    /// is lower-case, so "B.TECH 2019" counts and "2019" does not.
    pub fn is_uppercase(&self) -> bool {
        is_uppercase_text(&self.text)
    }

    /// Check if the line carries any hyperlink.
    pub fn has_links(&self) -> bool {
        !self.links.is_empty()
    }
}

fn is_uppercase_text(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}
