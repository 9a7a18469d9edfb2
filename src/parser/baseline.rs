//! Body text style estimation.
//!
//! The dominant font size and font name in a scope stand in for "normal
//! text"; headers are detected as deviations from it.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::model::{Line, UNKNOWN_FONT};

/// Most common font size and font name in a set of lines.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleBaseline {
    /// Body text font size (most common)
    pub body_size: f64,
    /// Body text font name (most common non-empty name)
    pub body_font: Option<String>,
}

impl StyleBaseline {
    /// Font size assumed when there is nothing to measure.
    pub const DEFAULT_SIZE: f64 = 10.0;

    /// Estimate the baseline of `lines`.
    ///
    /// Ties go to the value seen first. Lines with an empty font name do not
    /// vote for the body font; if none has a name, `body_font` is `None`.
    pub fn from_lines(lines: &[Line]) -> Self {
        if lines.is_empty() {
            return Self::default();
        }

        let body_size = mode(lines.iter().map(|l| (l.font_size.to_bits(), l.font_size)))
            .unwrap_or(Self::DEFAULT_SIZE);
        let body_font = mode(
            lines
                .iter()
                .filter(|l| !l.font_name.is_empty())
                .map(|l| (l.font_name.as_str(), l.font_name.as_str())),
        )
        .map(str::to_string);

        log::debug!(
            "Baseline over {} lines: size={}, font={:?}",
            lines.len(),
            body_size,
            body_font
        );

        Self {
            body_size,
            body_font,
        }
    }

    /// Check if `font_name` differs from a known body font.
    ///
    /// Always false when no body font could be determined.
    pub fn is_off_body_font(&self, font_name: &str) -> bool {
        self.body_font.as_deref().is_some_and(|body| body != font_name)
    }
}

impl Default for StyleBaseline {
    fn default() -> Self {
        Self {
            body_size: Self::DEFAULT_SIZE,
            body_font: Some(UNKNOWN_FONT.to_string()),
        }
    }
}

/// Most frequent value, first-seen wins ties.
fn mode<K, V>(items: impl Iterator<Item = (K, V)>) -> Option<V>
where
    K: Hash + Eq,
{
    let mut histogram: IndexMap<K, (V, usize)> = IndexMap::new();
    for (key, value) in items {
        histogram.entry(key).or_insert((value, 0)).1 += 1;
    }

    let mut best: Option<(V, usize)> = None;
    for (_, (value, count)) in histogram {
        if best.as_ref().map_or(true, |(_, top)| count > *top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lines_use_default() {
        let baseline = StyleBaseline::from_lines(&[]);
        assert_eq!(baseline.body_size, 10.0);
        assert_eq!(baseline.body_font.as_deref(), Some("Unknown"));
    }

    #[test]
    fn test_most_common_size_and_font() {
        let lines = vec![
            Line::new("NAME", 18.0).with_font("Georgia-Bold"),
            Line::new("a", 10.0).with_font("Georgia"),
            Line::new("b", 10.0).with_font("Georgia"),
            Line::new("c", 11.0).with_font("Georgia-Italic"),
        ];
        let baseline = StyleBaseline::from_lines(&lines);
        assert_eq!(baseline.body_size, 10.0);
        assert_eq!(baseline.body_font.as_deref(), Some("Georgia"));
    }

    #[test]
    fn test_ties_go_to_first_seen() {
        let lines = vec![
            Line::new("a", 12.0).with_font("B"),
            Line::new("b", 10.0).with_font("A"),
            Line::new("c", 10.0).with_font("A"),
            Line::new("d", 12.0).with_font("B"),
        ];
        let baseline = StyleBaseline::from_lines(&lines);
        assert_eq!(baseline.body_size, 12.0);
        assert_eq!(baseline.body_font.as_deref(), Some("B"));
    }

    #[test]
    fn test_unnamed_fonts_do_not_vote() {
        let lines = vec![
            Line::new("a", 10.0).with_font(""),
            Line::new("b", 10.0).with_font(""),
            Line::new("c", 10.0).with_font("Arial"),
        ];
        let baseline = StyleBaseline::from_lines(&lines);
        assert_eq!(baseline.body_font.as_deref(), Some("Arial"));

        let unnamed = vec![Line::new("a", 10.0).with_font("")];
        let baseline = StyleBaseline::from_lines(&unnamed);
        assert_eq!(baseline.body_font, None);
        assert!(!baseline.is_off_body_font("Arial"));
    }

    #[test]
    fn test_is_off_body_font() {
        let baseline = StyleBaseline {
            body_size: 10.0,
            body_font: Some("Arial".to_string()),
        };
        assert!(baseline.is_off_body_font("Arial-Bold"));
        assert!(!baseline.is_off_body_font("Arial"));
    }
}
