//! Rendering options and configuration.

/// Options for rendering segmentation results as text.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Print score and per-signal breakdown next to each entry title
    pub show_scores: bool,

    /// Print sections that have no content lines
    pub include_empty: bool,

    /// Marker printed before each content line
    pub line_marker: char,

    /// Marker printed before each entry title
    pub entry_marker: char,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable score output.
    pub fn with_scores(mut self, show: bool) -> Self {
        self.show_scores = show;
        self
    }

    /// Enable or disable empty section output.
    pub fn with_empty_sections(mut self, include: bool) -> Self {
        self.include_empty = include;
        self
    }

    /// Set the content line marker.
    pub fn with_line_marker(mut self, marker: char) -> Self {
        self.line_marker = marker;
        self
    }

    /// Set the entry title marker.
    pub fn with_entry_marker(mut self, marker: char) -> Self {
        self.entry_marker = marker;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_scores: false,
            include_empty: true,
            line_marker: '•',
            entry_marker: '▸',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_scores(true)
            .with_empty_sections(false)
            .with_line_marker('-')
            .with_entry_marker('>');

        assert!(options.show_scores);
        assert!(!options.include_empty);
        assert_eq!(options.line_marker, '-');
        assert_eq!(options.entry_marker, '>');
    }

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert!(!options.show_scores);
        assert!(options.include_empty);
    }
}
