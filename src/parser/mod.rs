//! Line stream segmentation.

mod baseline;
mod keywords;
mod options;
mod section;
mod subsection;

pub use baseline::StyleBaseline;
pub use keywords::{match_section_keyword, normalize_heading, SECTION_KEYWORDS};
pub use options::{SectionWeights, SegmentOptions, SubsectionWeights};
pub use section::{group_sections, is_section_header, score_section_header};
pub use subsection::{
    date_component_count, group_subsections, is_bullet_point, is_date_line,
    score_subsection_header, BULLET_GLYPHS,
};
