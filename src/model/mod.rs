//! Data model for segmented resumes.
//!
//! Lines come from an upstream layout extractor. Sections and subsections
//! are built from them in one linear pass each and never revisited.

mod line;
mod outline;
mod section;
mod subsection;

pub use line::{Line, UNKNOWN_FONT};
pub use outline::{DetailedOutline, DetailedSection, Entry, ResumeOutline, SectionOutline, SegmentStats};
pub use section::{Section, SectionKind, Sections};
pub use subsection::{Breakdown, HeaderVerdict, Signal, Subsection};
