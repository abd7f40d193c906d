use crate::types::catalog::Section;
use serde::Serialize;

/// Scores are policy numbers, not measurements: integers or half-integers
/// per answer, fractional only after screening weightage is applied.
pub type Score = f64;

/// Per-section aggregation row for a categorization workbook.
#[derive(Debug, Clone, Serialize)]
pub struct SectionBreakdown {
    pub section: Section,
    pub answered: usize,
    pub score: Score,
}
