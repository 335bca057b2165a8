//! The segmentation and tokenization pipeline stages.
//!
//! Stages are strictly bottom-up: the XY-cut engine groups a page's
//! characters into text lines, each line's characters into words, a rule
//! cascade groups lines into blocks, and the assembler merges body-text
//! blocks into paragraphs. Every stage consults the statistics context for
//! its calibration constants and degrades to "no cut" when a statistic is
//! undefined.

pub mod paragraphs;
pub mod text_blocks;
pub mod text_lines;
pub mod words;
pub mod xy_cut;

pub use xy_cut::{Axis, Bounded, CutRules, Lane};

use crate::statistics::{CharacterStatistic, TextLineStatistic};

/// Read-only statistics consulted by the tokenizers.
///
/// The character statistics are frozen before tokenization starts; the
/// line statistic reflects the pages processed so far and is `None` until
/// the first page's lines have been measured.
#[derive(Clone, Copy)]
pub struct TokenizerContext<'a> {
    /// Document-wide character distributions
    pub document: &'a CharacterStatistic,
    /// Distributions of the page being tokenized
    pub page: &'a CharacterStatistic,
    /// Document-wide line distributions accumulated so far, if any
    pub lines: Option<&'a TextLineStatistic>,
}

/// The larger of two optional calibration values.
pub(crate) fn larger_of(a: Option<f32>, b: Option<f32>) -> Option<f32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    }
}

/// The smaller of two optional calibration values.
pub(crate) fn smaller_of(a: Option<f32>, b: Option<f32>) -> Option<f32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    }
}

/// Keep only a usable lane span. Zero-area glyphs produce a most common
/// width/height of 0, which must degrade to "no cut" rather than reach the
/// engine as a degenerate lane.
pub(crate) fn positive_span(span: Option<f32>) -> Option<f32> {
    span.filter(|s| *s > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_calibration_combinators() {
        assert_eq!(larger_of(Some(6.0), Some(4.0)), Some(6.0));
        assert_eq!(smaller_of(Some(6.0), Some(4.0)), Some(4.0));
        assert_eq!(larger_of(None, Some(4.0)), Some(4.0));
        assert_eq!(smaller_of(Some(6.0), None), Some(6.0));
        assert_eq!(larger_of(None, None), None);
    }
}
