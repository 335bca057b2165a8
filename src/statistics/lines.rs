//! Derived statistics over a list of text lines.

use crate::elements::{FontFace, TextLine};
use crate::statistics::FloatCounter;
use indexmap::IndexMap;
use std::sync::Arc;

/// Vertical distance between the reference lines of two consecutive text
/// lines (baseline-to-baseline where both resolved a baseline, bounding-box
/// bottom otherwise).
///
/// Positive when `lower` sits below `upper` on the page.
pub fn line_pitch(upper: &TextLine, lower: &TextLine) -> f32 {
    upper.reference_y() - lower.reference_y()
}

/// Line-pitch and whitespace-width distributions over a list of text lines.
///
/// Line pitches are keyed per font face: a document mixing 9pt footnotes
/// with 11pt body text has two distinct "normal" pitches, and the block
/// cascade must compare each line against the pitch of its own face. The
/// whitespace-width counter collects the gaps between consecutive words of
/// each line and calibrates the word tokenizer's lane width.
#[derive(Debug, Clone, Default)]
pub struct TextLineStatistic {
    line_pitches: IndexMap<Arc<FontFace>, FloatCounter>,
    whitespace_widths: FloatCounter,
}

impl TextLineStatistic {
    /// Create an empty statistic.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the statistic of a line list (one page's lines, in reading
    /// order).
    pub fn compute(lines: &[TextLine]) -> Self {
        let mut stat = Self::new();

        for pair in lines.windows(2) {
            let (upper, lower) = (&pair[0], &pair[1]);
            let pitch = line_pitch(upper, lower);
            if !pitch.is_finite() || pitch < 0.0 {
                continue;
            }
            if let Some(face) = lower.dominant_font_face() {
                stat.line_pitches
                    .entry(Arc::clone(face))
                    .or_default()
                    .add(pitch);
            }
        }

        for line in lines {
            for pair in line.words.windows(2) {
                let gap = pair[1].rect().min_x - pair[0].rect().max_x;
                if gap > 0.0 {
                    stat.whitespace_widths.add(gap);
                }
            }
        }

        stat
    }

    /// Most common line pitch recorded for a font face.
    pub fn most_common_line_pitch(&self, face: &FontFace) -> Option<f32> {
        self.line_pitches
            .get(face)
            .and_then(|counter| counter.most_common())
    }

    /// Most common whitespace width between consecutive words.
    pub fn most_common_whitespace_width(&self) -> Option<f32> {
        self.whitespace_widths.most_common()
    }

    /// Fold another statistic into this one by summing the underlying
    /// counters.
    pub fn merge(&mut self, other: &TextLineStatistic) {
        for (face, counter) in &other.line_pitches {
            self.line_pitches
                .entry(Arc::clone(face))
                .or_default()
                .merge(counter);
        }
        self.whitespace_widths.merge(&other.whitespace_widths);
    }

    /// Whether nothing has been counted yet.
    pub fn is_empty(&self) -> bool {
        self.line_pitches.is_empty() && self.whitespace_widths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Character, Color, Position, Word};
    use crate::geometry::Rect;

    fn mock_word(text: &str, x: f32, y: f32, face: &Arc<FontFace>) -> Word {
        let chars: Vec<Character> = text
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let cx = x + i as f32 * 6.0;
                Character::new(
                    c.to_string(),
                    Position::new(1, Rect::new(cx, y, cx + 6.0, y + 10.0)),
                    Arc::clone(face),
                    Arc::new(Color::black()),
                    i,
                )
            })
            .collect();
        Word::from_characters(chars).unwrap()
    }

    fn mock_line(words: Vec<Word>) -> TextLine {
        TextLine::from_words(words, None, None).unwrap()
    }

    #[test]
    fn test_line_pitch_uses_bbox_fallback() {
        let face = Arc::new(FontFace::new("Times", 12.0));
        let upper = mock_line(vec![mock_word("abc", 0.0, 24.0, &face)]);
        let lower = mock_line(vec![mock_word("def", 0.0, 12.0, &face)]);
        assert_eq!(line_pitch(&upper, &lower), 12.0);
    }

    #[test]
    fn test_compute_line_pitches_per_face() {
        let times = Arc::new(FontFace::new("Times", 12.0));
        let lines = vec![
            mock_line(vec![mock_word("one", 0.0, 48.0, &times)]),
            mock_line(vec![mock_word("two", 0.0, 36.0, &times)]),
            mock_line(vec![mock_word("three", 0.0, 24.0, &times)]),
        ];

        let stat = TextLineStatistic::compute(&lines);
        assert_eq!(stat.most_common_line_pitch(&times), Some(12.0));
        assert_eq!(
            stat.most_common_line_pitch(&FontFace::new("Courier", 9.0)),
            None
        );
    }

    #[test]
    fn test_compute_whitespace_widths() {
        let face = Arc::new(FontFace::new("Times", 12.0));
        // "ab" ends at x=12, "cd" starts at x=16: gap 4.
        let line = mock_line(vec![
            mock_word("ab", 0.0, 0.0, &face),
            mock_word("cd", 16.0, 0.0, &face),
        ]);

        let stat = TextLineStatistic::compute(&[line]);
        assert_eq!(stat.most_common_whitespace_width(), Some(4.0));
    }

    #[test]
    fn test_merge_accumulates() {
        let face = Arc::new(FontFace::new("Times", 12.0));
        let page1 = TextLineStatistic::compute(&[
            mock_line(vec![mock_word("a", 0.0, 12.0, &face)]),
            mock_line(vec![mock_word("b", 0.0, 0.0, &face)]),
        ]);
        let mut doc = TextLineStatistic::new();
        assert!(doc.is_empty());
        doc.merge(&page1);
        assert!(!doc.is_empty());
        assert_eq!(doc.most_common_line_pitch(&face), Some(12.0));
    }

    #[test]
    fn test_empty_lines_produce_empty_statistic() {
        let stat = TextLineStatistic::compute(&[]);
        assert!(stat.is_empty());
        assert_eq!(stat.most_common_whitespace_width(), None);
    }
}
