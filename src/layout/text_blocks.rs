//! Text block tokenization: a first-match-wins rule cascade over the
//! ordered text lines of a page.
//!
//! Each line is judged with access to its previous and next line and to
//! the currently open block; the first matching rule starts a new block.
//! Structural signals (column overlap) are checked before statistical
//! ones (line pitch, indentation), and the failure-prone stylistic rules
//! (font face, reference anchors) come last so they cannot override a
//! clear geometric signal.
//!
//! The tolerances are calibration constants reflecting observed PDF
//! coordinate jitter, fixed on purpose; they are not configuration.

use crate::elements::{TextBlock, TextLine};
use crate::geometry::Rect;
use crate::statistics::{line_pitch, TextLineStatistic};
use lazy_static::lazy_static;
use regex::Regex;

/// Slack allowed on line-pitch comparisons.
pub const LINE_PITCH_TOLERANCE: f32 = 1.0;

/// Slack allowed on left-edge (minX) comparisons.
pub const MIN_X_TOLERANCE: f32 = 0.5;

lazy_static! {
    /// A bibliography/reference entry anchor: a bracketed prefix followed
    /// by whitespace, e.g. `[12] `.
    static ref REFERENCE_ANCHOR: Regex = Regex::new(r"^\[(.*)\]\s+").unwrap();
}

/// Group a page's text lines into blocks.
///
/// Lines must arrive in reading order (as produced by the line tokenizer);
/// the statistic is the document-wide line statistic accumulated so far.
pub fn tokenize(lines: Vec<TextLine>, statistic: &TextLineStatistic) -> Vec<TextBlock> {
    let mut blocks = Vec::new();
    let mut open: Vec<TextLine> = Vec::new();

    for index in 0..lines.len() {
        let previous = index.checked_sub(1).map(|i| &lines[i]);
        let next = lines.get(index + 1);
        let line = &lines[index];

        let current = if previous.is_none() {
            None
        } else {
            Some(open.as_slice())
        };
        if let Some(rule) = introduces_new_block(previous, line, next, current, statistic) {
            log::trace!("line {} starts a new block: {}", index, rule);
            if let Some(block) = TextBlock::from_lines(std::mem::take(&mut open)) {
                blocks.push(block);
            }
        }
        open.push(line.clone());
    }

    if let Some(block) = TextBlock::from_lines(open) {
        blocks.push(block);
    }
    blocks
}

/// The rule cascade. Returns the matched rule's description, or `None`
/// when the line extends the open block.
fn introduces_new_block(
    previous: Option<&TextLine>,
    line: &TextLine,
    next: Option<&TextLine>,
    current: Option<&[TextLine]>,
    statistic: &TextLineStatistic,
) -> Option<&'static str> {
    // 1. Nothing precedes the line.
    let previous = match previous {
        Some(previous) => previous,
        None => return Some("first line of the page"),
    };
    // 2. Nothing is open to extend.
    let current = match current {
        Some(current) => current,
        None => return Some("no open block"),
    };
    // 3. Degenerate empty block: keep extending it, never split.
    if current.is_empty() {
        return None;
    }

    // 4. The line left the open block's column.
    let block_rect =
        Rect::bounding(current.iter().map(|l| l.rect())).expect("open block has lines");
    if !line.rect().overlaps_horizontally(&block_rect) {
        return Some("no horizontal overlap with the open block");
    }

    // 5. Abnormal gap to the previous line for this font face.
    if exceeds_typical_pitch(previous, line, statistic) {
        return Some("line pitch above the typical pitch of the face");
    }

    // 6. The line sits visually closer to what follows than to what
    //    precedes it.
    if let Some(next) = next {
        if line_pitch(previous, line) > line_pitch(line, next) + LINE_PITCH_TOLERANCE {
            return Some("closer to the next line than to the previous");
        }
    }

    // 7. First line of an indented paragraph.
    if is_indented_paragraph_start(previous, line, next) {
        return Some("indented between two aligned lines");
    }

    // 8. Style change.
    if has_font_face_change(previous, line) {
        return Some("dominant font face changed");
    }

    // 9. Start of a bibliography entry.
    if is_reference_entry_start(previous, line, next) {
        return Some("reference entry anchor");
    }

    None
}

fn exceeds_typical_pitch(
    previous: &TextLine,
    line: &TextLine,
    statistic: &TextLineStatistic,
) -> bool {
    let face = match line.dominant_font_face() {
        Some(face) => face,
        None => return false,
    };
    let typical = match statistic.most_common_line_pitch(face) {
        Some(typical) => typical,
        None => return false,
    };
    line_pitch(previous, line) > typical + LINE_PITCH_TOLERANCE
}

/// The line is indented relative to both neighbors, the neighbors share
/// the same left edge, the two surrounding pitches agree, and the
/// neighbors are not both reference anchors (a hanging-indent reference
/// list indents its continuation lines, not its first lines).
fn is_indented_paragraph_start(
    previous: &TextLine,
    line: &TextLine,
    next: Option<&TextLine>,
) -> bool {
    let next = match next {
        Some(next) => next,
        None => return false,
    };
    let prev_x = previous.rect().min_x;
    let next_x = next.rect().min_x;
    let x = line.rect().min_x;

    let neighbors_aligned = (prev_x - next_x).abs() <= MIN_X_TOLERANCE;
    let indented = x > prev_x + MIN_X_TOLERANCE && x > next_x + MIN_X_TOLERANCE;
    let pitches_agree =
        (line_pitch(previous, line) - line_pitch(line, next)).abs() <= LINE_PITCH_TOLERANCE;
    let between_anchors = is_reference_anchor(previous) && is_reference_anchor(next);

    neighbors_aligned && indented && pitches_agree && !between_anchors
}

fn has_font_face_change(previous: &TextLine, line: &TextLine) -> bool {
    match (previous.dominant_font_face(), line.dominant_font_face()) {
        (Some(a), Some(b)) => a.name != b.name || a.size != b.size,
        _ => false,
    }
}

fn is_reference_anchor(line: &TextLine) -> bool {
    REFERENCE_ANCHOR.is_match(&line.text)
}

/// The line is an anchor and at least one neighbor either starts at a
/// different left edge or is an anchor itself.
fn is_reference_entry_start(
    previous: &TextLine,
    line: &TextLine,
    next: Option<&TextLine>,
) -> bool {
    if !is_reference_anchor(line) {
        return false;
    }
    let x = line.rect().min_x;
    let neighbor_differs = |neighbor: &TextLine| {
        (neighbor.rect().min_x - x).abs() > MIN_X_TOLERANCE || is_reference_anchor(neighbor)
    };
    neighbor_differs(previous) || next.map(neighbor_differs).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Character, Color, FontFace, Position, Word};
    use std::sync::Arc;

    fn mock_line(text: &str, x: f32, y: f32, face: &Arc<FontFace>) -> TextLine {
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
        // One line, one word: spacing games are not what these tests need.
        let word = Word::from_characters(chars).unwrap();
        TextLine::from_words(vec![word], None, None).unwrap()
    }

    fn times() -> Arc<FontFace> {
        Arc::new(FontFace::new("Times", 12.0))
    }

    fn stats_for(lines: &[TextLine]) -> TextLineStatistic {
        TextLineStatistic::compute(lines)
    }

    #[test]
    fn test_continuous_lines_form_one_block() {
        let face = times();
        let lines = vec![
            mock_line("one", 0.0, 36.0, &face),
            mock_line("two", 0.0, 24.0, &face),
            mock_line("three", 0.0, 12.0, &face),
            mock_line("four", 0.0, 0.0, &face),
        ];
        let stats = stats_for(&lines);

        let blocks = tokenize(lines, &stats);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lines.len(), 4);
    }

    #[test]
    fn test_abnormal_pitch_starts_block() {
        let face = times();
        // Three 12-unit pitches establish the norm, then a 30-unit gap.
        let lines = vec![
            mock_line("a", 0.0, 66.0, &face),
            mock_line("b", 0.0, 54.0, &face),
            mock_line("c", 0.0, 42.0, &face),
            mock_line("d", 0.0, 30.0, &face),
            mock_line("e", 0.0, 0.0, &face),
        ];
        let stats = stats_for(&lines);

        let blocks = tokenize(lines, &stats);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].lines.len(), 4);
        assert_eq!(blocks[1].lines[0].text, "e");
    }

    #[test]
    fn test_column_change_beats_font_change() {
        let face = times();
        let other = Arc::new(FontFace::new("Helvetica", 9.0));
        // The second line both fails horizontal overlap and changes face:
        // the block still splits (and only once) on the structural rule.
        let lines = vec![
            mock_line("left column", 0.0, 12.0, &face),
            mock_line("right column", 300.0, 12.0, &other),
        ];
        let stats = stats_for(&lines);

        let blocks = tokenize(lines, &stats);
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_font_face_change_starts_block() {
        let face = times();
        let heading = Arc::new(FontFace::new("Times-Bold", 14.0));
        let lines = vec![
            mock_line("Heading", 0.0, 24.0, &heading),
            mock_line("body text here", 0.0, 12.0, &face),
            mock_line("more body text", 0.0, 0.0, &face),
        ];
        let stats = stats_for(&lines);

        let blocks = tokenize(lines, &stats);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text, "Heading");
    }

    #[test]
    fn test_indented_paragraph_start() {
        let face = times();
        let lines = vec![
            mock_line("end of one paragraph", 0.0, 36.0, &face),
            mock_line("The next begins", 12.0, 24.0, &face),
            mock_line("and continues flush", 0.0, 12.0, &face),
            mock_line("to the margin", 0.0, 0.0, &face),
        ];
        let stats = stats_for(&lines);

        let blocks = tokenize(lines, &stats);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[1].text.starts_with("The next"));
    }

    #[test]
    fn test_reference_anchors_split_per_entry() {
        let face = times();
        let lines = vec![
            mock_line("[1] First reference", 0.0, 48.0, &face),
            mock_line("[2] Second reference", 0.0, 36.0, &face),
            mock_line("[3] Third reference", 0.0, 24.0, &face),
            mock_line("[4] Fourth reference", 0.0, 12.0, &face),
            mock_line("[5] Fifth reference", 0.0, 0.0, &face),
        ];
        let stats = stats_for(&lines);

        let blocks = tokenize(lines, &stats);
        assert_eq!(blocks.len(), 5);
    }

    #[test]
    fn test_empty_input() {
        let stats = TextLineStatistic::new();
        assert!(tokenize(vec![], &stats).is_empty());
    }

    #[test]
    fn test_missing_statistics_do_not_trigger_pitch_rule() {
        let face = times();
        // No recorded pitch for this face: rule 5 must stay silent, and
        // equal spacing keeps everything in one block.
        let lines = vec![
            mock_line("a", 0.0, 12.0, &face),
            mock_line("b", 0.0, 0.0, &face),
        ];
        let stats = TextLineStatistic::new();

        let blocks = tokenize(lines, &stats);
        assert_eq!(blocks.len(), 1);
    }
}
