//! Text line tokenization: horizontal-first cuts through a page's
//! characters.
//!
//! The horizontal axis is tried first so a page splits into rows of text
//! before columns; the lane height is the smaller of the page's and the
//! document's most common glyph height, since a row gutter shorter than
//! one typical glyph is noise. Vertical lanes (column gutters) use the
//! larger of the two most common glyph widths and additionally refuse to
//! separate extraction-order-consecutive characters that vertically
//! overlap: a column cut must not slice through a run of overlapping
//! glyphs (diacritics, ligature parts) whose natural order disagrees with
//! their x order.

use crate::elements::{Character, TextLine};
use crate::error::Result;
use crate::geometry::{Line, Rect};
use crate::layout::xy_cut::{self, Axis, Bounded, CutRules};
use crate::layout::{larger_of, positive_span, smaller_of, words, TokenizerContext};
use crate::statistics::FloatCounter;
use std::collections::HashMap;

struct LineRules<'a> {
    ctx: TokenizerContext<'a>,
}

impl CutRules for LineRules<'_> {
    type Element = Character;
    type Output = TextLine;

    fn first_axis(&self) -> Axis {
        Axis::Horizontal
    }

    fn lane_span(&self, axis: Axis, _elements: &[Character]) -> Option<f32> {
        match axis {
            Axis::Horizontal => positive_span(smaller_of(
                self.ctx.page.most_common_height(),
                self.ctx.document.most_common_height(),
            )),
            Axis::Vertical => positive_span(larger_of(
                self.ctx.document.most_common_width(),
                self.ctx.page.most_common_width(),
            )),
        }
    }

    fn is_valid_lane(
        &self,
        axis: Axis,
        leading: &[&Character],
        inside: &[&Character],
        trailing: &[&Character],
    ) -> bool {
        if !inside.is_empty() {
            return false;
        }
        if axis == Axis::Vertical && separates_consecutive_overlapping(leading, trailing) {
            return false;
        }
        true
    }

    fn pack(&self, elements: Vec<Character>) -> Result<Option<TextLine>> {
        let (baseline, mean_line) = resolve_reference_lines(&elements);
        let words = words::tokenize(elements, self.ctx)?;
        Ok(TextLine::from_words(words, baseline, mean_line))
    }
}

/// Group a page's characters into text lines.
///
/// Lines come out in pre-order of the cut recursion: rows top to bottom,
/// columns left to right within a row split.
pub fn tokenize(characters: Vec<Character>, ctx: TokenizerContext<'_>) -> Result<Vec<TextLine>> {
    xy_cut::cut(&LineRules { ctx }, characters)
}

/// Whether any two extraction-order-consecutive characters that vertically
/// overlap would end up on opposite sides of the lane.
fn separates_consecutive_overlapping(leading: &[&Character], trailing: &[&Character]) -> bool {
    let by_sequence: HashMap<usize, &Character> =
        trailing.iter().map(|c| (c.sequence, *c)).collect();
    for character in leading {
        let mut neighbors = [None, Some(character.sequence + 1)];
        neighbors[0] = character.sequence.checked_sub(1);
        for neighbor in neighbors.into_iter().flatten() {
            if let Some(other) = by_sequence.get(&neighbor) {
                if character.rect().overlaps_vertically(&other.rect()) {
                    return true;
                }
            }
        }
    }
    false
}

/// Resolve the baseline and mean line of an atomic character group.
///
/// Each candidate y is rounded to one decimal by the counter to absorb
/// floating-point jitter. When both lines resolve but the baseline does
/// not lie below the mean line the geometry is inconsistent and both are
/// discarded.
fn resolve_reference_lines(characters: &[Character]) -> (Option<Line>, Option<Line>) {
    let rect = match Rect::bounding(characters.iter().map(|c| c.bounds())) {
        Some(rect) => rect,
        None => return (None, None),
    };

    let mut bottoms = FloatCounter::new();
    let mut tops = FloatCounter::new();
    for c in characters {
        if c.is_baseline_glyph() {
            bottoms.add(c.rect().min_y);
        }
        if c.is_mean_line_glyph() {
            tops.add(c.rect().max_y);
        }
    }

    let baseline_y = bottoms.most_common();
    let mean_line_y = tops.most_common();
    if let (Some(baseline), Some(mean)) = (baseline_y, mean_line_y) {
        if baseline >= mean {
            return (None, None);
        }
    }

    (
        baseline_y.map(|y| Line::horizontal(y, rect.min_x, rect.max_x)),
        mean_line_y.map(|y| Line::horizontal(y, rect.min_x, rect.max_x)),
    )
}
