//! Word tokenization: vertical cuts through one text line's characters.
//!
//! The lane width is the document's most common whitespace width where one
//! has been observed, falling back to the most common glyph width, since a gap
//! narrower than one typical character separates letters, not words.
//! Horizontal cutting is disabled: a text line has no rows.

use crate::elements::{Character, Word};
use crate::error::Result;
use crate::layout::xy_cut::{self, Axis, CutRules};
use crate::layout::{larger_of, positive_span, TokenizerContext};

struct WordRules<'a> {
    ctx: TokenizerContext<'a>,
}

impl CutRules for WordRules<'_> {
    type Element = Character;
    type Output = Word;

    fn first_axis(&self) -> Axis {
        Axis::Vertical
    }

    fn lane_span(&self, axis: Axis, _elements: &[Character]) -> Option<f32> {
        match axis {
            Axis::Vertical => positive_span(
                self.ctx
                    .lines
                    .and_then(|lines| lines.most_common_whitespace_width())
                    .or_else(|| {
                        larger_of(
                            self.ctx.document.most_common_width(),
                            self.ctx.page.most_common_width(),
                        )
                    }),
            ),
            Axis::Horizontal => None,
        }
    }

    fn is_valid_lane(
        &self,
        _axis: Axis,
        _leading: &[&Character],
        inside: &[&Character],
        _trailing: &[&Character],
    ) -> bool {
        inside.is_empty()
    }

    fn pack(&self, elements: Vec<Character>) -> Result<Option<Word>> {
        Ok(Word::from_characters(elements))
    }
}

/// Split one text line's characters into words.
///
/// Words come out left to right; characters within each word are x-sorted
/// by construction (see [`Word::from_characters`]). Hyphenation is flagged
/// on any word ending in a hyphen glyph; merging hyphenated fragments is
/// the paragraph assembler's concern, never done here.
pub fn tokenize(characters: Vec<Character>, ctx: TokenizerContext<'_>) -> Result<Vec<Word>> {
    xy_cut::cut(&WordRules { ctx }, characters)
}
