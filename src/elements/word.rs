//! Words: x-ordered character runs produced by the word tokenizer.

use crate::elements::{Character, Position};
use crate::geometry::Rect;
use crate::statistics::CharacterStatistic;
use serde::Serialize;

/// Glyphs accepted as a trailing hyphen: hyphen-minus, the Unicode hyphen,
/// and the soft hyphen some interpreters emit for discretionary breaks.
const HYPHEN_GLYPHS: [char; 3] = ['-', '\u{2010}', '\u{00ad}'];

/// An x-ordered run of characters with no internal whitespace lane.
#[derive(Debug, Clone, Serialize)]
pub struct Word {
    /// Characters of the word, sorted by x position
    pub characters: Vec<Character>,
    /// Synthesized text (undecodable glyphs contribute nothing)
    pub text: String,
    /// Page-scoped bounding box
    pub position: Position,
    /// Whether the word ends in a hyphen glyph
    pub is_hyphenated: bool,
    /// Whether the word was produced by merging a hyphenated fragment with
    /// the following line's leading fragment
    pub is_dehyphenated: bool,
    /// Character distributions of this word
    #[serde(skip)]
    pub statistic: CharacterStatistic,
}

impl Word {
    /// Build a word from an unordered character group.
    ///
    /// Characters are sorted by x position before text synthesis, with the
    /// extraction sequence as tie-breaker so overlapping glyphs (diacritics,
    /// ligature parts) keep their original order.
    ///
    /// Returns `None` for an empty group.
    pub fn from_characters(mut characters: Vec<Character>) -> Option<Self> {
        if characters.is_empty() {
            return None;
        }
        characters.sort_by(|a, b| {
            a.rect()
                .min_x
                .partial_cmp(&b.rect().min_x)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.sequence.cmp(&b.sequence))
        });

        let text: String = characters.iter().map(|c| c.text.as_str()).collect();
        let rect = Rect::bounding(characters.iter().map(|c| c.rect()))
            .expect("non-empty character group has bounds");
        let page = characters[0].position.page;
        let statistic = CharacterStatistic::compute(&characters);
        let is_hyphenated = ends_with_hyphen(&characters);

        Some(Self {
            characters,
            text,
            position: Position::new(page, rect),
            is_hyphenated,
            is_dehyphenated: false,
            statistic,
        })
    }

    /// Bounding rectangle shorthand.
    pub fn rect(&self) -> Rect {
        self.position.rect
    }
}

/// Whether the last (rightmost) character of the run is a hyphen glyph.
fn ends_with_hyphen(characters: &[Character]) -> bool {
    characters
        .last()
        .and_then(|c| c.glyph())
        .map(|g| HYPHEN_GLYPHS.contains(&g))
        .unwrap_or(false)
}
