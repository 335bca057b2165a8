//! Text lines with resolved baseline and mean line.

use crate::elements::{Character, FontFace, Position, Word};
use crate::geometry::{Line, Rect};
use crate::statistics::CharacterStatistic;
use serde::Serialize;
use std::sync::Arc;

/// A horizontal run of words produced by the line tokenizer.
///
/// The baseline is the horizontal through the most common bottom-y of
/// descenderless glyphs; the mean line is the horizontal through the most
/// common top-y of non-ascending lowercase glyphs. Both are `None` when the
/// line holds no voting glyphs or when the two would be mutually
/// inconsistent (baseline not below mean line).
#[derive(Debug, Clone, Serialize)]
pub struct TextLine {
    /// Words of the line, in x order
    pub words: Vec<Word>,
    /// Synthesized text, words joined by single spaces
    pub text: String,
    /// Page-scoped bounding box of the line's characters
    pub position: Position,
    /// Resolved baseline, if consistent
    pub baseline: Option<Line>,
    /// Resolved mean line, if consistent
    pub mean_line: Option<Line>,
    /// Character distributions of the whole line
    #[serde(skip)]
    pub statistic: CharacterStatistic,
}

impl TextLine {
    /// Build a line from tokenized words.
    ///
    /// Returns `None` for an empty word list.
    pub fn from_words(
        words: Vec<Word>,
        baseline: Option<Line>,
        mean_line: Option<Line>,
    ) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        let text = words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let rect = Rect::bounding(words.iter().map(|w| w.rect()))
            .expect("non-empty word list has bounds");
        let page = words[0].position.page;

        let characters: Vec<Character> = words
            .iter()
            .flat_map(|w| w.characters.iter().cloned())
            .collect();
        let statistic = CharacterStatistic::compute(&characters);

        Some(Self {
            words,
            text,
            position: Position::new(page, rect),
            baseline,
            mean_line,
            statistic,
        })
    }

    /// The line's dominant font face (most common over its characters).
    pub fn dominant_font_face(&self) -> Option<&Arc<FontFace>> {
        self.statistic.most_common_font_face()
    }

    /// Iterate over all characters of the line, word by word.
    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.words.iter().flat_map(|w| w.characters.iter())
    }

    /// Bounding rectangle shorthand.
    pub fn rect(&self) -> Rect {
        self.position.rect
    }

    /// The reference y used for line-pitch measurement: the baseline where
    /// one was resolved, the bounding-box bottom otherwise.
    pub fn reference_y(&self) -> f32 {
        match self.baseline {
            Some(line) => line.y(),
            None => self.position.rect.min_y,
        }
    }
}
