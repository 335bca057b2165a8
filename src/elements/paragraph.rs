//! Paragraphs: the final text output unit.

use crate::elements::{Position, Word};
use serde::Serialize;

/// A run of body-text words assembled from one block (see
/// [`crate::layout::paragraphs`]).
#[derive(Debug, Clone, Serialize)]
pub struct Paragraph {
    /// Words of the paragraph, in reading order; hyphenated line-break
    /// fragments arrive merged and flagged `is_dehyphenated`
    pub words: Vec<Word>,
    /// Synthesized text, words joined by single spaces
    pub text: String,
    /// Page-scoped bounding box of the source block
    pub position: Position,
}

impl Paragraph {
    /// Build a paragraph from assembled words.
    ///
    /// Returns `None` for an empty word list.
    pub fn from_words(words: Vec<Word>, position: Position) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        let text = words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Some(Self {
            words,
            text,
            position,
        })
    }
}
