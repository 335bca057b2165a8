//! The element model: characters, words, lines, blocks, paragraphs, and
//! non-text page content.
//!
//! All element kinds are gathered in the [`Element`] tagged union with
//! capability accessors implemented per variant, so downstream consumers
//! can pattern match exhaustively instead of probing a lattice of
//! "has-text" / "has-position" style interfaces.

mod character;
mod graphics;
mod paragraph;
mod text_block;
mod text_line;
mod word;

pub use character::{Character, Color, FontFace, Position};
pub use graphics::{Figure, Shape};
pub use paragraph::Paragraph;
pub use text_block::{Role, TextBlock};
pub use text_line::TextLine;
pub use word::Word;

use crate::geometry::Rect;
use serde::Serialize;

/// Any page element, text or otherwise.
#[derive(Debug, Clone, Serialize)]
pub enum Element {
    /// A single glyph
    Character(Character),
    /// An x-ordered character run
    Word(Word),
    /// A horizontal run of words
    TextLine(TextLine),
    /// A group of consecutive lines
    TextBlock(TextBlock),
    /// A raster image
    Figure(Figure),
    /// A vector graphic
    Shape(Shape),
}

impl Element {
    /// Page-scoped position of the element.
    pub fn position(&self) -> Position {
        match self {
            Element::Character(c) => c.position,
            Element::Word(w) => w.position,
            Element::TextLine(l) => l.position,
            Element::TextBlock(b) => b.position,
            Element::Figure(f) => f.position,
            Element::Shape(s) => s.position,
        }
    }

    /// Bounding rectangle of the element.
    pub fn rect(&self) -> Rect {
        self.position().rect
    }

    /// Resolved text, for the variants that carry any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Element::Character(c) => Some(&c.text),
            Element::Word(w) => Some(&w.text),
            Element::TextLine(l) => Some(&l.text),
            Element::TextBlock(b) => Some(&b.text),
            Element::Figure(_) | Element::Shape(_) => None,
        }
    }
}
