//! Characters and their typographic attributes.

use crate::geometry::Rect;
use serde::Serialize;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A font identity paired with a size in points.
///
/// Font faces are interned per document (see [`crate::interner::Interner`])
/// and shared behind `Arc`, so comparing two characters' faces is cheap.
#[derive(Debug, Clone, Serialize)]
pub struct FontFace {
    /// Font base name (e.g. "Times-Roman")
    pub name: String,
    /// Font size in points
    pub size: f32,
}

impl FontFace {
    /// Create a font face.
    pub fn new(name: impl Into<String>, size: f32) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

impl PartialEq for FontFace {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.size.to_bits() == other.size.to_bits()
    }
}

impl Eq for FontFace {}

impl Hash for FontFace {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.size.to_bits().hash(state);
    }
}

/// An RGB color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

impl Color {
    /// Create a color.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// White.
    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.r.to_bits() == other.r.to_bits()
            && self.g.to_bits() == other.g.to_bits()
            && self.b.to_bits() == other.b.to_bits()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.to_bits().hash(state);
        self.g.to_bits().hash(state);
        self.b.to_bits().hash(state);
    }
}

/// A page-scoped location: an element's rectangle is meaningless without
/// the page it lives on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    /// 1-based page number
    pub page: u32,
    /// Bounding rectangle in page coordinates
    pub rect: Rect,
}

impl Position {
    /// Create a position.
    pub fn new(page: u32, rect: Rect) -> Self {
        Self { page, rect }
    }
}

/// One extracted glyph.
///
/// Characters are produced by the content-stream interpreter and never
/// mutated by the layout core; `sequence` records the original extraction
/// order and serves as the tie-breaker wherever geometry is ambiguous.
///
/// `text` holds the glyph's Unicode string and may be empty for glyphs the
/// interpreter could not decode; such a character occupies space but
/// contributes nothing to synthesized text.
#[derive(Debug, Clone, Serialize)]
pub struct Character {
    /// Decoded Unicode text of the glyph (possibly empty)
    pub text: String,
    /// Page-scoped bounding box
    pub position: Position,
    /// Interned font face
    pub font_face: Arc<FontFace>,
    /// Interned fill color
    pub color: Arc<Color>,
    /// Monotonic extraction order
    pub sequence: usize,
}

/// Lowercase glyphs whose top edge sits at the x-height ("mean line"
/// glyphs). Ascending and descending lowercase letters are excluded.
const MEAN_LINE_GLYPHS: &str = "acemnorsuvwxz";

/// Lowercase glyphs with a descender; every other alphanumeric glyph rests
/// on the baseline.
const DESCENDER_GLYPHS: &str = "gjpqy";

impl Character {
    /// Create a character.
    pub fn new(
        text: impl Into<String>,
        position: Position,
        font_face: Arc<FontFace>,
        color: Arc<Color>,
        sequence: usize,
    ) -> Self {
        Self {
            text: text.into(),
            position,
            font_face,
            color,
            sequence,
        }
    }

    /// The glyph as a single `char`, if the text decodes to exactly one.
    pub fn glyph(&self) -> Option<char> {
        let mut chars = self.text.chars();
        let first = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Some(first)
    }

    /// Whether this glyph rests on the baseline (alphanumeric without a
    /// descender). Used to vote on a text line's baseline y.
    pub fn is_baseline_glyph(&self) -> bool {
        match self.glyph() {
            Some(c) => c.is_ascii_alphanumeric() && !DESCENDER_GLYPHS.contains(c),
            None => false,
        }
    }

    /// Whether this glyph's top edge sits at the x-height. Used to vote on
    /// a text line's mean line y.
    pub fn is_mean_line_glyph(&self) -> bool {
        match self.glyph() {
            Some(c) => MEAN_LINE_GLYPHS.contains(c),
            None => false,
        }
    }

    /// Bounding rectangle shorthand.
    pub fn rect(&self) -> Rect {
        self.position.rect
    }
}
