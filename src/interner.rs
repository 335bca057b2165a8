//! Document-scoped interning of font faces and colors.
//!
//! The upstream interpreter emits one `FontFace`/`Color` per glyph; a page
//! easily repeats the same few thousands of times. The interner dedupes
//! them behind `Arc` so equality checks reduce to pointer-sized value
//! comparisons and the statisticians count shared handles.
//!
//! The table is owned by the caller and scoped to one document: nothing
//! here is a process-wide singleton, so two documents processed back to
//! back cannot leak identities into each other.

use crate::elements::{Color, FontFace};
use indexmap::IndexMap;
use std::sync::Arc;

/// Deduplication table for typographic attributes, one per document.
#[derive(Debug, Default)]
pub struct Interner {
    font_faces: IndexMap<(String, u32), Arc<FontFace>>,
    colors: IndexMap<(u32, u32, u32), Arc<Color>>,
}

impl Interner {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a font face keyed by base name and exact size.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_layout::interner::Interner;
    ///
    /// let mut interner = Interner::new();
    /// let a = interner.font_face("Times-Roman", 12.0);
    /// let b = interner.font_face("Times-Roman", 12.0);
    /// assert!(std::sync::Arc::ptr_eq(&a, &b));
    /// ```
    pub fn font_face(&mut self, name: &str, size: f32) -> Arc<FontFace> {
        let key = (name.to_string(), size.to_bits());
        Arc::clone(
            self.font_faces
                .entry(key)
                .or_insert_with(|| Arc::new(FontFace::new(name, size))),
        )
    }

    /// Intern a color keyed by exact RGB channels.
    pub fn color(&mut self, r: f32, g: f32, b: f32) -> Arc<Color> {
        let key = (r.to_bits(), g.to_bits(), b.to_bits());
        Arc::clone(
            self.colors
                .entry(key)
                .or_insert_with(|| Arc::new(Color::new(r, g, b))),
        )
    }

    /// Number of distinct font faces interned so far.
    pub fn font_face_count(&self) -> usize {
        self.font_faces.len()
    }

    /// Number of distinct colors interned so far.
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }
}
