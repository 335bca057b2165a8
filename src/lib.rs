// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]
#![allow(clippy::needless_range_loop)]
#![warn(missing_docs)]

//! # pdf_layout
//!
//! Reading-order layout reconstruction from the raw geometric output of a
//! PDF content-stream interpreter: an unordered set of glyphs with
//! positions, font faces and colors goes in; words, text lines, text
//! blocks and paragraphs in human reading order come out.
//!
//! The hard problem is not PDF parsing (that stays with the interpreter)
//! but recovering the reading structure with no ground truth about
//! columns, lines or paragraphs. The crate solves it with a recursive
//! space-partitioning algorithm (XY-cut) driven by frequency statistics
//! computed from the document itself:
//!
//! - [`layout::xy_cut`]: the generic recursive lane-sweep partitioner
//! - [`statistics`]: glyph and line frequency distributions used as
//!   calibration constants by every stage
//! - [`layout::text_lines`] / [`layout::words`]: XY-cut instantiations
//!   grouping characters into lines and line characters into words
//! - [`layout::text_blocks`]: a ten-rule cascade grouping lines into
//!   blocks
//! - [`layout::paragraphs`]: body-text paragraph assembly with
//!   dehyphenation
//!
//! ## Quick start
//!
//! ```
//! use pdf_layout::{Character, Document, LayoutPipeline, Page, Position};
//! use pdf_layout::geometry::Rect;
//! use pdf_layout::interner::Interner;
//!
//! # fn main() -> pdf_layout::Result<()> {
//! let mut interner = Interner::new();
//! let face = interner.font_face("Times-Roman", 12.0);
//! let black = interner.color(0.0, 0.0, 0.0);
//!
//! let mut page = Page::new(1);
//! for (i, c) in "Hi".chars().enumerate() {
//!     let x = i as f32 * 6.0;
//!     page.characters.push(Character::new(
//!         c.to_string(),
//!         Position::new(1, Rect::new(x, 700.0, x + 6.0, 710.0)),
//!         face.clone(),
//!         black.clone(),
//!         i,
//!     ));
//! }
//!
//! let mut document = Document::new();
//! document.push_page(page);
//!
//! let layout = LayoutPipeline::new().process(&mut document)?;
//! assert_eq!(layout.paragraphs[0].text, "Hi");
//! # Ok(())
//! # }
//! ```
//!
//! ## Design
//!
//! - **Degrade, never fail**: malformed geometry reduces the output to the
//!   minimal sound structure. Undefined statistics disable the heuristics
//!   they calibrate. The only hard errors are XY-cut invariant violations.
//! - **Deterministic**: all frequency counters break ties by first
//!   insertion; re-running the pipeline on the same input yields identical
//!   output.
//! - **Pure per document**: no global state. Font faces and colors are
//!   interned in a caller-owned, document-scoped [`interner::Interner`].

// Error handling
pub mod error;

// Geometry and statistics primitives
pub mod geometry;
pub mod statistics;

// The element model
pub mod elements;
pub mod interner;

// Document containers
pub mod document;

// Segmentation and tokenization
pub mod layout;
pub mod pipeline;

pub use document::{Document, DocumentLayout, Page, PageLayout};
pub use elements::{
    Character, Color, Element, Figure, FontFace, Paragraph, Position, Role, Shape, TextBlock,
    TextLine, Word,
};
pub use error::{Error, Result};
pub use pipeline::{BodyTextClassifier, LayoutPipeline, RoleClassifier};
