//! Input and output containers for whole documents.
//!
//! [`Page`] and [`Document`] hold the interpreter's raw output; the
//! pipeline reads them and produces the write-once [`PageLayout`] /
//! [`DocumentLayout`] structures. Page statistics are recomputed at
//! explicit checkpoints (`recompute_statistic`) rather than tracked with a
//! dirty flag: the pipeline recomputes once per run, and a caller that
//! mutates a page afterwards recomputes before reading.

use crate::elements::{Character, Figure, Paragraph, Shape, TextBlock};
use crate::statistics::{CharacterStatistic, TextLineStatistic};
use serde::Serialize;

/// One page of interpreter output: characters in extraction order plus
/// figures and shapes carried through untouched.
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// 1-based page number
    pub number: u32,
    /// Characters in extraction order
    pub characters: Vec<Character>,
    /// Raster images on the page
    pub figures: Vec<Figure>,
    /// Vector graphics on the page
    pub shapes: Vec<Shape>,
    statistic: Option<CharacterStatistic>,
}

impl Page {
    /// Create an empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            ..Self::default()
        }
    }

    /// Recompute the page's character statistic from its current content.
    ///
    /// Figures and shapes extend the bounding extremes but stay out of the
    /// glyph distributions. Called by the pipeline at the start of every
    /// run; callers that insert characters later must recompute before the
    /// next read, since every tokenizer threshold is calibrated against
    /// this statistic.
    pub fn recompute_statistic(&mut self) {
        let mut stat = CharacterStatistic::compute(&self.characters);
        for figure in &self.figures {
            stat.include_bounds(figure.position.rect);
        }
        for shape in &self.shapes {
            stat.include_bounds(shape.position.rect);
        }
        self.statistic = Some(stat);
    }

    /// The statistic of the last checkpoint, if one was computed.
    pub fn statistic(&self) -> Option<&CharacterStatistic> {
        self.statistic.as_ref()
    }
}

/// A whole document of interpreter output.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Pages in document order
    pub pages: Vec<Page>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page.
    pub fn push_page(&mut self, page: Page) {
        self.pages.push(page);
    }
}

/// The reconstructed layout of one page.
#[derive(Debug, Clone, Serialize)]
pub struct PageLayout {
    /// 1-based page number
    pub number: u32,
    /// Text blocks in reading order, lines and words populated
    pub blocks: Vec<TextBlock>,
    /// Figures carried through from the input page
    pub figures: Vec<Figure>,
    /// Shapes carried through from the input page
    pub shapes: Vec<Shape>,
}

/// The reconstructed layout of a whole document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentLayout {
    /// Per-page layouts in document order
    pub pages: Vec<PageLayout>,
    /// Body-text paragraphs across the whole document
    pub paragraphs: Vec<Paragraph>,
    /// Document-wide character statistic used during tokenization
    #[serde(skip)]
    pub character_statistic: CharacterStatistic,
    /// Document-wide line statistic used during tokenization
    #[serde(skip)]
    pub text_line_statistic: TextLineStatistic,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Color, FontFace, Position};
    use crate::geometry::Rect;
    use std::sync::Arc;

    fn mock_char(x: f32, w: f32, seq: usize) -> Character {
        Character::new(
            "a",
            Position::new(1, Rect::new(x, 0.0, x + w, 10.0)),
            Arc::new(FontFace::new("Times", 12.0)),
            Arc::new(Color::black()),
            seq,
        )
    }

    #[test]
    fn test_statistic_absent_before_checkpoint() {
        let page = Page::new(1);
        assert!(page.statistic().is_none());
    }

    #[test]
    fn test_recompute_reflects_inserted_characters() {
        let mut page = Page::new(1);
        page.characters.push(mock_char(0.0, 6.0, 0));
        page.recompute_statistic();
        assert_eq!(page.statistic().unwrap().most_common_width(), Some(6.0));

        // Insert two wider characters after the checkpoint, recompute, and
        // the next read reflects them.
        page.characters.push(mock_char(6.0, 8.0, 1));
        page.characters.push(mock_char(14.0, 8.0, 2));
        page.recompute_statistic();
        assert_eq!(page.statistic().unwrap().most_common_width(), Some(8.0));
    }

    #[test]
    fn test_figures_extend_bounds_only() {
        let mut page = Page::new(1);
        page.characters.push(mock_char(0.0, 6.0, 0));
        page.figures
            .push(Figure::new(Position::new(1, Rect::new(0.0, 0.0, 300.0, 200.0))));
        page.recompute_statistic();

        let stat = page.statistic().unwrap();
        assert_eq!(stat.count(), 1);
        assert_eq!(stat.bounds(), Some(Rect::new(0.0, 0.0, 300.0, 200.0)));
    }
}
