//! The document-level orchestration of the tokenization stages.
//!
//! The reference flow is single-threaded and two-phase, per page:
//!
//! ```text
//! Document (pages of Character/Figure/Shape)
//!     ↓ checkpoint: per-page character statistics, document aggregate
//! [text_lines] characters → TextLine[]   (XY-cut, horizontal first)
//! [words]      line chars → Word[]       (XY-cut, vertical only)
//!     ↓ per-page line statistics folded into the document statistic
//! [text_blocks] lines → TextBlock[]      (rule cascade)
//!     ↓ RoleClassifier tags each block
//! [paragraphs] BODY_TEXT blocks → Paragraph[]
//! ```
//!
//! All statistics consumed by a stage are frozen before that stage runs;
//! the document line statistic grows page by page, so page *n*'s word
//! tokenization sees the whitespace widths of pages 1..n-1.

use crate::document::{Document, DocumentLayout, PageLayout};
use crate::elements::{Role, TextBlock};
use crate::error::Result;
use crate::layout::{paragraphs, text_blocks, text_lines, TokenizerContext};
use crate::statistics::{CharacterStatistic, TextLineStatistic};

/// Assigns a semantic role to each text block.
///
/// Role classification is a collaborator concern: the layout core consumes
/// roles read-only in the paragraph assembler. Implementations must tag
/// every block with, at minimum, a distinguishable [`Role::BodyText`]
/// versus everything else.
pub trait RoleClassifier {
    /// Classify one block.
    fn classify(&self, block: &TextBlock) -> Role;
}

/// The trivial classifier: every block is body text.
///
/// This keeps the pipeline usable end-to-end without an external
/// classifier; callers with a real classifier plug it in via
/// [`LayoutPipeline::with_classifier`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyTextClassifier;

impl RoleClassifier for BodyTextClassifier {
    fn classify(&self, _block: &TextBlock) -> Role {
        Role::BodyText
    }
}

/// The layout reconstruction pipeline.
pub struct LayoutPipeline {
    classifier: Box<dyn RoleClassifier>,
}

impl LayoutPipeline {
    /// Create a pipeline with the trivial body-text classifier.
    pub fn new() -> Self {
        Self::with_classifier(Box::new(BodyTextClassifier))
    }

    /// Create a pipeline with a custom role classifier.
    pub fn with_classifier(classifier: Box<dyn RoleClassifier>) -> Self {
        Self { classifier }
    }

    /// Reconstruct the layout of a whole document.
    ///
    /// Pages are processed strictly in order. The computation is pure and
    /// terminating; the only error class is an XY-cut invariant violation,
    /// which indicates a bug rather than bad input.
    pub fn process(&self, document: &mut Document) -> Result<DocumentLayout> {
        // Checkpoint: freeze per-page and document-wide character
        // statistics before any tokenization.
        for page in &mut document.pages {
            page.recompute_statistic();
        }
        let document_statistic =
            CharacterStatistic::aggregate(document.pages.iter().filter_map(|p| p.statistic()));

        let mut line_statistic = TextLineStatistic::new();
        let mut pages = Vec::with_capacity(document.pages.len());
        let empty = CharacterStatistic::new();

        for page in &document.pages {
            let ctx = TokenizerContext {
                document: &document_statistic,
                page: page.statistic().unwrap_or(&empty),
                lines: if line_statistic.is_empty() {
                    None
                } else {
                    Some(&line_statistic)
                },
            };
            let lines = text_lines::tokenize(page.characters.clone(), ctx)?;
            log::debug!("page {}: {} text lines", page.number, lines.len());

            let page_line_statistic = TextLineStatistic::compute(&lines);
            line_statistic.merge(&page_line_statistic);

            let mut blocks = text_blocks::tokenize(lines, &line_statistic);
            for block in &mut blocks {
                block.role = self.classifier.classify(block);
            }
            log::debug!("page {}: {} text blocks", page.number, blocks.len());

            pages.push(PageLayout {
                number: page.number,
                blocks,
                figures: page.figures.clone(),
                shapes: page.shapes.clone(),
            });
        }

        let paragraphs = paragraphs::assemble(&pages);
        log::debug!("document: {} paragraphs", paragraphs.len());

        Ok(DocumentLayout {
            pages,
            paragraphs,
            character_statistic: document_statistic,
            text_line_statistic: line_statistic,
        })
    }
}

impl Default for LayoutPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Page;
    use crate::elements::{Character, Color, FontFace, Position};
    use crate::geometry::Rect;
    use std::sync::Arc;

    fn page_with_rows(number: u32, rows: &[(&str, f32)]) -> Page {
        let mut page = Page::new(number);
        let face = Arc::new(FontFace::new("Times", 12.0));
        let color = Arc::new(Color::black());
        let mut sequence = 0;
        for (text, y) in rows {
            for (i, c) in text.chars().enumerate() {
                let x = i as f32 * 6.0;
                page.characters.push(Character::new(
                    c.to_string(),
                    Position::new(number, Rect::new(x, *y, x + 6.0, *y + 10.0)),
                    Arc::clone(&face),
                    Arc::clone(&color),
                    sequence,
                ));
                sequence += 1;
            }
        }
        page
    }

    #[test]
    fn test_empty_document() {
        let mut document = Document::new();
        let layout = LayoutPipeline::new().process(&mut document).unwrap();
        assert!(layout.pages.is_empty());
        assert!(layout.paragraphs.is_empty());
    }

    #[test]
    fn test_empty_page_degrades_to_no_output() {
        let mut document = Document::new();
        document.push_page(Page::new(1));
        let layout = LayoutPipeline::new().process(&mut document).unwrap();
        assert_eq!(layout.pages.len(), 1);
        assert!(layout.pages[0].blocks.is_empty());
        assert!(layout.paragraphs.is_empty());
    }

    #[test]
    fn test_single_block_page() {
        let mut document = Document::new();
        document.push_page(page_with_rows(
            1,
            &[("first line", 24.0), ("second line", 0.0)],
        ));

        let layout = LayoutPipeline::new().process(&mut document).unwrap();
        assert_eq!(layout.pages[0].blocks.len(), 1);
        assert_eq!(layout.paragraphs.len(), 1);
        assert_eq!(layout.paragraphs[0].text, "first line second line");
    }

    struct NothingIsBody;

    impl RoleClassifier for NothingIsBody {
        fn classify(&self, _block: &TextBlock) -> Role {
            Role::Other
        }
    }

    #[test]
    fn test_custom_classifier_suppresses_paragraphs() {
        let mut document = Document::new();
        document.push_page(page_with_rows(1, &[("some text", 0.0)]));

        let pipeline = LayoutPipeline::with_classifier(Box::new(NothingIsBody));
        let layout = pipeline.process(&mut document).unwrap();
        assert_eq!(layout.pages[0].blocks.len(), 1);
        assert!(layout.paragraphs.is_empty());
    }
}
