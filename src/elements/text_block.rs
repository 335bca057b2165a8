//! Text blocks and semantic roles.

use crate::elements::{Position, TextLine};
use crate::geometry::Rect;
use serde::Serialize;

/// Semantic role of a text block.
///
/// Roles are assigned by a classifier outside the layout core (see
/// [`crate::pipeline::RoleClassifier`]); the paragraph assembler consumes
/// them read-only and emits paragraphs for [`Role::BodyText`] blocks only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    /// Continuous body text; the only role the paragraph assembler keeps
    BodyText,
    /// Section or document heading
    Heading,
    /// Figure or table caption
    Caption,
    /// Footnote text
    Footnote,
    /// Bibliography / reference entry
    Reference,
    /// Running page header
    PageHeader,
    /// Running page footer
    PageFooter,
    /// Anything not classified
    Other,
}

/// A group of consecutive text lines delimited by the block cascade.
#[derive(Debug, Clone, Serialize)]
pub struct TextBlock {
    /// Lines of the block, in reading order
    pub lines: Vec<TextLine>,
    /// Synthesized text, line texts joined by single spaces
    pub text: String,
    /// Page-scoped union bounding box
    pub position: Position,
    /// Semantic role assigned by an external classifier
    pub role: Role,
}

impl TextBlock {
    /// Build a block from consecutive lines. Returns `None` for an empty
    /// line list. The role starts as [`Role::Other`] until a classifier
    /// runs.
    pub fn from_lines(lines: Vec<TextLine>) -> Option<Self> {
        if lines.is_empty() {
            return None;
        }
        let text = lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let rect = Rect::bounding(lines.iter().map(|l| l.rect()))
            .expect("non-empty line list has bounds");
        let page = lines[0].position.page;

        Some(Self {
            lines,
            text,
            position: Position::new(page, rect),
            role: Role::Other,
        })
    }

    /// Bounding rectangle shorthand.
    pub fn rect(&self) -> Rect {
        self.position.rect
    }
}
