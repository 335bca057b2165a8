//! Non-text page elements carried through the pipeline untouched.

use crate::elements::{Color, Position};
use serde::Serialize;
use std::sync::Arc;

/// A raster image placed on a page.
///
/// Figures take no part in text segmentation; they only extend a page's
/// bounding extremes.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    /// Page-scoped bounding box
    pub position: Position,
}

impl Figure {
    /// Create a figure.
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

/// A vector graphic (path, rule, border) placed on a page.
#[derive(Debug, Clone, Serialize)]
pub struct Shape {
    /// Page-scoped bounding box
    pub position: Position,
    /// Interned stroke/fill color
    pub color: Arc<Color>,
}

impl Shape {
    /// Create a shape.
    pub fn new(position: Position, color: Arc<Color>) -> Self {
        Self { position, color }
    }
}
