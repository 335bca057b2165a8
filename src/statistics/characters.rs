//! Derived statistics over a list of characters.

use crate::elements::{Character, Color, FontFace};
use crate::geometry::Rect;
use crate::statistics::{FloatCounter, ObjectCounter};
use std::sync::Arc;

/// Frequency distributions and bounding extremes of a character list.
///
/// Computed once per word, per line, per page, and once for the document;
/// the document aggregate is built by merging page counters, never by
/// rescanning raw characters. Every downstream threshold (lane widths,
/// lane heights, pitch tolerances) is calibrated against the most-common
/// values held here, making a stale statistic a correctness bug; the
/// owning containers recompute at explicit checkpoints instead of caching
/// lazily.
#[derive(Debug, Clone, Default)]
pub struct CharacterStatistic {
    heights: FloatCounter,
    widths: FloatCounter,
    font_sizes: FloatCounter,
    font_faces: ObjectCounter<Arc<FontFace>>,
    colors: ObjectCounter<Arc<Color>>,
    bounds: Option<Rect>,
}

impl CharacterStatistic {
    /// Create an empty statistic.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the statistic of a character list.
    pub fn compute(characters: &[Character]) -> Self {
        let mut stat = Self::new();
        for c in characters {
            let rect = c.rect();
            stat.heights.add(rect.height());
            stat.widths.add(rect.width());
            stat.font_sizes.add(c.font_face.size);
            stat.font_faces.add(Arc::clone(&c.font_face));
            stat.colors.add(Arc::clone(&c.color));
            stat.include_bounds(rect);
        }
        stat
    }

    /// Merge the statistics of several pages into a document statistic by
    /// summing the underlying counters.
    pub fn aggregate<'a, I>(stats: I) -> Self
    where
        I: IntoIterator<Item = &'a CharacterStatistic>,
    {
        let mut out = Self::new();
        for s in stats {
            out.merge(s);
        }
        out
    }

    /// Fold another statistic into this one.
    pub fn merge(&mut self, other: &CharacterStatistic) {
        self.heights.merge(&other.heights);
        self.widths.merge(&other.widths);
        self.font_sizes.merge(&other.font_sizes);
        self.font_faces.merge(&other.font_faces);
        self.colors.merge(&other.colors);
        if let Some(rect) = other.bounds {
            self.include_bounds(rect);
        }
    }

    /// Extend the bounding extremes by a rectangle.
    ///
    /// Figures and shapes participate in a page's extremes this way without
    /// entering the glyph distributions.
    pub fn include_bounds(&mut self, rect: Rect) {
        self.bounds = Some(match self.bounds {
            Some(b) => b.union(&rect),
            None => rect,
        });
    }

    /// Most common glyph height, if any glyph was counted.
    pub fn most_common_height(&self) -> Option<f32> {
        self.heights.most_common()
    }

    /// Most common glyph width, if any glyph was counted.
    pub fn most_common_width(&self) -> Option<f32> {
        self.widths.most_common()
    }

    /// Most common font size in points.
    pub fn most_common_font_size(&self) -> Option<f32> {
        self.font_sizes.most_common()
    }

    /// Most common font face.
    pub fn most_common_font_face(&self) -> Option<&Arc<FontFace>> {
        self.font_faces.most_common()
    }

    /// Most common color.
    pub fn most_common_color(&self) -> Option<&Arc<Color>> {
        self.colors.most_common()
    }

    /// Average glyph height.
    pub fn average_height(&self) -> Option<f32> {
        self.heights.average()
    }

    /// Average glyph width.
    pub fn average_width(&self) -> Option<f32> {
        self.widths.average()
    }

    /// Bounding extremes of everything counted, `None` if empty.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Number of characters that entered the distributions.
    pub fn count(&self) -> usize {
        self.heights.total()
    }
}
