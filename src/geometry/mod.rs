//! Geometric primitives for layout analysis.
//!
//! Coordinates follow the PDF page space: origin at the lower-left corner,
//! y increasing upward. Rectangles are stored as min/max corner pairs since
//! the cut engine reasons about edges, not widths.

use serde::Serialize;

/// A 2D point in page space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A line segment between two points.
///
/// Baselines and mean lines are horizontal segments spanning a text line's
/// x-extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    /// Start point of the segment
    pub start: Point,
    /// End point of the segment
    pub end: Point,
}

impl Line {
    /// Create a line segment between two points.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a horizontal segment at height `y` spanning `[x0, x1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_layout::geometry::Line;
    ///
    /// let baseline = Line::horizontal(100.0, 72.0, 540.0);
    /// assert_eq!(baseline.start.y, 100.0);
    /// assert_eq!(baseline.end.y, 100.0);
    /// ```
    pub fn horizontal(y: f32, x0: f32, x1: f32) -> Self {
        Self {
            start: Point::new(x0, y),
            end: Point::new(x1, y),
        }
    }

    /// The y coordinate of a horizontal segment (start y by convention).
    pub fn y(&self) -> f32 {
        self.start.y
    }
}

/// An axis-aligned rectangle in page space.
///
/// Invariant: `min_x <= max_x` and `min_y <= max_y`. The constructor
/// normalizes swapped corners rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    /// Left edge
    pub min_x: f32,
    /// Bottom edge
    pub min_y: f32,
    /// Right edge
    pub max_x: f32,
    /// Top edge
    pub max_y: f32,
}

impl Rect {
    /// Create a rectangle from two corner points, normalizing the order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_layout::geometry::Rect;
    ///
    /// let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
    /// assert_eq!(rect.width(), 100.0);
    /// assert_eq!(rect.height(), 50.0);
    /// ```
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x: min_x.min(max_x),
            min_y: min_y.min(max_y),
            max_x: min_x.max(max_x),
            max_y: min_y.max(max_y),
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Area of the rectangle.
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Smallest rectangle containing both rectangles.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_layout::geometry::Rect;
    ///
    /// let a = Rect::new(0.0, 0.0, 50.0, 50.0);
    /// let b = Rect::new(25.0, 25.0, 75.0, 75.0);
    /// let u = a.union(&b);
    /// assert_eq!(u, Rect::new(0.0, 0.0, 75.0, 75.0));
    /// ```
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Intersection of two rectangles, or `None` if they do not overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let min_x = self.min_x.max(other.min_x);
        let min_y = self.min_y.max(other.min_y);
        let max_x = self.max_x.min(other.max_x);
        let max_y = self.max_y.min(other.max_y);
        if min_x < max_x && min_y < max_y {
            Some(Rect {
                min_x,
                min_y,
                max_x,
                max_y,
            })
        } else {
            None
        }
    }

    /// Check whether two rectangles overlap with positive area.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlaps_horizontally(other) && self.overlaps_vertically(other)
    }

    /// Check whether the x-ranges of two rectangles intersect.
    ///
    /// Touching edges count as overlap; the block cascade treats a shared
    /// column boundary as the same column.
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.min_x <= other.max_x && self.max_x >= other.min_x
    }

    /// Check whether the y-ranges of two rectangles intersect.
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.min_y <= other.max_y && self.max_y >= other.min_y
    }

    /// Ratio of the intersection area to the area of this rectangle.
    ///
    /// Returns 0.0 for disjoint rectangles and for a degenerate (zero-area)
    /// receiver.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_layout::geometry::Rect;
    ///
    /// let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// let b = Rect::new(5.0, 0.0, 15.0, 10.0);
    /// assert_eq!(a.overlap_ratio(&b), 0.5);
    /// ```
    pub fn overlap_ratio(&self, other: &Rect) -> f32 {
        let area = self.area();
        if area <= 0.0 {
            return 0.0;
        }
        match self.intersection(other) {
            Some(i) => i.area() / area,
            None => 0.0,
        }
    }

    /// Bounding rectangle of a collection, or `None` for an empty one.
    pub fn bounding<I>(rects: I) -> Option<Rect>
    where
        I: IntoIterator<Item = Rect>,
    {
        rects.into_iter().reduce(|acc, r| acc.union(&r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_normalizes_corners() {
        let r = Rect::new(110.0, 70.0, 10.0, 20.0);
        assert_eq!(r.min_x, 10.0);
        assert_eq!(r.min_y, 20.0);
        assert_eq!(r.max_x, 110.0);
        assert_eq!(r.max_y, 70.0);
    }

    #[test]
    fn test_rect_center() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        let c = r.center();
        assert_eq!(c.x, 50.0);
        assert_eq!(c.y, 25.0);
    }

    #[test]
    fn test_rect_union() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(25.0, 25.0, 75.0, 75.0);
        assert_eq!(a.union(&b), Rect::new(0.0, 0.0, 75.0, 75.0));
    }

    #[test]
    fn test_rect_intersection() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 15.0, 15.0);
        assert_eq!(a.intersection(&b), Some(Rect::new(5.0, 5.0, 10.0, 10.0)));

        let c = Rect::new(20.0, 20.0, 30.0, 30.0);
        assert_eq!(a.intersection(&c), None);
    }

    #[test]
    fn test_overlap_predicates() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 20.0, 15.0, 30.0);

        assert!(a.overlaps_horizontally(&b));
        assert!(!a.overlaps_vertically(&b));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_overlap_ratio_degenerate() {
        let zero = Rect::new(5.0, 5.0, 5.0, 5.0);
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(zero.overlap_ratio(&r), 0.0);
    }

    #[test]
    fn test_bounding() {
        let rects = vec![
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(20.0, 5.0, 30.0, 15.0),
        ];
        assert_eq!(
            Rect::bounding(rects),
            Some(Rect::new(0.0, 0.0, 30.0, 15.0))
        );
        assert_eq!(Rect::bounding(Vec::new()), None);
    }

    #[test]
    fn test_horizontal_line() {
        let l = Line::horizontal(42.0, 0.0, 100.0);
        assert_eq!(l.y(), 42.0);
        assert_eq!(l.end.x, 100.0);
    }
}
