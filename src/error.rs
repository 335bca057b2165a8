//! Error types for the layout reconstruction core.
//!
//! The core is designed to degrade on malformed geometry instead of failing:
//! empty pages, missing statistics, and zero-area rectangles all reduce the
//! output to the minimal sound structure. The only hard failures are
//! invariant violations inside the XY-cut engine, which indicate a bug in
//! the engine rather than bad input.

use crate::layout::Axis;

/// Result type alias for layout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during layout reconstruction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The XY-cut engine produced a lane with zero or negative span.
    #[error("XY-cut produced an invalid {axis} lane with span {span}")]
    InvalidLane {
        /// Axis of the degenerate lane
        axis: Axis,
        /// Lane width (vertical) or height (horizontal)
        span: f32,
    },

    /// A cut was accepted but one side of the split received no elements,
    /// so recursion would not make progress.
    #[error("XY-cut made no progress splitting {elements} elements along a {axis} lane")]
    CutStalled {
        /// Axis of the accepted lane
        axis: Axis,
        /// Number of elements in the unsplittable set
        elements: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_lane_message() {
        let err = Error::InvalidLane {
            axis: Axis::Vertical,
            span: -3.0,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("invalid vertical lane"));
        assert!(msg.contains("-3"));
    }

    #[test]
    fn test_cut_stalled_message() {
        let err = Error::CutStalled {
            axis: Axis::Horizontal,
            elements: 12,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("no progress"));
        assert!(msg.contains("12"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
