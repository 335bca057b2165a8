//! Property tests for the XY-cut engine: partition and termination.

use pdf_layout::geometry::Rect;
use pdf_layout::layout::{xy_cut, Axis, CutRules};
use pdf_layout::Result;
use proptest::prelude::*;

/// Minimal rules: any empty 5-unit strip is a lane, groups pack as plain
/// vectors.
struct EmptyLaneRules;

impl CutRules for EmptyLaneRules {
    type Element = Rect;
    type Output = Vec<Rect>;

    fn lane_span(&self, _axis: Axis, _elements: &[Rect]) -> Option<f32> {
        Some(5.0)
    }

    fn is_valid_lane(
        &self,
        _axis: Axis,
        _leading: &[&Rect],
        inside: &[&Rect],
        _trailing: &[&Rect],
    ) -> bool {
        inside.is_empty()
    }

    fn pack(&self, elements: Vec<Rect>) -> Result<Option<Vec<Rect>>> {
        Ok(Some(elements))
    }
}

fn key(rect: &Rect) -> (i64, i64, i64, i64) {
    (
        (rect.min_x * 10.0) as i64,
        (rect.min_y * 10.0) as i64,
        (rect.max_x * 10.0) as i64,
        (rect.max_y * 10.0) as i64,
    )
}

proptest! {
    /// Every input element appears in exactly one output group, for any
    /// finite non-empty input, and the recursion terminates (the test
    /// completing is the termination proof for the sampled inputs).
    #[test]
    fn cut_partitions_every_element(
        cells in prop::collection::vec((0u32..30, 0u32..30), 1..60)
    ) {
        let elements: Vec<Rect> = cells
            .iter()
            .map(|(i, j)| {
                let x = *i as f32 * 7.0;
                let y = *j as f32 * 7.0;
                Rect::new(x, y, x + 6.0, y + 6.0)
            })
            .collect();

        let groups = xy_cut::cut(&EmptyLaneRules, elements.clone()).unwrap();

        prop_assert!(groups.iter().all(|g| !g.is_empty()));

        let mut output: Vec<_> = groups.iter().flatten().map(key).collect();
        let mut input: Vec<_> = elements.iter().map(key).collect();
        output.sort_unstable();
        input.sort_unstable();
        prop_assert_eq!(output, input);
    }

    /// A singleton set is packed as-is, never split further.
    #[test]
    fn singleton_is_packed_unsplit(x in 0.0f32..500.0, y in 0.0f32..500.0) {
        let element = Rect::new(x, y, x + 10.0, y + 10.0);
        let groups = xy_cut::cut(&EmptyLaneRules, vec![element]).unwrap();
        prop_assert_eq!(groups, vec![vec![element]]);
    }

    /// Re-running the cut over the same input yields the same groups in
    /// the same order.
    #[test]
    fn cut_is_deterministic(
        cells in prop::collection::vec((0u32..20, 0u32..20), 1..40)
    ) {
        let elements: Vec<Rect> = cells
            .iter()
            .map(|(i, j)| {
                let x = *i as f32 * 9.0;
                let y = *j as f32 * 9.0;
                Rect::new(x, y, x + 6.0, y + 6.0)
            })
            .collect();

        let first = xy_cut::cut(&EmptyLaneRules, elements.clone()).unwrap();
        let second = xy_cut::cut(&EmptyLaneRules, elements).unwrap();
        prop_assert_eq!(first, second);
    }
}
