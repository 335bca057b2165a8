//! Generic recursive XY-cut over positioned elements.
//!
//! The engine repeatedly tries to split an element collection along a
//! "lane", an empty rectangular strip wide enough to be a structural gap
//! rather than ordinary spacing, recursing until no valid lane remains,
//! then packs each atomic group through a caller-supplied hook. What
//! counts as a valid lane, how wide a lane must be, and which axis is
//! tried first are all supplied per call through [`CutRules`], so the same
//! engine drives both the line tokenizer and the word tokenizer.
//!
//! The recursion is pure: owned input, owned output, no shared traversal
//! state. Leaf groups are emitted in pre-order (full left/upper subtree
//! before the right/lower one), which approximates reading order.

use crate::elements::Character;
use crate::error::{Error, Result};
use crate::geometry::Rect;
use std::fmt;

/// Distance the probe lane advances between sweep positions.
const SWEEP_STEP: f32 = 1.0;

/// Slack for floating-point edge comparisons during the sweep.
const EPS: f32 = 1e-4;

/// Axis of a cut lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// A vertical lane splitting left from right
    Vertical,
    /// A horizontal lane splitting upper from lower
    Horizontal,
}

impl Axis {
    /// The other axis.
    pub fn opposite(self) -> Axis {
        match self {
            Axis::Vertical => Axis::Horizontal,
            Axis::Horizontal => Axis::Vertical,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Vertical => write!(f, "vertical"),
            Axis::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// An accepted cut lane: the widest contiguous run of valid probe
/// positions, expanded before acceptance.
#[derive(Debug, Clone, Copy)]
pub struct Lane {
    /// Axis of the lane
    pub axis: Axis,
    /// The empty strip, spanning the collection bounds on the other axis
    pub rect: Rect,
}

/// Anything with a bounding rectangle the engine can partition.
pub trait Bounded {
    /// Bounding rectangle of the element.
    fn bounds(&self) -> Rect;
}

impl Bounded for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

impl Bounded for Character {
    fn bounds(&self) -> Rect {
        self.position.rect
    }
}

/// Pluggable lane rules and packing hook parameterizing one cut run.
pub trait CutRules {
    /// Element type being partitioned.
    type Element: Bounded;
    /// Packed output produced per atomic group.
    type Output;

    /// Axis tried first at every recursion step.
    fn first_axis(&self) -> Axis {
        Axis::Vertical
    }

    /// Minimum lane span (width for vertical, height for horizontal) for
    /// the given axis, or `None` to disable cutting along that axis.
    ///
    /// Returning `None` is the degraded path for undefined statistics: no
    /// calibration value means no cut, never a guessed cut.
    fn lane_span(&self, axis: Axis, elements: &[Self::Element]) -> Option<f32>;

    /// Whether a probe lane position is valid.
    ///
    /// `leading` holds the elements left of a vertical lane (above a
    /// horizontal one), `inside` those overlapping the lane strip, and
    /// `trailing` the rest.
    fn is_valid_lane(
        &self,
        axis: Axis,
        leading: &[&Self::Element],
        inside: &[&Self::Element],
        trailing: &[&Self::Element],
    ) -> bool;

    /// Pack an atomic group into one output value.
    fn pack(&self, elements: Vec<Self::Element>) -> Result<Option<Self::Output>>;
}

/// Recursively cut `elements` into packed atomic groups, in pre-order.
///
/// Every input element ends up in exactly one packed group; a singleton
/// collection is packed without further splitting; an empty collection
/// yields no groups.
pub fn cut<R: CutRules>(rules: &R, elements: Vec<R::Element>) -> Result<Vec<R::Output>> {
    let mut out = Vec::new();
    cut_into(rules, elements, 0, &mut out)?;
    Ok(out)
}

fn cut_into<R: CutRules>(
    rules: &R,
    elements: Vec<R::Element>,
    depth: usize,
    out: &mut Vec<R::Output>,
) -> Result<()> {
    if elements.is_empty() {
        return Ok(());
    }
    if elements.len() == 1 {
        if let Some(packed) = rules.pack(elements)? {
            out.push(packed);
        }
        return Ok(());
    }

    let bounds = Rect::bounding(elements.iter().map(|e| e.bounds()))
        .expect("non-empty collection has bounds");

    let first = rules.first_axis();
    for axis in [first, first.opposite()] {
        if let Some(lane) = find_lane(rules, axis, &elements, bounds)? {
            log::trace!(
                "xy-cut depth {}: {} lane [{:.1}, {:.1}] over {} elements",
                depth,
                axis,
                match axis {
                    Axis::Vertical => lane.rect.min_x,
                    Axis::Horizontal => lane.rect.min_y,
                },
                match axis {
                    Axis::Vertical => lane.rect.max_x,
                    Axis::Horizontal => lane.rect.max_y,
                },
                elements.len()
            );

            let count = elements.len();
            let (head, tail) = split(elements, &lane);
            if head.is_empty() || tail.is_empty() {
                return Err(Error::CutStalled {
                    axis,
                    elements: count,
                });
            }
            cut_into(rules, head, depth + 1, out)?;
            cut_into(rules, tail, depth + 1, out)?;
            return Ok(());
        }
    }

    if let Some(packed) = rules.pack(elements)? {
        out.push(packed);
    }
    Ok(())
}

/// Sweep a probe lane across the bounding rectangle and return the first
/// fully-expanded valid lane, if any.
///
/// The sweep runs left-to-right for vertical lanes and top-to-bottom for
/// horizontal ones. A run of consecutive valid probe positions is expanded
/// until the next position is invalid or the sweep ends, then accepted as
/// one lane; a lane narrower than the probe span is rejected.
fn find_lane<R: CutRules>(
    rules: &R,
    axis: Axis,
    elements: &[R::Element],
    bounds: Rect,
) -> Result<Option<Lane>> {
    let span = match rules.lane_span(axis, elements) {
        Some(span) => span,
        None => return Ok(None),
    };
    if !span.is_finite() || span <= 0.0 {
        return Err(Error::InvalidLane { axis, span });
    }

    let (start, end, step) = match axis {
        Axis::Vertical => (bounds.min_x, bounds.max_x - span, SWEEP_STEP),
        Axis::Horizontal => (bounds.max_y - span, bounds.min_y, -SWEEP_STEP),
    };
    // The probe must fit inside the bounds at least once.
    if (step > 0.0 && start > end) || (step < 0.0 && start < end) {
        return Ok(None);
    }

    let mut run: Option<(f32, f32)> = None;
    let mut pos = start;
    loop {
        let probe = probe_rect(axis, pos, span, bounds);
        if is_valid_probe(rules, axis, elements, probe) {
            run = Some(match run {
                Some((first, _)) => (first, pos),
                None => (pos, pos),
            });
        } else if let Some((first, last)) = run.take() {
            if let Some(lane) = finish_run(axis, span, first, last, bounds) {
                return Ok(Some(lane));
            }
        }

        let next = pos + step;
        let done = if step > 0.0 {
            next > end + EPS
        } else {
            next < end - EPS
        };
        if done {
            break;
        }
        pos = next;
    }

    if let Some((first, last)) = run {
        if let Some(lane) = finish_run(axis, span, first, last, bounds) {
            return Ok(Some(lane));
        }
    }
    Ok(None)
}

fn probe_rect(axis: Axis, pos: f32, span: f32, bounds: Rect) -> Rect {
    match axis {
        Axis::Vertical => Rect::new(pos, bounds.min_y, pos + span, bounds.max_y),
        Axis::Horizontal => Rect::new(bounds.min_x, pos, bounds.max_x, pos + span),
    }
}

fn is_valid_probe<R: CutRules>(
    rules: &R,
    axis: Axis,
    elements: &[R::Element],
    probe: Rect,
) -> bool {
    let mut leading = Vec::new();
    let mut inside = Vec::new();
    let mut trailing = Vec::new();
    for element in elements {
        let rect = element.bounds();
        match axis {
            Axis::Vertical => {
                if rect.max_x <= probe.min_x + EPS {
                    leading.push(element);
                } else if rect.min_x >= probe.max_x - EPS {
                    trailing.push(element);
                } else {
                    inside.push(element);
                }
            }
            Axis::Horizontal => {
                if rect.min_y >= probe.max_y - EPS {
                    leading.push(element);
                } else if rect.max_y <= probe.min_y + EPS {
                    trailing.push(element);
                } else {
                    inside.push(element);
                }
            }
        }
    }
    rules.is_valid_lane(axis, &leading, &inside, &trailing)
}

/// Turn a run of valid probe positions into the expanded lane, rejecting
/// lanes that end up narrower than the probe span.
fn finish_run(axis: Axis, span: f32, first: f32, last: f32, bounds: Rect) -> Option<Lane> {
    let rect = match axis {
        // Vertical sweep runs left-to-right: `first` is the leftmost
        // position, the lane reaches to `last + span`.
        Axis::Vertical => Rect::new(first, bounds.min_y, last + span, bounds.max_y),
        // Horizontal sweep runs top-to-bottom: `last` is the lowest
        // position, the lane reaches up to `first + span`.
        Axis::Horizontal => Rect::new(bounds.min_x, last, bounds.max_x, first + span),
    };
    let actual = match axis {
        Axis::Vertical => rect.width(),
        Axis::Horizontal => rect.height(),
    };
    if actual + EPS < span {
        return None;
    }
    Some(Lane { axis, rect })
}

/// Split at the lane's midpoint by element centers. The first half is the
/// one visited first in reading order: left of a vertical lane, above a
/// horizontal one.
fn split<E: Bounded>(elements: Vec<E>, lane: &Lane) -> (Vec<E>, Vec<E>) {
    let mid = lane.rect.center();
    let mut head = Vec::new();
    let mut tail = Vec::new();
    for element in elements {
        let center = element.bounds().center();
        let in_head = match lane.axis {
            Axis::Vertical => center.x < mid.x,
            Axis::Horizontal => center.y > mid.y,
        };
        if in_head {
            head.push(element);
        } else {
            tail.push(element);
        }
    }
    (head, tail)
}
