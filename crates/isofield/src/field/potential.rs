//! Scalar potential evaluation.
use glam::Vec2;

use crate::field::anchors::Anchors;

/// Weight of the primary anchor term.
pub const PRIMARY_WEIGHT: f32 = 5.0;
/// Weight of the secondary anchor term.
pub const SECONDARY_WEIGHT: f32 = 1.0;
/// Weight of the tertiary anchor term.
pub const TERTIARY_WEIGHT: f32 = 0.6;
/// Gain applied to the summed inverse-distance terms.
pub const FIELD_GAIN: f32 = 20.0;

/// Evaluates the scalar potential at `p`.
///
/// Computes `1.0 - 20.0 * (5.0/|p1-p| + 1.0/|p2-p| + 0.6/|p3-p|)`.
/// A coordinate coinciding exactly with an anchor divides by zero and
/// evaluates to negative infinity under IEEE semantics; callers classify
/// such values downstream, no error is signaled.
pub fn potential(p: Vec2, anchors: &Anchors) -> f32 {
    let sum = PRIMARY_WEIGHT / anchors.p1.distance(p)
        + SECONDARY_WEIGHT / anchors.p2.distance(p)
        + TERTIARY_WEIGHT / anchors.p3.distance(p);
    1.0 - FIELD_GAIN * sum
}
