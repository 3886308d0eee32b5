//! Anchor points sourcing the potential field.
//!
//! The three anchors are derived from the domain resolution via fixed
//! fractional offsets and carry no identity beyond a single evaluation.
use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fractional position of the primary anchor within the domain.
pub const P1_FRACTION: Vec2 = Vec2::new(0.4, 0.3);
/// Offset of the secondary anchor relative to the primary, in domain fractions.
pub const P2_FRACTION: Vec2 = Vec2::new(0.1, 0.4);
/// Offset of the tertiary anchor relative to the primary, in domain fractions.
pub const P3_FRACTION: Vec2 = Vec2::new(0.2, 0.1);

/// The three fixed anchor points contributing inverse-distance terms to the potential.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchors {
    /// Primary anchor, strongest field term, drawn as a marker.
    pub p1: Vec2,
    /// Secondary anchor, drawn as a marker.
    pub p2: Vec2,
    /// Tertiary anchor, weakest field term, never drawn as a marker.
    pub p3: Vec2,
}

impl Anchors {
    /// Derives the anchors from a resolution vector.
    ///
    /// A zero resolution collapses all anchors onto the origin; this is a
    /// valid degenerate configuration and is not rejected here.
    pub fn from_resolution(resolution: Vec2) -> Self {
        let p1 = P1_FRACTION * resolution;
        Self {
            p1,
            p2: p1 + P2_FRACTION * resolution,
            p3: p1 + P3_FRACTION * resolution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_from_square_resolution() {
        let anchors = Anchors::from_resolution(Vec2::new(1000.0, 1000.0));
        assert_eq!(anchors.p1, Vec2::new(400.0, 300.0));
        assert_eq!(anchors.p2, Vec2::new(500.0, 700.0));
        assert_eq!(anchors.p3, Vec2::new(600.0, 400.0));
    }

    #[test]
    fn anchors_scale_per_axis() {
        let anchors = Anchors::from_resolution(Vec2::new(200.0, 100.0));
        assert_eq!(anchors.p1, Vec2::new(80.0, 30.0));
        assert_eq!(anchors.p2, Vec2::new(100.0, 70.0));
        assert_eq!(anchors.p3, Vec2::new(120.0, 40.0));
    }

    #[test]
    fn zero_resolution_collapses_anchors_to_origin() {
        let anchors = Anchors::from_resolution(Vec2::ZERO);
        assert_eq!(anchors.p1, Vec2::ZERO);
        assert_eq!(anchors.p2, Vec2::ZERO);
        assert_eq!(anchors.p3, Vec2::ZERO);
    }
}
