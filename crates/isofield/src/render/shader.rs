//! Per-sample shading of the potential field.
//!
//! Classifies each coordinate, in strict priority order, as an anchor
//! marker, an isocontour band, or background, and emits a flat RGBA color.
use glam::Vec2;
use tracing::warn;

use crate::field::anchors::Anchors;
use crate::field::{contour, potential};
use crate::render::color::Rgba;

/// Radius of the white disks drawn around the primary and secondary anchors.
pub const MARKER_RADIUS: f32 = 10.0;
/// Color of the anchor markers.
pub const MARKER_COLOR: Rgba = Rgba::WHITE;
/// Color of the isocontour bands.
pub const CONTOUR_COLOR: Rgba = Rgba::gray(0.4);
/// Background color.
pub const BACKGROUND_COLOR: Rgba = Rgba::BLACK;

/// Pure per-sample shader over the potential field of a fixed resolution.
///
/// The anchors are derived once at construction; [`FieldShader::shade`] is
/// then a pure function of the sample coordinate. Identical inputs always
/// yield bit-identical output, and evaluations for distinct coordinates are
/// independent.
#[derive(Clone, Copy, Debug)]
pub struct FieldShader {
    resolution: Vec2,
    anchors: Anchors,
}

impl FieldShader {
    /// Creates a shader for the given domain resolution.
    ///
    /// A non-positive resolution is accepted (the anchors degenerate toward
    /// the origin) but logged, since it usually indicates a configuration
    /// mistake upstream.
    pub fn new(resolution: Vec2) -> Self {
        if resolution.x <= 0.0 || resolution.y <= 0.0 {
            warn!(
                "Degenerate resolution {}x{}; anchors collapse toward the origin.",
                resolution.x, resolution.y
            );
        }
        Self {
            resolution,
            anchors: Anchors::from_resolution(resolution),
        }
    }

    /// The domain resolution this shader was built for.
    pub fn resolution(&self) -> Vec2 {
        self.resolution
    }

    /// The anchor points derived from the resolution.
    pub fn anchors(&self) -> &Anchors {
        &self.anchors
    }

    /// Evaluates the raw scalar potential at `frag_coord`.
    pub fn potential(&self, frag_coord: Vec2) -> f32 {
        potential(frag_coord, &self.anchors)
    }

    /// Shades a single sample coordinate.
    ///
    /// Priority order: primary marker disk, secondary marker disk,
    /// isocontour band, background. The tertiary anchor contributes to the
    /// potential but is never drawn as a marker. An exact anchor
    /// coincidence outside the marker disks evaluates to an infinite
    /// potential and classifies as background; no band contains it.
    pub fn shade(&self, frag_coord: Vec2) -> Rgba {
        if frag_coord.distance(self.anchors.p1) < MARKER_RADIUS {
            return MARKER_COLOR;
        }
        if frag_coord.distance(self.anchors.p2) < MARKER_RADIUS {
            return MARKER_COLOR;
        }
        if contour::in_band(potential(frag_coord, &self.anchors)) {
            CONTOUR_COLOR
        } else {
            BACKGROUND_COLOR
        }
    }
}

/// Shades a single coordinate against a resolution in one call.
///
/// Equivalent to `FieldShader::new(resolution).shade(frag_coord)` but
/// without the degenerate-resolution log, so it stays quiet when mapped
/// over a coordinate grid.
pub fn shade(frag_coord: Vec2, resolution: Vec2) -> Rgba {
    let anchors = Anchors::from_resolution(resolution);
    if frag_coord.distance(anchors.p1) < MARKER_RADIUS
        || frag_coord.distance(anchors.p2) < MARKER_RADIUS
    {
        return MARKER_COLOR;
    }
    if contour::in_band(potential(frag_coord, &anchors)) {
        CONTOUR_COLOR
    } else {
        BACKGROUND_COLOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESOLUTION: Vec2 = Vec2::new(1000.0, 1000.0);

    #[test]
    fn primary_anchor_is_white() {
        let shader = FieldShader::new(RESOLUTION);
        assert_eq!(shader.shade(Vec2::new(400.0, 300.0)), MARKER_COLOR);
    }

    #[test]
    fn secondary_anchor_is_white() {
        let shader = FieldShader::new(RESOLUTION);
        assert_eq!(shader.shade(shader.anchors().p2), MARKER_COLOR);
    }

    #[test]
    fn tertiary_anchor_gets_no_marker() {
        // The potential at p3 is -inf, which no band contains, and p3 lies
        // far outside both marker disks at this resolution.
        let shader = FieldShader::new(RESOLUTION);
        assert_eq!(shader.shade(shader.anchors().p3), BACKGROUND_COLOR);
    }

    #[test]
    fn origin_is_background() {
        // potential((0,0)) is about 0.76, between the 0.7 and 0.8 bands.
        let shader = FieldShader::new(RESOLUTION);
        assert_eq!(shader.shade(Vec2::ZERO), BACKGROUND_COLOR);
    }

    #[test]
    fn contour_band_is_gray() {
        // potential((301.7, 300)) is about -0.1002, inside the band
        // centered at -0.1.
        let shader = FieldShader::new(RESOLUTION);
        assert_eq!(shader.shade(Vec2::new(301.7, 300.0)), CONTOUR_COLOR);
    }

    #[test]
    fn marker_disks_take_priority_over_contours() {
        // At a small resolution the anchors sit close together; a point
        // within both marker disks must still shade white.
        let shader = FieldShader::new(Vec2::new(40.0, 20.0));
        let p = Vec2::new(18.0, 10.0);
        assert!(p.distance(shader.anchors().p1) < MARKER_RADIUS);
        assert!(p.distance(shader.anchors().p2) < MARKER_RADIUS);
        assert_eq!(shader.shade(p), MARKER_COLOR);
    }

    #[test]
    fn zero_resolution_shades_origin_white() {
        let shader = FieldShader::new(Vec2::ZERO);
        assert_eq!(shader.shade(Vec2::ZERO), MARKER_COLOR);
    }

    #[test]
    fn shade_is_deterministic() {
        let p = Vec2::new(123.5, 77.25);
        let a = shade(p, RESOLUTION);
        let b = shade(p, RESOLUTION);
        assert_eq!(a.r.to_bits(), b.r.to_bits());
        assert_eq!(a.g.to_bits(), b.g.to_bits());
        assert_eq!(a.b.to_bits(), b.b.to_bits());
        assert_eq!(a.a.to_bits(), b.a.to_bits());
    }

    #[test]
    fn free_function_matches_shader() {
        let shader = FieldShader::new(RESOLUTION);
        for p in [
            Vec2::ZERO,
            Vec2::new(400.0, 300.0),
            Vec2::new(301.7, 300.0),
            Vec2::new(999.5, 999.5),
        ] {
            assert_eq!(shade(p, RESOLUTION), shader.shade(p));
        }
    }
}
