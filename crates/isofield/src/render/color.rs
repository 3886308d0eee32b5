//! Flat RGBA colors emitted by the shader.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An RGBA color with `f32` channels in `[0.0, 1.0]`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new color from channel values.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque gray with all color channels set to `level`.
    pub const fn gray(level: f32) -> Self {
        Self::new(level, level, level, 1.0)
    }

    /// Converts the color channels to 8-bit RGB, clamping to `[0.0, 1.0]`.
    pub fn to_rgb8(self) -> [u8; 3] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }
}
