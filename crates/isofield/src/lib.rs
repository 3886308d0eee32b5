#![forbid(unsafe_code)]
//! isofield: potential-field visualization with isocontour banding.
//!
//! Modules:
//! - field: anchor points, scalar potential evaluation, isocontour band classification
//! - render: per-sample shading and rasterization over pixel grids
//!
//! The shader is a pure function of a sample coordinate and a resolution vector;
//! invocations for distinct coordinates share no mutable state and may run in any order.
pub mod error;
pub mod field;
pub mod render;

/// Convenient re-exports for common types. Import with `use isofield::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::field::anchors::Anchors;
    pub use crate::field::contour::{band_index, in_band};
    pub use crate::field::potential::potential;
    pub use crate::render::color::Rgba;
    pub use crate::render::raster::{bake_potential, render, ColorRaster, ScalarRaster};
    pub use crate::render::shader::{shade, FieldShader, MARKER_RADIUS};
}
