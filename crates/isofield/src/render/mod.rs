//! Shading and rasterization over pixel grids.
pub mod color;
pub mod raster;
pub mod shader;

pub use color::Rgba;
pub use raster::{bake_potential, render, ColorRaster, ScalarRaster};
pub use shader::{shade, FieldShader};
