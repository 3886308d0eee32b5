//! Rasterizing the shader over a pixel grid.
//!
//! Samples are taken at pixel centers `(x + 0.5, y + 0.5)` with y growing
//! upward, matching the shader's coordinate space. Buffers are row-major
//! with row 0 at the bottom; image exporters flip on write as needed.
use glam::Vec2;
use tracing::debug;

use crate::error::{Error, Result};
use crate::render::color::Rgba;
use crate::render::shader::FieldShader;

/// A row-major RGBA sample buffer.
#[derive(Clone, Debug)]
pub struct ColorRaster {
    width: u32,
    height: u32,
    data: Vec<Rgba>,
}

impl ColorRaster {
    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The color at pixel `(x, y)`, with y counted from the bottom row.
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// All samples in row-major order, bottom row first.
    pub fn pixels(&self) -> &[Rgba] {
        &self.data
    }
}

/// A row-major scalar sample buffer.
#[derive(Clone, Debug)]
pub struct ScalarRaster {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl ScalarRaster {
    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The value at pixel `(x, y)`, with y counted from the bottom row.
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// All samples in row-major order, bottom row first.
    pub fn values(&self) -> &[f32] {
        &self.data
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidConfig(format!(
            "raster dimensions must be positive, got {width}x{height}"
        )));
    }
    Ok(())
}

/// Renders the shader into a [`ColorRaster`] of the given dimensions.
///
/// Each pixel is shaded independently at its center; there is no ordering
/// dependency between samples.
pub fn render(shader: &FieldShader, width: u32, height: u32) -> Result<ColorRaster> {
    check_dimensions(width, height)?;
    debug!("Rendering {}x{} color raster.", width, height);

    let mut data = Vec::with_capacity((width as usize) * (height as usize));
    for y in 0..height {
        for x in 0..width {
            let frag = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            data.push(shader.shade(frag));
        }
    }
    Ok(ColorRaster {
        width,
        height,
        data,
    })
}

/// Bakes the raw potential into a [`ScalarRaster`] of the given dimensions.
///
/// Pixels coinciding with an anchor hold non-finite values; consumers
/// normalizing for display should skip those.
pub fn bake_potential(shader: &FieldShader, width: u32, height: u32) -> Result<ScalarRaster> {
    check_dimensions(width, height)?;
    debug!("Baking {}x{} potential raster.", width, height);

    let mut data = Vec::with_capacity((width as usize) * (height as usize));
    for y in 0..height {
        for x in 0..width {
            let frag = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            data.push(shader.potential(frag));
        }
    }
    Ok(ScalarRaster {
        width,
        height,
        data,
    })
}
