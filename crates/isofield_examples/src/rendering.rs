//! PNG export helpers shared by the example binaries.
use std::path::Path;

use anyhow::Context;
use image::{Rgb, RgbImage};
use isofield::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initializes a fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Writes a [`ColorRaster`] to a PNG file.
///
/// Raster row 0 is the bottom row, PNG row 0 is the top row, so rows are
/// flipped on write.
pub fn color_raster_to_png(raster: &ColorRaster, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let (w, h) = (raster.width(), raster.height());
    let mut img = RgbImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            img.put_pixel(x, h - 1 - y, Rgb(raster.get(x, y).to_rgb8()));
        }
    }
    img.save(path.as_ref())
        .with_context(|| format!("writing {}", path.as_ref().display()))?;
    info!("Wrote {}x{} image to {}.", w, h, path.as_ref().display());
    Ok(())
}

/// Writes a [`ScalarRaster`] to a grayscale PNG file, mapping the given
/// `(min, max)` display range onto black..white. Values outside the range
/// clamp; non-finite samples (anchor coincidences) render black.
pub fn scalar_raster_to_png(
    raster: &ScalarRaster,
    range: (f32, f32),
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (min, max) = range;
    let span = if max > min { max - min } else { 1.0 };

    let (w, h) = (raster.width(), raster.height());
    let mut img = RgbImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let v = raster.get(x, y);
            let level = if v.is_finite() {
                (((v - min) / span).clamp(0.0, 1.0) * 255.0).round() as u8
            } else {
                0
            };
            img.put_pixel(x, h - 1 - y, Rgb([level, level, level]));
        }
    }
    img.save(path.as_ref())
        .with_context(|| format!("writing {}", path.as_ref().display()))?;
    info!("Wrote {}x{} heatmap to {}.", w, h, path.as_ref().display());
    Ok(())
}
