use glam::Vec2;
use isofield::prelude::*;
use isofield_examples::{init_tracing, scalar_raster_to_png};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let resolution = Vec2::new(1000.0, 1000.0);
    let shader = FieldShader::new(resolution);
    let raster = bake_potential(&shader, 1000, 1000)?;

    // Display range matching the isocontour band range.
    let out = "field-potential-heatmap.png";
    scalar_raster_to_png(&raster, (-2.0, 1.0), out)?;
    Ok(())
}
