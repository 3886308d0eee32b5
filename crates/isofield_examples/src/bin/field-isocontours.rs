use glam::Vec2;
use isofield::prelude::*;
use isofield_examples::{color_raster_to_png, init_tracing};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let resolution = Vec2::new(1000.0, 1000.0);
    let shader = FieldShader::new(resolution);
    let raster = render(&shader, 1000, 1000)?;

    let out = "field-isocontours.png";
    color_raster_to_png(&raster, out)?;
    Ok(())
}
