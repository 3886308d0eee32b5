#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{color_raster_to_png, init_tracing, scalar_raster_to_png};
