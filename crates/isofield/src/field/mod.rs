//! Scalar potential field: anchor points, potential evaluation, and isocontour bands.
//!
//! Everything in this module is a pure function of its inputs; there is no
//! persistent state and no ordering dependency between evaluations.
pub mod anchors;
pub mod contour;
pub mod potential;

pub use anchors::Anchors;
pub use contour::{band_index, in_band};
pub use potential::potential;
