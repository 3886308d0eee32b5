//! Isocontour band classification.
//!
//! The real line is partitioned into thirty disjoint bands of width 0.01,
//! centered at `i/10` for `i` in `BAND_MIN..=BAND_MAX`. Only 10% of each
//! tenth-step is band; the rest classifies as background.

/// Lowest band index (band centered at -2.0).
pub const BAND_MIN: i32 = -20;
/// Highest band index (band centered at 0.9).
pub const BAND_MAX: i32 = 9;
/// Half-width of a band around its center.
pub const BAND_HALF_WIDTH: f32 = 0.005;

/// Returns the index of the band containing `value`, if any.
///
/// Bands are half-open `[center - 0.005, center + 0.005)`. The search runs
/// ascending from [`BAND_MIN`] and stops at the first match; bands are
/// disjoint, so order only short-circuits the scan. Non-finite values match
/// no band.
pub fn band_index(value: f32) -> Option<i32> {
    for i in BAND_MIN..=BAND_MAX {
        let center = i as f32 / 10.0;
        if value >= center - BAND_HALF_WIDTH && value < center + BAND_HALF_WIDTH {
            return Some(i);
        }
    }
    None
}

/// Returns `true` if `value` falls inside any isocontour band.
#[inline]
pub fn in_band(value: f32) -> bool {
    band_index(value).is_some()
}
