//! Shared utility functions for varga calculations.

/// Normalize an angle to [0, 360) degrees.
///
/// Tiny negative inputs such as `-1e-20` would land on exactly 360.0 after
/// the `+ 360.0` correction; those fold back to 0.0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
}
