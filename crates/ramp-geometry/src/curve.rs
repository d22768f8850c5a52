//! Profile curves: height as a function of horizontal offset.

use ramp_core::Result;

/// A curve in the ramp's side profile, given as `y = f(x)` over a
/// horizontal domain.
pub trait ProfileCurve {
    /// Height of the curve at horizontal offset `x`.
    fn height_at(&self, x: f64) -> Result<f64>;

    /// Return the horizontal domain `(x_min, x_max)`.
    fn domain(&self) -> (f64, f64);
}
