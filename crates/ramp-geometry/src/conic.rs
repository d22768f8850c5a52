//! Axis-aligned conic through the transition's boundary points.
//!
//! The transition curve is the lower-left quarter of the conic
//!
//! ```text
//! ((x - dx) / a)^2 + ((y - dy) / b)^2 = 1
//! ```
//!
//! with its center at `(dx, dy) = (width, b)`, so the curve touches the
//! baseline at `(width, 0)` with a horizontal tangent. Solving it at the top
//! point `(0, height)` yields the semi-axes.

use ramp_core::{RampError, Result, Tolerance};
use ramp_math::solve_quadratic;
use serde::{Deserialize, Serialize};

/// How the horizontal semi-axis `a` relates to the vertical one `b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SemiAxis {
    /// `a = b`: the conic is a circle.
    TiedToVertical,
    /// `a` is known up front: the conic is an ellipse.
    Fixed(f64),
}

/// Closed-form solver for the transition conic.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConicSolver {
    pub tolerance: Tolerance,
}

impl ConicSolver {
    /// Left-hand side of the conic equation minus one.
    ///
    /// Zero exactly on the curve, negative inside, positive outside.
    pub fn residual(a: f64, b: f64, dx: f64, dy: f64, x: f64, y: f64) -> f64 {
        ((x - dx) / a).powi(2) + ((y - dy) / b).powi(2) - 1.0
    }

    /// Solve for the vertical semi-axis `b` so that the conic centered at
    /// `(width, b)` passes through `(0, height)`.
    ///
    /// Multiplying the equation by `b^2` gives
    /// `(width / a)^2 b^2 - 2 height b + height^2 = 0` for a fixed `a`, and
    /// the linear `-2 height b + width^2 + height^2 = 0` when `a = b`.
    /// The largest positive root is returned.
    pub fn solve_vertical_semi_axis(
        &self,
        width: f64,
        height: f64,
        horizontal: SemiAxis,
    ) -> Result<f64> {
        if !(width.is_finite() && height.is_finite()) || height <= 0.0 || width < 0.0 {
            return Err(RampError::no_solution(format!(
                "no conic through (0, {height}) touching the baseline at ({width}, 0)"
            )));
        }

        let (qa, qb, qc) = match horizontal {
            SemiAxis::TiedToVertical => (0.0, -2.0 * height, width * width + height * height),
            SemiAxis::Fixed(a) => {
                if !a.is_finite() || a <= 0.0 {
                    return Err(RampError::no_solution(format!(
                        "horizontal semi-axis must be positive, got {a}"
                    )));
                }
                ((width / a).powi(2), -2.0 * height, height * height)
            }
        };

        solve_quadratic(qa, qb, qc, self.tolerance)
            .into_iter()
            .filter(|&b| b.is_finite() && b > self.tolerance.linear)
            .max_by(f64::total_cmp)
            .ok_or_else(|| {
                RampError::no_solution(format!(
                    "no positive vertical semi-axis for width {width}, height {height} ({horizontal:?})"
                ))
            })
    }

    /// Horizontal semi-axis for an already solved vertical one.
    ///
    /// Circles reuse `b`. For ellipses no closed form is derived; the fixed
    /// value the vertical solve was made with is handed back.
    pub fn solve_horizontal_semi_axis(&self, vertical: f64, horizontal: SemiAxis) -> f64 {
        match horizontal {
            SemiAxis::TiedToVertical => vertical,
            SemiAxis::Fixed(a) => a,
        }
    }

    /// Height of the curve at horizontal offset `x`.
    ///
    /// Solves `y^2 - 2 b y + b^2 t^2 = 0` with `t = (x - width) / a` and
    /// returns the smallest root, the lower intersection of the vertical line
    /// with the conic.
    pub fn height_at(&self, x: f64, a: f64, b: f64, width: f64) -> Result<f64> {
        if !(x.is_finite() && a.is_finite() && b.is_finite()) || a <= 0.0 || b <= 0.0 {
            return Err(RampError::no_solution(format!(
                "cannot evaluate conic (a = {a}, b = {b}) at x = {x}"
            )));
        }

        let t = (x - width) / a;
        solve_quadratic(1.0, -2.0 * b, b * b * t * t, self.tolerance)
            .into_iter()
            .next()
            .ok_or_else(|| {
                RampError::no_solution(format!(
                    "x = {x} is outside the curve's horizontal extent [{}, {}]",
                    width - a,
                    width + a
                ))
            })
    }
}
