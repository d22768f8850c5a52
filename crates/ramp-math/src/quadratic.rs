//! Closed-form real roots of `a x^2 + b x + c = 0`.

use ramp_core::Tolerance;

/// Solve `a x^2 + b x + c = 0` over the reals.
///
/// Returns the real roots in ascending order. When `a` is zero within
/// tolerance the equation is solved as linear. A discriminant that is
/// negative only by rounding noise is treated as a double root.
///
/// Uses the cancellation-free form `q = -(b + sign(b) sqrt(d)) / 2`,
/// `x1 = q / a`, `x2 = c / q`.
pub fn solve_quadratic(a: f64, b: f64, c: f64, tolerance: Tolerance) -> Vec<f64> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return Vec::new();
    }

    if tolerance.is_zero(a) {
        if tolerance.is_zero(b) {
            // Either no solution or every x is one; neither yields a root.
            return Vec::new();
        }
        return vec![-c / b];
    }

    let mut discriminant = b * b - 4.0 * a * c;
    let scale = (b * b).max((4.0 * a * c).abs()).max(1.0);
    if discriminant < 0.0 {
        if discriminant < -tolerance.linear * scale {
            return Vec::new();
        }
        discriminant = 0.0;
    }

    let sqrt_d = discriminant.sqrt();
    let q = -0.5 * (b + b.signum() * sqrt_d);
    let mut roots = if q == 0.0 {
        // b == 0 and d == 0, hence c == 0
        vec![0.0, 0.0]
    } else {
        vec![q / a, c / q]
    };
    roots.sort_by(f64::total_cmp);
    roots
}
