//! Uniform sampling of profile curves into polylines.

use ramp_core::{RampError, Result};
use ramp_math::{dvec2, Point2};

use crate::curve::ProfileCurve;

/// Sample `step_count` points evenly spaced across the curve's domain,
/// endpoints included.
///
/// With `inverse` set, the height at `x` is taken from the mirrored offset
/// `x_max - (x - x_min)`, which draws the curve flipped left to right. The
/// returned `x` coordinates are relative to `x_min` and always ascend.
pub fn sample_uniform(
    curve: &dyn ProfileCurve,
    step_count: usize,
    inverse: bool,
) -> Result<Vec<Point2>> {
    if step_count < 2 {
        return Err(RampError::invalid_geometry(format!(
            "sampling needs at least 2 steps, got {step_count}"
        )));
    }

    let (x_min, x_max) = curve.domain();
    let span = x_max - x_min;
    let increment = span / (step_count - 1) as f64;

    (0..step_count)
        .map(|i| {
            let x = i as f64 * increment;
            let actual_x = if inverse { x_max - x } else { x_min + x };
            Ok(dvec2(x, curve.height_at(actual_x)?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Straight slope from `(0, rise)` down to `(run, 0)`.
    struct Slope {
        run: f64,
        rise: f64,
    }

    impl ProfileCurve for Slope {
        fn height_at(&self, x: f64) -> Result<f64> {
            if !(0.0..=self.run).contains(&x) {
                return Err(RampError::no_solution(format!("x = {x} off the slope")));
            }
            Ok(self.rise * (1.0 - x / self.run))
        }

        fn domain(&self) -> (f64, f64) {
            (0.0, self.run)
        }
    }

    #[test]
    fn test_sample_count_and_endpoints() {
        let slope = Slope { run: 2.0, rise: 1.0 };
        let points = sample_uniform(&slope, 5, false).unwrap();
        assert_eq!(points.len(), 5);
        assert_relative_eq!(points[0].y, 1.0);
        assert_relative_eq!(points[2].x, 1.0);
        assert_relative_eq!(points[2].y, 0.5);
        assert_relative_eq!(points[4].x, 2.0);
        assert_relative_eq!(points[4].y, 0.0);
    }

    #[test]
    fn test_inverse_mirrors_heights() {
        let slope = Slope { run: 2.0, rise: 1.0 };
        let forward = sample_uniform(&slope, 4, false).unwrap();
        let inverse = sample_uniform(&slope, 4, true).unwrap();
        for (i, p) in inverse.iter().enumerate() {
            assert_relative_eq!(p.x, forward[i].x);
            assert_relative_eq!(p.y, forward[3 - i].y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_too_few_steps() {
        let slope = Slope { run: 1.0, rise: 1.0 };
        for steps in [0, 1] {
            let err = sample_uniform(&slope, steps, false).unwrap_err();
            assert!(matches!(err, RampError::InvalidGeometry(_)));
        }
    }

    #[test]
    fn test_propagates_curve_errors() {
        struct Broken;
        impl ProfileCurve for Broken {
            fn height_at(&self, _x: f64) -> Result<f64> {
                Err(RampError::no_solution("broken"))
            }
            fn domain(&self) -> (f64, f64) {
                (0.0, 1.0)
            }
        }

        let err = sample_uniform(&Broken, 3, false).unwrap_err();
        assert!(matches!(err, RampError::NoSolution(_)));
    }
}
