//! The curved transition between the ramp's flat bottom and its deck.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

use ramp_core::traits::Validate;
use ramp_core::{RampError, Result, Tolerance};
use ramp_math::Point2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conic::{ConicSolver, SemiAxis};
use crate::curve::ProfileCurve;
use crate::sampling::sample_uniform;

/// A point on the transition, relative to its local origin.
pub type CurveSample = Point2;

/// Family of conic used for the transition surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    /// Quarter circle: both semi-axes equal.
    #[default]
    Circular,
    /// Quarter ellipse with an independent horizontal semi-axis.
    Elliptical,
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveKind::Circular => write!(f, "circular"),
            CurveKind::Elliptical => write!(f, "elliptical"),
        }
    }
}

/// A curved ramp section rising `height` over a horizontal run of `width`.
///
/// In local coordinates the curve starts at `(0, height)` and meets the
/// baseline tangentially at `(width, 0)`. All derived values are computed
/// once in [`Transition::new`].
///
/// For [`CurveKind::Elliptical`] the tangent angle and arc length are not
/// derived and read as `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    width: f64,
    height: f64,
    curve_kind: CurveKind,
    x_radius: f64,
    y_radius: f64,
    tangent_angle: f64,
    arc_length: f64,
    #[serde(skip)]
    solver: ConicSolver,
}

impl Transition {
    /// Solve the transition for the given run and rise.
    ///
    /// `x_radius` only applies to elliptical curves, where it fixes the
    /// horizontal semi-axis (defaulting to `width`). Circular curves derive
    /// it and ignore the argument.
    pub fn new(
        width: f64,
        height: f64,
        x_radius: Option<f64>,
        curve_kind: CurveKind,
    ) -> Result<Self> {
        Self::with_solver(width, height, x_radius, curve_kind, ConicSolver::default())
    }

    /// Circular transition, the common case.
    pub fn circular(width: f64, height: f64) -> Result<Self> {
        Self::new(width, height, None, CurveKind::Circular)
    }

    pub fn with_solver(
        width: f64,
        height: f64,
        x_radius: Option<f64>,
        curve_kind: CurveKind,
        solver: ConicSolver,
    ) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(RampError::invalid_geometry(format!(
                "transition width must be positive, got {width}"
            )));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(RampError::invalid_geometry(format!(
                "transition height must be positive, got {height}"
            )));
        }

        let transition = match curve_kind {
            CurveKind::Circular => {
                if let Some(ignored) = x_radius {
                    debug!(ignored, "explicit x radius ignored for circular transition");
                }
                let horizontal = SemiAxis::TiedToVertical;
                let y_radius = solver.solve_vertical_semi_axis(width, height, horizontal)?;
                let x_radius = solver.solve_horizontal_semi_axis(y_radius, horizontal);
                let tangent_angle = exit_angle(width, x_radius, solver)?;

                Self {
                    width,
                    height,
                    curve_kind,
                    x_radius,
                    y_radius,
                    tangent_angle,
                    arc_length: x_radius * tangent_angle,
                    solver,
                }
            }
            CurveKind::Elliptical => {
                let a = x_radius.unwrap_or(width);
                if !a.is_finite() || a < width - solver.tolerance.linear {
                    return Err(RampError::invalid_geometry(format!(
                        "x radius {a} is shorter than the transition width {width}"
                    )));
                }
                let horizontal = SemiAxis::Fixed(a);
                let y_radius = solver.solve_vertical_semi_axis(width, height, horizontal)?;

                Self {
                    width,
                    height,
                    curve_kind,
                    x_radius: solver.solve_horizontal_semi_axis(y_radius, horizontal),
                    y_radius,
                    // Not derived for ellipses.
                    tangent_angle: 0.0,
                    arc_length: 0.0,
                    solver,
                }
            }
        };

        transition.validate()?;
        debug!(
            width,
            height,
            kind = %curve_kind,
            x_radius = transition.x_radius,
            y_radius = transition.y_radius,
            tangent_angle = transition.tangent_angle,
            "solved transition"
        );
        Ok(transition)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn curve_kind(&self) -> CurveKind {
        self.curve_kind
    }

    /// Horizontal semi-axis of the conic.
    pub fn x_radius(&self) -> f64 {
        self.x_radius
    }

    /// Vertical semi-axis of the conic.
    pub fn y_radius(&self) -> f64 {
        self.y_radius
    }

    /// Angle between the curve at its top edge and the horizontal, in radians.
    pub fn tangent_angle(&self) -> f64 {
        self.tangent_angle
    }

    pub fn arc_length(&self) -> f64 {
        self.arc_length
    }

    /// Steepest riding angle in degrees.
    pub fn max_angle_degrees(&self) -> f64 {
        self.tangent_angle.to_degrees()
    }

    /// Height of the curve at horizontal offset `x` from the top edge.
    pub fn height_at(&self, x: f64) -> Result<f64> {
        self.solver.height_at(x, self.x_radius, self.y_radius, self.width)
    }

    /// `step_count` points from `x = 0` to `x = width`, endpoints included.
    ///
    /// With `inverse` set the heights are mirrored so the curve rises from
    /// left to right, which is how the second transition of a ramp is drawn.
    pub fn sample_profile(&self, step_count: usize, inverse: bool) -> Result<Vec<CurveSample>> {
        sample_uniform(self, step_count, inverse)
    }
}

/// `asin(width / radius)`, snapping to a right angle at the `width == radius`
/// limit.
fn exit_angle(width: f64, radius: f64, solver: ConicSolver) -> Result<f64> {
    let ratio = width / radius;
    if solver.tolerance.linear_eq(ratio, 1.0) {
        return Ok(FRAC_PI_2);
    }
    if ratio > 1.0 {
        return Err(RampError::invalid_geometry(format!(
            "width {width} exceeds radius {radius}; tangent angle undefined"
        )));
    }
    Ok(ratio.asin())
}

impl ProfileCurve for Transition {
    fn height_at(&self, x: f64) -> Result<f64> {
        Transition::height_at(self, x)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, self.width)
    }
}

impl Validate for Transition {
    /// The conic must pass through both boundary points.
    ///
    /// When a circular transition rises higher than it runs, `(0, height)`
    /// lies on the upper half of the circle. The solve is still valid, but
    /// sampling follows the lower half and tops out below `height`.
    fn validate(&self) -> Result<()> {
        let tol = Tolerance::loose();
        let (a, b, w, h) = (self.x_radius, self.y_radius, self.width, self.height);

        let top = ConicSolver::residual(a, b, w, b, 0.0, h);
        let bottom = ConicSolver::residual(a, b, w, b, w, 0.0);
        if !tol.is_zero(top) || !tol.is_zero(bottom) {
            return Err(RampError::no_solution(format!(
                "conic misses the boundary points (residuals {top:e}, {bottom:e})"
            )));
        }
        Ok(())
    }
}
