//! mini-ramp geometry: the conic solver behind the ramp transition and the
//! sampling of profile curves for rendering.

pub mod conic;
pub mod curve;
pub mod sampling;
pub mod transition;

pub use conic::{ConicSolver, SemiAxis};
pub use curve::ProfileCurve;
pub use sampling::sample_uniform;
pub use transition::{CurveKind, CurveSample, Transition};
