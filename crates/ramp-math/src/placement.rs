use crate::{DAffine2, Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Maps points of a local frame (metres) onto the pen plane.
///
/// A local point `p` lands at `(origin + p) * scale`: the shape is first
/// translated to its position in the ramp, then scaled to pen units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub origin: Point2,
    /// Pen units per metre.
    pub scale: f64,
}

impl Placement {
    pub fn new(origin: Point2, scale: f64) -> Self {
        Self { origin, scale }
    }

    pub fn to_affine(&self) -> DAffine2 {
        DAffine2::from_scale(Vector2::splat(self.scale)) * DAffine2::from_translation(self.origin)
    }

    pub fn transform_point(&self, p: Point2) -> Point2 {
        self.to_affine().transform_point2(p)
    }

    /// Same scale, origin shifted by `offset` metres.
    pub fn offset(&self, offset: Vector2) -> Self {
        Self::new(self.origin + offset, self.scale)
    }
}
