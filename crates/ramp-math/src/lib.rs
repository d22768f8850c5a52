pub mod aabb;
pub mod placement;
pub mod quadratic;
pub mod units;

pub use glam::{dvec2, DAffine2, DVec2};
pub use aabb::Aabb2;
pub use placement::Placement;
pub use quadratic::solve_quadratic;

pub type Point2 = DVec2;
pub type Vector2 = DVec2;
