//! Outline drawers for the parts of a ramp.
//!
//! Every shape is described in metres in its own local frame and handed a
//! [`Placement`] that positions and scales it onto the pen.

use ramp_core::traits::Validate;
use ramp_core::{RampError, Result};
use ramp_geometry::Transition;
use ramp_math::{dvec2, Placement, Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::pen::{trace_polyline, Pen};

/// A pallet seen from the side: a plain rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pallet {
    pub width: f64,
    pub height: f64,
}

impl Pallet {
    /// Standard pallet as `[length, width, thickness]` in metres.
    pub const SIZE: [f64; 3] = [1.2, 0.8, 0.15];

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Closed outline, counter-clockwise from the lower-left corner.
    pub fn outline(&self) -> [Point2; 5] {
        [
            dvec2(0.0, 0.0),
            dvec2(self.width, 0.0),
            dvec2(self.width, self.height),
            dvec2(0.0, self.height),
            dvec2(0.0, 0.0),
        ]
    }

    pub fn draw(&self, pen: &mut dyn Pen, placement: Placement) {
        trace_polyline(pen, self.outline().map(|p| placement.transform_point(p)));
    }
}

/// Pallets standing side by side in a horizontal row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PalletHBlock {
    pallets: Vec<Pallet>,
    width: f64,
    height: f64,
}

impl PalletHBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// A row of `count` identical pallets.
    pub fn repeated(pallet: Pallet, count: usize) -> Self {
        let mut block = Self::new();
        for _ in 0..count {
            block.add_pallet(pallet);
        }
        block
    }

    pub fn add_pallet(&mut self, pallet: Pallet) {
        self.width += pallet.width;
        self.height = self.height.max(pallet.height);
        self.pallets.push(pallet);
    }

    pub fn pallets(&self) -> &[Pallet] {
        &self.pallets
    }

    /// Sum of the pallet widths
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height of the tallest pallet
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn draw(&self, pen: &mut dyn Pen, placement: Placement) {
        let mut placement = placement;
        for pallet in &self.pallets {
            pallet.draw(pen, placement);
            placement = placement.offset(dvec2(pallet.width, 0.0));
        }
    }
}

/// Skateboard seen from the side: deck line with two truck stubs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Board {
    /// Tip to tail
    pub length: f64,
    /// Deck to ground, drawn as the truck stubs
    pub height: f64,
    /// Overhang past each truck
    pub kick: f64,
    /// Truck base
    pub truck: f64,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            length: 0.787,
            height: 0.08,
            kick: 0.152,
            truck: 0.102,
        }
    }
}

impl Board {
    /// Deck length between the two trucks.
    pub fn center(&self) -> f64 {
        self.length - 2.0 * self.kick - 2.0 * self.truck
    }

    /// Outline starting at the tail, running along the deck at `angle`
    /// radians from the horizontal and dropping a stub at each truck.
    pub fn outline(&self, angle: f64) -> Vec<Point2> {
        let along = Vector2::from_angle(angle);
        let down = dvec2(angle.sin(), -angle.cos());
        let overhang = self.kick + self.truck / 2.0;

        let mut points = Vec::with_capacity(8);
        let mut p = Point2::ZERO;
        points.push(p);
        for run in [overhang, self.center() + self.truck] {
            p += along * run;
            points.push(p);
            points.push(p + down * self.height);
            points.push(p);
        }
        p += along * overhang;
        points.push(p);
        points
    }

    pub fn draw(&self, pen: &mut dyn Pen, placement: Placement, angle: f64) {
        trace_polyline(
            pen,
            self.outline(angle)
                .into_iter()
                .map(|p| placement.transform_point(p)),
        );
    }
}

impl Validate for Board {
    fn validate(&self) -> Result<()> {
        let dims = [self.length, self.height, self.kick, self.truck];
        if dims.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err(RampError::invalid_geometry(format!(
                "board dimensions must be positive: {self:?}"
            )));
        }
        if self.center() < 0.0 {
            return Err(RampError::invalid_geometry(format!(
                "board of length {} is too short for its kicks and trucks",
                self.length
            )));
        }
        Ok(())
    }
}

/// Draw a transition as a polyline of `steps` samples.
///
/// The stroke starts at the placement origin on the baseline below the top
/// edge, rises to the first sample and follows the curve. With `inverse` the
/// curve is mirrored to rise from left to right.
pub fn draw_transition(
    pen: &mut dyn Pen,
    transition: &Transition,
    placement: Placement,
    steps: usize,
    inverse: bool,
) -> Result<()> {
    let samples = transition.sample_profile(steps, inverse)?;
    trace_polyline(
        pen,
        std::iter::once(Point2::ZERO)
            .chain(samples)
            .map(|p| placement.transform_point(p)),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pen::RecordingPen;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_pallet_outline_placed_and_scaled() {
        let mut pen = RecordingPen::new();
        Pallet::new(0.8, 0.15).draw(&mut pen, Placement::new(dvec2(-2.4, -0.15), 100.0));

        let strokes = pen.strokes();
        assert_eq!(strokes.len(), 1);
        let stroke = &strokes[0];
        assert_eq!(stroke.len(), 5);
        assert_abs_diff_eq!(stroke[0].x, -240.0, epsilon = 1e-9);
        assert_abs_diff_eq!(stroke[0].y, -15.0, epsilon = 1e-9);
        assert_abs_diff_eq!(stroke[2].x, -160.0, epsilon = 1e-9);
        assert_abs_diff_eq!(stroke[2].y, 0.0, epsilon = 1e-9);
        assert_eq!(stroke[0], stroke[4]);
    }

    #[test]
    fn test_hblock_accumulates() {
        let mut block = PalletHBlock::new();
        block.add_pallet(Pallet::new(0.15, 0.8));
        block.add_pallet(Pallet::new(0.3, 0.5));
        assert_abs_diff_eq!(block.width(), 0.45, epsilon = 1e-12);
        assert_abs_diff_eq!(block.height(), 0.8);
        assert_eq!(block.pallets().len(), 2);
    }

    #[test]
    fn test_hblock_draws_left_to_right() {
        let block = PalletHBlock::repeated(Pallet::new(1.0, 0.5), 3);
        let mut pen = RecordingPen::new();
        block.draw(&mut pen, Placement::new(dvec2(-1.5, 0.0), 1.0));

        let starts: Vec<f64> = pen.strokes().iter().map(|s| s[0].x).collect();
        assert_eq!(starts.len(), 3);
        assert_abs_diff_eq!(starts[0], -1.5);
        assert_abs_diff_eq!(starts[1], -0.5);
        assert_abs_diff_eq!(starts[2], 0.5);
    }

    #[test]
    fn test_board_outline_level() {
        let board = Board::default();
        let outline = board.outline(0.0);
        assert_eq!(outline.len(), 8);

        let last = outline[7];
        assert_abs_diff_eq!(last.x, board.length, epsilon = 1e-12);
        assert_abs_diff_eq!(last.y, 0.0, epsilon = 1e-12);

        // Truck stubs hang below the deck
        assert_abs_diff_eq!(outline[2].y, -board.height, epsilon = 1e-12);
        assert_abs_diff_eq!(outline[5].y, -board.height, epsilon = 1e-12);
        assert_abs_diff_eq!(outline[4].x - outline[1].x, board.center() + board.truck, epsilon = 1e-12);
    }

    #[test]
    fn test_board_outline_rotated() {
        let board = Board::default();
        let angle = -std::f64::consts::PI / 7.0;
        let outline = board.outline(angle);
        let end = outline[7];
        assert_abs_diff_eq!(end.length(), board.length, epsilon = 1e-12);
        assert_abs_diff_eq!(end.y.atan2(end.x), angle, epsilon = 1e-12);
    }

    #[test]
    fn test_board_validation() {
        assert!(Board::default().validate().is_ok());
        let short = Board {
            length: 0.3,
            ..Board::default()
        };
        assert!(matches!(short.validate(), Err(RampError::InvalidGeometry(_))));
    }

    #[test]
    fn test_draw_transition_starts_on_baseline() {
        let transition = Transition::circular(1.3, 0.8).unwrap();
        let mut pen = RecordingPen::new();
        draw_transition(&mut pen, &transition, Placement::new(dvec2(-2.1, 0.0), 10.0), 20, false)
            .unwrap();

        let strokes = pen.strokes();
        assert_eq!(strokes.len(), 1);
        let stroke = &strokes[0];
        assert_eq!(stroke.len(), 21);
        assert_abs_diff_eq!(stroke[0].x, -21.0, epsilon = 1e-9);
        assert_abs_diff_eq!(stroke[0].y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(stroke[1].y, 8.0, epsilon = 1e-6);
        assert_abs_diff_eq!(stroke[20].x, -8.0, epsilon = 1e-9);
        assert_abs_diff_eq!(stroke[20].y, 0.0, epsilon = 1e-6);
    }
}
