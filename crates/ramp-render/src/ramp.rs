//! The assembled ramp: pallet base, two decks, two transitions and a board.

use ramp_core::traits::Validate;
use ramp_core::{RampError, Result};
use ramp_geometry::Transition;
use ramp_math::{dvec2, Placement, Point2};
use tracing::{debug, info};

use crate::config::RampConfig;
use crate::pen::Pen;
use crate::shapes::{draw_transition, Board, Pallet, PalletHBlock};

/// A launch ramp laid out symmetrically around `x = 0`, with the top of the
/// base at `y = 0`.
///
/// ```text
///  deck                       deck
///  |  |\                   /|  |
///  |  | \_______________ / |  |
///  [ base pallets ......... ]
/// ```
#[derive(Debug, Clone)]
pub struct Ramp {
    config: RampConfig,
    transition: Transition,
    deck: PalletHBlock,
    base: PalletHBlock,
    board: Board,
}

impl Ramp {
    pub fn new(config: RampConfig) -> Result<Self> {
        config.validate()?;

        let thickness = config.pallet_thickness();
        let width = config.pallet_width();

        // Standing pallets reach `width` high; the curve runs out over twice
        // the space a pallet saves by lying flat.
        let transition = Transition::new(
            2.0 * (width - thickness),
            width,
            config.x_radius,
            config.curve,
        )?;
        let deck = PalletHBlock::repeated(Pallet::new(thickness, width), config.deck_pallets);
        let base = PalletHBlock::repeated(Pallet::new(width, thickness), config.base_pallets);

        let ramp = Self {
            board: config.board,
            config,
            transition,
            deck,
            base,
        };

        if ramp.flat_length() < 0.0 {
            return Err(RampError::invalid_geometry(format!(
                "base of {:.2} m is too short for two decks and transitions ({:.2} m)",
                ramp.base.width(),
                2.0 * (ramp.deck.width() + ramp.transition.width())
            )));
        }

        info!(
            length = ramp.total_length(),
            height = ramp.total_height(),
            radius = ramp.transition.x_radius(),
            "ramp laid out"
        );
        Ok(ramp)
    }

    pub fn config(&self) -> &RampConfig {
        &self.config
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn deck(&self) -> &PalletHBlock {
        &self.deck
    }

    pub fn base(&self) -> &PalletHBlock {
        &self.base
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn total_length(&self) -> f64 {
        self.base.width()
    }

    /// Across the riding direction: one pallet length.
    pub fn total_width(&self) -> f64 {
        self.config.pallet_length()
    }

    pub fn total_height(&self) -> f64 {
        self.base.height() + self.deck.height()
    }

    /// Level riding surface between the two transitions.
    pub fn flat_length(&self) -> f64 {
        self.base.width() - 2.0 * (self.deck.width() + self.transition.width())
    }

    /// Sheet material needed to cover flat and both curves.
    pub fn wood_length(&self) -> f64 {
        self.base.width() - 2.0 * self.transition.width() + 2.0 * self.transition.arc_length()
    }

    /// x of the ramp's left end, in metres.
    fn left_edge(&self) -> f64 {
        -self.base.width() / 2.0
    }

    /// Where the tail of the board sits so that its middle rests on the top
    /// edge of the left transition.
    pub fn board_origin(&self) -> Point2 {
        let angle = self.config.board_angle;
        let half = self.board.length / 2.0;
        dvec2(
            self.left_edge() + self.deck.width() - half * angle.cos(),
            self.transition.height() - half * angle.sin(),
        )
    }

    /// Draw the full side profile, then finish the pen.
    pub fn draw(&self, pen: &mut dyn Pen) -> Result<()> {
        let scale = self.config.scale;
        let steps = self.config.steps;
        let left = self.left_edge();
        let right = -left;
        let place = |x: f64, y: f64| Placement::new(dvec2(x, y), scale);

        debug!(scale, steps, "drawing ramp");

        self.base.draw(pen, place(left, -self.base.height()));
        self.deck.draw(pen, place(left, 0.0));
        self.deck.draw(pen, place(right - self.deck.width(), 0.0));

        draw_transition(
            pen,
            &self.transition,
            place(left + self.deck.width(), 0.0),
            steps,
            false,
        )?;
        draw_transition(
            pen,
            &self.transition,
            place(right - self.deck.width() - self.transition.width(), 0.0),
            steps,
            true,
        )?;

        let origin = self.board_origin();
        self.board.draw(pen, place(origin.x, origin.y), self.config.board_angle);

        pen.finish()
    }
}
