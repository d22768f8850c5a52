//! Ramp build parameters, loadable from JSON.

use std::f64::consts::PI;
use std::path::Path;

use ramp_core::traits::Validate;
use ramp_core::{RampError, Result};
use ramp_geometry::CurveKind;
use serde::{Deserialize, Serialize};

use crate::shapes::{Board, Pallet};

/// Everything needed to lay out and draw a ramp.
///
/// Missing fields in a config file fall back to the defaults, which
/// describe the standard six-pallet ramp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RampConfig {
    /// Pallet `[length, width, thickness]` in metres
    pub pallet_size: [f64; 3],
    /// Upright pallets forming each deck
    pub deck_pallets: usize,
    /// Flat pallets forming the base
    pub base_pallets: usize,
    pub curve: CurveKind,
    /// Horizontal semi-axis for elliptical transitions
    pub x_radius: Option<f64>,
    /// Samples per transition curve
    pub steps: usize,
    /// Pen units per metre
    pub scale: f64,
    /// Board tilt in radians, negative rolling towards the flat
    pub board_angle: f64,
    pub board: Board,
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            pallet_size: Pallet::SIZE,
            deck_pallets: 2,
            base_pallets: 6,
            curve: CurveKind::Circular,
            x_radius: None,
            steps: 20,
            scale: 100.0,
            board_angle: -PI / 7.0,
            board: Board::default(),
        }
    }
}

impl RampConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Pallet thickness, the short side.
    pub fn pallet_thickness(&self) -> f64 {
        self.pallet_size[2]
    }

    /// Pallet width, the side a standing pallet rises by.
    pub fn pallet_width(&self) -> f64 {
        self.pallet_size[1]
    }

    /// Pallet length, the ramp's width across the riding direction.
    pub fn pallet_length(&self) -> f64 {
        self.pallet_size[0]
    }
}

impl Validate for RampConfig {
    fn validate(&self) -> Result<()> {
        if self
            .pallet_size
            .iter()
            .any(|d| !d.is_finite() || *d <= 0.0)
        {
            return Err(RampError::Config(format!(
                "pallet dimensions must be positive: {:?}",
                self.pallet_size
            )));
        }
        if self.pallet_thickness() >= self.pallet_width() {
            return Err(RampError::Config(format!(
                "pallet thickness {} must be below its width {}",
                self.pallet_thickness(),
                self.pallet_width()
            )));
        }
        if self.deck_pallets == 0 || self.base_pallets == 0 {
            return Err(RampError::Config(
                "deck and base need at least one pallet each".to_string(),
            ));
        }
        if self.steps < 2 {
            return Err(RampError::Config(format!(
                "transitions need at least 2 steps, got {}",
                self.steps
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(RampError::Config(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        if !self.board_angle.is_finite() {
            return Err(RampError::Config("board angle must be finite".to_string()));
        }
        self.board.validate()
    }
}
