//! Unit conversions used by the dimensional report.

/// Feet per metre as printed in the ramp report.
pub const FEET_PER_METER: f64 = 3.328;

pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}
