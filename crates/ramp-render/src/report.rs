//! Dimensional report printed alongside the drawing.

use std::fmt;

use ramp_geometry::CurveKind;
use ramp_math::units::meters_to_feet;
use serde::Serialize;

use crate::ramp::Ramp;

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ReportRow {
    /// A length, printed in metres and feet
    Length { label: &'static str, meters: f64 },
    /// An angle, printed in degrees
    Angle { label: &'static str, degrees: f64 },
    /// Blank line between groups
    Separator,
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportRow::Length { label, meters } => write!(
                f,
                "{:15} {:>4.2} m {:>8.2} ft",
                label,
                meters,
                meters_to_feet(*meters)
            ),
            ReportRow::Angle { label, degrees } => write!(f, "{:15} {:>4.2} deg", label, degrees),
            ReportRow::Separator => Ok(()),
        }
    }
}

/// Ordered rows describing a ramp's dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub const TITLE: &'static str = "Ramp Details";

    pub fn from_ramp(ramp: &Ramp) -> Self {
        let transition = ramp.transition();
        let length = |label, meters| ReportRow::Length { label, meters };

        let mut rows = vec![
            length("Total length:", ramp.total_length()),
            length("Total width:", ramp.total_width()),
            length("Total height:", ramp.total_height()),
            ReportRow::Separator,
            length("Deck height:", ramp.deck().height()),
            length("Deck length:", ramp.deck().width()),
            length("Flat length:", ramp.flat_length()),
            length("Wood length:", ramp.wood_length()),
            ReportRow::Separator,
        ];

        match transition.curve_kind() {
            CurveKind::Circular => {
                rows.push(length("Tranny radius:", transition.x_radius()));
            }
            CurveKind::Elliptical => {
                rows.push(length("Tranny x radius:", transition.x_radius()));
                rows.push(length("Tranny y radius:", transition.y_radius()));
            }
        }
        rows.push(length("Tranny length:", transition.width()));
        rows.push(ReportRow::Angle {
            label: "Maximum angle:",
            degrees: transition.max_angle_degrees(),
        });

        Self { rows }
    }

    /// The row with the given label, if present.
    pub fn row(&self, label: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|row| match row {
            ReportRow::Length { label: l, .. } | ReportRow::Angle { label: l, .. } => *l == label,
            ReportRow::Separator => false,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Self::TITLE)?;
        writeln!(f, "{}", "-".repeat(Self::TITLE.len()))?;
        writeln!(f)?;
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RampConfig;

    #[test]
    fn test_length_row_format() {
        let row = ReportRow::Length {
            label: "Tranny radius:",
            meters: 0.46,
        };
        assert_eq!(row.to_string(), "Tranny radius:  0.46 m     1.53 ft");
    }

    #[test]
    fn test_angle_row_format() {
        let row = ReportRow::Angle {
            label: "Maximum angle:",
            degrees: 63.2,
        };
        assert_eq!(row.to_string(), "Maximum angle:  63.20 deg");
    }

    #[test]
    fn test_reference_report() {
        let ramp = Ramp::new(RampConfig::default()).unwrap();
        let report = Report::from_ramp(&ramp);
        let text = report.to_string();

        assert!(text.starts_with("Ramp Details\n------------\n\n"));
        assert!(text.contains("Total length:   4.80 m    15.97 ft\n"));
        assert!(text.contains("Tranny radius:  1.46 m     4.85 ft\n"));
        assert!(text.contains("Tranny length:  1.30 m     4.33 ft\n"));
        assert!(text.contains("Maximum angle:  63.22 deg\n"));
        assert!(!text.contains("Tranny x radius"));
    }

    #[test]
    fn test_row_order() {
        let ramp = Ramp::new(RampConfig::default()).unwrap();
        let report = Report::from_ramp(&ramp);
        assert_eq!(report.rows.len(), 12);
        assert_eq!(report.rows[3], ReportRow::Separator);
        assert_eq!(report.rows[8], ReportRow::Separator);
        assert!(matches!(
            report.rows.last(),
            Some(ReportRow::Angle { label: "Maximum angle:", .. })
        ));
    }

    #[test]
    fn test_elliptical_rows() {
        let config = RampConfig {
            curve: CurveKind::Elliptical,
            ..RampConfig::default()
        };
        let ramp = Ramp::new(config).unwrap();
        let report = Report::from_ramp(&ramp);

        assert!(report.row("Tranny radius:").is_none());
        assert!(report.row("Tranny x radius:").is_some());
        assert!(report.row("Tranny y radius:").is_some());
        assert_eq!(
            report.row("Maximum angle:"),
            Some(&ReportRow::Angle {
                label: "Maximum angle:",
                degrees: 0.0
            })
        );
    }
}
