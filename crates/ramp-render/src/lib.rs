pub mod config;
pub mod pen;
pub mod ramp;
pub mod report;
pub mod shapes;
pub mod svg;

// Re-export main types
pub use config::RampConfig;
pub use pen::{Pen, PenCommand, RecordingPen};
pub use ramp::Ramp;
pub use report::{Report, ReportRow};
pub use shapes::{draw_transition, Board, Pallet, PalletHBlock};
pub use svg::SvgPen;
