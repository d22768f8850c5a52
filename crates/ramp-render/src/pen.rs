//! Turtle-style drawing pen.

use ramp_core::Result;
use ramp_math::Point2;

/// A stateful pen moving between absolute coordinates.
///
/// While the pen is down every `move_to` draws a line from the previous
/// position. Coordinates are in pen units with the y axis pointing up.
pub trait Pen {
    fn pen_up(&mut self);

    fn pen_down(&mut self);

    fn move_to(&mut self, to: Point2);

    /// Called once after the last stroke. Interactive backends block here
    /// until the display is closed; file backends write their output.
    fn finish(&mut self) -> Result<()>;
}

/// Lift the pen, move to the first point, then draw through the rest.
pub fn trace_polyline<I>(pen: &mut dyn Pen, points: I)
where
    I: IntoIterator<Item = Point2>,
{
    let mut points = points.into_iter();
    let Some(first) = points.next() else {
        return;
    };
    pen.pen_up();
    pen.move_to(first);
    pen.pen_down();
    for p in points {
        pen.move_to(p);
    }
}

/// A single recorded pen call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PenCommand {
    Up,
    Down,
    MoveTo(Point2),
    Finish,
}

/// Pen that only records what it is asked to do.
#[derive(Debug, Clone, Default)]
pub struct RecordingPen {
    pub commands: Vec<PenCommand>,
}

impl RecordingPen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines actually drawn, grouped into strokes of consecutive pen-down
    /// moves. Each stroke starts at the position the pen was lowered at.
    pub fn strokes(&self) -> Vec<Vec<Point2>> {
        let mut strokes = Vec::new();
        let mut position = Point2::ZERO;
        let mut current: Option<Vec<Point2>> = None;

        for command in &self.commands {
            match *command {
                PenCommand::Down => {
                    if current.is_none() {
                        current = Some(vec![position]);
                    }
                }
                PenCommand::Up | PenCommand::Finish => {
                    if let Some(stroke) = current.take() {
                        if stroke.len() > 1 {
                            strokes.push(stroke);
                        }
                    }
                }
                PenCommand::MoveTo(p) => {
                    position = p;
                    if let Some(stroke) = current.as_mut() {
                        stroke.push(p);
                    }
                }
            }
        }
        if let Some(stroke) = current {
            if stroke.len() > 1 {
                strokes.push(stroke);
            }
        }
        strokes
    }

    pub fn finished(&self) -> bool {
        self.commands.last() == Some(&PenCommand::Finish)
    }
}

impl Pen for RecordingPen {
    fn pen_up(&mut self) {
        self.commands.push(PenCommand::Up);
    }

    fn pen_down(&mut self) {
        self.commands.push(PenCommand::Down);
    }

    fn move_to(&mut self, to: Point2) {
        self.commands.push(PenCommand::MoveTo(to));
    }

    fn finish(&mut self) -> Result<()> {
        self.commands.push(PenCommand::Finish);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ramp_math::dvec2;

    #[test]
    fn test_trace_polyline_commands() {
        let mut pen = RecordingPen::new();
        trace_polyline(&mut pen, [dvec2(0.0, 0.0), dvec2(1.0, 0.0), dvec2(1.0, 1.0)]);
        assert_eq!(
            pen.commands,
            vec![
                PenCommand::Up,
                PenCommand::MoveTo(dvec2(0.0, 0.0)),
                PenCommand::Down,
                PenCommand::MoveTo(dvec2(1.0, 0.0)),
                PenCommand::MoveTo(dvec2(1.0, 1.0)),
            ]
        );
    }

    #[test]
    fn test_trace_empty_polyline_is_noop() {
        let mut pen = RecordingPen::new();
        trace_polyline(&mut pen, std::iter::empty());
        assert!(pen.commands.is_empty());
    }

    #[test]
    fn test_strokes_split_on_pen_up() {
        let mut pen = RecordingPen::new();
        trace_polyline(&mut pen, [dvec2(0.0, 0.0), dvec2(1.0, 0.0)]);
        trace_polyline(&mut pen, [dvec2(5.0, 5.0), dvec2(6.0, 5.0), dvec2(6.0, 6.0)]);
        pen.finish().unwrap();

        let strokes = pen.strokes();
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[0], vec![dvec2(0.0, 0.0), dvec2(1.0, 0.0)]);
        assert_eq!(strokes[1].len(), 3);
        assert!(pen.finished());
    }

    #[test]
    fn test_moves_with_pen_up_draw_nothing() {
        let mut pen = RecordingPen::new();
        pen.pen_up();
        pen.move_to(dvec2(3.0, 4.0));
        pen.move_to(dvec2(5.0, 6.0));
        assert!(pen.strokes().is_empty());
        assert!(!pen.finished());
    }
}
