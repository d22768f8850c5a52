use std::io::Write;
use std::path::{Path, PathBuf};

use ramp_core::Result;
use ramp_math::{Aabb2, Point2};
use tracing::info;

use crate::pen::Pen;

/// Pen that collects strokes and writes them out as a standalone SVG file
/// when finished.
///
/// Pen coordinates have y pointing up; the exported document flips them so
/// the drawing appears the right way up.
#[derive(Debug, Clone)]
pub struct SvgPen {
    path: PathBuf,
    strokes: Vec<Vec<Point2>>,
    current: Option<Vec<Point2>>,
    position: Point2,
    /// Stroke width in pen units
    pub stroke_width: f64,
    /// Blank border around the drawing in pen units
    pub margin: f64,
}

impl SvgPen {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            strokes: Vec::new(),
            current: None,
            position: Point2::ZERO,
            stroke_width: 1.0,
            margin: 20.0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Completed strokes, in drawing order.
    pub fn strokes(&self) -> &[Vec<Point2>] {
        &self.strokes
    }

    fn end_stroke(&mut self) {
        if let Some(stroke) = self.current.take() {
            if stroke.len() > 1 {
                self.strokes.push(stroke);
            }
        }
    }

    /// Bounds of everything drawn so far
    pub fn bounds(&self) -> Option<Aabb2> {
        let points: Vec<Point2> = self.strokes.iter().flatten().copied().collect();
        Aabb2::from_points(&points)
    }

    /// Write the completed strokes as an SVG document.
    pub fn write_svg<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let bounds = self
            .bounds()
            .unwrap_or_else(|| Aabb2::new(Point2::ZERO, Point2::ZERO))
            .expand(self.margin);
        let size = bounds.extents();

        writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="{:.2} {:.2} {:.2} {:.2}">"#,
            size.x.ceil(),
            size.y.ceil(),
            bounds.min.x,
            flip_y(bounds.max.y),
            size.x,
            size.y
        )?;
        writeln!(out, "  <title>Ramp profile</title>")?;
        writeln!(
            out,
            r#"  <g fill="none" stroke="black" stroke-width="{}" stroke-linejoin="round">"#,
            self.stroke_width
        )?;

        for stroke in &self.strokes {
            write!(out, r#"    <polyline points=""#)?;
            for (i, p) in stroke.iter().enumerate() {
                if i > 0 {
                    write!(out, " ")?;
                }
                write!(out, "{:.2},{:.2}", p.x, flip_y(p.y))?;
            }
            writeln!(out, r#""/>"#)?;
        }

        writeln!(out, "  </g>")?;
        writeln!(out, "</svg>")?;
        Ok(())
    }

    pub fn to_svg_string(&self) -> std::io::Result<String> {
        let mut buf = Vec::new();
        self.write_svg(&mut buf)?;
        String::from_utf8(buf).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Export the drawing to `self.path`.
    pub fn export_svg(&self) -> std::io::Result<()> {
        let mut file = std::io::BufWriter::new(std::fs::File::create(&self.path)?);
        self.write_svg(&mut file)?;
        file.flush()
    }
}

/// SVG y grows downwards. Subtracting from zero keeps `0.0` from turning
/// into `-0.00` in the output.
fn flip_y(y: f64) -> f64 {
    0.0 - y
}

impl Pen for SvgPen {
    fn pen_up(&mut self) {
        self.end_stroke();
    }

    fn pen_down(&mut self) {
        if self.current.is_none() {
            self.current = Some(vec![self.position]);
        }
    }

    fn move_to(&mut self, to: Point2) {
        self.position = to;
        if let Some(stroke) = self.current.as_mut() {
            stroke.push(to);
        }
    }

    fn finish(&mut self) -> Result<()> {
        self.end_stroke();
        self.export_svg()?;
        info!(
            path = %self.path.display(),
            strokes = self.strokes.len(),
            "wrote ramp drawing"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pen::trace_polyline;
    use ramp_math::dvec2;

    fn square_pen() -> SvgPen {
        let mut pen = SvgPen::new("unused.svg");
        trace_polyline(
            &mut pen,
            [
                dvec2(0.0, 0.0),
                dvec2(10.0, 0.0),
                dvec2(10.0, 10.0),
                dvec2(0.0, 10.0),
                dvec2(0.0, 0.0),
            ],
        );
        pen.pen_up();
        pen
    }

    #[test]
    fn test_collects_strokes() {
        let pen = square_pen();
        assert_eq!(pen.strokes().len(), 1);
        assert_eq!(pen.strokes()[0].len(), 5);

        let bounds = pen.bounds().unwrap();
        assert_eq!(bounds.min, dvec2(0.0, 0.0));
        assert_eq!(bounds.max, dvec2(10.0, 10.0));
    }

    #[test]
    fn test_svg_flips_y_axis() {
        let svg = square_pen().to_svg_string().unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("<svg"));
        assert!(svg.contains("0.00,0.00 10.00,0.00 10.00,-10.00 0.00,-10.00 0.00,0.00"));
        assert!(svg.contains(r#"viewBox="-20.00 -30.00 50.00 50.00""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_empty_drawing_is_valid_document() {
        let svg = SvgPen::new("unused.svg").to_svg_string().unwrap();
        assert!(svg.contains("<svg"));
        assert!(!svg.contains("<polyline"));
    }

    #[test]
    fn test_single_point_stroke_dropped() {
        let mut pen = SvgPen::new("unused.svg");
        pen.pen_down();
        pen.pen_up();
        assert!(pen.strokes().is_empty());
    }
}
