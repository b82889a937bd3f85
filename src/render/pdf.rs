//! Vector-document collaborator contract.
//!
//! The document object model here is a PDF-style drawing surface: shapes
//! take an explicit line style, text goes through a positioned cursor and
//! a current font size. As with the raster canvas, the engine only issues
//! drawing commands; the caller owns the document and its lifecycle.

use glam::DVec2;

use crate::errors::SinkError;
use crate::types::Rgb;

/// Stroke style for vector-document shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DocLine {
    pub width: f64,
    pub color: Rgb,
}

/// A mutable vector document owned by the caller.
pub trait VectorDoc {
    /// Stroke a circle outline.
    fn stroke_circle(
        &mut self,
        center: DVec2,
        radius: f64,
        line: DocLine,
    ) -> Result<(), SinkError>;

    /// Draw a straight line segment.
    fn draw_line(&mut self, from: DVec2, to: DVec2, line: DocLine) -> Result<(), SinkError>;

    /// Fill a closed polygon.
    fn fill_polygon(&mut self, points: &[DVec2], fill: Rgb) -> Result<(), SinkError>;

    /// Move the text cursor.
    fn set_position(&mut self, pos: DVec2) -> Result<(), SinkError>;

    /// Set the current font size in document points.
    fn set_font_size(&mut self, size: f64) -> Result<(), SinkError>;

    /// Emit a text cell at the current cursor.
    fn text_cell(&mut self, text: &str) -> Result<(), SinkError>;
}
