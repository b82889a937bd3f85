//! Raster canvas collaborator contract.
//!
//! The engine decides *which* primitive to request and with what
//! coordinates and style; painting belongs to the caller's bitmap toolkit.
//! Implementations mutate their own pixels and report failures through
//! [`SinkError`], which the engine propagates unchanged.

use glam::DVec2;

use crate::errors::SinkError;
use crate::types::Rgb;

/// Opaque handle to a color previously allocated on a canvas.
///
/// Mirrors palette-indexed bitmap APIs where drawing takes an index, not a
/// channel triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorRef(pub u32);

/// A mutable raster surface owned by the caller.
pub trait RasterCanvas {
    /// Register a color for subsequent drawing calls.
    fn allocate_color(&mut self, color: Rgb) -> Result<ColorRef, SinkError>;

    /// Stroke an ellipse outline of `width` x `height` centered at `center`.
    fn stroke_ellipse(
        &mut self,
        center: DVec2,
        width: f64,
        height: f64,
        color: ColorRef,
    ) -> Result<(), SinkError>;

    /// Draw a straight line segment.
    fn draw_line(&mut self, from: DVec2, to: DVec2, color: ColorRef) -> Result<(), SinkError>;

    /// Fill a closed polygon.
    fn fill_polygon(&mut self, points: &[DVec2], color: ColorRef) -> Result<(), SinkError>;

    /// Draw label text with its anchor at `pos`, default styling.
    fn draw_text(&mut self, pos: DVec2, text: &str, color: ColorRef) -> Result<(), SinkError>;
}
