//! Point variant: one coordinate pair drawn as a small circular marker.
//!
//! A point row with a blank component (either axis) renders as a no-op in
//! every format: the sink is returned untouched, no error is raised.

use crate::errors::{ParseError, RenderError};
use crate::log;
use crate::parse::parse_as;
use crate::render::ol;
use crate::render::pdf::{DocLine, VectorDoc};
use crate::render::raster::RasterCanvas;
use crate::render::svg::{self, SvgSink};
use crate::scale::Scaling;
use crate::types::{CoordPair, Geometry, GeometryTag, Rgb, Srid};

use super::GeometryVariant;

/// Raster marker diameter in pixels.
const MARKER_DIAMETER: f64 = 7.0;
/// Vector-document marker radius.
const DOC_RADIUS: f64 = 2.0;
/// Vector-document stroke width.
const DOC_LINE_WIDTH: f64 = 1.25;
/// Vector-document label font size.
const DOC_FONT_SIZE: f64 = 7.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct Point;

impl Point {
    fn coords(spatial: &str) -> Result<CoordPair, ParseError> {
        match parse_as(GeometryTag::Point, spatial)? {
            Geometry::Point(pair) => Ok(pair),
            _ => unreachable!("parse_as enforces the POINT tag"),
        }
    }
}

impl GeometryVariant for Point {
    fn tag(&self) -> GeometryTag {
        GeometryTag::Point
    }

    fn render_raster(
        &self,
        spatial: &str,
        label: &str,
        color: Rgb,
        scaling: &Scaling,
        canvas: &mut dyn RasterCanvas,
    ) -> Result<(), RenderError> {
        let Some(center) = scaling.map(&Self::coords(spatial)?).point() else {
            log::debug!("incomplete point row, skipping raster marker");
            return Ok(());
        };
        let ink = canvas.allocate_color(color)?;
        canvas.stroke_ellipse(center, MARKER_DIAMETER, MARKER_DIAMETER, ink)?;
        let label = label.trim();
        if !label.is_empty() {
            let black = canvas.allocate_color(Rgb::BLACK)?;
            canvas.draw_text(center, label, black)?;
        }
        Ok(())
    }

    fn render_vector_doc(
        &self,
        spatial: &str,
        label: &str,
        color: Rgb,
        scaling: &Scaling,
        doc: &mut dyn VectorDoc,
    ) -> Result<(), RenderError> {
        let Some(center) = scaling.map(&Self::coords(spatial)?).point() else {
            return Ok(());
        };
        doc.stroke_circle(
            center,
            DOC_RADIUS,
            DocLine {
                width: DOC_LINE_WIDTH,
                color,
            },
        )?;
        let label = label.trim();
        if !label.is_empty() {
            doc.set_position(center)?;
            doc.set_font_size(DOC_FONT_SIZE)?;
            doc.text_cell(label)?;
        }
        Ok(())
    }

    fn render_svg(
        &self,
        spatial: &str,
        label: &str,
        color: Rgb,
        scaling: &Scaling,
        sink: &mut SvgSink,
    ) -> Result<(), RenderError> {
        let Some(center) = scaling.map(&Self::coords(spatial)?).point() else {
            return Ok(());
        };
        svg::marker_circle(sink, center, label, color, self.tag().css_class());
        Ok(())
    }

    fn render_web_map(
        &self,
        spatial: &str,
        srid: Srid,
        label: &str,
        color: Rgb,
        scaling: &Scaling,
        script: &mut String,
    ) -> Result<(), RenderError> {
        let Some(geometry_js) = ol::point_js(&Self::coords(spatial)?) else {
            return Ok(());
        };
        let style = serde_json::to_string(&ol::PointStyle::for_row(color, label.trim()))?;
        script.push_str(&ol::bounds_statement(srid, scaling));
        ol::add_feature(script, srid, &geometry_js, &style);
        Ok(())
    }
}
