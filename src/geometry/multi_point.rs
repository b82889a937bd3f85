//! MultiPoint variant: a pair sequence drawn as independent markers.
//!
//! Each drawable pair gets its own marker; the label is attached once, to
//! the first drawable point.

use crate::errors::{ParseError, RenderError};
use crate::parse::parse_as;
use crate::render::ol;
use crate::render::pdf::{DocLine, VectorDoc};
use crate::render::raster::RasterCanvas;
use crate::render::svg::{self, SvgSink};
use crate::scale::Scaling;
use crate::types::{CoordPair, Geometry, GeometryTag, Rgb, Srid};

use super::GeometryVariant;

/// Raster marker diameter, matching the point variant.
const MARKER_DIAMETER: f64 = 7.0;
/// Vector-document marker radius, matching the point variant.
const DOC_RADIUS: f64 = 2.0;
/// Vector-document stroke width, matching the point variant.
const DOC_LINE_WIDTH: f64 = 1.25;
/// Vector-document label font size, matching the point variant.
const DOC_FONT_SIZE: f64 = 7.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct MultiPoint;

impl MultiPoint {
    fn coords(spatial: &str) -> Result<Vec<CoordPair>, ParseError> {
        match parse_as(GeometryTag::MultiPoint, spatial)? {
            Geometry::MultiPoint(pairs) => Ok(pairs),
            _ => unreachable!("parse_as enforces the MULTIPOINT tag"),
        }
    }
}

impl GeometryVariant for MultiPoint {
    fn tag(&self) -> GeometryTag {
        GeometryTag::MultiPoint
    }

    fn render_raster(
        &self,
        spatial: &str,
        label: &str,
        color: Rgb,
        scaling: &Scaling,
        canvas: &mut dyn RasterCanvas,
    ) -> Result<(), RenderError> {
        let points = scaling.map_drawable(&Self::coords(spatial)?);
        if points.is_empty() {
            return Ok(());
        }
        let ink = canvas.allocate_color(color)?;
        for center in &points {
            canvas.stroke_ellipse(*center, MARKER_DIAMETER, MARKER_DIAMETER, ink)?;
        }
        let label = label.trim();
        if !label.is_empty() {
            let black = canvas.allocate_color(Rgb::BLACK)?;
            canvas.draw_text(points[0], label, black)?;
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
        let points = scaling.map_drawable(&Self::coords(spatial)?);
        if points.is_empty() {
            return Ok(());
        }
        let line = DocLine {
            width: DOC_LINE_WIDTH,
            color,
        };
        for center in &points {
            doc.stroke_circle(*center, DOC_RADIUS, line)?;
        }
        let label = label.trim();
        if !label.is_empty() {
            doc.set_position(points[0])?;
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
        for pair in &Self::coords(spatial)? {
            if let Some(center) = scaling.map(pair).point() {
                svg::marker_circle(sink, center, label, color, self.tag().css_class());
            }
        }
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
        let pairs = Self::coords(spatial)?;
        let parts: Vec<String> = pairs.iter().filter_map(ol::point_js).collect();
        let Some(geometry_js) = ol::multi_js("MultiPoint", parts) else {
            return Ok(());
        };
        let style = serde_json::to_string(&ol::PointStyle::for_row(color, label.trim()))?;
        script.push_str(&ol::bounds_statement(srid, scaling));
        ol::add_feature(script, srid, &geometry_js, &style);
        Ok(())
    }
}
