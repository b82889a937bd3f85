//! LineString variant: an ordered pair sequence drawn as an open path.
//!
//! Pairs with a blank component are dropped from the path; a row needs at
//! least two drawable points to produce any output. The segment, polyline
//! and label helpers here are shared with the multi-part variant.

use glam::DVec2;

use crate::errors::{ParseError, RenderError, SinkError};
use crate::log;
use crate::parse::parse_as;
use crate::render::ol;
use crate::render::pdf::{DocLine, VectorDoc};
use crate::render::raster::{ColorRef, RasterCanvas};
use crate::render::svg::{self, SvgSink};
use crate::scale::Scaling;
use crate::types::{CoordPair, Geometry, GeometryTag, Rgb, Srid};

use super::GeometryVariant;

/// Vector-document stroke width for paths.
pub(crate) const DOC_PATH_WIDTH: f64 = 1.5;
/// Vector-document label font size for paths and surfaces.
pub(crate) const DOC_PATH_FONT_SIZE: f64 = 5.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct LineString;

impl LineString {
    fn coords(spatial: &str) -> Result<Vec<CoordPair>, ParseError> {
        match parse_as(GeometryTag::LineString, spatial)? {
            Geometry::LineString(pairs) => Ok(pairs),
            _ => unreachable!("parse_as enforces the LINESTRING tag"),
        }
    }
}

/// Drawable pixel positions of a path row; `None` unless two or more
/// points survive.
pub(crate) fn path_points(pairs: &[CoordPair], scaling: &Scaling) -> Option<Vec<DVec2>> {
    let points = scaling.map_drawable(pairs);
    if points.len() < 2 {
        if !points.is_empty() {
            log::debug!("path row with a single drawable point, skipping");
        }
        None
    } else {
        Some(points)
    }
}

/// Draw an open path as individual segments.
pub(crate) fn raster_segments(
    canvas: &mut dyn RasterCanvas,
    points: &[DVec2],
    ink: ColorRef,
) -> Result<(), SinkError> {
    for window in points.windows(2) {
        canvas.draw_line(window[0], window[1], ink)?;
    }
    Ok(())
}

/// Draw an open path as individual vector-document segments.
pub(crate) fn doc_segments(
    doc: &mut dyn VectorDoc,
    points: &[DVec2],
    line: DocLine,
) -> Result<(), SinkError> {
    for window in points.windows(2) {
        doc.draw_line(window[0], window[1], line)?;
    }
    Ok(())
}

/// Append one `<polyline>` row element.
pub(crate) fn polyline_element(
    sink: &mut SvgSink,
    points: &[DVec2],
    label: &str,
    color: Rgb,
    css_class: &str,
) {
    let mut attrs = vec![("points", svg::points_attr(points))];
    attrs.extend(svg::row_attrs(sink, label, css_class));
    attrs.push(("fill", "none".to_string()));
    attrs.push(("stroke", color.to_string()));
    attrs.push(("stroke-width", "2".to_string()));
    sink.element("polyline", &attrs);
}

/// Draw a path label anchored at the second vertex.
pub(crate) fn raster_path_label(
    canvas: &mut dyn RasterCanvas,
    points: &[DVec2],
    label: &str,
) -> Result<(), SinkError> {
    let label = label.trim();
    if !label.is_empty() {
        let black = canvas.allocate_color(Rgb::BLACK)?;
        canvas.draw_text(points[1], label, black)?;
    }
    Ok(())
}

/// Emit a vector-document path label anchored at the second vertex.
pub(crate) fn doc_path_label(
    doc: &mut dyn VectorDoc,
    points: &[DVec2],
    label: &str,
) -> Result<(), SinkError> {
    let label = label.trim();
    if !label.is_empty() {
        doc.set_position(points[1])?;
        doc.set_font_size(DOC_PATH_FONT_SIZE)?;
        doc.text_cell(label)?;
    }
    Ok(())
}

impl GeometryVariant for LineString {
    fn tag(&self) -> GeometryTag {
        GeometryTag::LineString
    }

    fn render_raster(
        &self,
        spatial: &str,
        label: &str,
        color: Rgb,
        scaling: &Scaling,
        canvas: &mut dyn RasterCanvas,
    ) -> Result<(), RenderError> {
        let Some(points) = path_points(&Self::coords(spatial)?, scaling) else {
            return Ok(());
        };
        let ink = canvas.allocate_color(color)?;
        raster_segments(canvas, &points, ink)?;
        raster_path_label(canvas, &points, label)?;
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
        let Some(points) = path_points(&Self::coords(spatial)?, scaling) else {
            return Ok(());
        };
        doc_segments(
            doc,
            &points,
            DocLine {
                width: DOC_PATH_WIDTH,
                color,
            },
        )?;
        doc_path_label(doc, &points, label)?;
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
        let Some(points) = path_points(&Self::coords(spatial)?, scaling) else {
            return Ok(());
        };
        polyline_element(sink, &points, label, color, self.tag().css_class());
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
        let Some(geometry_js) = ol::line_js(&Self::coords(spatial)?) else {
            return Ok(());
        };
        let style = serde_json::to_string(&ol::StrokeStyle::for_row(color, label.trim()))?;
        script.push_str(&ol::bounds_statement(srid, scaling));
        ol::add_feature(script, srid, &geometry_js, &style);
        Ok(())
    }
}
