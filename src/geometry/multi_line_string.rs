//! MultiLineString variant: independent open paths sharing one row style.
//!
//! Each part draws like a line string; the label is attached once, to the
//! first part that survives.

use crate::errors::{ParseError, RenderError};
use crate::parse::parse_as;
use crate::render::ol;
use crate::render::pdf::{DocLine, VectorDoc};
use crate::render::raster::RasterCanvas;
use crate::render::svg::SvgSink;
use crate::scale::Scaling;
use crate::types::{CoordPair, Geometry, GeometryTag, Rgb, Srid};

use super::GeometryVariant;
use super::line_string::{
    DOC_PATH_WIDTH, doc_path_label, doc_segments, path_points, polyline_element,
    raster_path_label, raster_segments,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct MultiLineString;

impl MultiLineString {
    fn coords(spatial: &str) -> Result<Vec<Vec<CoordPair>>, ParseError> {
        match parse_as(GeometryTag::MultiLineString, spatial)? {
            Geometry::MultiLineString(parts) => Ok(parts),
            _ => unreachable!("parse_as enforces the MULTILINESTRING tag"),
        }
    }
}

impl GeometryVariant for MultiLineString {
    fn tag(&self) -> GeometryTag {
        GeometryTag::MultiLineString
    }

    fn render_raster(
        &self,
        spatial: &str,
        label: &str,
        color: Rgb,
        scaling: &Scaling,
        canvas: &mut dyn RasterCanvas,
    ) -> Result<(), RenderError> {
        let mut first = true;
        for part in &Self::coords(spatial)? {
            let Some(points) = path_points(part, scaling) else {
                continue;
            };
            let ink = canvas.allocate_color(color)?;
            raster_segments(canvas, &points, ink)?;
            if first {
                raster_path_label(canvas, &points, label)?;
                first = false;
            }
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
        let line = DocLine {
            width: DOC_PATH_WIDTH,
            color,
        };
        let mut first = true;
        for part in &Self::coords(spatial)? {
            let Some(points) = path_points(part, scaling) else {
                continue;
            };
            doc_segments(doc, &points, line)?;
            if first {
                doc_path_label(doc, &points, label)?;
                first = false;
            }
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
        for part in &Self::coords(spatial)? {
            if let Some(points) = path_points(part, scaling) {
                polyline_element(sink, &points, label, color, self.tag().css_class());
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
        let parts: Vec<String> = Self::coords(spatial)?
            .iter()
            .filter_map(|part| ol::line_js(part))
            .collect();
        let Some(geometry_js) = ol::multi_js("MultiLineString", parts) else {
            return Ok(());
        };
        let style = serde_json::to_string(&ol::StrokeStyle::for_row(color, label.trim()))?;
        script.push_str(&ol::bounds_statement(srid, scaling));
        ol::add_feature(script, srid, &geometry_js, &style);
        Ok(())
    }
}
