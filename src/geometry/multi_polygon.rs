//! MultiPolygon variant: independent filled surfaces sharing one row style.
//!
//! Each part draws like a polygon; the label is attached once, to the
//! first part that survives.

use crate::errors::{ParseError, RenderError};
use crate::parse::parse_as;
use crate::render::ol;
use crate::render::pdf::VectorDoc;
use crate::render::raster::RasterCanvas;
use crate::render::svg::SvgSink;
use crate::scale::Scaling;
use crate::types::{Geometry, GeometryTag, Rgb, Ring, Srid};

use super::GeometryVariant;
use super::line_string::{DOC_PATH_FONT_SIZE, raster_path_label};
use super::polygon::{surface_element, surface_rings};

#[derive(Clone, Copy, Debug, Default)]
pub struct MultiPolygon;

impl MultiPolygon {
    fn coords(spatial: &str) -> Result<Vec<Vec<Ring>>, ParseError> {
        match parse_as(GeometryTag::MultiPolygon, spatial)? {
            Geometry::MultiPolygon(parts) => Ok(parts),
            _ => unreachable!("parse_as enforces the MULTIPOLYGON tag"),
        }
    }
}

impl GeometryVariant for MultiPolygon {
    fn tag(&self) -> GeometryTag {
        GeometryTag::MultiPolygon
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
            let Some(rings) = surface_rings(part, scaling) else {
                continue;
            };
            let ink = canvas.allocate_color(color)?;
            canvas.fill_polygon(&rings[0], ink)?;
            if first {
                raster_path_label(canvas, &rings[0], label)?;
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
        let mut first = true;
        for part in &Self::coords(spatial)? {
            let Some(rings) = surface_rings(part, scaling) else {
                continue;
            };
            doc.fill_polygon(&rings[0], color)?;
            let label = label.trim();
            if first && !label.is_empty() {
                doc.set_position(rings[0][1])?;
                doc.set_font_size(DOC_PATH_FONT_SIZE)?;
                doc.text_cell(label)?;
            }
            first = false;
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
            if let Some(rings) = surface_rings(part, scaling) {
                surface_element(sink, &rings, label, color, self.tag().css_class());
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
            .filter_map(|part| ol::polygon_js(part))
            .collect();
        let Some(geometry_js) = ol::multi_js("MultiPolygon", parts) else {
            return Ok(());
        };
        let style = serde_json::to_string(&ol::SurfaceStyle::for_row(color, label.trim()))?;
        script.push_str(&ol::bounds_statement(srid, scaling));
        ol::add_feature(script, srid, &geometry_js, &style);
        Ok(())
    }
}
