//! Polygon variant: one or more closed rings, drawn filled.
//!
//! The first ring is the outer boundary; later rings are holes. Raster and
//! vector-document backends fill the outer boundary; SVG carries every
//! ring in one even-odd path so holes actually read as holes. A ring needs
//! at least three drawable points to contribute.

use glam::DVec2;

use crate::errors::{ParseError, RenderError};
use crate::parse::parse_as;
use crate::render::ol;
use crate::render::pdf::VectorDoc;
use crate::render::raster::RasterCanvas;
use crate::render::svg::{self, SvgSink};
use crate::scale::Scaling;
use crate::types::{Geometry, GeometryTag, Rgb, Ring, Srid};

use super::GeometryVariant;
use super::line_string::{DOC_PATH_FONT_SIZE, raster_path_label};

#[derive(Clone, Copy, Debug, Default)]
pub struct Polygon;

impl Polygon {
    fn coords(spatial: &str) -> Result<Vec<Ring>, ParseError> {
        match parse_as(GeometryTag::Polygon, spatial)? {
            Geometry::Polygon(rings) => Ok(rings),
            _ => unreachable!("parse_as enforces the POLYGON tag"),
        }
    }
}

/// Drawable pixel rings of a surface row; rings that keep fewer than three
/// points are dropped, and `None` means nothing survived.
pub(crate) fn surface_rings(rings: &[Ring], scaling: &Scaling) -> Option<Vec<Vec<DVec2>>> {
    let rings: Vec<Vec<DVec2>> = rings
        .iter()
        .map(|ring| scaling.map_drawable(ring))
        .filter(|points| points.len() >= 3)
        .collect();
    if rings.is_empty() { None } else { Some(rings) }
}

/// Append one even-odd `<path>` row element covering every ring.
pub(crate) fn surface_element(
    sink: &mut SvgSink,
    rings: &[Vec<DVec2>],
    label: &str,
    color: Rgb,
    css_class: &str,
) {
    let mut attrs = vec![("d", svg::rings_path_data(rings))];
    attrs.extend(svg::row_attrs(sink, label, css_class));
    attrs.push(("fill", color.to_string()));
    attrs.push(("fill-rule", "evenodd".to_string()));
    attrs.push(("stroke", "black".to_string()));
    attrs.push(("stroke-width", "0.5".to_string()));
    sink.element("path", &attrs);
}

impl GeometryVariant for Polygon {
    fn tag(&self) -> GeometryTag {
        GeometryTag::Polygon
    }

    fn render_raster(
        &self,
        spatial: &str,
        label: &str,
        color: Rgb,
        scaling: &Scaling,
        canvas: &mut dyn RasterCanvas,
    ) -> Result<(), RenderError> {
        let Some(rings) = surface_rings(&Self::coords(spatial)?, scaling) else {
            return Ok(());
        };
        let ink = canvas.allocate_color(color)?;
        canvas.fill_polygon(&rings[0], ink)?;
        raster_path_label(canvas, &rings[0], label)?;
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
        let Some(rings) = surface_rings(&Self::coords(spatial)?, scaling) else {
            return Ok(());
        };
        doc.fill_polygon(&rings[0], color)?;
        let label = label.trim();
        if !label.is_empty() {
            doc.set_position(rings[0][1])?;
            doc.set_font_size(DOC_PATH_FONT_SIZE)?;
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
        let Some(rings) = surface_rings(&Self::coords(spatial)?, scaling) else {
            return Ok(());
        };
        surface_element(sink, &rings, label, color, self.tag().css_class());
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
        let Some(geometry_js) = ol::polygon_js(&Self::coords(spatial)?) else {
            return Ok(());
        };
        let style = serde_json::to_string(&ol::SurfaceStyle::for_row(color, label.trim()))?;
        script.push_str(&ol::bounds_statement(srid, scaling));
        ol::add_feature(script, srid, &geometry_js, &style);
        Ok(())
    }
}
