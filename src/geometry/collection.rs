//! GeometryCollection variant: heterogeneous members sharing one row.
//!
//! Rendering splits the value into its members and delegates each to its
//! own handler through the registry, with the row's label and style. The
//! grammar restricts members to non-collection variants, so delegation
//! cannot recurse.

use crate::errors::{ParseError, RenderError};
use crate::parse::parse_as;
use crate::render::pdf::VectorDoc;
use crate::render::raster::RasterCanvas;
use crate::render::svg::SvgSink;
use crate::scale::Scaling;
use crate::types::{Geometry, GeometryTag, Rgb, Srid};

use super::{GeometryVariant, handler_for};

#[derive(Clone, Copy, Debug, Default)]
pub struct GeometryCollection;

impl GeometryCollection {
    fn members(spatial: &str) -> Result<Vec<Geometry>, ParseError> {
        match parse_as(GeometryTag::GeometryCollection, spatial)? {
            Geometry::GeometryCollection(members) => Ok(members),
            _ => unreachable!("parse_as enforces the GEOMETRYCOLLECTION tag"),
        }
    }
}

impl GeometryVariant for GeometryCollection {
    fn tag(&self) -> GeometryTag {
        GeometryTag::GeometryCollection
    }

    fn render_raster(
        &self,
        spatial: &str,
        label: &str,
        color: Rgb,
        scaling: &Scaling,
        canvas: &mut dyn RasterCanvas,
    ) -> Result<(), RenderError> {
        for member in Self::members(spatial)? {
            let wkt = member.to_string();
            handler_for(member.tag()).render_raster(&wkt, label, color, scaling, canvas)?;
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
        for member in Self::members(spatial)? {
            let wkt = member.to_string();
            handler_for(member.tag()).render_vector_doc(&wkt, label, color, scaling, doc)?;
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
        for member in Self::members(spatial)? {
            let wkt = member.to_string();
            handler_for(member.tag()).render_svg(&wkt, label, color, scaling, sink)?;
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
        for member in Self::members(spatial)? {
            let wkt = member.to_string();
            handler_for(member.tag()).render_web_map(&wkt, srid, label, color, scaling, script)?;
        }
        Ok(())
    }
}
