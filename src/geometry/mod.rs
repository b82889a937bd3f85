//! Geometry variant registry.
//!
//! One stateless handler per WKT tag, all exposing the same operation
//! contract. Handlers are zero-sized `Copy` values, so "one shared
//! instance" holds trivially: the same handler value serves every row of
//! every batch, on any thread.

pub mod collection;
pub mod line_string;
pub mod multi_line_string;
pub mod multi_point;
pub mod multi_polygon;
pub mod point;
pub mod polygon;

use enum_dispatch::enum_dispatch;

use crate::errors::{ParseError, RenderError, UnsupportedVariant};
use crate::parse::parse_as;
use crate::render::pdf::VectorDoc;
use crate::render::raster::RasterCanvas;
use crate::render::svg::SvgSink;
use crate::scale::{Extent, Scaling};
use crate::types::{Geometry, GeometryTag, Rgb, Srid};

pub use collection::GeometryCollection;
pub use line_string::LineString;
pub use multi_line_string::MultiLineString;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;

/// The operation contract shared by every geometry variant.
///
/// Render methods are pure with respect to their inputs and only mutate
/// the caller's sink. An incomplete coordinate pair is a silent no-op, not
/// an error; sink failures propagate unchanged.
#[enum_dispatch]
pub trait GeometryVariant {
    /// The WKT tag this handler answers to.
    fn tag(&self) -> GeometryTag;

    /// Scan pass: fold one row's coordinates into the running extent.
    fn scan_row(&self, spatial: &str, extent: &mut Extent) -> Result<(), ParseError> {
        let geometry = parse_as(self.tag(), spatial)?;
        extent.scan(geometry.coords());
        Ok(())
    }

    /// Request raster primitives for one row.
    fn render_raster(
        &self,
        spatial: &str,
        label: &str,
        color: Rgb,
        scaling: &Scaling,
        canvas: &mut dyn RasterCanvas,
    ) -> Result<(), RenderError>;

    /// Request vector-document drawing commands for one row.
    fn render_vector_doc(
        &self,
        spatial: &str,
        label: &str,
        color: Rgb,
        scaling: &Scaling,
        doc: &mut dyn VectorDoc,
    ) -> Result<(), RenderError>;

    /// Append SVG markup for one row.
    fn render_svg(
        &self,
        spatial: &str,
        label: &str,
        color: Rgb,
        scaling: &Scaling,
        sink: &mut SvgSink,
    ) -> Result<(), RenderError>;

    /// Append OpenLayers statements for one row.
    fn render_web_map(
        &self,
        spatial: &str,
        srid: Srid,
        label: &str,
        color: Rgb,
        scaling: &Scaling,
        script: &mut String,
    ) -> Result<(), RenderError>;

    /// Editor parameters -> WKT fragment for this variant.
    fn generate_wkt(&self, part: &Geometry) -> Result<String, UnsupportedVariant> {
        if part.tag() == self.tag() {
            Ok(part.to_string())
        } else {
            Err(UnsupportedVariant {
                name: part.tag().as_wkt().to_string(),
            })
        }
    }

    /// WKT fragment -> editor parameters, coordinate text kept verbatim.
    fn editor_params(&self, spatial: &str) -> Result<Geometry, ParseError> {
        parse_as(self.tag(), spatial)
    }
}

/// The closed handler set, one shared instance per variant.
#[enum_dispatch(GeometryVariant)]
#[derive(Clone, Copy, Debug)]
pub enum Handler {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

/// The handler for a tag. Total: the registry is a closed set.
pub fn handler_for(tag: GeometryTag) -> Handler {
    match tag {
        GeometryTag::Point => Handler::Point(Point),
        GeometryTag::LineString => Handler::LineString(LineString),
        GeometryTag::Polygon => Handler::Polygon(Polygon),
        GeometryTag::MultiPoint => Handler::MultiPoint(MultiPoint),
        GeometryTag::MultiLineString => Handler::MultiLineString(MultiLineString),
        GeometryTag::MultiPolygon => Handler::MultiPolygon(MultiPolygon),
        GeometryTag::GeometryCollection => Handler::GeometryCollection(GeometryCollection),
    }
}

/// A handler by WKT tag name. Unknown names are an error, never a default.
pub fn handler_for_name(name: &str) -> Result<Handler, UnsupportedVariant> {
    Ok(handler_for(GeometryTag::from_wkt(name)?))
}
