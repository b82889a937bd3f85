//! Render Well-Known Text geometry to several visual targets.
//!
//! A batch of heterogeneous WKT rows is scanned into one bounding
//! [`Extent`], frozen into a shared [`Scaling`], and then each row is
//! dispatched through the variant registry to one of four output formats:
//! raster canvas primitives, vector-document drawing commands, SVG markup,
//! or an OpenLayers script snippet. The editor bridge converts values back
//! and forth between WKT and a typed parameter structure, preserving blank
//! coordinate fields.
//!
//! ```
//! use wktplot::{IdSource, PlotOptions, Row, svg_document};
//!
//! let rows = [
//!     Row::new("POINT(3 4)", "A", "#FF0000".parse().unwrap()),
//!     Row::new("LINESTRING(0 0,10 0,10 10)", "edge", "#0000FF".parse().unwrap()),
//! ];
//! let svg = svg_document(&rows, &PlotOptions::default(), IdSource::Sequential(0)).unwrap();
//! assert!(svg.contains("<circle"));
//! assert!(svg.contains("<polyline"));
//! ```

pub mod editor;
pub mod errors;
pub mod geometry;
pub mod log;
pub mod parse;
pub mod render;
pub mod scale;
pub mod types;

pub use editor::{EditorParams, fragment_to_wkt, part_from_fragment};
pub use errors::{ParseError, RenderError, SinkError, UnsupportedVariant};
pub use geometry::{GeometryVariant, Handler, handler_for, handler_for_name};
pub use parse::{parse_as, parse_value, parse_wkt, split_srid};
pub use render::{
    ColorRef, DocLine, IdSource, OutputSink, PlotOptions, RasterCanvas, Row, SvgSink, VectorDoc,
    render_row, render_rows_raster, render_rows_vector_doc, scan_rows, svg_document,
    web_map_script,
};
pub use scale::{Extent, PixelPair, Scaling};
pub use types::{
    Coord, CoordPair, Decimal, Geometry, GeometryTag, GeometryValue, Rgb, Ring, Srid,
};
