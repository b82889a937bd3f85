//! Format backends and the batch render driver.
//!
//! A batch renders in two passes sharing one coordinate frame: scan every
//! row into an [`Extent`], freeze it into a [`Scaling`], then hand each row
//! to its variant handler with the sink for the selected output format.
//!
//! Submodules:
//! - `raster`: raster canvas collaborator contract
//! - `pdf`: vector-document collaborator contract
//! - `svg`: SVG fragment sink and markup helpers
//! - `ol`: OpenLayers script statements and style literals

pub mod ol;
pub mod pdf;
pub mod raster;
pub mod svg;

use crate::errors::RenderError;
use crate::geometry::{GeometryVariant, Handler, handler_for_name};
use crate::log;
use crate::parse::split_srid;
use crate::scale::{Extent, Scaling};
use crate::types::{Rgb, Srid};

pub use pdf::{DocLine, VectorDoc};
pub use raster::{ColorRef, RasterCanvas};
pub use svg::{IdSource, SvgSink};

/// Canvas geometry and padding policy for one render batch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotOptions {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl PlotOptions {
    /// Freeze a scanned extent onto this canvas.
    pub fn freeze(&self, extent: Extent) -> Scaling {
        extent.freeze(self.width, self.height, self.padding)
    }
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            width: 600.0,
            height: 450.0,
            padding: 15.0,
        }
    }
}

/// One row of a render batch: the WKT text, its display label, the stroke
/// color, and the row's spatial reference. Ephemeral; borrowed per row.
#[derive(Clone, Copy, Debug)]
pub struct Row<'a> {
    pub spatial: &'a str,
    pub label: &'a str,
    pub color: Rgb,
    pub srid: Srid,
}

impl<'a> Row<'a> {
    pub fn new(spatial: &'a str, label: &'a str, color: Rgb) -> Self {
        Row {
            spatial,
            label,
            color,
            srid: Srid::UNSPECIFIED,
        }
    }

    pub fn with_srid(mut self, srid: Srid) -> Self {
        self.srid = srid;
        self
    }

    /// Build a row from a raw column value, splitting off any `SRID=n;`
    /// wrapper.
    pub fn from_value(value: &'a str, label: &'a str, color: Rgb) -> Self {
        let (srid, spatial) = split_srid(value);
        Row {
            spatial,
            label,
            color,
            srid,
        }
    }

    /// The registry handler for this row, selected by the tag text before
    /// the opening parenthesis.
    pub fn handler(&self) -> Result<Handler, RenderError> {
        let name = self.spatial.split('(').next().unwrap_or("").trim();
        Ok(handler_for_name(name)?)
    }
}

/// The caller-owned output target for one batch.
pub enum OutputSink<'a> {
    Raster(&'a mut dyn RasterCanvas),
    VectorDoc(&'a mut dyn VectorDoc),
    Svg(&'a mut SvgSink),
    WebMap(&'a mut String),
}

/// Scan pass: fold every row of the batch into one extent.
pub fn scan_rows(rows: &[Row<'_>]) -> Result<Extent, RenderError> {
    let mut extent = Extent::new();
    for row in rows {
        row.handler()?.scan_row(row.spatial, &mut extent)?;
    }
    log::debug!(rows = rows.len(), "scan pass complete");
    Ok(extent)
}

/// Render one row into the selected sink using the frozen batch scaling.
pub fn render_row(
    row: &Row<'_>,
    scaling: &Scaling,
    sink: &mut OutputSink<'_>,
) -> Result<(), RenderError> {
    let handler = row.handler()?;
    match sink {
        OutputSink::Raster(canvas) => {
            handler.render_raster(row.spatial, row.label, row.color, scaling, &mut **canvas)
        }
        OutputSink::VectorDoc(doc) => {
            handler.render_vector_doc(row.spatial, row.label, row.color, scaling, &mut **doc)
        }
        OutputSink::Svg(svg) => {
            handler.render_svg(row.spatial, row.label, row.color, scaling, &mut **svg)
        }
        OutputSink::WebMap(script) => handler.render_web_map(
            row.spatial,
            row.srid,
            row.label,
            row.color,
            scaling,
            &mut **script,
        ),
    }
}

/// Scan, freeze, render every row as SVG, and wrap the fragment in an
/// `<svg>` document sized to the canvas.
pub fn svg_document(
    rows: &[Row<'_>],
    options: &PlotOptions,
    ids: IdSource,
) -> Result<String, RenderError> {
    let scaling = options.freeze(scan_rows(rows)?);
    let mut sink = SvgSink::with_ids(ids);
    for row in rows {
        row.handler()?
            .render_svg(row.spatial, row.label, row.color, &scaling, &mut sink)?;
    }
    Ok(format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">{}</svg>",
        svg::fmt_num(options.width),
        svg::fmt_num(options.height),
        sink.into_string()
    ))
}

/// Scan, freeze, and emit the OpenLayers statements for every row.
pub fn web_map_script(rows: &[Row<'_>], options: &PlotOptions) -> Result<String, RenderError> {
    let scaling = options.freeze(scan_rows(rows)?);
    let mut script = String::new();
    for row in rows {
        row.handler()?.render_web_map(
            row.spatial,
            row.srid,
            row.label,
            row.color,
            &scaling,
            &mut script,
        )?;
    }
    Ok(script)
}

/// Render every row onto a caller-supplied raster canvas.
pub fn render_rows_raster(
    rows: &[Row<'_>],
    scaling: &Scaling,
    canvas: &mut dyn RasterCanvas,
) -> Result<(), RenderError> {
    for row in rows {
        row.handler()?
            .render_raster(row.spatial, row.label, row.color, scaling, canvas)?;
    }
    Ok(())
}

/// Render every row into a caller-supplied vector document.
pub fn render_rows_vector_doc(
    rows: &[Row<'_>],
    scaling: &Scaling,
    doc: &mut dyn VectorDoc,
) -> Result<(), RenderError> {
    for row in rows {
        row.handler()?
            .render_vector_doc(row.spatial, row.label, row.color, scaling, doc)?;
    }
    Ok(())
}
