//! End-to-end scenarios for the render engine: one shared scaling across a
//! heterogeneous batch, four output formats, and the editor round trip.

use glam::DVec2;
use wktplot::{
    ColorRef, DocLine, EditorParams, Extent, GeometryTag, GeometryVariant, IdSource, OutputSink,
    PlotOptions, RasterCanvas, RenderError, Rgb, Row, Scaling, SinkError, Srid, SvgSink,
    VectorDoc, handler_for, part_from_fragment, render_row, render_rows_raster,
    render_rows_vector_doc, scan_rows, svg_document, web_map_script,
};

// =============================================================================
// Recording sinks
// =============================================================================

/// A raster canvas that records every drawing request as a line of text.
#[derive(Default)]
struct RecordingCanvas {
    calls: Vec<String>,
    fail_on_draw: bool,
}

impl RasterCanvas for RecordingCanvas {
    fn allocate_color(&mut self, color: Rgb) -> Result<ColorRef, SinkError> {
        self.calls.push(format!("alloc {color}"));
        Ok(ColorRef(self.calls.len() as u32))
    }

    fn stroke_ellipse(
        &mut self,
        center: DVec2,
        width: f64,
        height: f64,
        color: ColorRef,
    ) -> Result<(), SinkError> {
        if self.fail_on_draw {
            return Err(SinkError::new("canvas is gone"));
        }
        self.calls.push(format!(
            "ellipse {}x{} at {},{} color {}",
            width, height, center.x, center.y, color.0
        ));
        Ok(())
    }

    fn draw_line(&mut self, from: DVec2, to: DVec2, color: ColorRef) -> Result<(), SinkError> {
        self.calls.push(format!(
            "line {},{} -> {},{} color {}",
            from.x, from.y, to.x, to.y, color.0
        ));
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[DVec2], color: ColorRef) -> Result<(), SinkError> {
        self.calls
            .push(format!("polygon {} points color {}", points.len(), color.0));
        Ok(())
    }

    fn draw_text(&mut self, pos: DVec2, text: &str, color: ColorRef) -> Result<(), SinkError> {
        self.calls.push(format!(
            "text {:?} at {},{} color {}",
            text, pos.x, pos.y, color.0
        ));
        Ok(())
    }
}

/// A vector document that records every command as a line of text.
#[derive(Default)]
struct RecordingDoc {
    calls: Vec<String>,
}

impl VectorDoc for RecordingDoc {
    fn stroke_circle(
        &mut self,
        center: DVec2,
        radius: f64,
        line: DocLine,
    ) -> Result<(), SinkError> {
        self.calls.push(format!(
            "circle r{} at {},{} w{} {}",
            radius, center.x, center.y, line.width, line.color
        ));
        Ok(())
    }

    fn draw_line(&mut self, from: DVec2, to: DVec2, line: DocLine) -> Result<(), SinkError> {
        self.calls.push(format!(
            "line {},{} -> {},{} w{}",
            from.x, from.y, to.x, to.y, line.width
        ));
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[DVec2], fill: Rgb) -> Result<(), SinkError> {
        self.calls
            .push(format!("polygon {} points {}", points.len(), fill));
        Ok(())
    }

    fn set_position(&mut self, pos: DVec2) -> Result<(), SinkError> {
        self.calls.push(format!("pos {},{}", pos.x, pos.y));
        Ok(())
    }

    fn set_font_size(&mut self, size: f64) -> Result<(), SinkError> {
        self.calls.push(format!("font {size}"));
        Ok(())
    }

    fn text_cell(&mut self, text: &str) -> Result<(), SinkError> {
        self.calls.push(format!("cell {text:?}"));
        Ok(())
    }
}

fn red() -> Rgb {
    "#FF0000".parse().unwrap()
}

/// The worked scaling from the scenarios: extent 0..10 on both axes onto a
/// 100x100 canvas, so (3,4) lands on (30,40).
fn tens_scaling() -> Scaling {
    let mut extent = Extent::new();
    extent.expand(0.0, 0.0);
    extent.expand(10.0, 10.0);
    extent.freeze(100.0, 100.0, 0.0)
}

// =============================================================================
// Batch scan and freeze
// =============================================================================

#[test]
fn batch_scan_covers_heterogeneous_rows() {
    let rows = [
        Row::new("POINT(0 0)", "a", red()),
        Row::new("POINT(10 0)", "b", red()),
        Row::new("POINT(0 10)", "c", red()),
    ];
    let extent = scan_rows(&rows).unwrap();
    assert_eq!(
        (extent.min_x, extent.max_x, extent.min_y, extent.max_y),
        (0.0, 10.0, 0.0, 10.0)
    );
    let scaling = extent.freeze(100.0, 100.0, 0.0);
    assert_eq!(scaling.scale_x, 10.0);
    assert_eq!(scaling.scale_y, 10.0);
}

#[test]
fn scan_rejects_malformed_rows() {
    let rows = [Row::new("POINT(banana )", "x", red())];
    assert!(matches!(
        scan_rows(&rows),
        Err(RenderError::Parse(_))
    ));
}

#[test]
fn scan_rejects_unknown_tags() {
    let rows = [Row::new("CIRCULARSTRING(0 0,1 1,2 0)", "x", red())];
    assert!(matches!(
        scan_rows(&rows),
        Err(RenderError::Variant(_))
    ));
}

// =============================================================================
// Scenario: POINT(3 4) as SVG
// =============================================================================

#[test]
fn point_row_renders_an_svg_marker() {
    let mut sink = SvgSink::with_ids(IdSource::Sequential(0));
    let row = Row::new("POINT(3 4)", "A", red());
    render_row(&row, &tens_scaling(), &mut OutputSink::Svg(&mut sink)).unwrap();
    let out = sink.into_string();
    assert!(out.contains(r#"<circle cx="30" cy="40" r="3""#), "{out}");
    assert!(out.contains(r##"stroke="#FF0000""##), "{out}");
}

#[test]
fn svg_document_wraps_the_batch() {
    let rows = [
        Row::new("POINT(3 4)", "A", red()),
        Row::new("LINESTRING(0 0,10 0,10 10)", "edge", "#0000FF".parse().unwrap()),
        Row::new("POLYGON((0 0,10 0,10 10,0 0))", "lot", "#00CC00".parse().unwrap()),
    ];
    let options = PlotOptions {
        width: 100.0,
        height: 100.0,
        padding: 0.0,
    };
    let svg = svg_document(&rows, &options, IdSource::Sequential(0)).unwrap();
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">"#));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains("<circle"));
    assert!(svg.contains("<polyline"));
    assert!(svg.contains("<path"));
}

// =============================================================================
// Scenario: blank coordinates are silent no-ops in every format
// =============================================================================

#[test]
fn blank_point_leaves_every_sink_unchanged() {
    let scaling = tens_scaling();
    for spatial in ["POINT( )", "POINT(5 )", "POINT( 4)"] {
        let row = Row::new(spatial, "A", red());

        let mut canvas = RecordingCanvas::default();
        render_row(&row, &scaling, &mut OutputSink::Raster(&mut canvas)).unwrap();
        assert!(canvas.calls.is_empty(), "raster touched for {spatial:?}");

        let mut doc = RecordingDoc::default();
        render_row(&row, &scaling, &mut OutputSink::VectorDoc(&mut doc)).unwrap();
        assert!(doc.calls.is_empty(), "doc touched for {spatial:?}");

        let mut sink = SvgSink::with_ids(IdSource::Sequential(0));
        render_row(&row, &scaling, &mut OutputSink::Svg(&mut sink)).unwrap();
        assert_eq!(sink.as_str(), "", "svg touched for {spatial:?}");

        let mut script = String::new();
        render_row(&row, &scaling, &mut OutputSink::WebMap(&mut script)).unwrap();
        assert_eq!(script, "", "script touched for {spatial:?}");
    }
}

#[test]
fn blank_rows_do_not_distort_the_batch_extent() {
    let rows = [
        Row::new("POINT(2 2)", "a", red()),
        Row::new("POINT( )", "b", red()),
        Row::new("POINT(8 8)", "c", red()),
    ];
    let extent = scan_rows(&rows).unwrap();
    assert_eq!((extent.min_x, extent.max_x), (2.0, 8.0));
}

// =============================================================================
// Raster and vector-document formats
// =============================================================================

#[test]
fn point_row_requests_raster_primitives() {
    let row = Row::new("POINT(3 4)", "A", red());
    let mut canvas = RecordingCanvas::default();
    render_rows_raster(&[row], &tens_scaling(), &mut canvas).unwrap();
    assert_eq!(
        canvas.calls,
        vec![
            "alloc #FF0000".to_string(),
            "ellipse 7x7 at 30,40 color 1".to_string(),
            "alloc #000000".to_string(),
            "text \"A\" at 30,40 color 3".to_string(),
        ]
    );
}

#[test]
fn unlabeled_point_draws_no_text() {
    let row = Row::new("POINT(3 4)", "   ", red());
    let mut canvas = RecordingCanvas::default();
    render_rows_raster(&[row], &tens_scaling(), &mut canvas).unwrap();
    assert_eq!(canvas.calls.len(), 2);
}

#[test]
fn point_row_requests_document_commands() {
    let row = Row::new("POINT(3 4)", "A", red());
    let mut doc = RecordingDoc::default();
    render_rows_vector_doc(&[row], &tens_scaling(), &mut doc).unwrap();
    assert_eq!(
        doc.calls,
        vec![
            "circle r2 at 30,40 w1.25 #FF0000".to_string(),
            "pos 30,40".to_string(),
            "font 7".to_string(),
            "cell \"A\"".to_string(),
        ]
    );
}

#[test]
fn sink_failures_propagate_unchanged() {
    let row = Row::new("POINT(3 4)", "A", red());
    let mut canvas = RecordingCanvas {
        fail_on_draw: true,
        ..Default::default()
    };
    let err = render_rows_raster(&[row], &tens_scaling(), &mut canvas).unwrap_err();
    assert!(matches!(err, RenderError::Sink(_)));
    assert!(err.to_string().contains("canvas is gone"));
}

// =============================================================================
// Web-map script format
// =============================================================================

#[test]
fn web_map_script_emits_bounds_and_features() {
    let rows = [
        Row::new("POINT(3 4)", "A", red()).with_srid(Srid(4326)),
        Row::new("LINESTRING(0 0,10 10)", "edge", red()),
    ];
    let options = PlotOptions {
        width: 100.0,
        height: 100.0,
        padding: 0.0,
    };
    let script = web_map_script(&rows, &options).unwrap();
    assert_eq!(script.matches("bound = bound.extend(new OpenLayers.Bounds(0, 0, 10, 10)").count(), 2);
    assert!(script.contains("new OpenLayers.Geometry.Point(3, 4)"));
    assert!(script.contains("new OpenLayers.Geometry.LineString(new Array("));
    assert!(script.contains(r#"new OpenLayers.Projection("EPSG:4326")"#));
    assert!(script.contains(r#""pointRadius":3"#));
}

#[test]
fn web_map_rows_keep_their_own_srid() {
    let rows = [Row::from_value("SRID=3857;POINT(1 2)", "A", red())];
    let script = web_map_script(&rows, &PlotOptions::default()).unwrap();
    assert!(script.contains("EPSG:3857"));
}

// =============================================================================
// Editor round trip
// =============================================================================

#[test]
fn editor_round_trip_preserves_blank_fields() {
    // x entered as "5", y left blank.
    let part = part_from_fragment(GeometryTag::Point, "POINT(5 )").unwrap();
    let regenerated = handler_for(GeometryTag::Point).generate_wkt(&part).unwrap();
    assert_eq!(regenerated, "POINT(5 )");

    let reparsed = part_from_fragment(GeometryTag::Point, &regenerated).unwrap();
    assert_eq!(part, reparsed);
}

#[test]
fn editor_whole_value_round_trip() {
    let params = EditorParams::from_value("SRID=4326;GEOMETRYCOLLECTION(POINT(1 2),LINESTRING(0 0,1 1))").unwrap();
    assert_eq!(params.srid, Srid(4326));
    assert_eq!(params.part_count(), 2);
    assert_eq!(
        params.to_value(),
        "SRID=4326;GEOMETRYCOLLECTION(POINT(1 2),LINESTRING(0 0,1 1))"
    );
}

// =============================================================================
// Collections through the whole pipeline
// =============================================================================

#[test]
fn collection_row_renders_every_member() {
    let row = Row::new(
        "GEOMETRYCOLLECTION(POINT(3 4),POLYGON((0 0,10 0,10 10,0 0)))",
        "mix",
        red(),
    );
    let extent = scan_rows(std::slice::from_ref(&row)).unwrap();
    assert_eq!((extent.min_x, extent.max_x), (0.0, 10.0));

    let mut sink = SvgSink::with_ids(IdSource::Sequential(0));
    render_row(
        &row,
        &extent.freeze(100.0, 100.0, 0.0),
        &mut OutputSink::Svg(&mut sink),
    )
    .unwrap();
    let out = sink.into_string();
    assert!(out.contains("<circle"));
    assert!(out.contains("<path"));
}

// =============================================================================
// Degenerate batches
// =============================================================================

#[test]
fn single_point_batch_centers_on_the_canvas() {
    let rows = [Row::new("POINT(42 17)", "A", red())];
    let extent = scan_rows(&rows).unwrap();
    let scaling = extent.freeze(100.0, 100.0, 0.0);
    assert_eq!(scaling.scale_x, 1.0);
    assert_eq!(scaling.scale_y, 1.0);

    let mut sink = SvgSink::with_ids(IdSource::Sequential(0));
    render_row(&rows[0], &scaling, &mut OutputSink::Svg(&mut sink)).unwrap();
    assert!(sink.as_str().contains(r#"cx="50" cy="50""#));
}

#[test]
fn all_blank_batch_still_freezes() {
    let rows = [Row::new("POINT( )", "A", red())];
    let extent = scan_rows(&rows).unwrap();
    let scaling = extent.freeze(100.0, 100.0, 0.0);
    assert_eq!(scaling.scale_x, 1.0);
    let svg = svg_document(
        &rows,
        &PlotOptions {
            width: 100.0,
            height: 100.0,
            padding: 0.0,
        },
        IdSource::Sequential(0),
    )
    .unwrap();
    assert_eq!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"></svg>"#
    );
}
