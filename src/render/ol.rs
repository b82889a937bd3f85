//! OpenLayers script generation.
//!
//! Each row becomes a bounds-extension statement plus a feature
//! construction statement appended to a plain string sink. Coordinates are
//! emitted verbatim (raw geometry text, not canvas pixels); the script
//! reprojects them client-side from the row's reference system into the
//! map viewer's own projection. Style literals are serialized as JSON with
//! the exact key names the viewer's scripting API expects.

use serde::Serialize;

use crate::scale::Scaling;
use crate::types::{CoordPair, Rgb, Ring, Srid};

use super::svg::fmt_num;

/// Style literal attached to point features.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointStyle<'a> {
    pub point_radius: u32,
    pub fill_color: &'a str,
    pub stroke_color: String,
    pub stroke_width: u32,
    pub label: &'a str,
    pub label_y_offset: i32,
    pub font_size: u32,
}

impl<'a> PointStyle<'a> {
    pub fn for_row(color: Rgb, label: &'a str) -> Self {
        PointStyle {
            point_radius: 3,
            fill_color: "#ffffff",
            stroke_color: color.to_string(),
            stroke_width: 2,
            label,
            label_y_offset: -8,
            font_size: 10,
        }
    }
}

/// Style literal attached to line features.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeStyle<'a> {
    pub stroke_color: String,
    pub stroke_width: u32,
    pub label: &'a str,
    pub font_size: u32,
}

impl<'a> StrokeStyle<'a> {
    pub fn for_row(color: Rgb, label: &'a str) -> Self {
        StrokeStyle {
            stroke_color: color.to_string(),
            stroke_width: 2,
            label,
            font_size: 10,
        }
    }
}

/// Style literal attached to polygon features.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceStyle<'a> {
    pub fill_color: String,
    pub stroke_color: &'a str,
    pub stroke_width: f64,
    pub label: &'a str,
    pub font_size: u32,
}

impl<'a> SurfaceStyle<'a> {
    pub fn for_row(color: Rgb, label: &'a str) -> Self {
        SurfaceStyle {
            fill_color: color.to_string(),
            stroke_color: "#000000",
            stroke_width: 0.5,
            label,
            font_size: 10,
        }
    }
}

/// Reprojection call from the row's reference system into the viewer's.
fn transform_call(srid: Srid) -> String {
    format!(
        ".transform(new OpenLayers.Projection(\"EPSG:{}\"), map.getProjectionObject())",
        srid.epsg_or_default()
    )
}

/// Extend the map bounds to the batch extent, reprojected like the rows.
pub(crate) fn bounds_statement(srid: Srid, scaling: &Scaling) -> String {
    format!(
        "bound = bound.extend(new OpenLayers.Bounds({}, {}, {}, {}){});",
        fmt_num(scaling.min_x),
        fmt_num(scaling.min_y),
        fmt_num(scaling.max_x),
        fmt_num(scaling.max_y),
        transform_call(srid),
    )
}

/// Append one feature-construction statement.
pub(crate) fn add_feature(script: &mut String, srid: Srid, geometry_js: &str, style_json: &str) {
    script.push_str("vectorLayer.addFeatures(new OpenLayers.Feature.Vector((");
    script.push_str(geometry_js);
    script.push(')');
    script.push_str(&transform_call(srid));
    script.push_str(", null, ");
    script.push_str(style_json);
    script.push_str("));");
}

/// `Geometry.Point` constructor from raw coordinate text, if drawable.
pub(crate) fn point_js(pair: &CoordPair) -> Option<String> {
    if !pair.is_complete() {
        return None;
    }
    Some(format!(
        "new OpenLayers.Geometry.Point({}, {})",
        pair.x.text(),
        pair.y.text()
    ))
}

/// Comma-joined point constructors for the drawable pairs of a sequence.
fn points_js(pairs: &[CoordPair]) -> Option<String> {
    let points: Vec<String> = pairs.iter().filter_map(point_js).collect();
    if points.is_empty() {
        None
    } else {
        Some(points.join(", "))
    }
}

/// `Geometry.LineString` constructor, if any pair is drawable.
pub(crate) fn line_js(pairs: &[CoordPair]) -> Option<String> {
    Some(format!(
        "new OpenLayers.Geometry.LineString(new Array({}))",
        points_js(pairs)?
    ))
}

/// `Geometry.LinearRing` constructor, if any pair is drawable.
pub(crate) fn ring_js(ring: &[CoordPair]) -> Option<String> {
    Some(format!(
        "new OpenLayers.Geometry.LinearRing(new Array({}))",
        points_js(ring)?
    ))
}

/// `Geometry.Polygon` constructor over the rings that survive.
pub(crate) fn polygon_js(rings: &[Ring]) -> Option<String> {
    let rings: Vec<String> = rings.iter().filter_map(|r| ring_js(r)).collect();
    if rings.is_empty() {
        None
    } else {
        Some(format!(
            "new OpenLayers.Geometry.Polygon(new Array({}))",
            rings.join(", ")
        ))
    }
}

/// Wrap part constructors in a multi-geometry constructor.
pub(crate) fn multi_js(kind: &str, parts: Vec<String>) -> Option<String> {
    if parts.is_empty() {
        None
    } else {
        Some(format!(
            "new OpenLayers.Geometry.{}(new Array({}))",
            kind,
            parts.join(", ")
        ))
    }
}
