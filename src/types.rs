//! Core value types shared across the engine.
//!
//! Coordinate components are carried as decimal *text* alongside their
//! parsed value, so a WKT string survives an edit round-trip without
//! floating-point reformatting. A blank component is a first-class state,
//! never coerced to zero.

use std::fmt;
use std::str::FromStr;

use crate::errors::{ParseError, UnsupportedVariant};

// ============================================================================
// Coordinates
// ============================================================================

/// A coordinate token kept verbatim as decimal text, plus its parsed value.
///
/// Construction rejects non-numeric and non-finite text.
#[derive(Clone, Debug)]
pub struct Decimal {
    text: String,
    value: f64,
}

impl Decimal {
    /// Parse a decimal literal, preserving the (trimmed) text.
    pub fn new(text: impl Into<String>) -> Result<Self, ParseError> {
        let text = text.into();
        let trimmed = text.trim();
        let value: f64 = trimmed.parse().map_err(|_| ParseError::NonNumeric {
            token: trimmed.to_string(),
        })?;
        if !value.is_finite() {
            return Err(ParseError::NonNumeric {
                token: trimmed.to_string(),
            });
        }
        Ok(Decimal {
            text: trimmed.to_string(),
            value,
        })
    }

    /// Build from a numeric value; the text becomes its shortest round-trip
    /// representation.
    pub fn from_f64(value: f64) -> Result<Self, ParseError> {
        if !value.is_finite() {
            return Err(ParseError::NonNumeric {
                token: value.to_string(),
            });
        }
        Ok(Decimal {
            text: value.to_string(),
            value,
        })
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Numeric equality; `"5"` and `"5.0"` are the same coordinate.
impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// One axis of a coordinate pair.
///
/// `Blank` means the field was left empty. It is carried through scaling and
/// rendering untouched; renderers skip markers that lack an axis.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Coord {
    #[default]
    Blank,
    Num(Decimal),
}

impl Coord {
    /// Parse editor input: blank text is `Blank`, anything else must be a
    /// finite decimal.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if text.trim().is_empty() {
            Ok(Coord::Blank)
        } else {
            Ok(Coord::Num(Decimal::new(text)?))
        }
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        matches!(self, Coord::Blank)
    }

    /// Numeric value, if present.
    #[inline]
    pub fn value(&self) -> Option<f64> {
        match self {
            Coord::Blank => None,
            Coord::Num(d) => Some(d.value()),
        }
    }

    /// Verbatim text; the empty string when blank.
    #[inline]
    pub fn text(&self) -> &str {
        match self {
            Coord::Blank => "",
            Coord::Num(d) => d.text(),
        }
    }
}

/// An ordered `(x, y)` coordinate pair.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CoordPair {
    pub x: Coord,
    pub y: Coord,
}

impl CoordPair {
    pub fn new(x: Coord, y: Coord) -> Self {
        CoordPair { x, y }
    }

    /// Convenience constructor from numeric values.
    pub fn numeric(x: f64, y: f64) -> Result<Self, ParseError> {
        Ok(CoordPair {
            x: Coord::Num(Decimal::from_f64(x)?),
            y: Coord::Num(Decimal::from_f64(y)?),
        })
    }

    /// A pair is drawable only when both components are present.
    #[inline]
    pub fn is_complete(&self) -> bool {
        !self.x.is_blank() && !self.y.is_blank()
    }

    /// Both numeric values, or `None` if either component is blank.
    #[inline]
    pub fn values(&self) -> Option<(f64, f64)> {
        Some((self.x.value()?, self.y.value()?))
    }
}

/// A polygon ring: an ordered pair sequence, conventionally closed.
pub type Ring = Vec<CoordPair>;

// ============================================================================
// Color
// ============================================================================

/// Stroke color decoded from a `#RRGGBB` hex string (base-16 byte pairs).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
}

impl FromStr for Rgb {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidColor {
            value: s.to_string(),
        };
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let byte = |range| u8::from_str_radix(&hex[range], 16).map_err(|_| invalid());
        Ok(Rgb {
            r: byte(0..2)?,
            g: byte(2..4)?,
            b: byte(4..6)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// ============================================================================
// Spatial reference
// ============================================================================

/// Spatial reference identifier; `0` means unspecified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Srid(pub u32);

impl Srid {
    pub const UNSPECIFIED: Srid = Srid(0);

    #[inline]
    pub fn is_unspecified(self) -> bool {
        self.0 == 0
    }

    /// EPSG code for web-map emission; unspecified normalizes to 4326
    /// (WGS84 geographic).
    #[inline]
    pub fn epsg_or_default(self) -> u32 {
        if self.0 == 0 { 4326 } else { self.0 }
    }
}

impl fmt::Display for Srid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Geometry variants
// ============================================================================

/// The WKT tag of a geometry variant. Closed set; anything else is
/// [`UnsupportedVariant`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryTag {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryTag {
    pub const ALL: [GeometryTag; 7] = [
        GeometryTag::Point,
        GeometryTag::LineString,
        GeometryTag::Polygon,
        GeometryTag::MultiPoint,
        GeometryTag::MultiLineString,
        GeometryTag::MultiPolygon,
        GeometryTag::GeometryCollection,
    ];

    /// The uppercase WKT tag text.
    pub fn as_wkt(self) -> &'static str {
        match self {
            GeometryTag::Point => "POINT",
            GeometryTag::LineString => "LINESTRING",
            GeometryTag::Polygon => "POLYGON",
            GeometryTag::MultiPoint => "MULTIPOINT",
            GeometryTag::MultiLineString => "MULTILINESTRING",
            GeometryTag::MultiPolygon => "MULTIPOLYGON",
            GeometryTag::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }

    /// CSS-style class name used in SVG output.
    pub fn css_class(self) -> &'static str {
        match self {
            GeometryTag::Point => "point",
            GeometryTag::LineString => "linestring",
            GeometryTag::Polygon => "polygon",
            GeometryTag::MultiPoint => "multipoint",
            GeometryTag::MultiLineString => "multilinestring",
            GeometryTag::MultiPolygon => "multipolygon",
            GeometryTag::GeometryCollection => "geometrycollection",
        }
    }

    /// Look up a tag by its exact uppercase WKT name.
    pub fn from_wkt(name: &str) -> Result<Self, UnsupportedVariant> {
        GeometryTag::ALL
            .into_iter()
            .find(|tag| tag.as_wkt() == name)
            .ok_or_else(|| UnsupportedVariant {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for GeometryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wkt())
    }
}

/// A parsed geometry: ordered coordinate pairs, nested per part and ring.
///
/// `Display` regenerates the WKT text; blank coordinates emit the empty
/// string, preserving "left blank" distinctly from "entered zero".
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(CoordPair),
    LineString(Vec<CoordPair>),
    Polygon(Vec<Ring>),
    MultiPoint(Vec<CoordPair>),
    MultiLineString(Vec<Vec<CoordPair>>),
    MultiPolygon(Vec<Vec<Ring>>),
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    pub fn tag(&self) -> GeometryTag {
        match self {
            Geometry::Point(_) => GeometryTag::Point,
            Geometry::LineString(_) => GeometryTag::LineString,
            Geometry::Polygon(_) => GeometryTag::Polygon,
            Geometry::MultiPoint(_) => GeometryTag::MultiPoint,
            Geometry::MultiLineString(_) => GeometryTag::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryTag::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryTag::GeometryCollection,
        }
    }

    /// Every coordinate pair, in document order, recursing into parts.
    pub fn coords(&self) -> Vec<&CoordPair> {
        let mut out = Vec::new();
        self.collect_coords(&mut out);
        out
    }

    fn collect_coords<'a>(&'a self, out: &mut Vec<&'a CoordPair>) {
        match self {
            Geometry::Point(pair) => out.push(pair),
            Geometry::LineString(pairs) | Geometry::MultiPoint(pairs) => out.extend(pairs),
            Geometry::Polygon(rings) | Geometry::MultiLineString(rings) => {
                out.extend(rings.iter().flatten())
            }
            Geometry::MultiPolygon(polys) => {
                out.extend(polys.iter().flatten().flatten());
            }
            Geometry::GeometryCollection(members) => {
                for member in members {
                    member.collect_coords(out);
                }
            }
        }
    }
}

fn write_pair(f: &mut fmt::Formatter<'_>, pair: &CoordPair) -> fmt::Result {
    write!(f, "{} {}", pair.x.text(), pair.y.text())
}

fn write_pair_seq(f: &mut fmt::Formatter<'_>, pairs: &[CoordPair]) -> fmt::Result {
    for (i, pair) in pairs.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write_pair(f, pair)?;
    }
    Ok(())
}

fn write_ring_seq(f: &mut fmt::Formatter<'_>, rings: &[Ring]) -> fmt::Result {
    for (i, ring) in rings.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        f.write_str("(")?;
        write_pair_seq(f, ring)?;
        f.write_str(")")?;
    }
    Ok(())
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.tag())?;
        match self {
            Geometry::Point(pair) => write_pair(f, pair)?,
            Geometry::LineString(pairs) | Geometry::MultiPoint(pairs) => {
                write_pair_seq(f, pairs)?
            }
            Geometry::Polygon(rings) | Geometry::MultiLineString(rings) => {
                write_ring_seq(f, rings)?
            }
            Geometry::MultiPolygon(polys) => {
                for (i, rings) in polys.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    f.write_str("(")?;
                    write_ring_seq(f, rings)?;
                    f.write_str(")")?;
                }
            }
            Geometry::GeometryCollection(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", member)?;
                }
            }
        }
        f.write_str(")")
    }
}

/// A geometry value plus its spatial reference identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryValue {
    pub srid: Srid,
    pub geometry: Geometry,
}

impl GeometryValue {
    /// The column-value text: the WKT, wrapped in `SRID=n;` when the
    /// reference is specified.
    pub fn to_wkt(&self) -> String {
        if self.srid.is_unspecified() {
            self.geometry.to_string()
        } else {
            format!("SRID={};{}", self.srid, self.geometry)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_preserves_text() {
        let d = Decimal::new("3.140").unwrap();
        assert_eq!(d.text(), "3.140");
        assert_eq!(d.value(), 3.14);
    }

    #[test]
    fn decimal_rejects_non_numeric() {
        assert!(Decimal::new("abc").is_err());
        assert!(Decimal::new("").is_err());
        assert!(Decimal::new("1e999").is_err());
    }

    #[test]
    fn decimal_numeric_equality() {
        assert_eq!(Decimal::new("5").unwrap(), Decimal::new("5.0").unwrap());
    }

    #[test]
    fn coord_blank_round_trip() {
        let c = Coord::parse("  ").unwrap();
        assert!(c.is_blank());
        assert_eq!(c.text(), "");
        assert_eq!(c.value(), None);
    }

    #[test]
    fn pair_completeness() {
        let half = CoordPair::new(Coord::parse("5").unwrap(), Coord::Blank);
        assert!(!half.is_complete());
        assert_eq!(half.values(), None);
        assert!(CoordPair::numeric(1.0, 2.0).unwrap().is_complete());
    }

    #[test]
    fn rgb_parses_hex_byte_pairs() {
        let c: Rgb = "#FF8000".parse().unwrap();
        assert_eq!(c, Rgb { r: 255, g: 128, b: 0 });
        assert_eq!(c.to_string(), "#FF8000");
    }

    #[test]
    fn rgb_rejects_bad_input() {
        assert!("FF8000".parse::<Rgb>().is_err());
        assert!("#FF80".parse::<Rgb>().is_err());
        assert!("#GGGGGG".parse::<Rgb>().is_err());
    }

    #[test]
    fn srid_normalization() {
        assert_eq!(Srid::UNSPECIFIED.epsg_or_default(), 4326);
        assert_eq!(Srid(3857).epsg_or_default(), 3857);
    }

    #[test]
    fn tag_lookup_is_strict() {
        assert_eq!(
            GeometryTag::from_wkt("POINT").unwrap(),
            GeometryTag::Point
        );
        assert!(GeometryTag::from_wkt("Point").is_err());
        assert!(GeometryTag::from_wkt("CIRCULARSTRING").is_err());
    }

    #[test]
    fn display_emits_blank_slots() {
        let geom = Geometry::Point(CoordPair::new(
            Coord::parse("5").unwrap(),
            Coord::Blank,
        ));
        assert_eq!(geom.to_string(), "POINT(5 )");
    }

    #[test]
    fn display_nested_variants() {
        let ring = vec![
            CoordPair::numeric(0.0, 0.0).unwrap(),
            CoordPair::numeric(10.0, 0.0).unwrap(),
            CoordPair::numeric(0.0, 0.0).unwrap(),
        ];
        let geom = Geometry::Polygon(vec![ring]);
        assert_eq!(geom.to_string(), "POLYGON((0 0,10 0,0 0))");
    }

    #[test]
    fn value_wraps_srid() {
        let value = GeometryValue {
            srid: Srid(4326),
            geometry: Geometry::Point(CoordPair::numeric(1.0, 2.0).unwrap()),
        };
        assert_eq!(value.to_wkt(), "SRID=4326;POINT(1 2)");
    }
}
