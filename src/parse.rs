//! Parse pest pairs into geometry values.
//!
//! The grammar (`wkt.pest`) makes the "must start with the exact tag, must
//! end with `)`" invariant explicit; this module only walks the resulting
//! pairs into [`Geometry`] values.

use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::errors::ParseError;
use crate::types::{Coord, CoordPair, Decimal, Geometry, GeometryTag, GeometryValue, Ring, Srid};

#[derive(Parser)]
#[grammar = "wkt.pest"]
pub struct WktParser;

/// Parse a bare WKT geometry of any supported variant.
pub fn parse_wkt(src: &str) -> Result<Geometry, ParseError> {
    let src = src.trim();
    let mut pairs =
        WktParser::parse(Rule::wkt, src).map_err(|e| ParseError::from_pest(src, e))?;
    let wkt = pairs.next().expect("grammar yields one wkt pair");
    let geometry = wkt
        .into_inner()
        .find(|p| p.as_rule() == Rule::geometry)
        .expect("wkt contains a geometry");
    geometry_from_pair(geometry)
}

/// Parse a WKT geometry, enforcing the expected variant tag.
///
/// A mismatched tag is an error; the caller must not fall back to another
/// variant.
pub fn parse_as(tag: GeometryTag, src: &str) -> Result<Geometry, ParseError> {
    let geometry = parse_wkt(src)?;
    if geometry.tag() != tag {
        return Err(ParseError::WrongTag {
            expected: tag.as_wkt(),
            found: geometry.tag().as_wkt().to_string(),
        });
    }
    Ok(geometry)
}

/// Parse a column value, accepting and stripping a leading `SRID=n;`
/// wrapper.
pub fn parse_value(src: &str) -> Result<GeometryValue, ParseError> {
    let src = src.trim();
    let mut pairs =
        WktParser::parse(Rule::value, src).map_err(|e| ParseError::from_pest(src, e))?;
    let value = pairs.next().expect("grammar yields one value pair");

    let mut srid = Srid::UNSPECIFIED;
    let mut geometry = None;
    for inner in value.into_inner() {
        match inner.as_rule() {
            Rule::srid_prefix => {
                let digits = inner
                    .into_inner()
                    .find(|p| p.as_rule() == Rule::srid)
                    .expect("srid_prefix contains digits");
                let token = digits.as_str();
                srid = Srid(token.parse().map_err(|_| ParseError::NonNumeric {
                    token: token.to_string(),
                })?);
            }
            Rule::geometry => geometry = Some(geometry_from_pair(inner)?),
            _ => {}
        }
    }
    Ok(GeometryValue {
        srid,
        geometry: geometry.expect("value contains a geometry"),
    })
}

/// Split a raw column value into its reference identifier and WKT text
/// without parsing the geometry payload.
///
/// This is the cheap textual form used when the payload is handed on to a
/// variant handler as-is.
pub fn split_srid(value: &str) -> (Srid, &str) {
    let value = value.trim();
    if let Some(rest) = value.strip_prefix("SRID=") {
        if let Some((digits, wkt)) = rest.split_once(';') {
            if let Ok(code) = digits.parse() {
                return (Srid(code), wkt);
            }
        }
    }
    (Srid::UNSPECIFIED, value)
}

fn geometry_from_pair(pair: Pair<Rule>) -> Result<Geometry, ParseError> {
    let variant = pair
        .into_inner()
        .next()
        .expect("geometry wraps one variant");
    match variant.as_rule() {
        Rule::point => {
            let pair = match variant.into_inner().find(|p| p.as_rule() == Rule::pair) {
                Some(p) => coord_pair(p)?,
                None => CoordPair::default(),
            };
            Ok(Geometry::Point(pair))
        }
        Rule::linestring => Ok(Geometry::LineString(pair_seq_of(variant)?)),
        Rule::multipoint => Ok(Geometry::MultiPoint(pair_seq_of(variant)?)),
        Rule::polygon => Ok(Geometry::Polygon(ring_seq_of(variant)?)),
        Rule::multilinestring => Ok(Geometry::MultiLineString(ring_seq_of(variant)?)),
        Rule::multipolygon => {
            let mut polys = Vec::new();
            if let Some(seq) = variant
                .into_inner()
                .find(|p| p.as_rule() == Rule::poly_seq)
            {
                for poly in seq.into_inner().filter(|p| p.as_rule() == Rule::poly) {
                    polys.push(rings_from(poly)?);
                }
            }
            Ok(Geometry::MultiPolygon(polys))
        }
        Rule::collection => {
            let mut members = Vec::new();
            if let Some(seq) = variant
                .into_inner()
                .find(|p| p.as_rule() == Rule::member_seq)
            {
                for member in seq.into_inner().filter(|p| p.as_rule() == Rule::member) {
                    members.push(geometry_from_pair(member)?);
                }
            }
            Ok(Geometry::GeometryCollection(members))
        }
        rule => unreachable!("unexpected geometry rule: {rule:?}"),
    }
}

/// Pairs of a variant whose payload is a single optional `pair_seq`.
fn pair_seq_of(variant: Pair<Rule>) -> Result<Vec<CoordPair>, ParseError> {
    match variant
        .into_inner()
        .find(|p| p.as_rule() == Rule::pair_seq)
    {
        Some(seq) => pairs_from(seq),
        None => Ok(Vec::new()),
    }
}

/// Rings of a variant whose payload is a single optional `ring_seq`.
fn ring_seq_of(variant: Pair<Rule>) -> Result<Vec<Ring>, ParseError> {
    match variant
        .into_inner()
        .find(|p| p.as_rule() == Rule::ring_seq)
    {
        Some(seq) => rings_from_seq(seq),
        None => Ok(Vec::new()),
    }
}

fn rings_from(poly: Pair<Rule>) -> Result<Vec<Ring>, ParseError> {
    match poly.into_inner().find(|p| p.as_rule() == Rule::ring_seq) {
        Some(seq) => rings_from_seq(seq),
        None => Ok(Vec::new()),
    }
}

fn rings_from_seq(seq: Pair<Rule>) -> Result<Vec<Ring>, ParseError> {
    let mut rings = Vec::new();
    for ring in seq.into_inner().filter(|p| p.as_rule() == Rule::ring) {
        match ring.into_inner().find(|p| p.as_rule() == Rule::pair_seq) {
            Some(pairs) => rings.push(pairs_from(pairs)?),
            None => rings.push(Vec::new()),
        }
    }
    Ok(rings)
}

fn pairs_from(seq: Pair<Rule>) -> Result<Vec<CoordPair>, ParseError> {
    seq.into_inner()
        .filter(|p| p.as_rule() == Rule::pair)
        .map(coord_pair)
        .collect()
}

fn coord_pair(pair: Pair<Rule>) -> Result<CoordPair, ParseError> {
    let mut coords = pair.into_inner().filter(|p| p.as_rule() == Rule::coord);
    let x = coord(coords.next().expect("pair has an x slot"))?;
    let y = coord(coords.next().expect("pair has a y slot"))?;
    Ok(CoordPair::new(x, y))
}

fn coord(token: Pair<Rule>) -> Result<Coord, ParseError> {
    let text = token.as_str();
    if text.is_empty() {
        Ok(Coord::Blank)
    } else {
        // The grammar admits only decimal syntax, but overflow to infinity
        // (e.g. 1e999) still has to be rejected here.
        Ok(Coord::Num(Decimal::new(text)?))
    }
}
