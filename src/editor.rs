//! Round-trips between WKT column values and the typed parameter structure
//! an editing form works with.
//!
//! Two addressing modes exist because a multi-part editor edits one part
//! at a time while a single-part editor edits the whole value at once:
//!
//! - whole value: [`EditorParams::from_value`] strips any `SRID=n;`
//!   wrapper first, and the geometry tag comes from the value itself;
//! - single part: [`part_from_fragment`] takes the raw WKT fragment for
//!   one part with its tag supplied explicitly by the caller.
//!
//! Coordinate text survives verbatim in both directions, and blank fields
//! regenerate blank coordinate slots, so "left blank" and "entered zero"
//! stay distinct states.

use crate::errors::ParseError;
use crate::geometry::{GeometryVariant, handler_for};
use crate::parse::parse_value;
use crate::types::{Geometry, GeometryTag, GeometryValue, Srid};

/// One editing session's view of a geometry column value.
///
/// Constructed fresh per session and discarded once the WKT is
/// regenerated.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorParams {
    pub srid: Srid,
    pub value: Geometry,
}

impl EditorParams {
    /// Whole-value mode: strip the reference wrapper and parse.
    pub fn from_value(raw: &str) -> Result<Self, ParseError> {
        let GeometryValue { srid, geometry } = parse_value(raw)?;
        Ok(EditorParams {
            srid,
            value: geometry,
        })
    }

    /// Number of editable parts: collection members, or 1.
    pub fn part_count(&self) -> usize {
        match &self.value {
            Geometry::GeometryCollection(members) => members.len(),
            _ => 1,
        }
    }

    /// The addressed part: collection member `index`, or the whole value
    /// at index 0.
    pub fn part(&self, index: usize) -> Option<&Geometry> {
        match &self.value {
            Geometry::GeometryCollection(members) => members.get(index),
            value if index == 0 => Some(value),
            _ => None,
        }
    }

    /// Replace the addressed part; false if the index is out of range.
    pub fn set_part(&mut self, index: usize, part: Geometry) -> bool {
        match &mut self.value {
            Geometry::GeometryCollection(members) => match members.get_mut(index) {
                Some(slot) => {
                    *slot = part;
                    true
                }
                None => false,
            },
            value if index == 0 => {
                *value = part;
                true
            }
            _ => false,
        }
    }

    /// Regenerate the bare WKT.
    pub fn to_wkt(&self) -> String {
        self.value.to_string()
    }

    /// Regenerate the column value, reattaching the reference wrapper when
    /// the SRID is set.
    pub fn to_value(&self) -> String {
        GeometryValue {
            srid: self.srid,
            geometry: self.value.clone(),
        }
        .to_wkt()
    }
}

/// Part mode: parse one fragment of a multi-part value. The tag is
/// supplied by the caller and recorded explicitly by the returned part.
pub fn part_from_fragment(tag: GeometryTag, fragment: &str) -> Result<Geometry, ParseError> {
    handler_for(tag).editor_params(fragment)
}

/// Inverse of [`part_from_fragment`]; blank fields emit blank slots.
pub fn fragment_to_wkt(part: &Geometry) -> String {
    part.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, CoordPair};

    #[test]
    fn whole_value_round_trip_with_wrapper() {
        let params = EditorParams::from_value("SRID=3857;POINT(1 2)").unwrap();
        assert_eq!(params.srid, Srid(3857));
        assert_eq!(params.to_value(), "SRID=3857;POINT(1 2)");
        assert_eq!(params.to_wkt(), "POINT(1 2)");
    }

    #[test]
    fn unspecified_srid_stays_unwrapped() {
        let params = EditorParams::from_value("POINT(1 2)").unwrap();
        assert_eq!(params.to_value(), "POINT(1 2)");
    }

    #[test]
    fn blank_fields_survive_both_directions() {
        // x entered as "5", y left blank.
        let part = part_from_fragment(GeometryTag::Point, "POINT(5 )").unwrap();
        let Geometry::Point(pair) = &part else {
            panic!("expected a point part");
        };
        assert_eq!(pair.x.text(), "5");
        assert!(pair.y.is_blank());
        assert_eq!(fragment_to_wkt(&part), "POINT(5 )");
    }

    #[test]
    fn building_params_from_blank_form_fields() {
        let part = Geometry::Point(CoordPair::new(
            Coord::parse("5").unwrap(),
            Coord::parse("").unwrap(),
        ));
        assert_eq!(fragment_to_wkt(&part), "POINT(5 )");
    }

    #[test]
    fn wrong_fragment_tag_is_an_error() {
        assert!(part_from_fragment(GeometryTag::Polygon, "POINT(1 2)").is_err());
    }

    #[test]
    fn single_part_addressing() {
        let mut params = EditorParams::from_value("POINT(1 2)").unwrap();
        assert_eq!(params.part_count(), 1);
        assert!(params.part(0).is_some());
        assert!(params.part(1).is_none());
        let replaced = params.set_part(
            0,
            Geometry::Point(CoordPair::numeric(9.0, 9.0).unwrap()),
        );
        assert!(replaced);
        assert_eq!(params.to_wkt(), "POINT(9 9)");
    }

    #[test]
    fn collection_parts_address_members() {
        let mut params =
            EditorParams::from_value("GEOMETRYCOLLECTION(POINT(1 2),LINESTRING(0 0,1 1))")
                .unwrap();
        assert_eq!(params.part_count(), 2);
        assert_eq!(params.part(1).map(Geometry::tag), Some(GeometryTag::LineString));
        params.set_part(0, Geometry::Point(CoordPair::numeric(7.0, 8.0).unwrap()));
        assert_eq!(
            params.to_wkt(),
            "GEOMETRYCOLLECTION(POINT(7 8),LINESTRING(0 0,1 1))"
        );
    }
}
