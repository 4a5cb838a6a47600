//! Distance ranking - pure logic without the HTTP layer.
//!
//! Turns raw map nodes into display records annotated with their geodesic
//! distance from the origin. Ranking and sorting are split: `rank` works on
//! one category at a time and the caller sorts the concatenation, so ties
//! keep their category insertion order.

use serde::Serialize;
use std::cmp::Ordering;

use crate::domain::Coordinate;
use crate::domain::geo::round_km;
use crate::modules::integrations::overpass::OsmNode;

/// Display name used when a node carries no `name` tag.
pub const UNNAMED_PLACE: &str = "Unnamed Place";

/// One ranked point of interest.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceRecord {
    pub name: String,
    pub category: String,
    pub lat: f64,
    pub lon: f64,
    /// Kilometers from the origin, rounded to 2 decimals.
    pub distance_km: f64,
}

/// Annotate every raw record with its distance from `origin`.
///
/// Cardinality-preserving: one `PlaceRecord` per input node, in input order.
/// Does not sort.
pub fn rank(origin: Coordinate, records: &[OsmNode], category_label: &str) -> Vec<PlaceRecord> {
    records
        .iter()
        .map(|node| {
            let target = Coordinate {
                lat: node.lat,
                lon: node.lon,
            };
            PlaceRecord {
                name: node.name().unwrap_or(UNNAMED_PLACE).to_string(),
                category: category_label.to_string(),
                lat: node.lat,
                lon: node.lon,
                distance_km: round_km(origin.distance_km(&target)),
            }
        })
        .collect()
}

/// Stable ascending sort by distance; equal distances keep input order.
pub fn sort_by_distance(places: &mut [PlaceRecord]) {
    places.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(id: i64, lat: f64, lon: f64, name: Option<&str>) -> OsmNode {
        OsmNode {
            id,
            lat,
            lon,
            tags: name.map(|n| json!({ "name": n })),
        }
    }

    #[test]
    fn preserves_cardinality_and_input_order() {
        let origin = Coordinate::new(13.63, 79.42).unwrap();
        let nodes = vec![
            node(1, 13.64, 79.42, Some("A")),
            node(2, 13.65, 79.42, Some("B")),
            node(3, 13.66, 79.42, Some("C")),
        ];
        let ranked = rank(origin, &nodes, "Hospital");
        assert_eq!(ranked.len(), 3);
        let names: Vec<&str> = ranked.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn distances_are_non_negative_and_tagged_with_the_category() {
        let origin = Coordinate::new(13.63, 79.42).unwrap();
        let nodes = vec![node(1, 13.63, 79.42, Some("Here")), node(2, 13.7, 79.5, None)];
        let ranked = rank(origin, &nodes, "Restaurant");
        for place in &ranked {
            assert!(place.distance_km >= 0.0);
            assert_eq!(place.category, "Restaurant");
        }
        assert_eq!(ranked[0].distance_km, 0.0);
    }

    #[test]
    fn missing_name_falls_back_to_placeholder() {
        let origin = Coordinate::new(13.63, 79.42).unwrap();
        let nodes = vec![node(1, 13.64, 79.43, None)];
        let ranked = rank(origin, &nodes, "Hotel");
        assert_eq!(ranked[0].name, UNNAMED_PLACE);
    }

    #[test]
    fn sort_is_ascending() {
        let origin = Coordinate::new(13.63, 79.42).unwrap();
        let nodes = vec![
            node(1, 13.70, 79.42, Some("far")),
            node(2, 13.64, 79.42, Some("near")),
            node(3, 13.67, 79.42, Some("mid")),
        ];
        let mut ranked = rank(origin, &nodes, "Fuel Station");
        sort_by_distance(&mut ranked);
        for pair in ranked.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
        assert_eq!(ranked[0].name, "near");
    }

    #[test]
    fn sort_is_stable_for_equal_distances() {
        let origin = Coordinate::new(13.63, 79.42).unwrap();
        // Same coordinate, so identical rounded distances
        let nodes = vec![
            node(1, 13.64, 79.42, Some("first")),
            node(2, 13.64, 79.42, Some("second")),
            node(3, 13.64, 79.42, Some("third")),
        ];
        let mut ranked = rank(origin, &nodes, "Hospital");
        sort_by_distance(&mut ranked);
        let names: Vec<&str> = ranked.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }
}
