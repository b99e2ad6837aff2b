//! Greedy nearest-neighbor ordering of a day's stops.

use crate::distance::{DistanceMetric, PlanarMetric};
use crate::place::Place;

/// Orders places into a short walking path using [`PlanarMetric`].
///
/// See [`order_by_nearest_neighbor_with`].
pub fn order_by_nearest_neighbor(places: Vec<Place>) -> Vec<Place> {
    order_by_nearest_neighbor_with(places, &PlanarMetric)
}

/// Orders places by repeatedly walking to the closest unvisited one.
///
/// The first input place is the starting point. Ties go to the place listed
/// earlier. Places without a location sit at the origin, so they tend to be
/// visited together; they are never dropped. The output is always a
/// permutation of the input. O(n^2), which is fine for a single day.
pub fn order_by_nearest_neighbor_with<M: DistanceMetric>(places: Vec<Place>, metric: &M) -> Vec<Place> {
    if places.len() <= 1 {
        return places;
    }

    let mut remaining = places;
    let mut ordered = Vec::with_capacity(remaining.len());
    let mut current = remaining.remove(0);

    while !remaining.is_empty() {
        let here = current.position();
        let mut best = 0;
        let mut best_distance = metric.distance(here, remaining[0].position());
        for (i, candidate) in remaining.iter().enumerate().skip(1) {
            let d = metric.distance(here, candidate.position());
            if d < best_distance {
                best = i;
                best_distance = d;
            }
        }
        ordered.push(current);
        current = remaining.remove(best);
    }
    ordered.push(current);

    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::HaversineMetric;

    fn at(name: &str, x: f64, y: f64) -> Place {
        Place::new(name, "sightseeing").with_coordinate(x, y)
    }

    fn names(places: &[Place]) -> Vec<&str> {
        places.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_square_boundary_walk() {
        let places = vec![
            at("origin", 0.0, 0.0),
            at("east", 10.0, 0.0),
            at("north-east", 10.0, 10.0),
            at("north", 0.0, 10.0),
        ];
        let ordered = order_by_nearest_neighbor(places);
        assert_eq!(names(&ordered), vec!["origin", "east", "north-east", "north"]);
    }

    #[test]
    fn test_first_place_stays_first() {
        let places = vec![at("far", 100.0, 100.0), at("near-origin", 1.0, 1.0), at("mid", 50.0, 50.0)];
        let ordered = order_by_nearest_neighbor(places);
        assert_eq!(names(&ordered), vec!["far", "mid", "near-origin"]);
    }

    #[test]
    fn test_ties_follow_input_order() {
        let places = vec![at("start", 0.0, 0.0), at("left", -1.0, 0.0), at("right", 1.0, 0.0)];
        let ordered = order_by_nearest_neighbor(places);
        assert_eq!(names(&ordered), vec!["start", "left", "right"]);
    }

    #[test]
    fn test_unknown_locations_sit_at_origin() {
        let places = vec![
            at("start", 5.0, 5.0),
            Place::new("unknown", "cafe"),
            at("close", 5.0, 6.0),
            at("zero", 0.0, 0.0),
        ];
        let ordered = order_by_nearest_neighbor(places);
        assert_eq!(names(&ordered), vec!["start", "close", "unknown", "zero"]);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(order_by_nearest_neighbor(Vec::new()).is_empty());
        let single = order_by_nearest_neighbor(vec![at("only", 3.0, 4.0)]);
        assert_eq!(names(&single), vec!["only"]);
    }

    #[test]
    fn test_deterministic() {
        let places = vec![
            at("a", 2.0, 3.0),
            at("b", 8.0, 1.0),
            at("c", 4.0, 4.0),
            at("d", 2.0, 3.0),
            at("e", 9.0, 9.0),
        ];
        let first = order_by_nearest_neighbor(places.clone());
        let second = order_by_nearest_neighbor(places);
        assert_eq!(first, second);
    }

    #[test]
    fn test_haversine_metric() {
        // Gyeongbokgung -> Myeongdong -> Gangnam vs Gangnam listed second.
        let places = vec![
            at("Gyeongbokgung", 126.9770, 37.5796),
            at("Gangnam Station", 127.0276, 37.4979),
            at("Myeongdong", 126.9856, 37.5636),
        ];
        let ordered = order_by_nearest_neighbor_with(places, &HaversineMetric);
        assert_eq!(names(&ordered), vec!["Gyeongbokgung", "Myeongdong", "Gangnam Station"]);
    }
}
