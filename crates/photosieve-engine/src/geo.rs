//! Great-circle distance

use geo::{Distance, Haversine, Point};
use photosieve_core::models::GpsCoordinate;

/// Distance between two coordinates in kilometers, by the haversine
/// formula
///
/// Numerically well-behaved everywhere on the globe, including across the
/// antimeridian and at the poles.
pub fn distance_km(a: &GpsCoordinate, b: &GpsCoordinate) -> f64 {
    let pa = Point::new(a.longitude, a.latitude);
    let pb = Point::new(b.longitude, b.latitude);
    Haversine.distance(pa, pb) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_city_pair() {
        // Paris (48.8566, 2.3522) to London (51.5074, -0.1276) ~= 344km
        let paris = GpsCoordinate::new(48.8566, 2.3522);
        let london = GpsCoordinate::new(51.5074, -0.1276);

        let distance = distance_km(&paris, &london);
        assert!(
            distance > 339.0 && distance < 349.0,
            "Paris-London distance {} should be ~344km",
            distance
        );
    }

    #[test]
    fn test_same_point_is_zero() {
        let point = GpsCoordinate::new(-8.0, 115.0);
        let distance = distance_km(&point, &point);
        assert!(distance < 1e-6, "distance from a point to itself was {}", distance);
    }

    #[test]
    fn test_one_degree_of_longitude_at_the_equator() {
        let a = GpsCoordinate::new(0.0, 0.0);
        let b = GpsCoordinate::new(0.0, 1.0);

        let distance = distance_km(&a, &b);
        assert!(
            (distance - 111.2).abs() < 1.0,
            "one equatorial degree was {} km",
            distance
        );
    }

    #[test]
    fn test_antimeridian_crossing() {
        // One degree of longitude apart, straddling the date line
        let west = GpsCoordinate::new(0.0, 179.5);
        let east = GpsCoordinate::new(0.0, -179.5);

        let distance = distance_km(&west, &east);
        assert!(
            (distance - 111.2).abs() < 1.0,
            "antimeridian crossing was {} km",
            distance
        );
    }

    #[test]
    fn test_pole_degenerate_longitudes() {
        // At the pole every longitude is the same point
        let a = GpsCoordinate::new(90.0, 0.0);
        let b = GpsCoordinate::new(90.0, 180.0);

        let distance = distance_km(&a, &b);
        assert!(distance < 1e-6, "polar distance was {} km", distance);
    }
}
