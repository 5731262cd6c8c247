//! Core geometry functions: area, perimeter, centroid, haversine.

use agri_core::{BoundaryPoint, Coordinate};

/// Mean Earth radius in meters, used for great-circle distances.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Approximate meters per degree of latitude (and of longitude at the
/// equator, before the cos(latitude) correction).
pub const METERS_PER_DEGREE_LATITUDE: f64 = 111_320.0;

const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

/// Great-circle distance between two coordinates in meters (haversine).
pub fn haversine_meters(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let d_phi = (b.latitude - a.latitude).to_radians();
    let d_lambda = (b.longitude - a.longitude).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Enclosed area of the boundary polygon in hectares.
///
/// Returns 0 for fewer than three vertices — the area of a degenerate
/// shape is legitimately zero, not an error. The result is independent
/// of vertex orientation (clockwise vs counter-clockwise) and of which
/// vertex the traversal starts from.
pub fn area_hectares(points: &[BoundaryPoint]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        sum += points[i].latitude * points[j].longitude
            - points[j].latitude * points[i].longitude;
    }
    let area_square_degrees = sum.abs() / 2.0;

    // Longitude degrees shrink with latitude; the reference latitude is
    // the polygon's own mean so the scale holds at any parallel.
    let mean_latitude =
        points.iter().map(|p| p.latitude).sum::<f64>() / points.len() as f64;
    let meters_per_degree_longitude =
        METERS_PER_DEGREE_LATITUDE * mean_latitude.to_radians().cos();

    area_square_degrees * METERS_PER_DEGREE_LATITUDE * meters_per_degree_longitude
        / SQUARE_METERS_PER_HECTARE
}

/// Perimeter of the boundary polygon in meters.
///
/// Sums haversine distances over consecutive vertex pairs, wrapping the
/// last vertex back to the first. Returns 0 for fewer than two vertices.
pub fn perimeter_meters(points: &[BoundaryPoint]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    let mut total = 0.0;
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        total += haversine_meters(points[i].coordinate(), points[j].coordinate());
    }
    total
}

/// Arithmetic-mean centroid of the vertex list.
///
/// For non-convex polygons this is an approximation of the geometric
/// centroid, not the exact one. An empty list yields the origin; callers
/// in the capture pipeline never ask for the centroid of zero points.
pub fn centroid(points: &[BoundaryPoint]) -> Coordinate {
    if points.is_empty() {
        return Coordinate {
            latitude: 0.0,
            longitude: 0.0,
        };
    }

    let n = points.len() as f64;
    Coordinate {
        latitude: points.iter().map(|p| p.latitude).sum::<f64>() / n,
        longitude: points.iter().map(|p| p.longitude).sum::<f64>() / n,
    }
}
