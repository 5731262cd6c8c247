//! The derived geometry bundle recomputed on every boundary mutation.

use agri_core::{BoundaryPoint, Coordinate};
use serde::{Deserialize, Serialize};

use crate::compute;

/// Derived geometry of a boundary polygon.
///
/// Never a source of truth: always recomputed from the current vertex
/// list via [`GeometryResult::from_points`]. Area is only meaningful for
/// three or more vertices and perimeter for two or more; below those
/// counts the fields hold the defined zero values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryResult {
    /// Enclosed area in hectares (0 for fewer than 3 vertices).
    pub area_hectares: f64,
    /// Boundary perimeter in meters (0 for fewer than 2 vertices).
    pub perimeter_meters: f64,
    /// Arithmetic-mean centroid of the vertices.
    pub centroid: Coordinate,
    /// Number of vertices the values were computed from.
    pub point_count: usize,
}

impl GeometryResult {
    /// Compute the full geometry bundle for the given vertex list.
    pub fn from_points(points: &[BoundaryPoint]) -> Self {
        Self {
            area_hectares: compute::area_hectares(points),
            perimeter_meters: compute::perimeter_meters(points),
            centroid: compute::centroid(points),
            point_count: points.len(),
        }
    }
}
