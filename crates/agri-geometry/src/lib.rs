//! # agri-geometry — Boundary Geometry Engine
//!
//! Pure, deterministic geometry over an ordered, validated vertex list.
//! Everything here is a function of its arguments — no state, no I/O —
//! so results are recomputed on every boundary mutation rather than
//! incrementally maintained, and recomputation is idempotent.
//!
//! ## Mathematical Model
//!
//! For a boundary polygon P with vertices v_0..v_{n-1} in decimal degrees
//! (implicitly closed, v_{n-1} connects back to v_0):
//!
//! ```text
//! area(P)      = ½·|Σ (lat_i·lng_{i+1} − lat_{i+1}·lng_i)|   (shoelace, deg²)
//!                scaled to m² by 111320 · 111320·cos(φ̄)
//!                where φ̄ is the mean latitude of P's own vertices
//! perimeter(P) = Σ haversine(v_i, v_{i+1})                    (R = 6 371 000 m)
//! centroid(P)  = (mean lat, mean lng)
//! ```
//!
//! The longitude meters-per-degree factor shrinks with cos(latitude);
//! computing φ̄ from the polygon itself keeps the area accurate for
//! parcels at any latitude instead of only near one reference parallel.
//!
//! ## Input Contract
//!
//! Vertices arrive validated (`agri-core` rejects NaN and out-of-range
//! values at ingestion). The engine performs no defensive re-validation.
//! The arithmetic-mean centroid is an approximation for non-convex
//! polygons, and a self-intersecting boundary yields a shoelace value
//! with no physical interpretation; neither input is rejected here.

pub mod compute;
pub mod result;

pub use compute::{
    area_hectares, centroid, haversine_meters, perimeter_meters, EARTH_RADIUS_METERS,
    METERS_PER_DEGREE_LATITUDE,
};
pub use result::GeometryResult;
