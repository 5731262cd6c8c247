//! # agri-core — Identifiers & Validated Capture Primitives
//!
//! Foundation types shared by every crate in the verification engine:
//! parcel identifiers, parcel metadata, and the validated GPS primitives
//! ([`BoundaryPoint`], [`Coordinate`], [`CapturedFix`]) that everything
//! downstream assumes are well-formed.
//!
//! ## Validation Boundary
//!
//! Coordinate validation happens here, at ingestion, and nowhere else.
//! [`BoundaryPoint::new`] rejects out-of-range and non-finite values, and
//! `Deserialize` for the validated types routes through the same
//! constructor, so a malformed coordinate cannot enter the system via the
//! wire either. The geometry engine deliberately performs no re-validation
//! or NaN scrubbing — it trusts this boundary, which keeps its numeric
//! core auditable.

pub mod error;
pub mod parcel;
pub mod point;

pub use error::ValidationError;
pub use parcel::{ParcelId, ParcelMetadata};
pub use point::{BoundaryPoint, CapturedFix, Coordinate};
