//! # agri-sources — Protected-Area Source Adapters
//!
//! One adapter per external geospatial authority, each normalizing a
//! provider-specific response into the common [`SourceObservation`]
//! shape. The verification orchestrator fans out across every configured
//! adapter and never trusts any single one.
//!
//! ## Adapter Families
//!
//! The engine queries four classes of authority, mirroring the mix of
//! data granularities found in practice:
//!
//! - **Official registry snapshot** ([`wdpa`]): WDPA-derived protected
//!   area records with per-area containment radii. In-memory, no I/O.
//! - **Community geographic database** ([`overpass`]): OpenStreetMap
//!   Overpass API, live HTTP, tight 100 m containment around element
//!   centers.
//! - **Forest-change monitoring** ([`forest_watch`]): broad monitoring
//!   region snapshot with large radii. In-memory, no I/O.
//! - **Biodiversity places registry** ([`places`]): iNaturalist-style
//!   places API, live HTTP, 1 km containment.
//!
//! ## Interchangeable Backings
//!
//! All four implement the same object-safe [`ProtectedAreaSource`] trait,
//! so the consensus logic upstream is exercised identically whether an
//! adapter is backed by a live HTTP client, a registry snapshot, or a
//! deterministic test fake.
//!
//! ## Error Handling
//!
//! Provider failures are isolated at the adapter boundary as
//! [`SourceError`] values with diagnostic context (endpoint, HTTP status,
//! body excerpt). They are never escalated past the orchestrator's
//! all-settled join.

pub mod adapter;
pub mod error;
pub mod forest_watch;
pub mod overpass;
pub mod places;
pub mod registry;
mod retry;
pub mod types;
pub mod wdpa;

pub use adapter::ProtectedAreaSource;
pub use error::SourceError;
pub use forest_watch::ForestWatchAdapter;
pub use overpass::{OverpassAdapter, OverpassConfig};
pub use places::{PlacesAdapter, PlacesConfig};
pub use registry::ProtectedAreaRecord;
pub use types::{ProtectedAreaSourceResult, QueryStatus, SourceObservation};
pub use wdpa::WdpaRegistryAdapter;
