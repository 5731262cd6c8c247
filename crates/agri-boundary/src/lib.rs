//! # agri-boundary — Capture Lifecycle & Compliance Record
//!
//! The integration point the UI and reporting collaborators consume.
//! A [`BoundaryCaptureSession`] governs when the point sequence is
//! mutable versus frozen:
//!
//! ```text
//! Empty → Collecting(n) → ReadyToClose(n ≥ min_points) → Closed
//! ```
//!
//! Every accepted point triggers a full geometry recomputation (the
//! engine is cheap and pure, so incremental maintenance would buy
//! nothing but complexity). Completing the session freezes the polygon,
//! verifies the frozen centroid through the orchestrator, and composes
//! the final [`ComplianceRecord`] — the only entity intended for
//! downstream persistence and reporting.
//!
//! Invalid transitions are runtime-checked with typed errors rather than
//! panics: the capture collaborator drives this machine from user
//! actions and must be able to surface a rejection.

pub mod record;
pub mod session;

pub use record::{compose, ComplianceRecord, ComposeError};
pub use session::{BoundaryCaptureSession, CaptureError, CapturePolicy, CaptureState};
