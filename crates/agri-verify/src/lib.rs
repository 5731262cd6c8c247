//! # agri-verify — Protected-Area Verification Orchestrator
//!
//! Given a representative coordinate (typically the parcel centroid),
//! determine overlap with protected areas without trusting any single
//! external authority: fan out to every configured source concurrently,
//! collect whatever settles within budget, and reduce the votes into a
//! confidence-scored [`ConsensusVerdict`].
//!
//! ## Failure Model
//!
//! The join is all-settled, never fail-fast. A slow source contributes a
//! `timeout` status, a broken one an `error` status; neither stalls nor
//! fails the call. When every source fails, the verdict is explicitly
//! `degraded` with zero confidence — structurally distinguishable from a
//! confident "verified clear", because conflating "unable to verify"
//! with "confirmed not protected" is a compliance-safety defect.
//!
//! ## Consensus Rule
//!
//! Any positive vote flags the parcel (`is_protected = confirmed > 0`):
//! in a regulatory context a missed real overlap is materially worse
//! than a conservative flag subject to human review. The confidence
//! percentage communicates agreement strength separately, so reviewers
//! can weigh low-confidence positives appropriately.

pub mod consensus;
pub mod orchestrator;

pub use consensus::{consolidate, ConsensusVerdict, DegradedPolicy};
pub use orchestrator::{OrchestratorConfig, VerificationOrchestrator};
