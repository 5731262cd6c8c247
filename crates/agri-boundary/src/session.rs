//! # Boundary Capture State Machine
//!
//! One session per boundary instance. The session exclusively owns its
//! point list (all mutators take `&mut self`), so there is no locking
//! and no shared mutable state — a fresh boundary means a fresh session.

use agri_core::{BoundaryPoint, CapturedFix, ParcelMetadata, ValidationError};
use agri_geometry::GeometryResult;
use agri_verify::VerificationOrchestrator;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::{compose, ComplianceRecord, ComposeError};

/// Lifecycle states of a boundary capture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaptureState {
    /// No points captured yet.
    Empty,
    /// Points captured, but fewer than the completion minimum.
    Collecting,
    /// Enough points to close the boundary; still accepting more.
    ReadyToClose,
    /// Polygon frozen, verification triggered. Terminal state.
    Closed,
}

impl CaptureState {
    /// Whether this is a terminal state (no further mutation).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// The canonical string name of this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "EMPTY",
            Self::Collecting => "COLLECTING",
            Self::ReadyToClose => "READY_TO_CLOSE",
            Self::Closed => "CLOSED",
        }
    }
}

impl std::fmt::Display for CaptureState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Completion policy for a capture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturePolicy {
    /// Minimum vertex count before the boundary may be closed.
    pub min_points: usize,
}

impl CapturePolicy {
    /// A policy with the given minimum, floored at 3 — a polygon with
    /// fewer vertices has no area to report.
    pub fn with_min_points(min_points: usize) -> Self {
        Self {
            min_points: min_points.max(3),
        }
    }
}

impl Default for CapturePolicy {
    fn default() -> Self {
        Self { min_points: 3 }
    }
}

/// Errors from driving a capture session.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The requested transition is not valid in the current state.
    #[error("cannot {operation} in state {state}")]
    InvalidState {
        /// The operation that was attempted.
        operation: &'static str,
        /// The session state at the time.
        state: CaptureState,
    },

    /// The supplied point failed validation.
    #[error(transparent)]
    InvalidPoint(#[from] ValidationError),

    /// Record composition failed.
    #[error(transparent)]
    Compose(#[from] ComposeError),
}

/// A single boundary capture session for one parcel.
pub struct BoundaryCaptureSession {
    metadata: ParcelMetadata,
    policy: CapturePolicy,
    state: CaptureState,
    points: Vec<BoundaryPoint>,
    geometry: Option<GeometryResult>,
}

impl BoundaryCaptureSession {
    /// Start an empty session with the default policy.
    pub fn new(metadata: ParcelMetadata) -> Self {
        Self::with_policy(metadata, CapturePolicy::default())
    }

    /// Start an empty session with an explicit completion policy.
    pub fn with_policy(metadata: ParcelMetadata, policy: CapturePolicy) -> Self {
        Self {
            metadata,
            policy,
            state: CaptureState::Empty,
            points: Vec::new(),
            geometry: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// The captured vertices, in order.
    pub fn points(&self) -> &[BoundaryPoint] {
        &self.points
    }

    /// Geometry of the current polygon, if any point has been captured.
    pub fn geometry(&self) -> Option<&GeometryResult> {
        self.geometry.as_ref()
    }

    /// Append a raw capture fix as the next vertex.
    ///
    /// Valid in every state except `Closed`. The fix is validated, the
    /// session mints the vertex identity and order, geometry is
    /// recomputed, and the session auto-promotes to `ReadyToClose` once
    /// the completion minimum is reached.
    ///
    /// # Errors
    ///
    /// [`CaptureError::InvalidState`] after the boundary is frozen, or
    /// [`CaptureError::InvalidPoint`] when the fix fails validation.
    pub fn add_point(&mut self, fix: &CapturedFix) -> Result<&GeometryResult, CaptureError> {
        if self.state.is_terminal() {
            return Err(CaptureError::InvalidState {
                operation: "add_point",
                state: self.state,
            });
        }

        let order = self.points.len() as u32;
        let point = BoundaryPoint::from_fix(fix, order)?;
        self.accept(point)
    }

    /// Append a collaborator-built vertex, enforcing the order invariant.
    ///
    /// Same state rules as [`add_point`](Self::add_point); additionally
    /// rejects a point whose `order` does not strictly increase over the
    /// last accepted vertex.
    pub fn push_point(&mut self, point: BoundaryPoint) -> Result<&GeometryResult, CaptureError> {
        if self.state.is_terminal() {
            return Err(CaptureError::InvalidState {
                operation: "push_point",
                state: self.state,
            });
        }

        if let Some(last) = self.points.last() {
            if point.order <= last.order {
                return Err(ValidationError::OrderNotIncreasing {
                    prev: last.order,
                    next: point.order,
                }
                .into());
            }
        }
        self.accept(point)
    }

    fn accept(&mut self, point: BoundaryPoint) -> Result<&GeometryResult, CaptureError> {
        self.points.push(point);
        let geometry = GeometryResult::from_points(&self.points);
        tracing::debug!(
            parcel = %self.metadata.parcel_id,
            points = geometry.point_count,
            area_hectares = geometry.area_hectares,
            "boundary point accepted, geometry recomputed"
        );

        self.state = if self.points.len() >= self.policy.min_points {
            CaptureState::ReadyToClose
        } else {
            CaptureState::Collecting
        };
        Ok(self.geometry.insert(geometry))
    }

    /// Discard all points and return to `Empty`. Valid in any state.
    pub fn reset(&mut self) {
        tracing::debug!(
            parcel = %self.metadata.parcel_id,
            discarded = self.points.len(),
            "boundary session reset"
        );
        self.points.clear();
        self.geometry = None;
        self.state = CaptureState::Empty;
    }

    /// Freeze the polygon, verify its centroid, and compose the record.
    ///
    /// Valid only from `ReadyToClose`. The session transitions to
    /// `Closed` before awaiting verification, so no point can slip in
    /// while the orchestrator is in flight. `Closed` is terminal: the
    /// session cannot be completed twice, and further `add_point` calls
    /// are rejected.
    ///
    /// # Errors
    ///
    /// [`CaptureError::InvalidState`] from any state other than
    /// `ReadyToClose`.
    pub async fn complete(
        &mut self,
        orchestrator: &VerificationOrchestrator,
    ) -> Result<ComplianceRecord, CaptureError> {
        if self.state != CaptureState::ReadyToClose {
            return Err(CaptureError::InvalidState {
                operation: "complete",
                state: self.state,
            });
        }

        self.state = CaptureState::Closed;
        // ReadyToClose implies at least min_points accepted points, so
        // geometry is present.
        let geometry = self
            .geometry
            .clone()
            .ok_or(ComposeError::MissingGeometry)?;

        tracing::info!(
            parcel = %self.metadata.parcel_id,
            points = geometry.point_count,
            area_hectares = geometry.area_hectares,
            "boundary frozen, verifying centroid"
        );
        let verdict = orchestrator.verify(geometry.centroid).await;

        let record = compose(Some(&geometry), Some(&verdict), self.metadata.clone())?;
        Ok(record)
    }
}
