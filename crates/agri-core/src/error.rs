//! Validation errors for capture-time ingestion.

use thiserror::Error;

/// Errors rejecting malformed capture input before it reaches the
/// geometry engine or a boundary session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Latitude outside the [-90, 90] degree range.
    #[error("latitude {value} out of range [-90, 90]")]
    LatitudeOutOfRange {
        /// The rejected latitude in degrees.
        value: f64,
    },

    /// Longitude outside the [-180, 180] degree range.
    #[error("longitude {value} out of range [-180, 180]")]
    LongitudeOutOfRange {
        /// The rejected longitude in degrees.
        value: f64,
    },

    /// A coordinate component was NaN or infinite.
    #[error("non-finite {component} in capture input")]
    NonFiniteValue {
        /// Which component was non-finite ("latitude", "longitude",
        /// "accuracy_meters").
        component: &'static str,
    },

    /// GPS accuracy radius was negative.
    #[error("accuracy_meters {value} must be >= 0")]
    NegativeAccuracy {
        /// The rejected accuracy value in meters.
        value: f64,
    },

    /// A point's order did not strictly increase within its boundary.
    #[error("point order {next} does not increase over previous order {prev}")]
    OrderNotIncreasing {
        /// Order of the last accepted point.
        prev: u32,
        /// Order of the rejected point.
        next: u32,
    },
}
