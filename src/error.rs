//! Error types for the smile-region library.
//!
//! Every failure during region construction is fatal: no partially built
//! [`SmileRegion`](crate::region::SmileRegion) is ever returned. Messages carry
//! the offending values so callers can surface them as diagnostics.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, SmileRegionError>;

/// Errors that can occur while diagnosing a smile section.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SmileRegionError {
    /// Input data is invalid (e.g., decreasing moneyness grid, negative forward).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// No forward override was given and the section publishes no ATM level.
    #[error("atm level must be provided by the smile section or given explicitly")]
    MissingAtmLevel,

    /// The at-the-money grid index is not strictly inside the grid.
    #[error("atm point in moneyness grid (index {index} of {len}) too close to boundary")]
    AtmTooCloseToBoundary {
        /// Anchor index found by the upper-bound search.
        index: usize,
        /// Number of retained grid points.
        len: usize,
    },

    /// The smile section failed to price a call at `strike`.
    #[error("option pricing failed at strike {strike}: {source}")]
    PricingFailed {
        strike: f64,
        /// Error reported by the section, unchanged.
        #[source]
        source: Box<SmileRegionError>,
    },

    /// Numerical computation failed (e.g., NaN, negative variance).
    #[error("numerical error: {message}")]
    NumericalError { message: String },
}
