//! Moneyness and strike grid construction.
//!
//! Turns a caller moneyness grid (or the built-in default) into the
//! index-aligned moneyness/strike arrays that the sampler prices: the forward
//! is resolved, a zero-strike anchor is guaranteed at index 0, and points
//! outside the section's strike range are dropped.

use crate::conventions::strike_at;
use crate::error::{self, SmileRegionError};
use crate::smile::SmileSection;
use crate::validate::{validate_moneyness_grid, validate_positive};

/// Tolerance under which a moneyness is treated as zero, and below which
/// `1 - ε` marks the at-the-money threshold.
pub const MONEYNESS_EPSILON: f64 = f64::EPSILON;

/// Moneyness grid used when the caller passes an empty one.
pub const DEFAULT_MONEYNESS_GRID: [f64; 21] = [
    0.0, 0.01, 0.05, 0.10, 0.25, 0.40, 0.50, 0.60, 0.70, 0.80, 0.90, 1.0, 1.25, 1.5, 1.75, 2.0,
    5.0, 7.5, 10.0, 15.0, 20.0,
];

/// Retained moneyness points and their strikes.
///
/// `strikes[i] == moneyness[i] * forward` for every `i`, and
/// `moneyness[0] == 0.0` (up to [`MONEYNESS_EPSILON`]). A caller grid starting
/// in `(0, ε]` is kept as is, so `strikes[0]` is then tiny but not zero.
#[derive(Debug, Clone, PartialEq)]
pub struct StrikeGrid {
    pub(crate) forward: f64,
    pub(crate) moneyness: Vec<f64>,
    pub(crate) strikes: Vec<f64>,
}

impl StrikeGrid {
    /// Build the strike grid for `section`.
    ///
    /// An empty `moneyness_grid` selects [`DEFAULT_MONEYNESS_GRID`]. The
    /// forward is `atm` if given, otherwise the section's ATM level.
    ///
    /// # Errors
    /// - [`SmileRegionError::InvalidInput`] if the grid is not finite,
    ///   non-negative and strictly increasing, or the forward is not positive.
    /// - [`SmileRegionError::MissingAtmLevel`] if no forward can be resolved.
    pub fn build<S: SmileSection + ?Sized>(
        section: &S,
        moneyness_grid: &[f64],
        atm: Option<f64>,
    ) -> error::Result<Self> {
        validate_moneyness_grid(moneyness_grid)?;

        let forward = atm
            .or_else(|| section.atm_level())
            .ok_or(SmileRegionError::MissingAtmLevel)?;
        validate_positive(forward, "forward")?;

        let source: &[f64] = if moneyness_grid.is_empty() {
            &DEFAULT_MONEYNESS_GRID
        } else {
            moneyness_grid
        };

        let (min_strike, max_strike) = (section.min_strike(), section.max_strike());
        let mut moneyness = Vec::with_capacity(source.len() + 1);
        let mut strikes = Vec::with_capacity(source.len() + 1);

        if source[0] > MONEYNESS_EPSILON {
            moneyness.push(0.0);
            strikes.push(0.0);
        }

        for &m in source {
            let k = strike_at(m, forward);
            if m.abs() < MONEYNESS_EPSILON || (k >= min_strike && k <= max_strike) {
                moneyness.push(m);
                strikes.push(k);
            }
        }

        #[cfg(feature = "logging")]
        tracing::debug!(
            forward,
            n_input = source.len(),
            n_kept = moneyness.len(),
            min_strike,
            max_strike,
            "strike grid built"
        );

        Ok(Self {
            forward,
            moneyness,
            strikes,
        })
    }

    /// Resolved forward level used to scale moneyness into strikes.
    pub fn forward(&self) -> f64 {
        self.forward
    }

    /// Retained moneyness points, zero-prefixed.
    pub fn moneyness(&self) -> &[f64] {
        &self.moneyness
    }

    /// Strikes, `moneyness * forward`.
    pub fn strikes(&self) -> &[f64] {
        &self.strikes
    }

    /// Number of retained points.
    pub fn len(&self) -> usize {
        self.strikes.len()
    }

    /// Whether no point was retained. Never true for a built grid.
    pub fn is_empty(&self) -> bool {
        self.strikes.is_empty()
    }
}
