//! Arbitrage-free region of a single smile section.
//!
//! Diagnosis runs in three steps, each feeding the next:
//!
//! 1. [`StrikeGrid::build`]: validate the moneyness grid, resolve the
//!    forward, guarantee a zero strike, drop points the section can't price.
//! 2. [`PricedGrid::sample`]: price an undiscounted call at every strike.
//! 3. [`scanner`]: find the ATM anchor and widen the arbitrage-free window.
//!
//! The result, [`SmileRegion`], is an immutable snapshot.
//!
//! ```
//! use smile_region::region::SmileRegion;
//! use smile_region::smile::FlatSmile;
//!
//! let section = FlatSmile::new(100.0, 1.0, 0.2)?;
//! let region = SmileRegion::new(&section, &[], None)?;
//!
//! let (lo, hi) = region.arbitrage_free_strike_region();
//! assert!(lo.0 < 100.0 && hi.0 > 100.0);
//! # Ok::<(), smile_region::SmileRegionError>(())
//! ```

pub mod builder;
pub mod grid;
pub mod sampler;
pub mod scanner;

pub use builder::RegionBuilder;
pub use grid::{DEFAULT_MONEYNESS_GRID, MONEYNESS_EPSILON, StrikeGrid};
pub use sampler::PricedGrid;

use serde::{Deserialize, Serialize};

use crate::error::{self, SmileRegionError};
use crate::smile::SmileSection;
use crate::types::Strike;

/// Widest arbitrage-free index window around the ATM point of one smile.
///
/// Invariant: `left ≤ atm_index ≤ right`, all within the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PricedGrid", into = "PricedGrid")]
pub struct SmileRegion {
    grid: PricedGrid,
    atm_index: usize,
    left: usize,
    right: usize,
}

impl TryFrom<PricedGrid> for SmileRegion {
    type Error = SmileRegionError;
    fn try_from(grid: PricedGrid) -> Result<Self, Self::Error> {
        Self::from_priced_grid(grid)
    }
}

impl From<SmileRegion> for PricedGrid {
    fn from(region: SmileRegion) -> Self {
        region.grid
    }
}

impl SmileRegion {
    /// Diagnose `section` on `moneyness_grid`.
    ///
    /// An empty grid selects [`DEFAULT_MONEYNESS_GRID`]. `atm` overrides the
    /// section's ATM level as the forward.
    ///
    /// # Errors
    /// - [`SmileRegionError::InvalidInput`] for a malformed grid or forward
    /// - [`SmileRegionError::MissingAtmLevel`] if no forward is available
    /// - [`SmileRegionError::PricingFailed`] if the section fails to price a strike
    /// - [`SmileRegionError::AtmTooCloseToBoundary`] if the ATM point has no
    ///   room on either side
    pub fn new<S: SmileSection + ?Sized>(
        section: &S,
        moneyness_grid: &[f64],
        atm: Option<f64>,
    ) -> error::Result<Self> {
        #[cfg(feature = "logging")]
        tracing::debug!(
            n_grid = moneyness_grid.len(),
            atm_override = ?atm,
            "smile region diagnosis started"
        );

        let strikes = StrikeGrid::build(section, moneyness_grid, atm)?;
        let priced = PricedGrid::sample(section, strikes)?;
        Self::from_priced_grid(priced)
    }

    /// Run only the arbitrage scan over an already priced grid.
    ///
    /// # Errors
    /// Returns [`SmileRegionError::AtmTooCloseToBoundary`] if the ATM point
    /// has no room on either side.
    pub fn from_priced_grid(grid: PricedGrid) -> error::Result<Self> {
        let scan = scanner::scan(grid.moneyness(), grid.strikes(), grid.call_prices())?;
        Ok(Self {
            grid,
            atm_index: scan.atm_index,
            left: scan.left,
            right: scan.right,
        })
    }

    /// Strikes bounding the arbitrage-free region, inclusive.
    pub fn arbitrage_free_strike_region(&self) -> (Strike, Strike) {
        let strikes = self.grid.strikes();
        (Strike(strikes[self.left]), Strike(strikes[self.right]))
    }

    /// Grid indices bounding the arbitrage-free region, inclusive.
    pub fn arbitrage_free_index_region(&self) -> (usize, usize) {
        (self.left, self.right)
    }

    /// Whether `strike` lies inside the arbitrage-free strike region.
    pub fn contains_strike(&self, strike: f64) -> bool {
        let (lo, hi) = self.arbitrage_free_strike_region();
        lo.0 <= strike && strike <= hi.0
    }

    /// Grid index of the first point at or beyond the forward.
    pub fn atm_index(&self) -> usize {
        self.atm_index
    }

    /// Forward level used to build the strike grid.
    pub fn forward(&self) -> f64 {
        self.grid.forward()
    }

    /// Retained moneyness points.
    pub fn moneyness(&self) -> &[f64] {
        self.grid.moneyness()
    }

    /// Grid strikes.
    pub fn strikes(&self) -> &[f64] {
        self.grid.strikes()
    }

    /// Undiscounted call prices; the first entry is the forward.
    pub fn call_prices(&self) -> &[f64] {
        self.grid.call_prices()
    }

    /// The full priced grid.
    pub fn grid(&self) -> &PricedGrid {
        &self.grid
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    /// Always false: a region is built over at least four points.
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }
}
