//! Builder API for smile region diagnosis.
//!
//! ```
//! use smile_region::region::RegionBuilder;
//! use smile_region::smile::FlatSmile;
//!
//! let section = FlatSmile::new(100.0, 0.5, 0.25)?;
//! let region = RegionBuilder::new()
//!     .moneyness_grid(&[0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 2.0])
//!     .build(&section)?;
//!
//! let (left, right) = region.arbitrage_free_index_region();
//! assert!(left <= region.atm_index() && region.atm_index() <= right);
//! # Ok::<(), smile_region::SmileRegionError>(())
//! ```

use crate::region::SmileRegion;
use crate::smile::SmileSection;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Configuration shared by one or more region diagnoses.
///
/// Defaults: the built-in moneyness grid and the section's own ATM level.
#[derive(Debug, Clone, Default)]
pub struct RegionBuilder {
    moneyness_grid: Vec<f64>,
    atm_level: Option<f64>,
}

impl RegionBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the moneyness grid. An empty grid selects the default grid.
    pub fn moneyness_grid(mut self, grid: &[f64]) -> Self {
        self.moneyness_grid = grid.to_vec();
        self
    }

    /// Use `forward` instead of the section's ATM level.
    pub fn atm_level(mut self, forward: f64) -> Self {
        self.atm_level = Some(forward);
        self
    }

    /// Diagnose one smile section.
    ///
    /// # Errors
    /// See [`SmileRegion::new`].
    pub fn build<S: SmileSection + ?Sized>(&self, section: &S) -> crate::error::Result<SmileRegion> {
        SmileRegion::new(section, &self.moneyness_grid, self.atm_level)
    }

    /// Diagnose several smile sections (e.g. one per expiry) with the same
    /// configuration.
    ///
    /// Results come back in input order; one failing section does not stop
    /// the others. Runs on the rayon pool with the `parallel` feature.
    pub fn build_many(
        &self,
        sections: &[&dyn SmileSection],
    ) -> Vec<crate::error::Result<SmileRegion>> {
        #[cfg(feature = "logging")]
        tracing::debug!(n_sections = sections.len(), "batch region diagnosis started");

        #[cfg(feature = "parallel")]
        let regions: Vec<_> = sections.par_iter().map(|s| self.build(*s)).collect();
        #[cfg(not(feature = "parallel"))]
        let regions: Vec<_> = sections.iter().map(|s| self.build(*s)).collect();

        #[cfg(feature = "logging")]
        tracing::debug!(
            n_ok = regions.iter().filter(|r| r.is_ok()).count(),
            "batch region diagnosis complete"
        );

        regions
    }
}
