//! Single-expiry smile sections.
//!
//! A smile section prices options at one expiry as a function of strike. The
//! region scan in [`crate::region`] only needs the narrow contract defined by
//! [`SmileSection`]; any model (parametric, interpolated, market-quoted) can
//! plug in by implementing it.
//!
//! ## Reference sections
//!
//! - [`FlatSmile`]: constant lognormal volatility
//! - [`InterpolatedSmile`]: total variance interpolated between vol knots

pub mod flat;
pub mod interpolated;

pub use flat::FlatSmile;
pub use interpolated::InterpolatedSmile;

use crate::error;
use crate::types::OptionType;

/// A single-expiry smile section.
///
/// # Thread Safety
/// All implementations must be `Send + Sync` so sections can be diagnosed in
/// parallel (see [`RegionBuilder::build_many`](crate::region::RegionBuilder::build_many)).
///
/// # Error Handling
/// [`option_price`](SmileSection::option_price) returns `Result` so
/// implementations can report numerical failures rather than panicking.
pub trait SmileSection: Send + Sync {
    /// Smallest strike the section supports.
    fn min_strike(&self) -> f64;

    /// Largest strike the section supports.
    fn max_strike(&self) -> f64;

    /// At-the-money level (forward), if the section publishes one.
    fn atm_level(&self) -> Option<f64>;

    /// Price of a European option at `strike`, scaled by `discount`.
    fn option_price(
        &self,
        strike: f64,
        option_type: OptionType,
        discount: f64,
    ) -> error::Result<f64>;
}

impl<S: SmileSection + ?Sized> SmileSection for Box<S> {
    fn min_strike(&self) -> f64 {
        (**self).min_strike()
    }

    fn max_strike(&self) -> f64 {
        (**self).max_strike()
    }

    fn atm_level(&self) -> Option<f64> {
        (**self).atm_level()
    }

    fn option_price(
        &self,
        strike: f64,
        option_type: OptionType,
        discount: f64,
    ) -> error::Result<f64> {
        (**self).option_price(strike, option_type, discount)
    }
}
