//! Constant-volatility lognormal smile section.
//!
//! Every strike carries the same Black volatility, so the call-price curve is
//! convex and decreasing everywhere. Handy as a baseline: the region scan
//! should accept the whole grid.

use serde::{Deserialize, Serialize};

use crate::black::black_price;
use crate::error::{self, SmileRegionError};
use crate::smile::SmileSection;
use crate::types::{OptionType, Vol};
use crate::validate::{validate_non_negative, validate_positive};

/// Flat lognormal smile.
///
/// # Construction
///
/// ```
/// use smile_region::smile::{FlatSmile, SmileSection};
///
/// let smile = FlatSmile::new(100.0, 1.0, 0.2).unwrap();
/// assert_eq!(smile.atm_level(), Some(100.0));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "FlatSmileRaw", into = "FlatSmileRaw")]
pub struct FlatSmile {
    forward: f64,
    expiry: f64,
    vol: f64,
    min_strike: f64,
    max_strike: f64,
}

#[derive(Serialize, Deserialize)]
struct FlatSmileRaw {
    forward: f64,
    expiry: f64,
    vol: f64,
    min_strike: f64,
    max_strike: f64,
}

impl TryFrom<FlatSmileRaw> for FlatSmile {
    type Error = SmileRegionError;
    fn try_from(raw: FlatSmileRaw) -> Result<Self, Self::Error> {
        Self::new(raw.forward, raw.expiry, raw.vol)?.with_strike_range(raw.min_strike, raw.max_strike)
    }
}

impl From<FlatSmile> for FlatSmileRaw {
    fn from(s: FlatSmile) -> Self {
        Self {
            forward: s.forward,
            expiry: s.expiry,
            vol: s.vol,
            min_strike: s.min_strike,
            max_strike: s.max_strike,
        }
    }
}

impl FlatSmile {
    /// Create a flat smile supporting strikes in `[0, f64::MAX]`.
    ///
    /// # Errors
    /// Returns [`SmileRegionError::InvalidInput`] if `forward`, `expiry` or
    /// `vol` is not positive and finite.
    pub fn new(forward: f64, expiry: f64, vol: f64) -> error::Result<Self> {
        validate_positive(forward, "forward")?;
        validate_positive(expiry, "expiry")?;
        validate_positive(vol, "vol")?;
        Ok(Self {
            forward,
            expiry,
            vol,
            min_strike: 0.0,
            max_strike: f64::MAX,
        })
    }

    /// Restrict the supported strike range to `[min_strike, max_strike]`.
    ///
    /// # Errors
    /// Returns [`SmileRegionError::InvalidInput`] if `min_strike` is negative
    /// or `max_strike` does not exceed it.
    pub fn with_strike_range(mut self, min_strike: f64, max_strike: f64) -> error::Result<Self> {
        validate_non_negative(min_strike, "min_strike")?;
        if max_strike.is_nan() || max_strike <= min_strike {
            return Err(SmileRegionError::InvalidInput {
                message: format!(
                    "max_strike must exceed min_strike, got [{min_strike}, {max_strike}]"
                ),
            });
        }
        self.min_strike = min_strike;
        self.max_strike = max_strike;
        Ok(self)
    }

    /// The constant Black volatility.
    pub fn vol(&self) -> Vol {
        Vol(self.vol)
    }

    /// Time to expiry in years.
    pub fn expiry(&self) -> f64 {
        self.expiry
    }
}

impl SmileSection for FlatSmile {
    fn min_strike(&self) -> f64 {
        self.min_strike
    }

    fn max_strike(&self) -> f64 {
        self.max_strike
    }

    fn atm_level(&self) -> Option<f64> {
        Some(self.forward)
    }

    fn option_price(
        &self,
        strike: f64,
        option_type: OptionType,
        discount: f64,
    ) -> error::Result<f64> {
        let undiscounted = black_price(self.forward, strike, self.vol, self.expiry, option_type)?;
        Ok(discount * undiscounted)
    }
}
