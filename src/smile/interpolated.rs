//! Knot-based smile section with linear interpolation of total variance.
//!
//! A non-parametric section built from observed (strike, implied vol) pairs.
//! Total variance `w = σ²T` is interpolated linearly between knots and held
//! flat outside them; prices come from the Black formula. The supported strike
//! range is the knot range, so grid points beyond the quotes are dropped by
//! the region scan.
//!
//! Because nothing smooths the knots, a single bad quote shows up as a local
//! kink in the call-price curve, which is exactly what the region scan is
//! meant to catch.

use serde::{Deserialize, Serialize};

use crate::black::black_price;
use crate::error::{self, SmileRegionError};
use crate::smile::SmileSection;
use crate::types::{OptionType, Vol};
use crate::validate::{validate_non_negative, validate_positive};

/// Smile interpolated linearly in total variance between vol knots.
///
/// # Construction
///
/// ```
/// use smile_region::smile::{InterpolatedSmile, SmileSection};
///
/// let strikes = vec![80.0, 90.0, 100.0, 110.0, 120.0];
/// let vols = vec![0.26, 0.22, 0.20, 0.21, 0.24];
/// let smile = InterpolatedSmile::new(100.0, 1.0, strikes, vols).unwrap();
/// assert_eq!(smile.min_strike(), 80.0);
/// assert_eq!(smile.max_strike(), 120.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "InterpolatedSmileRaw", into = "InterpolatedSmileRaw")]
pub struct InterpolatedSmile {
    forward: f64,
    expiry: f64,
    strikes: Vec<f64>,
    vols: Vec<f64>,
    /// Total variance at each knot, σ²T.
    variances: Vec<f64>,
    publishes_atm: bool,
}

#[derive(Serialize, Deserialize)]
struct InterpolatedSmileRaw {
    forward: f64,
    expiry: f64,
    strikes: Vec<f64>,
    vols: Vec<f64>,
    publishes_atm: bool,
}

impl TryFrom<InterpolatedSmileRaw> for InterpolatedSmile {
    type Error = SmileRegionError;
    fn try_from(raw: InterpolatedSmileRaw) -> Result<Self, Self::Error> {
        let smile = Self::new(raw.forward, raw.expiry, raw.strikes, raw.vols)?;
        Ok(if raw.publishes_atm {
            smile
        } else {
            smile.without_atm_level()
        })
    }
}

impl From<InterpolatedSmile> for InterpolatedSmileRaw {
    fn from(s: InterpolatedSmile) -> Self {
        Self {
            forward: s.forward,
            expiry: s.expiry,
            strikes: s.strikes,
            vols: s.vols,
            publishes_atm: s.publishes_atm,
        }
    }
}

impl InterpolatedSmile {
    /// Create an interpolated smile from strike-vol pairs.
    ///
    /// # Arguments
    /// * `forward`: Forward price at expiry (must be > 0)
    /// * `expiry`: Time to expiry in years (must be > 0)
    /// * `strikes`: Strictly increasing positive strikes (at least 2)
    /// * `vols`: Positive Black volatilities at each strike
    ///
    /// # Errors
    /// Returns [`SmileRegionError::InvalidInput`] if fewer than 2 knots are
    /// provided, lengths differ, strikes are not strictly increasing and
    /// positive, or any vol is not positive and finite.
    pub fn new(forward: f64, expiry: f64, strikes: Vec<f64>, vols: Vec<f64>) -> error::Result<Self> {
        validate_positive(forward, "forward")?;
        validate_positive(expiry, "expiry")?;
        if strikes.len() != vols.len() {
            return Err(SmileRegionError::InvalidInput {
                message: format!(
                    "strikes and vols must have the same length, got {} and {}",
                    strikes.len(),
                    vols.len()
                ),
            });
        }
        if strikes.len() < 2 {
            return Err(SmileRegionError::InvalidInput {
                message: "interpolated smile requires at least 2 knots".into(),
            });
        }
        for &k in &strikes {
            validate_positive(k, "strike")?;
        }
        for (i, w) in strikes.windows(2).enumerate() {
            if w[1] <= w[0] {
                return Err(SmileRegionError::InvalidInput {
                    message: format!(
                        "strikes must be strictly increasing, but strikes[{}]={} >= strikes[{}]={}",
                        i,
                        w[0],
                        i + 1,
                        w[1]
                    ),
                });
            }
        }
        for &v in &vols {
            validate_positive(v, "vol")?;
        }

        let variances = vols.iter().map(|v| v * v * expiry).collect();
        Ok(Self {
            forward,
            expiry,
            strikes,
            vols,
            variances,
            publishes_atm: true,
        })
    }

    /// Stop publishing the forward as the ATM level.
    ///
    /// Callers diagnosing such a section must supply the forward themselves.
    pub fn without_atm_level(mut self) -> Self {
        self.publishes_atm = false;
        self
    }

    /// Implied Black volatility at `strike`.
    ///
    /// # Errors
    /// Returns [`SmileRegionError::InvalidInput`] for a negative or non-finite strike.
    pub fn vol(&self, strike: f64) -> error::Result<Vol> {
        validate_non_negative(strike, "strike")?;
        Ok(Vol((self.eval_variance(strike) / self.expiry).sqrt()))
    }

    /// Total variance at `strike`, linear between knots, flat outside.
    fn eval_variance(&self, strike: f64) -> f64 {
        let n = self.strikes.len();
        if strike <= self.strikes[0] {
            return self.variances[0];
        }
        if strike >= self.strikes[n - 1] {
            return self.variances[n - 1];
        }
        let i = self.strikes.partition_point(|&x| x < strike) - 1;
        let t = (strike - self.strikes[i]) / (self.strikes[i + 1] - self.strikes[i]);
        self.variances[i] + t * (self.variances[i + 1] - self.variances[i])
    }
}

impl SmileSection for InterpolatedSmile {
    fn min_strike(&self) -> f64 {
        self.strikes[0]
    }

    fn max_strike(&self) -> f64 {
        self.strikes[self.strikes.len() - 1]
    }

    fn atm_level(&self) -> Option<f64> {
        self.publishes_atm.then_some(self.forward)
    }

    fn option_price(
        &self,
        strike: f64,
        option_type: OptionType,
        discount: f64,
    ) -> error::Result<f64> {
        let vol = self.vol(strike)?;
        let undiscounted = black_price(self.forward, strike, vol.0, self.expiry, option_type)?;
        Ok(discount * undiscounted)
    }
}
