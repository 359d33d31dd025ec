//! Call-price sampling over a strike grid.

use serde::{Deserialize, Serialize};

use crate::error::{self, SmileRegionError};
use crate::region::grid::StrikeGrid;
use crate::smile::SmileSection;
use crate::types::OptionType;
use crate::validate::{validate_finite, validate_moneyness_grid, validate_positive, validate_strikes};

/// Discount factor used for every sampled price.
const UNIT_DISCOUNT: f64 = 1.0;

/// Moneyness, strike and undiscounted call-price table for one expiry.
///
/// Index-aligned. `call_prices[0]` is the forward: the limit of an
/// undiscounted call as its strike goes to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PricedGridRaw", into = "PricedGridRaw")]
pub struct PricedGrid {
    forward: f64,
    moneyness: Vec<f64>,
    strikes: Vec<f64>,
    call_prices: Vec<f64>,
}

#[derive(Serialize, Deserialize)]
struct PricedGridRaw {
    forward: f64,
    moneyness: Vec<f64>,
    strikes: Vec<f64>,
    call_prices: Vec<f64>,
}

impl TryFrom<PricedGridRaw> for PricedGrid {
    type Error = SmileRegionError;
    fn try_from(raw: PricedGridRaw) -> Result<Self, Self::Error> {
        Self::new(raw.forward, raw.moneyness, raw.strikes, raw.call_prices)
    }
}

impl From<PricedGrid> for PricedGridRaw {
    fn from(g: PricedGrid) -> Self {
        Self {
            forward: g.forward,
            moneyness: g.moneyness,
            strikes: g.strikes,
            call_prices: g.call_prices,
        }
    }
}

impl PricedGrid {
    /// Assemble a priced grid from precomputed arrays.
    ///
    /// Prices are taken as given beyond being finite; no arbitrage check is
    /// made here.
    ///
    /// # Errors
    /// Returns [`SmileRegionError::InvalidInput`] if the arrays are empty or
    /// their lengths differ, the forward is not positive, the moneyness or
    /// strikes are not finite, non-negative and strictly increasing, or a
    /// price is not finite.
    pub fn new(
        forward: f64,
        moneyness: Vec<f64>,
        strikes: Vec<f64>,
        call_prices: Vec<f64>,
    ) -> error::Result<Self> {
        if moneyness.len() != strikes.len() || strikes.len() != call_prices.len() {
            return Err(SmileRegionError::InvalidInput {
                message: format!(
                    "moneyness, strikes and call prices must have the same length, got {}, {} and {}",
                    moneyness.len(),
                    strikes.len(),
                    call_prices.len()
                ),
            });
        }
        if strikes.is_empty() {
            return Err(SmileRegionError::InvalidInput {
                message: "priced grid requires at least one point".into(),
            });
        }
        validate_positive(forward, "forward")?;
        validate_moneyness_grid(&moneyness)?;
        validate_strikes(&strikes)?;
        validate_finite(&call_prices, "call_prices")?;
        Ok(Self {
            forward,
            moneyness,
            strikes,
            call_prices,
        })
    }

    /// Price every grid strike with `section`.
    ///
    /// Index 0 is seeded with the forward instead of a pricing call; every
    /// other strike is priced as an undiscounted call and stored verbatim.
    ///
    /// # Errors
    /// Returns [`SmileRegionError::PricingFailed`] carrying the strike and the
    /// section's error on the first failed pricing call.
    pub fn sample<S: SmileSection + ?Sized>(section: &S, grid: StrikeGrid) -> error::Result<Self> {
        let StrikeGrid {
            forward,
            moneyness,
            strikes,
        } = grid;

        let mut call_prices = Vec::with_capacity(strikes.len());
        call_prices.push(forward);
        for &strike in strikes.iter().skip(1) {
            let price = section
                .option_price(strike, OptionType::Call, UNIT_DISCOUNT)
                .map_err(|source| SmileRegionError::PricingFailed {
                    strike,
                    source: Box::new(source),
                })?;
            call_prices.push(price);
        }

        Ok(Self {
            forward,
            moneyness,
            strikes,
            call_prices,
        })
    }

    /// Forward level the strikes were scaled by.
    pub fn forward(&self) -> f64 {
        self.forward
    }

    /// Moneyness points.
    pub fn moneyness(&self) -> &[f64] {
        &self.moneyness
    }

    /// Strikes.
    pub fn strikes(&self) -> &[f64] {
        &self.strikes
    }

    /// Undiscounted call prices.
    pub fn call_prices(&self) -> &[f64] {
        &self.call_prices
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.strikes.len()
    }

    /// Always false: a priced grid holds at least one point.
    pub fn is_empty(&self) -> bool {
        self.strikes.is_empty()
    }
}
