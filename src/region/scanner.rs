//! Arbitrage scan over a priced grid.
//!
//! Starting from the at-the-money point the scan widens an index window one
//! point at a time, right side first, then left side against the final right
//! edge. Each step is accepted only if the local predicate
//! [`is_arbitrage_free`] holds at the new frontier point and at its inner
//! neighbour. The first rejection rolls the frontier back and ends that side.
//!
//! The predicate checks two discrete conditions on the undiscounted call
//! curve `c(k)`:
//!
//! ```text
//! −1 ≤ (c[i] − c[im]) / (k[i] − k[im]) ≤ 0         (monotone, bounded slope)
//! (c[i] − c[im]) / (k[i] − k[im]) ≤ (c[i+1] − c[i]) / (k[i+1] − k[i])   (convex)
//! ```
//!
//! Both follow from a non-negative risk-neutral density (Breeden-Litzenberger).

use crate::error::{self, SmileRegionError};
use crate::region::grid::MONEYNESS_EPSILON;

/// Lowest index the left scan may reach; index 0 is the synthetic zero strike.
const FIRST_INTERIOR: usize = 1;

/// Index window over which the call curve passed the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScanResult {
    pub(crate) atm_index: usize,
    pub(crate) left: usize,
    pub(crate) right: usize,
}

/// Index of the first moneyness strictly above `1 − ε`.
///
/// # Errors
/// Returns [`SmileRegionError::AtmTooCloseToBoundary`] unless
/// `1 < index < len − 1`.
pub fn atm_index(moneyness: &[f64]) -> error::Result<usize> {
    let len = moneyness.len();
    let index = moneyness.partition_point(|&m| m <= 1.0 - MONEYNESS_EPSILON);
    if index <= FIRST_INTERIOR || index + 1 >= len {
        return Err(SmileRegionError::AtmTooCloseToBoundary { index, len });
    }
    Ok(index)
}

/// Local no-arbitrage test of point `i` inside the window `[i0, i1]`.
///
/// The left slope is taken against `i − 1`, or against index 0 when `i` is
/// the window's left edge. The right slope is only checked when `i < i1`.
/// Index 0 always passes. Indices outside the arrays fail.
pub fn is_arbitrage_free(strikes: &[f64], call_prices: &[f64], i0: usize, i: usize, i1: usize) -> bool {
    if i == 0 {
        return true;
    }
    let im = if i > i0 { i - 1 } else { 0 };

    let Some(q1) = slope(strikes, call_prices, im, i) else {
        return false;
    };
    if q1 < -1.0 || q1 > 0.0 {
        return false;
    }
    if i >= i1 {
        return true;
    }
    match slope(strikes, call_prices, i, i + 1) {
        Some(q2) => q1 <= q2,
        None => false,
    }
}

/// Discrete slope of the call curve between indices `a` and `b`.
fn slope(strikes: &[f64], call_prices: &[f64], a: usize, b: usize) -> Option<f64> {
    let (ka, kb) = (*strikes.get(a)?, *strikes.get(b)?);
    let (ca, cb) = (*call_prices.get(a)?, *call_prices.get(b)?);
    Some((cb - ca) / (kb - ka))
}

/// Locate the ATM anchor and widen the arbitrage-free window around it.
pub(crate) fn scan(moneyness: &[f64], strikes: &[f64], call_prices: &[f64]) -> error::Result<ScanResult> {
    let atm_index = atm_index(moneyness)?;
    let last = strikes.len() - 1;
    let af = |i0, i, i1| is_arbitrage_free(strikes, call_prices, i0, i, i1);

    let mut left = atm_index;
    let mut right = atm_index;

    // The point inside the frontier is re-checked every step: it now has a
    // right neighbour it did not have when it was the frontier.
    loop {
        right += 1;
        if !(af(left, right, right) && af(left, right - 1, right)) {
            right -= 1;
            break;
        }
        if right >= last {
            break;
        }
    }

    loop {
        left -= 1;
        if !(af(left, left, right) && af(left, left + 1, right)) {
            left += 1;
            break;
        }
        if left <= FIRST_INTERIOR {
            break;
        }
    }

    if right < left {
        right = left;
    }

    #[cfg(feature = "logging")]
    tracing::debug!(atm_index, left, right, len = strikes.len(), "arbitrage scan complete");

    Ok(ScanResult {
        atm_index,
        left,
        right,
    })
}
