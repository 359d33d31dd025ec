//! Undiscounted Black-76 option prices.
//!
//! Used by the reference smile sections in [`crate::smile`] to turn an
//! implied volatility into a call or put price.
//!
//! # Formula
//! ```text
//! C = F·N(d₁) − K·N(d₂)
//! P = K·N(−d₂) − F·N(−d₁)
//! d₁ = (ln(F/K) + σ²T/2) / (σ√T),  d₂ = d₁ − σ√T
//! ```

use std::f64::consts::SQRT_2;

use statrs::function::erf::erfc;

use crate::error::SmileRegionError;
use crate::types::OptionType;
use crate::validate::{validate_non_negative, validate_positive};

/// Standard normal CDF.
///
/// Evaluated through `erfc` of a non-positive argument on each side so deep
/// tails keep their relative accuracy.
pub(crate) fn norm_cdf(x: f64) -> f64 {
    if x < 0.0 {
        0.5 * erfc(-x / SQRT_2)
    } else {
        1.0 - 0.5 * erfc(x / SQRT_2)
    }
}

/// Undiscounted Black-76 price of a European option.
///
/// A zero strike prices the call at the forward and the put at zero. Zero
/// total volatility returns intrinsic value.
///
/// # Errors
/// Returns [`SmileRegionError::InvalidInput`] for a non-positive forward,
/// negative strike, negative vol or negative expiry, and
/// [`SmileRegionError::NumericalError`] if the result is not finite.
///
/// # Examples
/// ```
/// use smile_region::black::black_price;
/// use smile_region::types::OptionType;
///
/// let c = black_price(100.0, 100.0, 0.2, 1.0, OptionType::Call).unwrap();
/// assert!((c - 7.9656).abs() < 1e-3);
/// ```
pub fn black_price(
    forward: f64,
    strike: f64,
    vol: f64,
    expiry: f64,
    option_type: OptionType,
) -> crate::error::Result<f64> {
    validate_positive(forward, "forward")?;
    validate_non_negative(strike, "strike")?;
    validate_non_negative(vol, "vol")?;
    validate_non_negative(expiry, "expiry")?;

    if strike == 0.0 {
        return Ok(match option_type {
            OptionType::Call => forward,
            OptionType::Put => 0.0,
        });
    }

    let std_dev = vol * expiry.sqrt();
    if std_dev == 0.0 {
        return Ok(match option_type {
            OptionType::Call => (forward - strike).max(0.0),
            OptionType::Put => (strike - forward).max(0.0),
        });
    }

    let d1 = ((forward / strike).ln() + 0.5 * std_dev * std_dev) / std_dev;
    let d2 = d1 - std_dev;
    let call = || (forward * norm_cdf(d1) - strike * norm_cdf(d2)).max(0.0);
    let put = || (strike * norm_cdf(-d2) - forward * norm_cdf(-d1)).max(0.0);

    // In the money, intrinsic plus the out-of-the-money twin via parity.
    let price = match (option_type, forward > strike) {
        (OptionType::Call, false) => call(),
        (OptionType::Call, true) => (forward - strike) + put(),
        (OptionType::Put, true) => put(),
        (OptionType::Put, false) => (strike - forward) + call(),
    };
    if !price.is_finite() {
        return Err(SmileRegionError::NumericalError {
            message: format!("non-finite Black price at strike {strike}, vol {vol}"),
        });
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn norm_cdf_symmetry() {
        assert_abs_diff_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
        for x in [0.3, 1.0, 2.5, 6.0] {
            assert_abs_diff_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn atm_call_matches_reference() {
        // F = K = 100, σ = 20%, T = 1: C = 100·(2N(0.1) − 1)
        let c = black_price(100.0, 100.0, 0.2, 1.0, OptionType::Call).unwrap();
        assert_abs_diff_eq!(c, 7.965567455405798, epsilon = 1e-10);
    }

    #[test]
    fn put_call_parity() {
        let (f, t, vol) = (100.0, 0.75, 0.35);
        for k in [40.0, 80.0, 100.0, 130.0, 250.0] {
            let c = black_price(f, k, vol, t, OptionType::Call).unwrap();
            let p = black_price(f, k, vol, t, OptionType::Put).unwrap();
            assert_abs_diff_eq!(c - p, f - k, epsilon = 1e-10);
        }
    }

    #[test]
    fn zero_strike_call_is_forward() {
        assert_eq!(black_price(100.0, 0.0, 0.2, 1.0, OptionType::Call).unwrap(), 100.0);
        assert_eq!(black_price(100.0, 0.0, 0.2, 1.0, OptionType::Put).unwrap(), 0.0);
    }

    #[test]
    fn zero_vol_is_intrinsic() {
        assert_eq!(black_price(100.0, 90.0, 0.0, 1.0, OptionType::Call).unwrap(), 10.0);
        assert_eq!(black_price(100.0, 90.0, 0.2, 0.0, OptionType::Put).unwrap(), 0.0);
    }

    #[test]
    fn call_never_below_intrinsic() {
        for k in [1.0, 5.0, 25.0, 60.0, 99.0] {
            let c = black_price(100.0, k, 0.2, 1.0, OptionType::Call).unwrap();
            assert!(c >= 100.0 - k, "call {c} below intrinsic at strike {k}");
        }
    }

    #[test]
    fn deep_itm_call_keeps_time_value_sign() {
        // Low total vol: the time value is far below one ulp of the forward.
        let (f, t, vol) = (100.0, 0.1, 0.15);
        let mut prev = f;
        for k in [50.0, 60.0, 70.0, 80.0] {
            let c = black_price(f, k, vol, t, OptionType::Call).unwrap();
            assert!(c >= f - k);
            assert!((c - prev) / 10.0 >= -1.0 || k == 50.0);
            prev = c;
        }
    }

    #[test]
    fn rejects_invalid_inputs() {
        assert!(black_price(0.0, 100.0, 0.2, 1.0, OptionType::Call).is_err());
        assert!(black_price(100.0, -1.0, 0.2, 1.0, OptionType::Call).is_err());
        assert!(black_price(100.0, 100.0, -0.2, 1.0, OptionType::Call).is_err());
        assert!(black_price(100.0, 100.0, f64::NAN, 1.0, OptionType::Call).is_err());
    }
}
