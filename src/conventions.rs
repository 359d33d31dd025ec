//! Moneyness conventions.
//!
//! The region scan works on simple moneyness `m = K / F`; strikes on the grid
//! are recovered as `K = m · F`.

/// Convert simple moneyness back to a strike: K = m · F.
pub fn strike_at(moneyness: f64, forward: f64) -> f64 {
    moneyness * forward
}

/// Compute forward price from spot: F = S · exp((r − q) · T).
pub fn forward_price(spot: f64, rate: f64, dividend_yield: f64, expiry: f64) -> f64 {
    spot * ((rate - dividend_yield) * expiry).exp()
}
