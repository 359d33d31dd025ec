//! Core domain types.
//!
//! **Outputs use newtypes**: [`Strike`] and [`Vol`] wrap return values so a
//! strike bound can't be mistaken for a price or a volatility.
//!
//! **Inputs use bare `f64`**: `option_price(strike: f64, ..)` accepts raw
//! floats; parameter names already say what they are.
//!
//! These types wrap `f64`, so only `PartialEq` and `PartialOrd` are derived.

use serde::{Deserialize, Serialize};

/// Strike price `K` of an option contract.
///
/// # Examples
/// ```
/// use smile_region::types::Strike;
/// let strike = Strike(100.0);
/// assert_eq!(strike.0, 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Strike(pub f64);

/// Implied volatility `σ`, measured as annualized standard deviation.
///
/// # Examples
/// ```
/// use smile_region::types::Vol;
/// let vol = Vol(0.20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Vol(pub f64);

/// Option type: call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    /// Right to buy at strike price.
    Call,
    /// Right to sell at strike price.
    Put,
}
