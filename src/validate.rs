//! Input validation helpers.
//!
//! Standardizes validation across the crate using `!is_finite()` to reject
//! NaN, +Inf, and -Inf uniformly.

use crate::error::SmileRegionError;

/// Validate that a value is strictly positive and finite (rejects NaN, Inf, zero, negatives).
pub(crate) fn validate_positive(value: f64, name: &str) -> crate::error::Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SmileRegionError::InvalidInput {
            message: format!("{name} must be positive and finite, got {value}"),
        });
    }
    Ok(value)
}

/// Validate that a value is non-negative and finite (rejects NaN, Inf, negatives).
pub(crate) fn validate_non_negative(value: f64, name: &str) -> crate::error::Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(SmileRegionError::InvalidInput {
            message: format!("{name} must be non-negative and finite, got {value}"),
        });
    }
    Ok(value)
}

/// Validate a moneyness grid: finite, first value non-negative, strictly increasing.
///
/// An empty grid is valid (it selects the default grid). Reports the first
/// violation only.
pub(crate) fn validate_moneyness_grid(grid: &[f64]) -> crate::error::Result<()> {
    for (i, m) in grid.iter().enumerate() {
        if !m.is_finite() {
            return Err(SmileRegionError::InvalidInput {
                message: format!("moneyness grid must be finite, but moneyness[{i}]={m}"),
            });
        }
    }
    if let Some(&first) = grid.first()
        && first < 0.0
    {
        return Err(SmileRegionError::InvalidInput {
            message: format!("moneyness grid must only contain non-negative values, got {first}"),
        });
    }
    for (i, w) in grid.windows(2).enumerate() {
        if w[1] <= w[0] {
            return Err(SmileRegionError::InvalidInput {
                message: format!(
                    "moneyness grid must be strictly increasing, but moneyness[{}]={} >= moneyness[{}]={}",
                    i,
                    w[0],
                    i + 1,
                    w[1]
                ),
            });
        }
    }
    Ok(())
}

/// Validate that every value is finite.
pub(crate) fn validate_finite(values: &[f64], name: &str) -> crate::error::Result<()> {
    if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(SmileRegionError::InvalidInput {
            message: format!("{name} must be finite, but {name}[{i}]={v}"),
        });
    }
    Ok(())
}

/// Validate a strike column: finite, non-negative, strictly increasing.
pub(crate) fn validate_strikes(strikes: &[f64]) -> crate::error::Result<()> {
    validate_finite(strikes, "strikes")?;
    if let Some(&first) = strikes.first() {
        validate_non_negative(first, "strikes[0]")?;
    }
    if let Some(i) = strikes.windows(2).position(|w| w[1] <= w[0]) {
        return Err(SmileRegionError::InvalidInput {
            message: format!(
                "strikes must be strictly increasing, but strikes[{}]={} >= strikes[{}]={}",
                i,
                strikes[i],
                i + 1,
                strikes[i + 1]
            ),
        });
    }
    Ok(())
}
