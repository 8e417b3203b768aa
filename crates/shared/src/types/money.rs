//! Rupiah amount helpers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are plain `rust_decimal::Decimal` values denominated in IDR,
//! which has no sub-unit granularity: every derived tax amount is rounded
//! to a whole Rupiah before it leaves the engine.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Currency denomination of every amount handled by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indonesian Rupiah
    #[default]
    Idr,
}

/// A monetary figure that was negative where only non-negative amounts are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} cannot be negative (got {value})")]
pub struct NegativeAmount {
    /// Persisted field name of the offending input.
    pub field: &'static str,
    /// The rejected value.
    pub value: Decimal,
}

/// Rounds an amount to whole Rupiah, half away from zero.
///
/// For the non-negative amounts the engine produces this is plain
/// round-half-up: `0.5 -> 1`, `1_234.49 -> 1_234`.
#[must_use]
pub fn round_rupiah(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rejects negative monetary input, naming the field it came from.
///
/// Zero is a valid amount (e.g. a brand-new draft record).
pub fn ensure_non_negative(field: &'static str, value: Decimal) -> Result<Decimal, NegativeAmount> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(NegativeAmount { field, value });
    }
    Ok(value)
}

/// `part / whole * 100`, or zero when `whole` is zero.
///
/// A zero denominator is a normal state (a draft with no revenue or budget
/// yet), so it yields 0% rather than an error. Returns `None` when the
/// percentage does not fit in a `Decimal`.
#[must_use]
pub fn percent_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole.is_zero() {
        return Some(Decimal::ZERO);
    }
    part.checked_div(whole)?.checked_mul(Decimal::ONE_HUNDRED)
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idr => write!(f, "IDR"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IDR" => Ok(Self::Idr),
            _ => Err(format!("Unsupported currency: {s}")),
        }
    }
}
