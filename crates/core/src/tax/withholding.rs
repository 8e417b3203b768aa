//! PPh (withholding tax) calculator.

use hitung_shared::types::{ensure_non_negative, round_rupiah};
use rust_decimal::Decimal;

use super::types::{WithholdingBreakdown, WithholdingCategory};
use crate::error::{CalculationError, CalculationResult};

/// Computes withheld tax and net amounts from a gross amount.
pub struct WithholdingTaxCalculator;

impl WithholdingTaxCalculator {
    /// Resolves the rate to apply: the custom rate when supplied, otherwise
    /// the category default.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError::InvalidRate` if the custom rate is negative
    /// or at least 1 (which would leave a zero or negative net amount).
    pub fn resolve_rate(
        category: WithholdingCategory,
        custom_rate: Option<Decimal>,
    ) -> CalculationResult<Decimal> {
        match custom_rate {
            Some(rate) if rate.is_sign_negative() && !rate.is_zero() => {
                Err(CalculationError::InvalidRate { rate })
            }
            Some(rate) if rate >= Decimal::ONE => Err(CalculationError::InvalidRate { rate }),
            Some(rate) => Ok(rate),
            None => Ok(category.default_rate()),
        }
    }

    /// Calculates withholding on `gross_amount`.
    ///
    /// Withholding is always computed against the gross amount, never the
    /// PPN-inclusive total. Only the withheld amount is rounded; a fractional
    /// gross amount keeps its fraction in `net_amount`.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError::InvalidInput` if `gross_amount` is negative,
    /// `CalculationError::InvalidRate` if `custom_rate` is out of range, or
    /// `CalculationError::AmountOutOfRange` if the withheld amount overflows.
    pub fn calculate_withholding(
        gross_amount: Decimal,
        category: WithholdingCategory,
        custom_rate: Option<Decimal>,
    ) -> CalculationResult<WithholdingBreakdown> {
        let gross_amount = ensure_non_negative("grossAmount", gross_amount)?;
        let rate = Self::resolve_rate(category, custom_rate)?;
        let amount = round_rupiah(
            gross_amount
                .checked_mul(rate)
                .ok_or(CalculationError::AmountOutOfRange { field: "grossAmount" })?,
        );

        Ok(WithholdingBreakdown {
            category,
            rate,
            amount,
            net_amount: gross_amount - amount,
            bukti_potong_required: category.requires_bukti_potong(),
        })
    }
}
