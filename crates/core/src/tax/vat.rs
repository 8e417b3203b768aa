//! PPN (value-added tax) calculator.

use hitung_shared::types::{ensure_non_negative, round_rupiah};
use rust_decimal::Decimal;

use super::types::VatBreakdown;
use crate::error::{CalculationError, CalculationResult};
use crate::rates::{PPN_EFFECTIVE_RATE, PPN_LUXURY_RATE, PPN_STATUTORY_RATE};

/// Computes PPN amounts from a gross amount.
pub struct ValueAddedTaxCalculator;

impl ValueAddedTaxCalculator {
    /// Effective rate for the goods class.
    #[must_use]
    pub const fn effective_rate(is_luxury_goods: bool) -> Decimal {
        if is_luxury_goods {
            PPN_LUXURY_RATE
        } else {
            PPN_EFFECTIVE_RATE
        }
    }

    /// Calculates PPN on `gross_amount`.
    ///
    /// `amount = round(gross_amount * effective_rate)` in whole Rupiah and
    /// `total_amount = gross_amount + amount`. The statutory rate on the
    /// result is an annotation and plays no part in the arithmetic.
    ///
    /// Only `amount` is rounded. `gross_amount` is taken as given, so a
    /// fractional gross amount carries its fraction into `total_amount`.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError::InvalidInput` if `gross_amount` is negative,
    /// or `CalculationError::AmountOutOfRange` if the total overflows.
    pub fn calculate_vat(gross_amount: Decimal, is_luxury_goods: bool) -> CalculationResult<VatBreakdown> {
        let gross_amount = ensure_non_negative("grossAmount", gross_amount)?;
        let rate = Self::effective_rate(is_luxury_goods);
        let out_of_range = CalculationError::AmountOutOfRange { field: "grossAmount" };

        let amount = round_rupiah(gross_amount.checked_mul(rate).ok_or(out_of_range.clone())?);
        let total_amount = gross_amount.checked_add(amount).ok_or(out_of_range)?;

        Ok(VatBreakdown {
            rate,
            statutory_rate: PPN_STATUTORY_RATE,
            amount,
            total_amount,
        })
    }

    /// Breakdown for a record with PPN switched off: zero rate, zero amount,
    /// total equal to the gross amount.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError::InvalidInput` if `gross_amount` is negative.
    pub fn exempt(gross_amount: Decimal) -> CalculationResult<VatBreakdown> {
        let gross_amount = ensure_non_negative("grossAmount", gross_amount)?;

        Ok(VatBreakdown {
            rate: Decimal::ZERO,
            statutory_rate: PPN_STATUTORY_RATE,
            amount: Decimal::ZERO,
            total_amount: gross_amount,
        })
    }
}
