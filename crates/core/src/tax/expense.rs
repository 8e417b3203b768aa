//! Per-expense aggregation of PPN and PPh.

use tracing::debug;

use super::types::{ExpenseDerivedAmounts, ExpenseTaxProfile};
use super::vat::ValueAddedTaxCalculator;
use super::withholding::WithholdingTaxCalculator;
use crate::error::CalculationResult;

/// Combines the PPN and PPh calculators into the full derived-amount set
/// for one expense record.
pub struct ExpenseAmountAggregator;

impl ExpenseAmountAggregator {
    /// Derives every amount for `profile` in one pass.
    ///
    /// There is no incremental path: hosts call this again whenever the gross
    /// amount, luxury flag, withholding category or PPN toggle changes and
    /// replace the previous result.
    ///
    /// # Errors
    ///
    /// Propagates validation errors from either calculator.
    pub fn derive_expense_amounts(
        profile: &ExpenseTaxProfile,
    ) -> CalculationResult<ExpenseDerivedAmounts> {
        let vat = if profile.include_vat {
            ValueAddedTaxCalculator::calculate_vat(profile.gross_amount, profile.is_luxury_goods)?
        } else {
            ValueAddedTaxCalculator::exempt(profile.gross_amount)?
        };

        let withholding = WithholdingTaxCalculator::calculate_withholding(
            profile.gross_amount,
            profile.withholding,
            profile.custom_withholding_rate,
        )?;

        let derived = ExpenseDerivedAmounts {
            gross_amount: profile.gross_amount,
            is_luxury_goods: profile.is_luxury_goods,
            vat_rate: vat.rate,
            vat_amount: vat.amount,
            total_amount: vat.total_amount,
            withholding_category: withholding.category,
            withholding_rate: withholding.rate,
            withholding_amount: withholding.amount,
            net_amount: withholding.net_amount,
            total_payable: vat.total_amount - withholding.amount,
            bukti_potong_required: withholding.bukti_potong_required,
        };

        debug!(
            gross_amount = %derived.gross_amount,
            withholding = %derived.withholding_category,
            vat_amount = %derived.vat_amount,
            withholding_amount = %derived.withholding_amount,
            total_payable = %derived.total_payable,
            "Derived expense amounts"
        );

        Ok(derived)
    }
}
