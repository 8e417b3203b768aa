//! PPN (value-added tax) and PPh (withholding tax) calculations.

pub mod expense;
pub mod types;
pub mod vat;
pub mod withholding;

#[cfg(test)]
mod tests;

pub use expense::ExpenseAmountAggregator;
pub use types::{
    ExpenseDerivedAmounts, ExpenseTaxProfile, VatBreakdown, WithholdingBreakdown,
    WithholdingCategory,
};
pub use vat::ValueAddedTaxCalculator;
pub use withholding::WithholdingTaxCalculator;
