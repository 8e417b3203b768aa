//! Budget variance calculations.

use hitung_shared::types::{ensure_non_negative, percent_of};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CalculationError, CalculationResult};
use crate::rates::BUDGET_ATTENTION_THRESHOLD;

/// Alerting bucket for a variance percentage.
///
/// A two-bucket rule, separate from the four-bucket profitability rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceSeverity {
    /// Absolute variance above the attention threshold.
    NeedsAttention,
    /// Absolute variance at or below the attention threshold.
    WithinTolerance,
}

impl VarianceSeverity {
    /// Classifies a signed variance percentage by its magnitude.
    #[must_use]
    pub fn classify(variance_percent: Decimal) -> Self {
        if variance_percent.abs() > BUDGET_ATTENTION_THRESHOLD {
            Self::NeedsAttention
        } else {
            Self::WithinTolerance
        }
    }
}

/// Actual spend vs. estimated budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetVariance {
    /// `actual - budget`; positive means over budget.
    pub variance: Decimal,
    /// Variance as a percentage of the budget (0 when the budget is 0).
    pub variance_percent: Decimal,
    /// Whether actual spend exceeds the budget.
    pub is_over_budget: bool,
}

impl BudgetVariance {
    /// Alerting bucket for this variance.
    #[must_use]
    pub fn severity(&self) -> VarianceSeverity {
        VarianceSeverity::classify(self.variance_percent)
    }
}

/// Compares actual against estimated spend.
pub struct BudgetVarianceEvaluator;

impl BudgetVarianceEvaluator {
    /// Calculates the variance between `actual_cost` and `estimated_budget`.
    ///
    /// Unlike an accounting favorable/unfavorable view, the sign here is
    /// always `actual - budget`: positive is over budget.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError::InvalidInput` if either amount is negative,
    /// or `CalculationError::AmountOutOfRange` if the percentage overflows.
    pub fn evaluate_budget_variance(
        actual_cost: Decimal,
        estimated_budget: Decimal,
    ) -> CalculationResult<BudgetVariance> {
        let actual_cost = ensure_non_negative("actualCost", actual_cost)?;
        let estimated_budget = ensure_non_negative("estimatedBudget", estimated_budget)?;

        let variance = actual_cost - estimated_budget;
        let result = BudgetVariance {
            variance,
            variance_percent: percent_of(variance, estimated_budget)
                .ok_or(CalculationError::AmountOutOfRange { field: "estimatedBudget" })?,
            is_over_budget: variance > Decimal::ZERO,
        };

        debug!(
            %actual_cost,
            %estimated_budget,
            variance_percent = %result.variance_percent,
            "Evaluated budget variance"
        );

        Ok(result)
    }
}
