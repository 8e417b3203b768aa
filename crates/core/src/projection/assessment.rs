//! Project-level profitability and budget assessment.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::engine::ProfitProjectionEngine;
use super::types::{CostBreakdown, ProjectionResult};
use crate::budget::{BudgetVariance, BudgetVarianceEvaluator, VarianceSeverity};
use crate::error::CalculationResult;

/// Profitability projection and budget variance for one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAssessment {
    /// Margins and rating.
    pub projection: ProjectionResult,
    /// Total costs against the estimated budget.
    pub variance: BudgetVariance,
    /// Alerting bucket of the variance.
    pub severity: VarianceSeverity,
}

impl ProjectAssessment {
    /// Runs the projection engine and the variance evaluator for a project,
    /// treating total costs as the actual spend.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError::InvalidInput` if any figure is negative, or
    /// `CalculationError::AmountOutOfRange` if a derived figure overflows.
    pub fn assess(
        revenue: Decimal,
        costs: &CostBreakdown,
        estimated_budget: Decimal,
    ) -> CalculationResult<Self> {
        let projection =
            ProfitProjectionEngine::project_profitability(revenue, costs.direct, costs.indirect)?;
        let variance = BudgetVarianceEvaluator::evaluate_budget_variance(
            projection.estimated_total_costs,
            estimated_budget,
        )?;

        Ok(Self {
            projection,
            severity: variance.severity(),
            variance,
        })
    }
}
