//! Profit projection engine.

use hitung_shared::types::{ensure_non_negative, percent_of};
use rust_decimal::Decimal;
use tracing::debug;

use super::types::{CostBreakdown, ProfitabilityRating, ProjectionResult};
use crate::error::{CalculationError, CalculationResult};

/// Derives margins and a profitability rating from revenue and costs.
pub struct ProfitProjectionEngine;

impl ProfitProjectionEngine {
    /// Projects profitability for one project or period.
    ///
    /// Margins fall back to 0% when revenue is zero.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError::InvalidInput` if any input is negative, or
    /// `CalculationError::AmountOutOfRange` if total costs or a margin overflow.
    pub fn project_profitability(
        revenue: Decimal,
        direct_costs: Decimal,
        indirect_costs: Decimal,
    ) -> CalculationResult<ProjectionResult> {
        let revenue = ensure_non_negative("revenue", revenue)?;
        let direct_costs = ensure_non_negative("directCosts", direct_costs)?;
        let indirect_costs = ensure_non_negative("indirectCosts", indirect_costs)?;

        let total_costs = CostBreakdown::new(direct_costs, indirect_costs).total()?;
        let gross_profit = revenue - direct_costs;
        let net_profit = revenue - total_costs;

        let margin_out_of_range = || CalculationError::AmountOutOfRange { field: "revenue" };
        let gross_margin = percent_of(gross_profit, revenue).ok_or_else(margin_out_of_range)?;
        let net_margin = percent_of(net_profit, revenue).ok_or_else(margin_out_of_range)?;

        let result = ProjectionResult {
            estimated_revenue: revenue,
            estimated_direct_costs: direct_costs,
            estimated_indirect_costs: indirect_costs,
            estimated_total_costs: total_costs,
            projected_gross_profit: gross_profit,
            projected_net_profit: net_profit,
            projected_gross_margin: gross_margin,
            projected_net_margin: net_margin,
            is_profitable: net_profit >= Decimal::ZERO,
            profitability_rating: ProfitabilityRating::from_net_margin(net_margin),
        };

        debug!(
            %revenue,
            %total_costs,
            net_margin = %result.projected_net_margin,
            rating = %result.profitability_rating,
            "Projected profitability"
        );

        Ok(result)
    }
}
