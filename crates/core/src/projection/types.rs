//! Projection data types.

use hitung_shared::types::ensure_non_negative;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CalculationError, CalculationResult};
use crate::rates::{BREAKEVEN_MARGIN_FLOOR, EXCELLENT_MARGIN_FLOOR, GOOD_MARGIN_FLOOR};

/// Profitability classification of a net margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitabilityRating {
    /// Net margin of 20% or more.
    Excellent,
    /// Net margin from 10% up to 20%.
    Good,
    /// Net margin from 0% up to 10%.
    Breakeven,
    /// Negative net margin.
    Loss,
}

impl ProfitabilityRating {
    /// Buckets a net margin percentage. Each bucket includes its lower bound.
    #[must_use]
    pub fn from_net_margin(net_margin: Decimal) -> Self {
        if net_margin >= EXCELLENT_MARGIN_FLOOR {
            Self::Excellent
        } else if net_margin >= GOOD_MARGIN_FLOOR {
            Self::Good
        } else if net_margin >= BREAKEVEN_MARGIN_FLOOR {
            Self::Breakeven
        } else {
            Self::Loss
        }
    }

    /// Lowercase name, as serialized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Breakeven => "breakeven",
            Self::Loss => "loss",
        }
    }
}

impl std::fmt::Display for ProfitabilityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a cost line is direct or indirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostKind {
    /// Attributable to delivering the project.
    Direct,
    /// Overhead allocated to the project.
    Indirect,
}

/// Direct and indirect cost totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Direct costs.
    pub direct: Decimal,
    /// Indirect costs.
    pub indirect: Decimal,
}

impl CostBreakdown {
    /// Creates a breakdown from already-aggregated totals.
    #[must_use]
    pub const fn new(direct: Decimal, indirect: Decimal) -> Self {
        Self { direct, indirect }
    }

    /// Sums cost line items into direct and indirect totals.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError::InvalidInput` on the first negative line
    /// amount, or `CalculationError::AmountOutOfRange` if a sum overflows.
    pub fn from_line_items<I>(items: I) -> CalculationResult<Self>
    where
        I: IntoIterator<Item = (CostKind, Decimal)>,
    {
        items
            .into_iter()
            .try_fold(Self::default(), |mut acc, (kind, amount)| -> CalculationResult<Self> {
                let amount = ensure_non_negative("amount", amount)?;
                let sum = match kind {
                    CostKind::Direct => &mut acc.direct,
                    CostKind::Indirect => &mut acc.indirect,
                };
                *sum = sum
                    .checked_add(amount)
                    .ok_or(CalculationError::AmountOutOfRange { field: "amount" })?;
                Ok(acc)
            })
    }

    /// Direct plus indirect costs.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError::AmountOutOfRange` if the sum overflows.
    pub fn total(&self) -> CalculationResult<Decimal> {
        self.direct
            .checked_add(self.indirect)
            .ok_or(CalculationError::AmountOutOfRange { field: "indirectCosts" })
    }
}

/// Result of a profitability projection.
///
/// Margins are percentages, unrounded, so classification sees the exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Revenue.
    pub estimated_revenue: Decimal,
    /// Direct costs.
    pub estimated_direct_costs: Decimal,
    /// Indirect costs.
    pub estimated_indirect_costs: Decimal,
    /// Direct plus indirect costs.
    pub estimated_total_costs: Decimal,
    /// Revenue minus direct costs.
    pub projected_gross_profit: Decimal,
    /// Revenue minus total costs.
    pub projected_net_profit: Decimal,
    /// Gross profit as a percentage of revenue.
    pub projected_gross_margin: Decimal,
    /// Net profit as a percentage of revenue.
    pub projected_net_margin: Decimal,
    /// Net profit is zero or positive.
    pub is_profitable: bool,
    /// Bucket of the net margin.
    pub profitability_rating: ProfitabilityRating,
}
