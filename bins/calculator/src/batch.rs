//! Batch document types and recalculation.
//!
//! Every record is recomputed from scratch and independently of the others,
//! so a record that fails validation is reported and the rest still run.

use chrono::{DateTime, Utc};
use hitung_core::projection::{CostBreakdown, ProjectAssessment};
use hitung_core::stamp_duty::{StampDutyEvaluator, StampDutyResult};
use hitung_core::tax::{
    ExpenseAmountAggregator, ExpenseDerivedAmounts, ExpenseTaxProfile, WithholdingCategory,
};
use hitung_core::{CalculationError, CalculationResult};
use hitung_shared::Currency;
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Input document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchInput {
    /// Expense records.
    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,
    /// Project records.
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

/// Expense record as persisted.
///
/// The withholding category is kept as its raw token so an unknown category
/// fails only its own record. A missing or `null` category means no
/// withholding.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    /// Caller's record identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Pre-tax base amount.
    pub gross_amount: Decimal,
    /// Luxury goods flag.
    #[serde(default)]
    pub is_luxury_goods: bool,
    /// Withholding category token.
    #[serde(default)]
    pub withholding_tax_type: Option<String>,
    /// Custom withholding rate.
    #[serde(default)]
    pub withholding_tax_rate: Option<Decimal>,
    /// PPN toggle.
    #[serde(default = "default_include_vat")]
    pub include_vat: bool,
}

const fn default_include_vat() -> bool {
    true
}

impl ExpenseRecord {
    /// Builds the engine profile, parsing the category token.
    pub fn profile(&self) -> CalculationResult<ExpenseTaxProfile> {
        Ok(ExpenseTaxProfile {
            gross_amount: self.gross_amount,
            is_luxury_goods: self.is_luxury_goods,
            withholding: match self.withholding_tax_type.as_deref() {
                Some(token) => token.parse()?,
                None => WithholdingCategory::None,
            },
            custom_withholding_rate: self.withholding_tax_rate,
            include_vat: self.include_vat,
        })
    }
}

/// Project figures, already aggregated upstream.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Caller's record identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Revenue.
    pub revenue: Decimal,
    /// Direct costs.
    #[serde(default)]
    pub direct_costs: Decimal,
    /// Indirect costs.
    #[serde(default)]
    pub indirect_costs: Decimal,
    /// Estimated budget.
    #[serde(default)]
    pub estimated_budget: Decimal,
}

/// Derived amounts for one expense plus the materai on its total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseOutcome {
    /// Derived tax amounts.
    #[serde(flatten)]
    pub amounts: ExpenseDerivedAmounts,
    /// Materai on `totalAmount`.
    pub stamp_duty: StampDutyResult,
}

/// Error details for a rejected record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordError {
    /// Machine-readable error code.
    pub code: &'static str,
    /// Field to highlight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
    /// Human-readable message.
    pub message: String,
}

impl From<&CalculationError> for RecordError {
    fn from(err: &CalculationError) -> Self {
        Self {
            code: err.error_code(),
            field: err.field(),
            message: err.to_string(),
        }
    }
}

/// Per-record result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RecordOutcome<T> {
    /// Calculated successfully.
    Ok {
        /// Caller's record identifier.
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        /// Calculation result.
        result: T,
    },
    /// Rejected by validation.
    Failed {
        /// Caller's record identifier.
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        /// Why the record was rejected.
        error: RecordError,
    },
}

impl<T> RecordOutcome<T> {
    fn from_result(id: Option<String>, result: CalculationResult<T>) -> Self {
        match result {
            Ok(result) => Self::Ok { id, result },
            Err(err) => {
                debug!(id = ?id, code = err.error_code(), %err, "Record rejected");
                Self::Failed {
                    id,
                    error: RecordError::from(&err),
                }
            }
        }
    }

    /// Whether the record was rejected.
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Output document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// Denomination of every amount.
    pub currency: Currency,
    /// Expense outcomes, in input order.
    pub expenses: Vec<RecordOutcome<ExpenseOutcome>>,
    /// Project outcomes, in input order.
    pub projects: Vec<RecordOutcome<ProjectAssessment>>,
    /// Number of rejected records.
    pub failed: usize,
}

/// Runs the full chain for one expense record.
pub fn calculate_expense(record: &ExpenseRecord) -> CalculationResult<ExpenseOutcome> {
    let amounts = ExpenseAmountAggregator::derive_expense_amounts(&record.profile()?)?;
    let stamp_duty = StampDutyEvaluator::evaluate_stamp_duty(amounts.total_amount)?;

    Ok(ExpenseOutcome {
        amounts,
        stamp_duty,
    })
}

/// Runs projection and variance for one project record.
pub fn assess_project(record: &ProjectRecord) -> CalculationResult<ProjectAssessment> {
    let costs = CostBreakdown::new(record.direct_costs, record.indirect_costs);
    ProjectAssessment::assess(record.revenue, &costs, record.estimated_budget)
}

fn recalculate<R, T, F>(records: &[R], parallel: bool, f: F) -> Vec<T>
where
    R: Sync,
    T: Send,
    F: Fn(&R) -> T + Sync + Send,
{
    if parallel {
        records.par_iter().map(f).collect()
    } else {
        records.iter().map(f).collect()
    }
}

/// Recalculates every record in `input`.
pub fn run(input: &BatchInput, parallel: bool) -> BatchReport {
    let expenses = recalculate(&input.expenses, parallel, |record| {
        RecordOutcome::from_result(record.id.clone(), calculate_expense(record))
    });
    let projects = recalculate(&input.projects, parallel, |record| {
        RecordOutcome::from_result(record.id.clone(), assess_project(record))
    });

    let failed = expenses.iter().filter(|o| o.is_failed()).count()
        + projects.iter().filter(|o| o.is_failed()).count();

    BatchReport {
        generated_at: Utc::now(),
        currency: Currency::Idr,
        expenses,
        projects,
        failed,
    }
}
