//! Budget variance analysis.

pub mod variance;


pub use variance::{BudgetVariance, BudgetVarianceEvaluator, VarianceSeverity};
