//! Profit projection, profitability rating and project assessment.

pub mod assessment;
pub mod engine;
pub mod types;


pub use assessment::ProjectAssessment;
pub use engine::ProfitProjectionEngine;
pub use types::{CostBreakdown, CostKind, ProfitabilityRating, ProjectionResult};
