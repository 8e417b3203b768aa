//! Materai (stamp duty) threshold evaluation.

pub mod evaluator;

pub use evaluator::{StampDutyEvaluator, StampDutyResult};
