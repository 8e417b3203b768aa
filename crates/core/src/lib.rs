//! Indonesian tax and profitability calculation engine.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Every function is synchronous and stateless; callers re-run the full chain
//! whenever an input changes and replace the previous result wholesale.
//!
//! # Modules
//!
//! - `rates` - The authoritative rate and threshold table
//! - `tax` - PPN (VAT), PPh (withholding) and the per-expense aggregator
//! - `stamp_duty` - Materai threshold evaluation
//! - `projection` - Profit margins, profitability rating and project assessment
//! - `budget` - Budget variance and severity

pub mod budget;
pub mod error;
pub mod projection;
pub mod rates;
pub mod stamp_duty;
pub mod tax;

pub use error::{CalculationError, CalculationResult};
