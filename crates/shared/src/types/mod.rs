//! Common types used across the workspace.

pub mod money;

pub use money::{Currency, NegativeAmount, ensure_non_negative, percent_of, round_rupiah};
