//! Shared types and configuration for Hitung.
//!
//! This crate provides common pieces used by the engine and its hosts:
//! - Rupiah amount helpers (whole-Rupiah rounding, non-negative guard)
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
pub use types::{Currency, round_rupiah};
