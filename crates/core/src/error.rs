//! Calculation error types.
//!
//! Every failure is a deterministic input problem that the caller must fix.
//! Nothing here is transient and nothing is retried.

use hitung_shared::types::NegativeAmount;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `CalculationError`.
pub type CalculationResult<T> = Result<T, CalculationError>;

/// Errors raised before any calculation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// A monetary input was negative.
    #[error("Invalid input: {field} cannot be negative (got {value})")]
    InvalidInput {
        /// Persisted field name of the offending input.
        field: &'static str,
        /// The rejected value.
        value: Decimal,
    },

    /// Withholding category token is not one of the supported categories.
    #[error("Unsupported withholding category: {0:?}")]
    UnsupportedCategory(String),

    /// A result derived from this input does not fit in a `Decimal`.
    #[error("Amount out of range: {field} is too large to calculate with")]
    AmountOutOfRange {
        /// Persisted field name of the input to reduce.
        field: &'static str,
    },

    /// Custom withholding rate outside `0 <= rate < 1`.
    #[error("Invalid withholding rate {rate}: must be at least 0 and below 1")]
    InvalidRate {
        /// The rejected rate.
        rate: Decimal,
    },
}

impl CalculationError {
    /// Returns the stable machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::AmountOutOfRange { .. } => "AMOUNT_OUT_OF_RANGE",
            Self::UnsupportedCategory(_) => "UNSUPPORTED_CATEGORY",
            Self::InvalidRate { .. } => "INVALID_RATE",
        }
    }

    /// Returns the persisted field name a form should highlight, if any.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInput { field, .. } | Self::AmountOutOfRange { field } => Some(*field),
            Self::UnsupportedCategory(_) => Some("withholdingTaxType"),
            Self::InvalidRate { .. } => Some("withholdingTaxRate"),
        }
    }
}

impl From<NegativeAmount> for CalculationError {
    fn from(err: NegativeAmount) -> Self {
        Self::InvalidInput {
            field: err.field,
            value: err.value,
        }
    }
}
