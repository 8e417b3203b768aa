//! Stamp-duty evaluator.

use hitung_shared::types::ensure_non_negative;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::CalculationResult;
use crate::rates::{STAMP_DUTY_AMOUNT, STAMP_DUTY_THRESHOLD};

/// Stamp-duty obligation for one document total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StampDutyResult {
    /// Whether materai must be affixed.
    pub required: bool,
    /// Duty owed; zero when not required.
    pub amount: Decimal,
    /// `min(total / threshold, 1)`, for progress indicators only.
    pub progress_toward_threshold: Decimal,
}

/// Decides whether a document total crosses the stamp-duty threshold.
pub struct StampDutyEvaluator;

impl StampDutyEvaluator {
    /// Evaluates materai for `document_total`.
    ///
    /// Required only when the total is strictly above the threshold; the
    /// duty is a flat amount however far above the threshold the total is.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError::InvalidInput` if `document_total` is negative.
    pub fn evaluate_stamp_duty(document_total: Decimal) -> CalculationResult<StampDutyResult> {
        let document_total = ensure_non_negative("totalAmount", document_total)?;
        let required = document_total > STAMP_DUTY_THRESHOLD;

        let result = StampDutyResult {
            required,
            amount: if required {
                STAMP_DUTY_AMOUNT
            } else {
                Decimal::ZERO
            },
            progress_toward_threshold: (document_total / STAMP_DUTY_THRESHOLD).min(Decimal::ONE),
        };

        trace!(%document_total, required, "Evaluated stamp duty");

        Ok(result)
    }
}
