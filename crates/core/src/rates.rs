//! Authoritative rate and threshold table.
//!
//! Every calculator reads its constants from here. No other module repeats
//! a rate, threshold or bucket boundary as a literal.

use rust_decimal::Decimal;

// ========== PPN (value-added tax) ==========

/// Effective PPN rate multiplied into ordinary goods and services (11%).
pub const PPN_EFFECTIVE_RATE: Decimal = Decimal::from_parts(11, 0, 0, false, 2);

/// Effective PPN rate multiplied into luxury goods (12%).
pub const PPN_LUXURY_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

/// Nominal statutory PPN rate (12%).
///
/// Informational annotation only; never multiplied into an amount.
pub const PPN_STATUTORY_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

// ========== PPh (withholding tax) ==========

/// PPh 23 default rate for services (2%).
pub const PPH23_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// PPh 4(2) default rate for rental, final tax (10%).
pub const PPH4_2_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// PPh 15 blended default rate for shipping and aviation (2.65%).
pub const PPH15_RATE: Decimal = Decimal::from_parts(265, 0, 0, false, 4);

// ========== Materai (stamp duty) ==========

/// Document totals strictly above this amount require materai.
pub const STAMP_DUTY_THRESHOLD: Decimal = Decimal::from_parts(5_000_000, 0, 0, false, 0);

/// Fixed materai amount once the threshold is crossed.
pub const STAMP_DUTY_AMOUNT: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

// ========== Profitability (net margin, percent) ==========

/// Lowest net margin rated `excellent` (inclusive).
pub const EXCELLENT_MARGIN_FLOOR: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Lowest net margin rated `good` (inclusive).
pub const GOOD_MARGIN_FLOOR: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Lowest net margin rated `breakeven` (inclusive).
pub const BREAKEVEN_MARGIN_FLOOR: Decimal = Decimal::ZERO;

// ========== Budget variance (percent) ==========

/// Absolute variance percentage above which a budget needs attention.
pub const BUDGET_ATTENTION_THRESHOLD: Decimal = Decimal::from_parts(10, 0, 0, false, 0);
