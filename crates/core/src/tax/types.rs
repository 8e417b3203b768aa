//! Tax data types.
//!
//! Serialized field names follow the persisted expense record
//! (`grossAmount`, `ppnAmount`, `withholdingTaxType`, ...) so hosts can write
//! results straight back into the record they came from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CalculationError;
use crate::rates::{PPH4_2_RATE, PPH15_RATE, PPH23_RATE};

/// Withholding income tax (PPh) category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum WithholdingCategory {
    /// No withholding.
    #[default]
    #[serde(rename = "NONE")]
    None,
    /// PPh 23, services (2%).
    #[serde(rename = "PPH23")]
    Pph23,
    /// PPh 4 ayat 2, rental and other final tax (10%).
    #[serde(rename = "PPH4_2")]
    Pph4Ayat2,
    /// PPh 15, shipping and aviation (2.65% blended).
    #[serde(rename = "PPH15")]
    Pph15,
}

impl WithholdingCategory {
    /// All supported categories.
    pub const ALL: [Self; 4] = [Self::None, Self::Pph23, Self::Pph4Ayat2, Self::Pph15];

    /// Default rate for the category, as a fraction.
    #[must_use]
    pub const fn default_rate(self) -> Decimal {
        match self {
            Self::None => Decimal::ZERO,
            Self::Pph23 => PPH23_RATE,
            Self::Pph4Ayat2 => PPH4_2_RATE,
            Self::Pph15 => PPH15_RATE,
        }
    }

    /// Whether a Bukti Potong (withholding certificate) must accompany the record.
    #[must_use]
    pub const fn requires_bukti_potong(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Canonical persisted token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Pph23 => "PPH23",
            Self::Pph4Ayat2 => "PPH4_2",
            Self::Pph15 => "PPH15",
        }
    }

    /// Human-readable description.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "No withholding",
            Self::Pph23 => "PPh 23 (services)",
            Self::Pph4Ayat2 => "PPh 4(2) (rental, final)",
            Self::Pph15 => "PPh 15 (shipping)",
        }
    }
}

impl std::fmt::Display for WithholdingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WithholdingCategory {
    type Err = CalculationError;

    /// Parses persisted tokens, ignoring case. Besides the canonical tokens
    /// this accepts `PPH_23`, `PPH4(2)` and `PPH_15`. Only the empty string
    /// means no withholding; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "" | "NONE" => Ok(Self::None),
            "PPH23" | "PPH_23" => Ok(Self::Pph23),
            "PPH4_2" | "PPH4(2)" => Ok(Self::Pph4Ayat2),
            "PPH15" | "PPH_15" => Ok(Self::Pph15),
            _ => Err(CalculationError::UnsupportedCategory(s.to_string())),
        }
    }
}

impl TryFrom<String> for WithholdingCategory {
    type Error = CalculationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Input to the expense aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseTaxProfile {
    /// Pre-tax base amount.
    pub gross_amount: Decimal,
    /// Luxury goods attract the higher PPN rate.
    #[serde(default)]
    pub is_luxury_goods: bool,
    /// Withholding category.
    #[serde(rename = "withholdingTaxType", default)]
    pub withholding: WithholdingCategory,
    /// Per-record rate overriding the category default.
    #[serde(
        rename = "withholdingTaxRate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_withholding_rate: Option<Decimal>,
    /// When false, no PPN is charged on the record.
    #[serde(rename = "includeVat", default = "default_include_vat")]
    pub include_vat: bool,
}

const fn default_include_vat() -> bool {
    true
}

impl ExpenseTaxProfile {
    /// Creates a profile with PPN included and no custom withholding rate.
    #[must_use]
    pub const fn new(
        gross_amount: Decimal,
        is_luxury_goods: bool,
        withholding: WithholdingCategory,
    ) -> Self {
        Self {
            gross_amount,
            is_luxury_goods,
            withholding,
            custom_withholding_rate: None,
            include_vat: true,
        }
    }

    /// Overrides the category's default withholding rate.
    #[must_use]
    pub fn with_custom_withholding_rate(mut self, rate: Decimal) -> Self {
        self.custom_withholding_rate = Some(rate);
        self
    }

    /// Enables or disables PPN for the record.
    #[must_use]
    pub fn with_vat(mut self, include_vat: bool) -> Self {
        self.include_vat = include_vat;
        self
    }
}

/// PPN calculation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VatBreakdown {
    /// Effective rate multiplied into the amount.
    pub rate: Decimal,
    /// Nominal statutory rate. Annotation only.
    pub statutory_rate: Decimal,
    /// PPN amount in whole Rupiah.
    pub amount: Decimal,
    /// Gross amount plus PPN.
    pub total_amount: Decimal,
}

/// PPh calculation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithholdingBreakdown {
    /// Category the rate was resolved for.
    pub category: WithholdingCategory,
    /// Applied rate (category default or custom override).
    pub rate: Decimal,
    /// Withheld amount in whole Rupiah.
    pub amount: Decimal,
    /// Gross amount minus withholding.
    pub net_amount: Decimal,
    /// Whether a Bukti Potong is required.
    pub bukti_potong_required: bool,
}

/// Full derived-amount set for one expense record.
///
/// Invariants:
/// - `total_amount == gross_amount + vat_amount`
/// - `net_amount == gross_amount - withholding_amount`
/// - `total_payable == total_amount - withholding_amount`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDerivedAmounts {
    /// Pre-tax base amount.
    pub gross_amount: Decimal,
    /// Whether the luxury PPN rate applied.
    pub is_luxury_goods: bool,
    /// Effective PPN rate (zero when PPN is excluded).
    #[serde(rename = "ppnRate")]
    pub vat_rate: Decimal,
    /// PPN amount.
    #[serde(rename = "ppnAmount")]
    pub vat_amount: Decimal,
    /// Gross amount plus PPN.
    pub total_amount: Decimal,
    /// Withholding category.
    #[serde(rename = "withholdingTaxType")]
    pub withholding_category: WithholdingCategory,
    /// Applied withholding rate.
    #[serde(rename = "withholdingTaxRate")]
    pub withholding_rate: Decimal,
    /// Withheld amount.
    pub withholding_amount: Decimal,
    /// Gross amount minus withholding.
    pub net_amount: Decimal,
    /// Gross amount plus PPN minus withholding.
    pub total_payable: Decimal,
    /// Whether a Bukti Potong is required.
    pub bukti_potong_required: bool,
}
