//! Property-based tests for the tax module.
//!
//! - VAT correctness for both goods classes
//! - Withholding correctness per category
//! - Aggregator invariants and idempotence

use hitung_shared::types::round_rupiah;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::expense::ExpenseAmountAggregator;
use super::types::{ExpenseTaxProfile, WithholdingCategory};
use super::vat::ValueAddedTaxCalculator;
use super::withholding::WithholdingTaxCalculator;

/// Strategy to generate whole-Rupiah gross amounts (0 to 100 billion).
fn gross_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000_000i64).prop_map(Decimal::from)
}

fn withholding_category() -> impl Strategy<Value = WithholdingCategory> {
    prop::sample::select(WithholdingCategory::ALL.to_vec())
}

/// Strategy to generate valid custom rates (0.0000 to 0.9999).
fn custom_rate() -> impl Strategy<Value = Option<Decimal>> {
    prop::option::of((0i64..10_000i64).prop_map(|v| Decimal::new(v, 4)))
}

fn expense_profile() -> impl Strategy<Value = ExpenseTaxProfile> {
    (gross_amount(), any::<bool>(), withholding_category(), custom_rate(), any::<bool>()).prop_map(
        |(gross, luxury, category, rate, include_vat)| ExpenseTaxProfile {
            gross_amount: gross,
            is_luxury_goods: luxury,
            withholding: category,
            custom_withholding_rate: rate,
            include_vat,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Ordinary goods: total = g + round(g * 0.11).
    #[test]
    fn prop_vat_ordinary_total(g in gross_amount()) {
        let result = ValueAddedTaxCalculator::calculate_vat(g, false).unwrap();
        prop_assert_eq!(result.total_amount, g + round_rupiah(g * dec!(0.11)));
    }

    /// Luxury goods: total = g + round(g * 0.12).
    #[test]
    fn prop_vat_luxury_total(g in gross_amount()) {
        let result = ValueAddedTaxCalculator::calculate_vat(g, true).unwrap();
        prop_assert_eq!(result.total_amount, g + round_rupiah(g * dec!(0.12)));
    }

    /// PPN amounts are always whole Rupiah.
    #[test]
    fn prop_vat_amount_is_whole(
        cents in 0i64..10_000_000_000i64,
        luxury in any::<bool>(),
    ) {
        let g = Decimal::new(cents, 2);
        let result = ValueAddedTaxCalculator::calculate_vat(g, luxury).unwrap();
        prop_assert_eq!(result.amount, result.amount.trunc());
    }

    /// PPh 23: net = g - round(g * 0.02).
    #[test]
    fn prop_pph23_net(g in gross_amount()) {
        let result =
            WithholdingTaxCalculator::calculate_withholding(g, WithholdingCategory::Pph23, None)
                .unwrap();
        prop_assert_eq!(result.net_amount, g - round_rupiah(g * dec!(0.02)));
    }

    /// NONE withholds nothing.
    #[test]
    fn prop_none_withholds_nothing(g in gross_amount()) {
        let result =
            WithholdingTaxCalculator::calculate_withholding(g, WithholdingCategory::None, None)
                .unwrap();
        prop_assert_eq!(result.amount, Decimal::ZERO);
        prop_assert_eq!(result.net_amount, g);
    }

    /// Net amount is never negative for any valid rate.
    #[test]
    fn prop_net_never_negative(
        g in gross_amount(),
        category in withholding_category(),
        rate in custom_rate(),
    ) {
        let result = WithholdingTaxCalculator::calculate_withholding(g, category, rate).unwrap();
        prop_assert!(result.net_amount >= Decimal::ZERO);
        prop_assert_eq!(result.bukti_potong_required, category != WithholdingCategory::None);
    }

    /// Aggregator invariants hold for every valid profile.
    #[test]
    fn prop_aggregator_consistency(profile in expense_profile()) {
        let result = ExpenseAmountAggregator::derive_expense_amounts(&profile).unwrap();

        prop_assert_eq!(result.total_amount, result.gross_amount + result.vat_amount);
        prop_assert_eq!(result.net_amount, result.gross_amount - result.withholding_amount);
        prop_assert_eq!(result.total_payable, result.total_amount - result.withholding_amount);
        if !profile.include_vat {
            prop_assert_eq!(result.vat_amount, Decimal::ZERO);
            prop_assert_eq!(result.total_amount, result.gross_amount);
        }
    }

    /// Toggling PPN never changes withholding.
    #[test]
    fn prop_vat_toggle_leaves_withholding(profile in expense_profile()) {
        let with_vat = ExpenseAmountAggregator::derive_expense_amounts(&profile.clone().with_vat(true)).unwrap();
        let without_vat = ExpenseAmountAggregator::derive_expense_amounts(&profile.with_vat(false)).unwrap();

        prop_assert_eq!(with_vat.withholding_amount, without_vat.withholding_amount);
        prop_assert_eq!(with_vat.net_amount, without_vat.net_amount);
    }

    /// Identical inputs yield identical outputs.
    #[test]
    fn prop_aggregator_is_idempotent(profile in expense_profile()) {
        let first = ExpenseAmountAggregator::derive_expense_amounts(&profile).unwrap();
        let second = ExpenseAmountAggregator::derive_expense_amounts(&profile).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Negative gross amounts are always rejected.
    #[test]
    fn prop_negative_gross_rejected(g in 1i64..1_000_000_000i64, category in withholding_category()) {
        let profile = ExpenseTaxProfile::new(-Decimal::from(g), false, category);
        prop_assert!(ExpenseAmountAggregator::derive_expense_amounts(&profile).is_err());
    }
}

#[cfg(test)]
mod category_tests {
    use super::*;
    use crate::error::CalculationError;
    use rstest::rstest;

    #[rstest]
    #[case("NONE", WithholdingCategory::None)]
    #[case("", WithholdingCategory::None)]
    #[case("none", WithholdingCategory::None)]
    #[case("PPH23", WithholdingCategory::Pph23)]
    #[case("pph_23", WithholdingCategory::Pph23)]
    #[case("Pph_23", WithholdingCategory::Pph23)]
    #[case("PPH4_2", WithholdingCategory::Pph4Ayat2)]
    #[case("PPh4(2)", WithholdingCategory::Pph4Ayat2)]
    #[case("pph4_2", WithholdingCategory::Pph4Ayat2)]
    #[case("PPH15", WithholdingCategory::Pph15)]
    #[case("PPH_15", WithholdingCategory::Pph15)]
    fn test_category_parsing(#[case] token: &str, #[case] expected: WithholdingCategory) {
        assert_eq!(token.parse::<WithholdingCategory>().unwrap(), expected);
    }

    #[rstest]
    #[case("PPH21")]
    #[case("VAT")]
    #[case("PPH4")]
    #[case("-")]
    #[case("()")]
    #[case("_")]
    #[case("   ")]
    #[case(" NONE")]
    #[case("PPh 23")]
    #[case("PPH 42")]
    #[case("PPH42")]
    #[case("P-P-H-2-3")]
    fn test_unknown_category_rejected(#[case] token: &str) {
        assert_eq!(
            token.parse::<WithholdingCategory>(),
            Err(CalculationError::UnsupportedCategory(token.to_string()))
        );
    }

    #[rstest]
    #[case(WithholdingCategory::None, dec!(0))]
    #[case(WithholdingCategory::Pph23, dec!(0.02))]
    #[case(WithholdingCategory::Pph4Ayat2, dec!(0.10))]
    #[case(WithholdingCategory::Pph15, dec!(0.0265))]
    fn test_default_rates(#[case] category: WithholdingCategory, #[case] rate: Decimal) {
        assert_eq!(category.default_rate(), rate);
    }

    #[test]
    fn test_labels_and_certificate_flag() {
        assert_eq!(WithholdingCategory::Pph23.label(), "PPh 23 (services)");
        assert_eq!(WithholdingCategory::Pph4Ayat2.label(), "PPh 4(2) (rental, final)");
        assert!(!WithholdingCategory::None.requires_bukti_potong());
        assert!(WithholdingCategory::Pph15.requires_bukti_potong());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for category in WithholdingCategory::ALL {
            assert_eq!(category.to_string().parse::<WithholdingCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_category_serde_tokens() {
        let json = serde_json::to_string(&WithholdingCategory::Pph4Ayat2).unwrap();
        assert_eq!(json, "\"PPH4_2\"");

        let parsed: WithholdingCategory = serde_json::from_str("\"pph23\"").unwrap();
        assert_eq!(parsed, WithholdingCategory::Pph23);

        assert!(serde_json::from_str::<WithholdingCategory>("\"PPH21\"").is_err());
    }

    #[test]
    fn test_profile_deserializes_from_record_fields() {
        let profile: ExpenseTaxProfile = serde_json::from_str(
            r#"{"grossAmount": "10000000", "isLuxuryGoods": false, "withholdingTaxType": "PPH23"}"#,
        )
        .unwrap();

        assert_eq!(profile.gross_amount, dec!(10000000));
        assert_eq!(profile.withholding, WithholdingCategory::Pph23);
        assert_eq!(profile.custom_withholding_rate, None);
        assert!(profile.include_vat);
    }

    #[test]
    fn test_derived_amounts_use_record_field_names() {
        let profile = ExpenseTaxProfile::new(dec!(10000000), false, WithholdingCategory::Pph23);
        let derived = ExpenseAmountAggregator::derive_expense_amounts(&profile).unwrap();
        let value = serde_json::to_value(derived).unwrap();

        for field in [
            "grossAmount",
            "ppnAmount",
            "ppnRate",
            "withholdingAmount",
            "withholdingTaxRate",
            "netAmount",
            "totalAmount",
            "isLuxuryGoods",
            "withholdingTaxType",
            "totalPayable",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(value["withholdingTaxType"], "PPH23");
    }
}
