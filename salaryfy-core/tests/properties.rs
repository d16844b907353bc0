//! Property tests over the public calculators.

use proptest::prelude::*;
use rust_decimal::Decimal;
use salaryfy_core::{
    AgeCategory, TaxRegimeInput, compute_salary_breakdown, compute_tax_new_regime,
    compute_tax_old_regime, format_inr, sanitize_amount,
};

/// Whole-rupee amounts up to 10 crore.
fn rupees_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(Decimal::from)
}

/// Amounts with paise.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000_000i64).prop_map(|paise| Decimal::new(paise, 2))
}

fn deduction_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..500_000i64).prop_map(Decimal::from)
}

fn age_strategy() -> impl Strategy<Value = AgeCategory> {
    prop_oneof![
        Just(AgeCategory::Below60),
        Just(AgeCategory::Senior),
        Just(AgeCategory::SuperSenior),
    ]
}

fn input_strategy() -> impl Strategy<Value = TaxRegimeInput> {
    (
        amount_strategy(),
        age_strategy(),
        deduction_strategy(),
        deduction_strategy(),
    )
        .prop_map(|(annual_income, age, deduction_80c, deduction_80d)| TaxRegimeInput {
            annual_income,
            age,
            deduction_80c,
            deduction_80d,
        })
}

proptest! {
    #[test]
    fn salary_breakdown_invariants(ctc in amount_strategy()) {
        let result = compute_salary_breakdown(ctc);

        prop_assert_eq!(result.gross_salary, result.basic + result.hra + result.special_allowance);
        prop_assert_eq!(result.basic, ctc * Decimal::new(4, 1));
        prop_assert_eq!(result.hra, result.basic * Decimal::new(5, 1));
        prop_assert!(result.special_allowance >= Decimal::ZERO);
        prop_assert!(result.take_home_pre_tax >= Decimal::ZERO);
        prop_assert!(result.take_home_pre_tax <= result.gross_salary);
    }

    #[test]
    fn tax_results_are_whole_non_negative_rupees(input in input_strategy()) {
        for result in [compute_tax_old_regime(&input), compute_tax_new_regime(&input)] {
            for value in [
                result.taxable_income,
                result.income_tax,
                result.surcharge,
                result.cess,
                result.total_tax_liability,
            ] {
                prop_assert!(value >= Decimal::ZERO);
                prop_assert_eq!(value, value.trunc());
            }
            prop_assert_eq!(
                result.total_tax_liability,
                result.income_tax + result.surcharge + result.cess
            );
        }
    }

    #[test]
    fn old_regime_total_non_decreasing_in_income(
        a in amount_strategy(),
        b in amount_strategy(),
        age in age_strategy(),
        deduction_80c in deduction_strategy(),
        deduction_80d in deduction_strategy(),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let input = |annual_income| TaxRegimeInput {
            annual_income,
            age,
            deduction_80c,
            deduction_80d,
        };

        prop_assert!(
            compute_tax_old_regime(&input(low)).total_tax_liability
                <= compute_tax_old_regime(&input(high)).total_tax_liability
        );
    }

    #[test]
    fn new_regime_total_non_decreasing_in_income(a in amount_strategy(), b in amount_strategy()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        prop_assert!(
            compute_tax_new_regime(&TaxRegimeInput::with_income(low)).total_tax_liability
                <= compute_tax_new_regime(&TaxRegimeInput::with_income(high)).total_tax_liability
        );
    }

    #[test]
    fn old_regime_total_non_increasing_in_deductions(
        annual_income in amount_strategy(),
        a in deduction_strategy(),
        b in deduction_strategy(),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let input = |deduction_80c| TaxRegimeInput {
            annual_income,
            deduction_80c,
            ..Default::default()
        };

        prop_assert!(
            compute_tax_old_regime(&input(high)).total_tax_liability
                <= compute_tax_old_regime(&input(low)).total_tax_liability
        );
    }

    #[test]
    fn new_regime_ignores_age_and_deductions(input in input_strategy()) {
        prop_assert_eq!(
            compute_tax_new_regime(&input),
            compute_tax_new_regime(&TaxRegimeInput::with_income(input.annual_income))
        );
    }

    #[test]
    fn rebate_limits_zero_the_liability(input in input_strategy()) {
        let old = compute_tax_old_regime(&input);
        if old.taxable_income <= Decimal::from(500_000) {
            prop_assert_eq!(old.total_tax_liability, Decimal::ZERO);
        }

        let new = compute_tax_new_regime(&input);
        if new.taxable_income <= Decimal::from(700_000) {
            prop_assert_eq!(new.total_tax_liability, Decimal::ZERO);
        }
    }

    #[test]
    fn calculators_are_idempotent(input in input_strategy()) {
        prop_assert_eq!(compute_tax_old_regime(&input), compute_tax_old_regime(&input));
        prop_assert_eq!(compute_tax_new_regime(&input), compute_tax_new_regime(&input));
        prop_assert_eq!(
            compute_salary_breakdown(input.annual_income),
            compute_salary_breakdown(input.annual_income)
        );
    }

    #[test]
    fn formatted_rupees_read_back_as_same_amount(amount in rupees_strategy()) {
        prop_assert_eq!(sanitize_amount(&format_inr(amount)), amount);
    }
}
