//! Old (deduction-based) income tax regime.
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Standard deduction |
//! | 2    | Section 80C, clamped to `[0, cap]` |
//! | 3    | Section 80D, floored at 0, no cap |
//! | 4    | Taxable income = income − Lines 1..3, floored to whole rupees, minimum 0 |
//! | 5    | Slab tax above the age-based exemption limit, rounded |
//! | 6    | Section 87A rebate (capped) when taxable income is within the limit |
//! | 7    | Surcharge by taxable income tier |
//! | 8    | Cess on tax plus surcharge |
//! | 9    | Total liability |
//!
//! Section 80D age sub-limits are not modelled. Callers that need them must
//! cap the deduction before passing it in.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salaryfy_core::{AgeCategory, RegimeRates, TaxRegimeInput};
//! use salaryfy_core::calculations::OldRegimeCalculator;
//!
//! let rates = RegimeRates::default();
//! let input = TaxRegimeInput {
//!     annual_income: dec!(1200000),
//!     age: AgeCategory::Below60,
//!     deduction_80c: dec!(150000),
//!     deduction_80d: dec!(25000),
//! };
//!
//! let result = OldRegimeCalculator::new(&rates).calculate(&input);
//!
//! assert_eq!(result.taxable_income, dec!(975000));
//! assert_eq!(result.income_tax, dec!(107500));
//! assert_eq!(result.total_tax_liability, dec!(111800));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use super::common::{clamp_to, non_negative, round_to_rupee, taxable_amount};
use super::levies::apply_levies;
use crate::models::{AgeCategory, RegimeRates, TaxRegimeInput, TaxRegimeResult};

/// Calculator for the old regime.
#[derive(Debug, Clone)]
pub struct OldRegimeCalculator<'a> {
    rates: &'a RegimeRates,
}

impl<'a> OldRegimeCalculator<'a> {
    pub fn new(rates: &'a RegimeRates) -> Self {
        Self { rates }
    }

    /// Computes the old-regime liability for `input`.
    pub fn calculate(
        &self,
        input: &TaxRegimeInput,
    ) -> TaxRegimeResult {
        let allowed_80c = self.allowed_80c(input.deduction_80c);
        let allowed_80d = self.allowed_80d(input.deduction_80d);
        let taxable_income = self.taxable_income(input.annual_income, allowed_80c, allowed_80d);

        let tax = self.slab_tax(taxable_income, input.age);
        let rebate = self.rebate(taxable_income, tax);
        let tax_after_rebate = non_negative(tax - rebate);

        let result = apply_levies(
            taxable_income,
            tax_after_rebate,
            &self.rates.old_regime.surcharge,
            self.rates.cess_rate,
        );

        debug!(
            age = %input.age,
            %taxable_income,
            %tax,
            %rebate,
            total = %result.total_tax_liability,
            "old regime tax computed"
        );

        result
    }

    fn allowed_80c(
        &self,
        claimed: Decimal,
    ) -> Decimal {
        clamp_to(claimed, self.rates.old_regime.max_deduction_80c)
    }

    fn allowed_80d(
        &self,
        claimed: Decimal,
    ) -> Decimal {
        non_negative(claimed)
    }

    fn taxable_income(
        &self,
        annual_income: Decimal,
        allowed_80c: Decimal,
        allowed_80d: Decimal,
    ) -> Decimal {
        let deductions = self.rates.old_regime.standard_deduction + allowed_80c + allowed_80d;
        taxable_amount(annual_income, deductions)
    }

    /// Slab tax in whole rupees, with bands starting at the exemption limit.
    fn slab_tax(
        &self,
        taxable_income: Decimal,
        age: AgeCategory,
    ) -> Decimal {
        let regime = &self.rates.old_regime;
        let exemption = regime.exemption.for_age(age);
        round_to_rupee(regime.slabs.shifted(exemption).tax_on(taxable_income))
    }

    fn rebate(
        &self,
        taxable_income: Decimal,
        tax: Decimal,
    ) -> Decimal {
        self.rates.old_regime.rebate.amount(taxable_income, tax)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn input(
        annual_income: Decimal,
        age: AgeCategory,
    ) -> TaxRegimeInput {
        TaxRegimeInput {
            annual_income,
            age,
            deduction_80c: dec!(0),
            deduction_80d: dec!(0),
        }
    }

    fn calculate(input: &TaxRegimeInput) -> TaxRegimeResult {
        let rates = RegimeRates::default();
        OldRegimeCalculator::new(&rates).calculate(input)
    }

    // =========================================================================
    // deduction tests
    // =========================================================================

    #[test]
    fn allowed_80c_is_capped() {
        let rates = RegimeRates::default();
        let calculator = OldRegimeCalculator::new(&rates);

        assert_eq!(calculator.allowed_80c(dec!(300000)), dec!(150000));
    }

    #[test]
    fn allowed_80c_negative_is_zero() {
        let rates = RegimeRates::default();
        let calculator = OldRegimeCalculator::new(&rates);

        assert_eq!(calculator.allowed_80c(dec!(-10000)), dec!(0));
    }

    #[test]
    fn allowed_80d_is_not_capped() {
        let rates = RegimeRates::default();
        let calculator = OldRegimeCalculator::new(&rates);

        assert_eq!(calculator.allowed_80d(dec!(500000)), dec!(500000));
    }

    #[test]
    fn allowed_80d_negative_is_zero() {
        let rates = RegimeRates::default();
        let calculator = OldRegimeCalculator::new(&rates);

        assert_eq!(calculator.allowed_80d(dec!(-1)), dec!(0));
    }

    #[test]
    fn taxable_income_subtracts_standard_deduction() {
        let rates = RegimeRates::default();
        let calculator = OldRegimeCalculator::new(&rates);

        let result = calculator.taxable_income(dec!(1200000), dec!(150000), dec!(25000));

        assert_eq!(result, dec!(975000));
    }

    #[test]
    fn taxable_income_drops_fractional_rupees() {
        let rates = RegimeRates::default();
        let calculator = OldRegimeCalculator::new(&rates);

        let result = calculator.taxable_income(dec!(600000.99), dec!(0), dec!(0));

        assert_eq!(result, dec!(550000));
    }

    // =========================================================================
    // slab_tax tests
    // =========================================================================

    #[test]
    fn slab_tax_zero_within_exemption() {
        let rates = RegimeRates::default();
        let calculator = OldRegimeCalculator::new(&rates);

        assert_eq!(calculator.slab_tax(dec!(250000), AgeCategory::Below60), dec!(0));
        assert_eq!(calculator.slab_tax(dec!(300000), AgeCategory::Senior), dec!(0));
        assert_eq!(calculator.slab_tax(dec!(500000), AgeCategory::SuperSenior), dec!(0));
    }

    #[test]
    fn slab_tax_first_band() {
        let rates = RegimeRates::default();
        let calculator = OldRegimeCalculator::new(&rates);

        // 150,000 at 5%
        assert_eq!(calculator.slab_tax(dec!(400000), AgeCategory::Below60), dec!(7500));
    }

    #[test]
    fn slab_tax_second_band() {
        let rates = RegimeRates::default();
        let calculator = OldRegimeCalculator::new(&rates);

        // 12,500 + 475,000 at 20%
        assert_eq!(calculator.slab_tax(dec!(975000), AgeCategory::Below60), dec!(107500));
    }

    #[test]
    fn slab_tax_top_band() {
        let rates = RegimeRates::default();
        let calculator = OldRegimeCalculator::new(&rates);

        // 12,500 + 100,000 + 300,000
        assert_eq!(calculator.slab_tax(dec!(2000000), AgeCategory::Below60), dec!(412500));
    }

    #[test]
    fn slab_tax_senior_exemption_shifts_bands() {
        let rates = RegimeRates::default();
        let calculator = OldRegimeCalculator::new(&rates);

        // 250,000 at 5% + 450,000 at 20%
        assert_eq!(calculator.slab_tax(dec!(1000000), AgeCategory::Senior), dec!(102500));
    }

    #[test]
    fn slab_tax_rounds_to_rupee() {
        let rates = RegimeRates::default();
        let calculator = OldRegimeCalculator::new(&rates);

        // 10 at 5% = 0.50
        assert_eq!(calculator.slab_tax(dec!(250010), AgeCategory::Below60), dec!(1));
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_reference_case_with_deductions() {
        let result = calculate(&TaxRegimeInput {
            annual_income: dec!(1200000),
            age: AgeCategory::Below60,
            deduction_80c: dec!(150000),
            deduction_80d: dec!(25000),
        });

        assert_eq!(result.taxable_income, dec!(975000));
        assert_eq!(result.income_tax, dec!(107500));
        assert_eq!(result.surcharge, dec!(0));
        assert_eq!(result.cess, dec!(4300));
        assert_eq!(result.total_tax_liability, dec!(111800));
    }

    #[test]
    fn calculate_full_rebate_at_five_lakh() {
        let result = calculate(&input(dec!(550000), AgeCategory::Below60));

        assert_eq!(result.taxable_income, dec!(500000));
        assert_eq!(result.income_tax, dec!(0));
        assert_eq!(result.total_tax_liability, dec!(0));
    }

    #[test]
    fn calculate_no_rebate_just_above_limit() {
        let result = calculate(&input(dec!(550001), AgeCategory::Below60));

        assert_eq!(result.taxable_income, dec!(500001));
        // 12,500.20 rounds to 12,500; cess 500
        assert_eq!(result.income_tax, dec!(12500));
        assert_eq!(result.total_tax_liability, dec!(13000));
    }

    #[test]
    fn calculate_senior_rebate_covers_smaller_tax() {
        let result = calculate(&input(dec!(550000), AgeCategory::Senior));

        assert_eq!(result.taxable_income, dec!(500000));
        assert_eq!(result.total_tax_liability, dec!(0));
    }

    #[test]
    fn calculate_super_senior() {
        let result = calculate(&input(dec!(1050000), AgeCategory::SuperSenior));

        assert_eq!(result.taxable_income, dec!(1000000));
        assert_eq!(result.income_tax, dec!(62500));
        assert_eq!(result.cess, dec!(2500));
        assert_eq!(result.total_tax_liability, dec!(65000));
    }

    #[test]
    fn calculate_income_below_standard_deduction() {
        let result = calculate(&input(dec!(30000), AgeCategory::Below60));

        assert_eq!(result, TaxRegimeResult::zero_tax(dec!(0)));
    }

    #[test]
    fn calculate_surcharge_boundary_is_inclusive() {
        let at_limit = calculate(&input(dec!(5050000), AgeCategory::Below60));
        let above_limit = calculate(&input(dec!(5050001), AgeCategory::Below60));

        assert_eq!(at_limit.taxable_income, dec!(5000000));
        assert_eq!(at_limit.income_tax, dec!(1312500));
        assert_eq!(at_limit.surcharge, dec!(0));
        assert_eq!(at_limit.total_tax_liability, dec!(1365000));

        assert_eq!(above_limit.surcharge, dec!(131250));
        assert_eq!(above_limit.total_tax_liability, dec!(1501500));
    }

    #[test]
    fn calculate_top_surcharge_tier_is_37_percent() {
        let result = calculate(&input(dec!(60050000), AgeCategory::Below60));

        assert_eq!(result.taxable_income, dec!(60000000));
        assert_eq!(result.income_tax, dec!(17812500));
        assert_eq!(result.surcharge, dec!(6590625));
        assert_eq!(result.cess, dec!(976125));
        assert_eq!(result.total_tax_liability, dec!(25379250));
    }
}
