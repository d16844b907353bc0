//! New (simplified-slab) income tax regime.
//!
//! Only the standard deduction applies. Age and the section 80C/80D claims on
//! [`TaxRegimeInput`] are ignored.
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Taxable income = income − standard deduction, floored, minimum 0 |
//! | 2    | Slab tax, rounded |
//! | 3    | Full section 87A rebate when taxable income is within the limit |
//! | 4    | Surcharge, cess, total |

use rust_decimal::Decimal;
use tracing::debug;

use super::common::{non_negative, round_to_rupee, taxable_amount};
use super::levies::apply_levies;
use crate::models::{RegimeRates, TaxRegimeInput, TaxRegimeResult};

/// Calculator for the new regime.
#[derive(Debug, Clone)]
pub struct NewRegimeCalculator<'a> {
    rates: &'a RegimeRates,
}

impl<'a> NewRegimeCalculator<'a> {
    pub fn new(rates: &'a RegimeRates) -> Self {
        Self { rates }
    }

    pub fn calculate(
        &self,
        input: &TaxRegimeInput,
    ) -> TaxRegimeResult {
        let regime = &self.rates.new_regime;

        let taxable_income = taxable_amount(input.annual_income, regime.standard_deduction);
        let tax = round_to_rupee(regime.slabs.tax_on(taxable_income));
        let rebate = regime.rebate.amount(taxable_income, tax);
        let tax_after_rebate = non_negative(tax - rebate);

        let result = apply_levies(
            taxable_income,
            tax_after_rebate,
            &regime.surcharge,
            self.rates.cess_rate,
        );

        debug!(
            %taxable_income,
            %tax,
            %rebate,
            total = %result.total_tax_liability,
            "new regime tax computed"
        );

        result
    }
}
