//! Surcharge and cess, the steps both regimes share after the rebate.

use rust_decimal::Decimal;

use super::common::round_to_rupee;
use crate::models::{SurchargeTable, TaxRegimeResult};

/// Adds surcharge and cess to the post-rebate tax and totals the liability.
///
/// The surcharge tier is chosen by `taxable_income`, not by the tax amount.
pub(crate) fn apply_levies(
    taxable_income: Decimal,
    tax_after_rebate: Decimal,
    surcharge_table: &SurchargeTable,
    cess_rate: Decimal,
) -> TaxRegimeResult {
    let income_tax = round_to_rupee(tax_after_rebate);
    let surcharge = round_to_rupee(income_tax * surcharge_table.rate_for(taxable_income));
    let cess = round_to_rupee(cess_rate * (income_tax + surcharge));
    let total_tax_liability = round_to_rupee(income_tax + surcharge + cess);

    TaxRegimeResult {
        taxable_income,
        income_tax,
        surcharge,
        cess,
        total_tax_liability,
    }
}
