use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AgeCategory;

/// Inputs shared by both regime calculators.
///
/// The new regime reads only `annual_income`; the deduction fields and the
/// age category are accepted so that one input can be run through both
/// regimes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxRegimeInput {
    /// Gross annual income.
    pub annual_income: Decimal,

    /// Age bracket, used by the old regime to pick the exemption limit.
    pub age: AgeCategory,

    /// Section 80C investments. Capped by the old regime.
    pub deduction_80c: Decimal,

    /// Section 80D health insurance premiums. Not capped.
    pub deduction_80d: Decimal,
}

impl TaxRegimeInput {
    /// Input with only an income; deductions zero and age below 60.
    pub fn with_income(annual_income: Decimal) -> Self {
        Self {
            annual_income,
            ..Default::default()
        }
    }
}

/// Tax liability under one regime, in whole rupees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRegimeResult {
    /// Income after the standard deduction and allowed deductions.
    pub taxable_income: Decimal,

    /// Slab tax after the section 87A rebate.
    pub income_tax: Decimal,

    pub surcharge: Decimal,

    /// Health and education cess on income tax plus surcharge.
    pub cess: Decimal,

    /// `income_tax + surcharge + cess`.
    pub total_tax_liability: Decimal,
}

impl TaxRegimeResult {
    /// Result for an income with nothing to pay.
    pub fn zero_tax(taxable_income: Decimal) -> Self {
        Self {
            taxable_income,
            income_tax: Decimal::ZERO,
            surcharge: Decimal::ZERO,
            cess: Decimal::ZERO,
            total_tax_liability: Decimal::ZERO,
        }
    }
}
