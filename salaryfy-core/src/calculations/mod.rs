//! Salary and income tax calculators.
//!
//! Each calculator borrows a [`RegimeRates`] and exposes a single `calculate`
//! (or `compare`) method. The free functions below run the calculators against
//! the built-in FY 2024-25 rates.

pub mod common;
mod comparison;
mod levies;
mod new_regime;
mod old_regime;
mod salary;

use std::sync::LazyLock;

use rust_decimal::Decimal;

pub use comparison::RegimeComparator;
pub use new_regime::NewRegimeCalculator;
pub use old_regime::OldRegimeCalculator;
pub use salary::SalaryCalculator;

use crate::models::{
    RegimeComparison, RegimeRates, SalaryBreakdownResult, TaxRegimeInput, TaxRegimeResult,
};

static DEFAULT_RATES: LazyLock<RegimeRates> = LazyLock::new(RegimeRates::default);

/// The built-in rate set, shared by the free functions in this module.
pub fn default_rates() -> &'static RegimeRates {
    &DEFAULT_RATES
}

/// Splits an annual CTC into salary components using the default structure.
pub fn compute_salary_breakdown(ctc: Decimal) -> SalaryBreakdownResult {
    SalaryCalculator::new(default_rates()).calculate(ctc)
}

/// Old-regime liability with the default rates.
///
/// ```
/// use rust_decimal_macros::dec;
/// use salaryfy_core::TaxRegimeInput;
/// use salaryfy_core::calculations::compute_tax_old_regime;
///
/// let result = compute_tax_old_regime(&TaxRegimeInput::with_income(dec!(700000)));
///
/// assert_eq!(result.taxable_income, dec!(650000));
/// assert_eq!(result.total_tax_liability, dec!(44200));
/// ```
pub fn compute_tax_old_regime(input: &TaxRegimeInput) -> TaxRegimeResult {
    OldRegimeCalculator::new(default_rates()).calculate(input)
}

/// New-regime liability with the default rates.
///
/// Only `annual_income` affects the result.
pub fn compute_tax_new_regime(input: &TaxRegimeInput) -> TaxRegimeResult {
    NewRegimeCalculator::new(default_rates()).calculate(input)
}

/// Both regimes for the same input, with the cheaper one recommended.
pub fn compare_regimes(input: &TaxRegimeInput) -> RegimeComparison {
    RegimeComparator::new(default_rates()).compare(input)
}
