//! CTC to take-home salary decomposition.
//!
//! A fixed-ratio split: basic is a share of CTC, HRA and both EPF
//! contributions are shares of basic, and the special allowance absorbs
//! whatever is left.
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Basic = CTC × 40% |
//! | 2    | HRA = Basic × 50% |
//! | 3    | EPF (employer) = Basic × 12% |
//! | 4    | Special allowance = CTC − Lines 1..3, minimum 0 |
//! | 5    | Gross salary = Lines 1 + 2 + 4 |
//! | 6    | EPF (employee) = Basic × 12% |
//! | 7    | Professional tax (flat) |
//! | 8    | Total deductions = Lines 6 + 7 |
//! | 9    | Take-home before income tax = Line 5 − Line 8, minimum 0 |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salaryfy_core::RegimeRates;
//! use salaryfy_core::calculations::SalaryCalculator;
//!
//! let rates = RegimeRates::default();
//! let breakdown = SalaryCalculator::new(&rates).calculate(dec!(1200000));
//!
//! assert_eq!(breakdown.basic, dec!(480000));
//! assert_eq!(breakdown.special_allowance, dec!(422400));
//! assert_eq!(breakdown.take_home_pre_tax, dec!(1082400));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use super::common::non_negative;
use crate::models::{RegimeRates, SalaryBreakdownResult, SalaryStructure};

/// Calculator for the salary breakdown.
#[derive(Debug, Clone)]
pub struct SalaryCalculator<'a> {
    structure: &'a SalaryStructure,
}

impl<'a> SalaryCalculator<'a> {
    pub fn new(rates: &'a RegimeRates) -> Self {
        Self {
            structure: &rates.salary,
        }
    }

    /// Splits an annual CTC into salary components.
    ///
    /// Assumes a non-negative CTC; callers sanitise input first.
    pub fn calculate(
        &self,
        ctc: Decimal,
    ) -> SalaryBreakdownResult {
        let basic = self.basic(ctc);
        let hra = self.hra(basic);
        let epf_employer = self.epf(basic);
        let special_allowance = self.special_allowance(ctc, basic, hra, epf_employer);
        let gross_salary = basic + hra + special_allowance;
        let epf_employee = self.epf(basic);
        let professional_tax = self.structure.professional_tax;
        let total_deductions = epf_employee + professional_tax;
        let take_home_pre_tax = non_negative(gross_salary - total_deductions);

        debug!(%ctc, %gross_salary, %take_home_pre_tax, "salary breakdown computed");

        SalaryBreakdownResult {
            ctc,
            basic,
            hra,
            epf_employer,
            special_allowance,
            gross_salary,
            epf_employee,
            professional_tax,
            total_deductions,
            take_home_pre_tax,
        }
    }

    fn basic(
        &self,
        ctc: Decimal,
    ) -> Decimal {
        ctc * self.structure.basic_ratio
    }

    fn hra(
        &self,
        basic: Decimal,
    ) -> Decimal {
        basic * self.structure.hra_ratio
    }

    /// Employer and employee contribute at the same rate.
    fn epf(
        &self,
        basic: Decimal,
    ) -> Decimal {
        basic * self.structure.epf_rate
    }

    /// The remainder of CTC. Clamped at zero; the fixed components are never
    /// reduced to make room for it.
    fn special_allowance(
        &self,
        ctc: Decimal,
        basic: Decimal,
        hra: Decimal,
        epf_employer: Decimal,
    ) -> Decimal {
        non_negative(ctc - basic - hra - epf_employer)
    }
}
