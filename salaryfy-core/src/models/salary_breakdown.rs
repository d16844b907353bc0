use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_to_rupee;

/// Annual salary components derived from a cost-to-company figure.
///
/// Amounts are not rounded; the presentation layer rounds when it formats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdownResult {
    pub ctc: Decimal,
    pub basic: Decimal,
    pub hra: Decimal,
    pub epf_employer: Decimal,
    pub special_allowance: Decimal,

    /// Basic + HRA + special allowance. Employer EPF is not paid out.
    pub gross_salary: Decimal,

    pub epf_employee: Decimal,
    pub professional_tax: Decimal,
    pub total_deductions: Decimal,

    /// Gross salary minus deductions, before income tax. Never negative.
    pub take_home_pre_tax: Decimal,
}

impl SalaryBreakdownResult {
    /// Returns the amount held in the given field.
    pub fn amount(
        &self,
        component: SalaryComponent,
    ) -> Decimal {
        match component {
            SalaryComponent::Ctc => self.ctc,
            SalaryComponent::Basic => self.basic,
            SalaryComponent::Hra => self.hra,
            SalaryComponent::EpfEmployer => self.epf_employer,
            SalaryComponent::SpecialAllowance => self.special_allowance,
            SalaryComponent::GrossSalary => self.gross_salary,
            SalaryComponent::EpfEmployee => self.epf_employee,
            SalaryComponent::ProfessionalTax => self.professional_tax,
            SalaryComponent::TotalDeductions => self.total_deductions,
            SalaryComponent::TakeHomePreTax => self.take_home_pre_tax,
        }
    }

    /// The parts that make up the CTC, rounded to whole rupees, in chart order.
    pub fn chart_components(&self) -> Vec<(SalaryComponent, Decimal)> {
        SalaryComponent::ctc_parts()
            .iter()
            .map(|c| (*c, round_to_rupee(self.amount(*c))))
            .collect()
    }
}

/// A named line of the salary breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SalaryComponent {
    Ctc,
    Basic,
    Hra,
    EpfEmployer,
    SpecialAllowance,
    GrossSalary,
    EpfEmployee,
    ProfessionalTax,
    TotalDeductions,
    TakeHomePreTax,
}

impl SalaryComponent {
    /// Every line in display order.
    pub fn all() -> &'static [SalaryComponent] {
        &[
            SalaryComponent::Ctc,
            SalaryComponent::Basic,
            SalaryComponent::Hra,
            SalaryComponent::EpfEmployer,
            SalaryComponent::SpecialAllowance,
            SalaryComponent::GrossSalary,
            SalaryComponent::EpfEmployee,
            SalaryComponent::ProfessionalTax,
            SalaryComponent::TotalDeductions,
            SalaryComponent::TakeHomePreTax,
        ]
    }

    /// Components the employer spends out of the CTC.
    pub fn ctc_parts() -> &'static [SalaryComponent] {
        &[
            SalaryComponent::Basic,
            SalaryComponent::Hra,
            SalaryComponent::SpecialAllowance,
            SalaryComponent::EpfEmployer,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ctc => "CTC",
            Self::Basic => "Basic Salary",
            Self::Hra => "HRA",
            Self::EpfEmployer => "EPF (Employer)",
            Self::SpecialAllowance => "Special Allowance",
            Self::GrossSalary => "Gross Salary",
            Self::EpfEmployee => "EPF (Employee)",
            Self::ProfessionalTax => "Professional Tax",
            Self::TotalDeductions => "Deductions",
            Self::TakeHomePreTax => "Take-Home (Pre-Tax)",
        }
    }

    /// Plain-language explanation shown next to the figure.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Ctc => {
                "The total annual cost your employer spends on you, including salary components and contributions like PF."
            }
            Self::Basic => {
                "The fixed core of your salary; many components (HRA, PF) are calculated from this."
            }
            Self::Hra => {
                "House Rent Allowance to support rental expenses; can be eligible for tax exemption."
            }
            Self::EpfEmployer => {
                "Your employer's contribution (12% of Basic) to your EPF; part of CTC, not in-hand."
            }
            Self::SpecialAllowance => {
                "Flexible component that balances the CTC after core components are allocated."
            }
            Self::GrossSalary => {
                "Your total salary before deductions like employee PF and professional tax."
            }
            Self::EpfEmployee => "Your 12% contribution to EPF, deducted from your gross salary.",
            Self::ProfessionalTax => "A small state tax, simplified here as a flat annual amount.",
            Self::TotalDeductions => "Total deductions from gross.",
            Self::TakeHomePreTax => "Gross salary minus deductions; pre-income-tax take-home.",
        }
    }
}
