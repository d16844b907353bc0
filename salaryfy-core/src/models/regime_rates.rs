//! Rate tables for one fiscal year.
//!
//! Every constant the calculators use lives here. [`RegimeRates::default`]
//! returns the FY 2024-25 figures. All structs default field-by-field, so a
//! partial override file only has to name the values it changes.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use super::{AgeCategory, SlabBand, SlabTable, SurchargeTable, SurchargeTier};

/// Errors reported by [`RegimeRates::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatesError {
    /// A table has no entries.
    #[error("{0} table is empty")]
    EmptyTable(&'static str),

    /// A rate is outside `[0, 1]`.
    #[error("{table} rate must be between 0 and 1, got {rate}")]
    RateOutOfRange { table: &'static str, rate: Decimal },

    /// A bound is negative or not above the previous one.
    #[error("{table} bounds must be non-negative and strictly ascending, got {bound}")]
    BoundsNotAscending { table: &'static str, bound: Decimal },

    /// The last entry has a bound.
    #[error("{0} table must end with an unbounded entry")]
    MissingUnboundedEntry(&'static str),

    /// An entry other than the last has no bound.
    #[error("{0} table has an unbounded entry before the last one")]
    UnboundedBeforeLast(&'static str),

    /// A fixed amount (deduction, cap, exemption) is negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    /// A salary ratio or cess rate is outside `[0, 1]`.
    #[error("{field} must be between 0 and 1, got {value}")]
    RatioOutOfRange { field: &'static str, value: Decimal },
}

/// Fixed-ratio salary structure used to split a CTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryStructure {
    /// Share of CTC paid as basic salary.
    pub basic_ratio: Decimal,
    /// HRA as a share of basic.
    pub hra_ratio: Decimal,
    /// EPF contribution rate on basic, for both employer and employee.
    pub epf_rate: Decimal,
    /// Flat annual professional tax.
    pub professional_tax: Decimal,
}

impl Default for SalaryStructure {
    fn default() -> Self {
        Self {
            basic_ratio: dec!(0.40),
            hra_ratio: dec!(0.50),
            epf_rate: dec!(0.12),
            professional_tax: dec!(2400),
        }
    }
}

/// Section 87A rebate.
///
/// In a rates file `max_rebate = "none"` rebates the whole tax. Keys left out
/// of a `[*.rebate]` table keep that regime's built-in values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rebate {
    /// Highest taxable income that still receives the rebate (inclusive).
    pub income_limit: Decimal,

    /// Largest rebate granted, `None` to rebate the whole tax.
    #[serde(serialize_with = "rebate_cap::serialize")]
    pub max_rebate: Option<Decimal>,
}

impl Rebate {
    /// Rebate owed on `tax` for a given taxable income.
    pub fn amount(
        &self,
        taxable_income: Decimal,
        tax: Decimal,
    ) -> Decimal {
        if taxable_income > self.income_limit {
            return Decimal::ZERO;
        }
        match self.max_rebate {
            Some(cap) => tax.min(cap),
            None => tax,
        }
    }
}

/// Rebate keys present in a rates file.
#[derive(Deserialize)]
struct RebatePatch {
    income_limit: Option<Decimal>,

    #[serde(default, deserialize_with = "rebate_cap::deserialize_present")]
    max_rebate: Option<Option<Decimal>>,
}

impl RebatePatch {
    fn apply(
        self,
        base: Rebate,
    ) -> Rebate {
        Rebate {
            income_limit: self.income_limit.unwrap_or(base.income_limit),
            max_rebate: self.max_rebate.unwrap_or(base.max_rebate),
        }
    }
}

fn old_regime_rebate<'de, D>(deserializer: D) -> Result<Rebate, D::Error>
where
    D: Deserializer<'de>,
{
    let patch = RebatePatch::deserialize(deserializer)?;
    Ok(patch.apply(OldRegimeRates::default().rebate))
}

fn new_regime_rebate<'de, D>(deserializer: D) -> Result<Rebate, D::Error>
where
    D: Deserializer<'de>,
{
    let patch = RebatePatch::deserialize(deserializer)?;
    Ok(patch.apply(NewRegimeRates::default().rebate))
}

/// `max_rebate` as written in a rates file: an amount, or `"none"` for no cap.
mod rebate_cap {
    use super::*;

    const UNCAPPED: &str = "none";

    pub(super) fn serialize<S>(
        cap: &Option<Decimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match cap {
            Some(amount) => Serialize::serialize(amount, serializer),
            None => serializer.serialize_str(UNCAPPED),
        }
    }

    pub(super) fn deserialize_present<'de, D>(
        deserializer: D,
    ) -> Result<Option<Option<Decimal>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CapVisitor).map(Some)
    }

    struct CapVisitor;

    impl Visitor<'_> for CapVisitor {
        type Value = Option<Decimal>;

        fn expecting(
            &self,
            f: &mut fmt::Formatter<'_>,
        ) -> fmt::Result {
            write!(f, "a rebate amount or \"{UNCAPPED}\"")
        }

        fn visit_str<E: de::Error>(
            self,
            v: &str,
        ) -> Result<Self::Value, E> {
            if v.trim().eq_ignore_ascii_case(UNCAPPED) {
                return Ok(None);
            }
            Decimal::from_str(v.trim()).map(Some).map_err(E::custom)
        }

        fn visit_i64<E: de::Error>(
            self,
            v: i64,
        ) -> Result<Self::Value, E> {
            Ok(Some(Decimal::from(v)))
        }

        fn visit_u64<E: de::Error>(
            self,
            v: u64,
        ) -> Result<Self::Value, E> {
            Ok(Some(Decimal::from(v)))
        }

        fn visit_f64<E: de::Error>(
            self,
            v: f64,
        ) -> Result<Self::Value, E> {
            Decimal::from_str(&v.to_string()).map(Some).map_err(E::custom)
        }
    }
}

/// Basic exemption limit for each age category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExemptionLimits {
    pub below_60: Decimal,
    pub senior: Decimal,
    pub super_senior: Decimal,
}

impl ExemptionLimits {
    pub fn for_age(
        &self,
        age: AgeCategory,
    ) -> Decimal {
        match age {
            AgeCategory::Below60 => self.below_60,
            AgeCategory::Senior => self.senior,
            AgeCategory::SuperSenior => self.super_senior,
        }
    }
}

impl Default for ExemptionLimits {
    fn default() -> Self {
        Self {
            below_60: dec!(250000),
            senior: dec!(300000),
            super_senior: dec!(500000),
        }
    }
}

/// Surcharge tiers shared by both regimes, with the given top-tier rate.
fn surcharge_tiers(top_rate: Decimal) -> SurchargeTable {
    SurchargeTable::new(vec![
        SurchargeTier::up_to(dec!(5000000), dec!(0)),
        SurchargeTier::up_to(dec!(10000000), dec!(0.10)),
        SurchargeTier::up_to(dec!(20000000), dec!(0.15)),
        SurchargeTier::up_to(dec!(50000000), dec!(0.25)),
        SurchargeTier::above(top_rate),
    ])
}

/// Deduction-based regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OldRegimeRates {
    pub standard_deduction: Decimal,

    /// Cap on section 80C deductions.
    pub max_deduction_80c: Decimal,

    pub exemption: ExemptionLimits,

    /// Bands measured from the exemption limit, not from zero.
    pub slabs: SlabTable,

    #[serde(deserialize_with = "old_regime_rebate")]
    pub rebate: Rebate,
    pub surcharge: SurchargeTable,
}

impl Default for OldRegimeRates {
    fn default() -> Self {
        Self {
            standard_deduction: dec!(50000),
            max_deduction_80c: dec!(150000),
            exemption: ExemptionLimits::default(),
            slabs: SlabTable::new(vec![
                SlabBand::bounded(dec!(250000), dec!(0.05)),
                SlabBand::bounded(dec!(750000), dec!(0.20)),
                SlabBand::unbounded(dec!(0.30)),
            ]),
            rebate: Rebate {
                income_limit: dec!(500000),
                max_rebate: Some(dec!(12500)),
            },
            surcharge: surcharge_tiers(dec!(0.37)),
        }
    }
}

/// Simplified-slab regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewRegimeRates {
    pub standard_deduction: Decimal,
    pub slabs: SlabTable,

    #[serde(deserialize_with = "new_regime_rebate")]
    pub rebate: Rebate,
    pub surcharge: SurchargeTable,
}

impl Default for NewRegimeRates {
    fn default() -> Self {
        Self {
            standard_deduction: dec!(75000),
            slabs: SlabTable::new(vec![
                SlabBand::bounded(dec!(300000), dec!(0)),
                SlabBand::bounded(dec!(700000), dec!(0.05)),
                SlabBand::bounded(dec!(1000000), dec!(0.10)),
                SlabBand::bounded(dec!(1200000), dec!(0.15)),
                SlabBand::bounded(dec!(1500000), dec!(0.20)),
                SlabBand::unbounded(dec!(0.30)),
            ]),
            rebate: Rebate {
                income_limit: dec!(700000),
                max_rebate: None,
            },
            surcharge: surcharge_tiers(dec!(0.25)),
        }
    }
}

/// Complete rate set for one fiscal year.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salaryfy_core::RegimeRates;
///
/// let rates = RegimeRates::default();
///
/// assert_eq!(rates.fiscal_year, "2024-25");
/// assert_eq!(rates.cess_rate, dec!(0.04));
/// assert_eq!(rates.new_regime.standard_deduction, dec!(75000));
/// assert!(rates.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegimeRates {
    /// Label of the fiscal year these figures apply to, e.g. `"2024-25"`.
    pub fiscal_year: String,

    /// Health and education cess on tax plus surcharge.
    pub cess_rate: Decimal,

    pub salary: SalaryStructure,
    pub old_regime: OldRegimeRates,
    pub new_regime: NewRegimeRates,
}

impl Default for RegimeRates {
    fn default() -> Self {
        Self {
            fiscal_year: "2024-25".to_string(),
            cess_rate: dec!(0.04),
            salary: SalaryStructure::default(),
            old_regime: OldRegimeRates::default(),
            new_regime: NewRegimeRates::default(),
        }
    }
}

impl RegimeRates {
    /// Validates every table and fixed amount.
    ///
    /// # Errors
    ///
    /// Returns the first [`RatesError`] found.
    pub fn validate(&self) -> Result<(), RatesError> {
        check_ratio("cess_rate", self.cess_rate)?;
        check_ratio("salary.basic_ratio", self.salary.basic_ratio)?;
        check_ratio("salary.hra_ratio", self.salary.hra_ratio)?;
        check_ratio("salary.epf_rate", self.salary.epf_rate)?;
        check_amount("salary.professional_tax", self.salary.professional_tax)?;

        let old = &self.old_regime;
        check_amount("old_regime.standard_deduction", old.standard_deduction)?;
        check_amount("old_regime.max_deduction_80c", old.max_deduction_80c)?;
        check_amount("old_regime.exemption.below_60", old.exemption.below_60)?;
        check_amount("old_regime.exemption.senior", old.exemption.senior)?;
        check_amount("old_regime.exemption.super_senior", old.exemption.super_senior)?;
        check_rebate("old_regime.rebate", &old.rebate)?;
        old.slabs.validate("old_regime.slabs")?;
        old.surcharge.validate("old_regime.surcharge")?;

        let new = &self.new_regime;
        check_amount("new_regime.standard_deduction", new.standard_deduction)?;
        check_rebate("new_regime.rebate", &new.rebate)?;
        new.slabs.validate("new_regime.slabs")?;
        new.surcharge.validate("new_regime.surcharge")?;

        Ok(())
    }
}

fn check_ratio(
    field: &'static str,
    value: Decimal,
) -> Result<(), RatesError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(RatesError::RatioOutOfRange { field, value });
    }
    Ok(())
}

fn check_amount(
    field: &'static str,
    value: Decimal,
) -> Result<(), RatesError> {
    if value < Decimal::ZERO {
        return Err(RatesError::NegativeAmount { field, value });
    }
    Ok(())
}

fn check_rebate(
    field: &'static str,
    rebate: &Rebate,
) -> Result<(), RatesError> {
    check_amount(field, rebate.income_limit)?;
    if let Some(cap) = rebate.max_rebate {
        check_amount(field, cap)?;
    }
    Ok(())
}
