//! Progressive slab tables and surcharge tiers.
//!
//! Both tables are ordered by an ascending upper bound. The final entry has no
//! bound and covers everything above the previous one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RatesError;
use crate::calculations::common::non_negative;

/// One band of a progressive slab table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabBand {
    /// Inclusive upper bound of the band, `None` for the final band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<Decimal>,

    /// Marginal rate applied to the income falling inside the band.
    pub rate: Decimal,
}

impl SlabBand {
    pub fn bounded(
        upper_bound: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            rate,
        }
    }

    pub fn unbounded(rate: Decimal) -> Self {
        Self {
            upper_bound: None,
            rate,
        }
    }
}

/// Ordered `(upper_bound, rate)` bands taxed progressively.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salaryfy_core::{SlabBand, SlabTable};
///
/// let table = SlabTable::new(vec![
///     SlabBand::bounded(dec!(300000), dec!(0)),
///     SlabBand::bounded(dec!(700000), dec!(0.05)),
///     SlabBand::unbounded(dec!(0.10)),
/// ]);
///
/// // 400,000 at 5% plus 100,000 at 10%
/// assert_eq!(table.tax_on(dec!(800000)), dec!(30000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlabTable {
    bands: Vec<SlabBand>,
}

impl SlabTable {
    pub fn new(bands: Vec<SlabBand>) -> Self {
        Self { bands }
    }

    pub fn bands(&self) -> &[SlabBand] {
        &self.bands
    }

    /// Moves every bound up by `exemption` and puts a zero-rate band below it.
    ///
    /// The old regime stores its slabs relative to the age-based exemption
    /// limit; shifting yields the absolute table for one taxpayer.
    pub fn shifted(
        &self,
        exemption: Decimal,
    ) -> SlabTable {
        let mut bands = Vec::with_capacity(self.bands.len() + 1);
        bands.push(SlabBand::bounded(exemption, Decimal::ZERO));
        bands.extend(self.bands.iter().map(|band| SlabBand {
            upper_bound: band.upper_bound.map(|bound| bound + exemption),
            rate: band.rate,
        }));
        SlabTable { bands }
    }

    /// Progressive tax on `income`, unrounded.
    ///
    /// Each band taxes only the part of the income between the previous bound
    /// and its own bound. Iteration stops at the first band whose bound is at
    /// or above the income.
    pub fn tax_on(
        &self,
        income: Decimal,
    ) -> Decimal {
        let mut tax = Decimal::ZERO;
        let mut lower = Decimal::ZERO;

        for band in &self.bands {
            match band.upper_bound {
                Some(upper) => {
                    tax += non_negative(income.min(upper) - lower) * band.rate;
                    if income <= upper {
                        return tax;
                    }
                    lower = upper;
                }
                None => {
                    tax += non_negative(income - lower) * band.rate;
                    return tax;
                }
            }
        }

        tax
    }

    /// Checks rates are in `[0, 1]`, bounds ascend and only the last band is
    /// unbounded.
    pub fn validate(
        &self,
        table: &'static str,
    ) -> Result<(), RatesError> {
        validate_ordered(
            table,
            self.bands.iter().map(|b| (b.upper_bound, b.rate)),
        )
    }
}

/// One surcharge tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargeTier {
    /// Inclusive taxable-income limit of the tier, `None` for the top tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_limit: Option<Decimal>,

    pub rate: Decimal,
}

impl SurchargeTier {
    pub fn up_to(
        income_limit: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            income_limit: Some(income_limit),
            rate,
        }
    }

    pub fn above(rate: Decimal) -> Self {
        Self {
            income_limit: None,
            rate,
        }
    }
}

/// Surcharge tiers keyed by taxable income.
///
/// The whole tax is charged at the rate of the first tier whose limit is at
/// or above the taxable income. There is no marginal relief.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurchargeTable {
    tiers: Vec<SurchargeTier>,
}

impl SurchargeTable {
    pub fn new(tiers: Vec<SurchargeTier>) -> Self {
        Self { tiers }
    }

    pub fn tiers(&self) -> &[SurchargeTier] {
        &self.tiers
    }

    /// Rate of the first tier whose limit is at or above `taxable_income`.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use salaryfy_core::{SurchargeTable, SurchargeTier};
    ///
    /// let table = SurchargeTable::new(vec![
    ///     SurchargeTier::up_to(dec!(5000000), dec!(0)),
    ///     SurchargeTier::above(dec!(0.10)),
    /// ]);
    ///
    /// assert_eq!(table.rate_for(dec!(5000000)), dec!(0));
    /// assert_eq!(table.rate_for(dec!(5000001)), dec!(0.10));
    /// ```
    pub fn rate_for(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        self.tiers
            .iter()
            .find(|tier| tier.income_limit.is_none_or(|limit| taxable_income <= limit))
            .map_or(Decimal::ZERO, |tier| tier.rate)
    }

    pub fn validate(
        &self,
        table: &'static str,
    ) -> Result<(), RatesError> {
        validate_ordered(
            table,
            self.tiers.iter().map(|t| (t.income_limit, t.rate)),
        )
    }
}

fn validate_ordered(
    table: &'static str,
    entries: impl ExactSizeIterator<Item = (Option<Decimal>, Decimal)>,
) -> Result<(), RatesError> {
    let count = entries.len();
    if count == 0 {
        return Err(RatesError::EmptyTable(table));
    }

    let mut previous: Option<Decimal> = None;
    for (index, (bound, rate)) in entries.enumerate() {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(RatesError::RateOutOfRange { table, rate });
        }

        let is_last = index + 1 == count;
        match (bound, is_last) {
            (None, true) => {}
            (None, false) => return Err(RatesError::UnboundedBeforeLast(table)),
            (Some(_), true) => return Err(RatesError::MissingUnboundedEntry(table)),
            (Some(bound), false) => {
                if bound < Decimal::ZERO || previous.is_some_and(|p| bound <= p) {
                    return Err(RatesError::BoundsNotAscending { table, bound });
                }
                previous = Some(bound);
            }
        }
    }

    Ok(())
}
