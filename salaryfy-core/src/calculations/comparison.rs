use tracing::info;

use super::{NewRegimeCalculator, OldRegimeCalculator};
use crate::models::{Recommendation, RegimeComparison, RegimeRates, TaxRegimeInput};

/// Runs one input through both regimes and picks the cheaper one.
#[derive(Debug, Clone)]
pub struct RegimeComparator<'a> {
    rates: &'a RegimeRates,
}

impl<'a> RegimeComparator<'a> {
    pub fn new(rates: &'a RegimeRates) -> Self {
        Self { rates }
    }

    pub fn compare(
        &self,
        input: &TaxRegimeInput,
    ) -> RegimeComparison {
        let old = OldRegimeCalculator::new(self.rates).calculate(input);
        let new = NewRegimeCalculator::new(self.rates).calculate(input);

        let recommendation = match old.total_tax_liability.cmp(&new.total_tax_liability) {
            std::cmp::Ordering::Less => Recommendation::Old,
            std::cmp::Ordering::Greater => Recommendation::New,
            std::cmp::Ordering::Equal => Recommendation::Either,
        };
        let savings = (old.total_tax_liability - new.total_tax_liability).abs();

        info!(
            recommendation = recommendation.label(),
            %savings,
            "regime comparison complete"
        );

        RegimeComparison {
            old,
            new,
            recommendation,
            savings,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::AgeCategory;

    fn compare(input: &TaxRegimeInput) -> RegimeComparison {
        let rates = RegimeRates::default();
        RegimeComparator::new(&rates).compare(input)
    }

    #[test]
    fn new_regime_wins_without_deductions() {
        let result = compare(&TaxRegimeInput::with_income(dec!(1200000)));

        // old: taxable 1,150,000 -> 157,500 + cess 6,300
        // new: taxable 1,125,000 -> 68,750 + cess 2,750
        assert_eq!(result.old.total_tax_liability, dec!(163800));
        assert_eq!(result.new.total_tax_liability, dec!(71500));
        assert_eq!(result.recommendation, Recommendation::New);
        assert_eq!(result.savings, dec!(92300));
    }

    #[test]
    fn both_regimes_zero_is_either() {
        let result = compare(&TaxRegimeInput::with_income(dec!(500000)));

        assert_eq!(result.recommendation, Recommendation::Either);
        assert_eq!(result.savings, dec!(0));
    }

    #[test]
    fn old_regime_wins_with_large_deductions() {
        // old: taxable 1,000,000 for a super senior -> 62,500 + 2,500
        // new: taxable 1,525,000 -> 147,500 + 5,900
        let result = compare(&TaxRegimeInput {
            annual_income: dec!(1600000),
            age: AgeCategory::SuperSenior,
            deduction_80c: dec!(150000),
            deduction_80d: dec!(400000),
        });

        assert_eq!(result.old.total_tax_liability, dec!(65000));
        assert_eq!(result.new.total_tax_liability, dec!(153400));
        assert_eq!(result.recommendation, Recommendation::Old);
        assert_eq!(result.savings, dec!(88400));
    }
}
