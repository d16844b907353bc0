use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TaxRegimeResult;

/// Which regime leaves the taxpayer with the smaller bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Old,
    New,
    /// Both regimes produce the same liability.
    Either,
}

impl Recommendation {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Old => "Old Regime",
            Self::New => "New Regime",
            Self::Either => "Either Regime",
        }
    }
}

/// Old and new regime results for the same input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeComparison {
    pub old: TaxRegimeResult,
    pub new: TaxRegimeResult,
    pub recommendation: Recommendation,

    /// Absolute difference between the two total liabilities.
    pub savings: Decimal,
}
