mod age_category;
mod comparison;
mod regime_rates;
mod salary_breakdown;
mod slab_table;
mod tax_regime;

pub use age_category::AgeCategory;
pub use comparison::{Recommendation, RegimeComparison};
pub use regime_rates::{
    ExemptionLimits, NewRegimeRates, OldRegimeRates, RatesError, Rebate, RegimeRates,
    SalaryStructure,
};
pub use salary_breakdown::{SalaryBreakdownResult, SalaryComponent};
pub use slab_table::{SlabBand, SlabTable, SurchargeTable, SurchargeTier};
pub use tax_regime::{TaxRegimeInput, TaxRegimeResult};
