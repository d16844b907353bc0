pub mod calculations;
pub mod format;
pub mod input;
pub mod models;

pub use calculations::{
    compare_regimes, compute_salary_breakdown, compute_tax_new_regime, compute_tax_old_regime,
    default_rates,
};
pub use format::format_inr;
pub use input::{ParseAmountError, parse_amount, sanitize_amount};
pub use models::*;
