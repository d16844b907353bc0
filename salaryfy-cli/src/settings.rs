//! Rate overrides loaded from a TOML file.
//!
//! The file maps onto [`RegimeRates`]; any key left out keeps its built-in
//! value. Slab and surcharge arrays replace the built-in table as a whole.
//! A `[*.rebate]` table merges key by key with that regime's rebate;
//! `max_rebate = "none"` removes the cap.
//!
//! ```toml
//! fiscal_year = "2025-26"
//!
//! [new_regime]
//! standard_deduction = 75000
//!
//! [[new_regime.slabs]]
//! upper_bound = 400000
//! rate = 0
//!
//! [[new_regime.slabs]]
//! rate = 0.30
//! ```

use std::path::{Path, PathBuf};

use salaryfy_core::{RatesError, RegimeRates};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read rates file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed rates file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid rates: {0}")]
    Invalid(#[from] RatesError),
}

/// Parses and validates rate overrides from TOML text.
pub fn parse_rates(text: &str) -> Result<RegimeRates, SettingsError> {
    let rates: RegimeRates = toml::from_str(text)?;
    rates.validate()?;
    Ok(rates)
}

/// Reads, parses and validates a rates override file.
pub fn load_rates(path: &Path) -> Result<RegimeRates, SettingsError> {
    let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rates = parse_rates(&text)?;

    info!(path = %path.display(), fiscal_year = %rates.fiscal_year, "loaded rate overrides");
    Ok(rates)
}

/// Renders a rate set as TOML, suitable as a starting point for an override
/// file.
pub fn render_rates(rates: &RegimeRates) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(rates)
}
