//! CSV loader for batch tax comparisons.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter.
//!
//! | Column          | Required | Notes |
//! |-----------------|----------|-------|
//! | `annual_income` | yes      | Amount; commas and `₹` are accepted |
//! | `age`           | no       | `<60`, `60-80` or `>80`; empty means `<60` |
//! | `deduction_80c` | no       | Amount; empty means 0 |
//! | `deduction_80d` | no       | Amount; empty means 0 |
//!
//! ```csv
//! annual_income,age,deduction_80c,deduction_80d
//! "12,00,000",<60,150000,25000
//! 900000,60-80,,
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use salaryfy_core::{AgeCategory, ParseAmountError, TaxRegimeInput, parse_amount};
use serde::Deserialize;
use tracing::debug;

// ---------------------------------------------------------------------------
// Row as it appears in the file
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    annual_income: String,
    age: Option<String>,
    deduction_80c: Option<String>,
    deduction_80d: Option<String>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("cannot read batch file: {0}")]
    Io(#[from] std::io::Error),

    /// Structural CSV problem: missing required column, ragged row, etc.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// `row` is 1-based, header excluded.
    #[error("unrecognised age category '{value}' on row {row}")]
    InvalidAge { value: String, row: usize },

    #[error("bad {column} on row {row}: {source}")]
    InvalidAmount {
        column: &'static str,
        row: usize,
        #[source]
        source: ParseAmountError,
    },
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

fn amount(
    cell: Option<&str>,
    column: &'static str,
    row: usize,
) -> Result<Decimal, BatchError> {
    parse_amount(cell.unwrap_or_default())
        .map_err(|source| BatchError::InvalidAmount { column, row, source })
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<TaxRegimeInput, BatchError> {
    let age = match row.age.as_deref() {
        None | Some("") => AgeCategory::default(),
        Some(label) => AgeCategory::parse(label).ok_or_else(|| BatchError::InvalidAge {
            value: label.to_string(),
            row: row_number,
        })?,
    };

    Ok(TaxRegimeInput {
        annual_income: amount(Some(&row.annual_income), "annual_income", row_number)?,
        age,
        deduction_80c: amount(row.deduction_80c.as_deref(), "deduction_80c", row_number)?,
        deduction_80d: amount(row.deduction_80d.as_deref(), "deduction_80d", row_number)?,
    })
}

/// Parses CSV text into tax inputs, in file order.
///
/// # Errors
///
/// Stops at the first row that fails and reports its 1-based number.
pub fn load_from_str(input: &str) -> Result<Vec<TaxRegimeInput>, BatchError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let inputs = reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(rows = inputs.len(), "batch input parsed");
    Ok(inputs)
}

/// Reads a file from disk and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<TaxRegimeInput>, BatchError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}
