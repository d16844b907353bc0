use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use salaryfy_core::calculations::{RegimeComparator, SalaryCalculator};
use salaryfy_core::{AgeCategory, RegimeRates, TaxRegimeInput, parse_amount, sanitize_amount};
use salaryfy_data::ArticleCatalog;
use tracing::{debug, info};

use crate::{batch, report, settings};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Salary breakdown and Indian income tax regime comparison.
#[derive(Debug, Parser)]
#[command(name = "salaryfy", version, about, long_about = None)]
pub struct Cli {
    /// TOML file overriding the built-in FY 2024-25 rates.
    #[arg(long, global = true)]
    pub rates: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `salaryfy_core=debug`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Hide log output on stderr. File logging is unaffected.
    #[arg(long, global = true, default_value_t = false)]
    pub quiet: bool,

    /// Reject malformed amounts instead of keeping only their digits.
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split an annual CTC into salary components.
    Salary {
        /// Annual cost to company, e.g. 1200000 or 12,00,000.
        ctc: String,

        /// Describe what each component means.
        #[arg(long, default_value_t = false)]
        explain: bool,
    },

    /// Compare old and new regime tax for one income.
    Tax {
        /// Gross annual income.
        income: String,

        /// Age category: <60, 60-80 or >80.
        #[arg(long, default_value = "<60")]
        age: String,

        /// Section 80C investments.
        #[arg(long = "80c", default_value = "0")]
        deduction_80c: String,

        /// Section 80D health insurance premiums.
        #[arg(long = "80d", default_value = "0")]
        deduction_80d: String,
    },

    /// Compare both regimes for every row of a CSV file.
    Batch {
        /// CSV with columns annual_income, age, deduction_80c, deduction_80d.
        file: PathBuf,
    },

    /// List articles, optionally from one category.
    Articles {
        #[arg(long)]
        category: Option<String>,
    },

    /// Print one article.
    Article { slug: String },

    /// Print the effective rates as TOML.
    Rates,
}

// ─── input handling ──────────────────────────────────────────────────────────

fn read_amount(
    raw: &str,
    what: &str,
    strict: bool,
) -> Result<Decimal> {
    if strict {
        parse_amount(raw).with_context(|| format!("invalid {what}"))
    } else {
        Ok(sanitize_amount(raw))
    }
}

fn read_age(
    raw: &str,
    strict: bool,
) -> Result<AgeCategory> {
    if strict {
        AgeCategory::parse(raw)
            .with_context(|| format!("unknown age category '{raw}', expected <60, 60-80 or >80"))
    } else {
        Ok(AgeCategory::from_label(raw))
    }
}

fn load_rates(cli: &Cli) -> Result<RegimeRates> {
    match &cli.rates {
        Some(path) => settings::load_rates(path)
            .with_context(|| format!("Failed to load rates: {}", path.display())),
        None => Ok(RegimeRates::default()),
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

/// Runs one command, writing its report to `out`.
pub fn run(
    cli: &Cli,
    out: &mut dyn Write,
) -> Result<()> {
    let rates = load_rates(cli)?;
    debug!(fiscal_year = %rates.fiscal_year, "rates ready");

    match &cli.command {
        Command::Salary { ctc, explain } => {
            let ctc = read_amount(ctc, "CTC", cli.strict)?;
            let breakdown = SalaryCalculator::new(&rates).calculate(ctc);
            write!(out, "{}", report::render_salary(&breakdown, *explain))?;
        }

        Command::Tax {
            income,
            age,
            deduction_80c,
            deduction_80d,
        } => {
            let input = TaxRegimeInput {
                annual_income: read_amount(income, "income", cli.strict)?,
                age: read_age(age, cli.strict)?,
                deduction_80c: read_amount(deduction_80c, "80C deduction", cli.strict)?,
                deduction_80d: read_amount(deduction_80d, "80D deduction", cli.strict)?,
            };
            let comparison = RegimeComparator::new(&rates).compare(&input);
            write!(
                out,
                "{}",
                report::render_comparison(&input, &comparison, rates.cess_rate)
            )?;
        }

        Command::Batch { file } => {
            let inputs = batch::load_from_file(file)
                .with_context(|| format!("Failed to load batch file: {}", file.display()))?;

            let comparator = RegimeComparator::new(&rates);
            for (idx, input) in inputs.iter().enumerate() {
                let comparison = comparator.compare(input);
                writeln!(out, "{}", report::render_batch_line(idx + 1, input, &comparison))?;
            }
            info!(rows = inputs.len(), "batch complete");
        }

        Command::Articles { category } => {
            let catalog = ArticleCatalog::embedded().context("Failed to load article catalog")?;
            let categories = catalog.categories();
            match category {
                Some(wanted) => {
                    if !categories.contains(&wanted.as_str()) {
                        bail!(
                            "unknown category '{wanted}', expected one of: {}",
                            categories.join(", ")
                        );
                    }
                    write!(out, "{}", report::render_article_list(&catalog, [wanted.as_str()]))?;
                }
                None => {
                    write!(
                        out,
                        "{}",
                        report::render_article_list(&catalog, categories.iter().copied())
                    )?;
                }
            }
        }

        Command::Article { slug } => {
            let catalog = ArticleCatalog::embedded().context("Failed to load article catalog")?;
            let Some(article) = catalog.find(slug) else {
                bail!("no article with slug '{slug}'");
            };
            write!(out, "{}", report::render_article(article))?;
        }

        Command::Rates => {
            let text = settings::render_rates(&rates).context("Failed to render rates")?;
            write!(out, "{text}")?;
        }
    }

    Ok(())
}
