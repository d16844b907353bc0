//! Plain-text rendering of calculator results.

use std::fmt::Write;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use salaryfy_core::{
    Recommendation, RegimeComparison, SalaryBreakdownResult, SalaryComponent, TaxRegimeInput,
    TaxRegimeResult, format_inr,
};
use salaryfy_data::{Article, ArticleCatalog};

const LABEL_WIDTH: usize = 30;
const VALUE_WIDTH: usize = 16;
const BAR_WIDTH: usize = 40;

fn row(
    out: &mut String,
    label: &str,
    value: Decimal,
) {
    let _ = writeln!(out, "{label:<LABEL_WIDTH$}{:>VALUE_WIDTH$}", format_inr(value));
}

/// Breakdown table, CTC composition bars and, with `explain`, what each
/// component means.
pub fn render_salary(
    breakdown: &SalaryBreakdownResult,
    explain: bool,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Salary Breakdown");
    for component in SalaryComponent::all() {
        row(&mut out, component.label(), breakdown.amount(*component));
    }
    let _ = writeln!(
        out,
        "{:<LABEL_WIDTH$}{:>VALUE_WIDTH$}",
        "Monthly Take-Home (Pre-Tax)",
        format_inr(breakdown.take_home_pre_tax / Decimal::from(12))
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "CTC Composition");
    let parts = breakdown.chart_components();
    let largest = parts.iter().map(|(_, v)| *v).max().unwrap_or_default();
    for (component, value) in &parts {
        let bar = if largest.is_zero() {
            0
        } else {
            (*value * Decimal::from(BAR_WIDTH) / largest)
                .round()
                .to_usize()
                .unwrap_or(0)
        };
        let _ = writeln!(
            out,
            "{:<LABEL_WIDTH$}{:>VALUE_WIDTH$}  {}",
            component.label(),
            format_inr(*value),
            "#".repeat(bar)
        );
    }

    if explain {
        let _ = writeln!(out);
        for component in SalaryComponent::all() {
            let _ = writeln!(out, "{}: {}", component.label(), component.description());
        }
    }

    out
}

fn regime_block(
    out: &mut String,
    title: &str,
    result: &TaxRegimeResult,
    cess_label: &str,
) {
    let _ = writeln!(out, "{title}");
    row(out, "Taxable Income", result.taxable_income);
    row(out, "Income Tax", result.income_tax);
    row(out, "Surcharge", result.surcharge);
    row(out, cess_label, result.cess);
    row(out, "Final Tax Liability", result.total_tax_liability);
}

/// Cess row label carrying the effective rate, e.g. `(4%)`.
fn cess_label(cess_rate: Decimal) -> String {
    format!("Health & Education Cess ({}%)", (cess_rate * Decimal::ONE_HUNDRED).normalize())
}

/// Recommendation headline plus the saving, if any.
pub fn recommendation_text(comparison: &RegimeComparison) -> String {
    match comparison.recommendation {
        Recommendation::Either => "Both regimes result in similar tax.".to_string(),
        rec => format!(
            "{} likely saves you more. You save approximately {} with the {}.",
            rec.label(),
            format_inr(comparison.savings),
            rec.label()
        ),
    }
}

/// Both regimes side by side, headed by the inputs. `cess_rate` is the rate
/// the comparison was computed with.
pub fn render_comparison(
    input: &TaxRegimeInput,
    comparison: &RegimeComparison,
    cess_rate: Decimal,
) -> String {
    let cess_label = cess_label(cess_rate);
    let mut out = String::new();

    let _ = writeln!(out, "Inputs");
    row(&mut out, "Gross Annual Income", input.annual_income);
    row(&mut out, "Section 80C", input.deduction_80c);
    row(&mut out, "Section 80D", input.deduction_80d);
    let _ = writeln!(out, "{:<LABEL_WIDTH$}{:>VALUE_WIDTH$}", "Age Category", input.age.label());
    let _ = writeln!(out);

    regime_block(&mut out, "Old Regime", &comparison.old, &cess_label);
    let _ = writeln!(out);
    regime_block(&mut out, "New Regime", &comparison.new, &cess_label);
    let _ = writeln!(out);

    let _ = writeln!(out, "Recommendation: {}", recommendation_text(comparison));
    out
}

/// One summary line per batch row.
pub fn render_batch_line(
    row_number: usize,
    input: &TaxRegimeInput,
    comparison: &RegimeComparison,
) -> String {
    format!(
        "{row_number:>4}  income {:>14}  age {:<5}  old {:>12}  new {:>12}  -> {} (saves {})",
        format_inr(input.annual_income),
        input.age.as_str(),
        format_inr(comparison.old.total_tax_liability),
        format_inr(comparison.new.total_tax_liability),
        comparison.recommendation.label(),
        format_inr(comparison.savings),
    )
}

/// Slug, read time and title of every article, grouped by category.
pub fn render_article_list<'a>(
    catalog: &ArticleCatalog,
    categories: impl IntoIterator<Item = &'a str>,
) -> String {
    let mut out = String::new();
    for category in categories {
        let _ = writeln!(out, "{category}");
        for article in catalog.by_category(category) {
            let _ = writeln!(
                out,
                "  {:<28} {:<12} {}",
                article.slug, article.read_time, article.title
            );
        }
    }
    out
}

pub fn render_article(article: &Article) -> String {
    format!(
        "{}\n{} | {}\n\n{}\n\n{}\n",
        article.title, article.category, article.read_time, article.excerpt, article.content
    )
}
