use std::fmt::Write;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use taxdoc_core::calculations::common::round_half_up;
use taxdoc_core::{IncomeAggregate, TaxOutcome};

/// Taxpayer identity block printed at the top of the form facsimile.
///
/// Field names follow the personal-information form's JSON schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxpayerInfo {
    pub first_name: String,
    pub last_name: String,
    pub ssn: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Renders the simplified Form 1040 facsimile as plain text.
///
/// Section layout mirrors the on-screen summary: filing status, taxpayer
/// information, income, deductions, tax and payments. This is the only
/// place amounts are rounded (half-up, to cents).
pub fn render_form_1040(
    taxpayer: &TaxpayerInfo,
    totals: &IncomeAggregate,
    outcome: &TaxOutcome,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Form 1040 - U.S. Individual Income Tax Return");
    let _ = writeln!(out);
    let _ = writeln!(out, "Filing Status: {}", outcome.filing_status.as_str());
    let _ = writeln!(out);
    let _ = writeln!(out, "Taxpayer Information");
    let _ = writeln!(out, "  {} {}    SSN: {}", taxpayer.first_name, taxpayer.last_name, taxpayer.ssn);
    let _ = writeln!(
        out,
        "  {}    {}, {} {}",
        taxpayer.address, taxpayer.city, taxpayer.state, taxpayer.zip_code
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Income");
    let _ = writeln!(out, "  Wages, salaries, tips              {}", format_usd(totals.total_wages));
    let _ = writeln!(
        out,
        "  Nonemployee compensation (1099-NEC) {}",
        format_usd(totals.total_nonemployee_compensation)
    );
    let _ = writeln!(
        out,
        "  Interest income (1099-INT)         {}",
        format_usd(totals.total_interest_income)
    );
    let _ = writeln!(out, "  Gross income                       {}", format_usd(outcome.gross_income));
    let _ = writeln!(out);
    let _ = writeln!(out, "Deductions");
    let _ = writeln!(out, "  Standard Deduction                 {}", format_usd(outcome.deduction));
    let _ = writeln!(out, "  Taxable Income                     {}", format_usd(outcome.taxable_income));
    let _ = writeln!(out);
    let _ = writeln!(out, "Tax and Payments");
    let _ = writeln!(out, "  Tax Liability                      {}", format_usd(outcome.tax_liability));
    let _ = writeln!(
        out,
        "  Federal Income Tax Withheld        {}",
        format_usd(outcome.total_federal_income_tax_withheld)
    );
    if outcome.refund_or_amount_owed >= Decimal::ZERO {
        let _ = writeln!(out, "  Refund: {}", format_usd(outcome.refund_or_amount_owed));
    } else {
        let _ = writeln!(out, "  Owed: {}", format_usd(outcome.refund_or_amount_owed));
    }

    out
}

/// Formats a dollar amount with thousands separators and cents, e.g.
/// `$60,500.00`. Sign is dropped; the caller labels refund vs. owed.
fn format_usd(value: Decimal) -> String {
    let rounded = round_half_up(value).abs();
    let text = format!("{rounded:.2}");
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("${grouped}.{cents}")
}
