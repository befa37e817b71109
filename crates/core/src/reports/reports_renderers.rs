//! The built-in plain-text renderers.
//!
//! Each renderer lays out one document flavor as headed sections with
//! comfy-table tables, sized for terminals and email bodies alike.

use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::reports_model::{ReportFlavor, ReportPayload};
use super::reports_traits::ReportRenderer;
use crate::constants::{DISPLAY_DECIMAL_PRECISION, PROGRESS_DECIMAL_PRECISION};
use crate::errors::Result;

pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// UK inheritance-tax figures used by the estate report.
const INHERITANCE_TAX_ALLOWANCE: Decimal = dec!(325000);
const INHERITANCE_TAX_RATE: Decimal = dec!(0.4);

fn build_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(headers.iter().map(|h| Cell::new(*h)));
    for row in rows {
        table.add_row(row.into_iter().map(Cell::new));
    }
    table
}

fn fmt_money(amount: Decimal, currency: &str) -> String {
    format!("{} {}", currency, amount.round_dp(DISPLAY_DECIMAL_PRECISION))
}

fn fmt_percent(value: Decimal) -> String {
    format!("{}%", value.round_dp(PROGRESS_DECIMAL_PRECISION))
}

fn push_title(out: &mut String, title: &str, payload: &ReportPayload) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&format!(
        "Prepared for: {} ({})\n",
        payload.user.full_name, payload.user.email
    ));
    out.push_str(&format!("Generated: {}\n", payload.generated_on));
}

fn push_section(out: &mut String, heading: &str) {
    out.push('\n');
    out.push_str(heading);
    out.push('\n');
}

fn push_table(out: &mut String, table: Table) {
    out.push_str(&table.to_string());
    out.push('\n');
}

fn checklist_row(document: &str, field: &Option<String>) -> Vec<String> {
    match field.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(detail) => vec![
            document.to_string(),
            "Recorded".to_string(),
            detail.to_string(),
        ],
        None => vec![document.to_string(), "Missing".to_string(), "-".to_string()],
    }
}

/// Net-worth statement: overview figures plus the allocation table.
pub struct WealthStatementRenderer;

impl ReportRenderer for WealthStatementRenderer {
    fn flavor(&self) -> ReportFlavor {
        ReportFlavor::WealthStatement
    }

    fn content_type(&self) -> &'static str {
        TEXT_CONTENT_TYPE
    }

    fn render(&self, payload: &ReportPayload) -> Result<Vec<u8>> {
        let currency = &payload.user.base_currency;
        let mut out = String::new();
        push_title(&mut out, "WEALTH STATEMENT", payload);
        if let Some(date) = payload.snapshot_date {
            out.push_str(&format!("Position as of: {}\n", date));
        }

        push_section(&mut out, "FINANCIAL OVERVIEW");
        push_table(
            &mut out,
            build_table(
                &["Measure", "Value"],
                vec![
                    vec![
                        "Total wealth".to_string(),
                        fmt_money(payload.total_wealth, currency),
                    ],
                    vec!["Assets tracked".to_string(), payload.asset_count.to_string()],
                    vec![
                        "Monthly income".to_string(),
                        fmt_money(payload.monthly.monthly_income, currency),
                    ],
                    vec![
                        "Monthly expenses".to_string(),
                        fmt_money(payload.monthly.monthly_expenses, currency),
                    ],
                    vec![
                        format!("Net cash flow ({} days)", payload.cash_flow.window_days),
                        fmt_money(payload.cash_flow.net_cash_flow, currency),
                    ],
                ],
            ),
        );

        push_section(&mut out, "ASSET ALLOCATION");
        let held: Vec<_> = payload
            .category_breakdown
            .iter()
            .filter(|(_, value)| !value.is_zero())
            .collect();
        if held.is_empty() {
            out.push_str("No assets recorded.\n");
        } else {
            let rows = held
                .iter()
                .map(|(category, value)| {
                    let share = if payload.total_wealth.is_zero() {
                        Decimal::ZERO
                    } else {
                        value / payload.total_wealth * dec!(100)
                    };
                    vec![
                        category.display_name().to_string(),
                        fmt_money(*value, currency),
                        fmt_percent(share),
                    ]
                })
                .collect();
            push_table(&mut out, build_table(&["Category", "Value", "Share"], rows));
        }

        Ok(out.into_bytes())
    }
}

/// Health report: overall score, per-dimension breakdown, milestones,
/// recommendations.
pub struct FinancialHealthRenderer;

impl ReportRenderer for FinancialHealthRenderer {
    fn flavor(&self) -> ReportFlavor {
        ReportFlavor::FinancialHealth
    }

    fn content_type(&self) -> &'static str {
        TEXT_CONTENT_TYPE
    }

    fn render(&self, payload: &ReportPayload) -> Result<Vec<u8>> {
        let health = &payload.health;
        let mut out = String::new();
        push_title(&mut out, "FINANCIAL HEALTH REPORT", payload);

        push_section(&mut out, "OVERALL");
        out.push_str(&format!(
            "Score: {} / 100 ({})\n",
            health.overall_score.round_dp(PROGRESS_DECIMAL_PRECISION),
            health.status.label()
        ));
        out.push_str(&format!(
            "Spending: {} of income\n",
            fmt_percent(health.expense_percentage)
        ));

        push_section(&mut out, "SCORE BREAKDOWN");
        let scores = &health.sub_scores;
        let rows = [
            ("Emergency fund", scores.emergency_fund),
            ("Expense ratio", scores.expense_ratio),
            ("Milestones", scores.milestones),
            ("Insurance", scores.insurance),
            ("Diversification", scores.diversification),
            ("Estate planning", scores.estate_planning),
        ]
        .iter()
        .map(|(dimension, score)| {
            vec![
                dimension.to_string(),
                score.round_dp(PROGRESS_DECIMAL_PRECISION).to_string(),
            ]
        })
        .collect();
        push_table(&mut out, build_table(&["Dimension", "Score"], rows));

        push_section(&mut out, "MILESTONES");
        if payload.milestones.is_empty() {
            out.push_str("No milestones recorded.\n");
        } else {
            let rows = payload
                .milestones
                .iter()
                .map(|milestone| {
                    vec![
                        milestone.title.clone(),
                        fmt_percent(milestone.progress_percentage),
                        if milestone.is_completed {
                            "Completed".to_string()
                        } else {
                            "In progress".to_string()
                        },
                    ]
                })
                .collect();
            push_table(
                &mut out,
                build_table(&["Milestone", "Progress", "Status"], rows),
            );
        }

        push_section(&mut out, "RECOMMENDATIONS");
        if health.recommendations.is_empty() {
            out.push_str("No action needed.\n");
        } else {
            for (index, advice) in health.recommendations.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", index + 1, advice));
            }
        }

        Ok(out.into_bytes())
    }
}

/// Estate-planning readiness: tax position, document checklist, insurance
/// cover.
pub struct EstatePlanningRenderer;

impl ReportRenderer for EstatePlanningRenderer {
    fn flavor(&self) -> ReportFlavor {
        ReportFlavor::EstatePlanning
    }

    fn content_type(&self) -> &'static str {
        TEXT_CONTENT_TYPE
    }

    fn render(&self, payload: &ReportPayload) -> Result<Vec<u8>> {
        let currency = &payload.user.base_currency;
        let taxable = (payload.total_wealth - INHERITANCE_TAX_ALLOWANCE).max(Decimal::ZERO);
        let potential_tax = taxable * INHERITANCE_TAX_RATE;

        let mut out = String::new();
        push_title(&mut out, "ESTATE PLANNING REPORT", payload);

        push_section(&mut out, "ESTATE VALUE");
        push_table(
            &mut out,
            build_table(
                &["Measure", "Value"],
                vec![
                    vec![
                        "Estate value".to_string(),
                        fmt_money(payload.total_wealth, currency),
                    ],
                    vec![
                        "Tax-free allowance".to_string(),
                        fmt_money(INHERITANCE_TAX_ALLOWANCE, currency),
                    ],
                    vec!["Taxable amount".to_string(), fmt_money(taxable, currency)],
                    vec![
                        "Potential inheritance tax (40%)".to_string(),
                        fmt_money(potential_tax, currency),
                    ],
                ],
            ),
        );

        push_section(&mut out, "DOCUMENT CHECKLIST");
        push_table(
            &mut out,
            build_table(
                &["Document", "Status", "Detail"],
                vec![
                    checklist_row("Will", &payload.user.will_location),
                    checklist_row("Solicitor", &payload.user.solicitor_name),
                    checklist_row(
                        "Power of attorney",
                        &payload.user.power_of_attorney_location,
                    ),
                    checklist_row("Insurance notes", &payload.user.insurance_notes),
                ],
            ),
        );

        push_section(&mut out, "INSURANCE COVER");
        let insurance = &payload.insurance;
        push_table(
            &mut out,
            build_table(
                &["Measure", "Value"],
                vec![
                    vec![
                        "Active policies".to_string(),
                        insurance.total_policies.to_string(),
                    ],
                    vec![
                        "Monthly premiums".to_string(),
                        fmt_money(insurance.total_monthly_premium, currency),
                    ],
                    vec![
                        "Total coverage".to_string(),
                        fmt_money(insurance.total_coverage, currency),
                    ],
                    vec![
                        "Coverage score".to_string(),
                        fmt_percent(insurance.coverage_percentage),
                    ],
                    vec![
                        "Protection gap".to_string(),
                        fmt_percent(insurance.protection_gap),
                    ],
                ],
            ),
        );

        Ok(out.into_bytes())
    }
}

/// All built-in renderers, one per flavor.
pub fn builtin_renderers() -> Vec<Box<dyn ReportRenderer>> {
    vec![
        Box::new(WealthStatementRenderer),
        Box::new(FinancialHealthRenderer),
        Box::new(EstatePlanningRenderer),
    ]
}
