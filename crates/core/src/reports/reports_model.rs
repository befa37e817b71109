//! Report payload and flavor types.
//!
//! A [`ReportPayload`] is the fully-assembled, renderer-agnostic data
//! bundle for one user. Renderers consume it read-only; assembly knows
//! nothing about layout.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::assets::AssetCategory;
use crate::health::HealthReport;
use crate::insurance::InsuranceSummary;
use crate::journal::{CashFlowWindow, MonthlyCashFlow};
use crate::milestones::MilestoneView;
use crate::users::User;

/// The report documents the service can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFlavor {
    WealthStatement,
    FinancialHealth,
    EstatePlanning,
}

impl ReportFlavor {
    pub const ALL: [ReportFlavor; 3] = [
        ReportFlavor::WealthStatement,
        ReportFlavor::FinancialHealth,
        ReportFlavor::EstatePlanning,
    ];

    /// Key used in request paths and serialized payloads.
    pub const fn as_path_key(&self) -> &'static str {
        match self {
            ReportFlavor::WealthStatement => "wealth-statement",
            ReportFlavor::FinancialHealth => "financial-health",
            ReportFlavor::EstatePlanning => "estate-planning",
        }
    }

    pub fn from_path_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|flavor| flavor.as_path_key() == key)
    }

    /// Stem for generated filenames, dated by the caller.
    pub const fn file_stem(&self) -> &'static str {
        match self {
            ReportFlavor::WealthStatement => "wealth_statement",
            ReportFlavor::FinancialHealth => "financial_health_report",
            ReportFlavor::EstatePlanning => "estate_planning_report",
        }
    }
}

/// Display-only slice of the user record carried into reports.
#[derive(Debug, Clone, Default)]
pub struct ReportUser {
    pub full_name: String,
    pub email: String,
    pub base_currency: String,
    pub will_location: Option<String>,
    pub solicitor_name: Option<String>,
    pub power_of_attorney_location: Option<String>,
    pub insurance_notes: Option<String>,
}

impl From<User> for ReportUser {
    fn from(user: User) -> Self {
        Self {
            full_name: user.full_name,
            email: user.email,
            base_currency: user.base_currency,
            will_location: user.will_location,
            solicitor_name: user.solicitor_name,
            power_of_attorney_location: user.power_of_attorney_location,
            insurance_notes: user.insurance_notes,
        }
    }
}

/// Everything a renderer needs for one document.
///
/// Sections that failed to aggregate arrive zeroed or empty rather than
/// aborting the whole report.
#[derive(Debug, Clone)]
pub struct ReportPayload {
    pub user: ReportUser,
    pub generated_on: NaiveDate,
    pub total_wealth: Decimal,
    /// Per-category totals in canonical category order.
    pub category_breakdown: Vec<(AssetCategory, Decimal)>,
    pub asset_count: usize,
    /// Date of the snapshot the totals came from, when one existed.
    pub snapshot_date: Option<NaiveDate>,
    pub cash_flow: CashFlowWindow,
    pub monthly: MonthlyCashFlow,
    pub milestones: Vec<MilestoneView>,
    pub insurance: InsuranceSummary,
    pub health: HealthReport,
}

/// A rendered document plus the metadata the HTTP layer needs to serve it.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub flavor: ReportFlavor,
    pub content_type: &'static str,
    pub filename: String,
    pub bytes: Vec<u8>,
}
