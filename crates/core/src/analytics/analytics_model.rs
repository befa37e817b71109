//! Dashboard response types.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::journal::CashFlowEntry;
use crate::wealth::WealthSnapshot;

/// Headline figures for the dashboard, all derived from stored data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub current_wealth: Decimal,
    /// Change against the oldest snapshot in the trailing window; zero when
    /// no history exists yet.
    pub wealth_change_3m: Decimal,
    pub wealth_change_percent: Decimal,
    pub total_income_3m: Decimal,
    pub total_expenses_3m: Decimal,
    pub net_savings_3m: Decimal,
    /// Months of average expenses covered by cash savings.
    pub emergency_fund_months: Decimal,
}

/// One dated point of the wealth trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WealthTrendPoint {
    pub date: NaiveDate,
    pub total_wealth: Decimal,
    pub cash_savings: Decimal,
    pub stocks_securities: Decimal,
    pub real_estate: Decimal,
    pub retirement_accounts: Decimal,
    pub business_assets: Decimal,
    pub other_investments: Decimal,
}

impl From<&WealthSnapshot> for WealthTrendPoint {
    fn from(snapshot: &WealthSnapshot) -> Self {
        Self {
            date: snapshot.snapshot_date,
            total_wealth: snapshot.total_wealth,
            cash_savings: snapshot.cash_savings,
            stocks_securities: snapshot.stocks_securities,
            real_estate: snapshot.real_estate,
            retirement_accounts: snapshot.retirement_accounts,
            business_assets: snapshot.business_assets,
            other_investments: snapshot.other_investments,
        }
    }
}

/// The full dashboard payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub metrics: DashboardMetrics,
    /// Snapshots over the trailing window, ascending by date.
    pub wealth_trend: Vec<WealthTrendPoint>,
    /// Category display name to value, held categories only.
    pub top_asset_categories: HashMap<String, Decimal>,
    pub recent_events: Vec<CashFlowEntry>,
}
