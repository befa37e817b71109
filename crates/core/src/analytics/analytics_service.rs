use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::analytics_model::{Dashboard, DashboardMetrics, WealthTrendPoint};
use super::analytics_traits::AnalyticsServiceTrait;
use crate::assets::AssetCategory;
use crate::constants::{
    CASH_FLOW_WINDOW_DAYS, DASHBOARD_RECENT_EVENTS, DEFAULT_HISTORY_DAYS,
    PROGRESS_DECIMAL_PRECISION,
};
use crate::errors::Result;
use crate::journal::JournalServiceTrait;
use crate::wealth::{WealthSummary, WealthServiceTrait};

/// Computes the dashboard from the wealth and journal stores. No cached or
/// canned figures; every number traces back to user rows.
pub struct AnalyticsService {
    wealth_service: Arc<dyn WealthServiceTrait>,
    journal_service: Arc<dyn JournalServiceTrait>,
}

impl AnalyticsService {
    pub fn new(
        wealth_service: Arc<dyn WealthServiceTrait>,
        journal_service: Arc<dyn JournalServiceTrait>,
    ) -> Self {
        Self {
            wealth_service,
            journal_service,
        }
    }
}

fn category_pairs(summary: &WealthSummary) -> [(AssetCategory, Decimal); 6] {
    [
        (AssetCategory::CashSavings, summary.cash_savings),
        (AssetCategory::StocksSecurities, summary.stocks_securities),
        (AssetCategory::RealEstate, summary.real_estate),
        (AssetCategory::RetirementAccounts, summary.retirement_accounts),
        (AssetCategory::BusinessAssets, summary.business_assets),
        (AssetCategory::OtherInvestments, summary.other_investments),
    ]
}

impl AnalyticsServiceTrait for AnalyticsService {
    fn get_dashboard(&self, user_id: &str) -> Result<Dashboard> {
        let summary = self.wealth_service.get_summary(user_id)?;
        let history = self
            .wealth_service
            .get_history(user_id, DEFAULT_HISTORY_DAYS)?;
        let window = self
            .journal_service
            .window_totals(user_id, CASH_FLOW_WINDOW_DAYS)?;
        let recent_events = self
            .journal_service
            .recent_events(user_id, DASHBOARD_RECENT_EVENTS)?;

        let current_wealth = summary.total_wealth;
        let baseline = history.first().map(|snapshot| snapshot.total_wealth);
        let wealth_change_3m = baseline
            .map(|baseline| current_wealth - baseline)
            .unwrap_or_default();
        let wealth_change_percent = match baseline {
            Some(baseline) if baseline > Decimal::ZERO => {
                (wealth_change_3m / baseline * dec!(100)).round_dp(PROGRESS_DECIMAL_PRECISION)
            }
            _ => Decimal::ZERO,
        };

        let monthly_expenses = window.total_expenses / dec!(3);
        let emergency_fund_months = if monthly_expenses > Decimal::ZERO {
            (summary.cash_savings / monthly_expenses).round_dp(PROGRESS_DECIMAL_PRECISION)
        } else {
            Decimal::ZERO
        };

        let top_asset_categories = category_pairs(&summary)
            .into_iter()
            .filter(|(_, value)| !value.is_zero())
            .map(|(category, value)| (category.display_name().to_string(), value))
            .collect();

        debug!(
            "Dashboard for user {}: wealth {}, {} trend points",
            user_id,
            current_wealth,
            history.len()
        );

        Ok(Dashboard {
            metrics: DashboardMetrics {
                current_wealth,
                wealth_change_3m,
                wealth_change_percent,
                total_income_3m: window.total_income,
                total_expenses_3m: window.total_expenses,
                net_savings_3m: window.net_cash_flow,
                emergency_fund_months,
            },
            wealth_trend: history.iter().map(WealthTrendPoint::from).collect(),
            top_asset_categories,
            recent_events,
        })
    }
}
