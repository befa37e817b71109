use std::sync::Arc;

use chrono::{Duration, Utc};
use log::debug;

use super::wealth_model::{WealthSnapshot, WealthSummary};
use super::wealth_traits::{WealthRepositoryTrait, WealthServiceTrait};
use crate::assets::{category_totals, AssetCategory, AssetRepositoryTrait};
use crate::constants::DEFAULT_HISTORY_DAYS;
use crate::errors::Result;

/// Recalculates and serves wealth snapshots.
///
/// The recompute is deterministic given ledger state: six accumulators over
/// the user's assets, unrecognized categories skipped, total derived from the
/// subtotals, upserted on the composite (user, today) key.
pub struct WealthService {
    asset_repo: Arc<dyn AssetRepositoryTrait>,
    wealth_repo: Arc<dyn WealthRepositoryTrait>,
}

impl WealthService {
    pub fn new(
        asset_repo: Arc<dyn AssetRepositoryTrait>,
        wealth_repo: Arc<dyn WealthRepositoryTrait>,
    ) -> Self {
        Self {
            asset_repo,
            wealth_repo,
        }
    }
}

impl WealthServiceTrait for WealthService {
    fn recompute(&self, user_id: &str) -> Result<WealthSnapshot> {
        let assets = self.asset_repo.load_assets(user_id)?;
        let totals = category_totals(&assets);

        let today = Utc::now().date_naive();
        let snapshot = WealthSnapshot::from_totals(user_id, today, &totals);
        debug!(
            "Recomputed wealth for user {}: total {} across {} assets",
            user_id,
            snapshot.total_wealth,
            assets.len()
        );

        self.wealth_repo.upsert_snapshot(&snapshot)
    }

    fn get_summary(&self, user_id: &str) -> Result<WealthSummary> {
        let assets = self.asset_repo.load_assets(user_id)?;
        let totals = category_totals(&assets);
        let amount = |category: AssetCategory| totals.get(&category).copied().unwrap_or_default();

        let last_updated = self
            .wealth_repo
            .get_latest_snapshot(user_id)?
            .map(|snapshot| snapshot.snapshot_date);

        Ok(WealthSummary {
            total_wealth: AssetCategory::ALL.iter().map(|&c| amount(c)).sum(),
            cash_savings: amount(AssetCategory::CashSavings),
            stocks_securities: amount(AssetCategory::StocksSecurities),
            real_estate: amount(AssetCategory::RealEstate),
            retirement_accounts: amount(AssetCategory::RetirementAccounts),
            business_assets: amount(AssetCategory::BusinessAssets),
            other_investments: amount(AssetCategory::OtherInvestments),
            asset_count: assets.len(),
            last_updated,
        })
    }

    fn get_history(&self, user_id: &str, days: i64) -> Result<Vec<WealthSnapshot>> {
        let window = if days > 0 { days } else { DEFAULT_HISTORY_DAYS };
        let from = Utc::now().date_naive() - Duration::days(window);
        self.wealth_repo.load_snapshots_since(user_id, from)
    }

    fn get_latest_snapshot(&self, user_id: &str) -> Result<Option<WealthSnapshot>> {
        self.wealth_repo.get_latest_snapshot(user_id)
    }
}
