//! Wealth snapshot domain models.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::AssetCategory;

/// Dated aggregate of one user's asset categories.
///
/// One row per (user, date); `total_wealth` always equals the sum of the six
/// subtotals because every write goes through [`WealthSnapshot::from_totals`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WealthSnapshot {
    /// "{user_id}_{YYYY-MM-DD}". Doubles as the upsert key for today's row.
    pub id: String,
    pub user_id: String,
    pub snapshot_date: NaiveDate,
    pub cash_savings: Decimal,
    pub stocks_securities: Decimal,
    pub real_estate: Decimal,
    pub retirement_accounts: Decimal,
    pub business_assets: Decimal,
    pub other_investments: Decimal,
    pub total_wealth: Decimal,
    pub calculated_at: NaiveDateTime,
}

impl WealthSnapshot {
    pub fn snapshot_id(user_id: &str, date: NaiveDate) -> String {
        format!("{}_{}", user_id, date.format("%Y-%m-%d"))
    }

    /// Builds the snapshot for `date` from per-category totals. Categories
    /// missing from the map contribute zero; `total_wealth` is derived here,
    /// never taken from the caller.
    pub fn from_totals(
        user_id: &str,
        date: NaiveDate,
        totals: &HashMap<AssetCategory, Decimal>,
    ) -> Self {
        let amount = |category: AssetCategory| totals.get(&category).copied().unwrap_or_default();

        let cash_savings = amount(AssetCategory::CashSavings);
        let stocks_securities = amount(AssetCategory::StocksSecurities);
        let real_estate = amount(AssetCategory::RealEstate);
        let retirement_accounts = amount(AssetCategory::RetirementAccounts);
        let business_assets = amount(AssetCategory::BusinessAssets);
        let other_investments = amount(AssetCategory::OtherInvestments);
        let total_wealth = cash_savings
            + stocks_securities
            + real_estate
            + retirement_accounts
            + business_assets
            + other_investments;

        Self {
            id: Self::snapshot_id(user_id, date),
            user_id: user_id.to_string(),
            snapshot_date: date,
            cash_savings,
            stocks_securities,
            real_estate,
            retirement_accounts,
            business_assets,
            other_investments,
            total_wealth,
            calculated_at: Utc::now().naive_utc(),
        }
    }

    pub fn category_amount(&self, category: AssetCategory) -> Decimal {
        match category {
            AssetCategory::CashSavings => self.cash_savings,
            AssetCategory::StocksSecurities => self.stocks_securities,
            AssetCategory::RealEstate => self.real_estate,
            AssetCategory::RetirementAccounts => self.retirement_accounts,
            AssetCategory::BusinessAssets => self.business_assets,
            AssetCategory::OtherInvestments => self.other_investments,
        }
    }

    /// Category/amount pairs in the fixed aggregation order.
    pub fn category_breakdown(&self) -> Vec<(AssetCategory, Decimal)> {
        AssetCategory::ALL
            .iter()
            .map(|&category| (category, self.category_amount(category)))
            .collect()
    }
}

// --- DB Representation ---

#[derive(Debug, Clone, Queryable, Identifiable, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::wealth_snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WealthSnapshotDB {
    pub id: String,
    pub user_id: String,
    // Stored as YYYY-MM-DD so lexicographic order is date order
    pub snapshot_date: String,
    pub cash_savings: String,
    pub stocks_securities: String,
    pub real_estate: String,
    pub retirement_accounts: String,
    pub business_assets: String,
    pub other_investments: String,
    pub total_wealth: String,
    pub calculated_at: NaiveDateTime,
}

fn parse_decimal_column(raw: &str, column: &str, snapshot_id: &str) -> Decimal {
    Decimal::from_str(raw).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse {} '{}' for snapshot {}: {}",
            column,
            raw,
            snapshot_id,
            e
        );
        Decimal::ZERO
    })
}

impl From<WealthSnapshotDB> for WealthSnapshot {
    fn from(db: WealthSnapshotDB) -> Self {
        Self {
            snapshot_date: NaiveDate::parse_from_str(&db.snapshot_date, "%Y-%m-%d")
                .unwrap_or_default(),
            cash_savings: parse_decimal_column(&db.cash_savings, "cash_savings", &db.id),
            stocks_securities: parse_decimal_column(
                &db.stocks_securities,
                "stocks_securities",
                &db.id,
            ),
            real_estate: parse_decimal_column(&db.real_estate, "real_estate", &db.id),
            retirement_accounts: parse_decimal_column(
                &db.retirement_accounts,
                "retirement_accounts",
                &db.id,
            ),
            business_assets: parse_decimal_column(&db.business_assets, "business_assets", &db.id),
            other_investments: parse_decimal_column(
                &db.other_investments,
                "other_investments",
                &db.id,
            ),
            total_wealth: parse_decimal_column(&db.total_wealth, "total_wealth", &db.id),
            calculated_at: db.calculated_at,
            id: db.id,
            user_id: db.user_id,
        }
    }
}

impl From<&WealthSnapshot> for WealthSnapshotDB {
    fn from(snapshot: &WealthSnapshot) -> Self {
        Self {
            id: snapshot.id.clone(),
            user_id: snapshot.user_id.clone(),
            snapshot_date: snapshot.snapshot_date.format("%Y-%m-%d").to_string(),
            cash_savings: snapshot.cash_savings.to_string(),
            stocks_securities: snapshot.stocks_securities.to_string(),
            real_estate: snapshot.real_estate.to_string(),
            retirement_accounts: snapshot.retirement_accounts.to_string(),
            business_assets: snapshot.business_assets.to_string(),
            other_investments: snapshot.other_investments.to_string(),
            total_wealth: snapshot.total_wealth.to_string(),
            calculated_at: snapshot.calculated_at,
        }
    }
}

/// Current totals computed from the live ledger, not from a stored snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WealthSummary {
    pub total_wealth: Decimal,
    pub cash_savings: Decimal,
    pub stocks_securities: Decimal,
    pub real_estate: Decimal,
    pub retirement_accounts: Decimal,
    pub business_assets: Decimal,
    pub other_investments: Decimal,
    pub asset_count: usize,
    /// Date of the most recent stored snapshot, if any.
    pub last_updated: Option<NaiveDate>,
}
