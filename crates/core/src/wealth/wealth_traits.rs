use chrono::NaiveDate;

use super::wealth_model::{WealthSnapshot, WealthSummary};
use crate::errors::Result;

/// Trait defining the contract for wealth snapshot persistence.
pub trait WealthRepositoryTrait: Send + Sync {
    /// Inserts or replaces the row keyed by the snapshot's composite id.
    /// Single statement, so two racing recomputes for the same (user, date)
    /// still leave exactly one row.
    fn upsert_snapshot(&self, snapshot: &WealthSnapshot) -> Result<WealthSnapshot>;
    fn get_latest_snapshot(&self, user_id: &str) -> Result<Option<WealthSnapshot>>;
    /// Snapshots dated on or after `from`, ascending by date.
    fn load_snapshots_since(&self, user_id: &str, from: NaiveDate) -> Result<Vec<WealthSnapshot>>;
}

/// Trait defining the contract for wealth aggregation operations.
pub trait WealthServiceTrait: Send + Sync {
    /// Recomputes today's snapshot from the live ledger and upserts it.
    fn recompute(&self, user_id: &str) -> Result<WealthSnapshot>;
    /// Per-category totals from the live ledger plus ledger size and the
    /// latest stored snapshot date.
    fn get_summary(&self, user_id: &str) -> Result<WealthSummary>;
    /// Stored snapshots for the trailing `days` window, ascending.
    fn get_history(&self, user_id: &str, days: i64) -> Result<Vec<WealthSnapshot>>;
    fn get_latest_snapshot(&self, user_id: &str) -> Result<Option<WealthSnapshot>>;
}
