use chrono::NaiveDate;

use super::journal_model::{
    CashFlowEntry, CashFlowEvent, CashFlowEventUpdate, CashFlowKind, CashFlowWindow,
    MonthlyCashFlow, NewCashFlowEvent,
};
use crate::errors::Result;

/// Trait defining the contract for journal persistence. Every method is
/// scoped to one side of the journal via `kind`.
pub trait JournalRepositoryTrait: Send + Sync {
    /// Loads all events of one kind for a user, newest first.
    fn load_events(&self, kind: CashFlowKind, user_id: &str) -> Result<Vec<CashFlowEvent>>;
    fn get_event(&self, kind: CashFlowKind, user_id: &str, event_id: &str)
        -> Result<CashFlowEvent>;
    fn insert_new_event(&self, kind: CashFlowKind, event: CashFlowEvent) -> Result<CashFlowEvent>;
    fn update_event(&self, kind: CashFlowKind, event: CashFlowEvent) -> Result<CashFlowEvent>;
    fn delete_event(&self, kind: CashFlowKind, user_id: &str, event_id: &str) -> Result<usize>;
    /// Events of one kind dated on or after `from`, ascending by date.
    fn load_events_since(
        &self,
        kind: CashFlowKind,
        user_id: &str,
        from: NaiveDate,
    ) -> Result<Vec<CashFlowEvent>>;
}

/// Trait defining the contract for journal operations.
pub trait JournalServiceTrait: Send + Sync {
    fn get_events(&self, kind: CashFlowKind, user_id: &str) -> Result<Vec<CashFlowEvent>>;
    fn create_event(
        &self,
        kind: CashFlowKind,
        user_id: &str,
        new_event: NewCashFlowEvent,
    ) -> Result<CashFlowEvent>;
    fn update_event(
        &self,
        kind: CashFlowKind,
        user_id: &str,
        event_id: &str,
        update: CashFlowEventUpdate,
    ) -> Result<CashFlowEvent>;
    fn delete_event(&self, kind: CashFlowKind, user_id: &str, event_id: &str) -> Result<()>;
    /// Income/expense totals over the trailing `days` window.
    fn window_totals(&self, user_id: &str, days: i64) -> Result<CashFlowWindow>;
    /// Monthly figures: trailing 90-day sums divided by three.
    fn monthly_averages(&self, user_id: &str) -> Result<MonthlyCashFlow>;
    /// Latest events from both sides of the journal merged by date, newest
    /// first, capped at `limit`.
    fn recent_events(&self, user_id: &str, limit: usize) -> Result<Vec<CashFlowEntry>>;
}
