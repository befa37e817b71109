use std::sync::Arc;

use chrono::{Duration, Utc};
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use super::journal_model::{
    CashFlowEntry, CashFlowEvent, CashFlowEventUpdate, CashFlowKind, CashFlowWindow,
    MonthlyCashFlow, NewCashFlowEvent,
};
use super::journal_traits::{JournalRepositoryTrait, JournalServiceTrait};
use crate::constants::CASH_FLOW_WINDOW_DAYS;
use crate::errors::Result;

/// Service for the income/expense journal and its trailing-window sums.
pub struct JournalService {
    journal_repo: Arc<dyn JournalRepositoryTrait>,
}

impl JournalService {
    pub fn new(journal_repo: Arc<dyn JournalRepositoryTrait>) -> Self {
        Self { journal_repo }
    }

    fn sum_since_days(&self, kind: CashFlowKind, user_id: &str, days: i64) -> Result<Decimal> {
        let from = Utc::now().date_naive() - Duration::days(days);
        let events = self.journal_repo.load_events_since(kind, user_id, from)?;
        Ok(events.iter().map(|e| e.amount).sum())
    }
}

impl JournalServiceTrait for JournalService {
    fn get_events(&self, kind: CashFlowKind, user_id: &str) -> Result<Vec<CashFlowEvent>> {
        self.journal_repo.load_events(kind, user_id)
    }

    fn create_event(
        &self,
        kind: CashFlowKind,
        user_id: &str,
        new_event: NewCashFlowEvent,
    ) -> Result<CashFlowEvent> {
        new_event.validate()?;
        let event = new_event.into_event(user_id, Uuid::new_v4().to_string());
        debug!(
            "Recording {} '{}' of {} for user {}",
            kind.as_str(),
            event.name,
            event.amount,
            user_id
        );
        self.journal_repo.insert_new_event(kind, event)
    }

    fn update_event(
        &self,
        kind: CashFlowKind,
        user_id: &str,
        event_id: &str,
        update: CashFlowEventUpdate,
    ) -> Result<CashFlowEvent> {
        update.validate()?;

        let mut event = self.journal_repo.get_event(kind, user_id, event_id)?;
        update.apply_to(&mut event);
        event.updated_at = Utc::now().naive_utc();
        self.journal_repo.update_event(kind, event)
    }

    fn delete_event(&self, kind: CashFlowKind, user_id: &str, event_id: &str) -> Result<()> {
        self.journal_repo.delete_event(kind, user_id, event_id)?;
        Ok(())
    }

    fn window_totals(&self, user_id: &str, days: i64) -> Result<CashFlowWindow> {
        let total_income = self.sum_since_days(CashFlowKind::Income, user_id, days)?;
        let total_expenses = self.sum_since_days(CashFlowKind::Expense, user_id, days)?;
        Ok(CashFlowWindow {
            window_days: days,
            net_cash_flow: total_income - total_expenses,
            total_income,
            total_expenses,
        })
    }

    fn monthly_averages(&self, user_id: &str) -> Result<MonthlyCashFlow> {
        let window = self.window_totals(user_id, CASH_FLOW_WINDOW_DAYS)?;
        Ok(MonthlyCashFlow {
            monthly_income: window.total_income / dec!(3),
            monthly_expenses: window.total_expenses / dec!(3),
        })
    }

    fn recent_events(&self, user_id: &str, limit: usize) -> Result<Vec<CashFlowEntry>> {
        let mut entries: Vec<CashFlowEntry> = Vec::new();
        for kind in [CashFlowKind::Income, CashFlowKind::Expense] {
            entries.extend(
                self.journal_repo
                    .load_events(kind, user_id)?
                    .into_iter()
                    .map(|event| CashFlowEntry { kind, event }),
            );
        }
        entries.sort_by(|a, b| b.event.event_date.cmp(&a.event.event_date));
        entries.truncate(limit);
        Ok(entries)
    }
}
