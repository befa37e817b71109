use std::sync::Arc;

use chrono::NaiveDate;
use diesel::prelude::*;

use super::journal_model::{CashFlowEvent, CashFlowKind, ExpenseEventDB, IncomeEventDB};
use super::journal_traits::JournalRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::{expense_events, income_events};

pub struct JournalRepository {
    pool: Arc<DbPool>,
}

impl JournalRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        JournalRepository { pool }
    }
}

impl JournalRepositoryTrait for JournalRepository {
    fn load_events(&self, kind: CashFlowKind, owner_id: &str) -> Result<Vec<CashFlowEvent>> {
        let mut conn = get_connection(&self.pool)?;
        let events = match kind {
            CashFlowKind::Income => income_events::table
                .filter(income_events::user_id.eq(owner_id))
                .order(income_events::event_date.desc())
                .load::<IncomeEventDB>(&mut conn)?
                .into_iter()
                .map(CashFlowEvent::from)
                .collect(),
            CashFlowKind::Expense => expense_events::table
                .filter(expense_events::user_id.eq(owner_id))
                .order(expense_events::event_date.desc())
                .load::<ExpenseEventDB>(&mut conn)?
                .into_iter()
                .map(CashFlowEvent::from)
                .collect(),
        };
        Ok(events)
    }

    fn get_event(
        &self,
        kind: CashFlowKind,
        owner_id: &str,
        event_id: &str,
    ) -> Result<CashFlowEvent> {
        let mut conn = get_connection(&self.pool)?;
        let event = match kind {
            CashFlowKind::Income => income_events::table
                .filter(income_events::id.eq(event_id))
                .filter(income_events::user_id.eq(owner_id))
                .first::<IncomeEventDB>(&mut conn)
                .optional()?
                .map(CashFlowEvent::from),
            CashFlowKind::Expense => expense_events::table
                .filter(expense_events::id.eq(event_id))
                .filter(expense_events::user_id.eq(owner_id))
                .first::<ExpenseEventDB>(&mut conn)
                .optional()?
                .map(CashFlowEvent::from),
        };
        event.ok_or_else(|| Error::NotFound(format!("{} '{}'", kind.noun(), event_id)))
    }

    fn insert_new_event(&self, kind: CashFlowKind, event: CashFlowEvent) -> Result<CashFlowEvent> {
        let mut conn = get_connection(&self.pool)?;
        let inserted = match kind {
            CashFlowKind::Income => diesel::insert_into(income_events::table)
                .values(&IncomeEventDB::from(&event))
                .returning(income_events::all_columns)
                .get_result::<IncomeEventDB>(&mut conn)?
                .into(),
            CashFlowKind::Expense => diesel::insert_into(expense_events::table)
                .values(&ExpenseEventDB::from(&event))
                .returning(expense_events::all_columns)
                .get_result::<ExpenseEventDB>(&mut conn)?
                .into(),
        };
        Ok(inserted)
    }

    fn update_event(&self, kind: CashFlowKind, event: CashFlowEvent) -> Result<CashFlowEvent> {
        let mut conn = get_connection(&self.pool)?;
        let updated = match kind {
            CashFlowKind::Income => {
                let row = IncomeEventDB::from(&event);
                diesel::update(income_events::table.find(&row.id))
                    .set(&row)
                    .execute(&mut conn)?;
                income_events::table
                    .find(&row.id)
                    .first::<IncomeEventDB>(&mut conn)?
                    .into()
            }
            CashFlowKind::Expense => {
                let row = ExpenseEventDB::from(&event);
                diesel::update(expense_events::table.find(&row.id))
                    .set(&row)
                    .execute(&mut conn)?;
                expense_events::table
                    .find(&row.id)
                    .first::<ExpenseEventDB>(&mut conn)?
                    .into()
            }
        };
        Ok(updated)
    }

    fn delete_event(&self, kind: CashFlowKind, owner_id: &str, event_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        let affected = match kind {
            CashFlowKind::Income => diesel::delete(
                income_events::table
                    .filter(income_events::id.eq(event_id))
                    .filter(income_events::user_id.eq(owner_id)),
            )
            .execute(&mut conn)?,
            CashFlowKind::Expense => diesel::delete(
                expense_events::table
                    .filter(expense_events::id.eq(event_id))
                    .filter(expense_events::user_id.eq(owner_id)),
            )
            .execute(&mut conn)?,
        };

        if affected == 0 {
            return Err(Error::NotFound(format!("{} '{}'", kind.noun(), event_id)));
        }
        Ok(affected)
    }

    fn load_events_since(
        &self,
        kind: CashFlowKind,
        owner_id: &str,
        from: NaiveDate,
    ) -> Result<Vec<CashFlowEvent>> {
        let mut conn = get_connection(&self.pool)?;
        let from_str = from.format("%Y-%m-%d").to_string();
        let events = match kind {
            CashFlowKind::Income => income_events::table
                .filter(income_events::user_id.eq(owner_id))
                .filter(income_events::event_date.ge(from_str))
                .order(income_events::event_date.asc())
                .load::<IncomeEventDB>(&mut conn)?
                .into_iter()
                .map(CashFlowEvent::from)
                .collect(),
            CashFlowKind::Expense => expense_events::table
                .filter(expense_events::user_id.eq(owner_id))
                .filter(expense_events::event_date.ge(from_str))
                .order(expense_events::event_date.asc())
                .load::<ExpenseEventDB>(&mut conn)?
                .into_iter()
                .map(CashFlowEvent::from)
                .collect(),
        };
        Ok(events)
    }
}
