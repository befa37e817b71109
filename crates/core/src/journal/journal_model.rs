//! Cash-flow journal domain models.
//!
//! Income and expense events share one domain shape and live in two tables;
//! [`CashFlowKind`] selects the table.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

pub const DEFAULT_FREQUENCY: &str = "one_time";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CashFlowKind {
    Income,
    Expense,
}

impl CashFlowKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CashFlowKind::Income => "income",
            CashFlowKind::Expense => "expense",
        }
    }

    /// Display noun used in error messages.
    pub const fn noun(&self) -> &'static str {
        match self {
            CashFlowKind::Income => "Income event",
            CashFlowKind::Expense => "Expense event",
        }
    }
}

/// One dated cash-flow record. `frequency` is a descriptive tag only; no
/// recurrence is projected from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowEvent {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: Decimal,
    pub event_date: NaiveDate,
    pub category: String,
    pub frequency: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A cash-flow event tagged with its journal side, for merged listings.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowEntry {
    pub kind: CashFlowKind,
    #[serde(flatten)]
    pub event: CashFlowEvent,
}

// --- DB Representations (one per table, same columns) ---

#[derive(Debug, Clone, Queryable, Identifiable, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::income_events)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct IncomeEventDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: String,
    pub event_date: String,
    pub category: String,
    pub frequency: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Queryable, Identifiable, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::expense_events)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExpenseEventDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: String,
    pub event_date: String,
    pub category: String,
    pub frequency: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// --- Conversions ---

fn parse_event_amount(raw: &str, event_id: &str) -> Decimal {
    Decimal::from_str(raw).unwrap_or_else(|e| {
        log::error!("Failed to parse amount '{}' for event {}: {}", raw, event_id, e);
        Decimal::ZERO
    })
}

fn parse_event_date(raw: &str, event_id: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap_or_else(|e| {
        log::error!("Failed to parse date '{}' for event {}: {}", raw, event_id, e);
        NaiveDate::default()
    })
}

macro_rules! impl_event_conversions {
    ($db_type:ident) => {
        impl From<$db_type> for CashFlowEvent {
            fn from(db: $db_type) -> Self {
                Self {
                    amount: parse_event_amount(&db.amount, &db.id),
                    event_date: parse_event_date(&db.event_date, &db.id),
                    id: db.id,
                    user_id: db.user_id,
                    name: db.name,
                    category: db.category,
                    frequency: db.frequency,
                    description: db.description,
                    created_at: db.created_at,
                    updated_at: db.updated_at,
                }
            }
        }

        impl From<&CashFlowEvent> for $db_type {
            fn from(event: &CashFlowEvent) -> Self {
                Self {
                    id: event.id.clone(),
                    user_id: event.user_id.clone(),
                    name: event.name.clone(),
                    amount: event.amount.to_string(),
                    event_date: event.event_date.format("%Y-%m-%d").to_string(),
                    category: event.category.clone(),
                    frequency: event.frequency.clone(),
                    description: event.description.clone(),
                    created_at: event.created_at,
                    updated_at: event.updated_at,
                }
            }
        }
    };
}

impl_event_conversions!(IncomeEventDB);
impl_event_conversions!(ExpenseEventDB);

/// Payload for recording a cash-flow event. Omitted date defaults to today.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCashFlowEvent {
    pub name: String,
    pub amount: Decimal,
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
    pub category: String,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewCashFlowEvent {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Amount must be positive".to_string(),
            )));
        }
        if self.category.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "category".to_string(),
            )));
        }
        Ok(())
    }

    pub fn into_event(self, user_id: &str, event_id: String) -> CashFlowEvent {
        let now = Utc::now().naive_utc();
        CashFlowEvent {
            id: event_id,
            user_id: user_id.to_string(),
            name: self.name.trim().to_string(),
            amount: self.amount,
            event_date: self.event_date.unwrap_or_else(|| Utc::now().date_naive()),
            category: self.category,
            frequency: self
                .frequency
                .unwrap_or_else(|| DEFAULT_FREQUENCY.to_string()),
            description: self.description,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial cash-flow event update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowEventUpdate {
    pub name: Option<String>,
    pub amount: Option<Decimal>,
    pub event_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub frequency: Option<String>,
    pub description: Option<String>,
}

impl CashFlowEventUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Name cannot be empty".to_string(),
                )));
            }
        }
        if matches!(self.amount, Some(amount) if amount <= Decimal::ZERO) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Amount must be positive".to_string(),
            )));
        }
        Ok(())
    }

    pub fn apply_to(&self, event: &mut CashFlowEvent) {
        if let Some(name) = &self.name {
            event.name = name.trim().to_string();
        }
        if let Some(amount) = self.amount {
            event.amount = amount;
        }
        if let Some(event_date) = self.event_date {
            event.event_date = event_date;
        }
        if let Some(category) = &self.category {
            event.category = category.clone();
        }
        if let Some(frequency) = &self.frequency {
            event.frequency = frequency.clone();
        }
        if let Some(description) = &self.description {
            event.description = Some(description.clone());
        }
    }
}

/// Income and expense totals over one trailing window.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowWindow {
    pub window_days: i64,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_cash_flow: Decimal,
}

/// Monthly income/expense figures derived from the trailing 90-day sums.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCashFlow {
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,
}
