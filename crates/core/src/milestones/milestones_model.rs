//! Milestone domain models.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::PROGRESS_DECIMAL_PRECISION;
use crate::errors::{Error, Result, ValidationError};

/// A savings target with manually tracked progress.
///
/// `is_completed` is caller-set only; reaching 100% progress never flips it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: NaiveDate,
    pub is_completed: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Milestone {
    /// current/target as a percentage, one decimal place. Zero when the
    /// target is zero.
    pub fn progress_percentage(&self) -> Decimal {
        if self.target_amount == Decimal::ZERO {
            return Decimal::ZERO;
        }
        (self.current_amount / self.target_amount * dec!(100))
            .round_dp(PROGRESS_DECIMAL_PRECISION)
    }
}

// --- DB Representation ---

#[derive(Debug, Clone, Queryable, Identifiable, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::milestones)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MilestoneDB {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub target_amount: String,
    pub current_amount: String,
    pub target_date: String,
    pub is_completed: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn parse_milestone_decimal(raw: &str, field: &str, milestone_id: &str) -> Decimal {
    Decimal::from_str(raw).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse {} '{}' for milestone {}: {}",
            field,
            raw,
            milestone_id,
            e
        );
        Decimal::ZERO
    })
}

impl From<MilestoneDB> for Milestone {
    fn from(db: MilestoneDB) -> Self {
        Self {
            target_amount: parse_milestone_decimal(&db.target_amount, "target_amount", &db.id),
            current_amount: parse_milestone_decimal(&db.current_amount, "current_amount", &db.id),
            target_date: NaiveDate::parse_from_str(&db.target_date, "%Y-%m-%d")
                .unwrap_or_default(),
            id: db.id,
            user_id: db.user_id,
            title: db.title,
            description: db.description,
            category: db.category,
            is_completed: db.is_completed,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<&Milestone> for MilestoneDB {
    fn from(milestone: &Milestone) -> Self {
        Self {
            id: milestone.id.clone(),
            user_id: milestone.user_id.clone(),
            title: milestone.title.clone(),
            description: milestone.description.clone(),
            category: milestone.category.clone(),
            target_amount: milestone.target_amount.to_string(),
            current_amount: milestone.current_amount.to_string(),
            target_date: milestone.target_date.format("%Y-%m-%d").to_string(),
            is_completed: milestone.is_completed,
            created_at: milestone.created_at,
            updated_at: milestone.updated_at,
        }
    }
}

/// Payload for creating a milestone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMilestone {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub target_amount: Decimal,
    #[serde(default)]
    pub current_amount: Option<Decimal>,
    pub target_date: NaiveDate,
}

impl NewMilestone {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "title".to_string(),
            )));
        }
        if self.target_amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Target amount cannot be negative".to_string(),
            )));
        }
        if matches!(self.current_amount, Some(amount) if amount < Decimal::ZERO) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Current amount cannot be negative".to_string(),
            )));
        }
        Ok(())
    }

    pub fn into_milestone(self, user_id: &str, milestone_id: String) -> Milestone {
        let now = Utc::now().naive_utc();
        Milestone {
            id: milestone_id,
            user_id: user_id.to_string(),
            title: self.title.trim().to_string(),
            description: self.description,
            category: self.category,
            target_amount: self.target_amount,
            current_amount: self.current_amount.unwrap_or(Decimal::ZERO),
            target_date: self.target_date,
            is_completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial milestone update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub target_amount: Option<Decimal>,
    pub current_amount: Option<Decimal>,
    pub target_date: Option<NaiveDate>,
    pub is_completed: Option<bool>,
}

impl MilestoneUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Title cannot be empty".to_string(),
                )));
            }
        }
        if matches!(self.target_amount, Some(amount) if amount < Decimal::ZERO) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Target amount cannot be negative".to_string(),
            )));
        }
        if matches!(self.current_amount, Some(amount) if amount < Decimal::ZERO) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Current amount cannot be negative".to_string(),
            )));
        }
        Ok(())
    }

    pub fn apply_to(&self, milestone: &mut Milestone) {
        if let Some(title) = &self.title {
            milestone.title = title.trim().to_string();
        }
        if let Some(description) = &self.description {
            milestone.description = Some(description.clone());
        }
        if let Some(category) = &self.category {
            milestone.category = category.clone();
        }
        if let Some(target_amount) = self.target_amount {
            milestone.target_amount = target_amount;
        }
        if let Some(current_amount) = self.current_amount {
            milestone.current_amount = current_amount;
        }
        if let Some(target_date) = self.target_date {
            milestone.target_date = target_date;
        }
        if let Some(is_completed) = self.is_completed {
            milestone.is_completed = is_completed;
        }
    }
}

/// Client-facing milestone with its derived progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneView {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: NaiveDate,
    pub is_completed: bool,
    pub progress_percentage: Decimal,
    pub created_at: NaiveDateTime,
}

impl From<Milestone> for MilestoneView {
    fn from(milestone: Milestone) -> Self {
        let progress_percentage = milestone.progress_percentage();
        Self {
            id: milestone.id,
            title: milestone.title,
            description: milestone.description,
            category: milestone.category,
            target_amount: milestone.target_amount,
            current_amount: milestone.current_amount,
            target_date: milestone.target_date,
            is_completed: milestone.is_completed,
            progress_percentage,
            created_at: milestone.created_at,
        }
    }
}
