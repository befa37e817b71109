//! Insurance policy domain models and the coverage summary.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Monthly payout target for income protection.
pub const INCOME_PROTECTION_TARGET: Decimal = dec!(3750);
/// Lump-sum target for family protection.
pub const FAMILY_PROTECTION_TARGET: Decimal = dec!(500000);
/// Lump-sum target for inheritance tax cover.
pub const INHERITANCE_TAX_TARGET: Decimal = dec!(100000);
/// Each scored type contributes a third of the overall coverage percentage.
pub const COVERAGE_TYPE_WEIGHT: Decimal = dec!(0.3333);

/// The policy types that count toward the coverage percentage. Policies of
/// other types are stored and listed but score nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyType {
    Income,
    Family,
    Inheritance,
}

impl PolicyType {
    pub const ALL: [PolicyType; 3] = [PolicyType::Income, PolicyType::Family, PolicyType::Inheritance];

    pub const fn as_key(&self) -> &'static str {
        match self {
            PolicyType::Income => "income",
            PolicyType::Family => "family",
            PolicyType::Inheritance => "inheritance",
        }
    }

    pub const fn coverage_target(&self) -> Decimal {
        match self {
            PolicyType::Income => INCOME_PROTECTION_TARGET,
            PolicyType::Family => FAMILY_PROTECTION_TARGET,
            PolicyType::Inheritance => INHERITANCE_TAX_TARGET,
        }
    }
}

/// A user's insurance policy. Deletion is soft: `is_active` flips to false
/// and the row stays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePolicy {
    pub id: String,
    pub user_id: String,
    pub policy_type: String,
    pub provider: String,
    pub coverage_amount: Decimal,
    pub monthly_premium: Decimal,
    pub policy_number: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// --- DB Representation ---

#[derive(Debug, Clone, Queryable, Identifiable, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::insurance_policies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct InsurancePolicyDB {
    pub id: String,
    pub user_id: String,
    pub policy_type: String,
    pub provider: String,
    pub coverage_amount: String,
    pub monthly_premium: String,
    pub policy_number: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn parse_policy_decimal(raw: &str, field: &str, policy_id: &str) -> Decimal {
    Decimal::from_str(raw).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse {} '{}' for policy {}: {}",
            field,
            raw,
            policy_id,
            e
        );
        Decimal::ZERO
    })
}

impl From<InsurancePolicyDB> for InsurancePolicy {
    fn from(db: InsurancePolicyDB) -> Self {
        Self {
            coverage_amount: parse_policy_decimal(&db.coverage_amount, "coverage_amount", &db.id),
            monthly_premium: parse_policy_decimal(&db.monthly_premium, "monthly_premium", &db.id),
            start_date: db
                .start_date
                .as_deref()
                .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()),
            end_date: db
                .end_date
                .as_deref()
                .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()),
            id: db.id,
            user_id: db.user_id,
            policy_type: db.policy_type,
            provider: db.provider,
            policy_number: db.policy_number,
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<&InsurancePolicy> for InsurancePolicyDB {
    fn from(policy: &InsurancePolicy) -> Self {
        Self {
            id: policy.id.clone(),
            user_id: policy.user_id.clone(),
            policy_type: policy.policy_type.clone(),
            provider: policy.provider.clone(),
            coverage_amount: policy.coverage_amount.to_string(),
            monthly_premium: policy.monthly_premium.to_string(),
            policy_number: policy.policy_number.clone(),
            start_date: policy.start_date.map(|d| d.format("%Y-%m-%d").to_string()),
            end_date: policy.end_date.map(|d| d.format("%Y-%m-%d").to_string()),
            is_active: policy.is_active,
            created_at: policy.created_at,
            updated_at: policy.updated_at,
        }
    }
}

/// Payload for creating a policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInsurancePolicy {
    pub policy_type: String,
    pub provider: String,
    pub coverage_amount: Decimal,
    pub monthly_premium: Decimal,
    #[serde(default)]
    pub policy_number: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl NewInsurancePolicy {
    pub fn validate(&self) -> Result<()> {
        if self.policy_type.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "policyType".to_string(),
            )));
        }
        if self.provider.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "provider".to_string(),
            )));
        }
        if self.coverage_amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Coverage amount cannot be negative".to_string(),
            )));
        }
        if self.monthly_premium < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Monthly premium cannot be negative".to_string(),
            )));
        }
        Ok(())
    }

    pub fn into_policy(self, user_id: &str, policy_id: String) -> InsurancePolicy {
        let now = Utc::now().naive_utc();
        InsurancePolicy {
            id: policy_id,
            user_id: user_id.to_string(),
            policy_type: self.policy_type,
            provider: self.provider.trim().to_string(),
            coverage_amount: self.coverage_amount,
            monthly_premium: self.monthly_premium,
            policy_number: self.policy_number,
            start_date: self.start_date,
            end_date: self.end_date,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial policy update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePolicyUpdate {
    pub policy_type: Option<String>,
    pub provider: Option<String>,
    pub coverage_amount: Option<Decimal>,
    pub monthly_premium: Option<Decimal>,
    pub policy_number: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl InsurancePolicyUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(provider) = &self.provider {
            if provider.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Provider cannot be empty".to_string(),
                )));
            }
        }
        if matches!(self.coverage_amount, Some(amount) if amount < Decimal::ZERO) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Coverage amount cannot be negative".to_string(),
            )));
        }
        if matches!(self.monthly_premium, Some(amount) if amount < Decimal::ZERO) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Monthly premium cannot be negative".to_string(),
            )));
        }
        Ok(())
    }

    pub fn apply_to(&self, policy: &mut InsurancePolicy) {
        if let Some(policy_type) = &self.policy_type {
            policy.policy_type = policy_type.clone();
        }
        if let Some(provider) = &self.provider {
            policy.provider = provider.trim().to_string();
        }
        if let Some(coverage_amount) = self.coverage_amount {
            policy.coverage_amount = coverage_amount;
        }
        if let Some(monthly_premium) = self.monthly_premium {
            policy.monthly_premium = monthly_premium;
        }
        if let Some(policy_number) = &self.policy_number {
            policy.policy_number = Some(policy_number.clone());
        }
        if let Some(start_date) = self.start_date {
            policy.start_date = Some(start_date);
        }
        if let Some(end_date) = self.end_date {
            policy.end_date = Some(end_date);
        }
    }
}

/// Per-type percentages behind the overall coverage figure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoverageBreakdown {
    pub income_percentage: Decimal,
    pub family_percentage: Decimal,
    pub inheritance_percentage: Decimal,
}

/// Aggregate view over a user's active policies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceSummary {
    pub total_policies: usize,
    pub total_monthly_premium: Decimal,
    pub total_coverage: Decimal,
    /// Summed coverage per stored type string, scored types or not.
    pub coverage_by_type: HashMap<String, Decimal>,
    pub coverage_percentage: Decimal,
    pub protection_gap: Decimal,
    pub coverage_breakdown: CoverageBreakdown,
}

impl InsuranceSummary {
    /// Derives the summary from active policies. Each scored type reaches at
    /// most 100 against its target and weighs a third of the overall figure;
    /// `protection_gap` is the remainder to 100.
    pub fn from_policies(policies: &[InsurancePolicy]) -> Self {
        let mut coverage_by_type: HashMap<String, Decimal> = HashMap::new();
        for policy in policies {
            *coverage_by_type
                .entry(policy.policy_type.clone())
                .or_insert(Decimal::ZERO) += policy.coverage_amount;
        }

        let type_score = |policy_type: PolicyType| {
            coverage_by_type
                .get(policy_type.as_key())
                .map(|coverage| {
                    Decimal::min(dec!(100), coverage / policy_type.coverage_target() * dec!(100))
                })
                .unwrap_or(Decimal::ZERO)
        };

        let income_percentage = type_score(PolicyType::Income);
        let family_percentage = type_score(PolicyType::Family);
        let inheritance_percentage = type_score(PolicyType::Inheritance);

        let coverage_percentage = income_percentage * COVERAGE_TYPE_WEIGHT
            + family_percentage * COVERAGE_TYPE_WEIGHT
            + inheritance_percentage * COVERAGE_TYPE_WEIGHT;

        Self {
            total_policies: policies.len(),
            total_monthly_premium: policies.iter().map(|p| p.monthly_premium).sum(),
            total_coverage: policies.iter().map(|p| p.coverage_amount).sum(),
            coverage_by_type,
            coverage_percentage,
            protection_gap: dec!(100) - coverage_percentage,
            coverage_breakdown: CoverageBreakdown {
                income_percentage,
                family_percentage,
                inheritance_percentage,
            },
        }
    }
}
