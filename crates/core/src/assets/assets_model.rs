//! Asset records and the category taxonomy.

use std::str::FromStr;

use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// The six aggregation categories. An asset whose stored category string
/// matches none of these keys is kept in the ledger but contributes to no
/// wealth subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    CashSavings,
    StocksSecurities,
    RealEstate,
    RetirementAccounts,
    BusinessAssets,
    OtherInvestments,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 6] = [
        AssetCategory::CashSavings,
        AssetCategory::StocksSecurities,
        AssetCategory::RealEstate,
        AssetCategory::RetirementAccounts,
        AssetCategory::BusinessAssets,
        AssetCategory::OtherInvestments,
    ];

    pub const fn as_key(&self) -> &'static str {
        match self {
            AssetCategory::CashSavings => "cash_savings",
            AssetCategory::StocksSecurities => "stocks_securities",
            AssetCategory::RealEstate => "real_estate",
            AssetCategory::RetirementAccounts => "retirement_accounts",
            AssetCategory::BusinessAssets => "business_assets",
            AssetCategory::OtherInvestments => "other_investments",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "cash_savings" => Some(AssetCategory::CashSavings),
            "stocks_securities" => Some(AssetCategory::StocksSecurities),
            "real_estate" => Some(AssetCategory::RealEstate),
            "retirement_accounts" => Some(AssetCategory::RetirementAccounts),
            "business_assets" => Some(AssetCategory::BusinessAssets),
            "other_investments" => Some(AssetCategory::OtherInvestments),
            _ => None,
        }
    }

    /// Human-readable label used in rendered reports.
    pub const fn display_name(&self) -> &'static str {
        match self {
            AssetCategory::CashSavings => "Cash & Savings",
            AssetCategory::StocksSecurities => "Stocks & Securities",
            AssetCategory::RealEstate => "Real Estate",
            AssetCategory::RetirementAccounts => "Retirement Accounts",
            AssetCategory::BusinessAssets => "Business Assets",
            AssetCategory::OtherInvestments => "Other Investments",
        }
    }
}

/// Sums asset values per recognized category. Assets with a category
/// outside the closed set are skipped.
pub fn category_totals(assets: &[Asset]) -> std::collections::HashMap<AssetCategory, Decimal> {
    let mut totals = std::collections::HashMap::new();
    for asset in assets {
        if let Some(category) = AssetCategory::from_key(&asset.category) {
            *totals.entry(category).or_insert(Decimal::ZERO) += asset.value;
        }
    }
    totals
}

/// Domain model for a declared asset.
///
/// `category` stays a free string: values outside [`AssetCategory`] are
/// stored as given and skipped by the wealth recalculator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub category: String,
    pub value: Decimal,
    pub description: Option<String>,
    pub institution: Option<String>,
    pub property_address: Option<String>,
    pub mortgage_balance: Option<Decimal>,
    pub shares_quantity: Option<Decimal>,
    pub interest_rate: Option<Decimal>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// --- DB Representation ---

#[derive(Debug, Clone, Queryable, Identifiable, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssetDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub category: String,
    // Decimals stored as TEXT
    pub value: String,
    pub description: Option<String>,
    pub institution: Option<String>,
    pub property_address: Option<String>,
    pub mortgage_balance: Option<String>,
    pub shares_quantity: Option<String>,
    pub interest_rate: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// --- Conversions ---

fn parse_decimal_field(raw: &str, field: &str, asset_id: &str) -> Decimal {
    Decimal::from_str(raw).unwrap_or_else(|e| {
        log::error!("Failed to parse {} '{}' for asset {}: {}", field, raw, asset_id, e);
        Decimal::ZERO
    })
}

impl From<AssetDB> for Asset {
    fn from(db: AssetDB) -> Self {
        let value = parse_decimal_field(&db.value, "value", &db.id);
        Self {
            value,
            mortgage_balance: db
                .mortgage_balance
                .as_deref()
                .map(|v| parse_decimal_field(v, "mortgage_balance", &db.id)),
            shares_quantity: db
                .shares_quantity
                .as_deref()
                .map(|v| parse_decimal_field(v, "shares_quantity", &db.id)),
            interest_rate: db
                .interest_rate
                .as_deref()
                .map(|v| parse_decimal_field(v, "interest_rate", &db.id)),
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            category: db.category,
            description: db.description,
            institution: db.institution,
            property_address: db.property_address,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<&Asset> for AssetDB {
    fn from(asset: &Asset) -> Self {
        Self {
            id: asset.id.clone(),
            user_id: asset.user_id.clone(),
            name: asset.name.clone(),
            category: asset.category.clone(),
            value: asset.value.to_string(),
            description: asset.description.clone(),
            institution: asset.institution.clone(),
            property_address: asset.property_address.clone(),
            mortgage_balance: asset.mortgage_balance.map(|v| v.to_string()),
            shares_quantity: asset.shares_quantity.map(|v| v.to_string()),
            interest_rate: asset.interest_rate.map(|v| v.to_string()),
            created_at: asset.created_at,
            updated_at: asset.updated_at,
        }
    }
}

/// Payload for creating an asset. The owner and identifiers are assigned
/// by the service, never taken from the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub name: String,
    pub category: String,
    pub value: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub property_address: Option<String>,
    #[serde(default)]
    pub mortgage_balance: Option<Decimal>,
    #[serde(default)]
    pub shares_quantity: Option<Decimal>,
    #[serde(default)]
    pub interest_rate: Option<Decimal>,
}

impl NewAsset {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.category.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "category".to_string(),
            )));
        }
        if self.value < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Asset value cannot be negative".to_string(),
            )));
        }
        if matches!(self.mortgage_balance, Some(balance) if balance < Decimal::ZERO) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Mortgage balance cannot be negative".to_string(),
            )));
        }
        Ok(())
    }

    /// Builds the owned domain record for `user_id` with a fresh id.
    pub fn into_asset(self, user_id: &str, asset_id: String) -> Asset {
        let now = Utc::now().naive_utc();
        Asset {
            id: asset_id,
            user_id: user_id.to_string(),
            name: self.name.trim().to_string(),
            category: self.category,
            value: self.value,
            description: self.description,
            institution: self.institution,
            property_address: self.property_address,
            mortgage_balance: self.mortgage_balance,
            shares_quantity: self.shares_quantity,
            interest_rate: self.interest_rate,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial asset update. Only fields carrying `Some` are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub value: Option<Decimal>,
    pub description: Option<String>,
    pub institution: Option<String>,
    pub property_address: Option<String>,
    pub mortgage_balance: Option<Decimal>,
    pub shares_quantity: Option<Decimal>,
    pub interest_rate: Option<Decimal>,
}

impl AssetUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Asset name cannot be empty".to_string(),
                )));
            }
        }
        if matches!(self.value, Some(value) if value < Decimal::ZERO) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Asset value cannot be negative".to_string(),
            )));
        }
        Ok(())
    }

    pub fn apply_to(&self, asset: &mut Asset) {
        if let Some(name) = &self.name {
            asset.name = name.trim().to_string();
        }
        if let Some(category) = &self.category {
            asset.category = category.clone();
        }
        if let Some(value) = self.value {
            asset.value = value;
        }
        if let Some(description) = &self.description {
            asset.description = Some(description.clone());
        }
        if let Some(institution) = &self.institution {
            asset.institution = Some(institution.clone());
        }
        if let Some(property_address) = &self.property_address {
            asset.property_address = Some(property_address.clone());
        }
        if let Some(mortgage_balance) = self.mortgage_balance {
            asset.mortgage_balance = Some(mortgage_balance);
        }
        if let Some(shares_quantity) = self.shares_quantity {
            asset.shares_quantity = Some(shares_quantity);
        }
        if let Some(interest_rate) = self.interest_rate {
            asset.interest_rate = Some(interest_rate);
        }
    }
}
