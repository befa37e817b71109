use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Full user row, including the stored password hash. Never serialized to
/// clients directly; responses go through [`UserProfile`].
#[derive(Queryable, Identifiable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub base_currency: String,
    pub will_location: Option<String>,
    pub solicitor_name: Option<String>,
    pub power_of_attorney_location: Option<String>,
    pub insurance_notes: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub id: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub country: Option<String>,
    pub base_currency: String,
}

impl NewUser {
    pub fn validate(&self) -> Result<()> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "email".to_string(),
            )));
        }
        if !email.contains('@') {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "'{}' is not a valid email address",
                email
            ))));
        }
        if self.full_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "fullName".to_string(),
            )));
        }
        if self.password_hash.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "password".to_string(),
            )));
        }
        Ok(())
    }
}

/// Partial profile update. Only fields carrying `Some` are applied; the
/// merge is explicit field by field.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub base_currency: Option<String>,
    pub will_location: Option<String>,
    pub solicitor_name: Option<String>,
    pub power_of_attorney_location: Option<String>,
    pub insurance_notes: Option<String>,
}

impl UserUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.full_name {
            if name.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Full name cannot be empty".to_string(),
                )));
            }
        }
        if let Some(currency) = &self.base_currency {
            if currency.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Base currency cannot be empty".to_string(),
                )));
            }
        }
        Ok(())
    }

    pub fn apply_to(&self, user: &mut User) {
        if let Some(full_name) = &self.full_name {
            user.full_name = full_name.clone();
        }
        if let Some(phone) = &self.phone {
            user.phone = Some(phone.clone());
        }
        if let Some(country) = &self.country {
            user.country = Some(country.clone());
        }
        if let Some(base_currency) = &self.base_currency {
            user.base_currency = base_currency.clone();
        }
        if let Some(will_location) = &self.will_location {
            user.will_location = Some(will_location.clone());
        }
        if let Some(solicitor_name) = &self.solicitor_name {
            user.solicitor_name = Some(solicitor_name.clone());
        }
        if let Some(poa) = &self.power_of_attorney_location {
            user.power_of_attorney_location = Some(poa.clone());
        }
        if let Some(insurance_notes) = &self.insurance_notes {
            user.insurance_notes = Some(insurance_notes.clone());
        }
    }
}

/// Client-facing view of a user, without credential material.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub base_currency: String,
    pub will_location: Option<String>,
    pub solicitor_name: Option<String>,
    pub power_of_attorney_location: Option<String>,
    pub insurance_notes: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            phone: user.phone,
            country: user.country,
            base_currency: user.base_currency,
            will_location: user.will_location,
            solicitor_name: user.solicitor_name,
            power_of_attorney_location: user.power_of_attorney_location,
            insurance_notes: user.insurance_notes,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}
