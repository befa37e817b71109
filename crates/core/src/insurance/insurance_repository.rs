use std::sync::Arc;

use chrono::Utc;
use diesel::prelude::*;

use super::insurance_model::{InsurancePolicy, InsurancePolicyDB};
use super::insurance_traits::InsuranceRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::insurance_policies;
use crate::schema::insurance_policies::dsl::*;

pub struct InsuranceRepository {
    pool: Arc<DbPool>,
}

impl InsuranceRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        InsuranceRepository { pool }
    }
}

impl InsuranceRepositoryTrait for InsuranceRepository {
    fn load_active_policies(&self, owner_id: &str) -> Result<Vec<InsurancePolicy>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = insurance_policies
            .filter(user_id.eq(owner_id))
            .filter(is_active.eq(true))
            .order(created_at.desc())
            .load::<InsurancePolicyDB>(&mut conn)?;
        Ok(rows.into_iter().map(InsurancePolicy::from).collect())
    }

    fn get_policy(&self, owner_id: &str, policy_id: &str) -> Result<InsurancePolicy> {
        let mut conn = get_connection(&self.pool)?;
        insurance_policies
            .filter(id.eq(policy_id))
            .filter(user_id.eq(owner_id))
            .first::<InsurancePolicyDB>(&mut conn)
            .optional()?
            .map(InsurancePolicy::from)
            .ok_or_else(|| Error::NotFound(format!("Insurance policy '{}'", policy_id)))
    }

    fn insert_new_policy(&self, policy: InsurancePolicy) -> Result<InsurancePolicy> {
        let mut conn = get_connection(&self.pool)?;
        let row = InsurancePolicyDB::from(&policy);

        let inserted = diesel::insert_into(insurance_policies::table)
            .values(&row)
            .returning(insurance_policies::all_columns)
            .get_result::<InsurancePolicyDB>(&mut conn)?;

        Ok(InsurancePolicy::from(inserted))
    }

    fn update_policy(&self, policy: InsurancePolicy) -> Result<InsurancePolicy> {
        let mut conn = get_connection(&self.pool)?;
        let row = InsurancePolicyDB::from(&policy);

        diesel::update(insurance_policies.find(&row.id))
            .set(&row)
            .execute(&mut conn)?;

        let refreshed = insurance_policies
            .find(&row.id)
            .first::<InsurancePolicyDB>(&mut conn)?;
        Ok(InsurancePolicy::from(refreshed))
    }

    fn deactivate_policy(&self, owner_id: &str, policy_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        let affected = diesel::update(
            insurance_policies
                .filter(id.eq(policy_id))
                .filter(user_id.eq(owner_id)),
        )
        .set((
            is_active.eq(false),
            updated_at.eq(Utc::now().naive_utc()),
        ))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!("Insurance policy '{}'", policy_id)));
        }
        Ok(affected)
    }
}
