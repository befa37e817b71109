use std::sync::Arc;

use chrono::Utc;
use log::debug;
use uuid::Uuid;

use super::insurance_model::{
    InsurancePolicy, InsurancePolicyUpdate, InsuranceSummary, NewInsurancePolicy,
};
use super::insurance_traits::{InsuranceRepositoryTrait, InsuranceServiceTrait};
use crate::errors::Result;

/// Service for managing insurance policies and the coverage summary.
pub struct InsuranceService {
    insurance_repo: Arc<dyn InsuranceRepositoryTrait>,
}

impl InsuranceService {
    pub fn new(insurance_repo: Arc<dyn InsuranceRepositoryTrait>) -> Self {
        Self { insurance_repo }
    }
}

impl InsuranceServiceTrait for InsuranceService {
    fn get_policies(&self, user_id: &str) -> Result<Vec<InsurancePolicy>> {
        self.insurance_repo.load_active_policies(user_id)
    }

    fn create_policy(
        &self,
        user_id: &str,
        new_policy: NewInsurancePolicy,
    ) -> Result<InsurancePolicy> {
        new_policy.validate()?;

        let policy = new_policy.into_policy(user_id, Uuid::new_v4().to_string());
        debug!(
            "Creating {} policy with {} for user {}",
            policy.policy_type, policy.provider, user_id
        );
        self.insurance_repo.insert_new_policy(policy)
    }

    fn update_policy(
        &self,
        user_id: &str,
        policy_id: &str,
        update: InsurancePolicyUpdate,
    ) -> Result<InsurancePolicy> {
        update.validate()?;

        let mut policy = self.insurance_repo.get_policy(user_id, policy_id)?;
        update.apply_to(&mut policy);
        policy.updated_at = Utc::now().naive_utc();
        self.insurance_repo.update_policy(policy)
    }

    fn delete_policy(&self, user_id: &str, policy_id: &str) -> Result<()> {
        self.insurance_repo.deactivate_policy(user_id, policy_id)?;
        Ok(())
    }

    fn get_summary(&self, user_id: &str) -> Result<InsuranceSummary> {
        let policies = self.insurance_repo.load_active_policies(user_id)?;
        Ok(InsuranceSummary::from_policies(&policies))
    }
}
