use super::insurance_model::{
    InsurancePolicy, InsurancePolicyUpdate, InsuranceSummary, NewInsurancePolicy,
};
use crate::errors::Result;

/// Trait defining the contract for insurance policy persistence.
pub trait InsuranceRepositoryTrait: Send + Sync {
    /// Active policies only; soft-deleted rows are invisible here.
    fn load_active_policies(&self, user_id: &str) -> Result<Vec<InsurancePolicy>>;
    /// Fetch by id regardless of active flag.
    fn get_policy(&self, user_id: &str, policy_id: &str) -> Result<InsurancePolicy>;
    fn insert_new_policy(&self, policy: InsurancePolicy) -> Result<InsurancePolicy>;
    fn update_policy(&self, policy: InsurancePolicy) -> Result<InsurancePolicy>;
    /// Flips `is_active` to false; the row stays.
    fn deactivate_policy(&self, user_id: &str, policy_id: &str) -> Result<usize>;
}

/// Trait defining the contract for insurance operations.
pub trait InsuranceServiceTrait: Send + Sync {
    fn get_policies(&self, user_id: &str) -> Result<Vec<InsurancePolicy>>;
    fn create_policy(&self, user_id: &str, new_policy: NewInsurancePolicy)
        -> Result<InsurancePolicy>;
    fn update_policy(
        &self,
        user_id: &str,
        policy_id: &str,
        update: InsurancePolicyUpdate,
    ) -> Result<InsurancePolicy>;
    fn delete_policy(&self, user_id: &str, policy_id: &str) -> Result<()>;
    fn get_summary(&self, user_id: &str) -> Result<InsuranceSummary>;
}
