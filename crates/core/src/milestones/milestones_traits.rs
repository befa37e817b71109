use super::milestones_model::{Milestone, MilestoneUpdate, NewMilestone};
use crate::errors::Result;

/// Trait defining the contract for Milestone repository operations.
pub trait MilestoneRepositoryTrait: Send + Sync {
    /// Loads all milestones for a user, ordered by target date.
    fn load_milestones(&self, user_id: &str) -> Result<Vec<Milestone>>;
    fn get_milestone(&self, user_id: &str, milestone_id: &str) -> Result<Milestone>;
    fn insert_new_milestone(&self, milestone: Milestone) -> Result<Milestone>;
    fn update_milestone(&self, milestone: Milestone) -> Result<Milestone>;
    fn delete_milestone(&self, user_id: &str, milestone_id: &str) -> Result<usize>;
}

/// Trait defining the contract for Milestone service operations.
pub trait MilestoneServiceTrait: Send + Sync {
    fn get_milestones(&self, user_id: &str) -> Result<Vec<Milestone>>;
    fn create_milestone(&self, user_id: &str, new_milestone: NewMilestone) -> Result<Milestone>;
    fn update_milestone(
        &self,
        user_id: &str,
        milestone_id: &str,
        update: MilestoneUpdate,
    ) -> Result<Milestone>;
    fn delete_milestone(&self, user_id: &str, milestone_id: &str) -> Result<()>;
    /// (completed, total) counts for the health scorer.
    fn completion_counts(&self, user_id: &str) -> Result<(usize, usize)>;
}
