use std::sync::Arc;

use chrono::Utc;
use log::debug;
use uuid::Uuid;

use super::milestones_model::{Milestone, MilestoneUpdate, NewMilestone};
use super::milestones_traits::{MilestoneRepositoryTrait, MilestoneServiceTrait};
use crate::errors::Result;

/// Service for managing savings milestones.
pub struct MilestoneService {
    milestone_repo: Arc<dyn MilestoneRepositoryTrait>,
}

impl MilestoneService {
    pub fn new(milestone_repo: Arc<dyn MilestoneRepositoryTrait>) -> Self {
        Self { milestone_repo }
    }
}

impl MilestoneServiceTrait for MilestoneService {
    fn get_milestones(&self, user_id: &str) -> Result<Vec<Milestone>> {
        self.milestone_repo.load_milestones(user_id)
    }

    fn create_milestone(&self, user_id: &str, new_milestone: NewMilestone) -> Result<Milestone> {
        new_milestone.validate()?;

        let milestone = new_milestone.into_milestone(user_id, Uuid::new_v4().to_string());
        debug!(
            "Creating milestone '{}' for user {}",
            milestone.title, user_id
        );
        self.milestone_repo.insert_new_milestone(milestone)
    }

    fn update_milestone(
        &self,
        user_id: &str,
        milestone_id: &str,
        update: MilestoneUpdate,
    ) -> Result<Milestone> {
        update.validate()?;

        let mut milestone = self.milestone_repo.get_milestone(user_id, milestone_id)?;
        update.apply_to(&mut milestone);
        milestone.updated_at = Utc::now().naive_utc();
        self.milestone_repo.update_milestone(milestone)
    }

    fn delete_milestone(&self, user_id: &str, milestone_id: &str) -> Result<()> {
        self.milestone_repo.delete_milestone(user_id, milestone_id)?;
        Ok(())
    }

    fn completion_counts(&self, user_id: &str) -> Result<(usize, usize)> {
        let milestones = self.milestone_repo.load_milestones(user_id)?;
        let completed = milestones.iter().filter(|m| m.is_completed).count();
        Ok((completed, milestones.len()))
    }
}
