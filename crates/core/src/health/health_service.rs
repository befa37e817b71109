use std::sync::Arc;

use log::debug;

use super::health_model::{HealthInputs, HealthReport};
use super::health_scorer;
use super::health_traits::HealthServiceTrait;
use crate::assets::{category_totals, AssetRepositoryTrait};
use crate::errors::Result;
use crate::journal::JournalServiceTrait;
use crate::milestones::MilestoneServiceTrait;
use crate::users::UserRepositoryTrait;

/// Gathers scoring inputs from the user's ledger and runs the scorer.
pub struct HealthService {
    user_repo: Arc<dyn UserRepositoryTrait>,
    asset_repo: Arc<dyn AssetRepositoryTrait>,
    journal_service: Arc<dyn JournalServiceTrait>,
    milestone_service: Arc<dyn MilestoneServiceTrait>,
}

impl HealthService {
    pub fn new(
        user_repo: Arc<dyn UserRepositoryTrait>,
        asset_repo: Arc<dyn AssetRepositoryTrait>,
        journal_service: Arc<dyn JournalServiceTrait>,
        milestone_service: Arc<dyn MilestoneServiceTrait>,
    ) -> Self {
        Self {
            user_repo,
            asset_repo,
            journal_service,
            milestone_service,
        }
    }

    fn gather_inputs(&self, user_id: &str) -> Result<HealthInputs> {
        let user = self.user_repo.find_by_id(user_id)?;
        let assets = self.asset_repo.load_assets(user_id)?;
        let monthly = self.journal_service.monthly_averages(user_id)?;
        let (completed, total) = self.milestone_service.completion_counts(user_id)?;

        Ok(HealthInputs {
            category_totals: category_totals(&assets),
            monthly_income: monthly.monthly_income,
            monthly_expenses: monthly.monthly_expenses,
            milestones_completed: completed,
            milestones_total: total,
            insurance_notes: user.insurance_notes,
            will_location: user.will_location,
            solicitor_name: user.solicitor_name,
            power_of_attorney_location: user.power_of_attorney_location,
        })
    }
}

impl HealthServiceTrait for HealthService {
    fn get_health_report(&self, user_id: &str) -> Result<HealthReport> {
        let inputs = self.gather_inputs(user_id)?;
        let report = health_scorer::score(&inputs);
        debug!(
            "Health report for user {}: overall {} ({})",
            user_id,
            report.overall_score,
            report.status.label()
        );
        Ok(report)
    }
}
