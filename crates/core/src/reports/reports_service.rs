use std::sync::Arc;

use chrono::Utc;
use log::{debug, warn};
use rust_decimal::Decimal;

use super::reports_model::{ReportDocument, ReportFlavor, ReportPayload, ReportUser};
use super::reports_renderers::builtin_renderers;
use super::reports_traits::{ReportRenderer, ReportServiceTrait};
use crate::assets::AssetRepositoryTrait;
use crate::constants::CASH_FLOW_WINDOW_DAYS;
use crate::errors::{Error, Result};
use crate::health::{self, HealthInputs, HealthServiceTrait};
use crate::insurance::{InsuranceSummary, InsuranceServiceTrait};
use crate::journal::{CashFlowWindow, JournalServiceTrait, MonthlyCashFlow};
use crate::milestones::{MilestoneServiceTrait, MilestoneView};
use crate::users::UserRepositoryTrait;
use crate::wealth::WealthServiceTrait;

/// Assembles report payloads and renders them through the registered
/// renderers.
///
/// A report is always produced for a known user: any sub-aggregation that
/// fails is logged and replaced with a zeroed section instead of aborting
/// the document.
pub struct ReportService {
    user_repo: Arc<dyn UserRepositoryTrait>,
    asset_repo: Arc<dyn AssetRepositoryTrait>,
    wealth_service: Arc<dyn WealthServiceTrait>,
    journal_service: Arc<dyn JournalServiceTrait>,
    milestone_service: Arc<dyn MilestoneServiceTrait>,
    insurance_service: Arc<dyn InsuranceServiceTrait>,
    health_service: Arc<dyn HealthServiceTrait>,
    renderers: Vec<Box<dyn ReportRenderer>>,
}

impl ReportService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepositoryTrait>,
        asset_repo: Arc<dyn AssetRepositoryTrait>,
        wealth_service: Arc<dyn WealthServiceTrait>,
        journal_service: Arc<dyn JournalServiceTrait>,
        milestone_service: Arc<dyn MilestoneServiceTrait>,
        insurance_service: Arc<dyn InsuranceServiceTrait>,
        health_service: Arc<dyn HealthServiceTrait>,
    ) -> Self {
        Self {
            user_repo,
            asset_repo,
            wealth_service,
            journal_service,
            milestone_service,
            insurance_service,
            health_service,
            renderers: builtin_renderers(),
        }
    }

    fn section_or<T>(&self, section: &str, result: Result<T>, fallback: T) -> T {
        match result {
            Ok(value) => value,
            Err(e) => {
                warn!("Report assembly: {} unavailable, using defaults: {}", section, e);
                fallback
            }
        }
    }

    /// Gathers every report section for one user over the given cash-flow
    /// window.
    pub fn assemble(&self, user_id: &str, window_days: i64) -> Result<ReportPayload> {
        let user = self.section_or(
            "user profile",
            self.user_repo.find_by_id(user_id).map(ReportUser::from),
            ReportUser::default(),
        );

        // Totals come from the latest snapshot when one exists; a fresh
        // ledger gets a recompute so the first report is never empty.
        let snapshot = self.section_or(
            "wealth totals",
            self.wealth_service
                .get_latest_snapshot(user_id)
                .and_then(|latest| match latest {
                    Some(snapshot) => Ok(Some(snapshot)),
                    None => self.wealth_service.recompute(user_id).map(Some),
                }),
            None,
        );
        let (total_wealth, category_breakdown, snapshot_date) = match &snapshot {
            Some(snapshot) => (
                snapshot.total_wealth,
                snapshot.category_breakdown(),
                Some(snapshot.snapshot_date),
            ),
            None => (Decimal::ZERO, Vec::new(), None),
        };

        let asset_count = self.section_or(
            "asset count",
            self.asset_repo
                .load_assets(user_id)
                .map(|assets| assets.len()),
            0,
        );
        let cash_flow = self.section_or(
            "cash flow window",
            self.journal_service.window_totals(user_id, window_days),
            CashFlowWindow {
                window_days,
                ..CashFlowWindow::default()
            },
        );
        let monthly = self.section_or(
            "monthly cash flow",
            self.journal_service.monthly_averages(user_id),
            MonthlyCashFlow::default(),
        );
        let milestones = self.section_or(
            "milestones",
            self.milestone_service
                .get_milestones(user_id)
                .map(|milestones| milestones.into_iter().map(MilestoneView::from).collect()),
            Vec::new(),
        );
        let insurance = self.section_or(
            "insurance summary",
            self.insurance_service.get_summary(user_id),
            InsuranceSummary::from_policies(&[]),
        );
        let health = self.section_or(
            "health report",
            self.health_service.get_health_report(user_id),
            health::score(&HealthInputs::default()),
        );

        Ok(ReportPayload {
            user,
            generated_on: Utc::now().date_naive(),
            total_wealth,
            category_breakdown,
            asset_count,
            snapshot_date,
            cash_flow,
            monthly,
            milestones,
            insurance,
            health,
        })
    }

    fn renderer_for(&self, flavor: ReportFlavor) -> Result<&dyn ReportRenderer> {
        self.renderers
            .iter()
            .find(|renderer| renderer.flavor() == flavor)
            .map(|renderer| renderer.as_ref())
            .ok_or_else(|| {
                Error::Report(format!("No renderer registered for {}", flavor.as_path_key()))
            })
    }
}

impl ReportServiceTrait for ReportService {
    fn generate_report(&self, user_id: &str, flavor: ReportFlavor) -> Result<ReportDocument> {
        let payload = self.assemble(user_id, CASH_FLOW_WINDOW_DAYS)?;
        let renderer = self.renderer_for(flavor)?;
        let bytes = renderer.render(&payload)?;
        let filename = format!(
            "{}_{}.txt",
            flavor.file_stem(),
            payload.generated_on.format("%Y_%m_%d")
        );
        debug!(
            "Rendered {} for user {} ({} bytes)",
            flavor.as_path_key(),
            user_id,
            bytes.len()
        );
        Ok(ReportDocument {
            flavor,
            content_type: renderer.content_type(),
            filename,
            bytes,
        })
    }
}
