//! Unit tests for report assembly and dispatch, including degraded
//! sections.

use super::*;
use crate::assets::{Asset, AssetCategory, AssetRepositoryTrait};
use crate::errors::{Error, Result};
use crate::health::{HealthReport, HealthServiceTrait};
use crate::insurance::{
    InsurancePolicy, InsurancePolicyUpdate, InsuranceServiceTrait, InsuranceSummary,
    NewInsurancePolicy,
};
use crate::journal::{
    CashFlowEntry, CashFlowEvent, CashFlowEventUpdate, CashFlowKind, CashFlowWindow,
    JournalServiceTrait, MonthlyCashFlow, NewCashFlowEvent,
};
use crate::milestones::{Milestone, MilestoneServiceTrait, MilestoneUpdate, NewMilestone};
use crate::users::{NewUser, User, UserRepositoryTrait};
use crate::wealth::{WealthSnapshot, WealthSnapshotDB, WealthSummary, WealthServiceTrait};
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// ============================================================================
// Mock Implementations
// ============================================================================

struct MockUserRepository;

impl UserRepositoryTrait for MockUserRepository {
    fn find_by_id(&self, user_id: &str) -> Result<User> {
        let now = Utc::now().naive_utc();
        Ok(User {
            id: user_id.to_string(),
            email: "jane@example.com".to_string(),
            password_hash: "hash".to_string(),
            full_name: "Jane Doe".to_string(),
            phone: None,
            country: Some("GB".to_string()),
            base_currency: "GBP".to_string(),
            will_location: Some("Home safe".to_string()),
            solicitor_name: None,
            power_of_attorney_location: None,
            insurance_notes: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    fn find_by_email(&self, _email: &str) -> Result<Option<User>> {
        unimplemented!()
    }

    fn insert_new_user(&self, _new_user: NewUser) -> Result<User> {
        unimplemented!()
    }

    fn update_user(&self, _user: User) -> Result<User> {
        unimplemented!()
    }
}

struct FailingUserRepository;

impl UserRepositoryTrait for FailingUserRepository {
    fn find_by_id(&self, _user_id: &str) -> Result<User> {
        Err(Error::NotFound("User".to_string()))
    }

    fn find_by_email(&self, _email: &str) -> Result<Option<User>> {
        unimplemented!()
    }

    fn insert_new_user(&self, _new_user: NewUser) -> Result<User> {
        unimplemented!()
    }

    fn update_user(&self, _user: User) -> Result<User> {
        unimplemented!()
    }
}

#[derive(Default)]
struct MockAssetRepository {
    assets: Vec<Asset>,
}

impl AssetRepositoryTrait for MockAssetRepository {
    fn load_assets(&self, user_id: &str) -> Result<Vec<Asset>> {
        Ok(self
            .assets
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    fn get_asset(&self, _user_id: &str, _asset_id: &str) -> Result<Asset> {
        unimplemented!()
    }

    fn insert_new_asset(&self, _asset: Asset) -> Result<Asset> {
        unimplemented!()
    }

    fn update_asset(&self, _asset: Asset) -> Result<Asset> {
        unimplemented!()
    }

    fn delete_asset(&self, _user_id: &str, _asset_id: &str) -> Result<usize> {
        unimplemented!()
    }
}

/// Serves a canned latest snapshot; counts recompute calls.
#[derive(Default)]
struct MockWealthService {
    latest: Option<WealthSnapshot>,
    recompute_calls: AtomicUsize,
}

impl WealthServiceTrait for MockWealthService {
    fn recompute(&self, user_id: &str) -> Result<WealthSnapshot> {
        self.recompute_calls.fetch_add(1, Ordering::SeqCst);
        Ok(WealthSnapshot::from_totals(
            user_id,
            Utc::now().date_naive(),
            &HashMap::from([(AssetCategory::CashSavings, dec!(1000))]),
        ))
    }

    fn get_summary(&self, _user_id: &str) -> Result<WealthSummary> {
        unimplemented!()
    }

    fn get_history(&self, _user_id: &str, _days: i64) -> Result<Vec<WealthSnapshot>> {
        unimplemented!()
    }

    fn get_latest_snapshot(&self, _user_id: &str) -> Result<Option<WealthSnapshot>> {
        Ok(self.latest.clone())
    }
}

struct MockJournalService {
    fail: bool,
}

impl JournalServiceTrait for MockJournalService {
    fn get_events(&self, _kind: CashFlowKind, _user_id: &str) -> Result<Vec<CashFlowEvent>> {
        unimplemented!()
    }

    fn create_event(
        &self,
        _kind: CashFlowKind,
        _user_id: &str,
        _new_event: NewCashFlowEvent,
    ) -> Result<CashFlowEvent> {
        unimplemented!()
    }

    fn update_event(
        &self,
        _kind: CashFlowKind,
        _user_id: &str,
        _event_id: &str,
        _update: CashFlowEventUpdate,
    ) -> Result<CashFlowEvent> {
        unimplemented!()
    }

    fn delete_event(&self, _kind: CashFlowKind, _user_id: &str, _event_id: &str) -> Result<()> {
        unimplemented!()
    }

    fn window_totals(&self, _user_id: &str, days: i64) -> Result<CashFlowWindow> {
        if self.fail {
            return Err(Error::Report("journal store unavailable".to_string()));
        }
        Ok(CashFlowWindow {
            window_days: days,
            total_income: dec!(12000),
            total_expenses: dec!(9000),
            net_cash_flow: dec!(3000),
        })
    }

    fn monthly_averages(&self, _user_id: &str) -> Result<MonthlyCashFlow> {
        if self.fail {
            return Err(Error::Report("journal store unavailable".to_string()));
        }
        Ok(MonthlyCashFlow {
            monthly_income: dec!(4000),
            monthly_expenses: dec!(3000),
        })
    }

    fn recent_events(&self, _user_id: &str, _limit: usize) -> Result<Vec<CashFlowEntry>> {
        unimplemented!()
    }
}

struct MockMilestoneService;

impl MilestoneServiceTrait for MockMilestoneService {
    fn get_milestones(&self, _user_id: &str) -> Result<Vec<Milestone>> {
        Ok(Vec::new())
    }

    fn create_milestone(&self, _user_id: &str, _new_milestone: NewMilestone) -> Result<Milestone> {
        unimplemented!()
    }

    fn update_milestone(
        &self,
        _user_id: &str,
        _milestone_id: &str,
        _update: MilestoneUpdate,
    ) -> Result<Milestone> {
        unimplemented!()
    }

    fn delete_milestone(&self, _user_id: &str, _milestone_id: &str) -> Result<()> {
        unimplemented!()
    }

    fn completion_counts(&self, _user_id: &str) -> Result<(usize, usize)> {
        Ok((0, 0))
    }
}

struct MockInsuranceService;

impl InsuranceServiceTrait for MockInsuranceService {
    fn get_policies(&self, _user_id: &str) -> Result<Vec<InsurancePolicy>> {
        unimplemented!()
    }

    fn create_policy(
        &self,
        _user_id: &str,
        _new_policy: NewInsurancePolicy,
    ) -> Result<InsurancePolicy> {
        unimplemented!()
    }

    fn update_policy(
        &self,
        _user_id: &str,
        _policy_id: &str,
        _update: InsurancePolicyUpdate,
    ) -> Result<InsurancePolicy> {
        unimplemented!()
    }

    fn delete_policy(&self, _user_id: &str, _policy_id: &str) -> Result<()> {
        unimplemented!()
    }

    fn get_summary(&self, _user_id: &str) -> Result<InsuranceSummary> {
        Ok(InsuranceSummary::from_policies(&[]))
    }
}

struct MockHealthService;

impl HealthServiceTrait for MockHealthService {
    fn get_health_report(&self, _user_id: &str) -> Result<HealthReport> {
        Ok(crate::health::score(&crate::health::HealthInputs::default()))
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn stored_snapshot(user_id: &str) -> WealthSnapshot {
    let db = WealthSnapshotDB {
        id: format!("{}_2025-05-31", user_id),
        user_id: user_id.to_string(),
        snapshot_date: "2025-05-31".to_string(),
        cash_savings: "100000".to_string(),
        stocks_securities: "450000".to_string(),
        real_estate: "0".to_string(),
        retirement_accounts: "0".to_string(),
        business_assets: "0".to_string(),
        other_investments: "0".to_string(),
        total_wealth: "550000".to_string(),
        calculated_at: Utc::now().naive_utc(),
    };
    WealthSnapshot::from(db)
}

struct ServiceSetup {
    service: ReportService,
    wealth: Arc<MockWealthService>,
}

fn build_service(
    latest: Option<WealthSnapshot>,
    journal_fails: bool,
    user_missing: bool,
) -> ServiceSetup {
    let wealth = Arc::new(MockWealthService {
        latest,
        ..Default::default()
    });
    let user_repo: Arc<dyn UserRepositoryTrait> = if user_missing {
        Arc::new(FailingUserRepository)
    } else {
        Arc::new(MockUserRepository)
    };
    let service = ReportService::new(
        user_repo,
        Arc::new(MockAssetRepository::default()),
        wealth.clone(),
        Arc::new(MockJournalService { fail: journal_fails }),
        Arc::new(MockMilestoneService),
        Arc::new(MockInsuranceService),
        Arc::new(MockHealthService),
    );
    ServiceSetup { service, wealth }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_assemble_prefers_stored_snapshot() {
    let setup = build_service(Some(stored_snapshot("user-1")), false, false);

    let payload = setup.service.assemble("user-1", 90).unwrap();

    assert_eq!(payload.total_wealth, dec!(550000));
    assert_eq!(
        payload.snapshot_date,
        Some(chrono::NaiveDate::from_ymd_opt(2025, 5, 31).unwrap())
    );
    assert_eq!(setup.wealth.recompute_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_assemble_recomputes_when_no_snapshot_exists() {
    let setup = build_service(None, false, false);

    let payload = setup.service.assemble("user-1", 90).unwrap();

    assert_eq!(setup.wealth.recompute_calls.load(Ordering::SeqCst), 1);
    assert_eq!(payload.total_wealth, dec!(1000));
    assert_eq!(payload.snapshot_date, Some(Utc::now().date_naive()));
}

#[test]
fn test_failed_journal_section_renders_zeroed() {
    let setup = build_service(Some(stored_snapshot("user-1")), true, false);

    let payload = setup.service.assemble("user-1", 30).unwrap();

    assert_eq!(payload.cash_flow.window_days, 30);
    assert_eq!(payload.cash_flow.total_income, Decimal::ZERO);
    assert_eq!(payload.monthly.monthly_income, Decimal::ZERO);
}

#[test]
fn test_missing_user_still_produces_a_document() {
    let setup = build_service(Some(stored_snapshot("user-1")), false, true);

    let document = setup
        .service
        .generate_report("user-1", ReportFlavor::WealthStatement)
        .unwrap();

    assert!(!document.bytes.is_empty());
}

#[test]
fn test_generate_report_builds_dated_filename() {
    let setup = build_service(Some(stored_snapshot("user-1")), false, false);

    let document = setup
        .service
        .generate_report("user-1", ReportFlavor::EstatePlanning)
        .unwrap();

    let expected = format!(
        "estate_planning_report_{}.txt",
        Utc::now().date_naive().format("%Y_%m_%d")
    );
    assert_eq!(document.filename, expected);
    assert_eq!(document.flavor, ReportFlavor::EstatePlanning);
    assert_eq!(document.content_type, "text/plain; charset=utf-8");
}

#[test]
fn test_each_flavor_renders_through_the_registry() {
    let setup = build_service(Some(stored_snapshot("user-1")), false, false);

    for flavor in ReportFlavor::ALL {
        let document = setup.service.generate_report("user-1", flavor).unwrap();
        assert_eq!(document.flavor, flavor);
        assert!(!document.bytes.is_empty());
    }
}
