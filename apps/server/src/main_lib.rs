use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use wealthtrack_core::analytics::{AnalyticsService, AnalyticsServiceTrait};
use wealthtrack_core::assets::{AssetRepository, AssetService, AssetServiceTrait};
use wealthtrack_core::db;
use wealthtrack_core::health::{HealthService, HealthServiceTrait};
use wealthtrack_core::insurance::{InsuranceRepository, InsuranceService, InsuranceServiceTrait};
use wealthtrack_core::journal::{JournalRepository, JournalService, JournalServiceTrait};
use wealthtrack_core::milestones::{MilestoneRepository, MilestoneService, MilestoneServiceTrait};
use wealthtrack_core::reports::{ReportService, ReportServiceTrait};
use wealthtrack_core::users::{UserRepository, UserService, UserServiceTrait};
use wealthtrack_core::wealth::{WealthRepository, WealthService, WealthServiceTrait};

use crate::auth::AuthManager;
use crate::config::Config;

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait + Send + Sync>,
    pub asset_service: Arc<dyn AssetServiceTrait + Send + Sync>,
    pub wealth_service: Arc<dyn WealthServiceTrait + Send + Sync>,
    pub journal_service: Arc<dyn JournalServiceTrait + Send + Sync>,
    pub milestone_service: Arc<dyn MilestoneServiceTrait + Send + Sync>,
    pub insurance_service: Arc<dyn InsuranceServiceTrait + Send + Sync>,
    pub health_service: Arc<dyn HealthServiceTrait + Send + Sync>,
    pub report_service: Arc<dyn ReportServiceTrait + Send + Sync>,
    pub analytics_service: Arc<dyn AnalyticsServiceTrait + Send + Sync>,
    pub auth: Arc<AuthManager>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("WT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    // Ensure DATABASE_URL aligns with WT_DB_PATH so core picks the right file
    std::env::set_var("DATABASE_URL", &config.db_path);
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let asset_repo = Arc::new(AssetRepository::new(pool.clone()));
    let wealth_repo = Arc::new(WealthRepository::new(pool.clone()));
    let journal_repo = Arc::new(JournalRepository::new(pool.clone()));
    let milestone_repo = Arc::new(MilestoneRepository::new(pool.clone()));
    let insurance_repo = Arc::new(InsuranceRepository::new(pool.clone()));

    let user_service = Arc::new(UserService::new(user_repo.clone()));
    let wealth_service = Arc::new(WealthService::new(asset_repo.clone(), wealth_repo));
    let asset_service = Arc::new(AssetService::new(asset_repo.clone(), wealth_service.clone()));
    let journal_service = Arc::new(JournalService::new(journal_repo));
    let milestone_service = Arc::new(MilestoneService::new(milestone_repo));
    let insurance_service = Arc::new(InsuranceService::new(insurance_repo));

    let health_service = Arc::new(HealthService::new(
        user_repo.clone(),
        asset_repo.clone(),
        journal_service.clone(),
        milestone_service.clone(),
    ));

    let report_service = Arc::new(ReportService::new(
        user_repo,
        asset_repo,
        wealth_service.clone(),
        journal_service.clone(),
        milestone_service.clone(),
        insurance_service.clone(),
        health_service.clone(),
    ));

    let analytics_service = Arc::new(AnalyticsService::new(
        wealth_service.clone(),
        journal_service.clone(),
    ));

    let auth = Arc::new(AuthManager::from_config(config));

    Ok(Arc::new(AppState {
        user_service,
        asset_service,
        wealth_service,
        journal_service,
        milestone_service,
        insurance_service,
        health_service,
        report_service,
        analytics_service,
        auth,
        db_path,
    }))
}
