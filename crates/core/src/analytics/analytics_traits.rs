use super::analytics_model::Dashboard;
use crate::errors::Result;

/// Builds the dashboard from the stored ledger.
pub trait AnalyticsServiceTrait: Send + Sync {
    fn get_dashboard(&self, user_id: &str) -> Result<Dashboard>;
}
