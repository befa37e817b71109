use crate::errors::Result;

use super::health_model::HealthReport;

/// Assembles health reports from the user's ledger state.
pub trait HealthServiceTrait: Send + Sync {
    /// Gathers the user's current figures and scores them.
    fn get_health_report(&self, user_id: &str) -> Result<HealthReport>;
}
