//! Financial health domain models.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::assets::AssetCategory;

/// Everything the scorer needs, gathered by the caller. The scorer itself
/// performs no I/O.
#[derive(Debug, Clone, Default)]
pub struct HealthInputs {
    pub category_totals: HashMap<AssetCategory, Decimal>,
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,
    pub milestones_completed: usize,
    pub milestones_total: usize,
    pub insurance_notes: Option<String>,
    pub will_location: Option<String>,
    pub solicitor_name: Option<String>,
    pub power_of_attorney_location: Option<String>,
}

/// The six weighted sub-scores, each in [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubScores {
    pub emergency_fund: Decimal,
    pub expense_ratio: Decimal,
    pub milestones: Decimal,
    pub insurance: Decimal,
    pub diversification: Decimal,
    pub estate_planning: Decimal,
}

/// Traffic-light label over the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    #[serde(rename = "Excellent")]
    Excellent,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
}

impl HealthStatus {
    pub fn from_score(score: Decimal) -> Self {
        if score >= dec!(80) {
            HealthStatus::Excellent
        } else if score >= dec!(60) {
            HealthStatus::Good
        } else {
            HealthStatus::NeedsAttention
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "Excellent",
            HealthStatus::Good => "Good",
            HealthStatus::NeedsAttention => "Needs Attention",
        }
    }
}

/// Scorer output: the overall figure, its components, and derived guidance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub overall_score: Decimal,
    pub sub_scores: SubScores,
    /// Raw expenses/income ratio as a percentage; zero when income is zero.
    pub expense_percentage: Decimal,
    pub status: HealthStatus,
    pub recommendations: Vec<String>,
}
