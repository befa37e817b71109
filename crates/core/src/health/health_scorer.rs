//! The pure financial health scorer.
//!
//! Six sub-scores, each clamped to [0, 100], combined into one weighted
//! overall figure. Deterministic: same inputs, same report.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::health_model::{HealthInputs, HealthReport, HealthStatus, SubScores};
use crate::assets::AssetCategory;

const WEIGHT_EMERGENCY_FUND: Decimal = dec!(0.20);
const WEIGHT_EXPENSE_RATIO: Decimal = dec!(0.20);
const WEIGHT_MILESTONES: Decimal = dec!(0.15);
const WEIGHT_INSURANCE: Decimal = dec!(0.15);
const WEIGHT_DIVERSIFICATION: Decimal = dec!(0.15);
const WEIGHT_ESTATE_PLANNING: Decimal = dec!(0.15);

/// Sub-scores below this threshold produce a recommendation.
const WEAK_SCORE_THRESHOLD: Decimal = dec!(60);

fn clamp_score(score: Decimal) -> Decimal {
    score.clamp(Decimal::ZERO, dec!(100))
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, |s| s.trim().is_empty())
}

/// Months of expenses covered by cash, against a six-month target.
/// Zero when no expense baseline exists.
fn emergency_fund_score(inputs: &HealthInputs) -> Decimal {
    if inputs.monthly_expenses <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let cash = inputs
        .category_totals
        .get(&AssetCategory::CashSavings)
        .copied()
        .unwrap_or_default();
    let months_coverage = cash / inputs.monthly_expenses;
    clamp_score(months_coverage / dec!(6) * dec!(100))
}

/// Share of income spent: under 70% is full marks, 70-85% tapers 100 down
/// to 60, beyond 85% tapers 60 down to 0.
fn expense_ratio_score(inputs: &HealthInputs) -> Decimal {
    if inputs.monthly_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let ratio = inputs.monthly_expenses / inputs.monthly_income * dec!(100);
    let score = if ratio < dec!(70) {
        dec!(100)
    } else if ratio < dec!(85) {
        dec!(100) - (ratio - dec!(70)) / dec!(15) * dec!(40)
    } else {
        dec!(60) - (ratio - dec!(85)) / dec!(15) * dec!(60)
    };
    clamp_score(score)
}

fn milestone_score(inputs: &HealthInputs) -> Decimal {
    if inputs.milestones_total == 0 {
        return Decimal::ZERO;
    }
    let completed = Decimal::from(inputs.milestones_completed as u64);
    let total = Decimal::from(inputs.milestones_total as u64);
    clamp_score(completed / total * dec!(100))
}

/// Binary: documented insurance notes score 80, nothing documented scores 0.
fn insurance_score(inputs: &HealthInputs) -> Decimal {
    if is_blank(&inputs.insurance_notes) {
        Decimal::ZERO
    } else {
        dec!(80)
    }
}

/// Penalizes concentration: a category holding more than 70% of total
/// assets loses 2 points per percentage point over the line.
fn diversification_score(inputs: &HealthInputs) -> Decimal {
    let total: Decimal = inputs.category_totals.values().copied().sum();
    if total <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let max_share = inputs
        .category_totals
        .values()
        .map(|value| value / total)
        .max()
        .unwrap_or_default();
    if max_share > dec!(0.7) {
        clamp_score(dec!(100) - (max_share - dec!(0.7)) * dec!(200))
    } else {
        dec!(100)
    }
}

/// Will on file is worth 40, a named solicitor 30, power of attorney 30.
fn estate_planning_score(inputs: &HealthInputs) -> Decimal {
    let mut score = Decimal::ZERO;
    if !is_blank(&inputs.will_location) {
        score += dec!(40);
    }
    if !is_blank(&inputs.solicitor_name) {
        score += dec!(30);
    }
    if !is_blank(&inputs.power_of_attorney_location) {
        score += dec!(30);
    }
    score
}

fn expense_percentage(inputs: &HealthInputs) -> Decimal {
    if inputs.monthly_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    inputs.monthly_expenses / inputs.monthly_income * dec!(100)
}

fn build_recommendations(sub_scores: &SubScores) -> Vec<String> {
    let weak_spots: [(Decimal, &str); 6] = [
        (
            sub_scores.emergency_fund,
            "Build emergency fund to 6 months of expenses",
        ),
        (
            sub_scores.expense_ratio,
            "Reduce monthly expenses to below 70% of income",
        ),
        (
            sub_scores.milestones,
            "Review milestone timelines and set achievable targets",
        ),
        (sub_scores.insurance, "Review insurance coverage gaps"),
        (sub_scores.diversification, "Diversify investment portfolio"),
        (
            sub_scores.estate_planning,
            "Complete will and estate planning",
        ),
    ];

    weak_spots
        .iter()
        .filter(|(score, _)| *score < WEAK_SCORE_THRESHOLD)
        .map(|(_, advice)| advice.to_string())
        .collect()
}

/// Scores the given inputs into a [`HealthReport`].
pub fn score(inputs: &HealthInputs) -> HealthReport {
    let sub_scores = SubScores {
        emergency_fund: emergency_fund_score(inputs),
        expense_ratio: expense_ratio_score(inputs),
        milestones: milestone_score(inputs),
        insurance: insurance_score(inputs),
        diversification: diversification_score(inputs),
        estate_planning: estate_planning_score(inputs),
    };

    let overall_score = sub_scores.emergency_fund * WEIGHT_EMERGENCY_FUND
        + sub_scores.expense_ratio * WEIGHT_EXPENSE_RATIO
        + sub_scores.milestones * WEIGHT_MILESTONES
        + sub_scores.insurance * WEIGHT_INSURANCE
        + sub_scores.diversification * WEIGHT_DIVERSIFICATION
        + sub_scores.estate_planning * WEIGHT_ESTATE_PLANNING;

    let recommendations = build_recommendations(&sub_scores);

    HealthReport {
        status: HealthStatus::from_score(overall_score),
        expense_percentage: expense_percentage(inputs),
        overall_score,
        sub_scores,
        recommendations,
    }
}
