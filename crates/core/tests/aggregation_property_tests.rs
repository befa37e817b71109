//! Property-based tests for snapshot totals, milestone progress, and the
//! insurance coverage summary.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use wealthtrack_core::assets::AssetCategory;
use wealthtrack_core::insurance::{InsurancePolicy, InsuranceSummary};
use wealthtrack_core::milestones::Milestone;
use wealthtrack_core::wealth::WealthSnapshot;

// =============================================================================
// Generators
// =============================================================================

fn arb_category() -> impl Strategy<Value = AssetCategory> {
    proptest::sample::select(AssetCategory::ALL.to_vec())
}

fn arb_money() -> impl Strategy<Value = Decimal> {
    (0i64..=100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_category_totals() -> impl Strategy<Value = HashMap<AssetCategory, Decimal>> {
    proptest::collection::hash_map(arb_category(), arb_money(), 0..=6)
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2020i32..=2030, 1u32..=12, 1u32..=28).prop_map(|(year, month, day)| {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    })
}

prop_compose! {
    fn arb_milestone()(current in arb_money(), target in arb_money()) -> Milestone {
        let now = Utc::now().naive_utc();
        Milestone {
            id: "milestone-1".to_string(),
            user_id: "user-1".to_string(),
            title: "Target".to_string(),
            description: None,
            category: "savings".to_string(),
            target_amount: target,
            current_amount: current,
            target_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            is_completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}

prop_compose! {
    fn arb_policy()(
        policy_type in proptest::sample::select(vec![
            "income".to_string(),
            "family".to_string(),
            "inheritance".to_string(),
            "pet".to_string(),
        ]),
        coverage in arb_money(),
        premium in (0i64..=50_000).prop_map(|cents| Decimal::new(cents, 2)),
    ) -> InsurancePolicy {
        let now = Utc::now().naive_utc();
        InsurancePolicy {
            id: "policy-1".to_string(),
            user_id: "user-1".to_string(),
            policy_type,
            provider: "Acme Mutual".to_string(),
            coverage_amount: coverage,
            monthly_premium: premium,
            policy_number: None,
            start_date: None,
            end_date: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

fn arb_policies() -> impl Strategy<Value = Vec<InsurancePolicy>> {
    proptest::collection::vec(arb_policy(), 0..=8)
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A snapshot's stored total always equals the sum of its six category
    /// amounts, whatever subset of categories was held.
    #[test]
    fn prop_snapshot_total_is_category_sum(
        totals in arb_category_totals(),
        date in arb_date(),
    ) {
        let snapshot = WealthSnapshot::from_totals("user-1", date, &totals);

        let sum: Decimal = AssetCategory::ALL
            .iter()
            .map(|category| snapshot.category_amount(*category))
            .sum();

        prop_assert_eq!(snapshot.total_wealth, sum);
    }

    /// Categories absent from the input always land as zero amounts.
    #[test]
    fn prop_snapshot_missing_categories_are_zero(
        totals in arb_category_totals(),
        date in arb_date(),
    ) {
        let snapshot = WealthSnapshot::from_totals("user-1", date, &totals);

        for category in AssetCategory::ALL {
            let expected = totals.get(&category).copied().unwrap_or_default();
            prop_assert_eq!(snapshot.category_amount(category), expected);
        }
    }

    /// The breakdown lists every category exactly once, in canonical order.
    #[test]
    fn prop_snapshot_breakdown_in_canonical_order(
        totals in arb_category_totals(),
        date in arb_date(),
    ) {
        let snapshot = WealthSnapshot::from_totals("user-1", date, &totals);
        let breakdown = snapshot.category_breakdown();

        prop_assert_eq!(breakdown.len(), AssetCategory::ALL.len());
        for (entry, category) in breakdown.iter().zip(AssetCategory::ALL) {
            prop_assert_eq!(entry.0, category);
        }
    }

    /// The snapshot id is always `{user}_{date}`, so one row per user/day.
    #[test]
    fn prop_snapshot_id_embeds_user_and_date(
        totals in arb_category_totals(),
        date in arb_date(),
    ) {
        let snapshot = WealthSnapshot::from_totals("user-7", date, &totals);

        prop_assert_eq!(
            snapshot.id,
            format!("user-7_{}", date.format("%Y-%m-%d"))
        );
        prop_assert_eq!(snapshot.snapshot_date, date);
        prop_assert_eq!(snapshot.user_id, "user-7");
    }

    /// Progress is the current/target share as a percentage, never
    /// negative, and zero for an unset target.
    #[test]
    fn prop_milestone_progress_follows_amounts(milestone in arb_milestone()) {
        let progress = milestone.progress_percentage();

        prop_assert!(progress >= Decimal::ZERO);
        if milestone.target_amount.is_zero() {
            prop_assert_eq!(progress, Decimal::ZERO);
        } else {
            let expected = (milestone.current_amount / milestone.target_amount
                * dec!(100))
                .round_dp(1);
            prop_assert_eq!(progress, expected);
        }
    }

    /// The coverage summary's protection gap always complements the
    /// coverage percentage, and both stay within 0..=100.
    #[test]
    fn prop_insurance_gap_complements_coverage(policies in arb_policies()) {
        let summary = InsuranceSummary::from_policies(&policies);

        prop_assert_eq!(
            summary.protection_gap,
            dec!(100) - summary.coverage_percentage
        );
        prop_assert!(summary.coverage_percentage >= Decimal::ZERO);
        prop_assert!(summary.coverage_percentage <= dec!(100));
    }

    /// Summary totals are plain sums over the policies handed in.
    #[test]
    fn prop_insurance_totals_are_sums(policies in arb_policies()) {
        let summary = InsuranceSummary::from_policies(&policies);

        let premiums: Decimal = policies.iter().map(|p| p.monthly_premium).sum();
        let coverage: Decimal = policies.iter().map(|p| p.coverage_amount).sum();

        prop_assert_eq!(summary.total_policies, policies.len());
        prop_assert_eq!(summary.total_monthly_premium, premiums);
        prop_assert_eq!(summary.total_coverage, coverage);
    }

    /// Every policy type lands in the by-type map, including types outside
    /// the scored trio.
    #[test]
    fn prop_insurance_by_type_covers_all_policies(policies in arb_policies()) {
        let summary = InsuranceSummary::from_policies(&policies);

        let mut expected: HashMap<String, Decimal> = HashMap::new();
        for policy in &policies {
            *expected.entry(policy.policy_type.clone()).or_default() +=
                policy.coverage_amount;
        }

        prop_assert_eq!(summary.coverage_by_type, expected);
    }
}
