//! Tests for wealth snapshot models.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::assets::AssetCategory;
    use crate::wealth::{WealthSnapshot, WealthSnapshotDB};

    fn sample_totals() -> HashMap<AssetCategory, Decimal> {
        let mut totals = HashMap::new();
        totals.insert(AssetCategory::CashSavings, dec!(25000));
        totals.insert(AssetCategory::RealEstate, dec!(450000));
        totals.insert(AssetCategory::StocksSecurities, dec!(75000));
        totals
    }

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_snapshot_id_embeds_user_and_date() {
        assert_eq!(
            WealthSnapshot::snapshot_id("user-1", june_first()),
            "user-1_2025-06-01"
        );
    }

    #[test]
    fn test_from_totals_total_equals_sum_of_subtotals() {
        let snapshot = WealthSnapshot::from_totals("user-1", june_first(), &sample_totals());

        assert_eq!(snapshot.total_wealth, dec!(550000));
        assert_eq!(snapshot.cash_savings, dec!(25000));
        assert_eq!(snapshot.real_estate, dec!(450000));
        assert_eq!(snapshot.stocks_securities, dec!(75000));

        let subtotal_sum: Decimal = snapshot.category_breakdown().iter().map(|(_, v)| *v).sum();
        assert_eq!(snapshot.total_wealth, subtotal_sum);
    }

    #[test]
    fn test_from_totals_missing_categories_are_zero() {
        let snapshot = WealthSnapshot::from_totals("user-1", june_first(), &sample_totals());

        assert_eq!(snapshot.retirement_accounts, dec!(0));
        assert_eq!(snapshot.business_assets, dec!(0));
        assert_eq!(snapshot.other_investments, dec!(0));
    }

    #[test]
    fn test_from_totals_empty_ledger_is_all_zero() {
        let snapshot = WealthSnapshot::from_totals("user-1", june_first(), &HashMap::new());
        assert_eq!(snapshot.total_wealth, dec!(0));
    }

    #[test]
    fn test_breakdown_follows_aggregation_order() {
        let snapshot = WealthSnapshot::from_totals("user-1", june_first(), &sample_totals());
        let categories: Vec<AssetCategory> = snapshot
            .category_breakdown()
            .iter()
            .map(|(c, _)| *c)
            .collect();
        assert_eq!(categories, AssetCategory::ALL.to_vec());
    }

    #[test]
    fn test_db_round_trip_preserves_snapshot() {
        let snapshot = WealthSnapshot::from_totals("user-1", june_first(), &sample_totals());
        let db = WealthSnapshotDB::from(&snapshot);
        assert_eq!(db.snapshot_date, "2025-06-01");
        assert_eq!(db.total_wealth, "550000");

        let restored = WealthSnapshot::from(db);
        assert_eq!(restored, snapshot);
    }
}
