//! Tests for asset records and category math.

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal_macros::dec;

    use crate::assets::{Asset, AssetCategory, AssetDB, AssetUpdate, NewAsset};

    fn create_new_asset() -> NewAsset {
        NewAsset {
            name: "Main savings".to_string(),
            category: "cash_savings".to_string(),
            value: dec!(25000),
            description: None,
            institution: Some("First National".to_string()),
            property_address: None,
            mortgage_balance: None,
            shares_quantity: None,
            interest_rate: None,
        }
    }

    // ==================== Category Tests ====================

    #[test]
    fn test_category_keys_round_trip() {
        for category in AssetCategory::ALL {
            assert_eq!(AssetCategory::from_key(category.as_key()), Some(category));
        }
    }

    #[test]
    fn test_category_rejects_unknown_key() {
        assert_eq!(AssetCategory::from_key("collectibles"), None);
        assert_eq!(AssetCategory::from_key(""), None);
        assert_eq!(AssetCategory::from_key("Cash_Savings"), None);
    }

    #[test]
    fn test_category_serializes_as_snake_case() {
        let json = serde_json::to_string(&AssetCategory::RealEstate).unwrap();
        assert_eq!(json, "\"real_estate\"");
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_new_asset_validate_accepts_well_formed_input() {
        assert!(create_new_asset().validate().is_ok());
    }

    #[test]
    fn test_new_asset_validate_rejects_blank_name() {
        let mut new_asset = create_new_asset();
        new_asset.name = "  ".to_string();
        assert!(new_asset.validate().is_err());
    }

    #[test]
    fn test_new_asset_validate_rejects_negative_value() {
        let mut new_asset = create_new_asset();
        new_asset.value = dec!(-1);
        assert!(new_asset.validate().is_err());
    }

    #[test]
    fn test_new_asset_accepts_unrecognized_category() {
        let mut new_asset = create_new_asset();
        new_asset.category = "collectibles".to_string();
        assert!(new_asset.validate().is_ok());
    }

    #[test]
    fn test_update_validate_rejects_negative_value() {
        let update = AssetUpdate {
            value: Some(dec!(-0.01)),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    // ==================== Conversion Tests ====================

    #[test]
    fn test_into_asset_assigns_owner_and_trims_name() {
        let mut new_asset = create_new_asset();
        new_asset.name = "  Main savings  ".to_string();

        let asset = new_asset.into_asset("user-1", "asset-1".to_string());

        assert_eq!(asset.id, "asset-1");
        assert_eq!(asset.user_id, "user-1");
        assert_eq!(asset.name, "Main savings");
        assert_eq!(asset.value, dec!(25000));
    }

    #[test]
    fn test_db_round_trip_preserves_decimals() {
        let asset = create_new_asset().into_asset("user-1", "asset-1".to_string());
        let db = AssetDB::from(&asset);
        assert_eq!(db.value, "25000");

        let restored = Asset::from(db);
        assert_eq!(restored, asset);
    }

    #[test]
    fn test_db_conversion_defaults_malformed_value_to_zero() {
        let asset = create_new_asset().into_asset("user-1", "asset-1".to_string());
        let mut db = AssetDB::from(&asset);
        db.value = "not-a-number".to_string();

        let restored = Asset::from(db);
        assert_eq!(restored.value, dec!(0));
    }

    // ==================== Partial Update Tests ====================

    #[test]
    fn test_update_applies_only_set_fields() {
        let mut asset = create_new_asset().into_asset("user-1", "asset-1".to_string());
        let before_updated_at = asset.updated_at;

        let update = AssetUpdate {
            value: Some(dec!(26500)),
            description: Some("Moved to a new account".to_string()),
            ..Default::default()
        };
        update.apply_to(&mut asset);

        assert_eq!(asset.value, dec!(26500));
        assert_eq!(asset.description.as_deref(), Some("Moved to a new account"));
        assert_eq!(asset.name, "Main savings");
        assert_eq!(asset.category, "cash_savings");
        // apply_to never touches timestamps; the service stamps updated_at
        assert_eq!(asset.updated_at, before_updated_at);
    }

    #[test]
    fn test_update_with_no_fields_is_a_noop() {
        let mut asset = create_new_asset().into_asset("user-1", "asset-1".to_string());
        asset.created_at = Utc::now().naive_utc();
        let before = asset.clone();

        AssetUpdate::default().apply_to(&mut asset);

        assert_eq!(asset, before);
    }
}
