//! Tests for journal domain models.

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;

    use crate::journal::{
        CashFlowEvent, CashFlowEventUpdate, CashFlowKind, ExpenseEventDB, IncomeEventDB,
        NewCashFlowEvent, DEFAULT_FREQUENCY,
    };

    fn create_new_event() -> NewCashFlowEvent {
        NewCashFlowEvent {
            name: "Salary".to_string(),
            amount: dec!(4200),
            event_date: Some(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()),
            category: "employment".to_string(),
            frequency: Some("monthly".to_string()),
            description: None,
        }
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_accepts_well_formed_event() {
        assert!(create_new_event().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut event = create_new_event();
        event.name = " ".to_string();
        assert!(event.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_amount() {
        let mut event = create_new_event();
        event.amount = dec!(0);
        assert!(event.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let mut event = create_new_event();
        event.amount = dec!(-50);
        assert!(event.validate().is_err());
    }

    #[test]
    fn test_update_validate_rejects_non_positive_amount() {
        let update = CashFlowEventUpdate {
            amount: Some(dec!(0)),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_into_event_defaults_date_and_frequency() {
        let mut new_event = create_new_event();
        new_event.event_date = None;
        new_event.frequency = None;

        let event = new_event.into_event("user-1", "event-1".to_string());

        assert_eq!(event.event_date, Utc::now().date_naive());
        assert_eq!(event.frequency, DEFAULT_FREQUENCY);
        assert_eq!(event.user_id, "user-1");
    }

    #[test]
    fn test_kind_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&CashFlowKind::Income).unwrap(),
            "\"income\""
        );
        assert_eq!(
            serde_json::to_string(&CashFlowKind::Expense).unwrap(),
            "\"expense\""
        );
    }

    // ==================== Conversion Tests ====================

    #[test]
    fn test_income_db_round_trip() {
        let event = create_new_event().into_event("user-1", "event-1".to_string());
        let db = IncomeEventDB::from(&event);
        assert_eq!(db.amount, "4200");
        assert_eq!(db.event_date, "2025-06-01");

        let restored = CashFlowEvent::from(db);
        assert_eq!(restored, event);
    }

    #[test]
    fn test_expense_db_round_trip() {
        let event = create_new_event().into_event("user-1", "event-1".to_string());
        let restored = CashFlowEvent::from(ExpenseEventDB::from(&event));
        assert_eq!(restored, event);
    }

    // ==================== Partial Update Tests ====================

    #[test]
    fn test_update_applies_only_set_fields() {
        let mut event = create_new_event().into_event("user-1", "event-1".to_string());

        let update = CashFlowEventUpdate {
            amount: Some(dec!(4500)),
            description: Some("After raise".to_string()),
            ..Default::default()
        };
        update.apply_to(&mut event);

        assert_eq!(event.amount, dec!(4500));
        assert_eq!(event.description.as_deref(), Some("After raise"));
        assert_eq!(event.name, "Salary");
        assert_eq!(event.frequency, "monthly");
    }
}
