//! Tests for policy expiry derivation and form validation

use chrono::{Duration, NaiveDate, NaiveDateTime};
use core_kernel::ClientId;
use domain_policy::{ClientRef, Policy, PolicyForm, POLICY_FIELDS, PolicyValidator};
use proptest::prelude::*;

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2022, 3, 15).unwrap().and_hms_opt(9, 30, 0).unwrap()
}

fn policy_ending(end: NaiveDateTime) -> Policy {
    Policy {
        id: None,
        number: 1,
        effective_date_start_at: end - Duration::days(365),
        effective_date_end_at: end,
        vehicle_plate: "ABC1D23".to_string(),
        client_id: ClientId::new("c1"),
    }
}

mod expiry {
    use super::*;

    proptest! {
        #[test]
        fn prop_future_end_counts_whole_days_remaining(minutes in 1i64..5_000_000) {
            let now = base();
            let status = policy_ending(now + Duration::minutes(minutes)).expiry_status(now);

            prop_assert!(!status.expired);
            prop_assert!(status.not_expired);
            prop_assert_eq!(status.days_to_expire, minutes / (24 * 60));
            prop_assert_eq!(status.days_expired, -(minutes / (24 * 60)));
        }

        #[test]
        fn prop_past_end_counts_whole_days_elapsed(minutes in 1i64..5_000_000) {
            let now = base();
            let status = policy_ending(now - Duration::minutes(minutes)).expiry_status(now);

            prop_assert!(status.expired);
            prop_assert!(!status.not_expired);
            prop_assert_eq!(status.days_expired, minutes / (24 * 60));
        }

        #[test]
        fn prop_expired_and_not_expired_are_complementary(offset in -10_000i64..10_000) {
            let now = base();
            let status = policy_ending(now + Duration::hours(offset)).expiry_status(now);
            prop_assert_ne!(status.expired, status.not_expired);
        }
    }
}

mod form_input {
    use super::*;

    #[test]
    fn test_client_id_reads_through_reference() {
        let form = PolicyForm {
            client: Some(ClientRef::new(ClientId::new("abc"))),
            ..PolicyForm::default()
        };
        assert_eq!(form.client_id(), Some(&ClientId::new("abc")));

        let form = PolicyForm {
            client: Some(ClientRef::default()),
            ..PolicyForm::default()
        };
        assert_eq!(form.client_id(), None);
    }

    #[test]
    fn test_blank_fields_become_structural_errors() {
        let form = PolicyForm {
            vehicle_plate: Some(String::new()),
            ..PolicyForm::default()
        }
        .with_number(10);

        let errors = PolicyValidator::validate_structure(&form);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["effectiveDateStartAt", "effectiveDateEndAt", "vehiclePlate", "client"]
        );
    }

    #[test]
    fn test_field_order_matches_public_names() {
        let public: Vec<&str> = POLICY_FIELDS.iter().map(|(_, p)| *p).collect();
        assert_eq!(
            public,
            vec!["number", "effectiveDateStartAt", "effectiveDateEndAt", "vehiclePlate", "client"]
        );
    }
}
