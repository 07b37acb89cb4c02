//! Property-based tests for engine invariants
//!
//! These tests use proptest to verify:
//! - Cardinality and order: every successful call yields exactly four
//!   signals in the fixed Location, IpAddress, Transaction, CardDetails
//!   order
//! - Non-empty details: every returned signal carries at least one reason
//! - Idempotence: identical transaction snapshots yield identical signals
//! - The private-IP classifier agrees with the RFC-1918 ranges

use fraud_engine::{
    rules::{is_private_ip, US_STATE_CODES},
    FraudDetector, SignalType, Transaction,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating non-negative amounts with two decimal places
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0u64..1_000_000_00u64).prop_map(|cents| Decimal::new(cents as i64, 2))
}

/// Strategy for state codes, valid ones plus a few invalid
fn state_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(US_STATE_CODES.to_vec()).prop_map(String::from),
        1 => "[A-Z]{2}",
    ]
}

/// Strategy for dotted-decimal IPv4 addresses
fn ip_strategy() -> impl Strategy<Value = (u8, u8, u8, u8)> {
    (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
}

/// Strategy for fully-populated transactions
fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (
        "[A-Za-z ]{1,20}",
        ip_strategy(),
        "[A-Za-z]{1,12}",
        state_strategy(),
        "[A-Za-z ]{1,20}",
        amount_strategy(),
        "[A-Za-z]{1,12}",
        state_strategy(),
        0i32..100,
    )
        .prop_map(
            |(
                customer_name,
                (a, b, c, d),
                customer_city,
                customer_state,
                name_on_card,
                purchase_amount,
                merchant_city,
                merchant_state,
                purchased_item_count,
            )| Transaction {
                customer_name: Some(customer_name),
                ip_address: Some(format!("{}.{}.{}.{}", a, b, c, d)),
                customer_city: Some(customer_city),
                customer_state: Some(customer_state),
                card_last4: Some("1234".to_string()),
                name_on_card: Some(name_on_card),
                purchase_amount: Some(purchase_amount),
                merchant_name: Some("Merchant".to_string()),
                merchant_city: Some(merchant_city),
                merchant_state: Some(merchant_state),
                purchased_item_count: Some(purchased_item_count),
            },
        )
}

proptest! {
    #[test]
    fn evaluate_always_yields_four_ordered_signals(transaction in transaction_strategy()) {
        let detector = FraudDetector::new();
        let signals = detector.evaluate(&transaction).unwrap();

        let types: Vec<SignalType> = signals.iter().map(|s| s.signal_type).collect();
        prop_assert_eq!(types, vec![
            SignalType::Location,
            SignalType::IpAddress,
            SignalType::Transaction,
            SignalType::CardDetails,
        ]);
    }

    #[test]
    fn returned_signals_always_carry_reasons(transaction in transaction_strategy()) {
        let detector = FraudDetector::new();
        let signals = detector.evaluate(&transaction).unwrap();
        for signal in &signals {
            prop_assert!(!signal.details.is_empty());
        }
    }

    #[test]
    fn evaluation_is_idempotent(transaction in transaction_strategy()) {
        let detector = FraudDetector::new();
        let first = detector.evaluate(&transaction).unwrap();
        let second = detector.evaluate(&transaction).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn private_ip_classifier_matches_rfc1918((a, b, c, d) in ip_strategy()) {
        let ip = format!("{}.{}.{}.{}", a, b, c, d);
        let expected = a == 10
            || (a == 192 && b == 168)
            || (a == 172 && (16..=31).contains(&b));
        prop_assert_eq!(is_private_ip(&ip), expected);
    }

    #[test]
    fn no_item_positive_amount_always_flags_consistency(
        mut transaction in transaction_strategy(),
        cents in 1u64..1_000_000_00,
    ) {
        transaction.purchased_item_count = Some(0);
        transaction.purchase_amount = Some(Decimal::new(cents as i64, 2));

        let detector = FraudDetector::new();
        let signals = detector.evaluate(&transaction).unwrap();
        prop_assert!(signals.get(SignalType::Transaction).unwrap().potential_fraud);
    }
}
