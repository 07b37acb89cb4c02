use chrono::{DateTime, Utc};
use dashmap::DashMap;
use fraud_engine::{SignalSet, Transaction};
use serde::Serialize;
use uuid::Uuid;

/// A stored transaction together with the signals produced for it.
/// `signals` is empty only between insertion and signal attachment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredTransaction {
    pub transaction_id: Uuid,
    pub transaction: Transaction,
    pub signals: Option<SignalSet>,
    pub recorded_at: DateTime<Utc>,
}

/// In-memory persistence collaborator. Saves a scored transaction,
/// assigns it an identifier, and attaches its signals.
pub struct TransactionStore {
    records: DashMap<Uuid, ScoredTransaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Persist a transaction and assign it a fresh identifier
    pub fn insert(&self, transaction: Transaction) -> ScoredTransaction {
        let record = ScoredTransaction {
            transaction_id: Uuid::new_v4(),
            transaction,
            signals: None,
            recorded_at: Utc::now(),
        };
        self.records.insert(record.transaction_id, record.clone());
        record
    }

    /// Attach the signal set produced for a stored transaction
    pub fn attach_signals(&self, transaction_id: Uuid, signals: SignalSet) -> bool {
        match self.records.get_mut(&transaction_id) {
            Some(mut record) => {
                record.signals = Some(signals);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, transaction_id: Uuid) -> Option<ScoredTransaction> {
        self.records
            .get(&transaction_id)
            .map(|record| record.value().clone())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraud_engine::FraudDetector;
    use rust_decimal_macros::dec;

    fn sample_transaction() -> Transaction {
        Transaction {
            customer_name: Some("John Doe".to_string()),
            ip_address: Some("11.168.1.1".to_string()),
            customer_city: Some("Springfield".to_string()),
            customer_state: Some("IL".to_string()),
            card_last4: Some("1234".to_string()),
            name_on_card: Some("John Doe".to_string()),
            purchase_amount: Some(dec!(100.00)),
            merchant_name: Some("Merchant Name".to_string()),
            merchant_city: Some("Chicago".to_string()),
            merchant_state: Some("IL".to_string()),
            purchased_item_count: Some(1),
        }
    }

    #[test]
    fn insert_assigns_unique_ids() {
        let store = TransactionStore::new();
        let first = store.insert(sample_transaction());
        let second = store.insert(sample_transaction());

        assert_ne!(first.transaction_id, second.transaction_id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn signals_attach_to_stored_record() {
        let store = TransactionStore::new();
        let record = store.insert(sample_transaction());
        assert!(store.get(record.transaction_id).unwrap().signals.is_none());

        let signals = FraudDetector::new()
            .evaluate(&record.transaction)
            .unwrap();
        assert!(store.attach_signals(record.transaction_id, signals));

        let stored = store.get(record.transaction_id).unwrap();
        assert_eq!(stored.signals.unwrap().signals().len(), 4);
    }

    #[test]
    fn attach_to_unknown_id_is_rejected() {
        let store = TransactionStore::new();
        let signals = FraudDetector::new()
            .evaluate(&sample_transaction())
            .unwrap();
        assert!(!store.attach_signals(Uuid::new_v4(), signals));
    }

    #[test]
    fn get_unknown_id_is_none() {
        let store = TransactionStore::new();
        assert!(store.get(Uuid::new_v4()).is_none());
    }
}
