//! Core types for the fraud engine

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category of a fraud signal, one per rule in the registry.
///
/// The declaration order here is the evaluation order and the order
/// signals appear in a [`SignalSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalType {
    /// Customer vs. merchant city/state comparison
    Location,
    /// Private-range IP heuristic
    IpAddress,
    /// Item count vs. purchase amount consistency
    Transaction,
    /// Cardholder name match
    CardDetails,
}

impl SignalType {
    /// Stable string form, used for metric labels
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalType::Location => "LOCATION",
            SignalType::IpAddress => "IP_ADDRESS",
            SignalType::Transaction => "TRANSACTION",
            SignalType::CardDetails => "CARD_DETAILS",
        }
    }
}

/// One rule's verdict about a transaction.
///
/// Signals are constructed fully populated; `details` always carries at
/// least one human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    /// Which rule produced this signal
    pub signal_type: SignalType,
    /// Whether the rule flagged the transaction
    pub potential_fraud: bool,
    /// Human-readable reasons, never empty
    pub details: Vec<String>,
}

impl Signal {
    pub(crate) fn fraud(signal_type: SignalType, details: &[&str]) -> Self {
        Self::build(signal_type, true, details)
    }

    pub(crate) fn clear(signal_type: SignalType, details: &[&str]) -> Self {
        Self::build(signal_type, false, details)
    }

    fn build(signal_type: SignalType, potential_fraud: bool, details: &[&str]) -> Self {
        debug_assert!(!details.is_empty(), "signal details must not be empty");
        Self {
            signal_type,
            potential_fraud,
            details: details.iter().map(|d| (*d).to_string()).collect(),
        }
    }
}

/// The full result of one evaluation call: exactly four signals, one
/// per rule, in registry declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSet(pub(crate) [Signal; 4]);

impl SignalSet {
    /// Number of signals in every set
    pub const LEN: usize = 4;

    /// All four signals in evaluation order
    pub fn signals(&self) -> &[Signal; 4] {
        &self.0
    }

    /// Iterate signals in evaluation order
    pub fn iter(&self) -> std::slice::Iter<'_, Signal> {
        self.0.iter()
    }

    /// Look up the signal produced by a given rule
    pub fn get(&self, signal_type: SignalType) -> Option<&Signal> {
        self.0.iter().find(|s| s.signal_type == signal_type)
    }

    /// Whether any rule flagged the transaction
    pub fn any_fraud(&self) -> bool {
        self.0.iter().any(|s| s.potential_fraud)
    }
}

impl From<SignalSet> for Vec<Signal> {
    fn from(set: SignalSet) -> Self {
        set.0.into()
    }
}

impl<'a> IntoIterator for &'a SignalSet {
    type Item = &'a Signal;
    type IntoIter = std::slice::Iter<'a, Signal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Normalized transaction record, the input to [`crate::FraudDetector`].
///
/// Fields are optional at the type level; each rule raises
/// [`crate::Error::InvalidInput`] when a field it requires is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Customer's full name
    pub customer_name: Option<String>,
    /// Originating IP address in dotted-decimal form
    pub ip_address: Option<String>,
    /// Customer city
    pub customer_city: Option<String>,
    /// Customer state, two-letter US abbreviation
    pub customer_state: Option<String>,
    /// Last four digits of the card
    pub card_last4: Option<String>,
    /// Name printed on the card
    pub name_on_card: Option<String>,
    /// Purchase amount, non-negative
    pub purchase_amount: Option<Decimal>,
    /// Merchant's display name
    pub merchant_name: Option<String>,
    /// Merchant city
    pub merchant_city: Option<String>,
    /// Merchant state, two-letter US abbreviation
    pub merchant_state: Option<String>,
    /// Number of purchased items
    pub purchased_item_count: Option<i32>,
}
