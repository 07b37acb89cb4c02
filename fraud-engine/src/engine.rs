//! Rule evaluation engine

use crate::error::Result;
use crate::rules::RULES;
use crate::types::{SignalSet, Transaction};
use tracing::debug;

/// Stateless fraud detector.
///
/// Runs every rule in the registry against a transaction and collects
/// one signal per rule, in registry order. Evaluation is pure: the same
/// transaction snapshot always yields the same signals, and concurrent
/// calls share no mutable state.
pub struct FraudDetector;

impl FraudDetector {
    /// Create a new detector
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a transaction against the full rule registry.
    ///
    /// All-or-nothing: returns exactly one [`SignalSet`] of four
    /// signals in registry order, or the first rule precondition
    /// failure as [`crate::Error::InvalidInput`]. No partial set is
    /// ever returned.
    pub fn evaluate(&self, transaction: &Transaction) -> Result<SignalSet> {
        let [location, ip_address, consistency, card_details] = &RULES;

        let signals = SignalSet([
            (location.check)(transaction)?,
            (ip_address.check)(transaction)?,
            (consistency.check)(transaction)?,
            (card_details.check)(transaction)?,
        ]);

        for signal in &signals {
            debug!(
                signal_type = signal.signal_type.as_str(),
                potential_fraud = signal.potential_fraud,
                details = ?signal.details,
                "rule evaluated"
            );
        }

        Ok(signals)
    }
}

impl Default for FraudDetector {
    fn default() -> Self {
        Self::new()
    }
}
