//! Rule registry: the four fraud checks and their declarative tables.
//!
//! Each rule is a pure function of the transaction. Reason strings and
//! the state allow-list live in tables here rather than inline in the
//! checks, so a rule can be extended without touching evaluator code.

use crate::error::{Error, Result};
use crate::types::{Signal, SignalType, Transaction};
use rust_decimal::Decimal;

/// One entry in the rule registry
pub struct Rule {
    /// Signal category the rule produces
    pub signal_type: SignalType,
    /// The check itself, a pure function of the transaction
    pub check: fn(&Transaction) -> Result<Signal>,
}

/// The fixed rule registry, in evaluation order.
///
/// The array length and declaration order carry the response contract:
/// exactly four signals per call, Location first, CardDetails last.
pub const RULES: [Rule; 4] = [
    Rule {
        signal_type: SignalType::Location,
        check: check_location,
    },
    Rule {
        signal_type: SignalType::IpAddress,
        check: check_ip_address,
    },
    Rule {
        signal_type: SignalType::Transaction,
        check: check_transaction_details,
    },
    Rule {
        signal_type: SignalType::CardDetails,
        check: check_card_details,
    },
];

/// Reason strings attached to signal details, one table per rule.
pub(crate) mod reasons {
    pub const POTENTIAL_FRAUD_RISK: &str = "potential fraud risk";

    pub const LOCATION_INVALID_STATE: &str = "invalid state abbreviation";
    pub const LOCATION_MATCH: &str = "locations match";
    pub const LOCATION_SAME_STATE: &str = "same state";
    pub const LOCATION_DIFFER: &str = "locations differ";

    pub const IP_PRIVATE_RANGE: &str = "private range may mask origin via VPN";
    pub const IP_NOT_KNOWN_MALICIOUS: &str = "not known fraudulent or malicious";

    pub const TRANSACTION_NO_ITEMS: &str = "purchased item count < 1 while amount positive";
    pub const TRANSACTION_UNREMARKABLE: &str = "transaction details unremarkable";

    pub const CARD_NAME_MISMATCH: &str = "name on card does not match customer name";
    pub const CARD_UNREMARKABLE: &str = "card details unremarkable";
}

/// Two-letter abbreviations of the 50 US states
pub const US_STATE_CODES: [&str; 50] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

/// Whether the given string is a valid US state abbreviation,
/// case-insensitive.
pub fn is_valid_us_state(state: &str) -> bool {
    US_STATE_CODES
        .iter()
        .any(|code| code.eq_ignore_ascii_case(state))
}

/// Whether an IPv4 address string falls in a private range.
///
/// Static RFC-1918-style heuristic only: `10.0.0.0/8`,
/// `192.168.0.0/16`, and `172.16.0.0/12` by second octet. A malformed
/// second octet is treated as not matching, and IPv6 addresses are
/// never considered private.
pub fn is_private_ip(ip_address: &str) -> bool {
    ip_address.starts_with("10.")
        || ip_address.starts_with("192.168.")
        || (ip_address.starts_with("172.") && second_octet_in_range(ip_address, 16, 31))
}

/// Whether the second dotted octet parses and lands in `[lower, upper]`.
fn second_octet_in_range(ip_address: &str, lower: u8, upper: u8) -> bool {
    ip_address
        .split('.')
        .nth(1)
        .and_then(|octet| octet.parse::<u8>().ok())
        .is_some_and(|octet| octet >= lower && octet <= upper)
}

/// Location rule: compare customer and merchant city/state.
///
/// An invalid state abbreviation on either side dominates everything
/// else; otherwise only city+state match or state-only match are
/// benign.
pub(crate) fn check_location(transaction: &Transaction) -> Result<Signal> {
    let (customer_city, customer_state, merchant_city, merchant_state) = match (
        &transaction.customer_city,
        &transaction.customer_state,
        &transaction.merchant_city,
        &transaction.merchant_state,
    ) {
        (Some(cc), Some(cs), Some(mc), Some(ms)) => (cc, cs, mc, ms),
        _ => {
            return Err(Error::InvalidInput(
                "customer and merchant city/state are required".to_string(),
            ))
        }
    };

    if !is_valid_us_state(customer_state) || !is_valid_us_state(merchant_state) {
        return Ok(Signal::fraud(
            SignalType::Location,
            &[reasons::LOCATION_INVALID_STATE, reasons::POTENTIAL_FRAUD_RISK],
        ));
    }

    let same_city = customer_city.eq_ignore_ascii_case(merchant_city);
    let same_state = customer_state.eq_ignore_ascii_case(merchant_state);

    let signal = if same_city && same_state {
        Signal::clear(SignalType::Location, &[reasons::LOCATION_MATCH])
    } else if same_state {
        Signal::clear(SignalType::Location, &[reasons::LOCATION_SAME_STATE])
    } else {
        // State mismatch dominates city agreement.
        Signal::fraud(
            SignalType::Location,
            &[reasons::LOCATION_DIFFER, reasons::POTENTIAL_FRAUD_RISK],
        )
    };

    Ok(signal)
}

/// IP address rule: flag private-range addresses.
pub(crate) fn check_ip_address(transaction: &Transaction) -> Result<Signal> {
    let ip_address = transaction
        .ip_address
        .as_deref()
        .filter(|ip| !ip.is_empty())
        .ok_or_else(|| Error::InvalidInput("ip address is required".to_string()))?;

    let signal = if is_private_ip(ip_address) {
        Signal::fraud(SignalType::IpAddress, &[reasons::IP_PRIVATE_RANGE])
    } else {
        Signal::clear(SignalType::IpAddress, &[reasons::IP_NOT_KNOWN_MALICIOUS])
    };

    Ok(signal)
}

/// Transaction consistency rule: a positive charge with no items is
/// anomalous.
pub(crate) fn check_transaction_details(transaction: &Transaction) -> Result<Signal> {
    let (item_count, amount) = match (
        transaction.purchased_item_count,
        transaction.purchase_amount,
    ) {
        (Some(count), Some(amount)) => (count, amount),
        _ => {
            return Err(Error::InvalidInput(
                "purchased item count and purchase amount are required".to_string(),
            ))
        }
    };

    let signal = if item_count < 1 && amount > Decimal::ZERO {
        Signal::fraud(
            SignalType::Transaction,
            &[reasons::TRANSACTION_NO_ITEMS, reasons::POTENTIAL_FRAUD_RISK],
        )
    } else {
        Signal::clear(SignalType::Transaction, &[reasons::TRANSACTION_UNREMARKABLE])
    };

    Ok(signal)
}

/// Card details rule: name on card must match the customer name.
pub(crate) fn check_card_details(transaction: &Transaction) -> Result<Signal> {
    let (customer_name, name_on_card) =
        match (&transaction.customer_name, &transaction.name_on_card) {
            (Some(customer), Some(card)) => (customer, card),
            _ => {
                return Err(Error::InvalidInput(
                    "customer name and name on card are required".to_string(),
                ))
            }
        };

    let signal = if customer_name.eq_ignore_ascii_case(name_on_card) {
        Signal::clear(SignalType::CardDetails, &[reasons::CARD_UNREMARKABLE])
    } else {
        Signal::fraud(SignalType::CardDetails, &[reasons::CARD_NAME_MISMATCH])
    };

    Ok(signal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_validation_is_case_insensitive() {
        assert!(is_valid_us_state("IL"));
        assert!(is_valid_us_state("il"));
        assert!(is_valid_us_state("Il"));
        assert!(!is_valid_us_state("XX"));
        assert!(!is_valid_us_state(""));
        assert!(!is_valid_us_state("ILL"));
    }

    #[test]
    fn private_ip_ranges() {
        assert!(is_private_ip("10.0.0.1"));
        assert!(is_private_ip("10.255.255.255"));
        assert!(is_private_ip("192.168.0.10"));
        assert!(is_private_ip("172.16.0.1"));
        assert!(is_private_ip("172.31.255.1"));
    }

    #[test]
    fn public_ip_ranges() {
        assert!(!is_private_ip("11.168.1.1"));
        assert!(!is_private_ip("172.15.0.1"));
        assert!(!is_private_ip("172.32.0.1"));
        assert!(!is_private_ip("192.169.0.1"));
        assert!(!is_private_ip("8.8.8.8"));
    }

    #[test]
    fn malformed_octet_is_not_private() {
        assert!(!is_private_ip("172.abc.0.1"));
        assert!(!is_private_ip("172."));
        assert!(!is_private_ip("172"));
        assert!(!is_private_ip("172.999.0.1"));
    }

    #[test]
    fn ipv6_is_never_private() {
        assert!(!is_private_ip("::1"));
        assert!(!is_private_ip("fd00::1"));
        assert!(!is_private_ip("fe80::a00:27ff:fe4e:66a1"));
    }

    #[test]
    fn registry_declares_one_rule_per_signal_type() {
        let types: Vec<SignalType> = RULES.iter().map(|r| r.signal_type).collect();
        assert_eq!(
            types,
            vec![
                SignalType::Location,
                SignalType::IpAddress,
                SignalType::Transaction,
                SignalType::CardDetails,
            ]
        );
    }
}
