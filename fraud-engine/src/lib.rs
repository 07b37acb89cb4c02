//! Fraud Signal Engine
//!
//! Deterministic rule evaluation for single financial transactions.
//! Each transaction is checked by a fixed registry of four independent
//! rules (location, IP address, transaction consistency, card details),
//! each producing one reasoned fraud/no-fraud signal.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod engine;
pub mod error;
pub mod rules;
pub mod types;

pub use engine::FraudDetector;
pub use error::{Error, Result};
pub use types::*;
