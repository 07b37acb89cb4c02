pub mod audit;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod store;

// Re-exports for convenience
pub use audit::AuditTrail;
pub use store::TransactionStore;
