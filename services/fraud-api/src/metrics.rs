use lazy_static::lazy_static;
use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};

lazy_static! {
    // Scoring metrics
    pub static ref TRANSACTIONS_SCORED: IntCounter = IntCounter::new(
        "transactions_scored_total",
        "Total transactions scored"
    ).expect("metric can be created");

    pub static ref INVALID_TRANSACTIONS: IntCounter = IntCounter::new(
        "invalid_transactions_total",
        "Total scoring requests rejected for invalid input"
    ).expect("metric can be created");

    pub static ref FRAUD_SIGNALS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("fraud_signals_total", "Fraud signals raised, by rule"),
        &["signal_type"]
    ).expect("metric can be created");

    pub static ref SCORING_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new("scoring_duration_seconds", "Rule evaluation duration in seconds")
            .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1])
    ).expect("metric can be created");
}

/// Register all metrics with the given registry
pub fn register_metrics(registry: &Registry) -> Result<(), Box<dyn std::error::Error>> {
    registry.register(Box::new(TRANSACTIONS_SCORED.clone()))?;
    registry.register(Box::new(INVALID_TRANSACTIONS.clone()))?;
    registry.register(Box::new(FRAUD_SIGNALS_TOTAL.clone()))?;
    registry.register(Box::new(SCORING_DURATION.clone()))?;

    Ok(())
}

/// Generate metrics output in Prometheus text format
pub fn metrics_handler() -> Result<String, Box<dyn std::error::Error>> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = vec![];
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_registration() {
        let registry = Registry::new();
        let result = register_metrics(&registry);
        assert!(result.is_ok());
    }

    #[test]
    fn test_metrics_handler() {
        TRANSACTIONS_SCORED.inc();
        FRAUD_SIGNALS_TOTAL.with_label_values(&["LOCATION"]).inc();
        let result = metrics_handler();
        assert!(result.is_ok());
    }
}
