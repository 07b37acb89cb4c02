use crate::audit::{AuditOperation, AuditTrail};
use crate::errors::ApiError;
use crate::metrics;
use crate::models::{HealthResponse, TransactionRequest, TransactionResponse};
use crate::store::TransactionStore;
use actix_web::{web, HttpResponse};
use fraud_engine::{FraudDetector, Transaction};
use lazy_static::lazy_static;
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

const EXECUTED_BY: &str = "fraud-api";
const AUDIT_PAGE_SIZE: usize = 100;

lazy_static! {
    static ref STARTED_AT: Instant = Instant::now();
}

// ===== Health Check =====
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: STARTED_AT.elapsed().as_secs(),
    })
}

// ===== Score Transaction =====
pub async fn score_transaction(
    req: web::Json<TransactionRequest>,
    detector: web::Data<FraudDetector>,
    store: web::Data<TransactionStore>,
    audit: web::Data<AuditTrail>,
) -> Result<HttpResponse, ApiError> {
    let transaction: Transaction = req.into_inner().into();

    let timer = metrics::SCORING_DURATION.start_timer();
    let signals = match detector.evaluate(&transaction) {
        Ok(signals) => {
            timer.observe_duration();
            signals
        }
        Err(err) => {
            timer.observe_duration();
            metrics::INVALID_TRANSACTIONS.inc();
            warn!(error = %err, "scoring request rejected");
            return Err(err.into());
        }
    };

    // Rejected requests persist nothing; store and audit only after
    // evaluation succeeds.
    let record = store.insert(transaction);
    info!(transaction_id = %record.transaction_id, "transaction stored");
    audit.record(
        AuditOperation::Insert,
        record.transaction_id,
        &record.transaction,
        EXECUTED_BY,
    );

    metrics::TRANSACTIONS_SCORED.inc();
    for signal in &signals {
        if signal.potential_fraud {
            metrics::FRAUD_SIGNALS_TOTAL
                .with_label_values(&[signal.signal_type.as_str()])
                .inc();
        }
    }

    store.attach_signals(record.transaction_id, signals.clone());
    audit.record(
        AuditOperation::Update,
        record.transaction_id,
        &signals,
        EXECUTED_BY,
    );

    info!(
        transaction_id = %record.transaction_id,
        any_fraud = signals.any_fraud(),
        "transaction scored"
    );

    Ok(HttpResponse::Ok().json(TransactionResponse::new(
        record.transaction_id,
        &record.transaction,
        Some(signals),
    )))
}

// ===== Get Scored Transaction =====
pub async fn get_transaction(
    path: web::Path<Uuid>,
    store: web::Data<TransactionStore>,
) -> Result<HttpResponse, ApiError> {
    let transaction_id = path.into_inner();

    let record = store
        .get(transaction_id)
        .ok_or_else(|| ApiError::NotFound(format!("transaction {}", transaction_id)))?;

    Ok(HttpResponse::Ok().json(TransactionResponse::new(
        record.transaction_id,
        &record.transaction,
        record.signals,
    )))
}

// ===== Recent Audit Entries =====
pub async fn get_audit(audit: web::Data<AuditTrail>) -> HttpResponse {
    HttpResponse::Ok().json(audit.recent(AUDIT_PAGE_SIZE))
}

// ===== Prometheus Metrics =====
pub async fn get_metrics() -> Result<HttpResponse, ApiError> {
    let body = metrics::metrics_handler().map_err(|e| ApiError::InternalError(e.to_string()))?;
    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(body))
}

// ===== Configure Routes =====
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/score-transaction", web::post().to(score_transaction))
            .route("/transactions/{transaction_id}", web::get().to(get_transaction))
            .route("/audit", web::get().to(get_audit)),
    )
    .route("/health", web::get().to(health_check))
    .route("/metrics", web::get().to(get_metrics));
}
