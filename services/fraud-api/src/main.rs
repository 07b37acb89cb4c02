use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use fraud_api::{audit::AuditTrail, config::Config, handlers, metrics, store::TransactionStore};
use fraud_engine::FraudDetector;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .json()
        .init();

    info!("Starting Fraud API...");

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    info!("Configuration loaded successfully");

    // Register Prometheus metrics
    if let Err(e) = metrics::register_metrics(prometheus::default_registry()) {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Metrics registration failed: {}", e),
        ));
    }

    // Initialize components
    let detector = web::Data::new(FraudDetector::new());
    let store = web::Data::new(TransactionStore::new());
    let audit = web::Data::new(AuditTrail::new(config.audit.max_entries));

    info!("Scoring components initialized successfully");

    let server_config = config.server.clone();

    info!(
        "Starting HTTP server on {}:{}",
        server_config.host, server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(detector.clone())
            .app_data(store.clone())
            .app_data(audit.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(middleware::Logger::default())
            .configure(handlers::configure_routes)
    })
    .workers(server_config.workers)
    .bind((server_config.host, server_config.port))?
    .run()
    .await
}
