use crate::cli::ServeArgs;
use crate::infra::{load_startup_rubric, AppState};
use crate::routes::with_evaluation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use banca_virtual::config::AppConfig;
use banca_virtual::error::AppError;
use banca_virtual::telemetry;
use banca_virtual::workflows::evaluation::EvaluationEngine;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let loaded = load_startup_rubric(&config.rubric.path)?;
    info!(
        rubric = %loaded.rules.name,
        version = %loaded.rules.version,
        source = loaded.source.label(),
        criteria = loaded.rules.criteria.len(),
        "rubric loaded for this evaluation session"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        engine: Arc::new(EvaluationEngine::new(loaded.rules)),
        rubric_source: Arc::new(loaded.source),
    };

    let app = with_evaluation_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "banca virtual evaluation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
