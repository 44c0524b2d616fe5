use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{
    default_scoring_config, AppState, InMemoryAssessmentRepository, SimulatedDispatcher,
};
use crate::routes::with_decisioning_routes;
use factorflow::config::AppConfig;
use factorflow::error::AppError;
use factorflow::telemetry;
use factorflow::workflows::collections::CollectionsService;
use factorflow::workflows::underwriting::UnderwritingService;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let underwriting = Arc::new(UnderwritingService::new(
        repository,
        default_scoring_config(),
    ));

    if config.notifications.simulation_only() {
        info!("no notification sender configured, dispatch runs in simulation mode");
    }
    let dispatcher = Arc::new(SimulatedDispatcher::new(
        config.notifications.sender.clone(),
    ));
    let collections = Arc::new(CollectionsService::new(dispatcher));

    let app = with_decisioning_routes(underwriting, collections)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "credit decisioning service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
