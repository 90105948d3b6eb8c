use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::comparison_router;
use axum_prometheus::PrometheusMetricLayer;
use name_match::config::AppConfig;
use name_match::error::AppError;
use name_match::telemetry;
use std::sync::atomic::Ordering;
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let app_state = AppState::new(config.limits).with_metrics(prometheus_handle);
    let readiness_flag = app_state.readiness.clone();

    let app = comparison_router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        max_name_chars = config.limits.max_name_chars,
        "name match debugger ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
