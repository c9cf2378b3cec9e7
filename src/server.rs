use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::shortlist_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use shortlist::config::AppConfig;
use shortlist::error::AppError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        shortlist: config.shortlist,
    };

    let app = shortlist_router()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, parallel = config.shortlist.parallel, "placement shortlister ready");

    axum::serve(listener, app).await?;
    Ok(())
}
