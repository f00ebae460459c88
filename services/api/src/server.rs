use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use satsoil::config::AppConfig;
use satsoil::error::AppError;
use satsoil::showcase::session::SessionService;
use satsoil::telemetry;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{AppState, CollectingNoticePublisher, TracingMapWidget};
use crate::routes::with_session_routes;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(seed) = args.search_seed.take() {
        config.session.search_seed = Some(seed);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let notices = Arc::new(CollectingNoticePublisher::default());
    let map = Arc::new(TracingMapWidget);
    let session = Arc::new(SessionService::new(
        notices.clone(),
        map,
        config.session.clone(),
    ));

    let app = with_session_routes(session, notices)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "satsoil showcase service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
