use std::sync::Arc;

use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json};
use serde::Serialize;
use serde_json::json;

use satsoil::showcase::blueprint::{
    dd_report_sections, featured_plots, invest_steps, market_alerts, portfolio_holdings,
    DdSection, FarmDossier, FeaturedPlot, InvestStep, MarketAlert, PortfolioHolding,
};
use satsoil::showcase::session::session_router;

use crate::infra::{AppState, CollectingNoticePublisher, ShowcaseSession};

#[derive(Debug, Serialize)]
pub(crate) struct DashboardResponse {
    pub(crate) featured_plots: Vec<FeaturedPlot>,
    pub(crate) market_alerts: Vec<MarketAlert>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DossierResponse {
    pub(crate) dossier: FarmDossier,
    pub(crate) dd_report: Vec<DdSection>,
    pub(crate) invest_steps: Vec<InvestStep>,
}

pub(crate) fn with_session_routes(
    service: Arc<ShowcaseSession>,
    notices: Arc<CollectingNoticePublisher>,
) -> axum::Router {
    session_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/dashboard", get(dashboard_endpoint))
        .route("/api/v1/farms/:farm_id/dossier", get(dossier_endpoint))
        .route("/api/v1/portfolio", get(portfolio_endpoint))
        .route("/api/v1/notices", get(notices_endpoint))
        .layer(Extension(notices))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn dashboard_endpoint() -> Json<DashboardResponse> {
    Json(DashboardResponse {
        featured_plots: featured_plots(),
        market_alerts: market_alerts(),
    })
}

pub(crate) async fn dossier_endpoint(Path(farm_id): Path<String>) -> impl IntoResponse {
    match FarmDossier::lookup(&farm_id) {
        Some(dossier) => (
            StatusCode::OK,
            Json(json!(DossierResponse {
                dossier,
                dd_report: dd_report_sections(),
                invest_steps: invest_steps(),
            })),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("no dossier on file for '{farm_id}'") })),
        ),
    }
}

pub(crate) async fn portfolio_endpoint() -> Json<Vec<PortfolioHolding>> {
    Json(portfolio_holdings())
}

pub(crate) async fn notices_endpoint(
    Extension(notices): Extension<Arc<CollectingNoticePublisher>>,
) -> impl IntoResponse {
    (StatusCode::OK, Json(notices.events()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use satsoil::config::SessionConfig;
    use satsoil::showcase::session::SessionService;
    use serde_json::Value;
    use tower::ServiceExt;

    fn build_router() -> axum::Router {
        let notices = Arc::new(CollectingNoticePublisher::default());
        let map = Arc::new(crate::infra::TracingMapWidget);
        let service = Arc::new(SessionService::new(
            notices.clone(),
            map,
            SessionConfig {
                search_seed: Some(7),
                ..SessionConfig::default()
            },
        ));
        with_session_routes(service, notices)
    }

    async fn get_json(router: axum::Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        (status, serde_json::from_slice(&bytes).expect("json"))
    }

    #[tokio::test]
    async fn dashboard_lists_the_three_featured_plots() {
        let (status, payload) = get_json(build_router(), "/api/v1/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        let plots = payload
            .get("featured_plots")
            .and_then(Value::as_array)
            .expect("plots");
        assert_eq!(plots.len(), 3);
        assert_eq!(plots[0].get("farm_id"), Some(&Value::from("farmA")));
        let alerts = payload
            .get("market_alerts")
            .and_then(Value::as_array)
            .expect("alerts");
        assert_eq!(alerts.len(), 5);
    }

    #[tokio::test]
    async fn dossier_is_served_for_the_showcased_farm_only() {
        let (status, payload) = get_json(build_router(), "/api/v1/farms/farmA/dossier").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            payload
                .get("dossier")
                .and_then(|dossier| dossier.get("potential_score")),
            Some(&Value::from(82))
        );
        assert_eq!(
            payload
                .get("dd_report")
                .and_then(Value::as_array)
                .map(Vec::len),
            Some(5)
        );

        let (status, _) = get_json(build_router(), "/api/v1/farms/farmZ/dossier").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn notices_endpoint_exposes_published_history() {
        let notices = Arc::new(CollectingNoticePublisher::default());
        let map = Arc::new(crate::infra::TracingMapWidget);
        let service = Arc::new(SessionService::new(
            notices.clone(),
            map,
            SessionConfig::default(),
        ));
        service.add_to_watchlist("Farm A");
        let router = with_session_routes(service, notices);

        let (status, payload) = get_json(router, "/api/v1/notices").await;
        assert_eq!(status, StatusCode::OK);
        let events = payload.as_array().expect("notice array");
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].get("kind"),
            Some(&Value::from("watchlist_added"))
        );
    }

    #[tokio::test]
    async fn health_endpoint_is_always_ok() {
        let (status, payload) = get_json(build_router(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.get("status"), Some(&Value::from("ok")));
    }
}
