use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use rand::Rng;
use serde::Deserialize;
use serde_json::json;

use crate::geo::MapWidget;

use super::notices::NoticePublisher;
use super::service::SessionService;
use super::view::{FarmId, SearchTab, Section};

/// Router builder exposing the session actions over HTTP.
///
/// Navigation actions respond with the refreshed snapshot so the
/// rendering layer can re-derive visibility in one round trip.
pub fn session_router<N, M, R>(service: Arc<SessionService<N, M, R>>) -> Router
where
    N: NoticePublisher + 'static,
    M: MapWidget + 'static,
    R: Rng + Send + 'static,
{
    Router::new()
        .route("/api/v1/session", get(snapshot_handler::<N, M, R>))
        .route("/api/v1/session/search", post(search_handler::<N, M, R>))
        .route("/api/v1/session/section", post(section_handler::<N, M, R>))
        .route(
            "/api/v1/session/farm-card",
            post(farm_card_handler::<N, M, R>),
        )
        .route(
            "/api/v1/session/dd-report",
            post(dd_report_handler::<N, M, R>),
        )
        .route(
            "/api/v1/session/invest-flow",
            post(invest_flow_handler::<N, M, R>),
        )
        .route(
            "/api/v1/session/invest-flow/steps/:step",
            post(invest_step_handler::<N, M, R>),
        )
        .route("/api/v1/session/back", post(back_handler::<N, M, R>))
        .route(
            "/api/v1/session/image-year",
            post(image_year_handler::<N, M, R>),
        )
        .route(
            "/api/v1/session/search-tab",
            post(search_tab_handler::<N, M, R>),
        )
        .route(
            "/api/v1/session/language",
            post(language_handler::<N, M, R>),
        )
        .route(
            "/api/v1/session/watchlist",
            get(watchlist_handler::<N, M, R>).post(watchlist_add_handler::<N, M, R>),
        )
        .route(
            "/api/v1/session/watchlist/:farm_name",
            delete(watchlist_remove_handler::<N, M, R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
struct SectionPayload {
    section: Section,
}

#[derive(Debug, Deserialize)]
struct FarmCardPayload {
    farm_id: String,
}

#[derive(Debug, Deserialize)]
struct ImageYearPayload {
    year: u16,
}

#[derive(Debug, Deserialize)]
struct SearchTabPayload {
    tab: SearchTab,
}

#[derive(Debug, Deserialize)]
struct LanguagePayload {
    language: String,
}

#[derive(Debug, Deserialize)]
struct WatchlistPayload {
    farm_name: String,
}

async fn snapshot_handler<N, M, R>(
    State(service): State<Arc<SessionService<N, M, R>>>,
) -> Response
where
    N: NoticePublisher + 'static,
    M: MapWidget + 'static,
    R: Rng + Send + 'static,
{
    (StatusCode::OK, Json(service.snapshot())).into_response()
}

async fn search_handler<N, M, R>(State(service): State<Arc<SessionService<N, M, R>>>) -> Response
where
    N: NoticePublisher + 'static,
    M: MapWidget + 'static,
    R: Rng + Send + 'static,
{
    let results = service.run_search();
    (StatusCode::OK, Json(results)).into_response()
}

async fn section_handler<N, M, R>(
    State(service): State<Arc<SessionService<N, M, R>>>,
    Json(payload): Json<SectionPayload>,
) -> Response
where
    N: NoticePublisher + 'static,
    M: MapWidget + 'static,
    R: Rng + Send + 'static,
{
    service.select_section(payload.section);
    (StatusCode::OK, Json(service.snapshot())).into_response()
}

async fn farm_card_handler<N, M, R>(
    State(service): State<Arc<SessionService<N, M, R>>>,
    Json(payload): Json<FarmCardPayload>,
) -> Response
where
    N: NoticePublisher + 'static,
    M: MapWidget + 'static,
    R: Rng + Send + 'static,
{
    service.select_farm_card(FarmId(payload.farm_id));
    (StatusCode::OK, Json(service.snapshot())).into_response()
}

async fn dd_report_handler<N, M, R>(State(service): State<Arc<SessionService<N, M, R>>>) -> Response
where
    N: NoticePublisher + 'static,
    M: MapWidget + 'static,
    R: Rng + Send + 'static,
{
    transition_response(service.open_dd_report(), &service, "dd report requires a detail view")
}

async fn invest_flow_handler<N, M, R>(
    State(service): State<Arc<SessionService<N, M, R>>>,
) -> Response
where
    N: NoticePublisher + 'static,
    M: MapWidget + 'static,
    R: Rng + Send + 'static,
{
    transition_response(
        service.open_invest_flow(),
        &service,
        "invest flow requires a detail view",
    )
}

async fn invest_step_handler<N, M, R>(
    State(service): State<Arc<SessionService<N, M, R>>>,
    Path(step): Path<String>,
) -> Response
where
    N: NoticePublisher + 'static,
    M: MapWidget + 'static,
    R: Rng + Send + 'static,
{
    match service.trigger_invest_step(&step) {
        Some(notice) => (StatusCode::OK, Json(notice)).into_response(),
        None => {
            let payload = json!({ "error": format!("invest step '{step}' not available") });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
    }
}

async fn back_handler<N, M, R>(State(service): State<Arc<SessionService<N, M, R>>>) -> Response
where
    N: NoticePublisher + 'static,
    M: MapWidget + 'static,
    R: Rng + Send + 'static,
{
    transition_response(service.back(), &service, "back requires a report view")
}

async fn image_year_handler<N, M, R>(
    State(service): State<Arc<SessionService<N, M, R>>>,
    Json(payload): Json<ImageYearPayload>,
) -> Response
where
    N: NoticePublisher + 'static,
    M: MapWidget + 'static,
    R: Rng + Send + 'static,
{
    if service.select_image_year(payload.year) {
        (StatusCode::OK, Json(service.snapshot())).into_response()
    } else {
        let payload = json!({ "error": format!("unsupported imagery year: {}", payload.year) });
        (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
    }
}

async fn search_tab_handler<N, M, R>(
    State(service): State<Arc<SessionService<N, M, R>>>,
    Json(payload): Json<SearchTabPayload>,
) -> Response
where
    N: NoticePublisher + 'static,
    M: MapWidget + 'static,
    R: Rng + Send + 'static,
{
    service.switch_search_tab(payload.tab);
    (StatusCode::OK, Json(service.snapshot())).into_response()
}

async fn language_handler<N, M, R>(
    State(service): State<Arc<SessionService<N, M, R>>>,
    Json(payload): Json<LanguagePayload>,
) -> Response
where
    N: NoticePublisher + 'static,
    M: MapWidget + 'static,
    R: Rng + Send + 'static,
{
    match service.set_language(&payload.language) {
        Ok(_) => (StatusCode::OK, Json(service.snapshot())).into_response(),
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

async fn watchlist_handler<N, M, R>(State(service): State<Arc<SessionService<N, M, R>>>) -> Response
where
    N: NoticePublisher + 'static,
    M: MapWidget + 'static,
    R: Rng + Send + 'static,
{
    let snapshot = service.snapshot();
    (StatusCode::OK, Json(snapshot.watchlist)).into_response()
}

async fn watchlist_add_handler<N, M, R>(
    State(service): State<Arc<SessionService<N, M, R>>>,
    Json(payload): Json<WatchlistPayload>,
) -> Response
where
    N: NoticePublisher + 'static,
    M: MapWidget + 'static,
    R: Rng + Send + 'static,
{
    let notice = service.add_to_watchlist(&payload.farm_name);
    (StatusCode::OK, Json(notice)).into_response()
}

async fn watchlist_remove_handler<N, M, R>(
    State(service): State<Arc<SessionService<N, M, R>>>,
    Path(farm_name): Path<String>,
) -> Response
where
    N: NoticePublisher + 'static,
    M: MapWidget + 'static,
    R: Rng + Send + 'static,
{
    match service.remove_from_watchlist(&farm_name) {
        Some(notice) => (StatusCode::OK, Json(notice)).into_response(),
        None => {
            let payload = json!({ "removed": false, "farm_name": farm_name });
            (StatusCode::OK, Json(payload)).into_response()
        }
    }
}

fn transition_response<N, M, R>(
    applied: bool,
    service: &Arc<SessionService<N, M, R>>,
    message: &str,
) -> Response
where
    N: NoticePublisher + 'static,
    M: MapWidget + 'static,
    R: Rng + Send + 'static,
{
    if applied {
        (StatusCode::OK, Json(service.snapshot())).into_response()
    } else {
        let payload = json!({ "error": message });
        (StatusCode::CONFLICT, Json(payload)).into_response()
    }
}
