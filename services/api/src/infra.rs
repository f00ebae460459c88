use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;
use satsoil::geo::{LatLon, MapWidget};
use satsoil::showcase::session::{Notice, NoticePublisher, SessionService};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Notice hook that logs each event and keeps the history for
/// `/api/v1/notices`.
#[derive(Default)]
pub(crate) struct CollectingNoticePublisher {
    events: Mutex<Vec<Notice>>,
}

impl CollectingNoticePublisher {
    pub(crate) fn events(&self) -> Vec<Notice> {
        self.events.lock().expect("notice mutex poisoned").clone()
    }
}

impl NoticePublisher for CollectingNoticePublisher {
    fn publish(&self, notice: Notice) {
        info!(message = %notice.message(), "session notice");
        self.events
            .lock()
            .expect("notice mutex poisoned")
            .push(notice);
    }
}

/// Headless stand-in for the browser map widget; the real tile layer
/// lives client-side, so the service only logs the lifecycle.
#[derive(Default)]
pub(crate) struct TracingMapWidget;

impl MapWidget for TracingMapWidget {
    fn mount(&self, polygon: &[LatLon]) {
        info!(vertices = polygon.len(), "detail map mounted");
    }

    fn resize(&self) {
        info!("detail map resized");
    }

    fn destroy(&self) {
        info!("detail map destroyed");
    }
}

pub(crate) type ShowcaseSession = SessionService<CollectingNoticePublisher, TracingMapWidget>;
