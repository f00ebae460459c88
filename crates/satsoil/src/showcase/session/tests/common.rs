use std::sync::{Arc, Mutex};

use crate::geo::{LatLon, MapWidget};
use crate::i18n::Language;
use crate::showcase::search::FarmGenerator;
use crate::showcase::session::{Notice, NoticePublisher, SessionService};

#[derive(Default)]
pub(super) struct RecordingNotices {
    events: Mutex<Vec<Notice>>,
}

impl RecordingNotices {
    pub(super) fn events(&self) -> Vec<Notice> {
        self.events.lock().expect("notice mutex poisoned").clone()
    }
}

impl NoticePublisher for RecordingNotices {
    fn publish(&self, notice: Notice) {
        self.events.lock().expect("notice mutex poisoned").push(notice);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(super) enum MapEvent {
    Mounted(usize),
    Resized,
    Destroyed,
}

#[derive(Default)]
pub(super) struct RecordingMap {
    events: Mutex<Vec<MapEvent>>,
}

impl RecordingMap {
    pub(super) fn events(&self) -> Vec<MapEvent> {
        self.events.lock().expect("map mutex poisoned").clone()
    }
}

impl MapWidget for RecordingMap {
    fn mount(&self, polygon: &[LatLon]) {
        self.events
            .lock()
            .expect("map mutex poisoned")
            .push(MapEvent::Mounted(polygon.len()));
    }

    fn resize(&self) {
        self.events.lock().expect("map mutex poisoned").push(MapEvent::Resized);
    }

    fn destroy(&self) {
        self.events
            .lock()
            .expect("map mutex poisoned")
            .push(MapEvent::Destroyed);
    }
}

pub(super) type TestService = SessionService<RecordingNotices, RecordingMap>;

pub(super) fn build_service() -> (Arc<TestService>, Arc<RecordingNotices>, Arc<RecordingMap>) {
    let notices = Arc::new(RecordingNotices::default());
    let map = Arc::new(RecordingMap::default());
    let service = Arc::new(SessionService::with_generator(
        notices.clone(),
        map.clone(),
        Language::Ja,
        FarmGenerator::with_seed(11),
    ));
    (service, notices, map)
}
