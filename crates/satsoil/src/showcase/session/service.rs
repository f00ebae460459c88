use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::Rng;
use tracing::warn;

use crate::config::SessionConfig;
use crate::geo::MapWidget;
use crate::i18n::{Language, LanguageError};
use crate::showcase::blueprint;
use crate::showcase::search::{FarmGenerator, FarmSearchResult};

use super::coordinator::SessionState;
use super::notices::{Notice, NoticePublisher};
use super::view::{FarmId, SearchTab, Section, SessionSnapshot};

/// Facade composing the state machine, the synthetic search generator,
/// the notice hook, and the map-widget lifecycle.
///
/// Actions serialize behind a mutex: each handler runs to completion
/// before the next, as on a single UI thread.
pub struct SessionService<N, M, R = StdRng> {
    state: Mutex<SessionState>,
    generator: Mutex<FarmGenerator<R>>,
    notices: Arc<N>,
    map: Arc<M>,
}

impl<N, M> SessionService<N, M, StdRng>
where
    N: NoticePublisher,
    M: MapWidget,
{
    pub fn new(notices: Arc<N>, map: Arc<M>, config: SessionConfig) -> Self {
        let generator = match config.search_seed {
            Some(seed) => FarmGenerator::with_seed(seed),
            None => FarmGenerator::new(),
        };
        Self::with_generator(notices, map, config.default_language, generator)
    }
}

impl<N, M, R> SessionService<N, M, R>
where
    N: NoticePublisher,
    M: MapWidget,
    R: Rng + Send,
{
    pub fn with_generator(
        notices: Arc<N>,
        map: Arc<M>,
        language: Language,
        generator: FarmGenerator<R>,
    ) -> Self {
        Self {
            state: Mutex::new(SessionState::new(language)),
            generator: Mutex::new(generator),
            notices,
            map,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock_state().snapshot()
    }

    /// Run the mock search and install the fresh sheet, returning a
    /// copy for the caller's response.
    pub fn run_search(&self) -> Vec<FarmSearchResult> {
        let results = self
            .generator
            .lock()
            .expect("generator mutex poisoned")
            .generate();
        self.lock_state().replace_results(results.clone());
        results
    }

    pub fn select_section(&self, section: Section) {
        let mut state = self.lock_state();
        let was_detail = state.detail_farm().is_some();
        state.select_section(section);
        drop(state);
        if was_detail {
            self.map.destroy();
        }
    }

    pub fn select_farm_card(&self, farm_id: FarmId) {
        let mut state = self.lock_state();
        let was_detail = state.detail_farm().is_some();
        state.select_farm_card(farm_id.clone());
        drop(state);
        if was_detail {
            self.map.destroy();
        }
        self.mount_detail_map(&farm_id);
    }

    pub fn open_dd_report(&self) -> bool {
        let applied = self.lock_state().open_dd_report();
        if applied {
            // The detail view unmounts while the report is showing.
            self.map.destroy();
        }
        applied
    }

    pub fn open_invest_flow(&self) -> bool {
        let applied = self.lock_state().open_invest_flow();
        if applied {
            self.map.destroy();
        }
        applied
    }

    pub fn back(&self) -> bool {
        let mut state = self.lock_state();
        let applied = state.back();
        let farm_id = state.detail_farm().cloned();
        drop(state);
        if applied {
            if let Some(farm_id) = farm_id {
                self.mount_detail_map(&farm_id);
            }
        }
        applied
    }

    pub fn select_image_year(&self, year: u16) -> bool {
        self.lock_state().select_image_year(year)
    }

    pub fn switch_search_tab(&self, tab: SearchTab) {
        self.lock_state().switch_search_tab(tab);
    }

    /// Switch the interface language. Unsupported codes are rejected
    /// and the prior language is retained.
    pub fn set_language(&self, code: &str) -> Result<Language, LanguageError> {
        match code.parse::<Language>() {
            Ok(language) => {
                self.lock_state().set_language(language);
                Ok(language)
            }
            Err(err) => {
                let state = self.lock_state();
                warn!(code, retained = %state.language(), "rejected language switch");
                drop(state);
                Err(err)
            }
        }
    }

    pub fn add_to_watchlist(&self, farm_name: &str) -> Notice {
        let notice = self.lock_state().add_to_watchlist(farm_name);
        self.notices.publish(notice.clone());
        notice
    }

    pub fn remove_from_watchlist(&self, farm_name: &str) -> Option<Notice> {
        let notice = self.lock_state().remove_from_watchlist(farm_name);
        if let Some(notice) = notice.clone() {
            self.notices.publish(notice);
        }
        notice
    }

    pub fn watchlist_contains(&self, farm_name: &str) -> bool {
        self.lock_state().watchlist().contains(farm_name)
    }

    /// Trigger an invest-flow step action; only meaningful while the
    /// flow is showing.
    pub fn trigger_invest_step(&self, step_key: &str) -> Option<Notice> {
        let state = self.lock_state();
        if *state.active_view() != super::view::ActiveView::InvestFlow {
            warn!(step_key, view = state.active_view().label(), "invest step ignored");
            return None;
        }
        drop(state);

        let step = match blueprint::invest_step(step_key) {
            Some(step) => step,
            None => {
                warn!(step_key, "unknown invest step");
                return None;
            }
        };
        let notice = Notice::InvestPrompt {
            step: step.key,
            message: step.prompt,
        };
        self.notices.publish(notice.clone());
        Some(notice)
    }

    /// Container-size notification; forwarded while a detail view is
    /// mounted.
    pub fn notify_resized(&self) {
        if self.lock_state().detail_farm().is_some() {
            self.map.resize();
        }
    }

    fn mount_detail_map(&self, farm_id: &FarmId) {
        match blueprint::plot_polygon(farm_id.as_str()) {
            Some(polygon) => self.map.mount(&polygon),
            None => warn!(farm_id = farm_id.as_str(), "no polygon on file; map not mounted"),
        }
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, SessionState> {
        self.state.lock().expect("session mutex poisoned")
    }
}
