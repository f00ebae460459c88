use tracing::warn;

use crate::i18n::Language;
use crate::showcase::search::FarmSearchResult;

use super::notices::Notice;
use super::view::{ActiveView, FarmId, ImageYear, SearchTab, Section, SessionSnapshot};
use super::watchlist::WatchlistStore;

/// The session state machine.
///
/// All transitions run synchronously inside one action handler. Guarded
/// actions (`open_dd_report`, `open_invest_flow`, `back`,
/// `select_image_year`) are defensive no-ops outside their valid
/// context; they log a warning and return `false` instead of faulting.
#[derive(Debug)]
pub struct SessionState {
    active_view: ActiveView,
    language: Language,
    search_tab: SearchTab,
    image_year: ImageYear,
    results: Vec<FarmSearchResult>,
    watchlist: WatchlistStore,
    // Detail view that opened the currently visible report/flow.
    report_origin: Option<FarmId>,
}

impl SessionState {
    pub fn new(language: Language) -> Self {
        Self {
            active_view: ActiveView::Home,
            language,
            search_tab: SearchTab::default(),
            image_year: ImageYear::default(),
            results: Vec::new(),
            watchlist: WatchlistStore::new(),
            report_origin: None,
        }
    }

    pub fn active_view(&self) -> &ActiveView {
        &self.active_view
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn search_tab(&self) -> SearchTab {
        self.search_tab
    }

    pub fn image_year(&self) -> ImageYear {
        self.image_year
    }

    pub fn results(&self) -> &[FarmSearchResult] {
        &self.results
    }

    pub fn watchlist(&self) -> &WatchlistStore {
        &self.watchlist
    }

    /// Farm id of the active detail view, if one is showing.
    pub fn detail_farm(&self) -> Option<&FarmId> {
        self.active_view.detail_farm()
    }

    pub fn select_section(&mut self, section: Section) {
        self.active_view = section.into();
    }

    /// Card click: jump to the farm's detail view. The imagery year is
    /// re-derived on every entry.
    pub fn select_farm_card(&mut self, farm_id: FarmId) {
        self.image_year = ImageYear::default();
        self.active_view = ActiveView::FarmDetail { farm_id };
    }

    pub fn open_dd_report(&mut self) -> bool {
        self.open_from_detail(ActiveView::DdReport, "open_dd_report")
    }

    pub fn open_invest_flow(&mut self) -> bool {
        self.open_from_detail(ActiveView::InvestFlow, "open_invest_flow")
    }

    fn open_from_detail(&mut self, target: ActiveView, action: &'static str) -> bool {
        match self.active_view.detail_farm() {
            Some(farm_id) => {
                self.report_origin = Some(farm_id.clone());
                self.active_view = target;
                true
            }
            None => {
                warn!(action, view = self.active_view.label(), "ignored outside a detail view");
                false
            }
        }
    }

    /// Return from the report/flow to the detail view that opened it.
    pub fn back(&mut self) -> bool {
        match self.active_view {
            ActiveView::DdReport | ActiveView::InvestFlow => {
                // Origin is always recorded on entry; fall back to the
                // showcased farm.
                let farm_id = self
                    .report_origin
                    .take()
                    .unwrap_or_else(|| FarmId("farmA".to_string()));
                self.active_view = ActiveView::FarmDetail { farm_id };
                true
            }
            _ => {
                warn!(view = self.active_view.label(), "back ignored outside report views");
                false
            }
        }
    }

    /// Side transition: switch the detail imagery year. Years outside
    /// the fixed set are ignored.
    pub fn select_image_year(&mut self, year: u16) -> bool {
        match ImageYear::from_year(year) {
            Some(selected) => {
                self.image_year = selected;
                true
            }
            None => {
                warn!(year, "ignored unsupported imagery year");
                false
            }
        }
    }

    /// Side transition within the search view; does not change the
    /// active view.
    pub fn switch_search_tab(&mut self, tab: SearchTab) {
        self.search_tab = tab;
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Full replace of the current result sheet; prior rows are
    /// discarded, never merged.
    pub fn replace_results(&mut self, results: Vec<FarmSearchResult>) {
        self.results = results;
    }

    pub fn add_to_watchlist(&mut self, farm_name: &str) -> Notice {
        self.watchlist.add(farm_name)
    }

    pub fn remove_from_watchlist(&mut self, farm_name: &str) -> Option<Notice> {
        self.watchlist.remove(farm_name)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            active_view: self.active_view.clone(),
            language: self.language,
            search_tab: self.search_tab,
            image_year: self.image_year.year(),
            results: self.results.clone(),
            watchlist: self.watchlist.entries().to_vec(),
        }
    }
}
