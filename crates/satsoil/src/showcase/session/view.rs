use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::showcase::search::FarmSearchResult;

/// Identifier wrapper for showcased farms (e.g. `farmA`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FarmId(pub String);

impl FarmId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Top-level navigation targets selectable from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    Search,
    MyPage,
}

impl Section {
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::Search => "nav.search",
            Self::MyPage => "nav.mypage",
        }
    }
}

/// The single active view. Exactly one is active at a time; the machine
/// starts at `Home` and resets there on a fresh session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ActiveView {
    Home,
    Search,
    MyPage,
    FarmDetail { farm_id: FarmId },
    DdReport,
    InvestFlow,
}

impl ActiveView {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Search => "search",
            Self::MyPage => "mypage",
            Self::FarmDetail { .. } => "farm_detail",
            Self::DdReport => "dd_report",
            Self::InvestFlow => "invest_flow",
        }
    }

    pub fn detail_farm(&self) -> Option<&FarmId> {
        match self {
            Self::FarmDetail { farm_id } => Some(farm_id),
            _ => None,
        }
    }
}

impl From<Section> for ActiveView {
    fn from(section: Section) -> Self {
        match section {
            Section::Home => ActiveView::Home,
            Section::Search => ActiveView::Search,
            Section::MyPage => ActiveView::MyPage,
        }
    }
}

/// Filter panel shown inside the search view; exactly one is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchTab {
    Simple,
    Detailed,
}

impl Default for SearchTab {
    fn default() -> Self {
        SearchTab::Simple
    }
}

/// Imagery year selectable on a detail view. Re-derived (reset to 2020)
/// each time a detail view is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageYear {
    #[serde(rename = "2020")]
    Y2020,
    #[serde(rename = "2021")]
    Y2021,
    #[serde(rename = "2022")]
    Y2022,
}

impl ImageYear {
    pub const fn ordered() -> [Self; 3] {
        [Self::Y2020, Self::Y2021, Self::Y2022]
    }

    pub const fn year(self) -> u16 {
        match self {
            Self::Y2020 => 2020,
            Self::Y2021 => 2021,
            Self::Y2022 => 2022,
        }
    }

    pub fn from_year(year: u16) -> Option<Self> {
        match year {
            2020 => Some(Self::Y2020),
            2021 => Some(Self::Y2021),
            2022 => Some(Self::Y2022),
            _ => None,
        }
    }
}

impl Default for ImageYear {
    fn default() -> Self {
        ImageYear::Y2020
    }
}

/// Serializable state snapshot handed to the rendering layer.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub active_view: ActiveView,
    pub language: Language,
    pub search_tab: SearchTab,
    pub image_year: u16,
    pub results: Vec<FarmSearchResult>,
    pub watchlist: Vec<String>,
}
