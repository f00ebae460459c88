//! Two-language dictionary lookup for the showcase chrome.
//!
//! The dictionaries cover the navigation and section headings the
//! showcase localizes. Body copy that carries a key with no dictionary
//! entry is intentionally left untouched by [`apply_language`]; the
//! showcase ships Japanese defaults inline and only swaps the keys
//! present here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ja,
    En,
}

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Language::Ja => "日本語",
            Language::En => "English",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Ja
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = LanguageError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ja" => Ok(Language::Ja),
            "en" => Ok(Language::En),
            other => Err(LanguageError::Unsupported(other.to_string())),
        }
    }
}

/// Rejected language switches; the caller keeps the prior language.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanguageError {
    #[error("unsupported language code: {0}")]
    Unsupported(String),
}

/// A text node annotated with a translation key, as handed over by the
/// rendering layer's annotation scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedNode {
    pub key: String,
    pub text: String,
}

impl LocalizedNode {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }
}

/// Look up `key` in the dictionary for `lang`.
pub fn translate(lang: Language, key: &str) -> Option<&'static str> {
    table(lang)
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, text)| *text)
}

/// Rewrite every node whose key resolves in the target dictionary.
///
/// Missing keys are a silent no-op. Re-running with the same language
/// only performs redundant writes, so the pass is idempotent. Returns
/// the number of nodes rewritten.
pub fn apply_language(lang: Language, nodes: &mut [LocalizedNode]) -> usize {
    let mut applied = 0;
    for node in nodes.iter_mut() {
        if let Some(text) = translate(lang, &node.key) {
            node.text = text.to_string();
            applied += 1;
        }
    }
    applied
}

fn table(lang: Language) -> &'static [(&'static str, &'static str)] {
    match lang {
        Language::Ja => JA,
        Language::En => EN,
    }
}

const JA: &[(&str, &str)] = &[
    ("logo", "SATSOIL"),
    ("nav.home", "ダッシュボード"),
    ("nav.search", "農地検索"),
    ("nav.mypage", "投資ポートフォリオ"),
    ("section.home.title", "ダッシュボード"),
    ("section.home.recommended", "注目の農地"),
    ("section.home.alerts", "最新市場レポート"),
    ("section.search.title", "農地検索"),
    ("section.search.regionGroup", "地域グループ:"),
    ("section.search.regionDetail", "地域詳細:"),
    ("section.search.evalRange", "評価スコア範囲:"),
    ("section.search.soil", "土壌pH:"),
    ("section.search.floodRisk", "洪水リスク:"),
    ("section.search.crop", "作物:"),
    ("section.search.irrigation", "灌漑設備充実度:"),
    ("section.search.accessibility", "交通アクセス利便性:"),
    ("section.search.cropVariety", "作付け多様性:"),
    ("section.search.search", "検索"),
    ("section.detail.simulation", "投資シミュレーション"),
    ("section.detail.ddReport", "DDレポート生成"),
    ("section.detail.investFlow", "投資手続きへ"),
    ("section.ddReport.title", "DDレポート"),
    ("section.ddReport.back", "戻る"),
    ("section.investFlow.title", "投資手続き"),
    ("section.mypage.title", "投資ポートフォリオ"),
];

const EN: &[(&str, &str)] = &[
    ("logo", "SATSOIL"),
    ("nav.home", "Dashboard"),
    ("nav.search", "Farm Search"),
    ("nav.mypage", "Investment Portfolio"),
    ("section.home.title", "Dashboard"),
    ("section.home.recommended", "Featured Farms"),
    ("section.home.alerts", "Latest Market Reports"),
    ("section.search.title", "Farm Search"),
    ("section.search.regionGroup", "Region Group:"),
    ("section.search.regionDetail", "Region Detail:"),
    ("section.search.evalRange", "Evaluation Score Range:"),
    ("section.search.soil", "Soil pH:"),
    ("section.search.floodRisk", "Flood Risk:"),
    ("section.search.crop", "Crop:"),
    ("section.search.irrigation", "Irrigation Infrastructure:"),
    ("section.search.accessibility", "Transport Accessibility:"),
    ("section.search.cropVariety", "Crop Variety Potential:"),
    ("section.search.search", "Search"),
    ("section.detail.simulation", "Investment Simulation"),
    ("section.detail.ddReport", "Generate DD Report"),
    ("section.detail.investFlow", "Proceed to Investment"),
    ("section.ddReport.title", "DD Report"),
    ("section.ddReport.back", "Back"),
    ("section.investFlow.title", "Investment Process"),
    ("section.mypage.title", "Investment Portfolio"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_title_translates_both_ways() {
        assert_eq!(
            translate(Language::En, "section.home.title"),
            Some("Dashboard")
        );
        assert_eq!(
            translate(Language::Ja, "section.home.title"),
            Some("ダッシュボード")
        );
    }

    #[test]
    fn unknown_key_leaves_node_untouched() {
        let mut nodes = vec![
            LocalizedNode::new("nav.home", "ダッシュボード"),
            LocalizedNode::new("farmA.info", "農地A 詳細情報"),
        ];
        let applied = apply_language(Language::En, &mut nodes);
        assert_eq!(applied, 1);
        assert_eq!(nodes[0].text, "Dashboard");
        assert_eq!(nodes[1].text, "農地A 詳細情報");
    }

    #[test]
    fn apply_language_is_idempotent() {
        let mut nodes = vec![LocalizedNode::new("section.search.title", "農地検索")];
        apply_language(Language::En, &mut nodes);
        let snapshot = nodes.clone();
        apply_language(Language::En, &mut nodes);
        assert_eq!(nodes, snapshot);
    }

    #[test]
    fn dictionaries_carry_the_same_key_set() {
        for (key, _) in JA {
            assert!(
                EN.iter().any(|(candidate, _)| candidate == key),
                "missing en entry for {key}"
            );
        }
        assert_eq!(JA.len(), EN.len());
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert_eq!("ja".parse::<Language>(), Ok(Language::Ja));
        assert_eq!("EN".parse::<Language>(), Ok(Language::En));
        assert!(matches!(
            "fr".parse::<Language>(),
            Err(LanguageError::Unsupported(code)) if code == "fr"
        ));
    }
}
