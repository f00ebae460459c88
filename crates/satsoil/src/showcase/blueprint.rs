//! Static showcase content: the featured plots, the dashboard alert
//! feed, the farm A dossier, DD-report sections, invest-flow steps, and
//! the portfolio demo rows.
//!
//! Copy ships with Japanese defaults and a translation key; keys absent
//! from the dictionaries stay as-is under a language switch.

use chrono::NaiveDate;
use serde::Serialize;

use crate::geo::LatLon;
use crate::showcase::search::RiskLevel;

/// A dashboard card with its polygon outline and captions.
#[derive(Debug, Clone, Serialize)]
pub struct FeaturedPlot {
    pub farm_id: &'static str,
    pub title_key: &'static str,
    pub title: &'static str,
    pub polygon: [LatLon; 4],
    pub projected_roi: &'static str,
    pub risk_caption: &'static str,
}

pub fn featured_plots() -> Vec<FeaturedPlot> {
    vec![
        FeaturedPlot {
            farm_id: "farmA",
            title_key: "section.card_grid_1",
            title: "農地A",
            polygon: [
                LatLon::from_dms((43.0, 1.0, 44.0), (141.0, 38.0, 45.0)),
                LatLon::from_dms((43.0, 2.0, 13.0), (141.0, 38.0, 16.0)),
                LatLon::from_dms((43.0, 1.0, 53.0), (141.0, 37.0, 36.0)),
                LatLon::from_dms((43.0, 1.0, 23.0), (141.0, 38.0, 4.0)),
            ],
            projected_roi: "8%",
            risk_caption: "洪水リスク：低",
        },
        FeaturedPlot {
            farm_id: "farmB",
            title_key: "section.card_grid_2",
            title: "農地B",
            polygon: [
                LatLon::from_dms((43.0, 51.0, 14.0), (144.0, 31.0, 4.0)),
                LatLon::from_dms((43.0, 51.0, 14.0), (144.0, 30.0, 26.0)),
                LatLon::from_dms((43.0, 51.0, 30.0), (144.0, 30.0, 26.0)),
                LatLon::from_dms((43.0, 51.0, 30.0), (144.0, 31.0, 4.0)),
            ],
            projected_roi: "10%",
            risk_caption: "洪水リスク：中",
        },
        FeaturedPlot {
            farm_id: "farmC",
            title_key: "section.card_grid_3",
            title: "農地C",
            polygon: [
                LatLon::from_dms((43.0, 50.0, 0.0), (144.0, 30.0, 24.0)),
                LatLon::from_dms((43.0, 52.0, 0.0), (144.0, 30.0, 24.0)),
                LatLon::from_dms((43.0, 52.0, 0.0), (144.0, 33.0, 40.0)),
                LatLon::from_dms((43.0, 50.0, 0.0), (144.0, 33.0, 40.0)),
            ],
            projected_roi: "6%",
            risk_caption: "病害虫リスク：低",
        },
    ]
}

/// Polygon outline for a farm's detail map, when one is on file.
pub fn plot_polygon(farm_id: &str) -> Option<[LatLon; 4]> {
    featured_plots()
        .into_iter()
        .find(|plot| plot.farm_id == farm_id)
        .map(|plot| plot.polygon)
}

/// One dashboard market-report line.
#[derive(Debug, Clone, Serialize)]
pub struct MarketAlert {
    pub published_on: NaiveDate,
    pub text_key: &'static str,
    pub text: &'static str,
}

pub fn market_alerts() -> Vec<MarketAlert> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid alert date");
    vec![
        MarketAlert {
            published_on: date(2025, 1, 31),
            text_key: "section.home.alerts_t1",
            text: "農地BエリアのNDVI指標が上昇傾向",
        },
        MarketAlert {
            published_on: date(2025, 1, 29),
            text_key: "section.home.alerts_t2",
            text: "台風接近に伴う強風注意報 ( 地域X )",
        },
        MarketAlert {
            published_on: date(2025, 1, 27),
            text_key: "section.home.alerts_t3",
            text: "農地Dにおける土壌pH改善の兆候検出",
        },
        MarketAlert {
            published_on: date(2025, 1, 25),
            text_key: "section.home.alerts_t4",
            text: "農地Mで輪作効果向上が確認",
        },
        MarketAlert {
            published_on: date(2025, 1, 20),
            text_key: "section.home.alerts_t5",
            text: "新規作物試験結果（トマト・レタス）を発表",
        },
    ]
}

/// Named risk indicator on the detail view.
#[derive(Debug, Clone, Serialize)]
pub struct RiskIndicator {
    pub label: &'static str,
    pub level: RiskLevel,
}

/// One line of the ROI simulation breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationLine {
    pub label: &'static str,
    pub delta: &'static str,
}

/// Detail dossier for a showcased farm.
#[derive(Debug, Clone, Serialize)]
pub struct FarmDossier {
    pub farm_id: &'static str,
    pub display_name: &'static str,
    pub location: &'static str,
    pub area_ha: f64,
    pub owner: &'static str,
    pub potential_score: u8,
    pub risk_indicators: Vec<RiskIndicator>,
    pub average_ndvi: f64,
    pub simulation: Vec<SimulationLine>,
    pub projected_roi_total: &'static str,
}

impl FarmDossier {
    /// The single dossier the showcase ships: farm A.
    pub fn farm_a() -> Self {
        Self {
            farm_id: "farmA",
            display_name: "農地A",
            location: "北海道・札幌市",
            area_ha: 2.3,
            owner: "〇〇ファーム",
            potential_score: 82,
            risk_indicators: vec![
                RiskIndicator {
                    label: "洪水リスク",
                    level: RiskLevel::Low,
                },
                RiskIndicator {
                    label: "土壌浸食リスク",
                    level: RiskLevel::Low,
                },
                RiskIndicator {
                    label: "病害虫リスク",
                    level: RiskLevel::Medium,
                },
            ],
            average_ndvi: 0.65,
            simulation: vec![
                SimulationLine {
                    label: "基準ROI",
                    delta: "8%",
                },
                SimulationLine {
                    label: "輪作最適化効果",
                    delta: "+2%",
                },
                SimulationLine {
                    label: "生産管理改善効果",
                    delta: "+2%",
                },
                SimulationLine {
                    label: "先物価格調整",
                    delta: "+0.5%",
                },
            ],
            projected_roi_total: "12.5%",
        }
    }

    pub fn lookup(farm_id: &str) -> Option<Self> {
        if farm_id == "farmA" {
            Some(Self::farm_a())
        } else {
            None
        }
    }
}

/// One section of the due-diligence report.
#[derive(Debug, Clone, Serialize)]
pub struct DdSection {
    pub heading: &'static str,
    pub lines: Vec<&'static str>,
}

pub fn dd_report_sections() -> Vec<DdSection> {
    vec![
        DdSection {
            heading: "1. 農地概要",
            lines: vec![
                "所在地：北海道・札幌市",
                "面積：2.3 ha",
                "オーナー：〇〇ファーム",
                "潜在能力スコア：82",
            ],
        },
        DdSection {
            heading: "2. 衛星解析",
            lines: vec!["平均 NDVI：0.60～0.65（安定推移）", "洪水リスク：低～中"],
        },
        DdSection {
            heading: "3. 土壌・気候データ",
            lines: vec![
                "土壌pH：6.0～6.5 / 有機物量：高め",
                "年間降水量：約1200mm / 日照時間：2000h",
            ],
        },
        DdSection {
            heading: "4. リスク評価と収益性",
            lines: vec![
                "病害虫リスク：低～中",
                "土壌浸食リスク：低",
                "収量予測：1000～1200 kg/ha",
                "価格変動：過去3年の変動±5%",
            ],
        },
        DdSection {
            heading: "5. 分析コメント",
            lines: vec![
                "全体としてリスクは低水準にあり、輪作最適化と生産管理の徹底により収益性の向上が期待されます。",
                "商品先物価格および干ばつリスクを考慮した定期モニタリングを推奨いたします。",
            ],
        },
    ]
}

/// One step of the guided investment flow.
#[derive(Debug, Clone, Serialize)]
pub struct InvestStep {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub action_label: &'static str,
    pub prompt: &'static str,
}

pub fn invest_steps() -> Vec<InvestStep> {
    vec![
        InvestStep {
            key: "identity",
            title: "本人確認",
            description: "身分証明書のアップロードおよび本人確認書類の提出が必要です。",
            action_label: "アップロード",
            prompt: "本人確認書類アップロード画面へ",
        },
        InvestStep {
            key: "contract",
            title: "契約書類の確認",
            description: "電子契約書の内容をご確認の上、電子署名を実行してください。",
            action_label: "電子署名",
            prompt: "電子署名画面へ",
        },
        InvestStep {
            key: "amount",
            title: "投資額設定",
            description: "適正投資額の目安：1,000,000円",
            action_label: "確定",
            prompt: "投資額を確定しました",
        },
        InvestStep {
            key: "payment",
            title: "お支払い",
            description: "銀行振込、オンライン決済、クレジットカードなど各種決済に対応しております。",
            action_label: "決済へ進む",
            prompt: "決済画面へ",
        },
    ]
}

pub fn invest_step(key: &str) -> Option<InvestStep> {
    invest_steps().into_iter().find(|step| step.key == key)
}

/// Row of the mypage invested-farms table.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioHolding {
    pub farm_name: &'static str,
    pub invested_yen: u32,
    pub current_value_yen: u32,
    pub projected_roi: &'static str,
}

pub fn portfolio_holdings() -> Vec<PortfolioHolding> {
    vec![
        PortfolioHolding {
            farm_name: "農地A",
            invested_yen: 1_000_000,
            current_value_yen: 1_060_000,
            projected_roi: "12.5%",
        },
        PortfolioHolding {
            farm_name: "農地D",
            invested_yen: 500_000,
            current_value_yen: 515_000,
            projected_roi: "9%",
        },
    ]
}
