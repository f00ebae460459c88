use super::common::*;
use crate::i18n::Language;
use crate::showcase::search::RESULT_COUNT;
use crate::showcase::session::{ActiveView, FarmId, SearchTab, Section};

#[test]
fn fresh_session_starts_at_home_with_the_simple_tab() {
    let (service, _, _) = build_service();
    let snapshot = service.snapshot();
    assert_eq!(snapshot.active_view, ActiveView::Home);
    assert_eq!(snapshot.search_tab, SearchTab::Simple);
    assert_eq!(snapshot.image_year, 2020);
    assert_eq!(snapshot.language, Language::Ja);
    assert!(snapshot.results.is_empty());
    assert!(snapshot.watchlist.is_empty());
}

#[test]
fn card_click_opens_the_detail_view_and_mounts_its_polygon() {
    let (service, _, map) = build_service();
    service.select_farm_card(FarmId("farmA".to_string()));

    assert_eq!(
        service.snapshot().active_view,
        ActiveView::FarmDetail {
            farm_id: FarmId("farmA".to_string())
        }
    );
    assert_eq!(map.events(), [MapEvent::Mounted(4)]);
}

#[test]
fn dd_report_round_trip_returns_to_the_opening_detail_view() {
    let (service, _, _) = build_service();
    service.select_farm_card(FarmId("farmA".to_string()));

    assert!(service.open_dd_report());
    assert_eq!(service.snapshot().active_view, ActiveView::DdReport);

    assert!(service.back());
    assert_eq!(
        service.snapshot().active_view,
        ActiveView::FarmDetail {
            farm_id: FarmId("farmA".to_string())
        }
    );
}

#[test]
fn invest_flow_round_trip_returns_to_the_opening_detail_view() {
    let (service, _, _) = build_service();
    service.select_farm_card(FarmId("farmA".to_string()));

    assert!(service.open_invest_flow());
    assert_eq!(service.snapshot().active_view, ActiveView::InvestFlow);

    assert!(service.back());
    assert_eq!(
        service.snapshot().active_view,
        ActiveView::FarmDetail {
            farm_id: FarmId("farmA".to_string())
        }
    );
}

#[test]
fn report_views_are_unreachable_outside_a_detail_view() {
    let (service, _, _) = build_service();
    assert!(!service.open_dd_report());
    assert!(!service.open_invest_flow());
    assert!(!service.back());
    assert_eq!(service.snapshot().active_view, ActiveView::Home);
}

#[test]
fn tab_switch_round_trip_restores_the_initial_panel() {
    let (service, _, _) = build_service();
    service.select_section(Section::Search);

    service.switch_search_tab(SearchTab::Detailed);
    assert_eq!(service.snapshot().search_tab, SearchTab::Detailed);

    service.switch_search_tab(SearchTab::Simple);
    assert_eq!(service.snapshot().search_tab, SearchTab::Simple);
}

#[test]
fn image_year_is_rederived_on_every_detail_entry() {
    let (service, _, _) = build_service();
    service.select_farm_card(FarmId("farmA".to_string()));

    assert!(service.select_image_year(2022));
    assert_eq!(service.snapshot().image_year, 2022);

    // Years outside the fixed set are ignored.
    assert!(!service.select_image_year(1999));
    assert_eq!(service.snapshot().image_year, 2022);

    service.select_section(Section::Home);
    service.select_farm_card(FarmId("farmA".to_string()));
    assert_eq!(service.snapshot().image_year, 2020);
}

#[test]
fn leaving_the_detail_view_destroys_the_map() {
    let (service, _, map) = build_service();
    service.select_farm_card(FarmId("farmA".to_string()));
    service.select_section(Section::MyPage);

    assert_eq!(map.events(), [MapEvent::Mounted(4), MapEvent::Destroyed]);
}

#[test]
fn opening_a_report_unmounts_the_map_and_back_remounts_it() {
    let (service, _, map) = build_service();
    service.select_farm_card(FarmId("farmA".to_string()));
    service.open_dd_report();
    service.back();

    assert_eq!(
        map.events(),
        [
            MapEvent::Mounted(4),
            MapEvent::Destroyed,
            MapEvent::Mounted(4)
        ]
    );
}

#[test]
fn resize_notifications_only_reach_a_mounted_map() {
    let (service, _, map) = build_service();
    service.notify_resized();
    assert!(map.events().is_empty());

    service.select_farm_card(FarmId("farmA".to_string()));
    service.notify_resized();
    assert_eq!(map.events(), [MapEvent::Mounted(4), MapEvent::Resized]);
}

#[test]
fn unsupported_language_is_rejected_and_prior_language_retained() {
    let (service, _, _) = build_service();
    service.set_language("en").expect("en is supported");
    assert_eq!(service.snapshot().language, Language::En);

    assert!(service.set_language("fr").is_err());
    assert_eq!(service.snapshot().language, Language::En);
}

#[test]
fn search_replaces_the_sheet_wholesale() {
    let (service, _, _) = build_service();
    let first = service.run_search();
    assert_eq!(first.len(), RESULT_COUNT);
    assert_eq!(service.snapshot().results, first);

    let second = service.run_search();
    assert_eq!(second.len(), RESULT_COUNT);
    assert_ne!(first, second);
    assert_eq!(service.snapshot().results, second);
}

#[test]
fn invest_steps_emit_prompts_only_while_the_flow_is_showing() {
    let (service, notices, _) = build_service();
    assert!(service.trigger_invest_step("amount").is_none());

    service.select_farm_card(FarmId("farmA".to_string()));
    service.open_invest_flow();

    let notice = service
        .trigger_invest_step("amount")
        .expect("step exists and flow is showing");
    assert_eq!(notice.message(), "投資額を確定しました");
    assert!(service.trigger_invest_step("escrow").is_none());
    assert_eq!(notices.events(), [notice]);
}
