use super::common::*;
use crate::showcase::session::Notice;

#[test]
fn double_add_keeps_one_entry_and_reports_already_present() {
    let (service, notices, _) = build_service();

    let first = service.add_to_watchlist("Farm A");
    let second = service.add_to_watchlist("Farm A");

    assert_eq!(
        first,
        Notice::WatchlistAdded {
            farm_name: "Farm A".to_string()
        }
    );
    assert_eq!(
        second,
        Notice::WatchlistAlreadyPresent {
            farm_name: "Farm A".to_string()
        }
    );
    assert_eq!(service.snapshot().watchlist, ["Farm A"]);
    assert_eq!(notices.events(), [first, second]);
}

#[test]
fn add_then_remove_leaves_the_store_empty() {
    let (service, notices, _) = build_service();
    service.add_to_watchlist("Farm A");

    let removed = service.remove_from_watchlist("Farm A");
    assert_eq!(
        removed,
        Some(Notice::WatchlistRemoved {
            farm_name: "Farm A".to_string()
        })
    );
    assert!(service.snapshot().watchlist.is_empty());
    assert_eq!(notices.events().len(), 2);
}

#[test]
fn removing_an_absent_name_publishes_nothing() {
    let (service, notices, _) = build_service();
    assert_eq!(service.remove_from_watchlist("Farm Z"), None);
    assert!(notices.events().is_empty());
}

#[test]
fn membership_gates_the_add_control() {
    let (service, _, _) = build_service();
    assert!(!service.watchlist_contains("Farm B"));
    service.add_to_watchlist("Farm B");
    assert!(service.watchlist_contains("Farm B"));
}
