//! Session view-state coordination.
//!
//! The coordinator owns which named view is active, the search tab and
//! imagery-year side state, the current search result sheet, and the
//! watchlist. Rendering derives visibility purely from
//! [`SessionSnapshot`]; nothing mutates display state out-of-band.

mod coordinator;
mod notices;
mod router;
mod service;
mod view;
pub mod watchlist;

#[cfg(test)]
mod tests;

pub use coordinator::SessionState;
pub use notices::{Notice, NoticePublisher};
pub use router::session_router;
pub use service::SessionService;
pub use view::{ActiveView, FarmId, ImageYear, SearchTab, Section, SessionSnapshot};
pub use watchlist::WatchlistStore;
