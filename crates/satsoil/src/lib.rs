//! SATSOIL showcase core.
//!
//! The crate owns the session view-state machine, the synthetic farm
//! search generator, the watchlist store, and the ja/en dictionary
//! lookup that back the SATSOIL farmland investment showcase. Rendering
//! and map tiles live outside; they consume [`showcase::session`]
//! snapshots and the [`geo::MapWidget`] seam.

pub mod config;
pub mod error;
pub mod geo;
pub mod i18n;
pub mod showcase;
pub mod telemetry;
