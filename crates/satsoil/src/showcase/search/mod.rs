//! Synthetic farm search: randomized result rows with derived scores.

mod domain;
mod generator;

pub use domain::{Crop, FarmSearchResult, RiskLevel};
pub use generator::{potential_score, soil_score, FarmGenerator, RESULT_COUNT};
