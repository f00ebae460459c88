use serde::{Deserialize, Serialize};

/// Crops cycled through the result sheet. Order matters: assignment is
/// `index mod 8`, never random.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Crop {
    Rice,
    Wheat,
    Soybean,
    Tomato,
    Lettuce,
    Cucumber,
    Pepper,
    Cotton,
}

impl Crop {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Rice,
            Self::Wheat,
            Self::Soybean,
            Self::Tomato,
            Self::Lettuce,
            Self::Cucumber,
            Self::Pepper,
            Self::Cotton,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rice => "Rice",
            Self::Wheat => "Wheat",
            Self::Soybean => "Soybean",
            Self::Tomato => "Tomato",
            Self::Lettuce => "Lettuce",
            Self::Cucumber => "Cucumber",
            Self::Pepper => "Pepper",
            Self::Cotton => "Cotton",
        }
    }

    /// Display-only ROI figure keyed by crop.
    pub const fn projected_roi(self) -> &'static str {
        match self {
            Self::Rice => "8%",
            Self::Wheat => "10%",
            Self::Soybean => "12%",
            Self::Tomato => "9%",
            Self::Lettuce => "8%",
            Self::Cucumber => "9%",
            Self::Pepper => "10%",
            Self::Cotton => "11%",
        }
    }
}

/// Risk band cycled by `index mod 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// One synthesized search result row.
///
/// Rows are immutable once created and replaced wholesale by the next
/// search invocation; the session coordinator owns the current list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmSearchResult {
    pub name: String,
    pub region: String,
    pub soil_ph: f64,
    pub soil_score: f64,
    pub rotation_score: u8,
    pub potential_score: u8,
    pub risk: RiskLevel,
    pub crop: Crop,
    pub roi: &'static str,
    pub water_supply: u8,
    pub accessibility: u8,
    pub crop_diversity: u8,
    pub image_ref: String,
}
