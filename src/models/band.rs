use serde::{Deserialize, Serialize};

use crate::models::Pollutant;

/// Health-impact category of a concentration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiCategory {
    Good,
    Moderate,
    Poor,
    VeryPoor,
    /// No thresholds exist for the pollutant, or the value is not a valid concentration.
    Unclassified,
}

impl AqiCategory {
    /// The four graded categories, least to most severe.
    pub const GRADED: [AqiCategory; 4] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::Poor,
        AqiCategory::VeryPoor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::Poor => "Poor",
            AqiCategory::VeryPoor => "Very Poor",
            AqiCategory::Unclassified => "Unclassified",
        }
    }

    /// Display color shared by map markers, chart shading and the legend.
    pub fn color(&self) -> &'static str {
        match self {
            AqiCategory::Good => "green",
            AqiCategory::Moderate => "yellow",
            AqiCategory::Poor => "orange",
            AqiCategory::VeryPoor => "red",
            AqiCategory::Unclassified => "gray",
        }
    }
}

/// A concentration range (µg/m³) paired with its category.
///
/// Bands for one pollutant are ascending and contiguous. The last band's
/// `high` only bounds chart shading; values above it are still in that band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub low: f64,
    pub high: f64,
    pub category: AqiCategory,
}

impl Band {
    pub const fn new(low: f64, high: f64, category: AqiCategory) -> Self {
        Self {
            low,
            high,
            category,
        }
    }

    pub fn color(&self) -> &'static str {
        self.category.color()
    }
}

const PM25_BANDS: [Band; 4] = [
    Band::new(0.0, 30.0, AqiCategory::Good),
    Band::new(30.0, 60.0, AqiCategory::Moderate),
    Band::new(60.0, 90.0, AqiCategory::Poor),
    Band::new(90.0, 300.0, AqiCategory::VeryPoor),
];

const PM10_BANDS: [Band; 4] = [
    Band::new(0.0, 50.0, AqiCategory::Good),
    Band::new(50.0, 100.0, AqiCategory::Moderate),
    Band::new(100.0, 250.0, AqiCategory::Poor),
    Band::new(250.0, 600.0, AqiCategory::VeryPoor),
];

const NITROGEN_DIOXIDE_BANDS: [Band; 4] = [
    Band::new(0.0, 40.0, AqiCategory::Good),
    Band::new(40.0, 80.0, AqiCategory::Moderate),
    Band::new(80.0, 180.0, AqiCategory::Poor),
    Band::new(180.0, 400.0, AqiCategory::VeryPoor),
];

/// Band table for a pollutant, or `None` when it has no thresholds.
pub fn bands_for(pollutant: &Pollutant) -> Option<&'static [Band]> {
    match pollutant {
        Pollutant::Pm25 => Some(&PM25_BANDS),
        Pollutant::Pm10 => Some(&PM10_BANDS),
        Pollutant::NitrogenDioxide => Some(&NITROGEN_DIOXIDE_BANDS),
        Pollutant::Other(_) => None,
    }
}
