use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Pollutant identifier as stored in the `pollutant` column.
///
/// Names the dashboard has no thresholds for are kept verbatim in
/// [`Pollutant::Other`] so they can still be charted and listed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Pollutant {
    Pm25,
    Pm10,
    NitrogenDioxide,
    Other(String),
}

impl Pollutant {
    /// Pollutants charted by default, in panel order.
    pub const CHARTED: [Pollutant; 3] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::NitrogenDioxide,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Pollutant::Pm25 => "pm2_5",
            Pollutant::Pm10 => "pm10",
            Pollutant::NitrogenDioxide => "nitrogen_dioxide",
            Pollutant::Other(name) => name,
        }
    }

    /// Panel title, e.g. `PM2_5`.
    pub fn title(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl FromStr for Pollutant {
    type Err = Infallible;

    /// Only the exact store names map to graded pollutants.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "pm2_5" => Pollutant::Pm25,
            "pm10" => Pollutant::Pm10,
            "nitrogen_dioxide" => Pollutant::NitrogenDioxide,
            other => Pollutant::Other(other.to_string()),
        })
    }
}

impl From<String> for Pollutant {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(pollutant) => pollutant,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for Pollutant {
    fn from(value: &str) -> Self {
        Pollutant::from(value.to_string())
    }
}

impl From<Pollutant> for String {
    fn from(value: Pollutant) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
