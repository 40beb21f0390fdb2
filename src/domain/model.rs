use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Unit reported for every pollen count (particles per cubic metre of air).
pub const POLLEN_UNIT: &str = "No/m³";

/// Pollen species tracked by the measurement network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Plant {
    Alder,
    Ash,
    Beech,
    Birch,
    Grasses,
    Hazel,
    Oak,
}

impl Plant {
    pub const ALL: [Plant; 7] = [
        Plant::Alder,
        Plant::Ash,
        Plant::Beech,
        Plant::Birch,
        Plant::Grasses,
        Plant::Hazel,
        Plant::Oak,
    ];

    /// Backend feed this species is published under.
    pub fn feed_name(self) -> &'static str {
        match self {
            Plant::Alder => "messwerte-pollen-erle-1h",
            Plant::Ash => "messwerte-pollen-esche-1h",
            Plant::Beech => "messwerte-pollen-buche-1h",
            Plant::Birch => "messwerte-pollen-birke-1h",
            Plant::Grasses => "messwerte-pollen-graeser-1h",
            Plant::Hazel => "messwerte-pollen-hasel-1h",
            Plant::Oak => "messwerte-pollen-eiche-1h",
        }
    }
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Plant::Alder => "alder",
            Plant::Ash => "ash",
            Plant::Beech => "beech",
            Plant::Birch => "birch",
            Plant::Grasses => "grasses",
            Plant::Hazel => "hazel",
            Plant::Oak => "oak",
        };
        f.write_str(name)
    }
}

/// Severity of a pollen count, ordered from no load to very high load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    None,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::None => "none",
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
            Level::VeryHigh => "very high",
        };
        f.write_str(name)
    }
}

/// A physical measurement site. Identity is the backend-assigned code;
/// everything else is descriptive metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Station {
    pub code: String,
    pub name: String,
    pub canton: String,
    pub altitude: i32,
    /// Planar (LV95) coordinate pair.
    pub coordinates: (i32, i32),
    pub latlong: (f64, f64),
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

/// One observed pollen count for one plant at one station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub plant: Plant,
    pub value: u32,
    pub unit: &'static str,
    pub level: Level,
    pub date: DateTime<Tz>,
}

/// Result of one load cycle: the backend's reported schema version and the
/// current values grouped by station.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadResult {
    /// Version string of the last successfully parsed response; `None` when
    /// no fetch succeeded.
    pub backend_version: Option<String>,
    pub current_values: HashMap<Station, Vec<Measurement>>,
}

impl LoadResult {
    pub fn is_empty(&self) -> bool {
        self.current_values.is_empty()
    }

    pub fn station_by_code(&self, code: &str) -> Option<&Station> {
        self.current_values.keys().find(|station| station.code == code)
    }

    pub fn measurements_for(&self, code: &str) -> Option<&[Measurement]> {
        self.current_values
            .iter()
            .find(|(station, _)| station.code == code)
            .map(|(_, measurements)| measurements.as_slice())
    }
}
