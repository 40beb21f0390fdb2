use serde::Deserialize;

/// Version string the current parser understands.
pub const EXPECTED_DATA_VERSION: &str = "3.0.0";

/// Top-level envelope of a station-table feed.
///
/// Stations stay as raw JSON values here so that one malformed record can be
/// skipped without rejecting the whole payload.
#[derive(Debug, Deserialize)]
pub struct FeedPayload {
    pub config: FeedInfo,
    #[serde(default)]
    pub stations: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct FeedInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct StationRecord {
    pub id: String,
    pub station_name: String,
    pub canton: String,
    pub altitude: String,
    pub coordinates: (i32, i32),
    pub latlong: (f64, f64),
    #[serde(default)]
    pub current: Option<CurrentValue>,
}

/// The per-station "current" sub-record. All fields are optional: a station
/// without data carries only a summary.
#[derive(Debug, Deserialize)]
pub struct CurrentValue {
    #[serde(default)]
    pub value: Option<RawNumber>,
    /// Epoch milliseconds of the observation.
    #[serde(default)]
    pub date: Option<i64>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// The backend encodes counts as strings ("42"); accept plain integers too.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Integer(u64),
    Text(String),
}

impl RawNumber {
    pub fn as_count(&self) -> Option<u32> {
        match self {
            RawNumber::Integer(n) => u32::try_from(*n).ok(),
            RawNumber::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_station_record() {
        let raw = serde_json::json!({
            "network": "messwerte-pollen-graeser-1h",
            "network_type": "messnetz-pollen",
            "station_name": "Luzern",
            "id": "PLZ",
            "current": {
                "value": "9",
                "date": 1754751600000i64,
                "label": "Current value",
                "summary": "Grasses, measured on 9.8.2025, 17:00 at 499 m a. sea level"
            },
            "station_type": "Pollen autom.",
            "altitude": "499",
            "measurement_height": "36.00 m (on 34.00 m-roof)",
            "coordinates": [2665198, 1212207],
            "latlong": [47.057678, 8.296803],
            "canton": "LU"
        });

        let record: StationRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.id, "PLZ");
        assert_eq!(record.station_name, "Luzern");
        assert_eq!(record.canton, "LU");
        assert_eq!(record.altitude, "499");
        assert_eq!(record.coordinates, (2665198, 1212207));
        assert_eq!(record.latlong, (47.057678, 8.296803));

        let current = record.current.unwrap();
        assert_eq!(current.value.unwrap().as_count(), Some(9));
        assert_eq!(current.date, Some(1754751600000));
    }

    #[test]
    fn test_parse_no_data_record() {
        let raw = serde_json::json!({
            "id": "PZH",
            "station_name": "Zürich",
            "canton": "ZH",
            "altitude": "581",
            "coordinates": [2685110, 1248099],
            "latlong": [47.378225, 8.565644],
            "current": {"summary": "no data"}
        });

        let record: StationRecord = serde_json::from_value(raw).unwrap();
        let current = record.current.unwrap();
        assert!(current.value.is_none());
        assert!(current.date.is_none());
        assert_eq!(current.summary.as_deref(), Some("no data"));
    }

    #[test]
    fn test_raw_number_conversions() {
        let text: RawNumber = serde_json::from_value(serde_json::json!("42")).unwrap();
        assert_eq!(text.as_count(), Some(42));

        let integer: RawNumber = serde_json::from_value(serde_json::json!(42)).unwrap();
        assert_eq!(integer.as_count(), Some(42));

        let garbage: RawNumber = serde_json::from_value(serde_json::json!("n/a")).unwrap();
        assert_eq!(garbage.as_count(), None);
    }

    #[test]
    fn test_feed_info_with_missing_fields() {
        let payload: FeedPayload =
            serde_json::from_value(serde_json::json!({"config": {"version": "1.0"}})).unwrap();
        assert_eq!(payload.config.version.as_deref(), Some("1.0"));
        assert!(payload.config.name.is_none());
        assert!(payload.stations.is_empty());
    }
}
