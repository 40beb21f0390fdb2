use crate::core::classify::classify;
use crate::core::feed::{CurrentValue, FeedPayload, RawNumber, StationRecord, EXPECTED_DATA_VERSION};
use crate::domain::model::{LoadResult, Measurement, Plant, Station, POLLEN_UNIT};
use crate::domain::ports::{ConfigProvider, PollenProvider};
use crate::utils::error::{PollenError, Result};
use async_trait::async_trait;
use chrono::TimeZone;
use chrono_tz::Tz;
use reqwest::Client;
use std::time::Duration;

pub struct PollenService<C: ConfigProvider> {
    client: Client,
    config: C,
}

impl<C: ConfigProvider> PollenService<C> {
    pub fn new(config: C) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Fetch and normalize the current values for the requested plants.
    ///
    /// Backend trouble (failed fetch, unexpected version, unusable records)
    /// is logged and absorbed; callers always get a result back and decide
    /// from `backend_version` and the station map how much to trust it.
    pub async fn load(&self, plants: &[Plant]) -> LoadResult {
        let mut result = LoadResult::default();

        for &plant in plants {
            let payload = match self.fetch_feed(plant).await {
                Ok(payload) => payload,
                Err(err) => {
                    tracing::error!("Failed to fetch data for {}: {}", plant, err);
                    continue;
                }
            };

            if let Some(version) = payload.config.version {
                if version != EXPECTED_DATA_VERSION {
                    tracing::warn!("Unexpected data version: {}", version);
                }
                result.backend_version = Some(version);
            }

            for raw in payload.stations {
                if let Err(err) = merge_station(&mut result, plant, self.config.timezone(), raw) {
                    tracing::warn!("Skipping station record for {}: {}", plant, err);
                }
            }
        }

        result
    }

    /// Load every plant the network publishes.
    pub async fn load_all(&self) -> LoadResult {
        self.load(&Plant::ALL).await
    }

    async fn fetch_feed(&self, plant: Plant) -> Result<FeedPayload> {
        let url = format!(
            "{}/{}.json",
            self.config.base_url().trim_end_matches('/'),
            plant.feed_name()
        );
        tracing::debug!("Requesting pollen feed: {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(self.config.timeout_seconds()))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Feed response status: {}", status);
        if !status.is_success() {
            return Err(PollenError::BackendStatus { plant, status });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl<C: ConfigProvider> PollenProvider for PollenService<C> {
    async fn load(&self, plants: &[Plant]) -> LoadResult {
        PollenService::load(self, plants).await
    }

    async fn load_all(&self) -> LoadResult {
        PollenService::load_all(self).await
    }
}

/// Normalize one raw station entry into the result map.
///
/// Station identity dedups by code: the first sighting wins for geo/identity
/// fields, later feeds only contribute measurements. An entry whose identity
/// fields cannot be parsed is rejected wholesale so the map never holds a
/// half-populated station.
fn merge_station(
    result: &mut LoadResult,
    plant: Plant,
    timezone: Tz,
    raw: serde_json::Value,
) -> Result<()> {
    let record: StationRecord = serde_json::from_value(raw)?;

    let altitude =
        record
            .altitude
            .trim()
            .parse::<i32>()
            .map_err(|_| PollenError::MalformedStation {
                reason: format!(
                    "station '{}' has non-numeric altitude '{}'",
                    record.id, record.altitude
                ),
            })?;

    let station = Station {
        code: record.id,
        name: record.station_name,
        canton: record.canton,
        altitude,
        coordinates: record.coordinates,
        latlong: record.latlong,
    };
    let code = station.code.clone();

    let measurements = result.current_values.entry(station).or_default();

    if let Some(current) = record.current {
        match build_measurement(plant, &current, timezone, &code) {
            Ok(Some(measurement)) => measurements.push(measurement),
            Ok(None) => {}
            Err(err) => {
                tracing::warn!("Dropping measurement for {} at '{}': {}", plant, code, err);
            }
        }
    }

    Ok(())
}

fn build_measurement(
    plant: Plant,
    current: &CurrentValue,
    timezone: Tz,
    code: &str,
) -> Result<Option<Measurement>> {
    // no parseable numeric value ("no data" summary, absent field) means
    // no measurement, not a zero-value one
    let value = match current.value.as_ref().and_then(RawNumber::as_count) {
        Some(value) => value,
        None => return Ok(None),
    };

    let millis = current.date.ok_or_else(|| PollenError::MalformedStation {
        reason: format!("station '{}' reports a value without a date", code),
    })?;
    let date = timezone
        .timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| PollenError::MalformedStation {
            reason: format!(
                "station '{}' reports an unrepresentable timestamp {}",
                code, millis
            ),
        })?;

    Ok(Some(Measurement {
        plant,
        value,
        unit: POLLEN_UNIT,
        level: classify(plant, value),
        date,
    }))
}
