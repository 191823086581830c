use crate::app_config::AppConfig;
use crate::domain::telemetry::{TelemetryKey, TelemetrySnapshot};
use crate::thingsboard::error::ThingsBoardError;
use crate::thingsboard::time_series::TimeSeriesResponse;
use reqwest::Client;
use tracing::{debug, instrument};

/// Fetches the latest sample for every telemetry key the device reported.
/// Keys the server omits, or returns with an empty sample list, are absent
/// from the snapshot rather than defaulted.
#[instrument(skip_all)]
pub async fn latest_telemetry(client: &Client, config: &AppConfig) -> Result<TelemetrySnapshot, ThingsBoardError> {
    let thingsboard = config.thingsboard();
    let keys = TelemetryKey::ALL.map(|key| key.as_str()).join(",");
    let url = format!(
        "{}/api/plugins/telemetry/DEVICE/{}/values/timeseries?keys={}",
        thingsboard.url(),
        thingsboard.device_id(),
        keys
    );

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ThingsBoardError::Protocol(status));
    }

    let body = response.text().await?;
    let series: TimeSeriesResponse = serde_json::from_str(&body)?;

    let snapshot = series
        .into_iter()
        .filter_map(|(key, samples)| {
            // The platform orders samples newest first
            let key = key.parse::<TelemetryKey>().ok()?;
            let newest = samples.into_iter().next()?;
            Some((key, newest.value))
        })
        .collect::<TelemetrySnapshot>();

    debug!("🌡 Latest telemetry: {:?}", snapshot);
    Ok(snapshot)
}
