use crate::app_config::AppConfig;
use crate::domain::events::Event;
use crate::thingsboard::latest_telemetry;
use reqwest::Client;
use tokio::sync::mpsc::Sender;
use tokio::time::{self, MissedTickBehavior};
use tracing::{instrument, warn};

/// Fetches telemetry on a fixed interval and forwards each successful
/// snapshot to the store. A failed fetch is logged and skipped, keeping the
/// previous readings on display.
#[instrument(skip_all)]
pub async fn poll_telemetry(tx: Sender<Event>, client: &Client, config: &AppConfig) {
    let mut interval = time::interval(config.core().poll_interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        match latest_telemetry(client, config).await {
            Ok(snapshot) => {
                if tx.send(Event::SnapshotReceived(snapshot)).await.is_err() {
                    // Store is gone, nothing left to poll for
                    return;
                }
            }
            Err(e) => warn!("⚠️ Failed to fetch telemetry: {}", e),
        }
    }
}
