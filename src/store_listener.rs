use crate::domain::telemetry::{TelemetryKey, TelemetrySnapshot};
use crate::store::SharedSnapshot;
use tokio::sync::watch::Receiver;
use tracing::{info, instrument};

#[instrument(skip_all)]
pub async fn store_listener(mut rx: Receiver<SharedSnapshot>) {
    while rx.changed().await.is_ok() {
        let shared = rx.borrow().clone();
        let snapshot = shared.read().await;
        info!("📟 {}", render(&snapshot));
    }
}

fn render(snapshot: &TelemetrySnapshot) -> String {
    TelemetryKey::ALL
        .iter()
        .map(|key| {
            let reading = snapshot
                .get(key)
                .map(|value| format!("{} {}", value, key.unit()))
                .unwrap_or_else(|| "N/A".to_string());
            format!("{}: {}", key, reading)
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_every_key_with_its_unit() {
        let snapshot = TelemetrySnapshot::from([
            (TelemetryKey::Temperature, "24.3".to_string()),
            (TelemetryKey::Humidity, "55.2".to_string()),
            (TelemetryKey::Light, "123.4".to_string()),
        ]);

        assert_eq!(render(&snapshot), "temperature: 24.3 °C | humidity: 55.2 % | light: 123.4 lx");
    }

    #[test]
    fn renders_missing_keys_as_not_available() {
        let snapshot = TelemetrySnapshot::from([(TelemetryKey::Temperature, "24.3".to_string())]);

        assert_eq!(render(&snapshot), "temperature: 24.3 °C | humidity: N/A | light: N/A");
    }
}
