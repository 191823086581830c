use crate::domain::telemetry::TelemetrySnapshot;

#[derive(Debug)]
pub enum Event {
    SnapshotReceived(TelemetrySnapshot),
}
