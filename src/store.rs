use crate::domain::events::Event;
use crate::domain::telemetry::TelemetrySnapshot;
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;
use tokio::sync::watch::{Receiver as WatchReceiver, Sender as WatchSender};
use tokio::sync::{RwLock, watch};
use tracing::{debug, instrument};

pub type SharedSnapshot = Arc<RwLock<TelemetrySnapshot>>;

/// Holds the readings currently on display. A new snapshot replaces the old
/// one wholesale; a failed fetch never reaches the store, so the previous
/// readings stay visible.
#[derive(Debug)]
pub struct Store {
    snapshot: SharedSnapshot,
    rx: Receiver<Event>,
    notifier_tx: WatchSender<SharedSnapshot>,
    notifier_rx: WatchReceiver<SharedSnapshot>,
}

impl Store {
    pub fn new(rx: Receiver<Event>) -> Self {
        let snapshot = Arc::new(RwLock::new(TelemetrySnapshot::new()));
        let (notifier_tx, notifier_rx) = watch::channel::<SharedSnapshot>(snapshot.clone());

        Store {
            snapshot,
            rx,
            notifier_tx,
            notifier_rx,
        }
    }

    pub fn notifier(&self) -> WatchReceiver<SharedSnapshot> {
        self.notifier_rx.clone()
    }

    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        while let Some(event) = self.rx.recv().await {
            debug!("🔵 Received event: {:?}", event);
            match event {
                Event::SnapshotReceived(snapshot) => {
                    let mut write_guard = self.snapshot.write().await;
                    *write_guard = snapshot;
                    drop(write_guard);

                    self.notifier_tx.send(self.snapshot.clone()).unwrap_or_default();
                }
            }
        }
    }
}
