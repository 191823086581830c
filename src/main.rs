use crate::app_config::AppConfig;
use crate::command_loop::command_loop;
use crate::domain::events::Event;
use crate::poller::poll_telemetry;
use crate::store::Store;
use crate::store_listener::store_listener;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task;
use tracing::info;

mod app_config;
mod command_loop;
mod domain;
mod poller;
mod store;
mod store_listener;
mod thingsboard;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪴 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Arc::new(AppConfig::load());
    info!("✅  Loaded configuration");

    let client = thingsboard::new_client(&config)?;

    let (tx, rx) = mpsc::channel::<Event>(config.core().store_buffer_size());
    let mut store = Store::new(rx);
    let notifier_rx = store.notifier();

    task::spawn(async move {
        store_listener(notifier_rx).await;
    });
    info!("✅  Initialized store listener");

    task::spawn(async move {
        store.listen().await;
    });
    info!("✅  Initialized store");

    let poller_client = client.clone();
    let poller_config = config.clone();
    task::spawn(async move {
        poll_telemetry(tx, &poller_client, &poller_config).await;
    });
    info!("✅  Started telemetry poller");

    info!("🪴 {} is up and running", env!("CARGO_PKG_NAME"));

    command_loop(&client, &config).await;

    Ok(())
}
