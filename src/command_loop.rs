use crate::app_config::AppConfig;
use crate::domain::commands::Command;
use crate::thingsboard::send_command;
use reqwest::Client;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, instrument};

/// Reads actuator commands from stdin and dispatches them as one-way RPCs.
/// A failed command only produces a log line; the displayed readings and any
/// previously sent actuator state are left as they are.
#[instrument(skip_all)]
pub async fn command_loop(client: &Client, config: &AppConfig) {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    info!("⌨️ Type 'led on|off' or 'fan on|off' to control the actuators, 'quit' to exit");
    while let Ok(Some(line)) = lines.next_line().await {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" {
            return;
        }

        match input.parse::<Command>() {
            Ok(command) => match send_command(client, config, &command).await {
                Ok(message) => info!("🟢 {}", message),
                Err(e) => error!("⚠️ RPC failure: {}", e),
            },
            Err(e) => error!("⚠️ {}", e),
        }
    }
}
