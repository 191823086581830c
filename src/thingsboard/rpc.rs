use crate::app_config::AppConfig;
use crate::domain::commands::Command;
use crate::thingsboard::error::ThingsBoardError;
use reqwest::Client;
use serde_json::json;
use tracing::{debug, instrument};

/// Posts a one-way RPC to the device. The platform only acknowledges that it
/// accepted the call; whether the actuator actually switched is not reported.
#[instrument(skip(client, config))]
pub async fn send_command(client: &Client, config: &AppConfig, command: &Command) -> Result<String, ThingsBoardError> {
    let thingsboard = config.thingsboard();
    let url = format!("{}/api/plugins/rpc/oneway/{}", thingsboard.url(), thingsboard.device_id());
    let body = json!({ "method": command.method(), "params": command.param() });

    debug!("📤 Sending RPC to {}: {}", url, body);
    let response = client.post(url).json(&body).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ThingsBoardError::Protocol(status));
    }

    Ok(format!("Sent RPC: {} → {}", command.method(), command.param()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;

    const RPC_PATH: &str = "/api/plugins/rpc/oneway/device-1";

    #[tokio::test]
    async fn posts_the_method_and_param_as_json() -> Result<(), ThingsBoardError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", RPC_PATH)
            .match_body(Matcher::Json(json!({ "method": "setLED", "params": true })))
            .with_status(200)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().thingsboard_url(server.url()).build();
        let message = send_command(&Client::new(), &config, &Command::led(true)).await?;

        mock.assert();
        assert!(message.contains("setLED"));
        assert!(message.contains("true"));

        Ok(())
    }

    #[tokio::test]
    async fn confirms_the_value_that_was_sent() -> Result<(), ThingsBoardError> {
        let mut server = mockito::Server::new_async().await;

        server.mock("POST", RPC_PATH).with_status(200).create_async().await;

        let config = AppConfigBuilder::new().thingsboard_url(server.url()).build();
        let message = send_command(&Client::new(), &config, &Command::fan(false)).await?;

        assert_eq!(message, "Sent RPC: setFan → false");

        Ok(())
    }

    #[tokio::test]
    async fn a_non_success_status_becomes_a_protocol_error() {
        let mut server = mockito::Server::new_async().await;

        server.mock("POST", RPC_PATH).with_status(401).create_async().await;

        let config = AppConfigBuilder::new().thingsboard_url(server.url()).build();
        let result = send_command(&Client::new(), &config, &Command::led(false)).await;

        let error = result.unwrap_err();
        assert!(matches!(error, ThingsBoardError::Protocol(status) if status.as_u16() == 401));
        assert!(error.to_string().contains("401"));
    }

    #[tokio::test]
    async fn a_refused_connection_becomes_a_transport_error() {
        let config = AppConfigBuilder::new().thingsboard_url("http://127.0.0.1:9".to_string()).build();
        let result = send_command(&Client::new(), &config, &Command::fan(true)).await;

        let error = result.unwrap_err();
        assert!(matches!(error, ThingsBoardError::Transport(_)));
        assert!(!error.to_string().is_empty());
    }

    #[tokio::test]
    async fn forwards_an_arbitrary_method_name_untouched() -> Result<(), ThingsBoardError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", RPC_PATH)
            .match_body(Matcher::Json(json!({ "method": "setBuzzer", "params": false })))
            .with_status(200)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().thingsboard_url(server.url()).build();
        send_command(&Client::new(), &config, &Command::new("setBuzzer", false)).await?;

        mock.assert();

        Ok(())
    }
}
