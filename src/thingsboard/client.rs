use crate::app_config::AppConfig;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

pub fn new_client(config: &AppConfig) -> Result<Client, ClientError> {
    let mut headers = header::HeaderMap::new();
    let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.thingsboard().access_token()))?;
    authorization.set_sensitive(true);
    headers.insert("X-Authorization", authorization);
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let client = Client::builder().default_headers(headers).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("ThingsBoard client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;

    #[tokio::test]
    async fn new_client_sets_the_authorization_header() -> Result<(), ClientError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .match_header("X-Authorization", "Bearer token")
            .match_header("Content-Type", "application/json")
            .create_async()
            .await;

        let config = AppConfigBuilder::new().thingsboard_url(server.url()).build();
        let client = new_client(&config)?;

        client.get(format!("{}{}", server.url(), "/")).send().await?;

        // Verify that the call came in and that the headers are set
        mock.assert();

        Ok(())
    }
}
