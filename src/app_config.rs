use config::Config;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    thingsboard: ThingsBoard,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn thingsboard(&self) -> &ThingsBoard {
        &self.thingsboard
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    #[serde(with = "humantime_serde")]
    poll_interval: Duration,
    store_buffer_size: usize,
}

impl Core {
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn store_buffer_size(&self) -> usize {
        self.store_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct ThingsBoard {
    url: String,
    device_id: String,
    access_token: String,
}

impl ThingsBoard {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    poll_interval: Duration::from_secs(5),
                    store_buffer_size: 8,
                },
                thingsboard: ThingsBoard {
                    url: "https://thingsboard.url".to_string(),
                    device_id: "device-1".to_string(),
                    access_token: "token".to_string(),
                },
            },
        }
    }

    pub fn thingsboard_url(mut self, url: String) -> Self {
        self.config.thingsboard.url = url;
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.config.core.poll_interval = interval;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
