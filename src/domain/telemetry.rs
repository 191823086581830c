use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Most-recent-value mapping produced by one fetch. Values are kept as the
/// platform sent them; parsing numeric strings is up to the renderer.
pub type TelemetrySnapshot = HashMap<TelemetryKey, String>;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TelemetryKey {
    Temperature,
    Humidity,
    Light,
}

impl TelemetryKey {
    pub const ALL: [TelemetryKey; 3] = [TelemetryKey::Temperature, TelemetryKey::Humidity, TelemetryKey::Light];

    pub fn as_str(&self) -> &'static str {
        match self {
            TelemetryKey::Temperature => "temperature",
            TelemetryKey::Humidity => "humidity",
            TelemetryKey::Light => "light",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            TelemetryKey::Temperature => "°C",
            TelemetryKey::Humidity => "%",
            TelemetryKey::Light => "lx",
        }
    }
}

impl fmt::Display for TelemetryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TelemetryKey {
    type Err = UnknownTelemetryKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "temperature" => Ok(TelemetryKey::Temperature),
            "humidity" => Ok(TelemetryKey::Humidity),
            "light" => Ok(TelemetryKey::Light),
            _ => Err(UnknownTelemetryKey(s.to_string())),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("unknown telemetry key '{0}'")]
pub struct UnknownTelemetryKey(String);
