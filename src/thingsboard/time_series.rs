use serde::Deserialize;
use std::collections::HashMap;

/// Timeseries payload: one entry per telemetry key the server knows about,
/// samples ordered newest first.
pub type TimeSeriesResponse = HashMap<String, Vec<TsSample>>;

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct TsSample {
    pub ts: i64,
    pub value: String,
}
