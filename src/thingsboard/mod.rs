mod client;
mod error;
mod rpc;
mod telemetry;
mod time_series;

pub use client::{ClientError, new_client};
pub use error::ThingsBoardError;
pub use rpc::send_command;
pub use telemetry::latest_telemetry;
