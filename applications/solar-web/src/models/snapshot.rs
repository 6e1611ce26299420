use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// Current telemetry published by the inverter logger
///
/// Every field is required; a payload missing one of them is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Unix timestamp (seconds) of the last logger refresh
    pub last_refresh: i64,
    /// Instantaneous power in W
    pub webdata_now_p: f64,
    /// Energy produced today in kWh
    pub webdata_today_e: f64,
    /// Lifetime energy in kWh
    pub webdata_total_e: f64,
}

/// Parse a response body into a snapshot
pub fn parse_snapshot(body: &str) -> Result<StatusSnapshot, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
