pub mod aaa;
pub mod cve;
pub mod golden;
pub mod ntp;
pub mod profile;
pub mod snmp;
pub mod tools;

use serde::Deserialize;

/// Common response shape of all /generate/* endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub config: String,
}
