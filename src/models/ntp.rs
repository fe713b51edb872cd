use serde::{Deserialize, Serialize};

/// Canonical network tier values
pub mod network_tier {
    pub const CORE: &str = "CORE";
    pub const DISTRIBUTION: &str = "DISTRIBUTION";
    pub const ACCESS: &str = "ACCESS";
}

/// Short tier label for status display (DISTRIBUTION is abbreviated)
pub fn tier_short_label(tier: &str) -> &str {
    if tier == network_tier::DISTRIBUTION {
        "DIST"
    } else {
        tier
    }
}

/// NTP generation request (Cisco best practices generator)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NtpRequest {
    pub device: String,
    pub network_tier: String,
    pub timezone: String,
    pub primary_server: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_server: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tertiary_server: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_interface: Option<String>,
    // CORE-only
    pub use_ntp_master: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ntp_master_stratum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ntp_peer: Option<String>,
    // Authentication
    pub use_auth: bool,
    pub auth_algorithm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_value: Option<String>,
    pub use_logging: bool,
    pub update_calendar: bool,
    pub use_access_control: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl_peer_hosts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl_serve_network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl_serve_wildcard: Option<String>,
    pub output_format: String,
}
