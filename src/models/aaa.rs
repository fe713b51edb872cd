use serde::{Deserialize, Serialize};

/// AAA / TACACS+ generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AaaRequest {
    pub device: String,
    /// "tacacs" or "local-only"
    pub mode: String,
    // SSH prerequisites
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    pub ssh_modulus: String,
    pub ssh_version: String,
    // Credentials
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_secret: Option<String>,
    pub use_sha256_secret: bool,
    // Local fallback user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_password: Option<String>,
    // TACACS+ servers
    pub tacacs_group_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tacacs1_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tacacs1_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tacacs1_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tacacs2_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tacacs2_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tacacs2_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_timeout: Option<u32>,
    pub use_exec_accounting: bool,
    pub use_command_accounting: bool,
    pub output_format: String,
}
