use serde::{Deserialize, Serialize};

/// Single-host SNMPv3 generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snmpv3Request {
    pub mode: String,
    pub access_mode: AccessMode,
    pub device: String,
    pub host: String,
    pub user: String,
    pub group: String,
    pub auth_password: String,
    pub priv_password: String,
    pub use_acl: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl_hosts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packetsize: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traps: Option<Vec<String>>,
    pub logging_enabled: bool,
    pub logging_level: String,
    pub output_format: String,
}

/// Multi-host SNMPv3 generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snmpv3MultiRequest {
    pub acl_name: String,
    pub view_name: String,
    pub device: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packetsize: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traps: Option<Vec<String>>,
    pub logging_enabled: bool,
    pub logging_level: String,
    pub output_format: String,
    pub hosts: Vec<SnmpHost>,
}

/// One target host of a multi-host SNMPv3 request (wire form, no local id)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnmpHost {
    pub name: String,
    pub ip_address: String,
    /// None lets the generator derive "{name}-user"
    pub user_name: Option<String>,
    pub access_mode: AccessMode,
    pub auth_algorithm: AuthAlgorithm,
    pub priv_algorithm: PrivAlgorithm,
    pub auth_password: String,
    pub priv_password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AccessMode {
    #[default]
    #[serde(rename = "read-only")]
    ReadOnly,
    #[serde(rename = "read-write")]
    ReadWrite,
}

impl std::str::FromStr for AccessMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read-only" => Ok(AccessMode::ReadOnly),
            "read-write" => Ok(AccessMode::ReadWrite),
            other => Err(format!("unknown access mode '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AuthAlgorithm {
    #[default]
    #[serde(rename = "sha-2 256")]
    Sha2_256,
    #[serde(rename = "sha-2 384")]
    Sha2_384,
    #[serde(rename = "sha-2 512")]
    Sha2_512,
    #[serde(rename = "sha")]
    Sha,
    #[serde(rename = "md5")]
    Md5,
}

impl std::str::FromStr for AuthAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha-2 256" => Ok(AuthAlgorithm::Sha2_256),
            "sha-2 384" => Ok(AuthAlgorithm::Sha2_384),
            "sha-2 512" => Ok(AuthAlgorithm::Sha2_512),
            "sha" => Ok(AuthAlgorithm::Sha),
            "md5" => Ok(AuthAlgorithm::Md5),
            other => Err(format!("unknown auth algorithm '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PrivAlgorithm {
    #[default]
    #[serde(rename = "aes 256")]
    Aes256,
    #[serde(rename = "aes 192")]
    Aes192,
    #[serde(rename = "aes 128")]
    Aes128,
    #[serde(rename = "3des")]
    TripleDes,
    #[serde(rename = "des")]
    Des,
}

impl std::str::FromStr for PrivAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aes 256" => Ok(PrivAlgorithm::Aes256),
            "aes 192" => Ok(PrivAlgorithm::Aes192),
            "aes 128" => Ok(PrivAlgorithm::Aes128),
            "3des" => Ok(PrivAlgorithm::TripleDes),
            "des" => Ok(PrivAlgorithm::Des),
            other => Err(format!("unknown priv algorithm '{}'", other)),
        }
    }
}
