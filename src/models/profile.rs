use serde::{Deserialize, Serialize};

/// Named, server-stored bundle of SNMP/NTP/AAA presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snmp: Option<SnmpProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ntp: Option<NtpProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aaa: Option<AaaProfile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnmpProfile {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub auth_password: Option<String>,
    #[serde(default)]
    pub priv_password: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NtpProfile {
    #[serde(default)]
    pub primary_server: Option<String>,
    #[serde(default)]
    pub secondary_server: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AaaProfile {
    #[serde(default)]
    pub enable_secret: Option<String>,
    #[serde(default)]
    pub tacacs1_name: Option<String>,
    #[serde(default)]
    pub tacacs1_ip: Option<String>,
    #[serde(default)]
    pub tacacs1_key: Option<String>,
    #[serde(default)]
    pub tacacs2_name: Option<String>,
    #[serde(default)]
    pub tacacs2_ip: Option<String>,
    #[serde(default)]
    pub tacacs2_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileListResponse {
    #[serde(default)]
    pub profiles: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub status: String,
}

// --- Read-only aggregate views over the profile catalog ---

#[derive(Debug, Clone, Deserialize)]
pub struct VulnerabilityStatusResponse {
    pub summary: VulnerabilitySummary,
    #[serde(default)]
    pub results: Vec<ProfileVulnerability>,
    #[serde(default)]
    pub profiles_checked: u32,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VulnerabilitySummary {
    #[serde(default)]
    pub critical: u32,
    #[serde(default)]
    pub high: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub low: u32,
    #[serde(default)]
    pub clean: u32,
    #[serde(default)]
    pub unknown: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileVulnerability {
    pub profile_name: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub cve_count: u32,
    #[serde(default)]
    pub max_cvss: Option<f64>,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityScoreResponse {
    pub summary: ScoreSummary,
    #[serde(default)]
    pub results: Vec<ProfileScore>,
    #[serde(default)]
    pub profiles_checked: u32,
    #[serde(default)]
    pub average_score: Option<f64>,
    #[serde(default)]
    pub lowest_score: Option<f64>,
    #[serde(default)]
    pub highest_score: Option<f64>,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreSummary {
    #[serde(default)]
    pub excellent: u32,
    #[serde(default)]
    pub good: u32,
    #[serde(default)]
    pub fair: u32,
    #[serde(default)]
    pub poor: u32,
    #[serde(default)]
    pub critical: u32,
    #[serde(default)]
    pub unknown: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileScore {
    pub profile_name: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub cve_breakdown: Vec<ScorePenalty>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScorePenalty {
    pub cve_id: String,
    #[serde(default)]
    pub final_penalty: f64,
    #[serde(default)]
    pub modifiers_applied: Vec<String>,
}
