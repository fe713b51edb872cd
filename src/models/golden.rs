use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Golden Config generation request.
///
/// Each of the three sections arrives either as a literal config string or as
/// the cached request payload of the matching generator. The payloads are kept
/// as raw JSON: the composer forwards them exactly as originally sent (minus
/// the output format selector, which is re-derived from this request).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenConfigRequest {
    pub device: String,
    pub mode: String,
    // Literal config strings (fallback when a section is not using saved state)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmpv3_config: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ntp_config: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aaa_config: Option<String>,
    // Cached generator payloads (when a section opted into saved state)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmpv3_payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmpv3_multi_payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ntp_payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aaa_payload: Option<Value>,
    // Baseline sections (modular)
    pub include_banner: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_banner: Option<String>,
    pub include_logging: bool,
    pub include_security: bool,
    pub output_format: String,
}
