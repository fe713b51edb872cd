use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// CVE analysis request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CveRequest {
    pub platform: String,
    pub version: String,
    pub include_suggestions: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CveReport {
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub matched: Vec<CveEntry>,
    /// severity -> count
    #[serde(default)]
    pub summary: BTreeMap<String, u32>,
    #[serde(default)]
    pub recommended_upgrade: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CveEntry {
    pub cve_id: String,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub cvss_score: Option<f64>,
    #[serde(default)]
    pub cvss_vector: Option<String>,
    #[serde(default)]
    pub cwe: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fixed_in: Option<String>,
    #[serde(default)]
    pub workaround: Option<String>,
    #[serde(default)]
    pub advisory_url: Option<String>,
    #[serde(default)]
    pub references: Vec<String>,
}
