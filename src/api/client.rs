use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;
use std::time::Duration;

use crate::error::{ClientError, Result};
use crate::models::aaa::AaaRequest;
use crate::models::cve::{CveReport, CveRequest};
use crate::models::golden::GoldenConfigRequest;
use crate::models::ntp::NtpRequest;
use crate::models::profile::{
    DeleteResponse, Profile, ProfileListResponse, SecurityScoreResponse,
    VulnerabilityStatusResponse,
};
use crate::models::snmp::{Snmpv3MultiRequest, Snmpv3Request};
use crate::models::tools::{
    IperfRequest, MtuRequest, MtuResponse, NetmaskConvertRequest, NetmaskConvertResponse,
    SubnetInfoRequest, SubnetInfoResponse, SubnetSplitRequest, SubnetSplitResponse,
    SupernetRequest, SupernetResponse,
};
use crate::models::GenerateResponse;

/// Generation/profile API client. Pure request/response boundary: no retries,
/// no business logic; non-2xx responses surface the body verbatim.
pub struct GeneratorClient {
    base_url: String,
    client: Client,
}

impl GeneratorClient {
    pub fn new(base_url: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        let body = if body.is_empty() {
            status.canonical_reason().unwrap_or("unknown error").to_string()
        } else {
            body
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            body,
        })
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let resp = self.client.post(self.url(path)).json(body).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.client.get(self.url(path)).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    /// Test connectivity to the generation API
    pub async fn health(&self) -> bool {
        match self.client.get(self.url("/health")).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    // --- Generators ---

    pub async fn generate_snmpv3(&self, req: &Snmpv3Request) -> Result<GenerateResponse> {
        self.post_json("/generate/snmpv3", req).await
    }

    pub async fn generate_snmpv3_multi(
        &self,
        req: &Snmpv3MultiRequest,
    ) -> Result<GenerateResponse> {
        self.post_json("/generate/snmpv3/multi", req).await
    }

    pub async fn generate_ntp(&self, req: &NtpRequest) -> Result<GenerateResponse> {
        self.post_json("/generate/ntp", req).await
    }

    pub async fn generate_aaa(&self, req: &AaaRequest) -> Result<GenerateResponse> {
        self.post_json("/generate/aaa", req).await
    }

    pub async fn generate_golden(&self, req: &GoldenConfigRequest) -> Result<GenerateResponse> {
        self.post_json("/generate/golden-config", req).await
    }

    pub async fn generate_iperf(&self, req: &IperfRequest) -> Result<GenerateResponse> {
        self.post_json("/generate/iperf", req).await
    }

    pub async fn analyze_cve(&self, req: &CveRequest) -> Result<CveReport> {
        self.post_json("/analyze/cve", req).await
    }

    // --- Subnet / MTU tools ---

    pub async fn subnet_info(&self, ip_cidr: &str) -> Result<SubnetInfoResponse> {
        let req = SubnetInfoRequest { ip_cidr: ip_cidr.to_string() };
        self.post_json("/tools/subnet/info", &req).await
    }

    pub async fn subnet_split(&self, ip_cidr: &str, new_prefix: u8) -> Result<SubnetSplitResponse> {
        let req = SubnetSplitRequest {
            ip_cidr: ip_cidr.to_string(),
            new_prefix,
        };
        self.post_json("/tools/subnet/split", &req).await
    }

    pub async fn subnet_supernet(&self, networks: Vec<String>) -> Result<SupernetResponse> {
        self.post_json("/tools/subnet/supernet", &SupernetRequest { networks })
            .await
    }

    pub async fn convert_netmask(&self, value: &str) -> Result<NetmaskConvertResponse> {
        let req = NetmaskConvertRequest { value: value.to_string() };
        self.post_json("/tools/subnet/convert", &req).await
    }

    pub async fn mtu_calculate(&self, req: &MtuRequest) -> Result<MtuResponse> {
        self.post_json("/tools/mtu/calculate", req).await
    }

    // --- Profiles ---

    pub async fn list_profiles(&self) -> Result<ProfileListResponse> {
        self.get_json("/profiles/list").await
    }

    pub async fn load_profile(&self, name: &str) -> Result<Profile> {
        let encoded = utf8_percent_encode(name, NON_ALPHANUMERIC);
        self.get_json(&format!("/profiles/load/{}", encoded)).await
    }

    pub async fn save_profile(&self, profile: &Profile) -> Result<Profile> {
        self.post_json("/profiles/save", profile).await
    }

    pub async fn delete_profile(&self, name: &str) -> Result<DeleteResponse> {
        let encoded = utf8_percent_encode(name, NON_ALPHANUMERIC);
        let resp = self
            .client
            .delete(self.url(&format!("/profiles/delete/{}", encoded)))
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    pub async fn profile_vulnerabilities(&self) -> Result<VulnerabilityStatusResponse> {
        self.get_json("/profiles/vulnerabilities").await
    }

    pub async fn profile_security_scores(&self) -> Result<SecurityScoreResponse> {
        self.get_json("/profiles/security-scores").await
    }
}
