use serde::{Deserialize, Serialize};

// --- Subnet calculator ---

#[derive(Debug, Clone, Serialize)]
pub struct SubnetInfoRequest {
    pub ip_cidr: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubnetInfoResponse {
    #[serde(default)]
    pub input: String,
    pub subnet_info: SubnetInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubnetInfo {
    pub network: String,
    pub broadcast: String,
    pub cidr: String,
    pub netmask: String,
    pub wildcard: String,
    pub first_host: String,
    pub last_host: String,
    pub total_addresses: u64,
    pub usable_hosts: u64,
    pub network_class: String,
    pub is_private: bool,
    pub netmask_binary: String,
    pub prefix_length: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubnetSplitRequest {
    pub ip_cidr: String,
    pub new_prefix: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubnetSplitResponse {
    pub new_prefix: u8,
    pub total_subnets: u64,
    pub hosts_per_subnet: u64,
    #[serde(default)]
    pub subnets: Vec<SubnetSlice>,
    #[serde(default)]
    pub truncated: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubnetSlice {
    pub index: u32,
    pub cidr: String,
    pub first_host: String,
    pub last_host: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SupernetRequest {
    pub networks: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupernetResponse {
    pub input_count: u32,
    #[serde(default)]
    pub input_networks: Vec<String>,
    pub result_count: u32,
    #[serde(default)]
    pub result_networks: Vec<SupernetNetwork>,
    pub aggregation_possible: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupernetNetwork {
    pub cidr: String,
    pub usable_hosts: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct NetmaskConvertRequest {
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NetmaskConvertResponse {
    pub prefix: u8,
}

// --- MTU calculator ---

#[derive(Debug, Clone, Serialize)]
pub struct MtuRequest {
    pub interface_mtu: u32,
    pub tunnel_type: String,
    pub mpls_labels: u32,
    pub include_tcp_mss: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MtuResponse {
    pub interface_mtu: u32,
    pub tunnel_type: String,
    pub overhead_bytes: u32,
    #[serde(default)]
    pub overhead_breakdown: String,
    pub effective_mtu: u32,
    #[serde(default)]
    pub tcp_mss: Option<u32>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

// --- iPerf3 command generator ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IperfRequest {
    pub link_speed: String,
    pub test_type: String,
    pub direction: String,
    pub server_ip: String,
    pub port: u16,
    pub port_secondary: u16,
    pub duration: u32,
    pub interval: u32,
    pub parallel_streams: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_bandwidth: Option<String>,
    pub json_output: bool,
    pub output_format: String,
}
