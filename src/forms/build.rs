//! Typed request builders: one per generator, each validating the snapshot
//! against its schema before applying the generator's defaulting and
//! conditional null-out rules. A builder error means no request is issued.

use crate::error::{ClientError, Result};
use crate::models::aaa::AaaRequest;
use crate::models::cve::CveRequest;
use crate::models::ntp::{network_tier, NtpRequest};
use crate::models::snmp::{AccessMode, SnmpHost, Snmpv3MultiRequest, Snmpv3Request};
use crate::models::tools::IperfRequest;

use super::{validate, FormId, FormSnapshot};

pub(crate) fn get<'a>(s: &'a FormSnapshot, key: &str) -> Option<&'a str> {
    s.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

pub(crate) fn get_string(s: &FormSnapshot, key: &str) -> String {
    get(s, key).unwrap_or_default().to_string()
}

pub(crate) fn get_or(s: &FormSnapshot, key: &str, default: &str) -> String {
    get(s, key).unwrap_or(default).to_string()
}

pub(crate) fn get_opt(s: &FormSnapshot, key: &str) -> Option<String> {
    get(s, key).map(str::to_string)
}

pub(crate) fn get_bool(s: &FormSnapshot, key: &str) -> bool {
    get(s, key) == Some("true")
}

pub(crate) fn get_u32(s: &FormSnapshot, key: &str) -> Option<u32> {
    get(s, key).and_then(|v| v.parse().ok())
}

fn get_u32_or(s: &FormSnapshot, key: &str, default: u32) -> u32 {
    get_u32(s, key).unwrap_or(default)
}

/// Comma-separated trap list -> request list (None when nothing is selected)
fn get_traps(s: &FormSnapshot) -> Option<Vec<String>> {
    let traps: Vec<String> = get(s, "traps")?
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    if traps.is_empty() {
        None
    } else {
        Some(traps)
    }
}

pub fn build_snmpv3(s: &FormSnapshot) -> Result<Snmpv3Request> {
    validate(FormId::Snmpv3, s)?;

    let use_acl = get_bool(s, "use_acl");
    let logging_enabled = get_bool(s, "logging_enabled");

    Ok(Snmpv3Request {
        mode: get_string(s, "mode"),
        access_mode: get_string(s, "access_mode").parse().unwrap_or(AccessMode::ReadOnly),
        device: get_string(s, "device"),
        host: get_string(s, "host"),
        user: get_string(s, "user"),
        group: get_string(s, "group"),
        auth_password: get_string(s, "auth_password"),
        priv_password: get_string(s, "priv_password"),
        use_acl,
        acl_hosts: if use_acl { get_opt(s, "acl_hosts") } else { None },
        source_interface: get_opt(s, "source_interface"),
        packetsize: get_u32(s, "packetsize"),
        contact: get_opt(s, "contact"),
        location: get_opt(s, "location"),
        traps: get_traps(s),
        logging_enabled,
        logging_level: if logging_enabled {
            get_or(s, "logging_level", "informational")
        } else {
            "informational".to_string()
        },
        output_format: get_or(s, "output_format", "cli"),
    })
}

pub fn build_ntp(s: &FormSnapshot) -> Result<NtpRequest> {
    validate(FormId::Ntp, s)?;

    let tier = get_string(s, "network_tier");
    let is_core = tier == network_tier::CORE;
    let use_auth = get_bool(s, "use_auth");
    let use_acl = get_bool(s, "use_access_control");
    let use_ntp_master = is_core && get_bool(s, "use_ntp_master");

    Ok(NtpRequest {
        device: get_string(s, "device"),
        network_tier: tier,
        timezone: get_string(s, "timezone"),
        primary_server: get_string(s, "primary_server"),
        secondary_server: get_opt(s, "secondary_server"),
        tertiary_server: get_opt(s, "tertiary_server"),
        source_interface: get_opt(s, "source_interface"),
        use_ntp_master,
        ntp_master_stratum: if use_ntp_master {
            Some(get_or(s, "ntp_master_stratum", "3"))
        } else {
            None
        },
        ntp_peer: if is_core { get_opt(s, "ntp_peer") } else { None },
        use_auth,
        auth_algorithm: if use_auth {
            get_or(s, "auth_algorithm", "sha1")
        } else {
            "sha1".to_string()
        },
        key_id: if use_auth { get_opt(s, "key_id") } else { None },
        key_value: if use_auth { get_opt(s, "key_value") } else { None },
        use_logging: get_bool(s, "use_logging"),
        update_calendar: get_bool(s, "update_calendar"),
        use_access_control: use_acl,
        acl_peer_hosts: if use_acl { get_opt(s, "acl_peer_hosts") } else { None },
        acl_serve_network: if use_acl { get_opt(s, "acl_serve_network") } else { None },
        acl_serve_wildcard: if use_acl { get_opt(s, "acl_serve_wildcard") } else { None },
        output_format: get_or(s, "output_format", "cli"),
    })
}

pub fn build_aaa(s: &FormSnapshot) -> Result<AaaRequest> {
    validate(FormId::Aaa, s)?;

    let mode = if get(s, "mode") == Some("local-only") {
        "local-only"
    } else {
        "tacacs"
    };

    Ok(AaaRequest {
        device: get_string(s, "device"),
        mode: mode.to_string(),
        domain_name: get_opt(s, "domain_name"),
        ssh_modulus: get_or(s, "ssh_modulus", "2048"),
        ssh_version: get_or(s, "ssh_version", "2"),
        enable_secret: get_opt(s, "enable_secret"),
        use_sha256_secret: get_bool(s, "use_sha256_secret"),
        local_username: get_opt(s, "local_username"),
        local_password: get_opt(s, "local_password"),
        tacacs_group_name: get_or(s, "tacacs_group_name", "TAC-SERVERS"),
        tacacs1_name: get_opt(s, "tacacs1_name"),
        tacacs1_ip: get_opt(s, "tacacs1_ip"),
        tacacs1_key: get_opt(s, "tacacs1_key"),
        tacacs2_name: get_opt(s, "tacacs2_name"),
        tacacs2_ip: get_opt(s, "tacacs2_ip"),
        tacacs2_key: get_opt(s, "tacacs2_key"),
        source_interface: get_opt(s, "source_interface"),
        server_timeout: get_u32(s, "server_timeout"),
        use_exec_accounting: get_bool(s, "use_exec_accounting"),
        use_command_accounting: get_bool(s, "use_command_accounting"),
        output_format: get_or(s, "output_format", "cli"),
    })
}

/// Multi-host request. `hosts` must already be collected from the host list;
/// zero complete hosts is a validation failure, not a remote call.
pub fn build_snmp_multi(s: &FormSnapshot, hosts: Vec<SnmpHost>) -> Result<Snmpv3MultiRequest> {
    if hosts.is_empty() {
        return Err(ClientError::validation(
            "Add at least one host with name and IP address.",
        ));
    }
    validate(FormId::SnmpMulti, s)?;

    let logging_enabled = get_bool(s, "logging_enabled");

    Ok(Snmpv3MultiRequest {
        acl_name: get_or(s, "acl_name", "SNMP-POLLERS"),
        view_name: get_or(s, "view_name", "SECUREVIEW"),
        device: get_or(s, "device", "Cisco IOS XE"),
        contact: get_opt(s, "contact"),
        location: get_opt(s, "location"),
        source_interface: get_opt(s, "source_interface"),
        packetsize: get_u32(s, "packetsize"),
        traps: get_traps(s),
        logging_enabled,
        logging_level: if logging_enabled {
            get_or(s, "logging_level", "informational")
        } else {
            "informational".to_string()
        },
        output_format: get_or(s, "output_format", "cli"),
        hosts,
    })
}

pub fn build_cve(s: &FormSnapshot) -> Result<CveRequest> {
    validate(FormId::Cve, s)?;

    Ok(CveRequest {
        platform: get_string(s, "platform"),
        version: get_string(s, "version"),
        include_suggestions: get_bool(s, "include_suggestions"),
    })
}

pub fn build_iperf(s: &FormSnapshot) -> Result<IperfRequest> {
    validate(FormId::Iperf, s)?;

    Ok(IperfRequest {
        link_speed: get_string(s, "link_speed"),
        test_type: get_string(s, "test_type"),
        direction: get_string(s, "direction"),
        server_ip: get_string(s, "server_ip"),
        port: get_u32_or(s, "port", 5201) as u16,
        port_secondary: get_u32_or(s, "port_secondary", 5202) as u16,
        duration: get_u32_or(s, "duration", 60),
        interval: get_u32_or(s, "interval", 10),
        parallel_streams: get_u32_or(s, "parallel_streams", 4),
        target_bandwidth: get_opt(s, "target_bandwidth"),
        json_output: get_bool(s, "json_output"),
        output_format: get_or(s, "output_format", "cli"),
    })
}
