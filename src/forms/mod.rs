pub mod build;
pub mod visibility;

use std::collections::BTreeMap;
use std::str::FromStr;

/// Field values of one logical form, keyed by field name. Empty optional
/// fields are omitted rather than stored as empty strings, so restoring never
/// clobbers a default.
pub type FormSnapshot = BTreeMap<String, String>;

/// The logical forms of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormId {
    Snmpv3,
    Ntp,
    Aaa,
    Golden,
    Cve,
    SnmpMulti,
    Iperf,
}

impl FormId {
    pub const ALL: [FormId; 7] = [
        FormId::Snmpv3,
        FormId::Ntp,
        FormId::Aaa,
        FormId::Golden,
        FormId::Cve,
        FormId::SnmpMulti,
        FormId::Iperf,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormId::Snmpv3 => "snmpv3",
            FormId::Ntp => "ntp",
            FormId::Aaa => "aaa",
            FormId::Golden => "golden",
            FormId::Cve => "cve",
            FormId::SnmpMulti => "snmp-multi",
            FormId::Iperf => "iperf",
        }
    }

    pub fn storage_key(self) -> &'static str {
        match self {
            FormId::Snmpv3 => "snmpv3-form",
            FormId::Ntp => "ntp-form",
            FormId::Aaa => "aaa-form",
            FormId::Golden => "golden-form",
            FormId::Cve => "cve-form",
            FormId::SnmpMulti => "snmp-multi-form",
            FormId::Iperf => "iperf-form",
        }
    }
}

impl FromStr for FormId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormId::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| format!("unknown form '{}' (expected one of: snmpv3, ntp, aaa, golden, cve, snmp-multi, iperf)", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select(&'static [&'static str]),
    Bool,
    Int,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn req(name: &'static str, kind: FieldKind) -> FieldDef {
    FieldDef { name, kind, required: true }
}

const fn opt(name: &'static str, kind: FieldKind) -> FieldDef {
    FieldDef { name, kind, required: false }
}

const SNMPV3_SCHEMA: &[FieldDef] = &[
    req("mode", FieldKind::Text),
    req("access_mode", FieldKind::Select(&["read-only", "read-write"])),
    req("device", FieldKind::Text),
    req("host", FieldKind::Text),
    req("user", FieldKind::Text),
    req("group", FieldKind::Text),
    req("auth_password", FieldKind::Text),
    req("priv_password", FieldKind::Text),
    opt("use_acl", FieldKind::Bool),
    opt("acl_hosts", FieldKind::Text),
    opt("source_interface", FieldKind::Text),
    opt("packetsize", FieldKind::Int),
    opt("contact", FieldKind::Text),
    opt("location", FieldKind::Text),
    opt("traps", FieldKind::Text),
    opt("logging_enabled", FieldKind::Bool),
    opt("logging_level", FieldKind::Text),
    opt("output_format", FieldKind::Text),
];

const NTP_SCHEMA: &[FieldDef] = &[
    req("device", FieldKind::Text),
    req("network_tier", FieldKind::Select(&["CORE", "DISTRIBUTION", "ACCESS"])),
    req("timezone", FieldKind::Text),
    req("primary_server", FieldKind::Text),
    opt("secondary_server", FieldKind::Text),
    opt("tertiary_server", FieldKind::Text),
    opt("source_interface", FieldKind::Text),
    opt("use_ntp_master", FieldKind::Bool),
    opt("ntp_master_stratum", FieldKind::Int),
    opt("ntp_peer", FieldKind::Text),
    opt("use_auth", FieldKind::Bool),
    opt("auth_algorithm", FieldKind::Text),
    opt("key_id", FieldKind::Int),
    opt("key_value", FieldKind::Text),
    opt("use_logging", FieldKind::Bool),
    opt("update_calendar", FieldKind::Bool),
    opt("use_access_control", FieldKind::Bool),
    opt("acl_peer_hosts", FieldKind::Text),
    opt("acl_serve_network", FieldKind::Text),
    opt("acl_serve_wildcard", FieldKind::Text),
    opt("output_format", FieldKind::Text),
];

const AAA_SCHEMA: &[FieldDef] = &[
    req("device", FieldKind::Text),
    req("mode", FieldKind::Select(&["tacacs", "local-only"])),
    opt("domain_name", FieldKind::Text),
    opt("ssh_modulus", FieldKind::Int),
    opt("ssh_version", FieldKind::Int),
    opt("enable_secret", FieldKind::Text),
    opt("use_sha256_secret", FieldKind::Bool),
    opt("local_username", FieldKind::Text),
    opt("local_password", FieldKind::Text),
    opt("tacacs_group_name", FieldKind::Text),
    opt("tacacs1_name", FieldKind::Text),
    opt("tacacs1_ip", FieldKind::Text),
    opt("tacacs1_key", FieldKind::Text),
    opt("tacacs2_name", FieldKind::Text),
    opt("tacacs2_ip", FieldKind::Text),
    opt("tacacs2_key", FieldKind::Text),
    opt("source_interface", FieldKind::Text),
    opt("server_timeout", FieldKind::Int),
    opt("use_exec_accounting", FieldKind::Bool),
    opt("use_command_accounting", FieldKind::Bool),
    opt("output_format", FieldKind::Text),
];

const GOLDEN_SCHEMA: &[FieldDef] = &[
    req("device", FieldKind::Text),
    req("mode", FieldKind::Text),
    opt("snmp_source", FieldKind::Select(&["single", "multi"])),
    opt("use_snmpv3", FieldKind::Bool),
    opt("use_ntp", FieldKind::Bool),
    opt("use_aaa", FieldKind::Bool),
    opt("snmpv3_config", FieldKind::Text),
    opt("ntp_config", FieldKind::Text),
    opt("aaa_config", FieldKind::Text),
    opt("include_banner", FieldKind::Bool),
    opt("custom_banner", FieldKind::Text),
    opt("include_logging", FieldKind::Bool),
    opt("include_security", FieldKind::Bool),
    opt("output_format", FieldKind::Text),
];

const CVE_SCHEMA: &[FieldDef] = &[
    req("platform", FieldKind::Text),
    req("version", FieldKind::Text),
    opt("include_suggestions", FieldKind::Bool),
];

const SNMP_MULTI_SCHEMA: &[FieldDef] = &[
    opt("acl_name", FieldKind::Text),
    opt("view_name", FieldKind::Text),
    opt("device", FieldKind::Text),
    opt("contact", FieldKind::Text),
    opt("location", FieldKind::Text),
    opt("source_interface", FieldKind::Text),
    opt("packetsize", FieldKind::Int),
    opt("traps", FieldKind::Text),
    opt("logging_enabled", FieldKind::Bool),
    opt("logging_level", FieldKind::Text),
    opt("output_format", FieldKind::Text),
];

const IPERF_SCHEMA: &[FieldDef] = &[
    req("link_speed", FieldKind::Text),
    req("test_type", FieldKind::Text),
    req("direction", FieldKind::Text),
    req("server_ip", FieldKind::Text),
    opt("port", FieldKind::Int),
    opt("port_secondary", FieldKind::Int),
    opt("duration", FieldKind::Int),
    opt("interval", FieldKind::Int),
    opt("parallel_streams", FieldKind::Int),
    opt("target_bandwidth", FieldKind::Text),
    opt("json_output", FieldKind::Bool),
    opt("output_format", FieldKind::Text),
];

pub fn schema(form: FormId) -> &'static [FieldDef] {
    match form {
        FormId::Snmpv3 => SNMPV3_SCHEMA,
        FormId::Ntp => NTP_SCHEMA,
        FormId::Aaa => AAA_SCHEMA,
        FormId::Golden => GOLDEN_SCHEMA,
        FormId::Cve => CVE_SCHEMA,
        FormId::SnmpMulti => SNMP_MULTI_SCHEMA,
        FormId::Iperf => IPERF_SCHEMA,
    }
}

pub fn field_def(form: FormId, name: &str) -> Option<&'static FieldDef> {
    schema(form).iter().find(|f| f.name == name)
}

pub fn is_known_field(form: FormId, name: &str) -> bool {
    field_def(form, name).is_some()
}

/// Validate a snapshot against its schema. Runs once at the submission
/// boundary; a failure here means no request is issued.
pub fn validate(form: FormId, snapshot: &FormSnapshot) -> crate::error::Result<()> {
    use crate::error::ClientError;

    for def in schema(form) {
        let value = snapshot.get(def.name).map(|v| v.trim()).filter(|v| !v.is_empty());

        match value {
            None if def.required => {
                return Err(ClientError::validation(format!(
                    "'{}' is required for the {} form",
                    def.name,
                    form.name()
                )));
            }
            None => {}
            Some(v) => match def.kind {
                FieldKind::Text => {}
                FieldKind::Int => {
                    if v.parse::<i64>().is_err() {
                        return Err(ClientError::validation(format!(
                            "'{}' must be a number (got '{}')",
                            def.name, v
                        )));
                    }
                }
                FieldKind::Bool => {
                    if v != "true" && v != "false" {
                        return Err(ClientError::validation(format!(
                            "'{}' must be true or false (got '{}')",
                            def.name, v
                        )));
                    }
                }
                FieldKind::Select(options) => {
                    if !options.contains(&v) {
                        return Err(ClientError::validation(format!(
                            "'{}' must be one of [{}] (got '{}')",
                            def.name,
                            options.join(", "),
                            v
                        )));
                    }
                }
            },
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(pairs: &[(&str, &str)]) -> FormSnapshot {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn missing_required_field_fails_validation() {
        let s = snap(&[("platform", "ios-xe")]);
        let err = validate(FormId::Cve, &s).unwrap_err();
        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn select_rejects_unknown_value() {
        let mut s = snap(&[
            ("device", "Cisco IOS XE"),
            ("network_tier", "EDGE"),
            ("timezone", "UTC"),
            ("primary_server", "10.0.0.1"),
        ]);
        assert!(validate(FormId::Ntp, &s).is_err());
        s.insert("network_tier".to_string(), "CORE".to_string());
        assert!(validate(FormId::Ntp, &s).is_ok());
    }

    #[test]
    fn int_and_bool_kinds_are_checked() {
        let mut s = snap(&[
            ("platform", "ios"),
            ("version", "15.2"),
            ("include_suggestions", "yes"),
        ]);
        assert!(validate(FormId::Cve, &s).is_err());
        s.insert("include_suggestions".to_string(), "true".to_string());
        assert!(validate(FormId::Cve, &s).is_ok());
    }

    #[test]
    fn empty_optional_values_are_not_type_checked() {
        let s = snap(&[
            ("platform", "ios"),
            ("version", "15.2"),
            ("include_suggestions", ""),
        ]);
        assert!(validate(FormId::Cve, &s).is_ok());
    }
}
