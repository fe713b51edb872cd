use std::collections::BTreeSet;

use super::{schema, FormId, FormSnapshot};

/// One conditional-visibility rule: the listed fields are active only while
/// `when` holds `equals`. A field named by several rules needs all of them to
/// match (e.g. the NTP master stratum needs the CORE tier and the master flag).
pub struct VisibilityRule {
    pub form: FormId,
    pub when: &'static str,
    pub equals: &'static str,
    pub shows: &'static [&'static str],
}

pub const RULES: &[VisibilityRule] = &[
    VisibilityRule {
        form: FormId::Snmpv3,
        when: "use_acl",
        equals: "true",
        shows: &["acl_hosts"],
    },
    VisibilityRule {
        form: FormId::Snmpv3,
        when: "logging_enabled",
        equals: "true",
        shows: &["logging_level"],
    },
    VisibilityRule {
        form: FormId::Ntp,
        when: "network_tier",
        equals: "CORE",
        shows: &["use_ntp_master", "ntp_master_stratum", "ntp_peer"],
    },
    VisibilityRule {
        form: FormId::Ntp,
        when: "use_ntp_master",
        equals: "true",
        shows: &["ntp_master_stratum"],
    },
    VisibilityRule {
        form: FormId::Ntp,
        when: "use_auth",
        equals: "true",
        shows: &["auth_algorithm", "key_id", "key_value"],
    },
    VisibilityRule {
        form: FormId::Ntp,
        when: "use_access_control",
        equals: "true",
        shows: &["acl_peer_hosts", "acl_serve_network", "acl_serve_wildcard"],
    },
    VisibilityRule {
        form: FormId::Aaa,
        when: "mode",
        equals: "tacacs",
        shows: &[
            "tacacs_group_name",
            "tacacs1_name",
            "tacacs1_ip",
            "tacacs1_key",
            "tacacs2_name",
            "tacacs2_ip",
            "tacacs2_key",
            "source_interface",
            "server_timeout",
        ],
    },
    VisibilityRule {
        form: FormId::SnmpMulti,
        when: "logging_enabled",
        equals: "true",
        shows: &["logging_level"],
    },
];

/// Evaluate the rule table against the current field values and return the set
/// of active field names for the form. Ungoverned fields are always active.
pub fn visible_fields(form: FormId, snapshot: &FormSnapshot) -> BTreeSet<&'static str> {
    let rules: Vec<&VisibilityRule> = RULES.iter().filter(|r| r.form == form).collect();

    schema(form)
        .iter()
        .map(|def| def.name)
        .filter(|name| {
            let governing: Vec<_> = rules.iter().filter(|r| r.shows.contains(name)).collect();
            governing.is_empty()
                || governing
                    .iter()
                    .all(|r| snapshot.get(r.when).map(String::as_str) == Some(r.equals))
        })
        .collect()
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
    fn acl_hosts_follows_use_acl() {
        let off = snap(&[("use_acl", "false")]);
        assert!(!visible_fields(FormId::Snmpv3, &off).contains("acl_hosts"));
        let on = snap(&[("use_acl", "true")]);
        assert!(visible_fields(FormId::Snmpv3, &on).contains("acl_hosts"));
    }

    #[test]
    fn ntp_master_stratum_needs_core_and_master() {
        let core_only = snap(&[("network_tier", "CORE")]);
        assert!(!visible_fields(FormId::Ntp, &core_only).contains("ntp_master_stratum"));

        let both = snap(&[("network_tier", "CORE"), ("use_ntp_master", "true")]);
        let visible = visible_fields(FormId::Ntp, &both);
        assert!(visible.contains("ntp_master_stratum"));
        assert!(visible.contains("ntp_peer"));

        let access = snap(&[("network_tier", "ACCESS"), ("use_ntp_master", "true")]);
        assert!(!visible_fields(FormId::Ntp, &access).contains("ntp_master_stratum"));
    }

    #[test]
    fn tacacs_fields_hidden_in_local_only_mode() {
        let local = snap(&[("mode", "local-only")]);
        let visible = visible_fields(FormId::Aaa, &local);
        assert!(!visible.contains("tacacs1_ip"));
        assert!(visible.contains("enable_secret"));
    }
}
