//! Golden Config composition: per section, choose between the cached payload
//! of the matching generator and a literal pasted config, and report each
//! section's availability. The composer only assembles the request; it never
//! calls the API itself.

use serde_json::Value;

use crate::forms::build::{get_bool, get_opt, get_or, get_string};
use crate::forms::{validate, FormId, FormSnapshot};
use crate::models::golden::GoldenConfigRequest;
use crate::models::ntp::tier_short_label;
use crate::store::{GeneratorKind, ResultCache};

/// Which SNMP cache slot the SNMP section draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnmpSource {
    Single,
    Multi,
}

impl SnmpSource {
    pub fn from_snapshot(s: &FormSnapshot) -> Self {
        if s.get("snmp_source").map(String::as_str) == Some("multi") {
            SnmpSource::Multi
        } else {
            SnmpSource::Single
        }
    }

    pub fn kind(self) -> GeneratorKind {
        match self {
            SnmpSource::Single => GeneratorKind::Snmpv3,
            SnmpSource::Multi => GeneratorKind::Snmpv3Multi,
        }
    }

    fn label(self) -> &'static str {
        match self {
            SnmpSource::Single => "Single",
            SnmpSource::Multi => "Multi",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoldenSection {
    Snmp,
    Ntp,
    Aaa,
}

/// Availability indicator for one section, a pure function of the current
/// cache contents and (for SNMP) the currently selected source. Callers
/// re-evaluate on every selector change so the indicator is never stale.
pub fn section_status(section: GoldenSection, source: SnmpSource, cache: &ResultCache) -> String {
    match section {
        GoldenSection::Snmp => {
            if cache.get(source.kind()).is_some() {
                format!("✓ {}", source.label())
            } else {
                format!("✗ {} not saved", source.label())
            }
        }
        GoldenSection::Ntp => match cache.get(GeneratorKind::Ntp) {
            Some(entry) => {
                let tier = entry
                    .payload
                    .get("network_tier")
                    .and_then(Value::as_str)
                    .unwrap_or("ACCESS");
                format!("✓ {}", tier_short_label(tier))
            }
            None => "✗ Not saved".to_string(),
        },
        GoldenSection::Aaa => {
            if cache.get(GeneratorKind::Aaa).is_some() {
                "✓ Available".to_string()
            } else {
                "✗ Not saved".to_string()
            }
        }
    }
}

/// Build the Golden Config request from the golden form snapshot and the
/// result cache. A section marked "use saved" whose cache slot is empty
/// degrades to null (the generator omits it) instead of failing the request;
/// a section not marked "use saved" always takes the literal text, even when
/// a cache entry exists.
pub fn compose(snapshot: &FormSnapshot, cache: &ResultCache) -> crate::error::Result<GoldenConfigRequest> {
    validate(FormId::Golden, snapshot)?;

    let use_snmpv3 = get_bool(snapshot, "use_snmpv3");
    let use_ntp = get_bool(snapshot, "use_ntp");
    let use_aaa = get_bool(snapshot, "use_aaa");
    let source = SnmpSource::from_snapshot(snapshot);

    let cached = |kind: GeneratorKind| cache.get(kind).map(|entry| entry.payload);

    let (snmpv3_payload, snmpv3_multi_payload) = if use_snmpv3 {
        match source {
            SnmpSource::Single => (cached(GeneratorKind::Snmpv3), None),
            SnmpSource::Multi => (None, cached(GeneratorKind::Snmpv3Multi)),
        }
    } else {
        (None, None)
    };

    Ok(GoldenConfigRequest {
        device: get_string(snapshot, "device"),
        mode: get_string(snapshot, "mode"),
        snmpv3_config: if use_snmpv3 { None } else { get_opt(snapshot, "snmpv3_config") },
        ntp_config: if use_ntp { None } else { get_opt(snapshot, "ntp_config") },
        aaa_config: if use_aaa { None } else { get_opt(snapshot, "aaa_config") },
        snmpv3_payload,
        snmpv3_multi_payload,
        ntp_payload: if use_ntp { cached(GeneratorKind::Ntp) } else { None },
        aaa_payload: if use_aaa { cached(GeneratorKind::Aaa) } else { None },
        include_banner: get_bool(snapshot, "include_banner"),
        custom_banner: get_opt(snapshot, "custom_banner"),
        include_logging: get_bool(snapshot, "include_logging"),
        include_security: get_bool(snapshot, "include_security"),
        output_format: get_or(snapshot, "output_format", "cli"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StateDir;
    use serde_json::json;

    fn cache() -> (tempfile::TempDir, ResultCache) {
        let tmp = tempfile::tempdir().unwrap();
        let dir = StateDir::init(tmp.path()).unwrap();
        (tmp, ResultCache::new(dir))
    }

    fn golden_snapshot(pairs: &[(&str, &str)]) -> FormSnapshot {
        let mut s: FormSnapshot = [("device", "Cisco IOS XE"), ("mode", "full")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        for (k, v) in pairs {
            s.insert(k.to_string(), v.to_string());
        }
        s
    }

    #[test]
    fn saved_single_section_equals_cached_payload() {
        let (_tmp, cache) = cache();
        let request = json!({"host": "10.0.0.10", "user": "mon", "output_format": "cli"});
        cache.put(GeneratorKind::Snmpv3, &request, "config text").unwrap();

        let s = golden_snapshot(&[("use_snmpv3", "true"), ("snmp_source", "single")]);
        let req = compose(&s, &cache).unwrap();
        assert_eq!(req.snmpv3_payload, Some(json!({"host": "10.0.0.10", "user": "mon"})));
        assert!(req.snmpv3_multi_payload.is_none());
        assert!(req.snmpv3_config.is_none());
    }

    #[test]
    fn saved_section_with_empty_slot_degrades_to_null() {
        let (_tmp, cache) = cache();
        let request = json!({"host": "10.0.0.10"});
        cache.put(GeneratorKind::Snmpv3, &request, "config text").unwrap();

        let s = golden_snapshot(&[("use_snmpv3", "true"), ("snmp_source", "multi")]);
        let req = compose(&s, &cache).unwrap();
        assert!(req.snmpv3_payload.is_none());
        assert!(req.snmpv3_multi_payload.is_none());
    }

    #[test]
    fn unchecked_section_takes_literal_even_when_cached() {
        let (_tmp, cache) = cache();
        cache.put(GeneratorKind::Ntp, &json!({"primary_server": "x"}), "ntp cfg").unwrap();

        let s = golden_snapshot(&[("use_ntp", "false"), ("ntp_config", "ntp server 10.0.0.1")]);
        let req = compose(&s, &cache).unwrap();
        assert!(req.ntp_payload.is_none());
        assert_eq!(req.ntp_config.as_deref(), Some("ntp server 10.0.0.1"));
    }

    #[test]
    fn empty_literal_becomes_null() {
        let (_tmp, cache) = cache();
        let s = golden_snapshot(&[]);
        let req = compose(&s, &cache).unwrap();
        assert!(req.snmpv3_config.is_none());
        assert!(req.ntp_config.is_none());
        assert!(req.aaa_config.is_none());
    }

    #[test]
    fn snmp_status_follows_source_selector() {
        let (_tmp, cache) = cache();
        cache.put(GeneratorKind::Snmpv3, &json!({"host": "a"}), "cfg").unwrap();

        assert_eq!(section_status(GoldenSection::Snmp, SnmpSource::Single, &cache), "✓ Single");
        assert_eq!(
            section_status(GoldenSection::Snmp, SnmpSource::Multi, &cache),
            "✗ Multi not saved"
        );

        cache.put(GeneratorKind::Snmpv3Multi, &json!({"hosts": []}), "cfg").unwrap();
        assert_eq!(section_status(GoldenSection::Snmp, SnmpSource::Multi, &cache), "✓ Multi");
    }

    #[test]
    fn ntp_status_shows_abbreviated_tier() {
        let (_tmp, cache) = cache();
        assert_eq!(section_status(GoldenSection::Ntp, SnmpSource::Single, &cache), "✗ Not saved");

        cache
            .put(GeneratorKind::Ntp, &json!({"network_tier": "DISTRIBUTION"}), "cfg")
            .unwrap();
        assert_eq!(section_status(GoldenSection::Ntp, SnmpSource::Single, &cache), "✓ DIST");

        cache.put(GeneratorKind::Ntp, &json!({"network_tier": "CORE"}), "cfg").unwrap();
        assert_eq!(section_status(GoldenSection::Ntp, SnmpSource::Single, &cache), "✓ CORE");
    }

    #[test]
    fn aaa_status_is_simple_availability() {
        let (_tmp, cache) = cache();
        assert_eq!(section_status(GoldenSection::Aaa, SnmpSource::Single, &cache), "✗ Not saved");
        cache.put(GeneratorKind::Aaa, &json!({"mode": "tacacs"}), "cfg").unwrap();
        assert_eq!(section_status(GoldenSection::Aaa, SnmpSource::Single, &cache), "✓ Available");
    }
}
