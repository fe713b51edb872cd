use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::StateDir;

/// Config-generation targets whose last result can be reused by Golden Config
/// composition. Exactly one cache slot exists per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneratorKind {
    Snmpv3,
    Snmpv3Multi,
    Ntp,
    Aaa,
}

impl GeneratorKind {
    pub fn storage_key(self) -> &'static str {
        match self {
            GeneratorKind::Snmpv3 => "last-snmpv3",
            GeneratorKind::Snmpv3Multi => "last-snmpv3-multi",
            GeneratorKind::Ntp => "last-ntp",
            GeneratorKind::Aaa => "last-aaa",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GeneratorKind::Snmpv3 => "SNMPv3",
            GeneratorKind::Snmpv3Multi => "SNMPv3 Multi",
            GeneratorKind::Ntp => "NTP",
            GeneratorKind::Aaa => "AAA",
        }
    }
}

/// Last successful generation for one generator kind. The stored payload is
/// the exact request that was sent, minus the output format selector: Golden
/// Config re-derives the format from its own form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedGeneration {
    pub payload: Value,
    pub config: String,
    pub saved_at: DateTime<Utc>,
}

/// One durable slot per generator kind, last-write-wins, no expiry.
#[derive(Debug, Clone)]
pub struct ResultCache {
    dir: StateDir,
}

impl ResultCache {
    pub fn new(dir: StateDir) -> Self {
        Self { dir }
    }

    pub fn put<T: Serialize>(
        &self,
        kind: GeneratorKind,
        request: &T,
        config: &str,
    ) -> crate::error::Result<()> {
        let mut payload = serde_json::to_value(request)?;
        if let Value::Object(map) = &mut payload {
            map.remove("output_format");
        }
        let entry = CachedGeneration {
            payload,
            config: config.to_string(),
            saved_at: Utc::now(),
        };
        self.dir.write_entry(kind.storage_key(), &entry)?;
        tracing::debug!("Cached {} generation result", kind.label());
        Ok(())
    }

    pub fn get(&self, kind: GeneratorKind) -> Option<CachedGeneration> {
        self.dir.read_entry(kind.storage_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cache() -> (tempfile::TempDir, ResultCache) {
        let tmp = tempfile::tempdir().unwrap();
        let dir = StateDir::init(tmp.path()).unwrap();
        (tmp, ResultCache::new(dir))
    }

    #[test]
    fn put_strips_output_format() {
        let (_tmp, cache) = cache();
        let request = json!({"host": "10.0.0.1", "output_format": "cli"});
        cache.put(GeneratorKind::Snmpv3, &request, "snmp-server ...").unwrap();

        let entry = cache.get(GeneratorKind::Snmpv3).unwrap();
        assert!(entry.payload.get("output_format").is_none());
        assert_eq!(entry.payload["host"], "10.0.0.1");
        assert_eq!(entry.config, "snmp-server ...");
    }

    #[test]
    fn slots_are_independent_and_last_write_wins() {
        let (_tmp, cache) = cache();
        cache.put(GeneratorKind::Ntp, &json!({"v": 1}), "one").unwrap();
        cache.put(GeneratorKind::Ntp, &json!({"v": 2}), "two").unwrap();

        assert_eq!(cache.get(GeneratorKind::Ntp).unwrap().payload["v"], 2);
        assert!(cache.get(GeneratorKind::Aaa).is_none());
    }
}
