use serde::{Deserialize, Serialize};

use crate::models::snmp::SnmpHost;
use crate::store::StateDir;

/// Storage entry holding the full serialized multi-host list
pub const STORAGE_KEY: &str = "snmp-multi-hosts";

/// One row of the multi-host SNMP list. `id` is a stable identity assigned at
/// creation and never reused within a session; the displayed ordinal
/// ("Host #1", "Host #2", ...) is derived from position and renumbers on
/// removal, the id does not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostRecord {
    pub id: u64,
    #[serde(flatten)]
    pub fields: SnmpHost,
}

/// Ordered, appendable/removable collection of SNMP target hosts. The id
/// counter is a property of the list itself so independent lists never
/// collide.
#[derive(Debug, Default)]
pub struct HostList {
    records: Vec<HostRecord>,
    next_id: u64,
}

impl HostList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from durable state, seeding one empty row when nothing usable
    /// is stored so the list is never left with zero rows.
    pub fn load(dir: &StateDir) -> Self {
        let mut list = Self::new();
        list.restore_from(dir.read_entry(STORAGE_KEY).unwrap_or_default());
        list
    }

    pub fn save(&self, dir: &StateDir) -> crate::error::Result<()> {
        dir.write_entry(STORAGE_KEY, &self.records)
    }

    /// Append a record (defaulted when no initial value is given) and return
    /// its id. Ids are monotonic and never reused.
    pub fn add(&mut self, initial: Option<SnmpHost>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(HostRecord {
            id,
            fields: initial.unwrap_or_default(),
        });
        id
    }

    /// Remove by id. Surviving records keep their ids and field values; only
    /// their displayed ordinals shift.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut SnmpHost> {
        self.records.iter_mut().find(|r| r.id == id).map(|r| &mut r.fields)
    }

    pub fn records(&self) -> &[HostRecord] {
        &self.records
    }

    /// Display ordinals in current order: (id, "Host #n")
    pub fn labels(&self) -> Vec<(u64, String)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id, format!("Host #{}", i + 1)))
            .collect()
    }

    /// Current wire records in display order. Incomplete rows (missing name
    /// or IP) are silently dropped, not rejected; an empty user name becomes
    /// None so the generator derives "{name}-user".
    pub fn collect(&self) -> Vec<SnmpHost> {
        self.records
            .iter()
            .filter(|r| !r.fields.name.is_empty() && !r.fields.ip_address.is_empty())
            .map(|r| {
                let mut host = r.fields.clone();
                host.user_name = host.user_name.filter(|u| !u.is_empty());
                host
            })
            .collect()
    }

    /// Clear and rebuild from persisted records. An empty list seeds exactly
    /// one default row; the id counter resumes past the highest restored id.
    pub fn restore_from(&mut self, records: Vec<HostRecord>) {
        self.records = records;
        self.next_id = self
            .records
            .iter()
            .map(|r| r.id + 1)
            .max()
            .unwrap_or(0);
        if self.records.is_empty() {
            self.add(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(name: &str, ip: &str) -> SnmpHost {
        SnmpHost {
            name: name.to_string(),
            ip_address: ip.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn add_then_remove_renumbers_labels_but_not_ids() {
        let mut list = HostList::new();
        let a = list.add(Some(host("PRIME", "10.0.0.1")));
        let b = list.add(Some(host("WUG", "10.0.0.2")));
        assert_eq!((a, b), (0, 1));

        assert!(list.remove(a));
        let collected = list.collect();
        assert_eq!(collected.len(), 1);
        assert_eq!(collected[0].name, "WUG");
        assert_eq!(list.labels(), vec![(1, "Host #1".to_string())]);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut list = HostList::new();
        let a = list.add(None);
        list.remove(a);
        let b = list.add(None);
        assert_eq!(b, 1);
    }

    #[test]
    fn collect_drops_incomplete_records() {
        let mut list = HostList::new();
        list.add(Some(host("PRIME", "10.0.0.1")));
        list.add(Some(host("", "10.0.0.2")));
        list.add(Some(host("SPLUNK", "")));
        let collected = list.collect();
        assert_eq!(collected.len(), 1);
        assert_eq!(collected[0].name, "PRIME");
    }

    #[test]
    fn collect_normalizes_empty_user_name() {
        let mut list = HostList::new();
        let id = list.add(Some(host("PRIME", "10.0.0.1")));
        list.get_mut(id).unwrap().user_name = Some(String::new());
        assert!(list.collect()[0].user_name.is_none());
    }

    #[test]
    fn restore_from_empty_seeds_one_row() {
        let mut list = HostList::new();
        list.restore_from(Vec::new());
        assert_eq!(list.records().len(), 1);
        assert!(list.collect().is_empty());
    }

    #[test]
    fn restore_resumes_id_counter_past_max() {
        let mut list = HostList::new();
        list.restore_from(vec![
            HostRecord { id: 3, fields: host("PRIME", "10.0.0.1") },
            HostRecord { id: 7, fields: host("WUG", "10.0.0.2") },
        ]);
        assert_eq!(list.add(None), 8);
    }

    #[test]
    fn survivors_keep_field_values_across_add_remove_sequences() {
        let mut list = HostList::new();
        let a = list.add(Some(host("PRIME", "10.0.0.1")));
        let b = list.add(Some(host("WUG", "10.0.0.2")));
        let c = list.add(Some(host("SPLUNK", "10.0.0.3")));
        list.remove(b);
        list.add(Some(host("NAGIOS", "10.0.0.4")));
        list.remove(a);

        let names: Vec<_> = list.collect().into_iter().map(|h| h.name).collect();
        assert_eq!(names, vec!["SPLUNK", "NAGIOS"]);
        assert_eq!(list.records()[0].id, c);
    }
}
