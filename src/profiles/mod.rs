//! Server-held named-profile catalog, reconciled with local form state.
//! Holds the last-fetched name list explicitly (no module globals); the list
//! may be stale if another client created or deleted a profile concurrently,
//! which only affects user-facing messaging, never the write itself.

use serde_json::Value;

use crate::api::GeneratorClient;
use crate::error::{ClientError, Result};
use crate::forms::build::get_opt;
use crate::forms::{FormId, FormSnapshot};
use crate::models::profile::{AaaProfile, NtpProfile, Profile, SnmpProfile};
use crate::store::FormStore;

/// Catalog view after filtering; the sentinels disable load/delete actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileListView {
    /// Unfiltered catalog is empty
    Empty,
    /// Catalog has entries but the filter matched none
    NoMatches,
    Names(Vec<String>),
}

impl ProfileListView {
    pub fn actions_enabled(&self) -> bool {
        matches!(self, ProfileListView::Names(_))
    }
}

/// Whether a save hit an existing name (messaging only; the remote write is
/// identical either way)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

pub struct ProfileSyncManager<'a> {
    client: &'a GeneratorClient,
    forms: &'a FormStore,
    cached_names: Vec<String>,
    editing: Option<String>,
}

impl<'a> ProfileSyncManager<'a> {
    pub fn new(client: &'a GeneratorClient, forms: &'a FormStore) -> Self {
        Self {
            client,
            forms,
            cached_names: Vec::new(),
            editing: None,
        }
    }

    pub fn cached_names(&self) -> &[String] {
        &self.cached_names
    }

    /// Name of the profile currently being edited, if any
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Re-fetch the catalog from the server, replacing the local copy
    pub async fn refresh(&mut self) -> Result<usize> {
        let resp = self.client.list_profiles().await?;
        self.cached_names = resp.profiles;
        tracing::debug!("Profile catalog refreshed ({} entries)", self.cached_names.len());
        Ok(self.cached_names.len())
    }

    /// Case-insensitive substring filter over the cached catalog. Filtering
    /// never re-fetches.
    pub fn filtered(&self, filter: &str) -> ProfileListView {
        if self.cached_names.is_empty() {
            return ProfileListView::Empty;
        }
        let needle = filter.to_lowercase();
        let names: Vec<String> = self
            .cached_names
            .iter()
            .filter(|n| n.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        if names.is_empty() {
            ProfileListView::NoMatches
        } else {
            ProfileListView::Names(names)
        }
    }

    /// Update when the name is in the last-fetched catalog, create otherwise
    pub fn classify_save(&self, name: &str) -> SaveOutcome {
        if self.cached_names.iter().any(|n| n == name) {
            SaveOutcome::Updated
        } else {
            SaveOutcome::Created
        }
    }

    /// Fetch a profile and apply it onto the forms, entering edit mode
    pub async fn load(&mut self, name: &str) -> Result<Profile> {
        let profile = self.client.load_profile(name).await?;
        self.apply_to_forms(&profile)?;
        self.editing = Some(profile.name.clone());
        Ok(profile)
    }

    /// Save the current form state under `name`. The outcome distinguishes
    /// update from create for messaging; afterwards the catalog is refreshed
    /// and the name stays selected if still present.
    pub async fn save(
        &mut self,
        name: &str,
        description: Option<String>,
    ) -> Result<(SaveOutcome, Profile)> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ClientError::validation("Profile name is required."));
        }
        let outcome = self.classify_save(name);
        let profile = self.snapshot_profile(name, description);
        let saved = self.client.save_profile(&profile).await?;
        self.refresh().await?;
        self.editing = self
            .cached_names
            .iter()
            .any(|n| n == name)
            .then(|| name.to_string());
        Ok((outcome, saved))
    }

    /// Save an already-assembled profile object (editor update path)
    pub async fn save_raw(&mut self, profile: &Profile) -> Result<SaveOutcome> {
        if profile.name.trim().is_empty() {
            return Err(ClientError::MissingName);
        }
        let outcome = self.classify_save(&profile.name);
        self.client.save_profile(profile).await?;
        self.refresh().await?;
        Ok(outcome)
    }

    /// Delete by name. The caller gates the call: without the confirmation
    /// flag no remote request is made. Refreshes the catalog afterwards.
    pub async fn delete(&mut self, name: &str, confirmed: bool) -> Result<()> {
        if !confirmed {
            return Err(ClientError::DeleteNotConfirmed);
        }
        self.client.delete_profile(name).await?;
        if self.editing.as_deref() == Some(name) {
            self.editing = None;
        }
        self.refresh().await?;
        Ok(())
    }

    /// Parse raw editor text as a profile and apply it onto the forms with no
    /// remote fetch. Malformed JSON or a missing name aborts with no partial
    /// application.
    pub fn apply_editor_json(&mut self, raw: &str) -> Result<Profile> {
        let value: Value = serde_json::from_str(raw)?;
        let has_name = value
            .get("name")
            .and_then(Value::as_str)
            .is_some_and(|n| !n.trim().is_empty());
        if !has_name {
            return Err(ClientError::MissingName);
        }
        let profile: Profile = serde_json::from_value(value)?;
        self.apply_to_forms(&profile)?;
        self.editing = Some(profile.name.clone());
        Ok(profile)
    }

    /// Overwrite only the fields a profile actually carries; absent or null
    /// fields leave the form untouched. Every touched form is snapshotted.
    fn apply_to_forms(&self, profile: &Profile) -> Result<()> {
        if let Some(snmp) = &profile.snmp {
            let mut snap = self.forms.restore(FormId::Snmpv3);
            merge(&mut snap, "host", &snmp.host);
            merge(&mut snap, "user", &snmp.user);
            merge(&mut snap, "group", &snmp.group);
            merge(&mut snap, "auth_password", &snmp.auth_password);
            merge(&mut snap, "priv_password", &snmp.priv_password);
            self.forms.snapshot(FormId::Snmpv3, &snap)?;
        }
        if let Some(ntp) = &profile.ntp {
            let mut snap = self.forms.restore(FormId::Ntp);
            merge(&mut snap, "primary_server", &ntp.primary_server);
            merge(&mut snap, "secondary_server", &ntp.secondary_server);
            merge(&mut snap, "timezone", &ntp.timezone);
            self.forms.snapshot(FormId::Ntp, &snap)?;
        }
        if let Some(aaa) = &profile.aaa {
            let mut snap = self.forms.restore(FormId::Aaa);
            merge(&mut snap, "enable_secret", &aaa.enable_secret);
            merge(&mut snap, "tacacs1_name", &aaa.tacacs1_name);
            merge(&mut snap, "tacacs1_ip", &aaa.tacacs1_ip);
            merge(&mut snap, "tacacs1_key", &aaa.tacacs1_key);
            merge(&mut snap, "tacacs2_name", &aaa.tacacs2_name);
            merge(&mut snap, "tacacs2_ip", &aaa.tacacs2_ip);
            merge(&mut snap, "tacacs2_key", &aaa.tacacs2_key);
            self.forms.snapshot(FormId::Aaa, &snap)?;
        }
        Ok(())
    }

    /// The disjoint profile subset of the three generator forms
    fn snapshot_profile(&self, name: &str, description: Option<String>) -> Profile {
        let snmp = self.forms.restore(FormId::Snmpv3);
        let ntp = self.forms.restore(FormId::Ntp);
        let aaa = self.forms.restore(FormId::Aaa);

        Profile {
            name: name.to_string(),
            description: description.filter(|d| !d.trim().is_empty()),
            snmp: Some(SnmpProfile {
                host: get_opt(&snmp, "host"),
                user: get_opt(&snmp, "user"),
                group: get_opt(&snmp, "group"),
                auth_password: get_opt(&snmp, "auth_password"),
                priv_password: get_opt(&snmp, "priv_password"),
            }),
            ntp: Some(NtpProfile {
                primary_server: get_opt(&ntp, "primary_server"),
                secondary_server: get_opt(&ntp, "secondary_server"),
                timezone: get_opt(&ntp, "timezone"),
            }),
            aaa: Some(AaaProfile {
                enable_secret: get_opt(&aaa, "enable_secret"),
                tacacs1_name: get_opt(&aaa, "tacacs1_name"),
                tacacs1_ip: get_opt(&aaa, "tacacs1_ip"),
                tacacs1_key: get_opt(&aaa, "tacacs1_key"),
                tacacs2_name: get_opt(&aaa, "tacacs2_name"),
                tacacs2_ip: get_opt(&aaa, "tacacs2_ip"),
                tacacs2_key: get_opt(&aaa, "tacacs2_key"),
            }),
        }
    }

    #[cfg(test)]
    fn with_catalog(mut self, names: &[&str]) -> Self {
        self.cached_names = names.iter().map(|n| n.to_string()).collect();
        self
    }
}

fn merge(snapshot: &mut FormSnapshot, field: &str, value: &Option<String>) {
    if let Some(v) = value {
        if !v.trim().is_empty() {
            snapshot.insert(field.to_string(), v.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StateDir;

    struct Fixture {
        _tmp: tempfile::TempDir,
        client: GeneratorClient,
        forms: FormStore,
    }

    fn fixture() -> Fixture {
        let tmp = tempfile::tempdir().unwrap();
        let dir = StateDir::init(tmp.path()).unwrap();
        Fixture {
            _tmp: tmp,
            // Unroutable address: tests below never reach the network
            client: GeneratorClient::new("http://127.0.0.1:1".to_string(), 1).unwrap(),
            forms: FormStore::new(dir),
        }
    }

    #[test]
    fn filter_is_case_insensitive_and_never_refetches() {
        let fx = fixture();
        let mgr = ProfileSyncManager::new(&fx.client, &fx.forms)
            .with_catalog(&["lab-router", "branch-router", "dc-router"]);

        assert_eq!(
            mgr.filtered("LAB"),
            ProfileListView::Names(vec!["lab-router".to_string()])
        );
        assert_eq!(mgr.filtered("zzz"), ProfileListView::NoMatches);
        assert!(!mgr.filtered("zzz").actions_enabled());
    }

    #[test]
    fn empty_catalog_is_its_own_sentinel() {
        let fx = fixture();
        let mgr = ProfileSyncManager::new(&fx.client, &fx.forms);
        assert_eq!(mgr.filtered(""), ProfileListView::Empty);
        assert!(!mgr.filtered("").actions_enabled());
    }

    #[test]
    fn save_classification_uses_last_fetched_catalog() {
        let fx = fixture();
        let mgr =
            ProfileSyncManager::new(&fx.client, &fx.forms).with_catalog(&["lab1", "lab2"]);
        assert_eq!(mgr.classify_save("lab1"), SaveOutcome::Updated);
        assert_eq!(mgr.classify_save("lab3"), SaveOutcome::Created);
    }

    #[test]
    fn delete_without_confirmation_issues_no_remote_call() {
        let fx = fixture();
        let mut mgr = ProfileSyncManager::new(&fx.client, &fx.forms);
        let err = tokio_test::block_on(mgr.delete("lab1", false)).unwrap_err();
        assert!(matches!(err, ClientError::DeleteNotConfirmed));
    }

    #[test]
    fn editor_json_malformed_or_nameless_aborts_cleanly() {
        let fx = fixture();
        let mut mgr = ProfileSyncManager::new(&fx.client, &fx.forms);

        let err = mgr.apply_editor_json("{not json").unwrap_err();
        assert!(matches!(err, ClientError::InvalidJson(_)));

        let err = mgr.apply_editor_json(r#"{"description": "no name"}"#).unwrap_err();
        assert!(matches!(err, ClientError::MissingName));

        // Nothing was applied
        assert!(fx.forms.restore(FormId::Snmpv3).is_empty());
        assert!(mgr.editing().is_none());
    }

    #[test]
    fn editor_json_applies_only_present_fields() {
        let fx = fixture();

        let mut pre = FormSnapshot::new();
        pre.insert("host".to_string(), "10.9.9.9".to_string());
        pre.insert("contact".to_string(), "noc@example.com".to_string());
        fx.forms.snapshot(FormId::Snmpv3, &pre).unwrap();

        let mut mgr = ProfileSyncManager::new(&fx.client, &fx.forms);
        let profile = mgr
            .apply_editor_json(
                r#"{"name": "lab1", "snmp": {"user": "lab-monitor"}, "ntp": {"timezone": "UTC"}}"#,
            )
            .unwrap();
        assert_eq!(profile.name, "lab1");
        assert_eq!(mgr.editing(), Some("lab1"));

        let snmp = fx.forms.restore(FormId::Snmpv3);
        assert_eq!(snmp.get("user").unwrap(), "lab-monitor");
        assert_eq!(snmp.get("host").unwrap(), "10.9.9.9");
        assert_eq!(snmp.get("contact").unwrap(), "noc@example.com");

        let ntp = fx.forms.restore(FormId::Ntp);
        assert_eq!(ntp.get("timezone").unwrap(), "UTC");
    }

    #[test]
    fn snapshot_profile_collects_the_disjoint_subset() {
        let fx = fixture();

        let mut snmp = FormSnapshot::new();
        snmp.insert("host".to_string(), "10.0.0.10".to_string());
        snmp.insert("device".to_string(), "Cisco IOS XE".to_string());
        fx.forms.snapshot(FormId::Snmpv3, &snmp).unwrap();

        let mgr = ProfileSyncManager::new(&fx.client, &fx.forms);
        let profile = mgr.snapshot_profile("lab1", Some("  ".to_string()));
        assert_eq!(profile.name, "lab1");
        assert!(profile.description.is_none());
        let snmp = profile.snmp.unwrap();
        assert_eq!(snmp.host.as_deref(), Some("10.0.0.10"));
        assert!(snmp.user.is_none());
    }
}
