use crate::forms::{is_known_field, FormId, FormSnapshot};

use super::StateDir;

/// Durable per-form field state, one entry per form id. The browser analog is
/// localStorage-backed form persistence across reloads.
#[derive(Debug, Clone)]
pub struct FormStore {
    dir: StateDir,
}

impl FormStore {
    pub fn new(dir: StateDir) -> Self {
        Self { dir }
    }

    /// Persist the field map for a form, replacing whatever was stored before
    /// (whole-key-space overwrite). Empty values are dropped: an absent field
    /// must stay absent so restore never clobbers a default.
    pub fn snapshot(&self, form: FormId, fields: &FormSnapshot) -> crate::error::Result<()> {
        let trimmed: FormSnapshot = fields
            .iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        self.dir.write_entry(form.storage_key(), &trimmed)
    }

    /// Read a form's stored fields. Only fields that exist in the current
    /// schema are returned, so stale keys from an older data version are
    /// skipped. Missing or malformed entries restore as an empty map.
    pub fn restore(&self, form: FormId) -> FormSnapshot {
        self.dir
            .read_entry::<FormSnapshot>(form.storage_key())
            .map(|stored| {
                stored
                    .into_iter()
                    .filter(|(name, _)| is_known_field(form, name))
                    .collect()
            })
            .unwrap_or_default()
    }
}
