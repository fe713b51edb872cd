use crate::error::{ClientError, Result};
use crate::forms::visibility::visible_fields;
use crate::forms::{is_known_field, schema, FormId};

use super::{parse_assignment, App};

/// Apply key=value assignments to a form and persist the result. An empty
/// value removes the field. Unknown field names are rejected before anything
/// is written.
pub fn set(app: &App, form: FormId, assignments: &[String]) -> Result<()> {
    let mut snapshot = app.forms.restore(form);

    for raw in assignments {
        let (key, value) = parse_assignment(raw)?;
        if !is_known_field(form, &key) {
            return Err(ClientError::validation(format!(
                "unknown field '{}' for the {} form",
                key,
                form.name()
            )));
        }
        if value.is_empty() {
            snapshot.remove(&key);
        } else {
            snapshot.insert(key, value);
        }
    }

    app.forms.snapshot(form, &snapshot)?;
    println!("Saved {} form ({} fields set)", form.name(), snapshot.len());
    Ok(())
}

/// Print the stored fields of a form in schema order, flagging required
/// fields and fields currently gated off by a visibility toggle.
pub fn show(app: &App, form: FormId) {
    let snapshot = app.forms.restore(form);
    let active = visible_fields(form, &snapshot);

    println!("{} form:", form.name());
    for def in schema(form) {
        let marker = if def.required { "*" } else { " " };
        let value = snapshot.get(def.name).map(String::as_str).unwrap_or("(unset)");
        if active.contains(def.name) {
            println!("  {}{:<22} {}", marker, def.name, value);
        } else {
            println!("  {}{:<22} {} (inactive)", marker, def.name, value);
        }
    }
}

/// Drop a form's stored state entirely
pub fn clear(app: &App, form: FormId) {
    app.dir.remove_entry(form.storage_key());
    println!("Cleared {} form", form.name());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GeneratorClient;
    use crate::store::StateDir;

    fn app() -> (tempfile::TempDir, App) {
        let tmp = tempfile::tempdir().unwrap();
        let dir = StateDir::init(tmp.path()).unwrap();
        let client = GeneratorClient::new("http://127.0.0.1:1".to_string(), 1).unwrap();
        let app = App::new(client, dir);
        (tmp, app)
    }

    #[test]
    fn set_rejects_unknown_field_without_writing() {
        let (_tmp, app) = app();
        let err = set(
            &app,
            FormId::Cve,
            &["platform=ios".to_string(), "bogus=1".to_string()],
        )
        .unwrap_err();
        assert!(err.to_string().contains("bogus"));
        assert!(app.forms.restore(FormId::Cve).is_empty());
    }

    #[test]
    fn empty_assignment_removes_a_field() {
        let (_tmp, app) = app();
        set(&app, FormId::Cve, &["platform=ios".to_string()]).unwrap();
        set(&app, FormId::Cve, &["platform=".to_string()]).unwrap();
        assert!(app.forms.restore(FormId::Cve).is_empty());
    }

    #[test]
    fn set_merges_into_existing_state() {
        let (_tmp, app) = app();
        set(&app, FormId::Cve, &["platform=ios".to_string()]).unwrap();
        set(&app, FormId::Cve, &["version=15.2".to_string()]).unwrap();
        let snap = app.forms.restore(FormId::Cve);
        assert_eq!(snap.get("platform").unwrap(), "ios");
        assert_eq!(snap.get("version").unwrap(), "15.2");
    }

    #[test]
    fn clear_drops_stored_state() {
        let (_tmp, app) = app();
        set(&app, FormId::Cve, &["platform=ios".to_string()]).unwrap();
        clear(&app, FormId::Cve);
        assert!(app.forms.restore(FormId::Cve).is_empty());
    }
}
