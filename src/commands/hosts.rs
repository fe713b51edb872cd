use crate::error::{ClientError, Result};
use crate::hosts::HostList;
use crate::models::snmp::SnmpHost;

use super::{parse_assignment, App};

/// Append a host row and persist the list
pub fn add(app: &App, host: SnmpHost) -> Result<()> {
    let mut list = HostList::load(&app.dir);
    let id = list.add(Some(host));
    list.save(&app.dir)?;
    println!("Added host (id {})", id);
    Ok(())
}

/// Edit fields of an existing host row by id
pub fn set(app: &App, id: u64, assignments: &[String]) -> Result<()> {
    let mut list = HostList::load(&app.dir);
    let host = list
        .get_mut(id)
        .ok_or_else(|| ClientError::validation(format!("no host with id {}", id)))?;

    for raw in assignments {
        let (key, value) = parse_assignment(raw)?;
        apply_field(host, &key, &value)?;
    }

    list.save(&app.dir)?;
    println!("Updated host {}", id);
    Ok(())
}

fn apply_field(host: &mut SnmpHost, key: &str, value: &str) -> Result<()> {
    match key {
        "name" => host.name = value.to_string(),
        "ip_address" => host.ip_address = value.to_string(),
        "user_name" => {
            host.user_name = if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        }
        "access_mode" => host.access_mode = value.parse().map_err(ClientError::Validation)?,
        "auth_algorithm" => {
            host.auth_algorithm = value.parse().map_err(ClientError::Validation)?
        }
        "priv_algorithm" => {
            host.priv_algorithm = value.parse().map_err(ClientError::Validation)?
        }
        "auth_password" => host.auth_password = value.to_string(),
        "priv_password" => host.priv_password = value.to_string(),
        other => {
            return Err(ClientError::validation(format!(
                "unknown host field '{}'",
                other
            )))
        }
    }
    Ok(())
}

/// Remove a host row by id. Remaining rows keep their ids; only the displayed
/// ordinals shift.
pub fn remove(app: &App, id: u64) -> Result<()> {
    let mut list = HostList::load(&app.dir);
    if !list.remove(id) {
        return Err(ClientError::validation(format!("no host with id {}", id)));
    }
    list.save(&app.dir)?;
    println!("Removed host {}", id);
    Ok(())
}

/// Print the current rows with their display ordinals
pub fn list(app: &App) {
    let list = HostList::load(&app.dir);
    for ((id, label), record) in list.labels().into_iter().zip(list.records()) {
        let fields = &record.fields;
        let complete = !fields.name.is_empty() && !fields.ip_address.is_empty();
        println!(
            "{} (id {}): {} {} {}",
            label,
            id,
            if fields.name.is_empty() { "-" } else { &fields.name },
            if fields.ip_address.is_empty() { "-" } else { &fields.ip_address },
            if complete { "" } else { "(incomplete, will be skipped)" },
        );
    }
}
