use std::io::Read;

use crate::error::Result;
use crate::models::profile::{Profile, SecurityScoreResponse, VulnerabilityStatusResponse};
use crate::profiles::{ProfileListView, ProfileSyncManager, SaveOutcome};

use super::App;

pub async fn list(app: &App, filter: &str) -> Result<()> {
    let mut mgr = ProfileSyncManager::new(&app.client, &app.forms);
    mgr.refresh().await?;

    match mgr.filtered(filter) {
        ProfileListView::Empty => println!("No profiles found."),
        ProfileListView::NoMatches => println!("(no matches)"),
        ProfileListView::Names(names) => {
            for name in names {
                println!("{}", name);
            }
        }
    }
    Ok(())
}

pub async fn load(app: &App, name: &str) -> Result<()> {
    let mut mgr = ProfileSyncManager::new(&app.client, &app.forms);
    let profile = mgr.load(name).await?;
    report_applied(&profile);
    Ok(())
}

pub async fn save(app: &App, name: &str, description: Option<String>) -> Result<()> {
    let mut mgr = ProfileSyncManager::new(&app.client, &app.forms);
    mgr.refresh().await?;
    let (outcome, saved) = mgr.save(name, description).await?;
    match outcome {
        SaveOutcome::Created => println!("Profile '{}' created", saved.name),
        SaveOutcome::Updated => println!("Profile '{}' updated", saved.name),
    }
    Ok(())
}

pub async fn delete(app: &App, name: &str, confirmed: bool) -> Result<()> {
    let mut mgr = ProfileSyncManager::new(&app.client, &app.forms);
    mgr.delete(name, confirmed).await?;
    println!("Profile '{}' deleted", name);
    Ok(())
}

/// Apply a profile from a JSON file (or stdin when the path is "-") onto the
/// forms without touching the server.
pub fn edit(app: &App, path: &str) -> Result<()> {
    let raw = read_input(path)?;
    let mut mgr = ProfileSyncManager::new(&app.client, &app.forms);
    let profile = mgr.apply_editor_json(&raw)?;
    report_applied(&profile);
    Ok(())
}

/// Apply a profile from a JSON file and save it to the server
pub async fn push(app: &App, path: &str) -> Result<()> {
    let raw = read_input(path)?;
    let mut mgr = ProfileSyncManager::new(&app.client, &app.forms);
    mgr.refresh().await?;
    let profile = mgr.apply_editor_json(&raw)?;
    match mgr.save_raw(&profile).await? {
        SaveOutcome::Created => println!("Profile '{}' created", profile.name),
        SaveOutcome::Updated => println!("Profile '{}' updated", profile.name),
    }
    Ok(())
}

pub async fn vulnerabilities(app: &App) -> Result<()> {
    let status = app.client.profile_vulnerabilities().await?;
    print!("{}", render_vulnerabilities(&status));
    Ok(())
}

pub async fn scores(app: &App) -> Result<()> {
    let scores = app.client.profile_security_scores().await?;
    print!("{}", render_scores(&scores));
    Ok(())
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        Ok(raw)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn report_applied(profile: &Profile) {
    let mut sections = Vec::new();
    if profile.snmp.is_some() {
        sections.push("snmpv3");
    }
    if profile.ntp.is_some() {
        sections.push("ntp");
    }
    if profile.aaa.is_some() {
        sections.push("aaa");
    }
    if sections.is_empty() {
        println!("Profile '{}' loaded (no form fields to apply)", profile.name);
    } else {
        println!(
            "Profile '{}' loaded, applied to: {}",
            profile.name,
            sections.join(", ")
        );
    }
}

fn render_vulnerabilities(status: &VulnerabilityStatusResponse) -> String {
    let s = &status.summary;
    let mut out = format!(
        "Profiles checked: {}\nCritical: {}  High: {}  Medium: {}  Low: {}  Clean: {}  Unknown: {}\n",
        status.profiles_checked, s.critical, s.high, s.medium, s.low, s.clean, s.unknown
    );
    for r in &status.results {
        out.push_str(&format!(
            "  {:<24} {:<10} {} CVEs",
            r.profile_name,
            r.status,
            r.cve_count
        ));
        if let Some(max) = r.max_cvss {
            out.push_str(&format!(" (max CVSS {:.1})", max));
        }
        out.push('\n');
    }
    out
}

fn render_scores(scores: &SecurityScoreResponse) -> String {
    let mut out = format!("Profiles checked: {}\n", scores.profiles_checked);
    if let Some(avg) = scores.average_score {
        out.push_str(&format!("Average score: {:.1}\n", avg));
    }
    for r in &scores.results {
        match (r.score, r.label.as_deref()) {
            (Some(score), Some(label)) => {
                out.push_str(&format!("  {:<24} {:>5.1}  {}\n", r.profile_name, score, label))
            }
            (Some(score), None) => {
                out.push_str(&format!("  {:<24} {:>5.1}\n", r.profile_name, score))
            }
            _ => out.push_str(&format!("  {:<24} (no version data)\n", r.profile_name)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{ProfileScore, ScoreSummary, VulnerabilitySummary};

    #[test]
    fn vulnerability_rendering_includes_summary_and_rows() {
        let status = VulnerabilityStatusResponse {
            summary: VulnerabilitySummary {
                critical: 1,
                clean: 2,
                ..Default::default()
            },
            results: vec![crate::models::profile::ProfileVulnerability {
                profile_name: "lab-core".to_string(),
                platform: Some("ios-xe".to_string()),
                version: Some("17.3.1".to_string()),
                cve_count: 4,
                max_cvss: Some(9.8),
                status: "critical".to_string(),
            }],
            profiles_checked: 3,
            timestamp: String::new(),
        };
        let text = render_vulnerabilities(&status);
        assert!(text.contains("Profiles checked: 3"));
        assert!(text.contains("Critical: 1"));
        assert!(text.contains("lab-core"));
        assert!(text.contains("max CVSS 9.8"));
    }

    #[test]
    fn score_rendering_handles_missing_version_data() {
        let scores = SecurityScoreResponse {
            summary: ScoreSummary::default(),
            results: vec![ProfileScore {
                profile_name: "lab-edge".to_string(),
                platform: None,
                version: None,
                score: None,
                label: None,
                cve_breakdown: Vec::new(),
            }],
            profiles_checked: 1,
            average_score: None,
            lowest_score: None,
            highest_score: None,
            timestamp: String::new(),
        };
        let text = render_scores(&scores);
        assert!(text.contains("(no version data)"));
    }
}
