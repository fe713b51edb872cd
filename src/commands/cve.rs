use crate::error::Result;
use crate::forms::{build, FormId};
use crate::models::cve::CveReport;

use super::App;

/// Run CVE analysis from the stored cve form. Explicit arguments override and
/// persist into the form, so the next run without arguments repeats the last
/// query.
pub async fn analyze(
    app: &App,
    platform: Option<String>,
    version: Option<String>,
    suggestions: bool,
) -> Result<()> {
    let mut snapshot = app.forms.restore(FormId::Cve);
    if let Some(platform) = platform {
        snapshot.insert("platform".to_string(), platform);
    }
    if let Some(version) = version {
        snapshot.insert("version".to_string(), version);
    }
    if suggestions {
        snapshot.insert("include_suggestions".to_string(), "true".to_string());
    }

    let req = build::build_cve(&snapshot)?;
    app.forms.snapshot(FormId::Cve, &snapshot)?;

    let report = app.client.analyze_cve(&req).await?;
    print!("{}", render_report(&report));
    Ok(())
}

fn render_report(report: &CveReport) -> String {
    let mut out = format!("CVE analysis for {} {}\n", report.platform, report.version);

    if report.matched.is_empty() {
        out.push_str("No known CVEs matched this version.\n");
    } else {
        let counts: Vec<String> = report
            .summary
            .iter()
            .map(|(severity, count)| format!("{}: {}", severity, count))
            .collect();
        out.push_str(&format!(
            "{} matched ({})\n\n",
            report.matched.len(),
            counts.join(", ")
        ));

        for entry in &report.matched {
            out.push_str(&format!("{}", entry.cve_id));
            if let Some(severity) = &entry.severity {
                out.push_str(&format!(" [{}]", severity.to_uppercase()));
            }
            if let Some(score) = entry.cvss_score {
                out.push_str(&format!(" (CVSS {:.1})", score));
            }
            out.push('\n');
            if !entry.title.is_empty() {
                out.push_str(&format!("  {}\n", entry.title));
            }
            if let Some(fixed) = &entry.fixed_in {
                out.push_str(&format!("  Fixed in: {}\n", fixed));
            }
            if let Some(workaround) = &entry.workaround {
                out.push_str(&format!("  Workaround: {}\n", workaround));
            }
            if let Some(url) = &entry.advisory_url {
                out.push_str(&format!("  Advisory: {}\n", url));
            }
            out.push('\n');
        }
    }

    if let Some(upgrade) = &report.recommended_upgrade {
        out.push_str(&format!("Recommended upgrade: {}\n", upgrade));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cve::CveEntry;
    use std::collections::BTreeMap;

    fn entry(id: &str) -> CveEntry {
        CveEntry {
            cve_id: id.to_string(),
            severity: Some("high".to_string()),
            title: "Crafted SNMP packet causes reload".to_string(),
            source: None,
            cvss_score: Some(8.6),
            cvss_vector: None,
            cwe: None,
            tags: Vec::new(),
            description: String::new(),
            fixed_in: Some("17.3.5".to_string()),
            workaround: None,
            advisory_url: None,
            references: Vec::new(),
        }
    }

    #[test]
    fn report_lists_matches_with_severity_and_fix() {
        let mut summary = BTreeMap::new();
        summary.insert("high".to_string(), 1);
        let report = CveReport {
            platform: "ios-xe".to_string(),
            version: "17.3.1".to_string(),
            timestamp: String::new(),
            matched: vec![entry("CVE-2023-20198")],
            summary,
            recommended_upgrade: Some("17.3.5".to_string()),
        };
        let text = render_report(&report);
        assert!(text.contains("CVE analysis for ios-xe 17.3.1"));
        assert!(text.contains("CVE-2023-20198 [HIGH] (CVSS 8.6)"));
        assert!(text.contains("Fixed in: 17.3.5"));
        assert!(text.contains("Recommended upgrade: 17.3.5"));
    }

    #[test]
    fn clean_version_reports_no_matches() {
        let report = CveReport {
            platform: "ios".to_string(),
            version: "15.9".to_string(),
            timestamp: String::new(),
            matched: Vec::new(),
            summary: BTreeMap::new(),
            recommended_upgrade: None,
        };
        assert!(render_report(&report).contains("No known CVEs matched"));
    }
}
