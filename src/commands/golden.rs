use crate::error::Result;
use crate::forms::FormId;
use crate::golden::{compose, section_status, GoldenSection, SnmpSource};

use super::App;

/// Show per-section availability for Golden Config composition. The SNMP line
/// tracks the currently selected source slot.
pub fn status(app: &App) {
    let snapshot = app.forms.restore(FormId::Golden);
    let source = SnmpSource::from_snapshot(&snapshot);

    println!("SNMP: {}", section_status(GoldenSection::Snmp, source, &app.cache));
    println!("NTP:  {}", section_status(GoldenSection::Ntp, source, &app.cache));
    println!("AAA:  {}", section_status(GoldenSection::Aaa, source, &app.cache));
}

/// Compose the Golden Config request from the golden form and the result
/// cache, send it, and print the merged config.
pub async fn generate(app: &App) -> Result<()> {
    let snapshot = app.forms.restore(FormId::Golden);
    let req = compose(&snapshot, &app.cache)?;
    let resp = app.client.generate_golden(&req).await?;
    println!("{}", resp.config);
    Ok(())
}
