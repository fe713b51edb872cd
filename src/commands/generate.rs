use clap::ValueEnum;

use crate::error::Result;
use crate::forms::{build, FormId};
use crate::hosts::HostList;
use crate::store::GeneratorKind;

use super::App;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GenerateTarget {
    Snmpv3,
    SnmpMulti,
    Ntp,
    Aaa,
    Iperf,
}

/// Run one generator from its stored form: build and validate the request,
/// call the API, print the config. The four Golden Config sources also save
/// their request payload and config into the result cache on success.
pub async fn run(app: &App, target: GenerateTarget) -> Result<()> {
    let config = match target {
        GenerateTarget::Snmpv3 => {
            let req = build::build_snmpv3(&app.forms.restore(FormId::Snmpv3))?;
            let resp = app.client.generate_snmpv3(&req).await?;
            app.cache.put(GeneratorKind::Snmpv3, &req, &resp.config)?;
            resp.config
        }
        GenerateTarget::SnmpMulti => {
            let hosts = HostList::load(&app.dir).collect();
            let req = build::build_snmp_multi(&app.forms.restore(FormId::SnmpMulti), hosts)?;
            let resp = app.client.generate_snmpv3_multi(&req).await?;
            app.cache.put(GeneratorKind::Snmpv3Multi, &req, &resp.config)?;
            resp.config
        }
        GenerateTarget::Ntp => {
            let req = build::build_ntp(&app.forms.restore(FormId::Ntp))?;
            let resp = app.client.generate_ntp(&req).await?;
            app.cache.put(GeneratorKind::Ntp, &req, &resp.config)?;
            resp.config
        }
        GenerateTarget::Aaa => {
            let req = build::build_aaa(&app.forms.restore(FormId::Aaa))?;
            let resp = app.client.generate_aaa(&req).await?;
            app.cache.put(GeneratorKind::Aaa, &req, &resp.config)?;
            resp.config
        }
        GenerateTarget::Iperf => {
            let req = build::build_iperf(&app.forms.restore(FormId::Iperf))?;
            app.client.generate_iperf(&req).await?.config
        }
    };

    println!("{}", config);
    Ok(())
}
