mod api;
mod cli;
mod commands;
mod config;
mod error;
mod forms;
mod golden;
mod hosts;
mod models;
mod profiles;
mod store;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::GeneratorClient;
use cli::{Cli, Command, FormAction, GoldenAction, HostAction, ProfileAction, SubnetAction};
use commands::App;
use config::Config;
use models::snmp::SnmpHost;
use models::tools::MtuRequest;
use store::StateDir;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "microtool_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let cfg = Config::load();

    let dir = StateDir::init(&cfg.state_dir)?;
    let client = GeneratorClient::new(cfg.api_base_url.clone(), cfg.http_timeout_secs)?;
    let app = App::new(client, dir);

    match cli.command {
        Command::Form { action } => match action {
            FormAction::Set { form, assignments } => commands::form::set(&app, form, &assignments)?,
            FormAction::Show { form } => commands::form::show(&app, form),
            FormAction::Clear { form } => commands::form::clear(&app, form),
        },
        Command::Host { action } => match action {
            HostAction::Add {
                name,
                ip,
                user,
                auth_password,
                priv_password,
            } => {
                let host = SnmpHost {
                    name,
                    ip_address: ip,
                    user_name: user,
                    auth_password: auth_password.unwrap_or_default(),
                    priv_password: priv_password.unwrap_or_default(),
                    ..Default::default()
                };
                commands::hosts::add(&app, host)?;
            }
            HostAction::Set { id, assignments } => commands::hosts::set(&app, id, &assignments)?,
            HostAction::Remove { id } => commands::hosts::remove(&app, id)?,
            HostAction::List => commands::hosts::list(&app),
        },
        Command::Generate { target } => commands::generate::run(&app, target).await?,
        Command::Golden { action } => match action {
            GoldenAction::Status => commands::golden::status(&app),
            GoldenAction::Generate => commands::golden::generate(&app).await?,
        },
        Command::Profile { action } => match action {
            ProfileAction::List { filter } => commands::profile::list(&app, &filter).await?,
            ProfileAction::Load { name } => commands::profile::load(&app, &name).await?,
            ProfileAction::Save { name, description } => {
                commands::profile::save(&app, &name, description).await?
            }
            ProfileAction::Delete { name, yes } => {
                commands::profile::delete(&app, &name, yes).await?
            }
            ProfileAction::Edit { path } => commands::profile::edit(&app, &path)?,
            ProfileAction::Push { path } => commands::profile::push(&app, &path).await?,
            ProfileAction::Vulnerabilities => commands::profile::vulnerabilities(&app).await?,
            ProfileAction::Scores => commands::profile::scores(&app).await?,
        },
        Command::Cve {
            platform,
            version,
            suggestions,
        } => commands::cve::analyze(&app, platform, version, suggestions).await?,
        Command::Subnet { action } => match action {
            SubnetAction::Info { cidr } => commands::tools::subnet_info(&app, &cidr).await?,
            SubnetAction::Split { cidr, new_prefix } => {
                commands::tools::subnet_split(&app, &cidr, new_prefix).await?
            }
            SubnetAction::Supernet { networks } => {
                commands::tools::supernet(&app, networks).await?
            }
            SubnetAction::Convert { value } => {
                commands::tools::convert_netmask(&app, &value).await?
            }
        },
        Command::Mtu(args) => {
            let req = MtuRequest {
                interface_mtu: args.interface_mtu,
                tunnel_type: args.tunnel_type,
                mpls_labels: args.mpls_labels,
                include_tcp_mss: args.tcp_mss,
            };
            commands::tools::mtu(&app, req).await?;
        }
        Command::Health => commands::tools::health(&app).await,
    }

    Ok(())
}
