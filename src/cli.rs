use clap::{Args, Parser, Subcommand};
use std::str::FromStr;

use crate::commands::generate::GenerateTarget;
use crate::forms::FormId;

#[derive(Parser)]
#[command(
    name = "microtool",
    version,
    about = "Terminal client for the Cisco Micro-Tool config generation API"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Inspect and edit stored form fields
    Form {
        #[command(subcommand)]
        action: FormAction,
    },
    /// Manage the multi-host SNMPv3 target list
    Host {
        #[command(subcommand)]
        action: HostAction,
    },
    /// Run a generator from its stored form and print the config
    Generate {
        #[arg(value_enum)]
        target: GenerateTarget,
    },
    /// Golden Config composition
    Golden {
        #[command(subcommand)]
        action: GoldenAction,
    },
    /// Server-stored device profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// CVE exposure analysis for a platform/version
    Cve {
        #[arg(long)]
        platform: Option<String>,
        #[arg(long)]
        version: Option<String>,
        /// Include upgrade suggestions in the report
        #[arg(long)]
        suggestions: bool,
    },
    /// Subnet calculators
    Subnet {
        #[command(subcommand)]
        action: SubnetAction,
    },
    /// Tunnel overhead / effective MTU calculator
    Mtu(MtuArgs),
    /// Check connectivity to the generation API
    Health,
}

#[derive(Subcommand)]
pub enum FormAction {
    /// Set fields as key=value pairs (empty value clears a field)
    Set {
        #[arg(value_parser = FormId::from_str)]
        form: FormId,
        #[arg(required = true)]
        assignments: Vec<String>,
    },
    /// Print the stored fields of a form
    Show {
        #[arg(value_parser = FormId::from_str)]
        form: FormId,
    },
    /// Drop a form's stored state
    Clear {
        #[arg(value_parser = FormId::from_str)]
        form: FormId,
    },
}

#[derive(Subcommand)]
pub enum HostAction {
    /// Append a host row
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        ip: String,
        /// Override the derived "{name}-user" SNMP user name
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        auth_password: Option<String>,
        #[arg(long)]
        priv_password: Option<String>,
    },
    /// Edit fields of a host row as key=value pairs
    Set {
        id: u64,
        #[arg(required = true)]
        assignments: Vec<String>,
    },
    /// Remove a host row by id
    Remove { id: u64 },
    /// List host rows with their display ordinals
    List,
}

#[derive(Subcommand)]
pub enum GoldenAction {
    /// Show per-section source availability
    Status,
    /// Compose and generate the merged config
    Generate,
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// List profile names, optionally filtered by substring
    List {
        #[arg(long, default_value = "")]
        filter: String,
    },
    /// Fetch a profile and apply it onto the forms
    Load { name: String },
    /// Save the current form state under a name
    Save {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a profile (requires --yes)
    Delete {
        name: String,
        #[arg(long)]
        yes: bool,
    },
    /// Apply a profile JSON file ("-" for stdin) onto the forms
    Edit { path: String },
    /// Apply a profile JSON file and save it to the server
    Push { path: String },
    /// CVE exposure summary across all profiles
    Vulnerabilities,
    /// Security scores across all profiles
    Scores,
}

#[derive(Subcommand)]
pub enum SubnetAction {
    /// Network, broadcast, host range and mask details for a CIDR
    Info { cidr: String },
    /// Split a network into subnets of a longer prefix
    Split { cidr: String, new_prefix: u8 },
    /// Aggregate networks into supernets
    Supernet {
        #[arg(required = true)]
        networks: Vec<String>,
    },
    /// Convert between prefix length and dotted netmask
    Convert { value: String },
}

#[derive(Args)]
pub struct MtuArgs {
    #[arg(long, default_value_t = 1500)]
    pub interface_mtu: u32,
    /// Tunnel encapsulation (e.g. none, gre, ipsec, gre-ipsec, vxlan, mpls)
    #[arg(long, default_value = "none")]
    pub tunnel_type: String,
    /// Label stack depth, used when the tunnel type is mpls
    #[arg(long, default_value_t = 3)]
    pub mpls_labels: u32,
    /// Also derive the TCP MSS clamp value
    #[arg(long)]
    pub tcp_mss: bool,
}
