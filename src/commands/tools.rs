use crate::error::Result;
use crate::models::tools::{MtuRequest, MtuResponse, SubnetInfoResponse, SupernetResponse};

use super::App;

pub async fn subnet_info(app: &App, cidr: &str) -> Result<()> {
    let resp = app.client.subnet_info(cidr).await?;
    print!("{}", render_subnet_info(&resp));
    Ok(())
}

pub async fn subnet_split(app: &App, cidr: &str, new_prefix: u8) -> Result<()> {
    let resp = app.client.subnet_split(cidr, new_prefix).await?;
    println!(
        "{} subnets of /{} ({} hosts each)",
        resp.total_subnets, resp.new_prefix, resp.hosts_per_subnet
    );
    for slice in &resp.subnets {
        println!(
            "  {:>4}. {:<20} {} - {}",
            slice.index, slice.cidr, slice.first_host, slice.last_host
        );
    }
    if resp.truncated {
        println!("  ... (listing truncated)");
    }
    Ok(())
}

pub async fn supernet(app: &App, networks: Vec<String>) -> Result<()> {
    let resp = app.client.subnet_supernet(networks).await?;
    print!("{}", render_supernet(&resp));
    Ok(())
}

/// Convert between prefix length and dotted netmask. The server normalizes
/// the input to a prefix; the dotted mask and wildcard are derived from it.
pub async fn convert_netmask(app: &App, value: &str) -> Result<()> {
    let resp = app.client.convert_netmask(value).await?;
    let (netmask, wildcard) = masks_for_prefix(resp.prefix);
    println!("CIDR:     /{}", resp.prefix);
    println!("Netmask:  {}", netmask);
    println!("Wildcard: {}", wildcard);
    Ok(())
}

pub async fn mtu(app: &App, req: MtuRequest) -> Result<()> {
    let resp = app.client.mtu_calculate(&req).await?;
    print!("{}", render_mtu(&resp));
    Ok(())
}

pub async fn health(app: &App) {
    if app.client.health().await {
        println!("API reachable");
    } else {
        println!("API unreachable");
    }
}

fn masks_for_prefix(prefix: u8) -> (String, String) {
    let mask: u32 = if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - prefix.min(32) as u32)
    };
    (dotted(mask), dotted(!mask))
}

fn dotted(value: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        value >> 24,
        (value >> 16) & 0xff,
        (value >> 8) & 0xff,
        value & 0xff
    )
}

fn render_subnet_info(resp: &SubnetInfoResponse) -> String {
    let info = &resp.subnet_info;
    format!(
        "Network:      {}\n\
         Broadcast:    {}\n\
         CIDR:         {}\n\
         Netmask:      {}\n\
         Wildcard:     {}\n\
         Host range:   {} - {}\n\
         Addresses:    {} total, {} usable\n\
         Class:        {}{}\n\
         Mask binary:  {}\n",
        info.network,
        info.broadcast,
        info.cidr,
        info.netmask,
        info.wildcard,
        info.first_host,
        info.last_host,
        info.total_addresses,
        info.usable_hosts,
        info.network_class,
        if info.is_private { " (private)" } else { " (public)" },
        info.netmask_binary,
    )
}

fn render_supernet(resp: &SupernetResponse) -> String {
    let mut out = format!(
        "{} networks aggregate to {}\n",
        resp.input_count, resp.result_count
    );
    for network in &resp.result_networks {
        out.push_str(&format!(
            "  {:<20} {} usable hosts\n",
            network.cidr, network.usable_hosts
        ));
    }
    if !resp.aggregation_possible {
        out.push_str("No aggregation possible (networks are not contiguous)\n");
    }
    out
}

fn render_mtu(resp: &MtuResponse) -> String {
    let mut out = format!(
        "Interface MTU: {}\nTunnel:        {}\nOverhead:      {} bytes",
        resp.interface_mtu, resp.tunnel_type, resp.overhead_bytes
    );
    if !resp.overhead_breakdown.is_empty() {
        out.push_str(&format!(" ({})", resp.overhead_breakdown));
    }
    out.push_str(&format!("\nEffective MTU: {}\n", resp.effective_mtu));
    if let Some(mss) = resp.tcp_mss {
        out.push_str(&format!("TCP MSS:       {}\n", mss));
    }
    for warning in &resp.warnings {
        out.push_str(&format!("Warning: {}\n", warning));
    }
    for recommendation in &resp.recommendations {
        out.push_str(&format!("Hint: {}\n", recommendation));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_to_masks() {
        assert_eq!(
            masks_for_prefix(24),
            ("255.255.255.0".to_string(), "0.0.0.255".to_string())
        );
        assert_eq!(
            masks_for_prefix(30),
            ("255.255.255.252".to_string(), "0.0.0.3".to_string())
        );
        assert_eq!(
            masks_for_prefix(0),
            ("0.0.0.0".to_string(), "255.255.255.255".to_string())
        );
        assert_eq!(
            masks_for_prefix(32),
            ("255.255.255.255".to_string(), "0.0.0.0".to_string())
        );
    }

    #[test]
    fn mtu_rendering_includes_warnings() {
        let resp = MtuResponse {
            interface_mtu: 1500,
            tunnel_type: "gre".to_string(),
            overhead_bytes: 24,
            overhead_breakdown: "GRE 4 + IP 20".to_string(),
            effective_mtu: 1476,
            tcp_mss: Some(1436),
            warnings: vec!["effective MTU below 1500".to_string()],
            recommendations: Vec::new(),
        };
        let text = render_mtu(&resp);
        assert!(text.contains("Effective MTU: 1476"));
        assert!(text.contains("TCP MSS:       1436"));
        assert!(text.contains("Warning: effective MTU below 1500"));
    }
}
