//! Local interface detection.
//!
//! The primary address comes from the routing decision for a UDP socket
//! aimed at a public address, falling back to the resolved hostname and then
//! to loopback; the prefix from the platform's own tools.

use super::cli;
use crate::config;
use crate::error::SystemError;
use crate::models::{parse_address, parse_prefix, prefix_from_netmask};
use regex::Regex;
use std::net::{IpAddr, Ipv4Addr, SocketAddr, ToSocketAddrs, UdpSocket};
use std::sync::OnceLock;

static IP_ADDR_SHOW_REGEX: OnceLock<Regex> = OnceLock::new();
static IFCONFIG_REGEX: OnceLock<Regex> = OnceLock::new();
static DOTTED_QUAD_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_ip_addr_show_regex() -> &'static Regex {
    IP_ADDR_SHOW_REGEX.get_or_init(|| {
        Regex::new(r"inet (\d{1,3}(?:\.\d{1,3}){3})/(\d{1,2})\b").expect("Invalid Regex")
    })
}

fn get_ifconfig_regex() -> &'static Regex {
    IFCONFIG_REGEX.get_or_init(|| {
        Regex::new(
            r"inet (\d{1,3}(?:\.\d{1,3}){3}) netmask (0x[0-9a-fA-F]{8}|\d{1,3}(?:\.\d{1,3}){3})",
        )
        .expect("Invalid Regex")
    })
}

fn get_dotted_quad_regex() -> &'static Regex {
    DOTTED_QUAD_REGEX
        .get_or_init(|| Regex::new(r"\d{1,3}(?:\.\d{1,3}){3}").expect("Invalid Regex"))
}

/// Address and prefix of the interface carrying the default route.
pub fn detect_local_interface() -> (Ipv4Addr, u8) {
    let ip = primary_address();
    let prefix = detect_prefix(ip);
    log::info!("detected local interface {ip}/{prefix}");
    (ip, prefix)
}

/// Source address the OS would use to reach the outside world.
pub fn primary_address() -> Ipv4Addr {
    primary_address_via(config::ROUTE_TARGET)
}

/// [`primary_address`] routed towards `target` (`host:port`).
///
/// Never fails: a routing error falls back to the address the hostname
/// resolves to, then to 127.0.0.1.
pub fn primary_address_via(target: &str) -> Ipv4Addr {
    match route_address(target) {
        Ok(ip) => ip,
        Err(e) => {
            log::warn!("Route lookup via {target} failed: {e}");
            let hostname = cli::run("hostname").ok();
            fallback_address(hostname.as_deref().map(str::trim))
        }
    }
}

/// Connecting a UDP socket only selects a route; no packet is sent.
fn route_address(target: &str) -> Result<Ipv4Addr, SystemError> {
    let no_interface = |reason: String| SystemError::NoInterface { reason };

    let socket = UdpSocket::bind("0.0.0.0:0").map_err(|e| no_interface(e.to_string()))?;
    socket
        .connect(target)
        .map_err(|e| no_interface(e.to_string()))?;
    match socket.local_addr().map_err(|e| no_interface(e.to_string()))?.ip() {
        IpAddr::V4(ip) if !ip.is_unspecified() => Ok(ip),
        other => Err(no_interface(format!("unusable local address {other}"))),
    }
}

/// First IPv4 address `hostname` resolves to, or loopback.
fn fallback_address(hostname: Option<&str>) -> Ipv4Addr {
    let resolved = hostname
        .filter(|name| !name.is_empty())
        .and_then(|name| (name, 0).to_socket_addrs().ok())
        .and_then(|mut addrs| {
            addrs.find_map(|addr| match addr {
                SocketAddr::V4(v4) => Some(*v4.ip()),
                SocketAddr::V6(_) => None,
            })
        });

    match resolved {
        Some(ip) => {
            log::info!("using hostname address {ip}");
            ip
        }
        None => {
            log::warn!("No usable local address, using {}", Ipv4Addr::LOCALHOST);
            Ipv4Addr::LOCALHOST
        }
    }
}

/// Prefix length configured for `ip`, or the default /24 when the platform
/// tools do not say.
pub fn detect_prefix(ip: Ipv4Addr) -> u8 {
    let found = match std::env::consts::OS {
        "windows" => cli::run("ipconfig").map(|out| parse_ipconfig(&out, ip)),
        "macos" | "freebsd" | "openbsd" | "netbsd" => {
            cli::run("ifconfig").map(|out| parse_ifconfig(&out, ip))
        }
        _ => cli::run("ip -o -f inet addr show").map(|out| parse_ip_addr_show(&out, ip)),
    };

    match found {
        Ok(Some(prefix)) => prefix,
        Ok(None) => {
            log::warn!("No prefix found for {ip}, using /{}", config::DEFAULT_PREFIX);
            config::DEFAULT_PREFIX
        }
        Err(e) => {
            log::warn!("Prefix detection failed: {e}, using /{}", config::DEFAULT_PREFIX);
            config::DEFAULT_PREFIX
        }
    }
}

/// Find `ip` in Linux `ip -o -f inet addr show` output.
pub fn parse_ip_addr_show(output: &str, ip: Ipv4Addr) -> Option<u8> {
    get_ip_addr_show_regex()
        .captures_iter(output)
        .filter(|c| parse_address(&c[1]).ok() == Some(ip))
        .find_map(|c| parse_prefix(&c[2]).ok())
}

/// Find `ip` in BSD/macOS `ifconfig` output (`inet a.b.c.d netmask 0x...`).
pub fn parse_ifconfig(output: &str, ip: Ipv4Addr) -> Option<u8> {
    get_ifconfig_regex()
        .captures_iter(output)
        .filter(|c| parse_address(&c[1]).ok() == Some(ip))
        .find_map(|c| prefix_from_netmask(&c[2]).ok())
}

/// Find `ip` in Windows `ipconfig` output; the subnet mask follows the
/// address line within a few lines.
pub fn parse_ipconfig(output: &str, ip: Ipv4Addr) -> Option<u8> {
    let lines: Vec<&str> = output.lines().collect();
    let quad = get_dotted_quad_regex();

    for (i, line) in lines.iter().enumerate() {
        let has_ip = quad
            .find_iter(line)
            .any(|m| parse_address(m.as_str()).ok() == Some(ip));
        if !has_ip {
            continue;
        }
        let prefix = lines
            .iter()
            .skip(i + 1)
            .take(4)
            .filter(|l| l.contains("Subnet Mask"))
            .filter_map(|l| quad.find(l))
            .find_map(|m| prefix_from_netmask(m.as_str()).ok());
        if prefix.is_some() {
            return prefix;
        }
    }
    None
}
