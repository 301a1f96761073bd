//! Human readable output.

use super::{render, OutputOptions};
use crate::models::NetworkRecord;
use std::net::Ipv4Addr;

/// Render `record` as `Label: value` lines.
///
/// Seven lines, plus `Comment` when a special range matched. Every line ends
/// with `\n`.
pub fn format_text(record: &NetworkRecord, opts: OutputOptions) -> String {
    let f = render(record, opts);
    let mut fields = vec![
        ("Network", &f.network),
        ("Prefix", &f.prefix),
        ("Netmask", &f.netmask),
        ("Broadcast", &f.broadcast),
        ("Hostmin", &f.hostmin),
        ("Hostmax", &f.hostmax),
        ("Hosts", &f.hosts),
    ];
    if !f.comment.is_empty() {
        fields.push(("Comment", &f.comment));
    }
    fields
        .iter()
        .map(|(label, value)| format!("{label}: {value}\n"))
        .collect()
}

pub fn format_text_interface(addr: Ipv4Addr, prefix: u8) -> String {
    format!("Address: {addr}\nPrefix: /{prefix}\n")
}

pub fn format_text_external(addr: Ipv4Addr) -> String {
    format!("External IP: {addr}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_from_cidr;
    use crate::output::SentinelStyle;

    #[test]
    fn test_format_text_ordinary() {
        let record = compute_from_cidr("192.168.1.1/24").unwrap();
        assert_eq!(
            format_text(&record, OutputOptions::default()),
            "Network: 192.168.1.0\n\
             Prefix: /24\n\
             Netmask: 255.255.255.0\n\
             Broadcast: 192.168.1.255\n\
             Hostmin: 192.168.1.1\n\
             Hostmax: 192.168.1.254\n\
             Hosts: 254\n"
        );
    }

    #[test]
    fn test_format_text_special_has_comment() {
        let record = compute_from_cidr("127.0.0.1/8").unwrap();
        let opts = OutputOptions {
            sentinel: SentinelStyle::Dash,
            links: false,
        };
        assert_eq!(
            format_text(&record, opts),
            "Network: 127.0.0.0\n\
             Prefix: /8\n\
             Netmask: 255.0.0.0\n\
             Broadcast: -*\n\
             Hostmin: -*\n\
             Hostmax: -*\n\
             Hosts: -*\n\
             Comment: RFC 3330 Loopback\n"
        );
    }

    #[test]
    fn test_format_text_is_stable() {
        let record = compute_from_cidr("10.20.30.40/31").unwrap();
        let first = format_text(&record, OutputOptions::default());
        assert_eq!(first, format_text(&record, OutputOptions::default()));
        assert_eq!(first.lines().count(), 7);
        assert!(first.contains("Hosts: 2*\n"));
    }

    #[test]
    fn test_format_text_interface() {
        assert_eq!(
            format_text_interface(Ipv4Addr::new(192, 168, 0, 10), 24),
            "Address: 192.168.0.10\nPrefix: /24\n"
        );
        assert_eq!(
            format_text_external(Ipv4Addr::new(203, 0, 113, 9)),
            "External IP: 203.0.113.9\n"
        );
    }
}
