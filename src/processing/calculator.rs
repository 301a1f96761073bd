//! Subnet arithmetic.
//!
//! Ordinary-range arithmetic only; special ranges are applied afterwards by
//! [`super::special::classify`].

use crate::models::{AddrField, CidrInput, HostCount, NetworkRecord, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Compute network, broadcast, host range and host count for `input`.
///
/// Total over every valid [`CidrInput`].
pub fn calculate(input: CidrInput) -> NetworkRecord {
    let network = u32::from(input.network());
    let broadcast = u32::from(input.broadcast());

    let (hostmin, hostmax, hosts) = match input.prefix {
        // RFC 3021 point-to-point, no network/broadcast reservation
        31 => (network, broadcast, HostCount::TwoUsable),
        32 => (network, network, HostCount::OneUsable),
        len => (
            network + 1,
            broadcast - 1,
            HostCount::Count(num_hosts(len)),
        ),
    };

    log::debug!(
        "calculate({input}) network={} broadcast={}",
        Ipv4Addr::from(network),
        Ipv4Addr::from(broadcast)
    );

    NetworkRecord {
        network: Ipv4Addr::from(network),
        prefix: input.prefix,
        netmask: input.netmask(),
        broadcast: AddrField::Addr(Ipv4Addr::from(broadcast)),
        hostmin: AddrField::Addr(Ipv4Addr::from(hostmin)),
        hostmax: AddrField::Addr(Ipv4Addr::from(hostmax)),
        hosts,
        comment: String::new(),
        rfc_anchor: None,
    }
}

/// Usable hosts for a prefix up to /30: every address minus network and broadcast.
pub fn num_hosts(len: u8) -> u64 {
    debug_assert!(len <= MAX_LENGTH - 2);
    (1u64 << (MAX_LENGTH - len)) - 2
}
