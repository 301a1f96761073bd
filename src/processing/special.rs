//! Special-use IPv4 ranges.
//!
//! The fixed table of RFC reserved blocks and the classifier that applies
//! them to a computed [`NetworkRecord`].

use crate::models::{AddrField, CidrInput, HostCount, NetworkRecord};
use std::cmp::Reverse;
use std::net::Ipv4Addr;

/// One reserved block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialRangeRule {
    pub block: CidrInput,
    pub label: &'static str,
    pub rfc: &'static str,
    /// Fragment of the RFC notes page describing this block.
    pub anchor: &'static str,
}

impl SpecialRangeRule {
    /// Check if `addr` falls inside this block.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.block.contains(addr)
    }

    /// `"<RFC> <label>"`, e.g. `RFC 3330 Loopback`.
    pub fn comment(&self) -> String {
        format!("{} {}", self.rfc, self.label)
    }
}

/// Reserved blocks, in tie-break order.
///
/// 255.255.255.255/32 sits inside 240.0.0.0/4; the longer prefix wins.
pub const SPECIAL_RANGES: &[SpecialRangeRule] = &[
    SpecialRangeRule {
        block: CidrInput {
            addr: Ipv4Addr::new(0, 0, 0, 0),
            prefix: 8,
        },
        label: "Unspecified",
        rfc: "RFC 1122",
        anchor: "rfc-1122---unspecified-addresses",
    },
    SpecialRangeRule {
        block: CidrInput {
            addr: Ipv4Addr::new(127, 0, 0, 0),
            prefix: 8,
        },
        label: "Loopback",
        rfc: "RFC 3330",
        anchor: "rfc-3330---loopback-addresses",
    },
    SpecialRangeRule {
        block: CidrInput {
            addr: Ipv4Addr::new(169, 254, 0, 0),
            prefix: 16,
        },
        label: "Link-local",
        rfc: "RFC 3927",
        anchor: "rfc-3927---link-local-addresses",
    },
    SpecialRangeRule {
        block: CidrInput {
            addr: Ipv4Addr::new(224, 0, 0, 0),
            prefix: 4,
        },
        label: "Multicast",
        rfc: "RFC 5771",
        anchor: "rfc-5771---multicast-addresses",
    },
    SpecialRangeRule {
        block: CidrInput {
            addr: Ipv4Addr::new(240, 0, 0, 0),
            prefix: 4,
        },
        label: "Reserved",
        rfc: "RFC 3330",
        anchor: "rfc-3330---reserved-addresses",
    },
    SpecialRangeRule {
        block: CidrInput {
            addr: Ipv4Addr::new(255, 255, 255, 255),
            prefix: 32,
        },
        label: "Broadcast (limited)",
        rfc: "RFC 919",
        anchor: "rfc-919---broadcast-address",
    },
];

/// Find the rule for `input`, most specific match first.
///
/// Matching keys on the input address alone, not on the network the prefix
/// spans: `127.0.0.1/0` covers all of IPv4 yet is reported as Loopback, while
/// `1.2.3.4/4` stays ordinary although its network 0.0.0.0/4 encloses
/// 0.0.0.0/8. The one exception is `0.0.0.0/0`, the default route, which
/// never matches although its address lies in 0.0.0.0/8.
pub fn find_rule(input: CidrInput) -> Option<&'static SpecialRangeRule> {
    find_rule_in(SPECIAL_RANGES, input)
}

/// [`find_rule`] against an arbitrary table. Equal prefixes keep table order.
pub fn find_rule_in(
    table: &'static [SpecialRangeRule],
    input: CidrInput,
) -> Option<&'static SpecialRangeRule> {
    if is_default_route(input) {
        return None;
    }
    table
        .iter()
        .filter(|rule| rule.contains(input.addr))
        .min_by_key(|rule| Reverse(rule.block.prefix))
}

fn is_default_route(input: CidrInput) -> bool {
    input.addr == Ipv4Addr::UNSPECIFIED && input.prefix == 0
}

/// Apply the special-range override to a record computed from `input`.
///
/// Only the host side changes; `network`, `netmask` and `prefix` are kept.
pub fn classify(input: CidrInput, mut record: NetworkRecord) -> NetworkRecord {
    if let Some(rule) = find_rule(input) {
        log::info!("{input} matched special range {}", rule.block);
        record.broadcast = AddrField::Unusable;
        record.hostmin = AddrField::Unusable;
        record.hostmax = AddrField::Unusable;
        record.hosts = HostCount::Unusable;
        record.comment = rule.comment();
        record.rfc_anchor = Some(rule.anchor);
    }
    record
}
