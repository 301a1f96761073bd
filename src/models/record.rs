//! Computed subnet record.

use std::net::Ipv4Addr;

/// An address field that a special range may blank out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrField {
    Addr(Ipv4Addr),
    /// Not meaningful for the matched special range.
    Unusable,
}

impl AddrField {
    /// The concrete address, if any.
    pub fn addr(&self) -> Option<Ipv4Addr> {
        match self {
            AddrField::Addr(a) => Some(*a),
            AddrField::Unusable => None,
        }
    }
}

/// Number of usable hosts.
///
/// /31 and /32 get their own markers instead of the integer that ordinary
/// host arithmetic would give (0 and -1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCount {
    Count(u64),
    /// Not meaningful for the matched special range.
    Unusable,
    /// /31 point-to-point link, both addresses usable (RFC 3021).
    TwoUsable,
    /// /32, the single address is the host.
    OneUsable,
}

/// Result of one CIDR evaluation.
///
/// `network` and `netmask` are always concrete; only the host side
/// (`broadcast`, `hostmin`, `hostmax`, `hosts`) can be overridden by a
/// special range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRecord {
    pub network: Ipv4Addr,
    pub prefix: u8,
    pub netmask: Ipv4Addr,
    pub broadcast: AddrField,
    pub hostmin: AddrField,
    pub hostmax: AddrField,
    pub hosts: HostCount,
    /// `"<RFC> <label>"` for a special range, empty otherwise.
    pub comment: String,
    /// URL fragment of the matched rule, used when links are rendered.
    pub rfc_anchor: Option<&'static str>,
}

impl NetworkRecord {
    /// True when a special range matched.
    pub fn is_special(&self) -> bool {
        !self.comment.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addr_field() {
        let a = Ipv4Addr::new(10, 0, 0, 1);
        assert_eq!(AddrField::Addr(a).addr(), Some(a));
        assert_eq!(AddrField::Unusable.addr(), None);
    }
}
