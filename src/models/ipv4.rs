//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`CidrInput`], the validated `A.B.C.D/N` expression every
//! calculation starts from, along with the mask helpers the calculator uses.

use crate::error::CalcError;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use lancalc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CalcError> {
    if len > MAX_LENGTH {
        Err(CalcError::prefix(&len.to_string()))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        // u64 so a shift by 32 (prefix 0) stays defined
        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Convert a netmask to its prefix length.
///
/// Accepts dotted quad (`255.255.255.0`) and the hex form printed by BSD
/// `ifconfig` (`0xffffff00`). The ones must be contiguous.
pub fn prefix_from_netmask(mask: &str) -> Result<u8, CalcError> {
    let trimmed = mask.trim();
    let bits = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16).map_err(|_| CalcError::netmask(mask))?,
        None => u32::from(parse_address(trimmed).map_err(|_| CalcError::netmask(mask))?),
    };

    if bits.leading_ones() + bits.trailing_zeros() != MAX_LENGTH as u32 {
        return Err(CalcError::netmask(mask));
    }
    Ok(bits.leading_ones() as u8)
}

/// Parse four dot-separated decimal octets.
///
/// Stricter than a plain `u8` parse: no sign, no whitespace, no leading zeros.
pub fn parse_address(input: &str) -> Result<Ipv4Addr, CalcError> {
    let parts: Vec<&str> = input.split('.').collect();
    if parts.len() != 4 {
        return Err(CalcError::address(input));
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts) {
        let digits_only = !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !digits_only || part.len() > 3 || (part.len() > 1 && part.starts_with('0')) {
            return Err(CalcError::address(input));
        }
        *octet = part.parse().map_err(|_| CalcError::address(input))?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Parse a prefix length in `[0, 32]`.
pub fn parse_prefix(input: &str) -> Result<u8, CalcError> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalcError::prefix(input));
    }
    let prefix: u32 = input.parse().map_err(|_| CalcError::prefix(input))?;
    if prefix > MAX_LENGTH as u32 {
        return Err(CalcError::prefix(input));
    }
    Ok(prefix as u8)
}

/// Validated CIDR expression: an IPv4 address and a prefix length (0-32).
///
/// The address is kept as given; it is not masked down to the network.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct CidrInput {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl CidrInput {
    /// Subnet mask for this prefix.
    pub fn netmask(&self) -> Ipv4Addr {
        // prefix is range checked by the parser
        Ipv4Addr::from(get_cidr_mask(self.prefix).unwrap_or(u32::MAX))
    }

    /// Lowest (network) address of the block.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & u32::from(self.netmask()))
    }

    /// Highest (broadcast) address of the block.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.network()) | !u32::from(self.netmask()))
    }

    /// Check if an IP address is contained within this block.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        u32::from(ip) & u32::from(self.netmask()) == u32::from(self.network())
    }
}

impl FromStr for CidrInput {
    type Err = CalcError;

    /// Parse `A.B.C.D/N`.
    ///
    /// A missing separator is a prefix error; anything after the first `/`
    /// must be a plain decimal prefix.
    fn from_str(addr_cidr: &str) -> Result<CidrInput, CalcError> {
        let addr_cidr = addr_cidr.trim();
        let (addr, prefix) = addr_cidr
            .split_once('/')
            .ok_or_else(|| CalcError::prefix(addr_cidr))?;

        let addr = parse_address(addr)?;
        let prefix = parse_prefix(prefix)?;
        log::debug!("parsed {addr_cidr} -> addr={addr} prefix={prefix}");
        Ok(CidrInput { addr, prefix })
    }
}

impl std::fmt::Display for CidrInput {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(1).unwrap(), 0x80000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(31).unwrap(), 0xFFFFFFFE);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_network_and_broadcast() {
        let c: CidrInput = "192.168.1.42/24".parse().unwrap();
        assert_eq!(c.network(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(c.broadcast(), Ipv4Addr::new(192, 168, 1, 255));

        let c: CidrInput = "192.168.1.42/16".parse().unwrap();
        assert_eq!(c.network(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(c.broadcast(), Ipv4Addr::new(192, 168, 255, 255));

        let c: CidrInput = "192.168.1.42/32".parse().unwrap();
        assert_eq!(c.network(), c.addr);
        assert_eq!(c.broadcast(), c.addr);

        let c: CidrInput = "192.168.1.42/0".parse().unwrap();
        assert_eq!(c.network(), Ipv4Addr::UNSPECIFIED);
        assert_eq!(c.broadcast(), Ipv4Addr::BROADCAST);
    }

    #[test]
    fn test_parse_cidr() {
        let c: CidrInput = "192.168.1.1/24".parse().unwrap();
        assert_eq!(c.addr, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(c.prefix, 24);
        assert_eq!(c.to_string(), "192.168.1.1/24");

        let c: CidrInput = "  0.0.0.0/0 ".parse().unwrap();
        assert_eq!(c.prefix, 0);
        assert_eq!("10.0.0.1/032".parse::<CidrInput>().unwrap().prefix, 32);
    }

    #[test]
    fn test_parse_cidr_bad_address() {
        for input in [
            "256.1.1.1/24",
            "1.2.3/24",
            "1.2.3.4.5/24",
            "a.b.c.d/24",
            "1..2.3/24",
            "/24",
            "01.2.3.4/24",
            "+1.2.3.4/24",
        ] {
            let err = input.parse::<CidrInput>().unwrap_err();
            assert!(
                matches!(err, CalcError::MalformedAddress { .. }),
                "{input} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_cidr_bad_prefix() {
        for input in [
            "1.2.3.4",
            "1.2.3.4/",
            "1.2.3.4/33",
            "1.2.3.4/abc",
            "1.2.3.4/-1",
            "1.2.3.4/+8",
            "1.2.3.4/24/8",
            "1.2.3.4/99999999999",
        ] {
            let err = input.parse::<CidrInput>().unwrap_err();
            assert!(
                matches!(err, CalcError::MalformedPrefix { .. }),
                "{input} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_error_reports_offending_input() {
        assert_eq!(
            "300.1.1.1/24".parse::<CidrInput>().unwrap_err().to_string(),
            "Invalid IP address: 300.1.1.1"
        );
        assert_eq!(
            "1.1.1.1/40".parse::<CidrInput>().unwrap_err().to_string(),
            "Invalid prefix: 40"
        );
    }

    #[test]
    fn test_prefix_from_netmask() {
        assert_eq!(prefix_from_netmask("255.255.255.0").unwrap(), 24);
        assert_eq!(prefix_from_netmask("255.255.255.255").unwrap(), 32);
        assert_eq!(prefix_from_netmask("0.0.0.0").unwrap(), 0);
        assert_eq!(prefix_from_netmask("255.255.240.0").unwrap(), 20);
        assert_eq!(prefix_from_netmask("0xffffff00").unwrap(), 24);
        assert_eq!(prefix_from_netmask("0xfffffffe").unwrap(), 31);
        assert!(prefix_from_netmask("255.0.255.0").is_err());
        assert!(prefix_from_netmask("0.255.255.255").is_err());
        assert!(prefix_from_netmask("255.255.255").is_err());
        assert!(prefix_from_netmask("0xzz").is_err());
    }

    #[test]
    fn test_contains() {
        let block = CidrInput {
            addr: Ipv4Addr::new(169, 254, 0, 0),
            prefix: 16,
        };
        assert!(block.contains(Ipv4Addr::new(169, 254, 10, 20)));
        assert!(!block.contains(Ipv4Addr::new(169, 253, 255, 255)));

        // host bits of the block address do not matter
        let host: CidrInput = "169.254.77.1/16".parse().unwrap();
        assert!(host.contains(Ipv4Addr::new(169, 254, 0, 1)));

        let everything: CidrInput = "0.0.0.0/0".parse().unwrap();
        assert!(everything.contains(Ipv4Addr::BROADCAST));
    }
}
