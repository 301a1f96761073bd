//! Domain models for the subnet calculator.
//!
//! - [`CidrInput`] - validated `A.B.C.D/N` expression
//! - [`NetworkRecord`] - computed subnet parameters

mod ipv4;
mod record;

// Re-export public types
pub use ipv4::{
    get_cidr_mask, parse_address, parse_prefix, prefix_from_netmask, CidrInput, MAX_LENGTH,
};
pub use record::{AddrField, HostCount, NetworkRecord};
