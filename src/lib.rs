//! IPv4 subnet calculator.
//!
//! Parse an `A.B.C.D/N` expression, compute its network parameters and
//! classify it against the RFC special-use ranges:
//!
//! ```
//! let record = lancalc::compute_from_cidr("192.168.1.1/24").unwrap();
//! assert_eq!(record.network.to_string(), "192.168.1.0");
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod system;

use error::CalcError;
use models::{CidrInput, NetworkRecord};

pub use output::{format_json, format_text, OutputOptions, SentinelStyle};

/// Calculate and classify an already validated input.
pub fn compute(input: CidrInput) -> NetworkRecord {
    processing::classify(input, processing::calculate(input))
}

/// Parse `cidr` and compute its record.
pub fn compute_from_cidr(cidr: &str) -> Result<NetworkRecord, CalcError> {
    let input: CidrInput = cidr.parse()?;
    Ok(compute(input))
}
