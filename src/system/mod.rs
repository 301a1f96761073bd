//! Host and network collaborators.
//!
//! Nothing in the calculation core calls these; the binary uses them to
//! find an address to feed into it.
//! - [`cli`] - command execution
//! - [`interface`] - local interface address and prefix
//! - [`external`] - public address lookup over HTTP

mod cli;
mod external;
mod interface;

pub use cli::run;
pub use external::{fetch_external_ip, parse_external_body};
pub use interface::{
    detect_local_interface, detect_prefix, parse_ifconfig, parse_ip_addr_show, parse_ipconfig,
    primary_address, primary_address_via,
};
