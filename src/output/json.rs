//! JSON output.
//!
//! One compact object per call. Every value is a string, including the host
//! count, and `comment` is always present so scripts can rely on the key set.

use super::{render, OutputOptions};
use crate::models::NetworkRecord;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Field order here is the output order.
#[derive(Serialize)]
struct JsonRecord<'a> {
    network: &'a str,
    prefix: &'a str,
    netmask: &'a str,
    broadcast: &'a str,
    hostmin: &'a str,
    hostmax: &'a str,
    hosts: &'a str,
    comment: &'a str,
}

#[derive(Serialize)]
struct JsonInterface {
    address: String,
    prefix: String,
}

#[derive(Serialize)]
struct JsonExternal {
    external_ip: String,
}

#[derive(Serialize)]
struct JsonError<'a> {
    error: &'a str,
}

pub fn format_json(
    record: &NetworkRecord,
    opts: OutputOptions,
) -> Result<String, serde_json::Error> {
    let f = render(record, opts);
    serde_json::to_string(&JsonRecord {
        network: &f.network,
        prefix: &f.prefix,
        netmask: &f.netmask,
        broadcast: &f.broadcast,
        hostmin: &f.hostmin,
        hostmax: &f.hostmax,
        hosts: &f.hosts,
        comment: &f.comment,
    })
}

pub fn format_json_interface(addr: Ipv4Addr, prefix: u8) -> Result<String, serde_json::Error> {
    serde_json::to_string(&JsonInterface {
        address: addr.to_string(),
        prefix: format!("/{prefix}"),
    })
}

pub fn format_json_external(addr: Ipv4Addr) -> Result<String, serde_json::Error> {
    serde_json::to_string(&JsonExternal {
        external_ip: addr.to_string(),
    })
}

pub fn format_json_error(message: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string(&JsonError { error: message })
}
