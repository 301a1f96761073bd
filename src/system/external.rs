//! Public address lookup.

use crate::error::SystemError;
use crate::models::parse_address;
use std::net::Ipv4Addr;
use std::time::Duration;

/// Ask `url` for the caller's public IPv4 address.
///
/// One GET, no retry. The endpoint must answer with the bare address as text.
pub async fn fetch_external_ip(url: &str, timeout: Duration) -> Result<Ipv4Addr, SystemError> {
    log::info!("Fetching external IP from {url} (timeout {timeout:?})");
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    parse_external_body(&body)
}

/// Parse the plain text answer of an external IP service.
pub fn parse_external_body(body: &str) -> Result<Ipv4Addr, SystemError> {
    parse_address(body.trim()).map_err(|_| SystemError::ExternalResponse {
        body: body.chars().take(64).collect(),
    })
}
