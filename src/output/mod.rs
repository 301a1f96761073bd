//! Output formatting for computed records.
//!
//! - [`text`] - `Label: value` lines
//! - [`json`] - flat JSON object with string values
//!
//! Both channels render the same field list; the sentinel used for host
//! fields blanked by a special range is chosen per channel.

mod json;
mod text;

pub use json::{format_json, format_json_error, format_json_external, format_json_interface};
pub use text::{format_text, format_text_external, format_text_interface};

use crate::config::REPO_URL;
use crate::models::{AddrField, HostCount, NetworkRecord};
use std::str::FromStr;

/// Marker for a host field that does not apply to a special range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SentinelStyle {
    /// `*`
    #[default]
    Asterisk,
    /// `-*`
    Dash,
}

impl SentinelStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentinelStyle::Asterisk => "*",
            SentinelStyle::Dash => "-*",
        }
    }
}

impl FromStr for SentinelStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asterisk" | "*" => Ok(SentinelStyle::Asterisk),
            "dash" | "-*" => Ok(SentinelStyle::Dash),
            _ => Err(format!("unknown sentinel style: {s}")),
        }
    }
}

/// Rendering choices for one output channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputOptions {
    pub sentinel: SentinelStyle,
    /// Append the RFC notes link to special-range comments.
    pub links: bool,
}

/// Record rendered to strings, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RenderedFields {
    pub network: String,
    pub prefix: String,
    pub netmask: String,
    pub broadcast: String,
    pub hostmin: String,
    pub hostmax: String,
    pub hosts: String,
    pub comment: String,
}

pub(crate) fn render(record: &NetworkRecord, opts: OutputOptions) -> RenderedFields {
    let addr = |field: AddrField| match field {
        AddrField::Addr(a) => a.to_string(),
        AddrField::Unusable => opts.sentinel.as_str().to_string(),
    };
    let hosts = match record.hosts {
        HostCount::Count(n) => n.to_string(),
        HostCount::Unusable => opts.sentinel.as_str().to_string(),
        HostCount::TwoUsable => "2*".to_string(),
        HostCount::OneUsable => "1*".to_string(),
    };
    let comment = match record.rfc_anchor {
        Some(anchor) if opts.links && !record.comment.is_empty() => {
            format!(
                "{} ({REPO_URL}/blob/main/docs/RFC.md#{anchor})",
                record.comment
            )
        }
        _ => record.comment.clone(),
    };

    RenderedFields {
        network: record.network.to_string(),
        prefix: format!("/{}", record.prefix),
        netmask: record.netmask.to_string(),
        broadcast: addr(record.broadcast),
        hostmin: addr(record.hostmin),
        hostmax: addr(record.hostmax),
        hosts,
        comment,
    }
}
