//! Runtime configuration.
//!
//! Defaults are constants; the `LANCALC_*` environment variables (optionally
//! from a `.env` file) override them, and command line flags override both.

use crate::output::SentinelStyle;
use std::time::Duration;

pub const REPO_URL: &str = "https://github.com/lancalc/lancalc";

/// Prefix assumed when the platform tools report nothing usable.
pub const DEFAULT_PREFIX: u8 = 24;

/// Destination whose route picks the primary interface. Nothing is sent.
pub const ROUTE_TARGET: &str = "8.8.8.8:80";

pub const DEFAULT_EXTERNAL_IP_URL: &str = "https://api.ipify.org";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Which output surface a sentinel convention applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Text,
    Json,
}

/// Sentinel convention for `channel`: per-channel variable, then the shared
/// one, then `*`.
pub fn sentinel_style(channel: Channel) -> SentinelStyle {
    let channel_var = match channel {
        Channel::Text => "LANCALC_TEXT_SENTINEL",
        Channel::Json => "LANCALC_JSON_SENTINEL",
    };
    sentinel_style_from(channel_var, "LANCALC_SENTINEL")
}

fn sentinel_style_from(channel_var: &str, shared_var: &str) -> SentinelStyle {
    [channel_var, shared_var]
        .iter()
        .find_map(|var| env_parse(var))
        .unwrap_or_default()
}

pub fn external_ip_url() -> String {
    std::env::var("LANCALC_EXTERNAL_IP_URL")
        .unwrap_or_else(|_| DEFAULT_EXTERNAL_IP_URL.to_string())
}

pub fn timeout() -> Duration {
    Duration::from_secs(env_parse("LANCALC_TIMEOUT_SECS").unwrap_or(DEFAULT_TIMEOUT_SECS))
}

fn env_parse<T: std::str::FromStr>(var: &str) -> Option<T> {
    let value = std::env::var(var).ok()?;
    match value.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("Ignoring {var}={value}: not a valid value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable names so they can run in parallel.

    #[test]
    fn test_env_parse() {
        std::env::set_var("LANCALC_TEST_PARSE_OK", " 42 ");
        std::env::set_var("LANCALC_TEST_PARSE_BAD", "forty");
        assert_eq!(env_parse::<u64>("LANCALC_TEST_PARSE_OK"), Some(42));
        assert_eq!(env_parse::<u64>("LANCALC_TEST_PARSE_BAD"), None);
        assert_eq!(env_parse::<u64>("LANCALC_TEST_PARSE_UNSET"), None);
        assert_eq!(env_parse::<SentinelStyle>("LANCALC_TEST_PARSE_OK"), None);
    }

    #[test]
    fn test_sentinel_style_precedence() {
        let shared = "LANCALC_TEST_SHARED_SENTINEL";
        std::env::set_var(shared, "dash");
        std::env::set_var("LANCALC_TEST_JSON_SENTINEL", "asterisk");
        std::env::set_var("LANCALC_TEST_BAD_SENTINEL", "hyphen");

        // channel variable beats the shared one
        assert_eq!(
            sentinel_style_from("LANCALC_TEST_JSON_SENTINEL", shared),
            SentinelStyle::Asterisk
        );
        // unset or invalid channel variable falls through to the shared one
        assert_eq!(
            sentinel_style_from("LANCALC_TEST_TEXT_SENTINEL", shared),
            SentinelStyle::Dash
        );
        assert_eq!(
            sentinel_style_from("LANCALC_TEST_BAD_SENTINEL", shared),
            SentinelStyle::Dash
        );
        // nothing set: asterisk
        assert_eq!(
            sentinel_style_from("LANCALC_TEST_TEXT_SENTINEL", "LANCALC_TEST_NO_SENTINEL"),
            SentinelStyle::Asterisk
        );
    }
}
