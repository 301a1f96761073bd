//! Error types.
//!
//! [`CalcError`] covers everything the calculation core can reject.
//! [`SystemError`] covers the collaborators that talk to the host or the network.

/// Rejected input to the calculation core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// Octet count, octet range or non-numeric octet.
    #[error("Invalid IP address: {input}")]
    MalformedAddress { input: String },

    /// Missing, non-numeric or out of range prefix length.
    #[error("Invalid prefix: {input}")]
    MalformedPrefix { input: String },

    /// Dotted or hex netmask that is not a contiguous run of ones.
    #[error("Invalid netmask: {input}")]
    MalformedNetmask { input: String },
}

impl CalcError {
    pub(crate) fn address(input: &str) -> Self {
        CalcError::MalformedAddress {
            input: input.to_string(),
        }
    }

    pub(crate) fn prefix(input: &str) -> Self {
        CalcError::MalformedPrefix {
            input: input.to_string(),
        }
    }

    pub(crate) fn netmask(input: &str) -> Self {
        CalcError::MalformedNetmask {
            input: input.to_string(),
        }
    }
}

/// Failure of a host or network collaborator.
#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    #[error("Failed to execute command '{cmd}': {reason}")]
    Command { cmd: String, reason: String },

    #[error("No network interface found: {reason}")]
    NoInterface { reason: String },

    #[error("External IP lookup failed: {0}")]
    ExternalLookup(#[from] reqwest::Error),

    #[error("External IP lookup returned an invalid address: {body}")]
    ExternalResponse { body: String },
}
