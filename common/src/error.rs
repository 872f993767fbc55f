use thiserror::Error;

/// Errors raised while turning raw input into credential records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// The MAC address has the wrong length or contains non-hex characters.
    #[error("Invalid MAC address {reason}: {input}")]
    InvalidFormat {
        input: String,
        reason: FormatIssue,
    },

    /// The Wiegand 26-bit facility code does not fit in 8 bits.
    #[error("Facility code must be 0-255, got {0}")]
    InvalidFacilityCode(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    Length,
    Characters,
}

impl std::fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatIssue::Length => write!(f, "length"),
            FormatIssue::Characters => write!(f, "characters"),
        }
    }
}
