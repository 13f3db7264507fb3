//! Fatal error definitions
//!
//! Every variant ends the invocation. A negative membership answer is not an
//! error; see `verifier::Verdict`.

use std::fmt;
use std::process::ExitCode;

/// Exit status when the team membership is confirmed
pub const EXIT_MEMBER: u8 = 0;
/// Exit status when the token owner is not on the team
pub const EXIT_NOT_MEMBER: u8 = 1;
/// Exit status for missing or unreadable configuration
pub const EXIT_CONFIGURATION: u8 = 2;
/// Exit status for transport failures and non-success API responses
pub const EXIT_NETWORK: u8 = 3;
/// Exit status for response bodies that are not a team list
pub const EXIT_PARSE: u8 = 4;

/// Verification error types
#[derive(Debug)]
pub enum VerifyError {
    /// Required environment variable missing or config file unusable
    Configuration(String),
    /// Request could not be completed (URL stripped, it carries the token)
    Network(reqwest::Error),
    /// Client could not be constructed
    Client(anyhow::Error),
    /// API answered with a non-success status
    Api { status: u16, message: String },
    /// Response body is not a JSON team list
    Parse(serde_json::Error),
}

impl VerifyError {
    /// Process exit status for this error
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Configuration(_) => EXIT_CONFIGURATION,
            Self::Network(_) | Self::Client(_) | Self::Api { .. } => EXIT_NETWORK,
            Self::Parse(_) => EXIT_PARSE,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

impl std::error::Error for VerifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Client(e) => Some(&**e),
            _ => None,
        }
    }
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            Self::Network(e) => write!(f, "Request failed: {}", e),
            Self::Client(e) => write!(f, "Failed to build HTTP client: {}", e),
            Self::Api { status, message } => write!(f, "GitHub API error {}: {}", status, message),
            Self::Parse(e) => write!(f, "Failed to parse team list: {}", e),
        }
    }
}

impl From<reqwest::Error> for VerifyError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.without_url())
    }
}

impl From<serde_json::Error> for VerifyError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
