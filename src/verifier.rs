//! Team membership verification
//!
//! `run` performs the whole check for an already obtained credential:
//! one team list request, then a scan for the configured organization/team
//! pair. Environment access stays in `main`.

use std::env::VarError;
use std::fmt;
use std::process::ExitCode;

use crate::error::{EXIT_MEMBER, EXIT_NOT_MEMBER, VerifyError};
use crate::github::client::get_user_teams;
use crate::github::model::teams::TeamMembership;
use crate::http_client::{ProxyConfig, build_client};
use crate::model::config::Config;

/// Environment variable holding the OAuth access token
pub const AUTH_TOKEN_ENV: &str = "AUTH_TOKEN";

/// Opaque API access token
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Read the token through an environment lookup function
    ///
    /// The value is not validated beyond being readable as Unicode.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, VerifyError>
    where
        F: FnOnce(&str) -> Result<String, VarError>,
    {
        match lookup(AUTH_TOKEN_ENV) {
            Ok(token) => Ok(Self::new(token)),
            Err(VarError::NotPresent) => Err(VerifyError::Configuration(format!(
                "{} environment variable is not set",
                AUTH_TOKEN_ENV
            ))),
            Err(VarError::NotUnicode(_)) => Err(VerifyError::Configuration(format!(
                "{} environment variable is not valid Unicode",
                AUTH_TOKEN_ENV
            ))),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.0.get(..4.min(self.0.len() / 2)).unwrap_or("");
        write!(f, "Credential({}***)", shown)
    }
}

/// Outcome of a completed membership check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Member,
    NotMember,
}

impl Verdict {
    /// Process exit status for this verdict
    pub fn exit_status(self) -> u8 {
        match self {
            Self::Member => EXIT_MEMBER,
            Self::NotMember => EXIT_NOT_MEMBER,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

impl From<bool> for Verdict {
    fn from(is_member: bool) -> Self {
        if is_member { Self::Member } else { Self::NotMember }
    }
}

/// Check whether `records` contains team `team_name` of organization `org_name`
///
/// Exact, case-sensitive comparison; stops at the first match.
pub fn verify_team(org_name: &str, team_name: &str, records: &[TeamMembership]) -> bool {
    records.iter().any(|team| team.is(org_name, team_name))
}

/// Fetch the token owner's teams and check the configured membership
pub async fn run(credential: &Credential, config: &Config) -> Result<Verdict, VerifyError> {
    tracing::debug!(
        organization = %config.organization,
        team = %config.team,
        "Verifying team membership"
    );

    let proxy = ProxyConfig::from_config(config);
    let client = build_client(proxy.as_ref(), config.timeout_secs, config.tls_backend)
        .map_err(VerifyError::Client)?;

    let records = get_user_teams(&client, config, credential.expose()).await?;
    let verdict = Verdict::from(verify_team(&config.organization, &config.team, &records));

    match verdict {
        Verdict::Member => tracing::info!(
            "Token owner is a member of {}/{}",
            config.organization,
            config.team
        ),
        Verdict::NotMember => tracing::info!(
            "Token owner is not a member of {}/{} ({} teams checked)",
            config.organization,
            config.team,
            records.len()
        ),
    }

    Ok(verdict)
}
