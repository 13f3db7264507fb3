//! Team list data model
//!
//! Response type definitions for the `GET /user/teams` API. Only the fields
//! the membership check relies on are required; everything else GitHub
//! returns is ignored.

use serde::Deserialize;

/// One team the authenticated user belongs to
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TeamMembership {
    /// Team display name
    pub name: String,

    /// Organization owning the team
    pub organization: Organization,

    /// URL-friendly team name
    #[serde(default)]
    pub slug: Option<String>,

    /// Team ID
    #[serde(default)]
    pub id: Option<u64>,
}

/// Organization summary embedded in a team record
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Organization {
    /// Organization login (identifier)
    pub login: String,
}

/// Every team returned by a single team list call
pub type MembershipList = Vec<TeamMembership>;

impl TeamMembership {
    /// Check if this record is team `team_name` of organization `org_name`
    ///
    /// Both comparisons are exact and case-sensitive.
    pub fn is(&self, org_name: &str, team_name: &str) -> bool {
        self.name == team_name && self.organization.login == org_name
    }
}

/// Parse a team list response body
///
/// Fails on anything other than a JSON array of records carrying `name` and
/// `organization.login`, so a malformed record is never a silent non-match.
pub fn parse_membership_list(body: &str) -> serde_json::Result<MembershipList> {
    serde_json::from_str(body)
}
