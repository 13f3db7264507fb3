//! Team list API call
//!
//! A single GET with the token in the `access_token` query parameter.
//! No retries and no pagination.

use reqwest::Client;

use crate::error::VerifyError;
use crate::github::errors::enhance_github_error;
use crate::github::model::teams::{MembershipList, parse_membership_list};
use crate::model::config::Config;

/// Build the team list URL for a token
pub fn user_teams_url(config: &Config, token: &str) -> String {
    format!(
        "{}?access_token={}",
        config.user_teams_url(),
        urlencoding::encode(token)
    )
}

/// Fetch the teams of the token owner
pub async fn get_user_teams(
    client: &Client,
    config: &Config,
    token: &str,
) -> Result<MembershipList, VerifyError> {
    tracing::debug!("Getting team list: {}", config.user_teams_url());

    let response = client.get(user_teams_url(config, token)).send().await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let error_info = enhance_github_error(status.as_u16(), &body);
        tracing::debug!(
            original_message = %error_info.original_message,
            documentation_url = ?error_info.documentation_url,
            "GitHub API error enhanced"
        );
        return Err(VerifyError::Api {
            status: error_info.status,
            message: error_info.user_message,
        });
    }

    let teams = parse_membership_list(&body)?;
    tracing::debug!("Received {} team records", teams.len());
    for team in &teams {
        tracing::trace!(
            id = ?team.id,
            slug = ?team.slug,
            "Team {}/{}",
            team.organization.login,
            team.name
        );
    }
    Ok(teams)
}
