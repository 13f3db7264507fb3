//! GitHub API error enhancement module
//!
//! Turns GitHub error responses into messages an operator can act on.

use serde_json::Value;

/// Structured information about a GitHub API error
#[derive(Debug, Clone)]
pub struct GithubErrorInfo {
    /// HTTP status code
    pub status: u16,
    /// Enhanced message for logs and diagnostics
    pub user_message: String,
    /// Original `message` field from GitHub
    pub original_message: String,
    /// `documentation_url` field from GitHub, if any
    pub documentation_url: Option<String>,
}

/// Enhances a GitHub API error with an actionable message
///
/// # Arguments
/// * `status` - HTTP status code of the response
/// * `body` - Raw response body
///            Expected format: {"message": "...", "documentation_url": "..."}
///
/// Non-JSON bodies are used verbatim as the original message.
pub fn enhance_github_error(status: u16, body: &str) -> GithubErrorInfo {
    let error_json = serde_json::from_str::<Value>(body).ok();

    let original_message = error_json
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "Unknown error".to_string()
            } else {
                trimmed.to_string()
            }
        });

    let documentation_url = error_json
        .as_ref()
        .and_then(|v| v.get("documentation_url"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    let hint = match status {
        401 => Some("Authentication failed, token invalid or expired"),
        403 if original_message.to_lowercase().contains("rate limit") => {
            Some("Rate limited by GitHub")
        }
        403 => Some("Insufficient permissions, token lacks the read:org scope"),
        404 => Some("Team list endpoint not found"),
        500..=599 => Some("GitHub service temporarily unavailable"),
        _ => None,
    };

    let user_message = match hint {
        Some(hint) => format!("{} ({})", hint, original_message),
        None => original_message.clone(),
    };

    GithubErrorInfo {
        status,
        user_message,
        original_message,
        documentation_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bad_credentials_enhanced() {
        let body = json!({
            "message": "Bad credentials",
            "documentation_url": "https://docs.github.com/rest"
        })
        .to_string();

        let info = enhance_github_error(401, &body);

        assert_eq!(
            info.user_message,
            "Authentication failed, token invalid or expired (Bad credentials)"
        );
        assert_eq!(info.original_message, "Bad credentials");
        assert_eq!(
            info.documentation_url.as_deref(),
            Some("https://docs.github.com/rest")
        );
    }

    #[test]
    fn test_rate_limit_distinguished_from_forbidden() {
        let body = json!({ "message": "API rate limit exceeded for 1.2.3.4." }).to_string();
        let info = enhance_github_error(403, &body);
        assert!(info.user_message.starts_with("Rate limited by GitHub"));

        let body = json!({ "message": "Resource not accessible" }).to_string();
        let info = enhance_github_error(403, &body);
        assert!(info.user_message.contains("read:org"));
    }

    #[test]
    fn test_server_error_enhanced() {
        let info = enhance_github_error(502, r#"{"message": "Server Error"}"#);
        assert!(info.user_message.contains("temporarily unavailable"));
    }

    #[test]
    fn test_unknown_status_keeps_original() {
        let info = enhance_github_error(422, r#"{"message": "Validation Failed"}"#);
        assert_eq!(info.user_message, "Validation Failed");
        assert_eq!(info.status, 422);
    }

    #[test]
    fn test_non_json_body_used_verbatim() {
        let info = enhance_github_error(418, "  teapot\n");
        assert_eq!(info.original_message, "teapot");
        assert!(info.documentation_url.is_none());
    }

    #[test]
    fn test_empty_body_uses_default() {
        let info = enhance_github_error(401, "");
        assert_eq!(info.original_message, "Unknown error");
        assert!(info.user_message.contains("Authentication failed"));
    }
}
