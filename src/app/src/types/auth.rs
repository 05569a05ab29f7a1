use serde::{Deserialize, Serialize};

/// Minimum length the backend accepts for the panel password
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Response of `action=checkPassword`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordSetStatus {
    pub password_set: bool,
}

/// Request to create the initial password or verify it
///
/// Checked by `validate_new_password` before creation; an existing password is
/// sent as typed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordRequest {
    pub password: String,
}

/// Request to replace the existing password
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScriptStatus {
    Success,
    #[default]
    Error,
    Locked,
}

/// Status envelope returned by the password actions of `integrated.sh`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScriptResponse {
    pub status: ScriptStatus,
    #[serde(default)]
    pub message: Option<String>,
    /// Seconds until a lockout expires, only sent with `locked`
    #[serde(default)]
    pub remaining_time: Option<u32>,
}

/// Validate a new password and its confirmation, returning the user-facing error
pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        ));
    }
    if confirmation.is_empty() {
        return Err("Please confirm the password".to_string());
    }
    if password != confirmation {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lockout_response() {
        let response: ScriptResponse = serde_json::from_str(
            r#"{"status":"locked","message":"Too many attempts","remainingTime":125}"#,
        )
        .unwrap();

        assert_eq!(response.status, ScriptStatus::Locked);
        assert_eq!(response.remaining_time, Some(125));
    }

    #[test]
    fn new_password_rules() {
        assert!(validate_new_password("short", "short").is_err());
        assert!(validate_new_password("longenough", "").is_err());
        assert!(validate_new_password("longenough", "different1").is_err());
        assert!(validate_new_password("longenough", "longenough").is_ok());
    }
}
