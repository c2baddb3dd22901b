use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please enter a valid email address and password.")]
    InvalidCredentials,

    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please choose a stronger password")]
    WeakPassword,

    #[error("Identity provider error: {0}")]
    Provider(String),
}

/// Maximum length for provider messages surfaced to the user
const MAX_PROVIDER_MESSAGE_LENGTH: usize = 200;

impl AuthError {
    /// Wrap a provider failure, truncating long messages
    pub fn provider(message: &str) -> Self {
        AuthError::Provider(crate::utils::truncate(message, MAX_PROVIDER_MESSAGE_LENGTH))
    }

    /// True for errors raised before the provider was contacted
    pub fn is_validation(&self) -> bool {
        !matches!(self, AuthError::Provider(_))
    }
}

/// Rejected onboarding transitions. The flow is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OnboardingError {
    #[error("{action} is not available during {step}")]
    InvalidTransition {
        step: &'static str,
        action: &'static str,
    },

    #[error("Please enter your name")]
    EmptyName,

    #[error("Choose a role and a skill first")]
    Incomplete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message() {
        let msg = AuthError::InvalidCredentials.to_string();
        assert!(msg.contains("valid email address and password"));
    }

    #[test]
    fn test_provider_message_truncated() {
        let long = "x".repeat(500);
        match AuthError::provider(&long) {
            AuthError::Provider(msg) => {
                assert!(msg.len() <= MAX_PROVIDER_MESSAGE_LENGTH);
                assert!(msg.ends_with("..."));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_is_validation() {
        assert!(AuthError::MissingFields.is_validation());
        assert!(AuthError::WeakPassword.is_validation());
        assert!(!AuthError::provider("down").is_validation());
    }
}
