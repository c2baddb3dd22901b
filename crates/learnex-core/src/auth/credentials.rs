//! Credential shape checks and password strength rules.
//!
//! None of this verifies anything against a real account. Emails only need
//! to look like `local@domain.tld`; strength only matters for sign-up.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::AuthError;

static EMAIL_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

fn email_pattern() -> Option<&'static Regex> {
    EMAIL_PATTERN
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
}

/// Characters that satisfy the "special character" rule
const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Minimum strength score accepted at sign-up
pub const MIN_SIGNUP_STRENGTH: u8 = 70;

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_some_and(|re| re.is_match(email))
}

/// Shape check used by the mock login
pub fn validate_login(email: &str, password: &str) -> Result<(), AuthError> {
    if is_valid_email(email) && !password.is_empty() {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

/// Email local-part with the first letter upper-cased: "alex@x.io" -> "Alex"
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    crate::utils::capitalize_first(local)
}

/// One password rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    Length,
    Uppercase,
    Lowercase,
    Number,
    Special,
}

impl PasswordRule {
    pub const ALL: [PasswordRule; 5] = [
        PasswordRule::Length,
        PasswordRule::Uppercase,
        PasswordRule::Lowercase,
        PasswordRule::Number,
        PasswordRule::Special,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PasswordRule::Length => "At least 8 characters",
            PasswordRule::Uppercase => "One uppercase letter",
            PasswordRule::Lowercase => "One lowercase letter",
            PasswordRule::Number => "One number",
            PasswordRule::Special => "One special character (!@#$%^&*)",
        }
    }

    pub fn test(&self, password: &str) -> bool {
        match self {
            PasswordRule::Length => password.chars().count() >= 8,
            PasswordRule::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            PasswordRule::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            PasswordRule::Number => password.chars().any(|c| c.is_ascii_digit()),
            PasswordRule::Special => password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Medium => write!(f, "Medium"),
            StrengthLabel::Strong => write!(f, "Strong"),
        }
    }
}

/// Result of checking a password against every rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStrength {
    pub passed: Vec<PasswordRule>,
}

impl PasswordStrength {
    pub fn evaluate(password: &str) -> Self {
        Self {
            passed: PasswordRule::ALL
                .into_iter()
                .filter(|r| r.test(password))
                .collect(),
        }
    }

    /// 0, 20, 40, 60, 80 or 100
    pub fn score(&self) -> u8 {
        (self.passed.len() * 100 / PasswordRule::ALL.len()) as u8
    }

    pub fn label(&self) -> StrengthLabel {
        match self.score() {
            s if s < 40 => StrengthLabel::Weak,
            s if s < 70 => StrengthLabel::Medium,
            _ => StrengthLabel::Strong,
        }
    }

    pub fn passes(&self, rule: PasswordRule) -> bool {
        self.passed.contains(&rule)
    }
}

/// Strength meter contents, or `None` for an empty password
pub fn rate_password(password: &str) -> Option<PasswordStrength> {
    if password.is_empty() {
        None
    } else {
        Some(PasswordStrength::evaluate(password))
    }
}

/// Sign-in form check, run before the provider is contacted
pub fn check_login_form(email: &str, password: &str) -> Result<(), AuthError> {
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::MissingFields);
    }
    Ok(())
}

/// Sign-up form checks, in the order the user sees them
pub fn check_signup_form(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), AuthError> {
    if name.is_empty() || email.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err(AuthError::MissingFields);
    }
    if password != confirm {
        return Err(AuthError::PasswordMismatch);
    }
    if PasswordStrength::evaluate(password).score() < MIN_SIGNUP_STRENGTH {
        return Err(AuthError::WeakPassword);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("alex@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.io"));
        assert!(is_valid_email("x@y.z"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("alex@example"));
        assert!(!is_valid_email("alex @example.com"));
        assert!(!is_valid_email("alex@@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_validate_login() {
        assert!(validate_login("alex@example.com", "x").is_ok());
        assert_eq!(
            validate_login("alex@example.com", ""),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            validate_login("not-an-email", "x"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_display_name_from_email() {
        assert_eq!(display_name_from_email("alex@example.com"), "Alex");
        assert_eq!(display_name_from_email("mary.jane@example.com"), "Mary.jane");
        assert_eq!(display_name_from_email("Bob@example.com"), "Bob");
    }

    #[test]
    fn test_strength_scores() {
        assert_eq!(PasswordStrength::evaluate("abc").score(), 20);
        assert_eq!(PasswordStrength::evaluate("abcdefgh").score(), 40);
        assert_eq!(PasswordStrength::evaluate("Abcdefgh").score(), 60);
        assert_eq!(PasswordStrength::evaluate("Abcdefg1").score(), 80);
        assert_eq!(PasswordStrength::evaluate("Abcdef1!").score(), 100);
    }

    #[test]
    fn test_strength_labels() {
        assert_eq!(PasswordStrength::evaluate("abc").label(), StrengthLabel::Weak);
        assert_eq!(PasswordStrength::evaluate("abcdefgh").label(), StrengthLabel::Medium);
        assert_eq!(PasswordStrength::evaluate("Abcdefgh").label(), StrengthLabel::Medium);
        assert_eq!(PasswordStrength::evaluate("Abcdefg1").label(), StrengthLabel::Strong);
    }

    #[test]
    fn test_rate_empty_password() {
        assert_eq!(rate_password(""), None);
        let rating = rate_password("a1").unwrap();
        assert!(rating.passes(PasswordRule::Number));
        assert!(!rating.passes(PasswordRule::Special));
    }

    #[test]
    fn test_check_login_form() {
        assert_eq!(check_login_form("", "x"), Err(AuthError::MissingFields));
        assert_eq!(check_login_form("a@b.c", ""), Err(AuthError::MissingFields));
        assert!(check_login_form("whatever", "x").is_ok());
    }

    #[test]
    fn test_check_signup_form_order() {
        assert_eq!(
            check_signup_form("", "a@b.c", "Abcdef1!", "Abcdef1!"),
            Err(AuthError::MissingFields)
        );
        assert_eq!(
            check_signup_form("Sam", "a@b.c", "Abcdef1!", "Abcdef1?"),
            Err(AuthError::PasswordMismatch)
        );
        assert_eq!(
            check_signup_form("Sam", "a@b.c", "abcdefgh", "abcdefgh"),
            Err(AuthError::WeakPassword)
        );
        assert!(check_signup_form("Sam", "a@b.c", "Abcdefg1", "Abcdefg1").is_ok());
    }
}
