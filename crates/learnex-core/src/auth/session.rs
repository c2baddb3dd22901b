use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of generated session identifiers
const SESSION_ID_LENGTH: usize = 9;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Avatar handed out to email sign-ins
pub const DEFAULT_AVATAR: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=200&h=200&fit=crop&crop=face";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Email,
    Federated,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Email => write!(f, "Email"),
            Provider::Federated => write!(f, "Google"),
        }
    }
}

/// The authenticated identity. Present iff the user is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
    pub provider: Provider,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// A new email-provider session with a fresh identifier
    pub fn email(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: new_session_id(),
            email: email.into(),
            name: name.into(),
            avatar: Some(DEFAULT_AVATAR.to_string()),
            provider: Provider::Email,
            created_at: Utc::now(),
        }
    }

    /// The canned federated account
    pub fn federated() -> Self {
        Self {
            id: "2".to_string(),
            email: "user@gmail.com".to_string(),
            name: "Google User".to_string(),
            avatar: Some(
                "https://images.unsplash.com/photo-1494790108755-2616b332c5cf?w=200&h=200&fit=crop&crop=face"
                    .to_string(),
            ),
            provider: Provider::Federated,
            created_at: Utc::now(),
        }
    }
}

/// Random 9-character base-36 identifier
pub fn new_session_id() -> String {
    let mut rng = rand::thread_rng();
    (0..SESSION_ID_LENGTH)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}
