//! Identity provider seam and the in-memory mock behind it.

use async_trait::async_trait;
use tracing::{debug, info};

use super::credentials::{display_name_from_email, validate_login};
use super::session::Session;
use crate::config::Latency;
use crate::error::AuthError;

/// Email/password pair submitted from the sign-in form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Sign-up request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Anything that can turn credentials into a session.
///
/// The mock accepts any well-formed email; a real implementation would talk
/// to an OAuth provider and a credential database.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    async fn federated_authenticate(&self) -> Result<Session, AuthError>;

    async fn register(&self, registration: &Registration) -> Result<Session, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// In-memory provider with fixed artificial latency
#[derive(Debug, Clone, Default)]
pub struct MockIdentityProvider {
    latency: Latency,
}

impl MockIdentityProvider {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        debug!(email = %credentials.email, "Mock login started");
        tokio::time::sleep(self.latency.login()).await;

        validate_login(&credentials.email, &credentials.password)?;

        let name = display_name_from_email(&credentials.email);
        let session = Session::email(credentials.email.clone(), name);
        info!(session_id = %session.id, "Mock login accepted");
        Ok(session)
    }

    async fn federated_authenticate(&self) -> Result<Session, AuthError> {
        debug!("Mock federated login started");
        tokio::time::sleep(self.latency.federated()).await;
        Ok(Session::federated())
    }

    async fn register(&self, registration: &Registration) -> Result<Session, AuthError> {
        debug!(email = %registration.email, "Mock registration started");
        tokio::time::sleep(self.latency.register()).await;

        // No uniqueness or strength checks here; the sign-up form owns those.
        let session = Session::email(registration.email.clone(), registration.name.clone());
        info!(session_id = %session.id, "Mock registration accepted");
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        tokio::time::sleep(self.latency.logout()).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::auth::Provider;

    fn instant() -> MockIdentityProvider {
        MockIdentityProvider::new(Latency::none())
    }

    #[tokio::test]
    async fn test_login_alex() {
        let session = instant()
            .authenticate(&Credentials::new("alex@example.com", "x"))
            .await
            .unwrap();
        assert_eq!(session.name, "Alex");
        assert_eq!(session.email, "alex@example.com");
        assert_eq!(session.provider, Provider::Email);
    }

    #[tokio::test]
    async fn test_login_rejects_malformed_email() {
        let err = instant()
            .authenticate(&Credentials::new("not-an-email", "x"))
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert!(err.to_string().contains("valid email"));
    }

    #[tokio::test]
    async fn test_login_rejects_empty_password() {
        let result = instant()
            .authenticate(&Credentials::new("alex@example.com", ""))
            .await;
        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_accepts_many_valid_emails() {
        let provider = instant();
        for (email, expected) in [
            ("bob@x.io", "Bob"),
            ("zoe.k@mail.example.org", "Zoe.k"),
            ("1user@host.net", "1user"),
        ] {
            let session = provider
                .authenticate(&Credentials::new(email, "pw"))
                .await
                .unwrap();
            assert_eq!(session.name, expected);
        }
    }

    #[tokio::test]
    async fn test_register_uses_supplied_name() {
        let session = instant()
            .register(&Registration {
                email: "sam@example.com".to_string(),
                password: "weak".to_string(),
                name: "Sam Smith".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(session.name, "Sam Smith");
        assert_eq!(session.provider, Provider::Email);
    }

    #[tokio::test]
    async fn test_federated_login() {
        let session = instant().federated_authenticate().await.unwrap();
        assert_eq!(session.provider, Provider::Federated);
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_waits_for_configured_latency() {
        let provider = MockIdentityProvider::default();
        let started = tokio::time::Instant::now();
        let _ = provider
            .authenticate(&Credentials::new("not-an-email", "x"))
            .await;
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_federated_login_waits_for_configured_latency() {
        let provider = MockIdentityProvider::default();
        let started = tokio::time::Instant::now();
        provider.federated_authenticate().await.unwrap();
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(1500));
        assert!(elapsed < Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_waits_for_configured_latency() {
        let provider = MockIdentityProvider::default();
        let started = tokio::time::Instant::now();
        provider
            .register(&Registration {
                email: "sam@example.com".to_string(),
                password: "Str0ng!pass".to_string(),
                name: "Sam".to_string(),
            })
            .await
            .unwrap();
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(1200));
        assert!(elapsed < Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_out_waits_for_configured_latency() {
        let provider = MockIdentityProvider::default();
        let started = tokio::time::Instant::now();
        provider.sign_out().await.unwrap();
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(500));
        assert!(elapsed < Duration::from_millis(1000));
    }
}
