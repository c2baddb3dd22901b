//! Authentication: credential checks, sessions and the identity provider.
//!
//! This module provides:
//! - `credentials`: email shape, password strength and form validation
//! - `Session`: the signed-in identity, in memory only
//! - `IdentityProvider`: the async seam, with `MockIdentityProvider` behind it
//!
//! The mock provider sleeps for a configured latency and then accepts any
//! well-formed email with a non-empty password.

pub mod credentials;
pub mod provider;
pub mod session;

pub use credentials::{
    check_login_form, check_signup_form, rate_password, PasswordRule, PasswordStrength,
    StrengthLabel,
};
pub use provider::{Credentials, IdentityProvider, MockIdentityProvider, Registration};
pub use session::{Provider, Session};
