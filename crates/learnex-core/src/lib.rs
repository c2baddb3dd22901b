//! Learnex core library.
//!
//! Everything the Learnex front-ends share lives here:
//!
//! - `auth`: mock identity provider, credential validation, sessions
//! - `models`: roles, skills, profiles and the mock content types
//! - `onboarding`: the three-step wizard that produces a profile
//! - `router`: screen selection gated by session and onboarding
//! - `store`: the single owner of application state
//! - `catalog`: canned quests, people, forum posts and progress stats
//! - `config`: user configuration loaded from the platform config dir

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod onboarding;
pub mod router;
pub mod store;
pub mod utils;

pub use config::Config;
pub use error::{AuthError, OnboardingError};
pub use store::{Action, Store};
