//! Per-view rendering.

pub mod auth;
pub mod dashboard;
pub mod forum;
pub mod mentors;
pub mod onboarding;
pub mod profile;
pub mod progress;
