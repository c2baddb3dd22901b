//! Terminal UI module using ratatui.
//!
//! - `render`: frame layout, navigation bar, status bar and overlays
//! - `input`: keyboard event handling
//! - `styles`: colour palette and per-skill/role styling
//! - `screens`: sign-in, onboarding and the five main screens

pub mod input;
pub mod render;
pub mod screens;
pub mod styles;
